//! Unit tests for RSI indicator

use momentum_ranker::indicators::momentum::{calculate_rsi, calculate_rsi_default};

use crate::support::{assert_close, geometric_prices};

/// 100, 101, 100, 101, ...
fn zigzag(count: usize) -> Vec<f64> {
    (0..count)
        .map(|i| if i % 2 == 0 { 100.0 } else { 101.0 })
        .collect()
}

#[test]
fn test_rsi_insufficient_data() {
    assert!(calculate_rsi_default(&zigzag(14)).is_none());
    assert!(calculate_rsi_default(&zigzag(15)).is_some());
}

#[test]
fn test_rsi_balanced_seed() {
    assert_close(calculate_rsi(&zigzag(15), 14).unwrap(), 50.0);
}

#[test]
fn test_rsi_wilder_smoothing() {
    // Seed 0.5 / 0.5, then one more gain of 1:
    // gain = (0.5 * 13 + 1) / 14, loss = (0.5 * 13) / 14
    let rsi = calculate_rsi(&zigzag(16), 14).unwrap();
    let rs = 7.5 / 6.5;
    assert_close(rsi, 100.0 - 100.0 / (1.0 + rs));
    assert_eq!(calculate_rsi_default(&zigzag(16)), Some(54));
}

#[test]
fn test_rsi_no_losses_is_100() {
    assert_eq!(calculate_rsi_default(&geometric_prices(40, 100.0, 0.01)), Some(100));
}

#[test]
fn test_rsi_no_gains_is_0() {
    assert_eq!(calculate_rsi_default(&geometric_prices(40, 100.0, -0.01)), Some(0));
}
