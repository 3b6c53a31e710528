//! Unit tests for currency redenomination correction

use momentum_ranker::indicators::normalizer::{has_impossible_jump, normalize_prices};

use crate::support::assert_close;

fn assert_series_close(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(expected) {
        assert_close(*a, *e);
    }
}

#[test]
fn test_short_series_unchanged() {
    let empty = normalize_prices(&[]);
    assert!(empty.prices.is_empty());
    assert!(!empty.was_adjusted);

    let single = normalize_prices(&[42.0]);
    assert_eq!(single.prices, vec![42.0]);
    assert!(!single.was_adjusted);
}

#[test]
fn test_older_segment_in_minor_units() {
    let result = normalize_prices(&[150.0, 151.0, 152.0, 1.53, 1.54]);
    assert!(result.was_adjusted);
    assert_series_close(&result.prices, &[1.50, 1.51, 1.52, 1.53, 1.54]);
}

#[test]
fn test_newer_segment_in_minor_units() {
    let result = normalize_prices(&[1.50, 1.51, 152.0, 153.0]);
    assert!(result.was_adjusted);
    assert_series_close(&result.prices, &[1.50, 1.51, 1.52, 1.53]);
}

#[test]
fn test_two_independent_jumps_are_both_corrected() {
    let raw = [150.0, 151.0, 1.52, 1.53, 154.0, 155.0];
    let result = normalize_prices(&raw);
    assert!(result.was_adjusted);
    assert_series_close(&result.prices, &[1.50, 1.51, 1.52, 1.53, 1.54, 1.55]);
    assert!(has_impossible_jump(&raw));
    assert!(!has_impossible_jump(&result.prices));
}

#[test]
fn test_normalization_is_idempotent() {
    let first = normalize_prices(&[150.0, 151.0, 1.52, 1.53, 154.0, 155.0]);
    let second = normalize_prices(&first.prices);
    assert!(!second.was_adjusted);
    assert_eq!(second.prices, first.prices);
}

#[test]
fn test_organic_volatility_not_adjusted() {
    // Swings of 1.3x up and down every day
    let mut prices = vec![100.0];
    for i in 1..60 {
        let last = prices[i - 1];
        prices.push(if i % 2 == 0 { last / 1.3 } else { last * 1.3 });
    }
    let result = normalize_prices(&prices);
    assert!(!result.was_adjusted);
    assert_eq!(result.prices, prices);
}

#[test]
fn test_non_positive_neighbours_skipped() {
    let result = normalize_prices(&[0.0, 100.0, 101.0]);
    assert!(!result.was_adjusted);
    assert_eq!(result.prices, vec![0.0, 100.0, 101.0]);
}
