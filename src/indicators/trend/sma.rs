//! SMA (Simple Moving Average) and the long-trend flag

use crate::common::math;

pub const LONG_MA_PERIOD: usize = 200;

/// Simple moving average over the trailing `period` prices.
pub fn calculate_sma(prices: &[f64], period: usize) -> Option<f64> {
    math::sma(prices, period)
}

/// Whether the latest price sits above its 200-sample moving average.
///
/// Never extrapolated from a partial window.
pub fn is_above_long_ma(prices: &[f64]) -> Option<bool> {
    let ma = calculate_sma(prices, LONG_MA_PERIOD)?;
    let current = *prices.last()?;
    Some(current > ma)
}
