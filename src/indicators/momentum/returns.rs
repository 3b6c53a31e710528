//! Period returns, including the "latest period removed" variant

use crate::common::math;
use crate::models::indicators::{Period, Returns, TRADING_DAYS_PER_MONTH};

/// Index of the price `lookback` samples before `anchor`.
///
/// A k-month lookback may run short by up to k samples (one holiday per
/// month); the reference then clamps to the oldest sample.
fn reference_index(anchor: usize, lookback: usize, tolerance: usize) -> Option<usize> {
    if anchor + tolerance < lookback {
        return None;
    }
    Some(anchor.saturating_sub(lookback))
}

/// Percent return over `period`, measured back from the latest price.
pub fn calculate_period_return(prices: &[f64], period: Period) -> Option<f64> {
    let anchor = prices.len().checked_sub(1)?;
    return_from_anchor(prices, anchor, period)
}

/// Percent return over `period`, measured back from the price one month ago.
///
/// The one-month variant is always `None`: once the latest month is removed
/// there is nothing left to measure.
pub fn calculate_alternate_return(prices: &[f64], period: Period) -> Option<f64> {
    if period == Period::OneMonth {
        return None;
    }
    let anchor = prices.len().checked_sub(1 + TRADING_DAYS_PER_MONTH)?;
    return_from_anchor(prices, anchor, period)
}

fn return_from_anchor(prices: &[f64], anchor: usize, period: Period) -> Option<f64> {
    let reference = reference_index(anchor, period.trading_days(), period.months())?;
    math::percent_change(prices[anchor], prices[reference])
}

/// Returns for every period.
pub fn calculate_returns(prices: &[f64]) -> Returns {
    let mut returns = Returns::default();
    for period in Period::ALL {
        returns.set(period, calculate_period_return(prices, period));
    }
    returns
}

/// Alternate returns for every period.
pub fn calculate_alternate_returns(prices: &[f64]) -> Returns {
    let mut returns = Returns::default();
    for period in Period::ALL {
        returns.set(period, calculate_alternate_return(prices, period));
    }
    returns
}
