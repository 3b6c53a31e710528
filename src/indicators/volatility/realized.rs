//! Annualized realized volatility over the trailing window

use crate::common::math;
use crate::models::indicators::{
    Period, Volatility, TRADING_DAYS_PER_MONTH, TRADING_DAYS_PER_YEAR,
};

/// Annualized volatility (percent) of the `window` prices ending `skip`
/// samples before the latest one.
///
/// The window must be complete; a partial window yields `None`.
pub fn calculate_volatility(prices: &[f64], window: usize, skip: usize) -> Option<f64> {
    if window < 3 {
        return None;
    }
    let end = prices.len().checked_sub(skip)?;
    let start = end.checked_sub(window)?;

    let returns = math::simple_returns(&prices[start..end]);
    let std = math::sample_std_dev(&returns)?;
    Some(std * (TRADING_DAYS_PER_YEAR as f64).sqrt() * 100.0)
}

/// Volatility over the trailing window for `period`.
pub fn calculate_period_volatility(prices: &[f64], period: Period) -> Option<f64> {
    match period {
        Period::OneMonth => None,
        _ => calculate_volatility(prices, period.trading_days(), 0),
    }
}

/// Volatility over the window that ends where the latest month begins.
pub fn calculate_alternate_volatility(prices: &[f64], period: Period) -> Option<f64> {
    match period {
        Period::OneMonth => None,
        _ => calculate_volatility(prices, period.trading_days(), TRADING_DAYS_PER_MONTH),
    }
}

pub fn calculate_volatilities(prices: &[f64]) -> Volatility {
    let mut volatility = Volatility::default();
    for period in Period::ALL {
        volatility.set(period, calculate_period_volatility(prices, period));
    }
    volatility
}

pub fn calculate_alternate_volatilities(prices: &[f64]) -> Volatility {
    let mut volatility = Volatility::default();
    for period in Period::ALL {
        volatility.set(period, calculate_alternate_volatility(prices, period));
    }
    volatility
}
