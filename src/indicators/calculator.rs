//! Computes the full indicator set for one normalized series.

use crate::indicators::momentum::{
    calculate_alternate_returns, calculate_returns, calculate_rsi_default,
};
use crate::indicators::trend::is_above_long_ma;
use crate::indicators::volatility::{calculate_alternate_volatilities, calculate_volatilities};
use crate::indicators::volume::calculate_liquidity_default;
use crate::models::indicators::Indicators;
use crate::models::market::PriceSeries;

pub struct IndicatorCalculator;

impl IndicatorCalculator {
    /// Every indicator the record needs. Short histories produce `None`
    /// fields, never an error.
    pub fn compute(series: &PriceSeries) -> Indicators {
        let prices = series.prices();

        Indicators {
            current_price: series.latest_price(),
            returns: calculate_returns(prices),
            alternate_returns: calculate_alternate_returns(prices),
            volatility: calculate_volatilities(prices),
            alternate_volatility: calculate_alternate_volatilities(prices),
            rsi: calculate_rsi_default(prices),
            above_long_ma: is_above_long_ma(prices),
            liquidity: calculate_liquidity_default(series.volumes()),
        }
    }
}
