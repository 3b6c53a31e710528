//! Volatility indicators: annualized realized volatility

pub mod realized;

pub use realized::*;
