//! Volume indicators: liquidity

pub mod liquidity;

pub use liquidity::*;
