//! Momentum indicators: period returns, RSI

pub mod returns;
pub mod rsi;

pub use returns::*;
pub use rsi::*;
