pub mod calculator;
pub mod normalizer;

pub mod momentum;
pub mod trend;
pub mod volatility;
pub mod volume;

pub use calculator::IndicatorCalculator;
pub use normalizer::{normalize_prices, NormalizedPrices};
