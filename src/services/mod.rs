//! Upstream data sources.

pub mod market_data;
pub mod yahoo;

pub use market_data::PriceSource;
pub use yahoo::YahooPriceSource;
