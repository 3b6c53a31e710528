//! Shared data models spanning the pipeline stages.

pub mod indicators;
pub mod instrument;
pub mod market;
pub mod record;

pub use indicators::{
    Indicators, Liquidity, Period, Returns, Volatility, TRADING_DAYS_PER_MONTH,
    TRADING_DAYS_PER_YEAR,
};
pub use instrument::InstrumentMetadata;
pub use market::{Bar, PriceSeries, RawHistory};
pub use record::{InstrumentRecord, ScoredRecord, TrendLabel};
