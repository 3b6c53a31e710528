//! Per-instrument records produced by one refresh.

use serde::{Deserialize, Serialize};

use crate::models::indicators::{Liquidity, Returns, Volatility};
use crate::models::instrument::InstrumentMetadata;

/// Trend classification derived from 1/3/12-month returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrendLabel {
    Leader,
    Emerging,
    Recovering,
    Fading,
    Laggard,
}

impl TrendLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            TrendLabel::Leader => "Leader",
            TrendLabel::Emerging => "Emerging",
            TrendLabel::Recovering => "Recovering",
            TrendLabel::Fading => "Fading",
            TrendLabel::Laggard => "Laggard",
        }
    }
}

impl std::fmt::Display for TrendLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata plus computed indicators, before cross-sectional scoring.
///
/// Absent values serialize as `null` so consumers can render "no data"
/// instead of zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstrumentRecord {
    #[serde(flatten)]
    pub metadata: InstrumentMetadata,
    pub current_price: Option<f64>,
    pub returns: Returns,
    pub alternate_returns: Returns,
    pub rsi: Option<u8>,
    pub liquidity: Option<Liquidity>,
    pub above_long_ma: Option<bool>,
    pub volatility: Volatility,
    pub alternate_volatility: Volatility,
    /// A redenomination jump was detected and corrected in this series.
    pub currency_adjusted: bool,
}

impl InstrumentRecord {
    pub fn symbol(&self) -> &str {
        &self.metadata.symbol
    }
}

/// A record with its composite score and label attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredRecord {
    #[serde(flatten)]
    pub record: InstrumentRecord,
    pub score: f64,
    pub label: Option<TrendLabel>,
}

impl ScoredRecord {
    pub fn symbol(&self) -> &str {
        self.record.symbol()
    }
}
