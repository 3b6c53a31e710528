//! Cross-sectional composite scoring
//!
//! A score is only meaningful relative to the population it was computed
//! against, so scoring always takes the whole universe of one refresh.

use serde::{Deserialize, Serialize};

use crate::error::WeightsError;
use crate::models::indicators::Period;
use crate::models::record::InstrumentRecord;
use crate::ranking::percentile::percentile_ranks;

/// The periods that carry a weight in the composite.
pub const WEIGHTED_PERIODS: [Period; 3] = [
    Period::ThreeMonths,
    Period::SixMonths,
    Period::TwelveMonths,
];

/// Weights in percent for the 3/6/12-month percentiles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub three_months: f64,
    pub six_months: f64,
    pub twelve_months: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            three_months: 40.0,
            six_months: 30.0,
            twelve_months: 30.0,
        }
    }
}

impl ScoringWeights {
    pub fn new(three_months: f64, six_months: f64, twelve_months: f64) -> Self {
        Self {
            three_months,
            six_months,
            twelve_months,
        }
    }

    pub fn get(&self, period: Period) -> f64 {
        match period {
            Period::OneMonth => 0.0,
            Period::ThreeMonths => self.three_months,
            Period::SixMonths => self.six_months,
            Period::TwelveMonths => self.twelve_months,
        }
    }

    pub fn sum(&self) -> f64 {
        self.three_months + self.six_months + self.twelve_months
    }

    /// Check the weights are usable and sum to 100.
    ///
    /// The scorer itself never calls this; it computes with whatever it is given.
    pub fn validate(&self) -> Result<(), WeightsError> {
        for period in WEIGHTED_PERIODS {
            let value = self.get(period);
            if !value.is_finite() || value < 0.0 {
                return Err(WeightsError::InvalidWeight {
                    period: period.label(),
                    value,
                });
            }
        }
        let sum = self.sum();
        if (sum - 100.0).abs() > 1e-6 {
            return Err(WeightsError::BadSum { sum });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringMode {
    /// Rank raw period returns.
    #[default]
    Standard,
    /// Rank return / volatility ratios.
    RiskAdjusted,
}

impl std::str::FromStr for ScoringMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(ScoringMode::Standard),
            "risk_adjusted" | "risk-adjusted" | "sharpe" => Ok(ScoringMode::RiskAdjusted),
            other => Err(format!("unknown scoring mode '{}'", other)),
        }
    }
}

/// Everything that changes the outcome of a scoring pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoringSettings {
    pub weights: ScoringWeights,
    pub mode: ScoringMode,
    /// Use the "latest month removed" returns and volatility.
    pub use_alternate: bool,
}

pub struct CrossSectionalScorer;

impl CrossSectionalScorer {
    /// The value ranked for one record and period under the given settings.
    pub fn metric(
        record: &InstrumentRecord,
        period: Period,
        mode: ScoringMode,
        use_alternate: bool,
    ) -> Option<f64> {
        let (returns, volatility) = if use_alternate {
            (&record.alternate_returns, &record.alternate_volatility)
        } else {
            (&record.returns, &record.volatility)
        };

        let ret = returns.get(period)?;
        match mode {
            ScoringMode::Standard => Some(ret),
            ScoringMode::RiskAdjusted => {
                let vol = volatility.get(period)?;
                if vol == 0.0 {
                    return None;
                }
                Some(ret / vol)
            }
        }
    }

    /// Composite score for every record, in input order.
    pub fn score(universe: &[InstrumentRecord], settings: &ScoringSettings) -> Vec<f64> {
        let mut scores = vec![0.0; universe.len()];

        for period in WEIGHTED_PERIODS {
            let values: Vec<Option<f64>> = universe
                .iter()
                .map(|r| Self::metric(r, period, settings.mode, settings.use_alternate))
                .collect();
            let weight = settings.weights.get(period);

            for (score, pct) in scores.iter_mut().zip(percentile_ranks(&values)) {
                *score += weight * pct;
            }
        }

        scores.iter().map(|s| s / 100.0).collect()
    }
}
