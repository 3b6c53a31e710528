//! Cross-sectional scoring and trend labelling.

pub mod labels;
pub mod percentile;
pub mod scoring;

pub use labels::TrendLabelClassifier;
pub use percentile::{percentile_rank, percentile_ranks};
pub use scoring::{CrossSectionalScorer, ScoringMode, ScoringSettings, ScoringWeights};
