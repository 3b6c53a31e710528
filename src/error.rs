//! Error types for the fetch, record and refresh boundaries.
//!
//! The indicator and scoring stages never fail: missing data is `None`.

use thiserror::Error;

/// A single symbol's fetch failed. Recovered by the orchestrator.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("request for {symbol} failed: {source}")]
    Transport {
        symbol: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("price source returned HTTP {status} for {symbol}")]
    Status { symbol: String, status: u16 },

    #[error("malformed payload for {symbol}: {reason}")]
    Malformed { symbol: String, reason: String },

    #[error("history for {symbol} too short: {len} bars < {min}")]
    InsufficientHistory {
        symbol: String,
        len: usize,
        min: usize,
    },

    #[error("invalid price source url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// An instrument could not be turned into a record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("{symbol}: {len} usable prices < {min} required")]
    InsufficientHistory {
        symbol: String,
        len: usize,
        min: usize,
    },
}

/// Caller-side validation of the three scoring weights.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum WeightsError {
    #[error("weight for {period} must be finite and non-negative, got {value}")]
    InvalidWeight { period: &'static str, value: f64 },

    #[error("weights must sum to 100, got {sum}")]
    BadSum { sum: f64 },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {name} has invalid value '{value}': {reason}")]
    InvalidVar {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("failed to read universe file {path}: {source}")]
    UniverseIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse universe file {path}: {source}")]
    UniverseParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("universe file {path} defines no instruments")]
    EmptyUniverse { path: String },

    #[error("universe file {path}: {symbol} has invalid expense ratio {value}")]
    InvalidExpenseRatio {
        path: String,
        symbol: String,
        value: f64,
    },

    #[error(transparent)]
    Weights(#[from] WeightsError),
}

/// The refresh as a whole could not produce a generation.
#[derive(Debug, Error)]
pub enum RefreshError {
    #[error("price source unavailable: all {attempted} symbol fetches failed")]
    UniverseUnavailable { attempted: usize },

    #[error("no usable history: all {rejected} fetched symbols were rejected")]
    NoUsableHistory { rejected: usize },

    #[error("universe is empty")]
    EmptyUniverse,
}
