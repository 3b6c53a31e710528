//! Momentum ranking of a fixed instrument universe.
//!
//! Raw daily histories are cleaned of currency redenomination jumps, turned
//! into returns, volatility, RSI and trend flags, then ranked against each
//! other on a 0–100 percentile scale and tagged with a trend label.

pub mod common;
pub mod config;
pub mod core;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod ranking;
pub mod records;
pub mod services;

pub use crate::core::{BatchFetchOrchestrator, BatchFetchReport, Generation, RefreshCycle};
pub use error::{ConfigError, RecordError, RefreshError, SourceError, WeightsError};
