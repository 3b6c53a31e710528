//! Environment-driven configuration
//!
//! Values come from the process environment, optionally seeded from a `.env`
//! file by the binaries. Every variable has a default so a bare checkout runs.

use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use crate::error::ConfigError;
use crate::models::instrument::InstrumentMetadata;
use crate::ranking::{ScoringMode, ScoringSettings, ScoringWeights};
use crate::services::yahoo::{DEFAULT_BASE_URL, DEFAULT_RANGE};

pub const DEFAULT_UNIVERSE_PATH: &str = "config/universe.json";
pub const DEFAULT_PACING_MS: u64 = 500;
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 15;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub environment: String,
    pub universe_path: PathBuf,
    pub price_source_url: String,
    pub history_range: String,
    pub request_timeout: Duration,
    pub pacing: Duration,
    /// 0 disables scheduled refreshes.
    pub refresh_interval_seconds: u64,
    pub scoring: ScoringSettings,
    pub output_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let defaults = ScoringWeights::default();
        let weights = ScoringWeights::new(
            parse_var(&get, "WEIGHT_3M", defaults.three_months)?,
            parse_var(&get, "WEIGHT_6M", defaults.six_months)?,
            parse_var(&get, "WEIGHT_12M", defaults.twelve_months)?,
        );
        weights.validate()?;

        let mode = match get("SCORING_MODE") {
            Some(value) => ScoringMode::from_str(&value).map_err(|reason| {
                ConfigError::InvalidVar {
                    name: "SCORING_MODE",
                    value,
                    reason,
                }
            })?,
            None => ScoringMode::default(),
        };

        Ok(Self {
            environment: get("APP_ENV")
                .map(|v| v.trim().to_ascii_lowercase())
                .unwrap_or_else(|| "sandbox".to_string()),
            universe_path: get("UNIVERSE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_UNIVERSE_PATH)),
            price_source_url: get("PRICE_SOURCE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            history_range: get("HISTORY_RANGE").unwrap_or_else(|| DEFAULT_RANGE.to_string()),
            request_timeout: Duration::from_secs(parse_var(
                &get,
                "REQUEST_TIMEOUT_SECONDS",
                DEFAULT_TIMEOUT_SECONDS,
            )?),
            pacing: Duration::from_millis(parse_var(&get, "PACING_MS", DEFAULT_PACING_MS)?),
            refresh_interval_seconds: parse_var(&get, "REFRESH_INTERVAL_SECONDS", 0)?,
            scoring: ScoringSettings {
                weights,
                mode,
                use_alternate: parse_bool(&get, "REMOVE_LATEST_PERIOD")?,
            },
            output_path: get("OUTPUT_PATH").map(PathBuf::from),
        })
    }

    pub fn is_production(&self) -> bool {
        matches!(self.environment.as_str(), "production" | "prod")
    }
}

fn parse_var<G, T>(get: &G, name: &'static str, default: T) -> Result<T, ConfigError>
where
    G: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match get(name) {
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::InvalidVar {
            name,
            reason: e.to_string(),
            value,
        }),
        None => Ok(default),
    }
}

fn parse_bool<G>(get: &G, name: &'static str) -> Result<bool, ConfigError>
where
    G: Fn(&str) -> Option<String>,
{
    match get(name) {
        Some(value) => match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::InvalidVar {
                name,
                value,
                reason: "expected a boolean".to_string(),
            }),
        },
        None => Ok(false),
    }
}

/// Load the universe definition: a JSON array of instruments.
///
/// Expense ratios must be non-negative.
pub fn load_universe(path: &Path) -> Result<Vec<InstrumentMetadata>, ConfigError> {
    let display = path.display().to_string();
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::UniverseIo {
        path: display.clone(),
        source,
    })?;
    let universe: Vec<InstrumentMetadata> =
        serde_json::from_str(&raw).map_err(|source| ConfigError::UniverseParse {
            path: display.clone(),
            source,
        })?;
    if universe.is_empty() {
        return Err(ConfigError::EmptyUniverse { path: display });
    }
    if let Some(bad) = universe
        .iter()
        .find(|i| !i.expense_ratio.is_finite() || i.expense_ratio < 0.0)
    {
        return Err(ConfigError::InvalidExpenseRatio {
            path: display,
            symbol: bad.symbol.clone(),
            value: bad.expense_ratio,
        });
    }
    Ok(universe)
}
