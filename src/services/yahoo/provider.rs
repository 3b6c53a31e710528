//! Yahoo-style chart endpoint price source

use std::time::Duration;

use async_trait::async_trait;
use chrono::DateTime;
use tracing::debug;
use url::Url;

use super::messages::{ChartResponse, ChartResult};
use crate::error::SourceError;
use crate::models::market::{Bar, RawHistory};
use crate::services::market_data::PriceSource;

pub const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com/";
pub const DEFAULT_RANGE: &str = "2y";

pub struct YahooPriceSource {
    client: reqwest::Client,
    base_url: Url,
    range: String,
}

impl YahooPriceSource {
    pub fn new(base_url: &str, range: &str, timeout: Duration) -> Result<Self, SourceError> {
        let mut base_url = Url::parse(base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("momentum-ranker/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| SourceError::Transport {
                symbol: String::new(),
                source,
            })?;

        Ok(Self {
            client,
            base_url,
            range: range.to_string(),
        })
    }

    fn chart_url(&self, symbol: &str) -> Result<Url, SourceError> {
        let mut url = self.base_url.join("v8/finance/chart/")?;
        url.path_segments_mut()
            .map_err(|_| SourceError::Malformed {
                symbol: symbol.to_string(),
                reason: "base url cannot carry a path".to_string(),
            })?
            .pop_if_empty()
            .push(symbol);
        url.query_pairs_mut()
            .append_pair("range", &self.range)
            .append_pair("interval", "1d");
        Ok(url)
    }
}

#[async_trait]
impl PriceSource for YahooPriceSource {
    async fn fetch_history(&self, symbol: &str) -> Result<RawHistory, SourceError> {
        let url = self.chart_url(symbol)?;
        debug!(symbol = %symbol, url = %url, "YahooPriceSource: requesting chart");

        let transport = |source: reqwest::Error| SourceError::Transport {
            symbol: symbol.to_string(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                symbol: symbol.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(transport)?;
        let payload: ChartResponse =
            serde_json::from_str(&body).map_err(|e| SourceError::Malformed {
                symbol: symbol.to_string(),
                reason: e.to_string(),
            })?;

        let bars = parse_chart(symbol, payload)?;
        debug!(
            symbol = %symbol,
            count = bars.len(),
            "YahooPriceSource: received {} bars for {}",
            bars.len(),
            symbol
        );
        Ok(RawHistory::new(symbol, bars))
    }

    fn name(&self) -> &'static str {
        "yahoo"
    }
}

/// Turn a chart payload into bars, preferring adjusted closes.
pub fn parse_chart(symbol: &str, payload: ChartResponse) -> Result<Vec<Bar>, SourceError> {
    let malformed = |reason: String| SourceError::Malformed {
        symbol: symbol.to_string(),
        reason,
    };

    if let Some(err) = payload.chart.error {
        return Err(malformed(format!("{}: {}", err.code, err.description)));
    }

    let result: ChartResult = payload
        .chart
        .result
        .and_then(|mut results| if results.is_empty() { None } else { Some(results.remove(0)) })
        .ok_or_else(|| malformed("chart has no result".to_string()))?;

    let quote = result.indicators.quote.into_iter().next();
    let adjusted = result
        .indicators
        .adjclose
        .and_then(|mut a| if a.is_empty() { None } else { Some(a.remove(0).adjclose) })
        .filter(|a| a.len() == result.timestamp.len());

    let (closes, volumes) = match quote {
        Some(q) => (adjusted.unwrap_or(q.close), q.volume),
        None => (
            adjusted.ok_or_else(|| malformed("chart has no quote series".to_string()))?,
            Vec::new(),
        ),
    };

    if closes.len() != result.timestamp.len() {
        return Err(malformed(format!(
            "{} timestamps but {} closes",
            result.timestamp.len(),
            closes.len()
        )));
    }

    let mut bars = Vec::with_capacity(closes.len());
    for (i, (ts, close)) in result.timestamp.iter().zip(closes).enumerate() {
        let Some(close) = close else { continue };
        let Some(date) = DateTime::from_timestamp(*ts, 0).map(|dt| dt.date_naive()) else {
            return Err(malformed(format!("invalid timestamp {}", ts)));
        };
        let mut bar = Bar::new(date, close);
        if let Some(Some(volume)) = volumes.get(i) {
            bar = bar.with_volume(*volume);
        }
        bars.push(bar);
    }

    Ok(bars)
}
