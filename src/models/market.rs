//! Daily bars and price series as delivered by a price source.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One daily observation for an instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub date: NaiveDate,
    pub close: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
}

impl Bar {
    pub fn new(date: NaiveDate, close: f64) -> Self {
        Self {
            date,
            close,
            volume: None,
        }
    }

    pub fn with_volume(mut self, volume: f64) -> Self {
        self.volume = Some(volume);
        self
    }
}

/// Raw daily history for one symbol, oldest bar first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawHistory {
    pub symbol: String,
    pub bars: Vec<Bar>,
}

impl RawHistory {
    pub fn new(symbol: impl Into<String>, bars: Vec<Bar>) -> Self {
        Self {
            symbol: symbol.into(),
            bars,
        }
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}

/// Date-ascending, duplicate-free price series with strictly positive closes.
///
/// Volumes stay aligned with prices; a missing volume is kept as `None` so
/// that the trailing liquidity window still lines up with the price window.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceSeries {
    dates: Vec<NaiveDate>,
    prices: Vec<f64>,
    volumes: Vec<Option<f64>>,
}

impl PriceSeries {
    /// Build a series from raw bars.
    ///
    /// Bars with non-finite or non-positive closes are dropped, bars are
    /// sorted by date and a repeated date keeps the last bar seen for it.
    pub fn from_bars(bars: &[Bar]) -> Self {
        let mut valid: Vec<&Bar> = bars
            .iter()
            .filter(|b| b.close.is_finite() && b.close > 0.0)
            .collect();
        valid.sort_by_key(|b| b.date);

        let mut series = Self::default();
        for bar in valid {
            if series.dates.last() == Some(&bar.date) {
                series.dates.pop();
                series.prices.pop();
                series.volumes.pop();
            }
            series.dates.push(bar.date);
            series.prices.push(bar.close);
            series
                .volumes
                .push(bar.volume.filter(|v| v.is_finite() && *v >= 0.0));
        }
        series
    }

    /// Same dates and volumes with a replacement price vector.
    pub fn with_prices(&self, prices: Vec<f64>) -> Self {
        debug_assert_eq!(prices.len(), self.prices.len());
        Self {
            dates: self.dates.clone(),
            prices,
            volumes: self.volumes.clone(),
        }
    }

    pub fn prices(&self) -> &[f64] {
        &self.prices
    }

    pub fn volumes(&self) -> &[Option<f64>] {
        &self.volumes
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn latest_price(&self) -> Option<f64> {
        self.prices.last().copied()
    }

    pub fn latest_date(&self) -> Option<NaiveDate> {
        self.dates.last().copied()
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}
