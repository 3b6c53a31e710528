use serde::{Deserialize, Serialize};

/// Trading samples approximating one calendar month.
pub const TRADING_DAYS_PER_MONTH: usize = 21;

/// Trading samples per year, used to annualize daily volatility.
pub const TRADING_DAYS_PER_YEAR: usize = 252;

/// Lookback periods used for returns and volatility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "1m")]
    OneMonth,
    #[serde(rename = "3m")]
    ThreeMonths,
    #[serde(rename = "6m")]
    SixMonths,
    #[serde(rename = "12m")]
    TwelveMonths,
}

impl Period {
    pub const ALL: [Period; 4] = [
        Period::OneMonth,
        Period::ThreeMonths,
        Period::SixMonths,
        Period::TwelveMonths,
    ];

    pub fn months(self) -> usize {
        match self {
            Period::OneMonth => 1,
            Period::ThreeMonths => 3,
            Period::SixMonths => 6,
            Period::TwelveMonths => 12,
        }
    }

    /// Lookback length in trading samples.
    pub fn trading_days(self) -> usize {
        self.months() * TRADING_DAYS_PER_MONTH
    }

    pub fn label(self) -> &'static str {
        match self {
            Period::OneMonth => "1M",
            Period::ThreeMonths => "3M",
            Period::SixMonths => "6M",
            Period::TwelveMonths => "12M",
        }
    }
}

/// Period returns in percent. `None` means not enough history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Returns {
    #[serde(rename = "1m")]
    pub one_month: Option<f64>,
    #[serde(rename = "3m")]
    pub three_months: Option<f64>,
    #[serde(rename = "6m")]
    pub six_months: Option<f64>,
    #[serde(rename = "12m")]
    pub twelve_months: Option<f64>,
}

impl Returns {
    pub fn get(&self, period: Period) -> Option<f64> {
        match period {
            Period::OneMonth => self.one_month,
            Period::ThreeMonths => self.three_months,
            Period::SixMonths => self.six_months,
            Period::TwelveMonths => self.twelve_months,
        }
    }

    pub fn set(&mut self, period: Period, value: Option<f64>) {
        match period {
            Period::OneMonth => self.one_month = value,
            Period::ThreeMonths => self.three_months = value,
            Period::SixMonths => self.six_months = value,
            Period::TwelveMonths => self.twelve_months = value,
        }
    }
}

/// Annualized volatility in percent. There is no one-month window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Volatility {
    #[serde(rename = "3m")]
    pub three_months: Option<f64>,
    #[serde(rename = "6m")]
    pub six_months: Option<f64>,
    #[serde(rename = "12m")]
    pub twelve_months: Option<f64>,
}

impl Volatility {
    pub fn get(&self, period: Period) -> Option<f64> {
        match period {
            Period::OneMonth => None,
            Period::ThreeMonths => self.three_months,
            Period::SixMonths => self.six_months,
            Period::TwelveMonths => self.twelve_months,
        }
    }

    pub fn set(&mut self, period: Period, value: Option<f64>) {
        match period {
            Period::OneMonth => {}
            Period::ThreeMonths => self.three_months = value,
            Period::SixMonths => self.six_months = value,
            Period::TwelveMonths => self.twelve_months = value,
        }
    }
}

/// Average traded volume over the trailing window.
///
/// `average_volume` is the sortable value; `display` is only for humans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Liquidity {
    pub average_volume: f64,
    pub display: String,
}

/// Everything the calculator derives from one normalized series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Indicators {
    pub current_price: Option<f64>,
    pub returns: Returns,
    pub alternate_returns: Returns,
    pub volatility: Volatility,
    pub alternate_volatility: Volatility,
    pub rsi: Option<u8>,
    pub above_long_ma: Option<bool>,
    pub liquidity: Option<Liquidity>,
}
