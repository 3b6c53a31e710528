//! Static instrument metadata loaded from the universe definition.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstrumentMetadata {
    pub symbol: String,
    pub short_name: String,
    pub name: String,
    pub category: String,
    /// Annual expense ratio in percent.
    #[serde(default)]
    pub expense_ratio: f64,
}

impl InstrumentMetadata {
    pub fn new(symbol: impl Into<String>, category: impl Into<String>) -> Self {
        let symbol = symbol.into();
        Self {
            short_name: symbol.clone(),
            name: symbol.clone(),
            symbol,
            category: category.into(),
            expense_ratio: 0.0,
        }
    }

    pub fn with_names(mut self, short_name: impl Into<String>, name: impl Into<String>) -> Self {
        self.short_name = short_name.into();
        self.name = name.into();
        self
    }

    pub fn with_expense_ratio(mut self, expense_ratio: f64) -> Self {
        self.expense_ratio = expense_ratio;
        self
    }
}
