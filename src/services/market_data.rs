//! Price source interface for upstream history providers.

use async_trait::async_trait;

use crate::error::SourceError;
use crate::models::market::RawHistory;

#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Daily history for one symbol, oldest bar first.
    async fn fetch_history(&self, symbol: &str) -> Result<RawHistory, SourceError>;

    /// Short name used in logs.
    fn name(&self) -> &'static str;
}
