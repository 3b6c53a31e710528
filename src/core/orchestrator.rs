//! Sequential, paced fetching of the whole universe

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::core::pacing::Pacer;
use crate::error::SourceError;
use crate::models::market::RawHistory;
use crate::records::MIN_HISTORY;
use crate::services::market_data::PriceSource;

/// Outcome of one batch pass.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchFetchReport {
    #[serde(skip)]
    pub histories: HashMap<String, RawHistory>,
    pub attempted: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub failed_symbols: Vec<String>,
    /// Symbols never requested because shutdown was signalled.
    pub skipped: usize,
}

impl BatchFetchReport {
    pub fn is_total_failure(&self) -> bool {
        self.attempted > 0 && self.succeeded == 0
    }
}

pub struct BatchFetchOrchestrator {
    source: Arc<dyn PriceSource>,
    pacer: Arc<dyn Pacer>,
    shutdown: Option<watch::Receiver<bool>>,
}

impl BatchFetchOrchestrator {
    pub fn new(source: Arc<dyn PriceSource>, pacer: Arc<dyn Pacer>) -> Self {
        Self {
            source,
            pacer,
            shutdown: None,
        }
    }

    /// Stop issuing new requests once `shutdown` turns `true`.
    ///
    /// The request in flight is allowed to finish and its result is kept.
    pub fn with_shutdown(mut self, shutdown: watch::Receiver<bool>) -> Self {
        self.shutdown = Some(shutdown);
        self
    }

    fn shutdown_requested(&self) -> bool {
        self.shutdown.as_ref().is_some_and(|rx| *rx.borrow())
    }

    /// Fetch every symbol one after another.
    ///
    /// A failed symbol is logged and recorded; it never aborts the batch.
    pub async fn fetch_all(&self, symbols: &[String]) -> BatchFetchReport {
        let mut report = BatchFetchReport::default();

        info!(
            source = self.source.name(),
            symbol_count = symbols.len(),
            "BatchFetchOrchestrator: fetching {} symbols",
            symbols.len()
        );

        for (index, symbol) in symbols.iter().enumerate() {
            if self.shutdown_requested() {
                report.skipped = symbols.len() - index;
                warn!(
                    skipped = report.skipped,
                    "BatchFetchOrchestrator: shutdown requested, {} symbols not fetched",
                    report.skipped
                );
                break;
            }

            self.pacer.wait().await;
            report.attempted += 1;

            match self.fetch_one(symbol).await {
                Ok(history) => {
                    debug!(
                        symbol = %symbol,
                        count = history.len(),
                        "BatchFetchOrchestrator: fetched {} bars for {}",
                        history.len(),
                        symbol
                    );
                    report.succeeded += 1;
                    report.histories.insert(symbol.clone(), history);
                }
                Err(e) => {
                    warn!(
                        symbol = %symbol,
                        error = %e,
                        "BatchFetchOrchestrator: fetch failed for {}",
                        symbol
                    );
                    report.failed += 1;
                    report.failed_symbols.push(symbol.clone());
                }
            }
        }

        info!(
            attempted = report.attempted,
            succeeded = report.succeeded,
            failed = report.failed,
            "BatchFetchOrchestrator: batch complete ({} ok, {} failed)",
            report.succeeded,
            report.failed
        );

        report
    }

    async fn fetch_one(&self, symbol: &str) -> Result<RawHistory, SourceError> {
        let history = self.source.fetch_history(symbol).await?;
        if history.len() < MIN_HISTORY {
            return Err(SourceError::InsufficientHistory {
                symbol: symbol.to_string(),
                len: history.len(),
                min: MIN_HISTORY,
            });
        }
        Ok(history)
    }
}
