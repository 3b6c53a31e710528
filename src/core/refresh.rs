//! One refresh cycle: fetch, build, score, label
//!
//! Each cycle owns a [`RefreshContext`] and yields a new [`Generation`].
//! Nothing is carried over between cycles; an old generation is simply
//! dropped by whoever holds it.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use crate::core::orchestrator::{BatchFetchOrchestrator, BatchFetchReport};
use crate::error::RefreshError;
use crate::models::instrument::InstrumentMetadata;
use crate::models::record::{InstrumentRecord, ScoredRecord};
use crate::ranking::{CrossSectionalScorer, ScoringSettings, TrendLabelClassifier};
use crate::records::RecordBuilder;

/// State scoped to a single refresh.
pub struct RefreshContext {
    pub started_at: DateTime<Utc>,
    pub settings: ScoringSettings,
    metadata: HashMap<String, InstrumentMetadata>,
    order: Vec<String>,
}

impl RefreshContext {
    pub fn new(universe: &[InstrumentMetadata], settings: ScoringSettings) -> Self {
        let mut metadata = HashMap::with_capacity(universe.len());
        let mut order = Vec::with_capacity(universe.len());
        for instrument in universe {
            if metadata
                .insert(instrument.symbol.clone(), instrument.clone())
                .is_none()
            {
                order.push(instrument.symbol.clone());
            }
        }
        Self {
            started_at: Utc::now(),
            settings,
            metadata,
            order,
        }
    }

    /// Symbols in universe order, duplicates removed.
    pub fn symbols(&self) -> &[String] {
        &self.order
    }

    pub fn metadata(&self, symbol: &str) -> Option<&InstrumentMetadata> {
        self.metadata.get(symbol)
    }
}

/// Why a symbol is missing from, or caveated in, a generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DataQualityWarning {
    FetchFailed { symbol: String },
    InsufficientHistory { symbol: String },
    CurrencyAdjusted { symbol: String },
}

/// Immutable output of one refresh.
#[derive(Debug, Clone, Serialize)]
pub struct Generation {
    pub generated_at: DateTime<Utc>,
    pub settings: ScoringSettings,
    pub records: Vec<ScoredRecord>,
    pub report: BatchFetchReport,
    /// Fetched but rejected at the record boundary.
    pub rejected_symbols: Vec<String>,
}

impl Generation {
    /// Score and label a complete set of records.
    pub fn assemble(
        records: Vec<InstrumentRecord>,
        settings: ScoringSettings,
        report: BatchFetchReport,
        rejected_symbols: Vec<String>,
    ) -> Self {
        Self {
            generated_at: Utc::now(),
            records: score_universe(records, &settings),
            settings,
            report,
            rejected_symbols,
        }
    }

    /// A new generation over the same records with different settings.
    pub fn rescore(&self, settings: ScoringSettings) -> Self {
        let records = self.records.iter().map(|r| r.record.clone()).collect();
        Self {
            generated_at: self.generated_at,
            records: score_universe(records, &settings),
            settings,
            report: self.report.clone(),
            rejected_symbols: self.rejected_symbols.clone(),
        }
    }

    /// Records by descending score; ties broken by symbol.
    pub fn ranked(&self) -> Vec<&ScoredRecord> {
        let mut ranked: Vec<&ScoredRecord> = self.records.iter().collect();
        ranked.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| a.symbol().cmp(b.symbol()))
        });
        ranked
    }

    pub fn by_category(&self, category: &str) -> Vec<&ScoredRecord> {
        self.ranked()
            .into_iter()
            .filter(|r| r.record.metadata.category.eq_ignore_ascii_case(category))
            .collect()
    }

    pub fn get(&self, symbol: &str) -> Option<&ScoredRecord> {
        self.records.iter().find(|r| r.symbol() == symbol)
    }

    pub fn data_quality_warnings(&self) -> Vec<DataQualityWarning> {
        let mut warnings: Vec<DataQualityWarning> = self
            .report
            .failed_symbols
            .iter()
            .map(|s| DataQualityWarning::FetchFailed { symbol: s.clone() })
            .collect();
        warnings.extend(
            self.rejected_symbols
                .iter()
                .map(|s| DataQualityWarning::InsufficientHistory { symbol: s.clone() }),
        );
        warnings.extend(
            self.records
                .iter()
                .filter(|r| r.record.currency_adjusted)
                .map(|r| DataQualityWarning::CurrencyAdjusted {
                    symbol: r.symbol().to_string(),
                }),
        );
        warnings
    }
}

/// Attach scores and labels to the whole population at once.
///
/// Labels always use the latest-inclusive returns.
pub fn score_universe(
    records: Vec<InstrumentRecord>,
    settings: &ScoringSettings,
) -> Vec<ScoredRecord> {
    let scores = CrossSectionalScorer::score(&records, settings);
    records
        .into_iter()
        .zip(scores)
        .map(|(record, score)| {
            let label = TrendLabelClassifier::classify_returns(&record.returns);
            ScoredRecord {
                record,
                score,
                label,
            }
        })
        .collect()
}

pub struct RefreshCycle {
    orchestrator: Arc<BatchFetchOrchestrator>,
}

impl RefreshCycle {
    pub fn new(orchestrator: Arc<BatchFetchOrchestrator>) -> Self {
        Self { orchestrator }
    }

    pub async fn run(
        &self,
        universe: &[InstrumentMetadata],
        settings: ScoringSettings,
    ) -> Result<Generation, RefreshError> {
        let ctx = RefreshContext::new(universe, settings);
        if ctx.symbols().is_empty() {
            return Err(RefreshError::EmptyUniverse);
        }

        let mut report = self.orchestrator.fetch_all(ctx.symbols()).await;
        if report.is_total_failure() {
            return Err(RefreshError::UniverseUnavailable {
                attempted: report.attempted,
            });
        }

        let histories = std::mem::take(&mut report.histories);
        let mut records = Vec::with_capacity(histories.len());
        let mut rejected = Vec::new();
        for symbol in ctx.symbols() {
            let (Some(history), Some(metadata)) =
                (histories.get(symbol), ctx.metadata(symbol))
            else {
                continue;
            };
            match RecordBuilder::build(metadata, &history.bars) {
                Ok(record) => records.push(record),
                Err(e) => {
                    warn!(
                        symbol = %symbol,
                        error = %e,
                        "RefreshCycle: record rejected for {}",
                        symbol
                    );
                    rejected.push(symbol.clone());
                }
            }
        }

        if records.is_empty() && !rejected.is_empty() {
            return Err(RefreshError::NoUsableHistory {
                rejected: rejected.len(),
            });
        }

        let generation = Generation::assemble(records, ctx.settings, report, rejected);
        info!(
            records = generation.records.len(),
            warnings = generation.data_quality_warnings().len(),
            elapsed_ms = (Utc::now() - ctx.started_at).num_milliseconds(),
            "RefreshCycle: generation ready with {} records",
            generation.records.len()
        );
        Ok(generation)
    }
}
