//! Unit tests for the refresh cycle and generations

use std::sync::Arc;

use momentum_ranker::core::{
    BatchFetchOrchestrator, BatchFetchReport, DataQualityWarning, Generation, NoPacing,
    RefreshCycle, RefreshContext,
};
use momentum_ranker::error::RefreshError;
use momentum_ranker::models::TrendLabel;
use momentum_ranker::ranking::{ScoringMode, ScoringSettings};

use crate::support::{assert_close, flat_record, geometric_prices, metadata, MockSource};

fn cycle(source: MockSource) -> RefreshCycle {
    let orchestrator = BatchFetchOrchestrator::new(Arc::new(source), Arc::new(NoPacing));
    RefreshCycle::new(Arc::new(orchestrator))
}

/// Older half quoted in minor units.
fn redenominated(count: usize, daily_growth: f64) -> Vec<f64> {
    let mut prices = geometric_prices(count, 1.0, daily_growth);
    for p in prices.iter_mut().take(count / 2) {
        *p *= 100.0;
    }
    prices
}

#[test]
fn test_context_deduplicates_universe() {
    let universe = vec![metadata("SPY"), metadata("QQQ"), metadata("SPY")];
    let ctx = RefreshContext::new(&universe, ScoringSettings::default());
    assert_eq!(ctx.symbols(), ["SPY".to_string(), "QQQ".to_string()]);
    assert!(ctx.metadata("QQQ").is_some());
    assert!(ctx.metadata("IWM").is_none());
}

#[tokio::test]
async fn test_run_ranks_and_reports_caveats() {
    let mut stale = geometric_prices(30, 100.0, 0.001);
    stale[3] = 0.0;
    let source = MockSource::new()
        .with_history("SPY", &geometric_prices(300, 100.0, 0.001))
        .with_history("QQQ", &geometric_prices(300, 100.0, 0.002))
        .with_history("VWRL.L", &redenominated(300, 0.0015))
        .with_history("EFA", &stale)
        .with_failure("IWM");
    let universe: Vec<_> = ["SPY", "QQQ", "IWM", "VWRL.L", "EFA"]
        .iter()
        .map(|s| metadata(s))
        .collect();

    let generation = cycle(source)
        .run(&universe, ScoringSettings::default())
        .await
        .unwrap();

    let ranked: Vec<&str> = generation.ranked().iter().map(|r| r.symbol()).collect();
    assert_eq!(ranked, vec!["QQQ", "VWRL.L", "SPY"]);
    assert_close(generation.get("QQQ").unwrap().score, 100.0);
    assert_close(generation.get("SPY").unwrap().score, 100.0 / 3.0);
    assert_eq!(generation.get("SPY").unwrap().label, Some(TrendLabel::Leader));

    assert_eq!(generation.report.failed_symbols, vec!["IWM".to_string()]);
    assert_eq!(generation.rejected_symbols, vec!["EFA".to_string()]);
    assert!(generation.report.histories.is_empty());
    assert_eq!(
        generation.data_quality_warnings(),
        vec![
            DataQualityWarning::FetchFailed {
                symbol: "IWM".to_string()
            },
            DataQualityWarning::InsufficientHistory {
                symbol: "EFA".to_string()
            },
            DataQualityWarning::CurrencyAdjusted {
                symbol: "VWRL.L".to_string()
            },
        ]
    );
}

#[tokio::test]
async fn test_all_fetches_failing_is_an_error() {
    let source = MockSource::new().with_failure("SPY").with_failure("QQQ");
    let universe = vec![metadata("SPY"), metadata("QQQ")];

    let err = cycle(source)
        .run(&universe, ScoringSettings::default())
        .await
        .unwrap_err();

    assert!(matches!(err, RefreshError::UniverseUnavailable { attempted: 2 }));
}

#[tokio::test]
async fn test_every_history_rejected_is_an_error() {
    let mut gappy = geometric_prices(30, 100.0, 0.001);
    gappy[10] = 0.0;
    let source = MockSource::new()
        .with_history("SPY", &gappy)
        .with_history("QQQ", &gappy);
    let universe = vec![metadata("SPY"), metadata("QQQ")];

    let err = cycle(source)
        .run(&universe, ScoringSettings::default())
        .await
        .unwrap_err();

    assert!(matches!(err, RefreshError::NoUsableHistory { rejected: 2 }));
}

#[tokio::test]
async fn test_empty_universe_is_an_error() {
    let err = cycle(MockSource::new())
        .run(&[], ScoringSettings::default())
        .await
        .unwrap_err();
    assert!(matches!(err, RefreshError::EmptyUniverse));
}

#[test]
fn test_rescore_keeps_records() {
    let records = vec![
        flat_record("A", Some(10.0), Some(30.0)),
        flat_record("B", Some(4.0), Some(2.0)),
    ];
    let generation = Generation::assemble(
        records,
        ScoringSettings::default(),
        BatchFetchReport::default(),
        Vec::new(),
    );
    assert_eq!(generation.ranked()[0].symbol(), "A");

    let risk_adjusted = ScoringSettings {
        mode: ScoringMode::RiskAdjusted,
        ..ScoringSettings::default()
    };
    let rescored = generation.rescore(risk_adjusted);
    assert_eq!(rescored.ranked()[0].symbol(), "B");
    assert_eq!(rescored.records.len(), 2);
    assert_eq!(rescored.generated_at, generation.generated_at);
    assert_eq!(rescored.settings.mode, ScoringMode::RiskAdjusted);
    // the original generation is untouched
    assert_eq!(generation.ranked()[0].symbol(), "A");
}

#[test]
fn test_ranked_ties_broken_by_symbol() {
    let records = vec![
        flat_record("C", Some(5.0), None),
        flat_record("B", Some(5.0), None),
        flat_record("A", Some(1.0), None),
    ];
    let generation = Generation::assemble(
        records,
        ScoringSettings::default(),
        BatchFetchReport::default(),
        Vec::new(),
    );
    let ranked: Vec<&str> = generation.ranked().iter().map(|r| r.symbol()).collect();
    assert_eq!(ranked, vec!["B", "C", "A"]);
}

#[test]
fn test_by_category() {
    let mut bond = flat_record("TLT", Some(1.0), None);
    bond.metadata.category = "Bonds".to_string();
    let records = vec![flat_record("SPY", Some(5.0), None), bond];
    let generation = Generation::assemble(
        records,
        ScoringSettings::default(),
        BatchFetchReport::default(),
        Vec::new(),
    );
    let bonds = generation.by_category("bonds");
    assert_eq!(bonds.len(), 1);
    assert_eq!(bonds[0].symbol(), "TLT");
}

#[test]
fn test_generation_serializes_nulls() {
    let records = vec![flat_record("SPY", None, None)];
    let generation = Generation::assemble(
        records,
        ScoringSettings::default(),
        BatchFetchReport::default(),
        Vec::new(),
    );
    let json = serde_json::to_value(&generation).unwrap();
    let record = &json["records"][0];
    assert_eq!(record["symbol"], "SPY");
    assert!(record["returns"]["12m"].is_null());
    assert!(record["label"].is_null());
    assert_eq!(record["score"], 0.0);
}
