//! End-to-end refresh over a mocked chart endpoint

use std::sync::Arc;

use momentum_ranker::core::{BatchFetchOrchestrator, DataQualityWarning, NoPacing, RefreshCycle};
use momentum_ranker::error::RefreshError;
use momentum_ranker::models::InstrumentMetadata;
use momentum_ranker::ranking::ScoringSettings;
use wiremock::MockServer;

use crate::test_utils::{chart_json, closes, mock_chart, mock_status, source_for};

fn universe() -> Vec<InstrumentMetadata> {
    vec![
        InstrumentMetadata::new("SPY", "Equity"),
        InstrumentMetadata::new("QQQ", "Equity"),
        InstrumentMetadata::new("TLT", "Bonds"),
        InstrumentMetadata::new("IWM", "Equity"),
    ]
}

fn cycle_for(server: &MockServer) -> RefreshCycle {
    let orchestrator = BatchFetchOrchestrator::new(Arc::new(source_for(server)), Arc::new(NoPacing));
    RefreshCycle::new(Arc::new(orchestrator))
}

#[tokio::test]
async fn refresh_ranks_universe_despite_one_failure() {
    let server = MockServer::start().await;
    mock_chart(&server, "SPY", chart_json(&closes(300, 400.0, 0.001))).await;
    mock_chart(&server, "QQQ", chart_json(&closes(300, 300.0, 0.002))).await;
    mock_chart(&server, "TLT", chart_json(&closes(300, 100.0, -0.0005))).await;
    mock_status(&server, "IWM", 500).await;

    let generation = cycle_for(&server)
        .run(&universe(), ScoringSettings::default())
        .await
        .expect("generation");

    let ranked: Vec<&str> = generation.ranked().iter().map(|r| r.symbol()).collect();
    assert_eq!(ranked, vec!["QQQ", "SPY", "TLT"]);
    assert_eq!(generation.report.attempted, 4);
    assert_eq!(generation.report.failed_symbols, vec!["IWM".to_string()]);
    assert_eq!(
        generation.data_quality_warnings(),
        vec![DataQualityWarning::FetchFailed {
            symbol: "IWM".to_string()
        }]
    );

    let tlt = generation.get("TLT").expect("TLT record");
    assert_eq!(tlt.record.above_long_ma, Some(false));
    assert!(tlt.record.returns.twelve_months.expect("12M return") < 0.0);

    let bonds = generation.by_category("Bonds");
    assert_eq!(bonds.len(), 1);
}

#[tokio::test]
async fn refresh_fails_when_source_is_down() {
    let server = MockServer::start().await;
    for instrument in universe() {
        mock_status(&server, &instrument.symbol, 503).await;
    }

    let err = cycle_for(&server)
        .run(&universe(), ScoringSettings::default())
        .await
        .unwrap_err();

    assert!(matches!(err, RefreshError::UniverseUnavailable { attempted: 4 }));
}
