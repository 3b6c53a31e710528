#![allow(dead_code)]

use std::time::Duration;

use momentum_ranker::services::YahooPriceSource;
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// 2023-01-02 00:00:00 UTC
pub const FIRST_TIMESTAMP: i64 = 1_672_617_600;
pub const DAY: i64 = 86_400;

/// Daily closes growing by `daily_growth`, one per calendar day.
pub fn closes(count: usize, start: f64, daily_growth: f64) -> Vec<Option<f64>> {
    (0..count)
        .map(|i| Some(start * (1.0 + daily_growth).powi(i as i32)))
        .collect()
}

/// A chart payload with identical raw and adjusted closes.
pub fn chart_json(closes: &[Option<f64>]) -> Value {
    chart_json_with_adjusted(closes, closes)
}

pub fn chart_json_with_adjusted(closes: &[Option<f64>], adjusted: &[Option<f64>]) -> Value {
    let timestamps: Vec<i64> = (0..closes.len() as i64)
        .map(|i| FIRST_TIMESTAMP + i * DAY)
        .collect();
    let volumes: Vec<Option<f64>> = closes.iter().map(|c| c.map(|_| 1_500_000.0)).collect();
    json!({
        "chart": {
            "result": [{
                "meta": { "currency": "USD" },
                "timestamp": timestamps,
                "indicators": {
                    "quote": [{ "close": closes, "volume": volumes }],
                    "adjclose": [{ "adjclose": adjusted }]
                }
            }],
            "error": null
        }
    })
}

pub fn chart_path(symbol: &str) -> String {
    format!("/v8/finance/chart/{}", symbol)
}

pub async fn mock_chart(server: &MockServer, symbol: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(chart_path(symbol)))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

pub async fn mock_status(server: &MockServer, symbol: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(chart_path(symbol)))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

pub fn source_for(server: &MockServer) -> YahooPriceSource {
    YahooPriceSource::new(&server.uri(), "2y", Duration::from_secs(5))
        .expect("valid mock server url")
}
