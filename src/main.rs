//! One-shot momentum ranking
//!
//! Fetches the configured universe once, prints the ranked table with its
//! data-quality caveats and optionally writes the generation as JSON.

use std::sync::Arc;

use dotenvy::dotenv;
use momentum_ranker::config::{load_universe, AppConfig};
use momentum_ranker::core::{BatchFetchOrchestrator, Generation, IntervalPacer, RefreshCycle};
use momentum_ranker::logging;
use momentum_ranker::models::record::ScoredRecord;
use momentum_ranker::services::YahooPriceSource;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    let config = AppConfig::from_env()?;
    logging::init_logging(config.is_production());

    let universe = load_universe(&config.universe_path)?;
    info!(
        environment = %config.environment,
        instruments = universe.len(),
        "Ranking {} instruments",
        universe.len()
    );

    let source = YahooPriceSource::new(
        &config.price_source_url,
        &config.history_range,
        config.request_timeout,
    )?;
    let orchestrator = BatchFetchOrchestrator::new(
        Arc::new(source),
        Arc::new(IntervalPacer::new(config.pacing)),
    );
    let cycle = RefreshCycle::new(Arc::new(orchestrator));

    let generation = cycle.run(&universe, config.scoring).await?;
    print_generation(&generation);

    if let Some(path) = &config.output_path {
        std::fs::write(path, serde_json::to_string_pretty(&generation)?)?;
        info!(path = %path.display(), "Generation written to {}", path.display());
    }

    Ok(())
}

fn fmt_pct(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:+.1}%", v))
        .unwrap_or_else(|| "n/a".to_string())
}

fn print_row(rank: usize, r: &ScoredRecord) {
    let rec = &r.record;
    println!(
        "{:>3}  {:<8} {:<14} {:>6.1}  {:>8} {:>8} {:>8} {:>8}  {:>4}  {:<5} {:>9}  {}{}",
        rank,
        rec.metadata.symbol,
        rec.metadata.category,
        r.score,
        fmt_pct(rec.returns.one_month),
        fmt_pct(rec.returns.three_months),
        fmt_pct(rec.returns.six_months),
        fmt_pct(rec.returns.twelve_months),
        rec.rsi.map(|v| v.to_string()).unwrap_or_else(|| "n/a".to_string()),
        match rec.above_long_ma {
            Some(true) => "above",
            Some(false) => "below",
            None => "n/a",
        },
        rec.liquidity
            .as_ref()
            .map(|l| l.display.clone())
            .unwrap_or_else(|| "n/a".to_string()),
        r.label.map(|l| l.as_str()).unwrap_or("-"),
        if rec.currency_adjusted { " *" } else { "" },
    );
}

fn print_generation(generation: &Generation) {
    println!(
        "Momentum ranking ({:?}, weights 3M/6M/12M = {}/{}/{}{})",
        generation.settings.mode,
        generation.settings.weights.three_months,
        generation.settings.weights.six_months,
        generation.settings.weights.twelve_months,
        if generation.settings.use_alternate {
            ", latest month removed"
        } else {
            ""
        },
    );
    println!(
        "{:>3}  {:<8} {:<14} {:>6}  {:>8} {:>8} {:>8} {:>8}  {:>4}  {:<5} {:>9}  {}",
        "#", "Symbol", "Category", "Score", "1M", "3M", "6M", "12M", "RSI", "200MA", "AvgVol", "Label"
    );
    for (i, record) in generation.ranked().into_iter().enumerate() {
        print_row(i + 1, record);
    }

    let report = &generation.report;
    println!();
    println!(
        "Fetched {}/{} symbols ({} failed)",
        report.succeeded, report.attempted, report.failed
    );
    let warnings = generation.data_quality_warnings();
    if !warnings.is_empty() {
        println!("Data quality caveats (* = currency units corrected):");
        for warning in warnings {
            println!("  - {:?}", warning);
        }
    }
}
