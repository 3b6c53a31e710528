//! Momentum Ranker Worker
//!
//! Refreshes the ranking on a fixed interval until interrupted. Each
//! published generation replaces the previous one.

use std::sync::Arc;

use dotenvy::dotenv;
use momentum_ranker::config::{load_universe, AppConfig};
use momentum_ranker::core::{BatchFetchOrchestrator, IntervalPacer, RefreshCycle, RefreshScheduler};
use momentum_ranker::logging;
use momentum_ranker::services::YahooPriceSource;
use tokio::signal;
use tokio::sync::watch;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    let config = AppConfig::from_env()?;
    logging::init_logging(config.is_production());

    info!("Starting Momentum Ranker Worker");
    info!(environment = %config.environment, "Environment");

    if config.refresh_interval_seconds == 0 {
        return Err("REFRESH_INTERVAL_SECONDS must be > 0 for worker".into());
    }

    let universe = load_universe(&config.universe_path)?;
    info!(
        instruments = universe.len(),
        path = %config.universe_path.display(),
        "Loaded {} instruments",
        universe.len()
    );

    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let source = YahooPriceSource::new(
        &config.price_source_url,
        &config.history_range,
        config.request_timeout,
    )?;
    let orchestrator = BatchFetchOrchestrator::new(
        Arc::new(source),
        Arc::new(IntervalPacer::new(config.pacing)),
    )
    .with_shutdown(shutdown_rx.clone());
    let cycle = Arc::new(RefreshCycle::new(Arc::new(orchestrator)));

    let scheduler = RefreshScheduler::new(
        cycle,
        universe,
        config.scoring,
        config.refresh_interval_seconds,
    )
    .map_err(|e| format!("Failed to create scheduler: {}", e))?;

    let mut generations = scheduler.subscribe();
    let output_path = config.output_path.clone();
    let publisher = tokio::spawn(async move {
        while generations.changed().await.is_ok() {
            let latest = generations.borrow_and_update().clone();
            let Some(generation) = latest else {
                continue;
            };
            let top: Vec<String> = generation
                .ranked()
                .iter()
                .take(5)
                .map(|r| format!("{} ({:.1})", r.symbol(), r.score))
                .collect();
            info!(
                records = generation.records.len(),
                failed = generation.report.failed,
                top = %top.join(", "),
                "Generation published"
            );
            for warning in generation.data_quality_warnings() {
                warn!(warning = ?warning, "Data quality caveat");
            }
            if let Some(path) = &output_path {
                match serde_json::to_string_pretty(generation.as_ref()) {
                    Ok(json) => {
                        if let Err(e) = tokio::fs::write(path, json).await {
                            warn!(error = %e, "Failed to write generation");
                        }
                    }
                    Err(e) => warn!(error = %e, "Failed to serialize generation"),
                }
            }
        }
    });

    scheduler.start(shutdown_rx).await;

    info!("Worker started, waiting for shutdown signal...");
    signal::ctrl_c().await?;
    info!("Shutting down worker...");
    shutdown_tx.send_replace(true);
    scheduler.stop().await;
    drop(scheduler);
    publisher.abort();
    info!("Worker stopped");

    Ok(())
}
