//! Cron-based scheduler for periodic refresh cycles

use std::str::FromStr;
use std::sync::Arc;

use cron::Schedule;
use tokio::sync::{watch, RwLock};
use tracing::{error, info, warn};

use crate::core::refresh::{Generation, RefreshCycle};
use crate::models::instrument::InstrumentMetadata;
use crate::ranking::ScoringSettings;

/// Convert an interval into a cron expression (second minute hour day month weekday).
///
/// Only intervals that land on the same offsets every minute, hour or day can
/// be expressed: divisors of 60 seconds, of 60 minutes, of 24 hours, or
/// exactly one day. Anything else returns `None`.
pub fn interval_to_cron(interval_seconds: u64) -> Option<String> {
    const MINUTE: u64 = 60;
    const HOUR: u64 = 60 * MINUTE;
    const DAY: u64 = 24 * HOUR;

    match interval_seconds {
        0 => None,
        s if s < MINUTE => (MINUTE % s == 0).then(|| format!("*/{} * * * * *", s)),
        s if s < HOUR => {
            let minutes = s / MINUTE;
            (s % MINUTE == 0 && HOUR / MINUTE % minutes == 0)
                .then(|| format!("0 */{} * * * *", minutes))
        }
        s if s < DAY => {
            let hours = s / HOUR;
            (s % HOUR == 0 && DAY / HOUR % hours == 0)
                .then(|| format!("0 0 */{} * * *", hours))
        }
        DAY => Some("0 0 0 * * *".to_string()),
        _ => None,
    }
}

/// Runs a refresh on every tick and publishes the latest generation.
pub struct RefreshScheduler {
    cycle: Arc<RefreshCycle>,
    universe: Arc<Vec<InstrumentMetadata>>,
    settings: ScoringSettings,
    schedule: Schedule,
    latest: Arc<watch::Sender<Option<Arc<Generation>>>>,
    handle: Arc<RwLock<Option<tokio::task::JoinHandle<()>>>>,
}

impl RefreshScheduler {
    /// Create a new scheduler
    ///
    /// # Arguments
    /// * `cycle` - Refresh pipeline to run on each tick
    /// * `universe` - Instruments to rank
    /// * `interval_seconds` - Refresh interval in seconds (0 = disabled)
    pub fn new(
        cycle: Arc<RefreshCycle>,
        universe: Vec<InstrumentMetadata>,
        settings: ScoringSettings,
        interval_seconds: u64,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        if interval_seconds == 0 {
            return Err("Scheduler disabled: interval_seconds is 0".into());
        }

        let cron_expr = interval_to_cron(interval_seconds).ok_or_else(|| {
            format!(
                "Refresh interval {}s cannot be expressed as a cron schedule \
                 (use a divisor of 60s, 60m or 24h, or exactly 86400s)",
                interval_seconds
            )
        })?;
        let schedule = Schedule::from_str(&cron_expr)
            .map_err(|e| format!("Invalid cron expression '{}': {}", cron_expr, e))?;

        info!(
            interval = interval_seconds,
            cron = %cron_expr,
            instruments = universe.len(),
            "RefreshScheduler: created with interval {}s (cron: {})",
            interval_seconds,
            cron_expr
        );

        let (latest, _) = watch::channel(None);
        Ok(Self {
            cycle,
            universe: Arc::new(universe),
            settings,
            schedule,
            latest: Arc::new(latest),
            handle: Arc::new(RwLock::new(None)),
        })
    }

    /// Receiver that observes every published generation.
    pub fn subscribe(&self) -> watch::Receiver<Option<Arc<Generation>>> {
        self.latest.subscribe()
    }

    /// Start ticking until `shutdown` turns `true`.
    ///
    /// A refresh that is already running finishes with whatever it fetched.
    pub async fn start(&self, mut shutdown: watch::Receiver<bool>) {
        let cycle = self.cycle.clone();
        let universe = self.universe.clone();
        let settings = self.settings;
        let schedule = self.schedule.clone();
        let latest = self.latest.clone();

        let handle = tokio::spawn(async move {
            info!("RefreshScheduler: started, waiting for cron schedule...");

            loop {
                let Some(next_tick) = schedule.upcoming(chrono::Utc).next() else {
                    warn!("RefreshScheduler: schedule has no upcoming ticks");
                    break;
                };
                let delay = (next_tick - chrono::Utc::now()).to_std().unwrap_or_default();

                tokio::select! {
                    _ = tokio::time::sleep(delay) => {}
                    changed = shutdown.changed() => {
                        if changed.is_err() {
                            break;
                        }
                    }
                }
                if *shutdown.borrow() {
                    break;
                }

                info!(
                    instruments = universe.len(),
                    "RefreshScheduler: cron tick, refreshing {} instruments",
                    universe.len()
                );

                match cycle.run(&universe, settings).await {
                    Ok(generation) => {
                        latest.send_replace(Some(Arc::new(generation)));
                    }
                    Err(e) => {
                        error!(error = %e, "RefreshScheduler: refresh failed");
                    }
                }
            }

            info!("RefreshScheduler: loop exited");
        });

        *self.handle.write().await = Some(handle);
        info!("RefreshScheduler: started successfully");
    }

    /// Wait for the loop to exit after shutdown was signalled.
    pub async fn stop(&self) {
        let handle = self.handle.write().await.take();
        if let Some(h) = handle {
            if let Err(e) = h.await {
                error!(error = %e, "RefreshScheduler: task ended abnormally");
            }
            info!("RefreshScheduler: stopped");
        }
    }

    pub async fn is_running(&self) -> bool {
        self.handle.read().await.is_some()
    }
}
