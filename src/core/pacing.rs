//! Request pacing for rate-limited upstream sources

use std::time::Duration;

use async_trait::async_trait;
use governor::clock::DefaultClock;
use governor::state::direct::NotKeyed;
use governor::state::InMemoryState;
use governor::{Quota, RateLimiter};

type DirectRateLimiter = RateLimiter<NotKeyed, InMemoryState, DefaultClock>;

/// Gate awaited before every upstream request.
#[async_trait]
pub trait Pacer: Send + Sync {
    async fn wait(&self);
}

/// Guarantees a minimum interval between consecutive requests.
///
/// One request per `interval` with no burst; the first request passes
/// immediately. A zero interval does not pace at all.
pub struct IntervalPacer {
    interval: Duration,
    limiter: Option<DirectRateLimiter>,
}

impl IntervalPacer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            limiter: Quota::with_period(interval).map(RateLimiter::direct),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

#[async_trait]
impl Pacer for IntervalPacer {
    async fn wait(&self) {
        if let Some(limiter) = &self.limiter {
            limiter.until_ready().await;
        }
    }
}

/// No delay at all. Useful for local sources and tests.
pub struct NoPacing;

#[async_trait]
impl Pacer for NoPacing {
    async fn wait(&self) {}
}
