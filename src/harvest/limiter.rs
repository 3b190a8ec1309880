//! Global request pacing
//!
//! One limiter is shared by every worker, so the minimum spacing holds
//! across the whole process and not per task. Search pages and detail
//! lookups draw from the same limiter.

use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::{self, Interval, MissedTickBehavior};

/// Enforces a minimum interval between request starts
///
/// The first acquisition completes immediately; each subsequent one waits
/// until the interval has elapsed since the previous acquisition. Waiters
/// are served in the order they arrive.
#[derive(Debug)]
pub struct RateLimiter {
    ticker: Mutex<Interval>,
}

impl RateLimiter {
    /// Creates a limiter with the given minimum spacing
    pub fn new(min_interval: Duration) -> Self {
        // tokio panics on a zero interval period
        let period = min_interval.max(Duration::from_millis(1));
        let mut ticker = time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        Self {
            ticker: Mutex::new(ticker),
        }
    }

    /// Waits for the next request slot
    pub async fn acquire(&self) {
        self.ticker.lock().await.tick().await;
    }
}
