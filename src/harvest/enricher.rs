//! Best-effort per-award detail lookup
//!
//! A failed lookup never fails the run. The record is kept basic-only and
//! the failure is logged at debug severity, below the partition-failure
//! warnings.

use crate::client::SpendingClient;
use crate::harvest::limiter::RateLimiter;
use crate::model::AwardDetail;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Fetches detail payloads, degrading to "absent" on any failure
#[derive(Debug, Clone)]
pub struct DetailEnricher {
    client: Arc<SpendingClient>,
    limiter: Arc<RateLimiter>,
}

impl DetailEnricher {
    pub fn new(client: Arc<SpendingClient>, limiter: Arc<RateLimiter>) -> Self {
        Self { client, limiter }
    }

    /// Looks up the detail payload for one generated award id
    ///
    /// Returns `None` on any lookup failure and on cancellation; callers
    /// re-check the token before acting on an absent payload.
    pub async fn enrich(&self, generated_id: &str, token: &CancellationToken) -> Option<AwardDetail> {
        if token.is_cancelled() {
            return None;
        }

        tokio::select! {
            biased;
            _ = token.cancelled() => return None,
            _ = self.limiter.acquire() => {}
        }

        let result = tokio::select! {
            biased;
            _ = token.cancelled() => return None,
            result = self.client.award_detail(generated_id) => result,
        };

        match result {
            Ok(detail) => Some(detail),
            Err(error) => {
                debug!(generated_id, %error, "detail lookup failed, keeping basic record only");
                None
            }
        }
    }
}
