//! Sequential page traversal for one partition
//!
//! Pages are requested strictly in order 1, 2, 3, ... and page N+1 is only
//! issued after page N has been consumed. Traversal ends when the API
//! reports no further page or returns an empty page; both are checked,
//! since the upstream can claim `hasNext` with zero results. Any request
//! failure discards everything collected for the window and fails the
//! whole partition.

use crate::client::SpendingClient;
use crate::config::{CategorySpec, Config};
use crate::harvest::limiter::RateLimiter;
use crate::harvest::partition::build_search_request;
use crate::model::Award;
use crate::{HarvestError, Result};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Walks one category's pages over one date window
#[derive(Debug, Clone)]
pub struct Paginator {
    client: Arc<SpendingClient>,
    limiter: Arc<RateLimiter>,
    config: Arc<Config>,
}

impl Paginator {
    pub fn new(client: Arc<SpendingClient>, limiter: Arc<RateLimiter>, config: Arc<Config>) -> Self {
        Self {
            client,
            limiter,
            config,
        }
    }

    /// Collects every record of one window, page by page
    ///
    /// # Arguments
    ///
    /// * `spec` - Category parameters driving the request body
    /// * `start_date` / `end_date` - The window bounds (YYYY-MM-DD)
    /// * `label` - Partition label for logs and errors
    /// * `token` - Cooperative cancellation, observed before and during
    ///   every wait
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<Award>)` - All records of the window, in page order
    /// * `Err(HarvestError)` - Request failure, page cap, or cancellation;
    ///   partial pages are discarded
    pub async fn collect_window(
        &self,
        spec: &CategorySpec,
        start_date: &str,
        end_date: &str,
        label: &str,
        token: &CancellationToken,
    ) -> Result<Vec<Award>> {
        let max_pages = self.config.harvester.max_pages_per_partition;
        let mut collected = Vec::new();
        let mut page: u32 = 1;

        loop {
            if token.is_cancelled() {
                return Err(HarvestError::Cancelled);
            }

            tokio::select! {
                biased;
                _ = token.cancelled() => return Err(HarvestError::Cancelled),
                _ = self.limiter.acquire() => {}
            }

            let request = build_search_request(&self.config, spec, start_date, end_date, page);
            let response = tokio::select! {
                biased;
                _ = token.cancelled() => return Err(HarvestError::Cancelled),
                result = self.client.search(&request) => result?,
            };

            let received = response.results.len();
            debug!(
                partition = %label,
                page,
                received,
                has_next = response.page_metadata.has_next,
                "page received"
            );
            collected.extend(response.results);

            if !response.page_metadata.has_next || received == 0 {
                break;
            }

            page += 1;
            if page > max_pages {
                return Err(HarvestError::PageCap {
                    partition: label.to_string(),
                    cap: max_pages,
                });
            }
        }

        Ok(collected)
    }
}
