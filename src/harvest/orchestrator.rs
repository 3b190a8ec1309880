//! Run orchestration
//!
//! The orchestrator builds the collaborator graph from one configuration,
//! expands the partition plan, drives the worker pool, and then walks the
//! merged result set once for enrichment and persistence. Nothing is
//! persisted after cancellation has been observed.

use crate::client::SpendingClient;
use crate::config::{CategoryCatalog, Config};
use crate::harvest::enricher::DetailEnricher;
use crate::harvest::limiter::RateLimiter;
use crate::harvest::paginator::Paginator;
use crate::harvest::partition::{build_partitions, Partition};
use crate::harvest::pool::WorkerPool;
use crate::model::EnrichedAward;
use crate::output::{save_json, HarvestSummary, PathPlanner};
use crate::{HarvestError, Result};
use chrono::Utc;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// How a run traverses and persists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HarvestMode {
    /// Partitioned sweep with per-award enrichment, one file per award
    Enhanced,
    /// One sequential pass per category over the static window, one batch
    /// file per non-empty category, no enrichment
    Batch,
}

/// Wires the pipeline together and runs it
pub struct Orchestrator {
    config: Arc<Config>,
    catalog: Arc<CategoryCatalog>,
    client: Arc<SpendingClient>,
    limiter: Arc<RateLimiter>,
    planner: PathPlanner,
    token: CancellationToken,
}

impl Orchestrator {
    /// Builds the collaborator graph from a validated configuration
    ///
    /// # Arguments
    ///
    /// * `config` - The loaded configuration
    /// * `token` - The run's cancellation token; the caller keeps a clone
    ///   to trigger shutdown
    pub fn new(config: Config, token: CancellationToken) -> Result<Self> {
        let client = SpendingClient::new(&config)?;
        let limiter = RateLimiter::new(Duration::from_millis(
            config.harvester.request_interval_ms,
        ));
        let planner = PathPlanner::new(&config.output.base_dir);

        Ok(Self {
            config: Arc::new(config),
            catalog: Arc::new(CategoryCatalog::builtin()),
            client: Arc::new(client),
            limiter: Arc::new(limiter),
            planner,
            token,
        })
    }

    /// The partition plan this configuration expands to
    pub fn plan(&self) -> Result<Vec<Partition>> {
        build_partitions(&self.config, &self.catalog)
    }

    /// Runs one harvest to completion in the given mode
    pub async fn run(&self, mode: HarvestMode) -> Result<HarvestSummary> {
        match mode {
            HarvestMode::Enhanced => self.run_enhanced().await,
            HarvestMode::Batch => self.run_batch().await,
        }
    }

    fn paginator(&self) -> Paginator {
        Paginator::new(
            Arc::clone(&self.client),
            Arc::clone(&self.limiter),
            Arc::clone(&self.config),
        )
    }

    /// Partitioned collection, then one enrichment-and-persist pass
    async fn run_enhanced(&self) -> Result<HarvestSummary> {
        let started = Instant::now();
        let partitions = self.plan()?;

        let mut summary = HarvestSummary::default();
        summary.partitions_total = partitions.len() as u64;

        info!(
            partitions = partitions.len(),
            workers = self.config.harvester.concurrency,
            "starting partitioned harvest"
        );

        let pool = WorkerPool::new(self.config.harvester.concurrency);
        let (results, outcome) = pool
            .run(
                partitions,
                self.paginator(),
                Arc::clone(&self.catalog),
                self.token.clone(),
            )
            .await?;

        if self.token.is_cancelled() {
            return Err(HarvestError::Cancelled);
        }

        summary.partitions_completed = outcome.completed;
        summary.partitions_failed = outcome.failures.len() as u64;
        summary.partition_failures = outcome.failures;
        for (category, records) in &results {
            summary.records_collected += records.len() as u64;
            summary
                .records_by_category
                .insert(*category, records.len() as u64);
        }

        info!(
            records = summary.records_collected,
            "collection finished, enriching and persisting"
        );

        let enricher = DetailEnricher::new(Arc::clone(&self.client), Arc::clone(&self.limiter));
        for (category, records) in results {
            for award in records {
                if self.token.is_cancelled() {
                    return Err(HarvestError::Cancelled);
                }

                let Some(generated_id) = award.generated_id().map(str::to_string) else {
                    debug!(category = %category, "record has no generated id, skipping");
                    summary.records_without_id += 1;
                    continue;
                };

                let detail = enricher.enrich(&generated_id, &self.token).await;
                if self.token.is_cancelled() {
                    return Err(HarvestError::Cancelled);
                }
                match &detail {
                    Some(_) => summary.records_enriched += 1,
                    None => summary.enrichment_failures += 1,
                }

                let path = self.planner.award_path(category, &award, detail.as_ref());
                let document = EnrichedAward {
                    basic_data: award,
                    detailed_data: detail,
                };
                match save_json(&document, &path) {
                    Ok(()) => summary.records_persisted += 1,
                    Err(error) => {
                        warn!(path = %path.display(), %error, "failed to persist record");
                        summary.persistence_failures += 1;
                    }
                }
            }
        }

        summary.elapsed = started.elapsed();
        Ok(summary)
    }

    /// One sequential unenriched pass per category over the static window
    async fn run_batch(&self) -> Result<HarvestSummary> {
        let started = Instant::now();

        let mut summary = HarvestSummary::default();
        summary.partitions_total = self.catalog.iter().count() as u64;

        let window_start = self.config.query.start_date.clone();
        let window_end = self.config.query.end_date.clone();
        info!(start = %window_start, end = %window_end, "starting single-pass harvest");

        let paginator = self.paginator();
        let today = Utc::now().date_naive();

        for spec in self.catalog.iter() {
            if self.token.is_cancelled() {
                return Err(HarvestError::Cancelled);
            }

            let label = format!("{}/single-pass", spec.category);
            let collected = paginator
                .collect_window(spec, &window_start, &window_end, &label, &self.token)
                .await;

            let records = match collected {
                Ok(records) => records,
                Err(HarvestError::Cancelled) => return Err(HarvestError::Cancelled),
                Err(error) => {
                    warn!(category = %spec.category, %error, "category traversal failed");
                    summary.partitions_failed += 1;
                    summary.partition_failures.push(format!("{}: {}", label, error));
                    continue;
                }
            };

            summary.partitions_completed += 1;
            summary.records_collected += records.len() as u64;
            summary
                .records_by_category
                .insert(spec.category, records.len() as u64);

            if records.is_empty() {
                info!(category = %spec.category, "no records, skipping batch file");
                continue;
            }

            let path = self.planner.batch_path(
                spec.category,
                &self.config.output.batch_prefix,
                today,
            );
            match save_json(&records, &path) {
                Ok(()) => {
                    summary.records_persisted += records.len() as u64;
                    info!(
                        category = %spec.category,
                        records = records.len(),
                        path = %path.display(),
                        "batch file written"
                    );
                }
                Err(error) => {
                    warn!(path = %path.display(), %error, "failed to write batch file");
                    summary.persistence_failures += records.len() as u64;
                }
            }
        }

        summary.elapsed = started.elapsed();
        Ok(summary)
    }
}
