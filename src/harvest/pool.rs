//! Bounded-concurrency partition workers
//!
//! The job queue is fully loaded and closed before any worker starts, so a
//! worker that drains the queue is done. Workers accumulate each partition
//! locally and take the shared result-set lock once per completed
//! partition, keeping the lock off the per-page path.

use crate::config::{AwardCategory, CategoryCatalog};
use crate::harvest::paginator::Paginator;
use crate::harvest::partition::Partition;
use crate::model::Award;
use crate::{HarvestError, Result};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Records collected per category, in stable category order
pub type ResultSet = BTreeMap<AwardCategory, Vec<Award>>;

/// What the pool accomplished, beyond the records themselves
#[derive(Debug, Default)]
pub struct PoolOutcome {
    /// Partitions that ran all their pages
    pub completed: u64,

    /// Labels and errors of partitions that did not
    pub failures: Vec<String>,
}

/// N workers draining a closed queue of partition jobs
///
/// A failed partition is recorded and skipped; it never aborts the pool or
/// its siblings. Cancellation stops every worker at its next check without
/// draining the remaining jobs.
pub struct WorkerPool {
    worker_count: u32,
}

impl WorkerPool {
    pub fn new(worker_count: u32) -> Self {
        Self {
            worker_count: worker_count.max(1),
        }
    }

    /// Runs the given partitions to completion or failure
    pub async fn run(
        &self,
        partitions: Vec<Partition>,
        paginator: Paginator,
        catalog: Arc<CategoryCatalog>,
        token: CancellationToken,
    ) -> Result<(ResultSet, PoolOutcome)> {
        let (sender, receiver) = mpsc::channel(partitions.len().max(1));
        for partition in partitions {
            sender
                .send(partition)
                .await
                .map_err(|_| HarvestError::Worker("job queue closed while loading".to_string()))?;
        }
        drop(sender);

        let receiver = Arc::new(Mutex::new(receiver));
        let results = Arc::new(Mutex::new(ResultSet::new()));
        let outcome = Arc::new(Mutex::new(PoolOutcome::default()));

        let mut handles = Vec::new();
        for worker_id in 0..self.worker_count {
            let receiver = Arc::clone(&receiver);
            let results = Arc::clone(&results);
            let outcome = Arc::clone(&outcome);
            let paginator = paginator.clone();
            let catalog = Arc::clone(&catalog);
            let token = token.clone();

            handles.push(tokio::spawn(async move {
                loop {
                    if token.is_cancelled() {
                        break;
                    }

                    // Hold the receiver lock for the dequeue only
                    let job = { receiver.lock().await.recv().await };
                    let Some(partition) = job else { break };

                    let label = partition.label();
                    debug!(worker_id, partition = %label, "partition started");

                    let spec = catalog.spec(partition.category);
                    let collected = paginator
                        .collect_window(
                            spec,
                            &partition.start_date,
                            &partition.end_date,
                            &label,
                            &token,
                        )
                        .await;

                    match collected {
                        Ok(records) => {
                            let count = records.len();
                            results
                                .lock()
                                .await
                                .entry(partition.category)
                                .or_default()
                                .extend(records);
                            outcome.lock().await.completed += 1;
                            info!(
                                worker_id,
                                partition = %label,
                                records = count,
                                "partition complete"
                            );
                        }
                        Err(HarvestError::Cancelled) => break,
                        Err(error) => {
                            warn!(worker_id, partition = %label, %error, "partition failed");
                            outcome
                                .lock()
                                .await
                                .failures
                                .push(format!("{}: {}", label, error));
                        }
                    }
                }
            }));
        }

        // Wait for every worker before reporting a join failure
        let mut join_failure = None;
        for handle in handles {
            if let Err(error) = handle.await {
                join_failure = Some(HarvestError::Worker(error.to_string()));
            }
        }
        if let Some(error) = join_failure {
            return Err(error);
        }

        let results = std::mem::take(&mut *results.lock().await);
        let outcome = std::mem::take(&mut *outcome.lock().await);
        Ok((results, outcome))
    }
}
