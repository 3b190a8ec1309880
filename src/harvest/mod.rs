//! The harvesting pipeline
//!
//! This module contains the components that turn a configuration into an
//! output tree:
//! - `limiter`: global minimum-interval request pacing
//! - `partition`: plan expansion and search-request assembly
//! - `paginator`: sequential page traversal for one partition
//! - `enricher`: best-effort per-award detail lookups
//! - `pool`: bounded-concurrency partition workers
//! - `orchestrator`: mode dispatch, collection, persistence, summary

mod enricher;
mod limiter;
mod orchestrator;
mod paginator;
mod partition;
mod pool;

pub use enricher::DetailEnricher;
pub use limiter::RateLimiter;
pub use orchestrator::{HarvestMode, Orchestrator};
pub use paginator::Paginator;
pub use partition::{build_partitions, build_search_request, fiscal_year_window, Partition};
pub use pool::{PoolOutcome, ResultSet, WorkerPool};
