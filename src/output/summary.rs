//! Run summary accumulation and display
//!
//! This module provides the counters an orchestrator fills in while a
//! harvest runs and a formatted stdout report printed when it finishes.

use crate::config::AwardCategory;
use std::collections::BTreeMap;
use std::time::Duration;

/// Harvest run summary
#[derive(Debug, Clone, Default)]
pub struct HarvestSummary {
    /// Total number of partitions planned
    pub partitions_total: u64,

    /// Partitions that completed all of their pages
    pub partitions_completed: u64,

    /// Partitions abandoned after a page failure
    pub partitions_failed: u64,

    /// Human-readable labels of the failed partitions
    pub partition_failures: Vec<String>,

    /// Basic records collected across all completed partitions
    pub records_collected: u64,

    /// Count of collected records by category
    pub records_by_category: BTreeMap<AwardCategory, u64>,

    /// Records whose detail lookup succeeded
    pub records_enriched: u64,

    /// Records persisted without a detail payload after a failed lookup
    pub enrichment_failures: u64,

    /// Records that carried no identifier for a detail lookup
    pub records_without_id: u64,

    /// Records written to disk
    pub records_persisted: u64,

    /// Records lost to write failures
    pub persistence_failures: u64,

    /// Wall-clock duration of the run
    pub elapsed: Duration,
}

/// Prints a run summary to stdout in a formatted manner
///
/// # Arguments
///
/// * `summary` - The summary to display
pub fn print_summary(summary: &HarvestSummary) {
    println!("=== Harvest Summary ===\n");

    println!("Partitions:");
    println!("  Planned: {}", summary.partitions_total);
    println!("  Completed: {}", summary.partitions_completed);
    println!("  Failed: {}", summary.partitions_failed);
    println!();

    if !summary.partition_failures.is_empty() {
        println!("Failed Partitions ({}):", summary.partition_failures.len());
        for label in &summary.partition_failures {
            println!("  - {}", label);
        }
        println!();
    }

    println!("Records:");
    println!("  Collected: {}", summary.records_collected);
    for (category, count) in &summary.records_by_category {
        println!("    {}: {}", category, count);
    }
    println!("  Persisted: {}", summary.records_persisted);
    if summary.persistence_failures > 0 {
        println!("  Write failures: {}", summary.persistence_failures);
    }
    println!();

    if summary.records_enriched > 0
        || summary.enrichment_failures > 0
        || summary.records_without_id > 0
    {
        println!("Enrichment:");
        println!("  Enriched: {}", summary.records_enriched);
        if summary.enrichment_failures > 0 {
            println!("  Failed lookups: {}", summary.enrichment_failures);
        }
        if summary.records_without_id > 0 {
            println!("  Missing identifier: {}", summary.records_without_id);
        }
        println!();
    }

    // Calculate completion rate
    let completion_rate = if summary.partitions_total > 0 {
        (summary.partitions_completed as f64 / summary.partitions_total as f64) * 100.0
    } else {
        0.0
    };

    println!(
        "Completion Rate: {:.1}% ({} / {} partitions in {:.1}s)",
        completion_rate,
        summary.partitions_completed,
        summary.partitions_total,
        summary.elapsed.as_secs_f64()
    );
}
