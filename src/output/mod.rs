//! Output module for persisting harvested awards and reporting results
//!
//! This module handles:
//! - Planning deterministic output paths for award documents
//! - Writing JSON files atomically
//! - Accumulating and displaying run summaries

mod layout;
pub mod summary;
mod writer;

pub use layout::{sanitize_segment, year_from_date, PathPlanner};
pub use summary::{print_summary, HarvestSummary};
pub use writer::save_json;
