//! Deterministic output-path planning
//!
//! Enriched awards are filed under
//! `<base>/<category-dir>/<recipient>/<year>/<agency>/<id>.json`; single-pass
//! batches under `<base>/<category-dir>/<prefix>_<category>_<date>.json`.
//! Every human-sourced path segment is sanitized, and missing attributes fall
//! back to fixed placeholders so a path can always be derived.

use crate::config::AwardCategory;
use crate::model::{Award, AwardDetail};
use chrono::NaiveDate;
use std::path::PathBuf;

/// Characters never allowed inside a path segment
const FORBIDDEN_CHARS: [char; 10] = [' ', '/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Replaces every forbidden character with an underscore
///
/// Idempotent: sanitizing an already-sanitized segment changes nothing.
pub fn sanitize_segment(input: &str) -> String {
    input
        .chars()
        .map(|c| if FORBIDDEN_CHARS.contains(&c) { '_' } else { c })
        .collect()
}

/// Extracts a four-digit year prefix from a date string
///
/// Returns `None` for absent, short, or non-numeric prefixes; callers fall
/// back to `"unknown"`.
pub fn year_from_date(date: &str) -> Option<&str> {
    let prefix = date.get(..4)?;
    if prefix.chars().all(|c| c.is_ascii_digit()) {
        Some(prefix)
    } else {
        None
    }
}

/// Plans output paths beneath a fixed base directory
#[derive(Debug, Clone)]
pub struct PathPlanner {
    base_dir: PathBuf,
}

impl PathPlanner {
    /// Creates a planner rooted at `base_dir`
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Derives the path for one enriched award
    ///
    /// Fallback chains:
    /// - recipient: basic record, else `Unknown_Recipient`
    /// - year: `Start Date` prefix, else the detail's `date_signed` prefix,
    ///   else `unknown`
    /// - agency: basic record, else the detail's top-tier awarding agency,
    ///   else `Unknown_Agency`
    /// - file stem: generated internal id, else `Award ID`, else `unknown`
    pub fn award_path(
        &self,
        category: AwardCategory,
        award: &Award,
        detail: Option<&AwardDetail>,
    ) -> PathBuf {
        let recipient = award
            .recipient_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or("Unknown_Recipient");

        let year = award
            .start_date
            .as_deref()
            .and_then(year_from_date)
            .or_else(|| {
                detail
                    .and_then(|d| d.date_signed.as_deref())
                    .and_then(year_from_date)
            })
            .unwrap_or("unknown");

        let agency = award
            .awarding_agency
            .as_deref()
            .filter(|name| !name.is_empty())
            .or_else(|| detail.and_then(|d| d.toptier_agency_name()))
            .unwrap_or("Unknown_Agency");

        let identifier = award
            .generated_id()
            .or_else(|| award.award_id.as_deref().filter(|id| !id.is_empty()))
            .unwrap_or("unknown");

        self.base_dir
            .join(category.directory())
            .join(sanitize_segment(recipient))
            .join(year)
            .join(sanitize_segment(agency))
            .join(format!("{}.json", sanitize_segment(identifier)))
    }

    /// Derives the path for one single-pass category batch file
    pub fn batch_path(&self, category: AwardCategory, prefix: &str, date: NaiveDate) -> PathBuf {
        self.base_dir.join(category.directory()).join(format!(
            "{}_{}_{}.json",
            prefix,
            category.key(),
            date.format("%Y-%m-%d")
        ))
    }
}
