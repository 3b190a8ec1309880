//! Harvest plan construction
//!
//! A harvest plan is the cartesian product of the award categories and the
//! configured fiscal-year range. Fiscal year Y covers (Y-1)-10-01 through
//! Y-09-30, so consecutive years tile a continuous date range with no gap
//! or overlap.

use crate::config::{AwardCategory, CategoryCatalog, CategorySpec, Config};
use crate::model::{PlaceOfPerformance, SearchFilters, SearchRequest, TimePeriod};
use crate::{HarvestError, Result};
use chrono::{Datelike, Utc};

const ORDER_DESCENDING: &str = "desc";
const AUDIT_TRAIL: &str = "Results Table - Spending by award search";
const SPENDING_LEVEL: &str = "awards";

/// One unit of harvest work: a category restricted to a date window
#[derive(Debug, Clone)]
pub struct Partition {
    pub category: AwardCategory,
    pub fiscal_year: i32,
    pub start_date: String,
    pub end_date: String,
}

impl Partition {
    /// Label used in logs and failure reports
    pub fn label(&self) -> String {
        format!("{}/FY{}", self.category, self.fiscal_year)
    }
}

/// Start and end dates of US federal fiscal year `year`
pub fn fiscal_year_window(year: i32) -> (String, String) {
    (format!("{}-10-01", year - 1), format!("{}-09-30", year))
}

/// Expands the configured year range into the full partition list
///
/// Partitions are ordered category-major with years ascending, so the plan
/// is deterministic for a given configuration.
pub fn build_partitions(config: &Config, catalog: &CategoryCatalog) -> Result<Vec<Partition>> {
    let start_year = config.harvester.start_year;
    let end_year = config
        .harvester
        .end_year
        .unwrap_or_else(|| Utc::now().year());

    if end_year < start_year {
        return Err(HarvestError::EmptyPlan {
            start: start_year,
            end: end_year,
        });
    }

    let mut partitions = Vec::new();
    for spec in catalog.iter() {
        for year in start_year..=end_year {
            let (start_date, end_date) = fiscal_year_window(year);
            partitions.push(Partition {
                category: spec.category,
                fiscal_year: year,
                start_date,
                end_date,
            });
        }
    }

    Ok(partitions)
}

/// Assembles the search POST body for one page of one window
pub fn build_search_request(
    config: &Config,
    spec: &CategorySpec,
    start_date: &str,
    end_date: &str,
    page: u32,
) -> SearchRequest {
    SearchRequest {
        filters: SearchFilters {
            keywords: config.query.keywords.clone(),
            time_period: vec![TimePeriod {
                start_date: start_date.to_string(),
                end_date: end_date.to_string(),
            }],
            award_type_codes: spec.type_codes.iter().map(|s| s.to_string()).collect(),
            recipient_type_names: config.query.recipient_types.clone(),
            place_of_performance_locations: config
                .query
                .place_of_performance
                .iter()
                .map(|place| PlaceOfPerformance {
                    country: place.country.clone(),
                    state: place.state.clone(),
                })
                .collect(),
        },
        fields: spec.fields.iter().map(|s| s.to_string()).collect(),
        page,
        limit: config.harvester.page_limit,
        sort: spec.sort_field.to_string(),
        order: ORDER_DESCENDING.to_string(),
        audit_trail: AUDIT_TRAIL.to_string(),
        spending_level: SPENDING_LEVEL.to_string(),
    }
}
