//! Search endpoint request and response envelopes

use crate::model::award::Award;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON body for the spending-by-award search POST
///
/// Key casing follows the upstream API exactly: everything is snake_case
/// except `auditTrail`.
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest {
    pub filters: SearchFilters,
    pub fields: Vec<String>,
    pub page: u32,
    pub limit: u32,
    pub sort: String,
    pub order: String,
    #[serde(rename = "auditTrail")]
    pub audit_trail: String,
    pub spending_level: String,
}

/// Filter block of a search request
#[derive(Debug, Clone, Serialize)]
pub struct SearchFilters {
    pub keywords: Vec<String>,
    pub time_period: Vec<TimePeriod>,
    pub award_type_codes: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub recipient_type_names: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub place_of_performance_locations: Vec<PlaceOfPerformance>,
}

/// One (start, end) date pair filter
#[derive(Debug, Clone, Serialize)]
pub struct TimePeriod {
    pub start_date: String,
    pub end_date: String,
}

/// One place-of-performance location filter
#[derive(Debug, Clone, Serialize)]
pub struct PlaceOfPerformance {
    pub country: String,
    pub state: String,
}

/// Search endpoint response envelope
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<Award>,

    /// Missing metadata reads as the default, which has `has_next=false`
    #[serde(default)]
    pub page_metadata: PageMetadata,
}

/// Pagination cursor state returned with every page
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageMetadata {
    #[serde(default)]
    pub page: u32,

    #[serde(default, rename = "hasNext")]
    pub has_next: bool,

    /// Continuation cursor; shape varies by sort field, carried opaquely
    #[serde(default)]
    pub last_record_unique_id: Option<Value>,

    #[serde(default)]
    pub last_record_sort_value: Option<Value>,
}
