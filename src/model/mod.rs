//! Wire data model for the spending API
//!
//! # Components
//!
//! - `search`: request/response envelopes for the spending-by-award search
//! - `award`: the basic award record and its polymorphic field unions
//! - `detail`: the per-award detail payload and the enriched pairing

mod award;
mod detail;
mod search;

pub use award::{AmountField, Award, CodeDescription, CodeField, Location, LocationField};
pub use detail::{
    AgencyDetail, AgencyName, AwardDetail, EnrichedAward, PeriodOfPerformance, RecipientDetail,
};
pub use search::{PageMetadata, PlaceOfPerformance, SearchFilters, SearchRequest, SearchResponse, TimePeriod};
