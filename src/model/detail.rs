//! Per-award detail payload and the enriched pairing
//!
//! The detail endpoint returns a large, award-type-dependent document. Only
//! the fields the pipeline actually consults are typed; the rest is carried
//! opaquely in `extra` and persisted verbatim.

use crate::model::award::Award;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Detail endpoint response for one award
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AwardDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_unique_award_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub award_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_obligation: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_signed: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub awarding_agency: Option<AgencyDetail>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub funding_agency: Option<AgencyDetail>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient: Option<RecipientDetail>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period_of_performance: Option<PeriodOfPerformance>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AwardDetail {
    /// Name of the top-tier awarding agency, when present and non-empty
    pub fn toptier_agency_name(&self) -> Option<&str> {
        self.awarding_agency
            .as_ref()?
            .toptier_agency
            .as_ref()?
            .name
            .as_deref()
            .filter(|name| !name.is_empty())
    }
}

/// Agency block within a detail response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgencyDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toptier_agency: Option<AgencyName>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtier_agency: Option<AgencyName>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub office_agency_name: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A named agency tier
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgencyName {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abbreviation: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Performance window block within a detail response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PeriodOfPerformance {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub potential_end_date: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Recipient block within a detail response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipientDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_hash: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_uei: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_categories: Option<Vec<String>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A basic record paired with its optional detail payload, as persisted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedAward {
    pub basic_data: Award,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detailed_data: Option<AwardDetail>,
}
