//! The basic award record returned by the search endpoint
//!
//! Several response columns are polymorphic: monetary amounts arrive as a
//! number or a display string, location columns arrive as a structured object
//! for contracts and grants but as flat string columns for loans, and
//! NAICS/PSC arrive as a code/description object or a bare string. Each of
//! these is modeled as an explicit untagged union so unexpected shapes fail
//! at decode time instead of leaking through as raw values.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// A monetary column: numeric or display text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AmountField {
    Number(f64),
    Text(String),
}

/// A location column: the known structured object, an unrecognized flat
/// string map, or a bare string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocationField {
    Structured(Location),
    Flat(BTreeMap<String, Option<String>>),
    Scalar(String),
}

/// The structured location object
///
/// Unknown keys are rejected here so that objects outside this shape degrade
/// to `LocationField::Flat` instead of silently dropping data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Location {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_country_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub county_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub county_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line3: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub congressional_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip4: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip5: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreign_postal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreign_province: Option<String>,
}

/// A NAICS/PSC column: code+description object or a bare string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CodeField {
    Coded(CodeDescription),
    Text(String),
}

/// A code with its human-readable description
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CodeDescription {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One basic award record
///
/// Column keys are the API's human-readable names; identifier columns are
/// snake_case. Keys this struct does not name are preserved through
/// `extra`, so a decoded record re-encodes without loss.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Award {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_id: Option<i64>,

    #[serde(default, rename = "Award ID", skip_serializing_if = "Option::is_none")]
    pub award_id: Option<String>,

    #[serde(default, rename = "Recipient Name", skip_serializing_if = "Option::is_none")]
    pub recipient_name: Option<String>,

    #[serde(default, rename = "Award Amount", skip_serializing_if = "Option::is_none")]
    pub award_amount: Option<AmountField>,

    #[serde(default, rename = "Total Outlays", skip_serializing_if = "Option::is_none")]
    pub total_outlays: Option<AmountField>,

    #[serde(default, rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(
        default,
        rename = "Contract Award Type",
        skip_serializing_if = "Option::is_none"
    )]
    pub contract_award_type: Option<String>,

    #[serde(default, rename = "Recipient UEI", skip_serializing_if = "Option::is_none")]
    pub recipient_uei: Option<String>,

    #[serde(
        default,
        rename = "Recipient Location",
        skip_serializing_if = "Option::is_none"
    )]
    pub recipient_location: Option<LocationField>,

    #[serde(
        default,
        rename = "Primary Place of Performance",
        skip_serializing_if = "Option::is_none"
    )]
    pub primary_place_of_performance: Option<LocationField>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub def_codes: Option<Vec<String>>,

    #[serde(
        default,
        rename = "COVID-19 Obligations",
        skip_serializing_if = "Option::is_none"
    )]
    pub covid19_obligations: Option<AmountField>,

    #[serde(
        default,
        rename = "COVID-19 Outlays",
        skip_serializing_if = "Option::is_none"
    )]
    pub covid19_outlays: Option<AmountField>,

    #[serde(
        default,
        rename = "Infrastructure Obligations",
        skip_serializing_if = "Option::is_none"
    )]
    pub infrastructure_obligations: Option<AmountField>,

    #[serde(
        default,
        rename = "Infrastructure Outlays",
        skip_serializing_if = "Option::is_none"
    )]
    pub infrastructure_outlays: Option<AmountField>,

    #[serde(
        default,
        rename = "Awarding Agency",
        skip_serializing_if = "Option::is_none"
    )]
    pub awarding_agency: Option<String>,

    #[serde(
        default,
        rename = "Awarding Sub Agency",
        skip_serializing_if = "Option::is_none"
    )]
    pub awarding_sub_agency: Option<String>,

    #[serde(default, rename = "Start Date", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,

    #[serde(default, rename = "End Date", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,

    #[serde(default, rename = "NAICS", skip_serializing_if = "Option::is_none")]
    pub naics: Option<CodeField>,

    #[serde(default, rename = "PSC", skip_serializing_if = "Option::is_none")]
    pub psc: Option<CodeField>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prime_award_recipient_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_internal_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub awarding_agency_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agency_slug: Option<String>,

    // Loan-specific columns
    #[serde(default, rename = "Loan Value", skip_serializing_if = "Option::is_none")]
    pub loan_value: Option<AmountField>,

    #[serde(default, rename = "Subsidy Cost", skip_serializing_if = "Option::is_none")]
    pub subsidy_cost: Option<AmountField>,

    #[serde(default, rename = "Issued Date", skip_serializing_if = "Option::is_none")]
    pub issued_date: Option<String>,

    #[serde(
        default,
        rename = "Funding Agency",
        skip_serializing_if = "Option::is_none"
    )]
    pub funding_agency: Option<String>,

    // Flat location columns, requested instead of the nested objects for loans
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_location_city_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_location_state_code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_location_country_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_location_address_line1: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pop_city_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pop_state_code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pop_country_name: Option<String>,

    /// Any columns not named above, preserved verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Award {
    /// The non-empty generated internal id, if the record carries one
    pub fn generated_id(&self) -> Option<&str> {
        self.generated_internal_id
            .as_deref()
            .filter(|id| !id.is_empty())
    }
}
