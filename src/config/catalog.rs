//! Award-category catalog
//!
//! The upstream API groups award type codes into six fixed categories, each
//! with its own output directory, sort field, and requested-field list. The
//! catalog is built once at startup and passed by reference to everything
//! that needs it.

use std::fmt;

/// The fixed award-type categories recognized by the search API
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AwardCategory {
    Contracts,
    Grants,
    Loans,
    ContractIdvs,
    OtherFinancialAssistance,
    DirectPayments,
}

impl AwardCategory {
    /// All categories, in catalog order
    pub const ALL: [AwardCategory; 6] = [
        AwardCategory::Contracts,
        AwardCategory::Grants,
        AwardCategory::Loans,
        AwardCategory::ContractIdvs,
        AwardCategory::OtherFinancialAssistance,
        AwardCategory::DirectPayments,
    ];

    /// The upstream group key for this category
    pub fn key(&self) -> &'static str {
        match self {
            AwardCategory::Contracts => "contracts",
            AwardCategory::Grants => "grants",
            AwardCategory::Loans => "loans",
            AwardCategory::ContractIdvs => "idvs",
            AwardCategory::OtherFinancialAssistance => "other_financial_assistance",
            AwardCategory::DirectPayments => "direct_payments",
        }
    }

    /// The output directory name for this category
    pub fn directory(&self) -> &'static str {
        match self {
            AwardCategory::Contracts => "Contracts",
            AwardCategory::Grants => "Grants",
            AwardCategory::Loans => "Loans",
            AwardCategory::ContractIdvs => "Contract_IDVs",
            AwardCategory::OtherFinancialAssistance => "Other_Financial_Assistance",
            AwardCategory::DirectPayments => "Direct_Payments",
        }
    }
}

impl fmt::Display for AwardCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Per-category search parameters
#[derive(Debug, Clone)]
pub struct CategorySpec {
    pub category: AwardCategory,

    /// Raw award type codes sent as the `award_type_codes` filter
    pub type_codes: &'static [&'static str],

    /// Sort field for search results
    pub sort_field: &'static str,

    /// Column names requested from the search endpoint
    pub fields: &'static [&'static str],
}

/// Immutable catalog of all category specs, in `AwardCategory::ALL` order
#[derive(Debug, Clone)]
pub struct CategoryCatalog {
    specs: [CategorySpec; 6],
}

const CONTRACT_FIELDS: &[&str] = &[
    "Award ID",
    "Recipient Name",
    "Award Amount",
    "Total Outlays",
    "Description",
    "Contract Award Type",
    "Recipient UEI",
    "Recipient Location",
    "Primary Place of Performance",
    "def_codes",
    "COVID-19 Obligations",
    "COVID-19 Outlays",
    "Infrastructure Obligations",
    "Infrastructure Outlays",
    "Awarding Agency",
    "Awarding Sub Agency",
    "Start Date",
    "End Date",
    "NAICS",
    "PSC",
    "recipient_id",
    "prime_award_recipient_id",
];

const ASSISTANCE_FIELDS: &[&str] = &[
    "Award ID",
    "Recipient Name",
    "Award Amount",
    "Total Outlays",
    "Description",
    "Recipient UEI",
    "Recipient Location",
    "Primary Place of Performance",
    "def_codes",
    "COVID-19 Obligations",
    "COVID-19 Outlays",
    "Infrastructure Obligations",
    "Infrastructure Outlays",
    "Awarding Agency",
    "Awarding Sub Agency",
    "Start Date",
    "End Date",
    "recipient_id",
    "prime_award_recipient_id",
];

// Loans have no nested location objects; the API exposes flat columns instead.
const LOAN_FIELDS: &[&str] = &[
    "Award ID",
    "Recipient Name",
    "Loan Value",
    "Subsidy Cost",
    "Description",
    "Recipient UEI",
    "recipient_location_city_name",
    "recipient_location_state_code",
    "recipient_location_country_name",
    "recipient_location_address_line1",
    "pop_city_name",
    "pop_state_code",
    "pop_country_name",
    "def_codes",
    "COVID-19 Obligations",
    "COVID-19 Outlays",
    "Infrastructure Obligations",
    "Infrastructure Outlays",
    "Awarding Agency",
    "Funding Agency",
    "Issued Date",
    "recipient_id",
    "prime_award_recipient_id",
];

impl CategoryCatalog {
    /// Builds the catalog with the upstream's fixed groupings
    pub fn builtin() -> Self {
        Self {
            specs: [
                CategorySpec {
                    category: AwardCategory::Contracts,
                    type_codes: &["A", "B", "C", "D"],
                    sort_field: "Award Amount",
                    fields: CONTRACT_FIELDS,
                },
                CategorySpec {
                    category: AwardCategory::Grants,
                    type_codes: &["02", "03", "04", "05"],
                    sort_field: "Award Amount",
                    fields: ASSISTANCE_FIELDS,
                },
                CategorySpec {
                    category: AwardCategory::Loans,
                    type_codes: &["07", "08"],
                    sort_field: "Loan Value",
                    fields: LOAN_FIELDS,
                },
                CategorySpec {
                    category: AwardCategory::ContractIdvs,
                    type_codes: &[
                        "IDV_A", "IDV_B", "IDV_B_A", "IDV_B_B", "IDV_B_C", "IDV_C", "IDV_D",
                        "IDV_E",
                    ],
                    sort_field: "Award Amount",
                    fields: CONTRACT_FIELDS,
                },
                CategorySpec {
                    category: AwardCategory::OtherFinancialAssistance,
                    type_codes: &["06", "10"],
                    sort_field: "Award Amount",
                    fields: ASSISTANCE_FIELDS,
                },
                CategorySpec {
                    category: AwardCategory::DirectPayments,
                    type_codes: &["09", "11"],
                    sort_field: "Award Amount",
                    fields: ASSISTANCE_FIELDS,
                },
            ],
        }
    }

    /// Looks up the spec for a category
    pub fn spec(&self, category: AwardCategory) -> &CategorySpec {
        &self.specs[category as usize]
    }

    /// Iterates all specs in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &CategorySpec> {
        self.specs.iter()
    }
}
