//! Response shaping.
//!
//! JSON views over registry entries, in the wire shape consumers of the
//! registry expect: camelCase field names, headquarters responses that
//! embed their branch list, and country listings grouped under the
//! country header. Errors map to conventional HTTP-style status codes
//! even though the current shell is a CLI; the codes travel with the
//! error body so any future transport can reuse them as-is.

use serde::Serialize;

use swiftreg_shared::{RegistryError, SwiftEntry};

/// Full single-code view.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CodeDetails {
    pub address: String,
    pub bank_name: String,
    #[serde(rename = "countryISO2")]
    pub country_iso2: String,
    pub country_name: String,
    pub is_headquarter: bool,
    pub swift_code: String,
}

impl From<&SwiftEntry> for CodeDetails {
    fn from(entry: &SwiftEntry) -> Self {
        Self {
            address: entry.display_address().to_string(),
            bank_name: entry.bank_name.clone(),
            country_iso2: entry.country_iso2.clone(),
            country_name: entry.country_name.clone(),
            is_headquarter: entry.headquarter_flag,
            swift_code: entry.swift_code.clone(),
        }
    }
}

/// Reduced view used inside listings, where the surrounding object
/// already carries the country name.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CodeSummary {
    pub address: String,
    pub bank_name: String,
    #[serde(rename = "countryISO2")]
    pub country_iso2: String,
    pub is_headquarter: bool,
    pub swift_code: String,
}

impl From<&SwiftEntry> for CodeSummary {
    fn from(entry: &SwiftEntry) -> Self {
        Self {
            address: entry.display_address().to_string(),
            bank_name: entry.bank_name.clone(),
            country_iso2: entry.country_iso2.clone(),
            is_headquarter: entry.headquarter_flag,
            swift_code: entry.swift_code.clone(),
        }
    }
}

/// Headquarters view with its linked branches inlined.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CodeWithBranches {
    #[serde(flatten)]
    pub details: CodeDetails,
    pub branches: Vec<CodeSummary>,
}

impl CodeWithBranches {
    pub fn new(entry: &SwiftEntry, branches: &[SwiftEntry]) -> Self {
        Self {
            details: CodeDetails::from(entry),
            branches: branches.iter().map(CodeSummary::from).collect(),
        }
    }
}

/// All codes registered for one country.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CountryCodes {
    #[serde(rename = "countryISO2")]
    pub country_iso2: String,
    pub country_name: String,
    pub swift_codes: Vec<CodeSummary>,
}

impl CountryCodes {
    pub fn new(iso2: &str, country_name: &str, entries: &[SwiftEntry]) -> Self {
        Self {
            country_iso2: iso2.to_string(),
            country_name: country_name.to_string(),
            swift_codes: entries.iter().map(CodeSummary::from).collect(),
        }
    }
}

/// Wire shape of a failed operation.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

impl ErrorBody {
    pub fn from_registry_error(err: &RegistryError) -> Self {
        Self {
            error: error_label(err).to_string(),
            message: err.to_string(),
        }
    }
}

/// HTTP-style status code for a registry error.
pub fn status_for(err: &RegistryError) -> u16 {
    match err {
        RegistryError::MissingField { .. }
        | RegistryError::InvalidAddressLength { .. }
        | RegistryError::InvalidCodeFormat { .. }
        | RegistryError::InvalidCountryCode { .. }
        | RegistryError::CountryNameMismatch { .. } => 400,
        RegistryError::DuplicateCode { .. } => 409,
        RegistryError::NotFound { .. } => 404,
        RegistryError::StoreUnavailable { .. } => 500,
    }
}

/// Short stable label for a registry error kind.
pub fn error_label(err: &RegistryError) -> &'static str {
    match err {
        RegistryError::MissingField { .. } => "Missing required fields",
        RegistryError::InvalidAddressLength { .. } => "Invalid address length",
        RegistryError::InvalidCodeFormat { .. } => "Invalid SWIFT code format",
        RegistryError::DuplicateCode { .. } => "Duplicate SWIFT code",
        RegistryError::InvalidCountryCode { .. } => "Invalid country code",
        RegistryError::CountryNameMismatch { .. } => "Country name mismatch",
        RegistryError::NotFound { .. } => "SWIFT code not found",
        RegistryError::StoreUnavailable { .. } => "Store unavailable",
    }
}
