//! Registry entry model.
//!
//! A `SwiftEntry` is the registry's sole entity: one registered SWIFT/BIC
//! code, classified as a headquarters or a branch. The headquarters link
//! is a plain code string resolved through the store on demand, never an
//! embedded object, so no cyclic references can form.

use serde::{Deserialize, Serialize};

use crate::core::types::{NO_ADDRESS_AVAILABLE, PREFIX_LENGTH};

/// A single registered SWIFT/BIC code.
///
/// Field values are stored in canonical form: code and ISO2 uppercased,
/// country name canonicalized against the country table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwiftEntry {
    /// The code itself; primary key, immutable once stored
    pub swift_code: String,

    /// Institution name
    pub bank_name: String,

    /// Street address; may hold the insert-time placeholder
    pub address: String,

    /// Two-letter country code, uppercase
    pub country_iso2: String,

    /// Canonical uppercase country name
    pub country_name: String,

    /// True iff the code ends with the headquarters suffix
    pub headquarter_flag: bool,

    /// Code of the linked headquarters; present only on linked branches.
    /// A headquarters entry never has this set.
    pub headquarter_code: Option<String>,
}

impl SwiftEntry {
    /// Create a new, unlinked entry from already-normalized fields.
    pub fn new(
        swift_code: String,
        bank_name: String,
        address: String,
        country_iso2: String,
        country_name: String,
        headquarter_flag: bool,
    ) -> Self {
        Self {
            swift_code,
            bank_name,
            address,
            country_iso2,
            country_name,
            headquarter_flag,
            headquarter_code: None,
        }
    }

    /// Institution prefix shared between a headquarters and its branches.
    ///
    /// Valid only for stored entries, whose codes are length-validated.
    pub fn prefix(&self) -> &str {
        &self.swift_code[..PREFIX_LENGTH]
    }

    /// Whether this is a branch with no headquarters link.
    pub fn is_orphan(&self) -> bool {
        !self.headquarter_flag && self.headquarter_code.is_none()
    }

    /// Address for display, substituting a placeholder for blank values.
    pub fn display_address(&self) -> &str {
        if self.address.trim().is_empty() {
            NO_ADDRESS_AVAILABLE
        } else {
            &self.address
        }
    }
}

/// Raw insert input, before normalization and validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateCode {
    pub swift_code: String,
    pub bank_name: String,
    pub address: String,
    pub country_iso2: String,
    pub country_name: String,
}

impl CandidateCode {
    pub fn new(
        swift_code: impl Into<String>,
        bank_name: impl Into<String>,
        address: impl Into<String>,
        country_iso2: impl Into<String>,
        country_name: impl Into<String>,
    ) -> Self {
        Self {
            swift_code: swift_code.into(),
            bank_name: bank_name.into(),
            address: address.into(),
            country_iso2: country_iso2.into(),
            country_name: country_name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(code: &str, hq: bool) -> SwiftEntry {
        SwiftEntry::new(
            code.to_string(),
            "Test Bank".to_string(),
            "Warsaw HQ".to_string(),
            "PL".to_string(),
            "POLAND".to_string(),
            hq,
        )
    }

    #[test]
    fn test_prefix() {
        assert_eq!(entry("TESTPL00XXX", true).prefix(), "TESTPL00");
        assert_eq!(entry("TESTPL00", false).prefix(), "TESTPL00");
    }

    #[test]
    fn test_orphan() {
        let mut branch = entry("TESTPL00AAA", false);
        assert!(branch.is_orphan());

        branch.headquarter_code = Some("TESTPL00XXX".to_string());
        assert!(!branch.is_orphan());

        // A headquarters is never an orphan
        assert!(!entry("TESTPL00XXX", true).is_orphan());
    }

    #[test]
    fn test_display_address_placeholder() {
        let mut e = entry("TESTPL00XXX", true);
        assert_eq!(e.display_address(), "Warsaw HQ");

        e.address = "   ".to_string();
        assert_eq!(e.display_address(), NO_ADDRESS_AVAILABLE);
    }
}
