//! Candidate validation for registry inserts.
//!
//! Checks run in a fixed order and short-circuit on the first failure, so
//! callers always see a single, deterministic error kind. String fields
//! are trimmed, and code / ISO2 / country name are uppercased; the
//! normalized form is what gets stored.

use std::sync::OnceLock;

use regex::Regex;

use crate::core::errors::{RegistryError, RegistryResult};
use crate::core::store::CodeStore;
use crate::core::types::{
    MAX_ADDRESS_LENGTH, MAX_CODE_LENGTH, MIN_ADDRESS_LENGTH, MIN_CODE_LENGTH, NO_ADDRESS_PROVIDED,
};
use crate::countries;
use crate::models::CandidateCode;

fn code_charset() -> &'static Regex {
    static CODE_CHARSET: OnceLock<Regex> = OnceLock::new();
    CODE_CHARSET.get_or_init(|| Regex::new("^[A-Za-z0-9]+$").expect("valid pattern"))
}

/// A candidate that has passed every check, with canonical field values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedCandidate {
    pub swift_code: String,
    pub bank_name: String,
    pub address: String,
    pub country_iso2: String,
    pub country_name: String,
}

/// Run the full ordered check sequence against a raw candidate.
///
/// The duplicate check consults `store`; for the check to be meaningful
/// the caller must hold whatever lock makes it atomic with the subsequent
/// insert (the registry takes its write lock around both).
pub fn validate_candidate<S: CodeStore + ?Sized>(
    candidate: &CandidateCode,
    store: &S,
) -> RegistryResult<NormalizedCandidate> {
    let swift_code = candidate.swift_code.trim().to_uppercase();
    let country_iso2 = candidate.country_iso2.trim().to_uppercase();
    let country_name = candidate.country_name.trim().to_uppercase();
    let bank_name = candidate.bank_name.trim().to_string();
    let address = candidate.address.trim().to_string();

    if swift_code.is_empty() || country_iso2.is_empty() || country_name.is_empty() || bank_name.is_empty()
    {
        return Err(RegistryError::MissingField {
            message: "swiftCode, countryISO2, countryName and bankName must all be provided"
                .to_string(),
        });
    }

    // An empty address is defaulted, not rejected
    let address = if address.is_empty() {
        NO_ADDRESS_PROVIDED.to_string()
    } else {
        address
    };

    let address_len = address.chars().count();
    if address_len < MIN_ADDRESS_LENGTH || address_len > MAX_ADDRESS_LENGTH {
        return Err(RegistryError::InvalidAddressLength {
            length: address_len,
        });
    }

    let code_len = swift_code.chars().count();
    if code_len < MIN_CODE_LENGTH || code_len > MAX_CODE_LENGTH {
        return Err(RegistryError::InvalidCodeFormat {
            message: format!(
                "SWIFT code must be between 8 and 11 characters, got {} ('{}')",
                code_len, swift_code
            ),
        });
    }

    if !code_charset().is_match(&swift_code) {
        return Err(RegistryError::InvalidCodeFormat {
            message: "SWIFT code must contain only letters A-Z and digits 0-9".to_string(),
        });
    }

    if store.exists_by_code(&swift_code)? {
        return Err(RegistryError::DuplicateCode { code: swift_code });
    }

    if !countries::is_valid_country_code(&country_iso2) {
        return Err(RegistryError::InvalidCountryCode { iso2: country_iso2 });
    }

    let expected = countries::canonical_country_name(&country_iso2);
    if country_name != expected {
        return Err(RegistryError::CountryNameMismatch {
            provided: country_name,
            expected: expected.to_string(),
        });
    }

    Ok(NormalizedCandidate {
        swift_code,
        bank_name,
        address,
        country_iso2,
        country_name,
    })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::core::store::MemoryStore;
    use crate::models::SwiftEntry;

    fn candidate() -> CandidateCode {
        CandidateCode::new("TESTPL00XXX", "Test Bank", "Warsaw HQ", "PL", "POLAND")
    }

    #[test]
    fn test_valid_candidate_is_normalized() {
        let store = MemoryStore::new();
        let raw = CandidateCode::new("  testpl00xxx ", " Test Bank ", " Warsaw HQ ", "pl", "Poland");

        let normalized = validate_candidate(&raw, &store).unwrap();
        assert_eq!(normalized.swift_code, "TESTPL00XXX");
        assert_eq!(normalized.bank_name, "Test Bank");
        assert_eq!(normalized.address, "Warsaw HQ");
        assert_eq!(normalized.country_iso2, "PL");
        assert_eq!(normalized.country_name, "POLAND");
    }

    #[test]
    fn test_missing_fields() {
        let store = MemoryStore::new();

        let mut raw = candidate();
        raw.bank_name = "   ".to_string();
        assert_matches!(
            validate_candidate(&raw, &store),
            Err(RegistryError::MissingField { .. })
        );

        let mut raw = candidate();
        raw.swift_code = String::new();
        assert_matches!(
            validate_candidate(&raw, &store),
            Err(RegistryError::MissingField { .. })
        );
    }

    #[test]
    fn test_empty_address_is_defaulted() {
        let store = MemoryStore::new();
        let mut raw = candidate();
        raw.address = "  ".to_string();

        let normalized = validate_candidate(&raw, &store).unwrap();
        assert_eq!(normalized.address, NO_ADDRESS_PROVIDED);
    }

    #[test]
    fn test_address_length_bounds() {
        let store = MemoryStore::new();

        let mut raw = candidate();
        raw.address = "ab".to_string();
        assert_matches!(
            validate_candidate(&raw, &store),
            Err(RegistryError::InvalidAddressLength { length: 2 })
        );

        let mut raw = candidate();
        raw.address = "x".repeat(MAX_ADDRESS_LENGTH + 1);
        assert_matches!(
            validate_candidate(&raw, &store),
            Err(RegistryError::InvalidAddressLength { .. })
        );
    }

    #[test]
    fn test_code_length_bounds() {
        let store = MemoryStore::new();

        let mut raw = candidate();
        raw.swift_code = "TESTPL0".to_string();
        assert_matches!(
            validate_candidate(&raw, &store),
            Err(RegistryError::InvalidCodeFormat { .. })
        );

        let mut raw = candidate();
        raw.swift_code = "TESTPL00XXX0".to_string();
        assert_matches!(
            validate_candidate(&raw, &store),
            Err(RegistryError::InvalidCodeFormat { .. })
        );
    }

    #[test]
    fn test_code_charset() {
        let store = MemoryStore::new();
        let mut raw = candidate();
        raw.swift_code = "TESTPL-0XXX".to_string();
        assert_matches!(
            validate_candidate(&raw, &store),
            Err(RegistryError::InvalidCodeFormat { .. })
        );
    }

    #[test]
    fn test_duplicate_code() {
        let mut store = MemoryStore::new();
        store
            .save(SwiftEntry::new(
                "TESTPL00XXX".to_string(),
                "Test Bank".to_string(),
                "Warsaw HQ".to_string(),
                "PL".to_string(),
                "POLAND".to_string(),
                true,
            ))
            .unwrap();

        assert_matches!(
            validate_candidate(&candidate(), &store),
            Err(RegistryError::DuplicateCode { code }) if code == "TESTPL00XXX"
        );
    }

    #[test]
    fn test_invalid_country_code() {
        let store = MemoryStore::new();
        let raw = CandidateCode::new("TESTXX00XXX", "Test Bank", "Somewhere", "XX", "FAKELAND");
        assert_matches!(
            validate_candidate(&raw, &store),
            Err(RegistryError::InvalidCountryCode { iso2 }) if iso2 == "XX"
        );
    }

    #[test]
    fn test_country_name_mismatch() {
        let store = MemoryStore::new();
        let mut raw = candidate();
        raw.country_name = "GERMANY".to_string();
        assert_matches!(
            validate_candidate(&raw, &store),
            Err(RegistryError::CountryNameMismatch { provided, expected })
                if provided == "GERMANY" && expected == "POLAND"
        );
    }

    #[test]
    fn test_check_order_short_circuits() {
        // A candidate failing several checks reports the earliest one:
        // bad code length comes before the unknown country
        let store = MemoryStore::new();
        let raw = CandidateCode::new("SHORT", "Test Bank", "Somewhere", "XX", "FAKELAND");
        assert_matches!(
            validate_candidate(&raw, &store),
            Err(RegistryError::InvalidCodeFormat { .. })
        );
    }
}
