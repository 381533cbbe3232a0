//! Headquarters/branch classification.
//!
//! Classification is derived purely from a code's text: a code ending in
//! `XXX` is a headquarters, anything else a branch. The first 8 characters
//! form the institution prefix tying a branch to its headquarters.

use crate::core::types::{HEADQUARTERS_SUFFIX, PREFIX_LENGTH};

/// Classification derived from a normalized code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub is_headquarters: bool,
    pub prefix: String,
}

/// Classify an already-normalized, length-validated code.
pub fn classify(code: &str) -> Classification {
    Classification {
        is_headquarters: code.ends_with(HEADQUARTERS_SUFFIX),
        prefix: code[..PREFIX_LENGTH].to_string(),
    }
}

/// The headquarters code a branch with this code would link to.
pub fn expected_headquarter_code(code: &str) -> String {
    format!("{}{}", &code[..PREFIX_LENGTH], HEADQUARTERS_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headquarters_classification() {
        let c = classify("TESTPL00XXX");
        assert!(c.is_headquarters);
        assert_eq!(c.prefix, "TESTPL00");
    }

    #[test]
    fn test_branch_classification() {
        let c = classify("TESTPL00AAA");
        assert!(!c.is_headquarters);
        assert_eq!(c.prefix, "TESTPL00");
    }

    #[test]
    fn test_eight_char_codes() {
        // An 8-character code is a branch unless it happens to end in XXX
        assert!(!classify("TESTPL00").is_headquarters);

        let c = classify("TESTPXXX");
        assert!(c.is_headquarters);
        assert_eq!(c.prefix, "TESTPXXX");
    }

    #[test]
    fn test_expected_headquarter_code() {
        assert_eq!(expected_headquarter_code("TESTPL00AAA"), "TESTPL00XXX");
        assert_eq!(expected_headquarter_code("TESTPL00"), "TESTPL00XXX");
        // A headquarters expects itself
        assert_eq!(expected_headquarter_code("TESTPL00XXX"), "TESTPL00XXX");
    }
}
