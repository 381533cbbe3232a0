//! Error types for registry operations.
//!
//! Registry failures are machine-distinguishable kinds, not opaque
//! exceptions: the transport collaborator maps each kind onto a
//! protocol-specific status, and the bulk importer branches on them to
//! skip and continue. Validation surfaces the first applicable kind only.

use thiserror::Error;

/// Failure kinds surfaced by registry operations.
///
/// None of these corrupt registry state; the registry remains fully
/// queryable and insertable after any rejected operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// One or more required fields were empty after normalization
    #[error("Missing required fields: {message}")]
    MissingField { message: String },

    /// Address outside the 3-500 character range
    #[error("Address must be between 3 and 500 characters, got {length}")]
    InvalidAddressLength { length: usize },

    /// Code length outside 8-11 or non-alphanumeric characters
    #[error("Invalid SWIFT code format: {message}")]
    InvalidCodeFormat { message: String },

    /// Code already present in the store
    #[error("SWIFT code {code} already exists")]
    DuplicateCode { code: String },

    /// ISO2 code not recognized
    #[error("Country ISO2 code '{iso2}' is not valid")]
    InvalidCountryCode { iso2: String },

    /// Supplied country name disagrees with the canonical name for the ISO2
    #[error("Country name '{provided}' does not match the expected name '{expected}'")]
    CountryNameMismatch { provided: String, expected: String },

    /// Queried or deleted code does not exist
    #[error("SWIFT code not found: {code}")]
    NotFound { code: String },

    /// Opaque store-level failure, surfaced as a server-side error
    #[error("Store unavailable: {message}")]
    StoreUnavailable { message: String },
}

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Opaque failure from the backing store.
///
/// Store implementations wrap whatever I/O or driver error they hit; the
/// registry never inspects the contents, only propagates them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct StoreError {
    pub message: String,
}

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<StoreError> for RegistryError {
    fn from(err: StoreError) -> Self {
        RegistryError::StoreUnavailable {
            message: err.message,
        }
    }
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RegistryError::DuplicateCode {
            code: "TESTPL00XXX".to_string(),
        };
        assert_eq!(err.to_string(), "SWIFT code TESTPL00XXX already exists");

        let err = RegistryError::NotFound {
            code: "TESTPL00AAA".to_string(),
        };
        assert_eq!(err.to_string(), "SWIFT code not found: TESTPL00AAA");
    }

    #[test]
    fn test_store_error_conversion() {
        let store_err = StoreError::new("connection reset");
        let err: RegistryError = store_err.into();

        match err {
            RegistryError::StoreUnavailable { message } => {
                assert_eq!(message, "connection reset");
            }
            _ => panic!("Unexpected error conversion"),
        }
    }
}
