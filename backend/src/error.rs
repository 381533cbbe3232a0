//! Error types for the SwiftReg backend service.

use thiserror::Error;

use swiftreg_shared::RegistryError;

/// Main error type for the backend
#[derive(Error, Debug)]
pub enum BackendError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// CSV import errors (hard failures, not skipped rows)
    #[error("Import error: {0}")]
    Import(#[from] ImportError),

    /// Registry operation failures
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    /// File system operation errors
    #[error("File system error: {0}")]
    FileSystem(#[from] std::io::Error),
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: String },

    #[error("Configuration parsing failed: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {field} - {reason}")]
    Invalid { field: String, reason: String },
}

/// Hard failures while reading a CSV source.
///
/// Per-row registry rejections are not errors; the importer skips them
/// and keeps going.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Failed to read CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column: {column}")]
    MissingColumn { column: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for backend operations
pub type BackendResult<T> = Result<T, BackendError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ImportError::MissingColumn {
            column: "SWIFT CODE".to_string(),
        };
        assert_eq!(err.to_string(), "Missing required column: SWIFT CODE");
    }

    #[test]
    fn test_error_chaining() {
        let registry_err = RegistryError::NotFound {
            code: "TESTPL00XXX".to_string(),
        };
        let backend_err = BackendError::from(registry_err);
        assert!(backend_err.to_string().contains("Registry error"));
    }
}
