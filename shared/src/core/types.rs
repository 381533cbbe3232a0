//! Core constants and shared types for the SwiftReg registry.

use serde::Serialize;

/// Minimum SWIFT code length after normalization
pub const MIN_CODE_LENGTH: usize = 8;

/// Maximum SWIFT code length after normalization
pub const MAX_CODE_LENGTH: usize = 11;

/// Length of the institution prefix shared by a headquarters and its branches
pub const PREFIX_LENGTH: usize = 8;

/// Suffix identifying a headquarters code
pub const HEADQUARTERS_SUFFIX: &str = "XXX";

/// Minimum address length after defaulting
pub const MIN_ADDRESS_LENGTH: usize = 3;

/// Maximum address length
pub const MAX_ADDRESS_LENGTH: usize = 500;

/// Stored in place of an empty address supplied on insert
pub const NO_ADDRESS_PROVIDED: &str = "No address provided";

/// Shown in place of a blank stored address
pub const NO_ADDRESS_AVAILABLE: &str = "No address available";

/// Registry statistics for monitoring and display
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RegistryStats {
    /// Total number of registered codes
    pub total_entries: usize,

    /// Number of headquarters entries
    pub headquarters: usize,

    /// Number of branch entries (linked or not)
    pub branches: usize,

    /// Number of branches with no headquarters link
    pub orphans: usize,
}
