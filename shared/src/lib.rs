//! SwiftReg Shared Library
//!
//! This crate contains the core of the SwiftReg registry: the entry
//! model, candidate validation, headquarters/branch classification, and
//! the registry facade that maintains the headquarters↔branch association
//! as codes are inserted and deleted in arbitrary order.
//!
//! # Usage
//!
//! ```rust
//! use swiftreg_shared::{CandidateCode, MemoryStore, SwiftRegistry};
//!
//! let registry = SwiftRegistry::new(MemoryStore::new());
//!
//! // Branches may arrive before their headquarters; they are stored as
//! // orphans and linked retroactively.
//! registry
//!     .insert(&CandidateCode::new(
//!         "TESTPL00AAA",
//!         "Test Bank",
//!         "Branch Office",
//!         "PL",
//!         "POLAND",
//!     ))
//!     .unwrap();
//!
//! let outcome = registry
//!     .insert(&CandidateCode::new(
//!         "TESTPL00XXX",
//!         "Test Bank",
//!         "Warsaw HQ",
//!         "PL",
//!         "POLAND",
//!     ))
//!     .unwrap();
//! assert!(outcome.is_headquarters());
//! ```

pub mod core;
pub mod countries;
pub mod models;
pub mod validation;

// Re-export commonly used types for convenience
pub use crate::core::errors::{RegistryError, RegistryResult, StoreError, StoreResult};
pub use crate::core::registry::{DeleteOutcome, InsertOutcome, SwiftRegistry};
pub use crate::core::store::{CodeStore, MemoryStore};
pub use crate::core::types::RegistryStats;
pub use crate::models::{CandidateCode, SwiftEntry};

/// Current library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
