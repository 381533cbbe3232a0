//! Data models for registry entries.

mod entry;

pub use entry::{CandidateCode, SwiftEntry};
