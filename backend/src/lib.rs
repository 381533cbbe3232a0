//! SwiftReg Backend Service
//!
//! The operational shell around the shared registry core: configuration
//! loading, CSV seed import, and JSON response shaping for the CLI
//! entry point.

pub mod api;
pub mod config;
pub mod error;
pub mod import;

pub use config::Config;
pub use error::{BackendError, BackendResult};
pub use import::ImportReport;
