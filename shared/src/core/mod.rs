//! Core registry engine: errors, store contract, classification and the
//! registry facade itself.

pub mod classify;
pub mod errors;
pub mod registry;
pub mod store;
pub mod types;
