//! Unified error types for filesig.
//!
//! Detection and classification never fail; only the opt-in fallible surfaces
//! (explicit header reads and upload policy loading) return these errors.

// Submodule declarations
pub mod types;

// Re-exports
pub use types::{Error, Result, io_error_with_path};
