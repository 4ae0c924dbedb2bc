//! Types shared by the catalog, detector, classifiers and upload policy.

// Submodule declarations
pub mod bom;
pub mod error;

// Re-exports for convenience
pub use bom::BomKind;
pub use error::{Error, Result};
