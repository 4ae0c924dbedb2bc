//! Upload allow-listing.
//!
//! An [`UploadPolicy`] bundles an allow-list of MIME types with the
//! plain-text fallback and turns raw content into a [`Verdict`]. Policies are
//! plain serde values, typically loaded from YAML:
//!
//! ```rust
//! use filesig::policy::UploadPolicy;
//!
//! let policy = UploadPolicy::from_yaml_str(
//!     "allowed_mime_types: [application/pdf, application/zip]\n",
//! )?;
//! assert!(policy.evaluate(b"%PDF-1.6").is_accepted());
//! assert!(!policy.evaluate(b"MZ\x90\x00").is_accepted());
//! # Ok::<(), filesig::Error>(())
//! ```

// Submodule declarations
pub mod config;
pub mod verdict;

// Re-exports
pub use config::{MAX_HEADER_LENGTH, UploadPolicy};
pub use verdict::{Rejection, Verdict};
