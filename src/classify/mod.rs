//! Boolean classifiers built on top of detection.
//!
//! Every classifier is total and fails closed: unrecognised input is "not this
//! format" and "not allowed", never an error.

// Submodule declarations
pub mod functions;
pub mod sets;
pub mod text;

// Re-exports
pub use functions::{
    has_text_bom, is_allowed, is_document, is_likely_plain_text, is_pdf, is_resume_format, is_rtf,
    is_zip_based, text_bom,
};
pub use sets::{DOCUMENT_MIME_TYPES, MimeTypeSet, RESUME_MIME_TYPES, TEXT_LIKE_MIME_TYPES};
pub use text::{TEXT_SNIFF_LENGTH, looks_like_text};
