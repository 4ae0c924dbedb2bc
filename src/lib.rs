//! filesig - Identify file formats from their leading bytes
//!
//! This library recognises a file's actual format from the "magic numbers" at
//! the start of its content, independent of whatever extension or MIME type
//! the uploader claims. It is meant for validating untrusted uploads against an
//! allow-list before handing them to heavier parsers.
//!
//! # Features
//!
//! - **Ordered signature catalog**: a compile-time table where the first
//!   matching entry wins ([`SIGNATURES`])
//! - **Total detection**: any buffer, including an empty one, is valid input;
//!   unrecognised content is simply `None` ([`detect`])
//! - **Fail-closed classifiers**: document, PDF, ZIP, RTF, BOM and resume
//!   predicates that answer `false` for anything unrecognised
//! - **Upload policies**: YAML-configurable allow-lists with a verdict and a
//!   reason ([`policy::UploadPolicy`])
//!
//! Container formats are not opened: DOCX, XLSX, ODT, EPUB, JAR and APK are all
//! reported as ZIP.
//!
//! # Example - Detecting a format
//!
//! ```
//! use filesig::{detect, HEADER_LENGTH};
//!
//! let upload: &[u8] = b"%PDF-1.7\n%\xE2\xE3\xCF\xD3\n";
//! let header = &upload[..upload.len().min(HEADER_LENGTH)];
//!
//! let sig = detect(header).expect("recognised");
//! assert_eq!(sig.name, "PDF");
//! assert_eq!(sig.mime_type, "application/pdf");
//! assert_eq!(sig.extension, "pdf");
//! ```
//!
//! # Example - Screening a resume upload
//!
//! ```
//! use filesig::{is_allowed, is_resume_format};
//!
//! let exe = [0x4D, 0x5A, 0x90, 0x00];
//! assert!(!is_resume_format(&exe));
//! assert!(!is_allowed(&exe, &["application/pdf", "application/zip"]));
//!
//! // BOM-less text has no signature but passes the text heuristic.
//! assert!(is_resume_format(b"Hello resume text"));
//! ```
//!
//! # Example - Detecting from a file
//!
//! ```no_run
//! use filesig::detect_file;
//!
//! // Unreadable paths are reported as "no match", never as an error.
//! if let Some(sig) = detect_file("uploads/cv.bin") {
//!     println!("{} -> .{}", sig.name, sig.extension);
//! }
//! ```

/// Shared error type and byte order mark definitions
pub mod common;

/// Signature records, the ordered catalog and MIME constants
pub mod signature;

/// Prefix-matching detector and header readers
pub mod detection;

/// Format predicates derived from detection
pub mod classify;

/// Configurable upload allow-lists
pub mod policy;

// Re-export the primary API at the crate root
pub use classify::{
    DOCUMENT_MIME_TYPES, MimeTypeSet, RESUME_MIME_TYPES, TEXT_SNIFF_LENGTH, has_text_bom,
    is_allowed, is_document, is_likely_plain_text, is_pdf, is_resume_format, is_rtf,
    is_zip_based, looks_like_text, text_bom,
};
pub use common::{BomKind, Error, Result};
pub use detection::{detect, detect_all, detect_file, detect_reader, read_header};
pub use policy::{Rejection, UploadPolicy, Verdict};
pub use signature::{Category, HEADER_LENGTH, SIGNATURES, Signature};
