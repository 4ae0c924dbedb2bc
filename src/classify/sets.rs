//! MIME type sets used by the classifiers, and the trait that lets callers
//! bring their own.

use std::borrow::Borrow;
use std::collections::{BTreeSet, HashSet};
use std::hash::{BuildHasher, Hash};

use phf::phf_set;

/// MIME types accepted for resume uploads.
///
/// DOCX is listed even though detection reports DOCX files as ZIP; it keeps
/// the set usable as an allow-list for claimed content types too.
pub static RESUME_MIME_TYPES: phf::Set<&'static str> = phf_set! {
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "application/zip",
    "application/rtf",
    "text/plain",
    "text/html",
    "application/xml",
};

/// MIME types considered document-like by [`is_document`](super::is_document).
pub static DOCUMENT_MIME_TYPES: phf::Set<&'static str> = phf_set! {
    "application/pdf",
    "application/msword",
    "application/rtf",
    "application/vnd.wordperfect",
    "application/zip",
    "text/plain",
};

/// Detected MIME types that count as text for
/// [`is_likely_plain_text`](super::is_likely_plain_text).
pub static TEXT_LIKE_MIME_TYPES: phf::Set<&'static str> = phf_set! {
    "text/plain",
    "text/html",
    "application/xml",
};

/// A set of MIME type strings that can be queried for membership.
///
/// Implemented for the usual standard collections of `String`/`&str`, for
/// `phf::Set<&'static str>`, and for slices, arrays and vectors of anything
/// string-like, so allow-lists can be written as literals:
///
/// ```rust
/// use filesig::is_allowed;
///
/// assert!(is_allowed(b"%PDF-1.4", &["application/pdf", "application/zip"]));
/// ```
pub trait MimeTypeSet {
    /// Whether `mime_type` is a member of the set. Comparison is exact.
    fn contains_mime(&self, mime_type: &str) -> bool;
}

impl<T: MimeTypeSet + ?Sized> MimeTypeSet for &T {
    #[inline]
    fn contains_mime(&self, mime_type: &str) -> bool {
        (**self).contains_mime(mime_type)
    }
}

impl<S, H> MimeTypeSet for HashSet<S, H>
where
    S: Borrow<str> + Hash + Eq,
    H: BuildHasher,
{
    #[inline]
    fn contains_mime(&self, mime_type: &str) -> bool {
        self.contains(mime_type)
    }
}

impl<S> MimeTypeSet for BTreeSet<S>
where
    S: Borrow<str> + Ord,
{
    #[inline]
    fn contains_mime(&self, mime_type: &str) -> bool {
        self.contains(mime_type)
    }
}

impl MimeTypeSet for phf::Set<&'static str> {
    #[inline]
    fn contains_mime(&self, mime_type: &str) -> bool {
        self.contains(mime_type)
    }
}

impl<S: AsRef<str>> MimeTypeSet for [S] {
    fn contains_mime(&self, mime_type: &str) -> bool {
        self.iter().any(|s| s.as_ref() == mime_type)
    }
}

impl<S: AsRef<str>, const N: usize> MimeTypeSet for [S; N] {
    #[inline]
    fn contains_mime(&self, mime_type: &str) -> bool {
        self.as_slice().contains_mime(mime_type)
    }
}

impl<S: AsRef<str>> MimeTypeSet for Vec<S> {
    #[inline]
    fn contains_mime(&self, mime_type: &str) -> bool {
        self.as_slice().contains_mime(mime_type)
    }
}
