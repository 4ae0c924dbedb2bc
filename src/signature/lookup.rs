//! Read-only enumeration helpers over the catalog.
//!
//! Useful for building user-facing copy ("we accept PDF, DOC, DOCX, ...")
//! without duplicating the table.

use once_cell::sync::Lazy;

use super::{SIGNATURES, Signature};

static SUPPORTED_EXTENSIONS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    let mut extensions: Vec<_> = SIGNATURES
        .iter()
        .flat_map(|s| std::iter::once(s.extension).chain(s.extensions.iter().copied()))
        .collect();
    extensions.sort_unstable();
    extensions.dedup();
    extensions
});

static SUPPORTED_MIME_TYPES: Lazy<Vec<&'static str>> = Lazy::new(|| {
    let mut mime_types: Vec<_> = SIGNATURES.iter().map(|s| s.mime_type).collect();
    mime_types.sort_unstable();
    mime_types.dedup();
    mime_types
});

/// All catalog entries reporting `mime_type`, in catalog order.
///
/// # Examples
///
/// ```rust
/// use filesig::signature::{mime, signatures_for_mime};
///
/// let html: Vec<_> = signatures_for_mime(mime::HTML).collect();
/// assert!(html.len() > 1);
/// assert!(html.iter().all(|s| s.name == "HTML"));
/// ```
pub fn signatures_for_mime(mime_type: &str) -> impl Iterator<Item = &'static Signature> + '_ {
    SIGNATURES.iter().filter(move |s| s.mime_type == mime_type)
}

/// First catalog entry claiming `ext`, matched case-insensitively and with an
/// optional leading dot.
///
/// Note that several formats share one signature: `find_by_extension("docx")`
/// returns the ZIP entry.
pub fn find_by_extension(ext: &str) -> Option<&'static Signature> {
    if ext.is_empty() || ext == "." {
        return None;
    }
    SIGNATURES.iter().find(|s| s.has_extension(ext))
}

/// Sorted, de-duplicated list of every extension the catalog knows about.
pub fn supported_extensions() -> &'static [&'static str] {
    &SUPPORTED_EXTENSIONS
}

/// Sorted, de-duplicated list of every MIME type detection can report.
pub fn supported_mime_types() -> &'static [&'static str] {
    &SUPPORTED_MIME_TYPES
}
