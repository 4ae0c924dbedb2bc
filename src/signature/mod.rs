//! Signature records and the ordered catalog they live in.
//!
//! A [`Signature`] pairs a byte pattern that must appear at offset 0 with the
//! metadata of the format it identifies. The catalog ([`SIGNATURES`]) is a
//! compile-time table whose order is the tie-break rule: the first entry whose
//! pattern is a prefix of the input wins.

// Submodule declarations
pub mod catalog;
pub mod lookup;
pub mod mime;

use serde::Serialize;

use crate::common::BomKind;

// Re-exports
pub use catalog::{HEADER_LENGTH, SIGNATURES};
pub use lookup::{
    find_by_extension, signatures_for_mime, supported_extensions, supported_mime_types,
};

/// Coarse family a signature belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Plain text identified by a byte order mark
    Text,
    /// Word processing and page description formats
    Document,
    /// XML and HTML declarations
    Markup,
    /// ZIP and other compressed containers
    Archive,
    Image,
    Audio,
    Video,
    Font,
    /// Native code, bytecode and other loadable binaries
    Executable,
    Database,
}

/// A single magic-number signature.
///
/// All fields are `'static`: signatures only ever live in [`SIGNATURES`] and
/// detection hands out references to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Signature {
    /// Human-readable label, not necessarily unique
    pub name: &'static str,
    /// Bytes that must appear starting at offset 0
    #[serde(serialize_with = "serialize_pattern")]
    pub pattern: &'static [u8],
    /// Primary extension, without the leading dot
    pub extension: &'static str,
    pub mime_type: &'static str,
    /// Every extension known to share this signature (may be empty)
    pub extensions: &'static [&'static str],
    pub category: Category,
    /// Set only for entries that stand for a byte order mark
    pub bom: Option<BomKind>,
}

impl Signature {
    const fn new(
        name: &'static str,
        pattern: &'static [u8],
        extension: &'static str,
        mime_type: &'static str,
        extensions: &'static [&'static str],
        category: Category,
    ) -> Self {
        Self {
            name,
            pattern,
            extension,
            mime_type,
            extensions,
            category,
            bom: None,
        }
    }

    const fn text_bom(name: &'static str, kind: BomKind) -> Self {
        Self {
            name,
            pattern: kind.as_bytes(),
            extension: "txt",
            mime_type: mime::PLAIN_TEXT,
            extensions: &["txt", "text", "csv"],
            category: Category::Text,
            bom: Some(kind),
        }
    }

    /// Check whether the whole pattern is a literal prefix of `bytes`.
    ///
    /// A buffer shorter than the pattern never matches, even if every byte it
    /// does have agrees with the pattern.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use filesig::SIGNATURES;
    ///
    /// let pdf = SIGNATURES.iter().find(|s| s.name == "PDF").unwrap();
    /// assert!(pdf.matches(b"%PDF-1.7"));
    /// assert!(!pdf.matches(b"%P"));
    /// ```
    #[inline]
    pub fn matches(&self, bytes: &[u8]) -> bool {
        crate::detection::matching::signature_matches(bytes, self.pattern)
    }

    /// Whether this entry stands for a byte order mark.
    #[inline]
    pub const fn is_bom(&self) -> bool {
        self.bom.is_some()
    }

    /// Whether `ext` (case-insensitive, leading dot tolerated) is the primary
    /// extension or one of the listed extensions.
    pub fn has_extension(&self, ext: &str) -> bool {
        let ext = ext.strip_prefix('.').unwrap_or(ext);
        self.extension.eq_ignore_ascii_case(ext)
            || self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext))
    }
}

/// Patterns are emitted as upper-case hex pairs ("25 50 44 46"), the way magic
/// numbers are usually written down.
fn serialize_pattern<S: serde::Serializer>(
    pattern: &&'static [u8],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    let hex = pattern
        .iter()
        .map(|b| format!("{b:02X}"))
        .collect::<Vec<_>>()
        .join(" ");
    serializer.serialize_str(&hex)
}
