//! Byte Order Mark (BOM) kinds recognised by the signature catalog.
//!
//! Catalog entries that stand for a BOM carry an explicit [`BomKind`] tag, so
//! classifiers never have to infer BOM-ness from an entry's display name.

use serde::Serialize;

/// Supported BOM encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BomKind {
    Utf8,
    Utf16Le,
    Utf16Be,
    Utf32Le,
    Utf32Be,
}

impl BomKind {
    /// Returns the byte representation of the BOM.
    #[inline]
    pub const fn as_bytes(&self) -> &'static [u8] {
        match self {
            BomKind::Utf8 => &UTF8_BOM,
            BomKind::Utf16Le => &UTF16_LE_BOM,
            BomKind::Utf16Be => &UTF16_BE_BOM,
            BomKind::Utf32Le => &UTF32_LE_BOM,
            BomKind::Utf32Be => &UTF32_BE_BOM,
        }
    }

    /// Returns the length in bytes of the BOM.
    #[inline]
    #[allow(clippy::len_without_is_empty)] // No need to check for empty BOMs
    pub const fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Encoding label as registered with IANA.
    #[inline]
    pub const fn encoding(&self) -> &'static str {
        match self {
            BomKind::Utf8 => "UTF-8",
            BomKind::Utf16Le => "UTF-16LE",
            BomKind::Utf16Be => "UTF-16BE",
            BomKind::Utf32Le => "UTF-32LE",
            BomKind::Utf32Be => "UTF-32BE",
        }
    }

    /// Returns the content that follows the BOM, or `None` if `bytes` does
    /// not start with this BOM.
    #[inline]
    pub fn strip<'a>(&self, bytes: &'a [u8]) -> Option<&'a [u8]> {
        bytes.strip_prefix(self.as_bytes())
    }
}

/// UTF-8 BOM bytes.
pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];
/// UTF-16 little-endian BOM bytes.
pub const UTF16_LE_BOM: [u8; 2] = [0xFF, 0xFE];
/// UTF-16 big-endian BOM bytes.
pub const UTF16_BE_BOM: [u8; 2] = [0xFE, 0xFF];
/// UTF-32 little-endian BOM bytes.
pub const UTF32_LE_BOM: [u8; 4] = [0xFF, 0xFE, 0x00, 0x00];
/// UTF-32 big-endian BOM bytes.
pub const UTF32_BE_BOM: [u8; 4] = [0x00, 0x00, 0xFE, 0xFF];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bom_lengths() {
        assert_eq!(BomKind::Utf8.len(), 3);
        assert_eq!(BomKind::Utf16Le.len(), 2);
        assert_eq!(BomKind::Utf16Be.len(), 2);
        assert_eq!(BomKind::Utf32Le.len(), 4);
        assert_eq!(BomKind::Utf32Be.len(), 4);
    }

    #[test]
    fn test_utf32_le_shares_utf16_le_prefix() {
        // The catalog has to list UTF-32LE first because of this overlap.
        assert!(UTF32_LE_BOM.starts_with(&UTF16_LE_BOM));
    }

    #[test]
    fn test_strip() {
        let data = [0xEF, 0xBB, 0xBF, b'H', b'i'];
        assert_eq!(BomKind::Utf8.strip(&data), Some(&b"Hi"[..]));
        assert_eq!(BomKind::Utf16Be.strip(&data), None);
        assert_eq!(BomKind::Utf8.strip(&[0xEF, 0xBB]), None);
    }

    #[test]
    fn test_encoding_labels() {
        assert_eq!(BomKind::Utf8.encoding(), "UTF-8");
        assert_eq!(BomKind::Utf32Be.encoding(), "UTF-32BE");
    }
}
