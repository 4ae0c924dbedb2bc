//! The ordered signature table.
//!
//! Order is load-bearing. Detection returns the first entry whose pattern is a
//! prefix of the input, so the table is laid out in four tiers:
//!
//! 1. byte order marks, longest first (UTF-32LE `FF FE 00 00` would otherwise
//!    be reported as UTF-16LE `FF FE`);
//! 2. document formats;
//! 3. markup declarations, then the ZIP container family;
//! 4. archives, media, fonts, executables and databases. No two patterns in
//!    this tier overlap.
//!
//! An earlier entry must never be a prefix of a later one, otherwise the later
//! entry is unreachable. The tests below enforce that.

use super::mime;
use super::{Category, Signature};
use crate::common::BomKind;

/// Recommended minimum number of leading bytes to hand to the detector.
///
/// Long enough for every pattern in [`SIGNATURES`]. Not enforced: shorter
/// buffers are valid input and simply match fewer signatures.
pub const HEADER_LENGTH: usize = 24;

/// Every known signature, in priority order.
pub static SIGNATURES: &[Signature] = &[
    // --- Byte order marks ---
    Signature::text_bom("UTF-32LE BOM", BomKind::Utf32Le),
    Signature::text_bom("UTF-32BE BOM", BomKind::Utf32Be),
    Signature::text_bom("UTF-8 BOM", BomKind::Utf8),
    Signature::text_bom("UTF-16LE BOM", BomKind::Utf16Le),
    Signature::text_bom("UTF-16BE BOM", BomKind::Utf16Be),
    // --- Documents ---
    Signature::new(
        "PDF",
        b"%PDF",
        "pdf",
        mime::PDF,
        &["pdf"],
        Category::Document,
    ),
    Signature::new(
        "RTF",
        b"{\\rtf",
        "rtf",
        mime::RTF,
        &["rtf"],
        Category::Document,
    ),
    Signature::new(
        "OLE2 Compound Document",
        &[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1],
        "doc",
        mime::OLE_COMPOUND,
        &["doc", "dot", "xls", "xlt", "ppt", "pps", "msg", "vsd", "msi"],
        Category::Document,
    ),
    Signature::new(
        "WordPerfect",
        &[0xFF, 0x57, 0x50, 0x43],
        "wpd",
        mime::WORDPERFECT,
        &["wpd", "wp", "wp5", "wp6"],
        Category::Document,
    ),
    // --- Markup ---
    Signature::new(
        "XML",
        b"<?xml",
        "xml",
        mime::XML,
        &["xml", "xsl", "xslt", "xsd", "rss", "svg"],
        Category::Markup,
    ),
    Signature::new(
        "HTML",
        b"<!DOCTYPE html",
        "html",
        mime::HTML,
        &["html", "htm"],
        Category::Markup,
    ),
    Signature::new(
        "HTML",
        b"<!DOCTYPE HTML",
        "html",
        mime::HTML,
        &["html", "htm"],
        Category::Markup,
    ),
    Signature::new(
        "HTML",
        b"<!doctype html",
        "html",
        mime::HTML,
        &["html", "htm"],
        Category::Markup,
    ),
    Signature::new(
        "HTML",
        b"<html",
        "html",
        mime::HTML,
        &["html", "htm", "xhtml"],
        Category::Markup,
    ),
    Signature::new(
        "HTML",
        b"<HTML",
        "html",
        mime::HTML,
        &["html", "htm"],
        Category::Markup,
    ),
    // --- ZIP containers ---
    Signature::new(
        "ZIP",
        &[0x50, 0x4B, 0x03, 0x04],
        "zip",
        mime::ZIP,
        &[
            "zip", "docx", "xlsx", "pptx", "odt", "ods", "odp", "epub", "jar", "apk", "pages",
            "numbers", "key",
        ],
        Category::Archive,
    ),
    Signature::new(
        "ZIP (empty archive)",
        &[0x50, 0x4B, 0x05, 0x06],
        "zip",
        mime::ZIP,
        &["zip"],
        Category::Archive,
    ),
    Signature::new(
        "ZIP (spanned archive)",
        &[0x50, 0x4B, 0x07, 0x08],
        "zip",
        mime::ZIP,
        &["zip"],
        Category::Archive,
    ),
    // --- Archives and compressed streams ---
    Signature::new(
        "RAR",
        &[0x52, 0x61, 0x72, 0x21, 0x1A, 0x07, 0x01, 0x00],
        "rar",
        mime::RAR,
        &["rar"],
        Category::Archive,
    ),
    Signature::new(
        "RAR",
        &[0x52, 0x61, 0x72, 0x21, 0x1A, 0x07, 0x00],
        "rar",
        mime::RAR,
        &["rar"],
        Category::Archive,
    ),
    Signature::new(
        "7-Zip",
        &[0x37, 0x7A, 0xBC, 0xAF, 0x27, 0x1C],
        "7z",
        mime::SEVEN_ZIP,
        &["7z"],
        Category::Archive,
    ),
    Signature::new(
        "GZIP",
        &[0x1F, 0x8B],
        "gz",
        mime::GZIP,
        &["gz", "tgz"],
        Category::Archive,
    ),
    Signature::new(
        "BZIP2",
        b"BZh",
        "bz2",
        mime::BZIP2,
        &["bz2", "tbz2"],
        Category::Archive,
    ),
    Signature::new(
        "XZ",
        &[0xFD, 0x37, 0x7A, 0x58, 0x5A, 0x00],
        "xz",
        mime::XZ,
        &["xz", "txz"],
        Category::Archive,
    ),
    Signature::new(
        "Zstandard",
        &[0x28, 0xB5, 0x2F, 0xFD],
        "zst",
        mime::ZSTD,
        &["zst"],
        Category::Archive,
    ),
    Signature::new(
        "Microsoft Cabinet",
        b"MSCF",
        "cab",
        mime::CAB,
        &["cab"],
        Category::Archive,
    ),
    // --- Images ---
    Signature::new(
        "PNG",
        &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A],
        "png",
        mime::PNG,
        &["png"],
        Category::Image,
    ),
    Signature::new(
        "JPEG",
        &[0xFF, 0xD8, 0xFF],
        "jpg",
        mime::JPEG,
        &["jpg", "jpeg", "jpe", "jfif"],
        Category::Image,
    ),
    Signature::new(
        "JPEG 2000",
        &[0x00, 0x00, 0x00, 0x0C, 0x6A, 0x50, 0x20, 0x20, 0x0D, 0x0A, 0x87, 0x0A],
        "jp2",
        mime::JPEG_2000,
        &["jp2", "jpx"],
        Category::Image,
    ),
    Signature::new(
        "GIF",
        b"GIF87a",
        "gif",
        mime::GIF,
        &["gif"],
        Category::Image,
    ),
    Signature::new(
        "GIF",
        b"GIF89a",
        "gif",
        mime::GIF,
        &["gif"],
        Category::Image,
    ),
    Signature::new(
        "BMP",
        b"BM",
        "bmp",
        mime::BMP,
        &["bmp", "dib"],
        Category::Image,
    ),
    Signature::new(
        "TIFF",
        &[0x49, 0x49, 0x2A, 0x00],
        "tif",
        mime::TIFF,
        &["tif", "tiff"],
        Category::Image,
    ),
    Signature::new(
        "TIFF",
        &[0x4D, 0x4D, 0x00, 0x2A],
        "tif",
        mime::TIFF,
        &["tif", "tiff"],
        Category::Image,
    ),
    Signature::new(
        "ICO",
        &[0x00, 0x00, 0x01, 0x00],
        "ico",
        mime::ICO,
        &["ico"],
        Category::Image,
    ),
    Signature::new(
        "Photoshop",
        b"8BPS",
        "psd",
        mime::PSD,
        &["psd"],
        Category::Image,
    ),
    // --- Audio ---
    Signature::new("MP3", b"ID3", "mp3", mime::MP3, &["mp3"], Category::Audio),
    Signature::new(
        "FLAC",
        b"fLaC",
        "flac",
        mime::FLAC,
        &["flac"],
        Category::Audio,
    ),
    Signature::new(
        "OGG",
        b"OggS",
        "ogg",
        mime::OGG,
        &["ogg", "oga", "ogv", "opus"],
        Category::Audio,
    ),
    Signature::new(
        "MIDI",
        b"MThd",
        "mid",
        mime::MIDI,
        &["mid", "midi"],
        Category::Audio,
    ),
    // --- Video ---
    Signature::new(
        "Matroska",
        &[0x1A, 0x45, 0xDF, 0xA3],
        "mkv",
        mime::MATROSKA,
        &["mkv", "mka", "webm"],
        Category::Video,
    ),
    Signature::new(
        "FLV",
        &[0x46, 0x4C, 0x56, 0x01],
        "flv",
        mime::FLV,
        &["flv"],
        Category::Video,
    ),
    Signature::new(
        "ASF",
        &[0x30, 0x26, 0xB2, 0x75, 0x8E, 0x66, 0xCF, 0x11],
        "wmv",
        mime::ASF,
        &["asf", "wmv", "wma"],
        Category::Video,
    ),
    // --- Fonts ---
    Signature::new(
        "WOFF",
        b"wOFF",
        "woff",
        mime::WOFF,
        &["woff"],
        Category::Font,
    ),
    Signature::new(
        "WOFF2",
        b"wOF2",
        "woff2",
        mime::WOFF2,
        &["woff2"],
        Category::Font,
    ),
    Signature::new(
        "OpenType",
        b"OTTO",
        "otf",
        mime::OTF,
        &["otf"],
        Category::Font,
    ),
    Signature::new(
        "TrueType",
        &[0x00, 0x01, 0x00, 0x00, 0x00],
        "ttf",
        mime::TTF,
        &["ttf"],
        Category::Font,
    ),
    // --- Executables ---
    Signature::new(
        "Windows Executable",
        b"MZ",
        "exe",
        mime::PE,
        &["exe", "dll", "sys", "scr", "com"],
        Category::Executable,
    ),
    Signature::new(
        "ELF",
        &[0x7F, 0x45, 0x4C, 0x46],
        "elf",
        mime::ELF,
        &["so", "o", "elf"],
        Category::Executable,
    ),
    Signature::new(
        "Mach-O",
        &[0xFE, 0xED, 0xFA, 0xCE],
        "macho",
        mime::MACH_O,
        &["dylib"],
        Category::Executable,
    ),
    Signature::new(
        "Mach-O",
        &[0xFE, 0xED, 0xFA, 0xCF],
        "macho",
        mime::MACH_O,
        &["dylib"],
        Category::Executable,
    ),
    Signature::new(
        "Mach-O",
        &[0xCE, 0xFA, 0xED, 0xFE],
        "macho",
        mime::MACH_O,
        &["dylib"],
        Category::Executable,
    ),
    Signature::new(
        "Mach-O",
        &[0xCF, 0xFA, 0xED, 0xFE],
        "macho",
        mime::MACH_O,
        &["dylib"],
        Category::Executable,
    ),
    // Also the Mach-O universal binary magic; the class file reading wins.
    Signature::new(
        "Java Class",
        &[0xCA, 0xFE, 0xBA, 0xBE],
        "class",
        mime::JAVA_CLASS,
        &["class"],
        Category::Executable,
    ),
    Signature::new(
        "WebAssembly",
        &[0x00, 0x61, 0x73, 0x6D],
        "wasm",
        mime::WASM,
        &["wasm"],
        Category::Executable,
    ),
    Signature::new(
        "Dalvik Executable",
        b"dex\n",
        "dex",
        mime::DEX,
        &["dex"],
        Category::Executable,
    ),
    // --- Databases ---
    Signature::new(
        "SQLite",
        b"SQLite format 3\0",
        "sqlite",
        mime::SQLITE,
        &["sqlite", "sqlite3", "db"],
        Category::Database,
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn position(name: &str, pattern: &[u8]) -> usize {
        SIGNATURES
            .iter()
            .position(|s| s.name == name && s.pattern == pattern)
            .unwrap_or_else(|| panic!("{name} not in catalog"))
    }

    fn first_position(pred: impl Fn(&Signature) -> bool) -> usize {
        SIGNATURES.iter().position(pred).expect("no matching entry")
    }

    fn last_position(pred: impl Fn(&Signature) -> bool) -> usize {
        SIGNATURES.iter().rposition(pred).expect("no matching entry")
    }

    #[test]
    fn test_required_fields_non_empty() {
        for sig in SIGNATURES {
            assert!(!sig.name.is_empty());
            assert!(!sig.pattern.is_empty(), "{} has an empty pattern", sig.name);
            assert!(!sig.extension.is_empty(), "{} has no extension", sig.name);
            assert!(!sig.extension.starts_with('.'), "{} extension has a dot", sig.name);
            assert!(sig.mime_type.contains('/'), "{} has a bad MIME type", sig.name);
        }
    }

    #[test]
    fn test_patterns_fit_in_header() {
        for sig in SIGNATURES {
            assert!(sig.pattern.len() >= 2, "{} pattern too short", sig.name);
            assert!(sig.pattern.len() <= HEADER_LENGTH, "{} pattern too long", sig.name);
        }
    }

    #[test]
    fn test_no_entry_shadows_a_later_one() {
        for (i, earlier) in SIGNATURES.iter().enumerate() {
            for later in &SIGNATURES[i + 1..] {
                assert!(
                    !later.pattern.starts_with(earlier.pattern),
                    "{} ({:02X?}) hides {} ({:02X?})",
                    earlier.name,
                    earlier.pattern,
                    later.name,
                    later.pattern
                );
            }
        }
    }

    #[test]
    fn test_bom_order() {
        let utf32_le = position("UTF-32LE BOM", &[0xFF, 0xFE, 0x00, 0x00]);
        let utf32_be = position("UTF-32BE BOM", &[0x00, 0x00, 0xFE, 0xFF]);
        let utf8 = position("UTF-8 BOM", &[0xEF, 0xBB, 0xBF]);
        let utf16_le = position("UTF-16LE BOM", &[0xFF, 0xFE]);
        let utf16_be = position("UTF-16BE BOM", &[0xFE, 0xFF]);

        assert!(utf32_le < utf16_le);
        assert!(utf32_be < utf8);
        assert!(utf8 < utf16_le);
        assert!(utf8 < utf16_be);
    }

    #[test]
    fn test_tier_order() {
        let last_bom = last_position(|s| s.is_bom());
        let last_document = last_position(|s| s.category == Category::Document);
        let first_document = first_position(|s| s.category == Category::Document);
        let last_markup = last_position(|s| s.category == Category::Markup);
        let first_zip = first_position(|s| s.mime_type == mime::ZIP);
        let last_zip = last_position(|s| s.mime_type == mime::ZIP);
        let first_binary = first_position(|s| {
            matches!(
                s.category,
                Category::Image | Category::Audio | Category::Video | Category::Executable
            )
        });

        assert!(last_bom < first_document);
        assert!(last_document < first_zip);
        assert!(last_markup < first_zip);
        assert!(last_zip < first_binary);
    }

    #[test]
    fn test_bom_tag_only_on_text_entries() {
        let boms: Vec<_> = SIGNATURES.iter().filter(|s| s.is_bom()).collect();
        assert_eq!(boms.len(), 5);
        for sig in boms {
            assert_eq!(sig.mime_type, mime::PLAIN_TEXT);
            assert_eq!(sig.category, Category::Text);
            assert_eq!(sig.bom.map(|b| b.as_bytes()), Some(sig.pattern));
        }
    }

    #[test]
    fn test_zip_lists_office_formats() {
        let zip = &SIGNATURES[position("ZIP", &[0x50, 0x4B, 0x03, 0x04])];
        for ext in ["docx", "xlsx", "odt", "epub", "jar", "apk"] {
            assert!(zip.extensions.contains(&ext), "ZIP should list {ext}");
        }
    }
}
