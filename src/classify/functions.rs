//! Format predicates over a byte buffer.

use super::sets::{DOCUMENT_MIME_TYPES, MimeTypeSet, RESUME_MIME_TYPES, TEXT_LIKE_MIME_TYPES};
use super::text::looks_like_text;
use crate::common::BomKind;
use crate::detection::detect;
use crate::signature::mime;

#[inline]
fn detected_mime(bytes: &[u8]) -> Option<&'static str> {
    detect(bytes).map(|sig| sig.mime_type)
}

/// Check whether the detected format is in a caller-supplied allow-list.
///
/// Fails closed: unrecognised content is never allowed, whatever the
/// allow-list contains.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashSet;
/// use filesig::is_allowed;
///
/// let allowed: HashSet<&str> = ["application/pdf", "application/zip"].into();
/// assert!(is_allowed(b"PK\x03\x04\x14\x00", &allowed));
/// assert!(!is_allowed(b"MZ\x90\x00", &allowed));
/// assert!(!is_allowed(b"plain words", &allowed));
/// ```
pub fn is_allowed<A: MimeTypeSet + ?Sized>(bytes: &[u8], allowed: &A) -> bool {
    detected_mime(bytes).is_some_and(|m| allowed.contains_mime(m))
}

/// Check whether the content is a PDF.
pub fn is_pdf(bytes: &[u8]) -> bool {
    detected_mime(bytes) == Some(mime::PDF)
}

/// Check whether the content is a ZIP container.
///
/// DOCX, XLSX, PPTX, ODF, EPUB, JAR and APK all qualify: they share ZIP's
/// leading bytes and the archive is never opened to tell them apart.
pub fn is_zip_based(bytes: &[u8]) -> bool {
    detected_mime(bytes) == Some(mime::ZIP)
}

/// Check whether the content is Rich Text Format.
pub fn is_rtf(bytes: &[u8]) -> bool {
    detected_mime(bytes) == Some(mime::RTF)
}

/// Check whether the detected MIME type is in [`DOCUMENT_MIME_TYPES`].
pub fn is_document(bytes: &[u8]) -> bool {
    detected_mime(bytes).is_some_and(|m| DOCUMENT_MIME_TYPES.contains(m))
}

/// The byte order mark the content starts with, if any.
///
/// Relies on the catalog's explicit BOM tag rather than on entry names.
pub fn text_bom(bytes: &[u8]) -> Option<BomKind> {
    detect(bytes)
        .filter(|sig| sig.mime_type == mime::PLAIN_TEXT)
        .and_then(|sig| sig.bom)
}

/// Check whether the content is plain text introduced by a byte order mark.
pub fn has_text_bom(bytes: &[u8]) -> bool {
    text_bom(bytes).is_some()
}

/// Heuristically decide whether the content is plain text.
///
/// * empty input is not text;
/// * recognised content is text only if it was detected as plain text, HTML
///   or XML ([`TEXT_LIKE_MIME_TYPES`]);
/// * unrecognised content goes through [`looks_like_text`].
///
/// # Examples
///
/// ```rust
/// use filesig::is_likely_plain_text;
///
/// assert!(is_likely_plain_text(b"Hello resume text"));
/// assert!(is_likely_plain_text(b"<?xml version=\"1.0\"?><cv/>"));
/// assert!(!is_likely_plain_text(b"%PDF-1.4"));
/// assert!(!is_likely_plain_text(&[0x01, 0x02, 0x03]));
/// ```
pub fn is_likely_plain_text(bytes: &[u8]) -> bool {
    if bytes.is_empty() {
        return false;
    }
    match detected_mime(bytes) {
        Some(m) => TEXT_LIKE_MIME_TYPES.contains(m),
        None => looks_like_text(bytes),
    }
}

/// Check whether the content is acceptable as a resume upload.
///
/// Accepts anything detected as one of [`RESUME_MIME_TYPES`], and, as a last
/// resort, unrecognised content that passes the plain-text heuristic (BOM-less
/// `.txt` resumes have no signature).
///
/// # Examples
///
/// ```rust
/// use filesig::is_resume_format;
///
/// assert!(is_resume_format(b"%PDF-1.7"));
/// assert!(is_resume_format(b"Jane Doe - Software Engineer"));
/// assert!(!is_resume_format(&[0x4D, 0x5A, 0x90, 0x00]));
/// assert!(!is_resume_format(&[0xFF, 0xD8, 0xFF, 0xE0]));
/// ```
pub fn is_resume_format(bytes: &[u8]) -> bool {
    match detected_mime(bytes) {
        Some(m) => RESUME_MIME_TYPES.contains(m),
        None => looks_like_text(bytes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signature::SIGNATURES;

    const PDF: &[u8] = b"%PDF-1.4\n%\xE2\xE3\xCF\xD3";
    const ZIP: &[u8] = &[0x50, 0x4B, 0x03, 0x04, 0x14, 0x00, 0x06, 0x00];
    const RTF: &[u8] = b"{\\rtf1\\ansi\\deff0 Hello}";
    const DOC: &[u8] = &[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1, 0x00];
    const EXE: &[u8] = &[0x4D, 0x5A, 0x90, 0x00];
    const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F'];

    #[test]
    fn test_is_pdf() {
        assert!(is_pdf(PDF));
        assert!(!is_pdf(ZIP));
        assert!(!is_pdf(b"%PD"));
        assert!(!is_pdf(&[]));
    }

    #[test]
    fn test_is_zip_based_covers_variants() {
        assert!(is_zip_based(ZIP));
        assert!(is_zip_based(&[0x50, 0x4B, 0x05, 0x06, 0x00, 0x00]));
        assert!(is_zip_based(&[0x50, 0x4B, 0x07, 0x08]));
        assert!(!is_zip_based(&[0x50, 0x4B, 0x01, 0x02]));
        assert!(!is_zip_based(PDF));
    }

    #[test]
    fn test_is_rtf() {
        assert!(is_rtf(RTF));
        assert!(!is_rtf(b"{\\rt"));
        assert!(!is_rtf(b"{\"json\": true}"));
    }

    #[test]
    fn test_is_document() {
        assert!(is_document(PDF));
        assert!(is_document(ZIP));
        assert!(is_document(RTF));
        assert!(is_document(DOC));
        assert!(is_document(&[0xFF, 0x57, 0x50, 0x43, 0x10]));
        assert!(is_document(&[0xEF, 0xBB, 0xBF, b'x']));

        assert!(!is_document(b"<html><body></body></html>"));
        assert!(!is_document(JPEG));
        assert!(!is_document(EXE));
        // Unrecognised text is not a document: no signature, no verdict.
        assert!(!is_document(b"just words"));
    }

    #[test]
    fn test_is_allowed_fails_closed() {
        let everything: Vec<&str> = SIGNATURES.iter().map(|s| s.mime_type).collect();
        assert!(!is_allowed(b"no signature here", &everything));
        assert!(!is_allowed(&[], &everything));
        assert!(is_allowed(PDF, &everything));
    }

    #[test]
    fn test_is_allowed_with_phf_set() {
        assert!(is_allowed(DOC, &RESUME_MIME_TYPES));
        assert!(!is_allowed(EXE, &RESUME_MIME_TYPES));
    }

    #[test]
    fn test_text_bom_kinds() {
        assert_eq!(text_bom(&[0xEF, 0xBB, 0xBF, b'H']), Some(BomKind::Utf8));
        assert_eq!(text_bom(&[0xFF, 0xFE, b'H', 0x00]), Some(BomKind::Utf16Le));
        assert_eq!(text_bom(&[0xFE, 0xFF, 0x00, b'H']), Some(BomKind::Utf16Be));
        assert_eq!(text_bom(&[0xFF, 0xFE, 0x00, 0x00]), Some(BomKind::Utf32Le));
        assert_eq!(text_bom(&[0x00, 0x00, 0xFE, 0xFF]), Some(BomKind::Utf32Be));
        assert_eq!(text_bom(b"plain"), None);
        assert_eq!(text_bom(PDF), None);
    }

    #[test]
    fn test_has_text_bom() {
        assert!(has_text_bom(&[0xEF, 0xBB, 0xBF, 0x48, 0x65]));
        assert!(!has_text_bom(b"<?xml version=\"1.0\"?>"));
        assert!(!has_text_bom(&[0xEF, 0xBB]));
    }

    #[test]
    fn test_is_likely_plain_text_detected() {
        assert!(is_likely_plain_text(&[0xEF, 0xBB, 0xBF, b'h', b'i']));
        // UTF-16 text is full of NULs but the BOM vouches for it.
        assert!(is_likely_plain_text(&[0xFF, 0xFE, b'h', 0x00, b'i', 0x00]));
        assert!(is_likely_plain_text(b"<!DOCTYPE html><html></html>"));
        assert!(is_likely_plain_text(b"<?xml version=\"1.0\"?>"));
        assert!(!is_likely_plain_text(PDF));
        assert!(!is_likely_plain_text(RTF));
        // "MZ" is printable but the executable signature takes precedence.
        assert!(!is_likely_plain_text(b"MZ is a valid-looking start"));
    }

    #[test]
    fn test_is_likely_plain_text_undetected() {
        assert!(!is_likely_plain_text(&[]));
        assert!(is_likely_plain_text(b"Hello resume text"));
        assert!(is_likely_plain_text("Résumé: José Ñúñez".as_bytes()));
        assert!(!is_likely_plain_text(&[0x01, 0x02, 0x03, 0x04, 0x05, 0x06]));
        assert!(!is_likely_plain_text(b"text with a \0 in it"));
    }

    #[test]
    fn test_is_resume_format() {
        assert!(is_resume_format(PDF));
        assert!(is_resume_format(ZIP));
        assert!(is_resume_format(RTF));
        assert!(is_resume_format(DOC));
        assert!(is_resume_format(b"<html><body>CV</body></html>"));
        assert!(is_resume_format(&[0xEF, 0xBB, 0xBF, b'C', b'V']));
        assert!(is_resume_format(b"Hello resume text"));

        assert!(!is_resume_format(EXE));
        assert!(!is_resume_format(JPEG));
        // WordPerfect is a document but not an accepted resume format.
        assert!(!is_resume_format(&[0xFF, 0x57, 0x50, 0x43]));
        assert!(!is_resume_format(&[]));
        assert!(!is_resume_format(&[0x01, 0x02, 0x03]));
    }

    #[test]
    fn test_resume_format_matches_composition() {
        let samples: [&[u8]; 8] = [
            PDF,
            ZIP,
            RTF,
            DOC,
            EXE,
            JPEG,
            b"plain text",
            &[0x00, 0x10, 0x20],
        ];
        for s in samples {
            let expected = match detect(s) {
                Some(sig) => RESUME_MIME_TYPES.contains(sig.mime_type),
                None => is_likely_plain_text(s),
            };
            assert_eq!(is_resume_format(s), expected, "{s:02X?}");
        }
    }
}
