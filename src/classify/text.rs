//! Coarse "looks like text" heuristic for content no signature recognises.

/// Maximum number of leading bytes inspected by [`looks_like_text`].
pub const TEXT_SNIFF_LENGTH: usize = 512;

/// Check whether the leading bytes of `bytes` look like text.
///
/// Inspects at most [`TEXT_SNIFF_LENGTH`] bytes. Each must be printable ASCII
/// (32..=126), tab, line feed, carriage return, or have the high bit set
/// (presumed UTF-8 lead/continuation). NUL and the other C0 controls mark the
/// content as binary. Encoding validity is not checked.
///
/// An empty buffer is not considered text.
///
/// # Examples
///
/// ```rust
/// use filesig::looks_like_text;
///
/// assert!(looks_like_text(b"Jane Doe\r\nSenior Engineer\t2019-2024"));
/// assert!(looks_like_text("Curriculum vitæ".as_bytes()));
/// assert!(!looks_like_text(b"binary\0data"));
/// assert!(!looks_like_text(b""));
/// ```
pub fn looks_like_text(bytes: &[u8]) -> bool {
    !bytes.is_empty()
        && bytes
            .iter()
            .take(TEXT_SNIFF_LENGTH)
            .all(|&b| is_text_byte(b))
}

#[inline]
const fn is_text_byte(b: u8) -> bool {
    matches!(b, b'\t' | b'\n' | b'\r' | 0x20..=0x7E | 0x80..=0xFF)
}
