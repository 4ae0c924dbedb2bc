//! Prefix matching primitives.
//!
//! Uses `smallvec` to avoid heap allocations for the common small result sets.

use smallvec::SmallVec;

use crate::signature::{SIGNATURES, Signature};

/// Check if a byte slice starts with a given signature.
///
/// # Arguments
///
/// * `data` - The data to check
/// * `signature` - The signature to match
///
/// # Returns
///
/// * `true` if data starts with the whole signature, `false` otherwise
///   (including when `data` is shorter than `signature`)
///
/// # Examples
///
/// ```rust
/// use filesig::detection::matching::signature_matches;
///
/// let ole2_sig = &[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];
/// let data = &[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1, 0x00, 0x00];
///
/// assert!(signature_matches(data, ole2_sig));
/// assert!(!signature_matches(&data[..4], ole2_sig));
/// ```
#[inline]
pub fn signature_matches(data: &[u8], signature: &[u8]) -> bool {
    if data.len() < signature.len() {
        return false;
    }
    &data[..signature.len()] == signature
}

/// Every catalog entry matching `data`, in catalog order.
///
/// [`detect`](super::detect) only ever reports the first of these. The full
/// list is handy for diagnosing why an ambiguous prefix was classified the way
/// it was. Uses `SmallVec` with inline capacity of 4, since catalog patterns
/// hardly overlap and the list is nearly always zero or one entry long.
///
/// # Examples
///
/// ```rust
/// use filesig::detect_all;
///
/// // UTF-32LE BOM also starts with the UTF-16LE BOM.
/// let matches = detect_all(&[0xFF, 0xFE, 0x00, 0x00, b'a', 0, 0, 0]);
/// let names: Vec<_> = matches.iter().map(|s| s.name).collect();
/// assert_eq!(names, ["UTF-32LE BOM", "UTF-16LE BOM"]);
/// ```
pub fn detect_all(data: &[u8]) -> SmallVec<[&'static Signature; 4]> {
    SIGNATURES
        .iter()
        .filter(|sig| signature_matches(data, sig.pattern))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_matches_exact_length() {
        assert!(signature_matches(b"%PDF", b"%PDF"));
    }

    #[test]
    fn test_signature_matches_short_data() {
        assert!(!signature_matches(b"%P", b"%PDF"));
        assert!(!signature_matches(&[], b"%PDF"));
    }

    #[test]
    fn test_signature_matches_mismatch() {
        assert!(!signature_matches(b"%PDX-1.4", b"%PDF"));
    }

    #[test]
    fn test_detect_all_empty() {
        assert!(detect_all(&[]).is_empty());
    }

    #[test]
    fn test_detect_all_single() {
        let matches = detect_all(b"%PDF-1.4\n");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "PDF");
        assert!(!matches.spilled());
    }
}
