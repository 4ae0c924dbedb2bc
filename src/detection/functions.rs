//! Core file format detection functions.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::{debug, trace};

use super::matching::signature_matches;
use crate::common::Result;
use crate::common::error::io_error_with_path;
use crate::signature::{HEADER_LENGTH, SIGNATURES, Signature};

/// Detect file format from a byte slice.
///
/// Scans the catalog in order and returns the first signature whose whole
/// pattern is a prefix of `bytes`. When several signatures could match, the
/// earliest one wins; that is how overlapping patterns are disambiguated.
///
/// # Arguments
///
/// * `bytes` - Leading bytes of the content, ideally at least
///   [`HEADER_LENGTH`] of them. Any length is accepted.
///
/// # Returns
///
/// * `Some(&Signature)` pointing into [`SIGNATURES`] if a format is recognised
/// * `None` otherwise, including for an empty buffer
///
/// # Examples
///
/// ```rust
/// use filesig::detect;
///
/// let sig = detect(b"%PDF-1.4\n%\xE2\xE3\xCF\xD3").unwrap();
/// assert_eq!(sig.mime_type, "application/pdf");
///
/// assert!(detect(b"%P").is_none());
/// assert!(detect(&[]).is_none());
/// ```
pub fn detect(bytes: &[u8]) -> Option<&'static Signature> {
    SIGNATURES
        .iter()
        .find(|sig| signature_matches(bytes, sig.pattern))
}

/// Detect file format from a file path.
///
/// Reads at most [`HEADER_LENGTH`] bytes and delegates to [`detect`]. The file
/// is closed before this function returns.
///
/// # Returns
///
/// * `Some(&Signature)` if a format is recognised
/// * `None` if the format is not recognised or the file cannot be read
///   (missing, permission denied, a directory, ...). Read failures are
///   logged at debug level and never propagated; use [`read_header`] to see
///   them.
///
/// # Examples
///
/// ```rust,no_run
/// use filesig::detect_file;
///
/// match detect_file("upload.bin") {
///     Some(sig) => println!("{} ({})", sig.name, sig.mime_type),
///     None => println!("unknown or unreadable"),
/// }
/// ```
pub fn detect_file<P: AsRef<Path>>(path: P) -> Option<&'static Signature> {
    let path = path.as_ref();
    let header = match read_header(path) {
        Ok(header) => header,
        Err(err) => {
            debug!("treating unreadable file as unrecognised: {err}");
            return None;
        }
    };

    let detected = detect(&header);
    trace!(
        "{}: {}",
        path.display(),
        detected.map_or("no signature matched", |sig| sig.name)
    );
    detected
}

/// Detect file format from any reader.
///
/// Consumes at most [`HEADER_LENGTH`] bytes. A reader that ends early is not
/// an error; it just yields a shorter buffer. A reader that fails yields
/// `None`.
///
/// # Examples
///
/// ```rust
/// use std::io::Cursor;
/// use filesig::detect_reader;
///
/// let upload = Cursor::new(b"{\\rtf1\\ansi Hello}".to_vec());
/// assert_eq!(detect_reader(upload).map(|s| s.name), Some("RTF"));
/// ```
pub fn detect_reader<R: Read>(reader: R) -> Option<&'static Signature> {
    match read_prefix(reader, HEADER_LENGTH) {
        Ok(header) => detect(&header),
        Err(err) => {
            debug!("treating unreadable stream as unrecognised: {err}");
            None
        }
    }
}

/// Read up to [`HEADER_LENGTH`] leading bytes of a file.
///
/// This is the fallible building block behind [`detect_file`], for callers
/// that need to tell "unreadable" apart from "unrecognised".
///
/// # Errors
///
/// Returns [`Error::FileAccess`](crate::Error::FileAccess) if the file cannot
/// be opened or read.
pub fn read_header<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    read_header_limited(path, HEADER_LENGTH)
}

/// Read up to `limit` leading bytes of a file.
///
/// Files shorter than `limit` are returned whole.
///
/// # Errors
///
/// Returns [`Error::FileAccess`](crate::Error::FileAccess) if the file cannot
/// be opened or read.
pub fn read_header_limited<P: AsRef<Path>>(path: P, limit: usize) -> Result<Vec<u8>> {
    let path = path.as_ref();
    File::open(path)
        .and_then(|file| read_prefix(file, limit))
        .map_err(|source| io_error_with_path(source, path))
}

/// Read up to `limit` leading bytes from a reader.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) if the reader fails.
pub fn read_header_from<R: Read>(reader: R, limit: usize) -> Result<Vec<u8>> {
    Ok(read_prefix(reader, limit)?)
}

fn read_prefix<R: Read>(reader: R, limit: usize) -> std::io::Result<Vec<u8>> {
    // `limit` is caller-controlled; the buffer grows with what is actually read.
    let mut header = Vec::with_capacity(limit.min(HEADER_LENGTH));
    reader.take(limit as u64).read_to_end(&mut header)?;
    Ok(header)
}
