//! File format detection from leading content bytes.
//!
//! Detection scans [`SIGNATURES`](crate::SIGNATURES) top to bottom and returns
//! the first entry whose pattern is a prefix of the input. It never fails: an
//! empty, short or unrecognised buffer is simply "no match".

// Submodule declarations
pub mod functions;
pub mod matching;

// Re-exports
pub use functions::{
    detect, detect_file, detect_reader, read_header, read_header_from, read_header_limited,
};
pub use matching::detect_all;
