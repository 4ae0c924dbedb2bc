//! Serde-configurable upload policy.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::verdict::{Rejection, Verdict};
use crate::classify::{DOCUMENT_MIME_TYPES, RESUME_MIME_TYPES, TEXT_SNIFF_LENGTH, looks_like_text};
use crate::common::error::io_error_with_path;
use crate::common::{Error, Result};
use crate::detection::{detect, read_header_limited};
use crate::signature::HEADER_LENGTH;

/// Largest `header_length` a policy may ask for.
pub const MAX_HEADER_LENGTH: usize = 64 * 1024;

/// Which uploads to accept.
///
/// Every field has a default, so a YAML document only needs to name what it
/// changes:
///
/// ```yaml
/// allowed_mime_types:
///   - application/pdf
///   - application/msword
/// accept_unrecognized_text: true
/// header_length: 24
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UploadPolicy {
    /// Detected MIME types that are accepted. Compared exactly.
    pub allowed_mime_types: BTreeSet<String>,
    /// Accept content that matches no signature but looks like plain text.
    pub accept_unrecognized_text: bool,
    /// Leading bytes read from files by [`evaluate_file`](Self::evaluate_file).
    pub header_length: usize,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            allowed_mime_types: BTreeSet::new(),
            accept_unrecognized_text: false,
            header_length: HEADER_LENGTH,
        }
    }
}

impl UploadPolicy {
    /// Policy for resume uploads: [`RESUME_MIME_TYPES`] plus the plain-text
    /// fallback.
    ///
    /// Equivalent to [`is_resume_format`](crate::is_resume_format).
    pub fn resume() -> Self {
        Self {
            allowed_mime_types: RESUME_MIME_TYPES.iter().map(|m| m.to_string()).collect(),
            accept_unrecognized_text: true,
            ..Self::default()
        }
    }

    /// Policy accepting [`DOCUMENT_MIME_TYPES`], with no text fallback.
    pub fn documents() -> Self {
        Self {
            allowed_mime_types: DOCUMENT_MIME_TYPES.iter().map(|m| m.to_string()).collect(),
            ..Self::default()
        }
    }

    /// Parse and validate a policy from YAML.
    ///
    /// # Errors
    ///
    /// [`Error::ParseError`] for malformed YAML or unknown keys,
    /// [`Error::InvalidPolicy`] if [`validate`](Self::validate) fails.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let policy: Self = serde_saphyr::from_str(yaml)
            .map_err(|e| Error::ParseError(format!("Failed to parse upload policy: {}", e)))?;
        policy.validate()?;
        Ok(policy)
    }

    /// Read, parse and validate a policy from a YAML file.
    ///
    /// # Errors
    ///
    /// [`Error::FileAccess`] if the file cannot be read, otherwise as
    /// [`from_yaml_str`](Self::from_yaml_str).
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let yaml = fs::read_to_string(path).map_err(|source| io_error_with_path(source, path))?;
        Self::from_yaml_str(&yaml)
    }

    /// Check that the policy is usable.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPolicy`] if `header_length` is zero or above
    /// [`MAX_HEADER_LENGTH`], if the policy can never accept anything, or if an
    /// allow-list entry is not of the form `type/subtype`.
    pub fn validate(&self) -> Result<()> {
        if self.header_length == 0 {
            return Err(Error::InvalidPolicy(
                "header_length must be at least 1".to_string(),
            ));
        }
        if self.header_length > MAX_HEADER_LENGTH {
            return Err(Error::InvalidPolicy(format!(
                "header_length {} exceeds the maximum of {MAX_HEADER_LENGTH}",
                self.header_length
            )));
        }
        if self.allowed_mime_types.is_empty() && !self.accept_unrecognized_text {
            return Err(Error::InvalidPolicy(
                "policy rejects everything: allowed_mime_types is empty and \
                 accept_unrecognized_text is off"
                    .to_string(),
            ));
        }
        if let Some(bad) = self
            .allowed_mime_types
            .iter()
            .find(|m| !is_mime_shaped(m))
        {
            return Err(Error::InvalidPolicy(format!(
                "'{bad}' is not a MIME type (expected type/subtype)"
            )));
        }
        Ok(())
    }

    /// Evaluate in-memory content.
    pub fn evaluate(&self, bytes: &[u8]) -> Verdict {
        let verdict = match detect(bytes) {
            Some(sig) if self.allowed_mime_types.contains(sig.mime_type) => Verdict::Accepted(sig),
            Some(sig) => Verdict::Rejected(Rejection::Disallowed(sig)),
            None if self.accept_unrecognized_text && looks_like_text(bytes) => {
                Verdict::AcceptedAsText
            }
            None => Verdict::Rejected(Rejection::Unrecognized),
        };
        log_verdict(&verdict);
        verdict
    }

    /// Evaluate the leading bytes of a file.
    ///
    /// Reads [`header_length`](Self::header_length) bytes, or
    /// [`TEXT_SNIFF_LENGTH`] if that is larger and the text fallback is on, so
    /// the heuristic sees its full window. Unreadable files are rejected.
    pub fn evaluate_file<P: AsRef<Path>>(&self, path: P) -> Verdict {
        match read_header_limited(path, self.read_limit()) {
            Ok(header) => self.evaluate(&header),
            Err(err) => {
                info!("upload rejected: {err}");
                Verdict::Rejected(Rejection::Unreadable)
            }
        }
    }

    fn read_limit(&self) -> usize {
        if self.accept_unrecognized_text {
            self.header_length.max(TEXT_SNIFF_LENGTH)
        } else {
            self.header_length
        }
    }
}

fn is_mime_shaped(mime_type: &str) -> bool {
    match mime_type.split_once('/') {
        Some((kind, subtype)) => {
            !kind.is_empty()
                && !subtype.is_empty()
                && !subtype.contains('/')
                && !mime_type.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

fn log_verdict(verdict: &Verdict) {
    match verdict {
        Verdict::Accepted(sig) => debug!("upload accepted as {} ({})", sig.name, sig.mime_type),
        Verdict::AcceptedAsText => debug!("upload accepted as unrecognised plain text"),
        Verdict::Rejected(reason) => info!("upload rejected: {reason}"),
    }
}
