//! Outcome of evaluating content against an upload policy.

use std::fmt;

use crate::signature::Signature;

/// Result of [`UploadPolicy::evaluate`](super::UploadPolicy::evaluate).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Recognised and on the allow-list
    Accepted(&'static Signature),
    /// Not recognised, but accepted by the plain-text fallback
    AcceptedAsText,
    Rejected(Rejection),
}

impl Verdict {
    /// Whether the content may be processed further.
    #[inline]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted(_) | Verdict::AcceptedAsText)
    }

    /// The matched signature, for verdicts that have one.
    pub const fn signature(&self) -> Option<&'static Signature> {
        match self {
            Verdict::Accepted(sig) | Verdict::Rejected(Rejection::Disallowed(sig)) => Some(*sig),
            Verdict::AcceptedAsText | Verdict::Rejected(_) => None,
        }
    }

    /// MIME type to record for accepted content.
    ///
    /// Content accepted by the text fallback is reported as `text/plain`.
    pub fn accepted_mime_type(&self) -> Option<&'static str> {
        match self {
            Verdict::Accepted(sig) => Some(sig.mime_type),
            Verdict::AcceptedAsText => Some(crate::signature::mime::PLAIN_TEXT),
            Verdict::Rejected(_) => None,
        }
    }
}

/// Why content was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// No signature matched and the text fallback did not apply
    Unrecognized,
    /// Recognised, but the format is not on the allow-list
    Disallowed(&'static Signature),
    /// The content could not be read at all
    Unreadable,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Unrecognized => f.write_str("file format not recognized"),
            Rejection::Disallowed(sig) => {
                write!(f, "file format {} ({}) is not allowed", sig.name, sig.mime_type)
            }
            Rejection::Unreadable => f.write_str("file could not be read"),
        }
    }
}
