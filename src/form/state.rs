//! Submission lifecycle.

use std::fmt;

/// State of one lead submission.
///
/// Submission is optimistic: the form transitions to `Submitted` before any
/// confirmation exists, and the race between confirmation and the fallback
/// deadline resolves it exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    /// No submission yet.
    Pending,
    /// Submitted, confirmation outstanding.
    Submitted,
    /// Confirmation arrived before the fallback deadline.
    Confirmed,
    /// The deadline passed first; the fallback contact path was shown.
    FallbackShown,
}

impl fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Pending => "pending",
            Self::Submitted => "submitted",
            Self::Confirmed => "confirmed",
            Self::FallbackShown => "fallback shown",
        };
        f.write_str(name)
    }
}
