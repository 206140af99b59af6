//! Normalization error types.

use thiserror::Error;

/// Reasons a raw release is rejected by the normalizer.
///
/// Records without a usable publish time cannot be ordered or checked for
/// recency, so they are refused instead of being sorted arbitrarily.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NormalizeError {
    /// The payload carries no publish timestamp (typically a draft).
    #[error("Release '{version}' has no publish timestamp")]
    MissingPublishedAt { version: String },

    /// The publish timestamp is not RFC 3339.
    #[error("Release '{version}' has an unparseable publish timestamp '{value}': {message}")]
    InvalidPublishedAt {
        version: String,
        value: String,
        message: String,
    },
}
