//! The normalized release record.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Whether a release is a stable or a pre-release build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReleaseType {
    Stable,
    Prerelease,
}

impl ReleaseType {
    /// Returns the display label used in digests.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stable => "Stable",
            Self::Prerelease => "Pre-release",
        }
    }
}

impl fmt::Display for ReleaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A release normalized from a provider payload.
///
/// Built once by [`normalize`](super::normalize) and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CanonicalRelease {
    /// Label of the source this release came from (e.g., "Vue.js").
    pub source_label: String,

    /// Tag identifier.
    pub version: String,

    /// Human-readable name, the tag when upstream has none.
    pub display_name: String,

    /// Release notes, truncated for display.
    pub description: String,

    /// Publish time; drives ordering and the recency window.
    pub published_at: DateTime<Utc>,

    /// Creation time as reported upstream.
    pub created_at: Option<String>,

    /// Release page URL.
    pub url: String,

    pub is_draft: bool,

    pub is_prerelease: bool,

    /// Publisher handle.
    pub author: String,

    /// Number of attached downloadable files.
    pub asset_count: usize,

    /// Sum of download counts over all assets.
    pub total_download_count: u64,

    /// Repository in "owner/name" format.
    pub repository: String,
}

impl CanonicalRelease {
    /// Returns the release type derived from the prerelease flag.
    #[must_use]
    pub fn release_type(&self) -> ReleaseType {
        if self.is_prerelease {
            ReleaseType::Prerelease
        } else {
            ReleaseType::Stable
        }
    }
}
