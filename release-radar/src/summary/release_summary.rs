//! Aggregated view over a set of releases.

use crate::releases::CanonicalRelease;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Per-source counts and newest release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceSummary {
    /// Source label.
    pub label: String,

    /// Number of releases from this source.
    pub count: usize,

    /// Newest release from this source, if any.
    pub latest: Option<CanonicalRelease>,
}

impl SourceSummary {
    pub(crate) fn empty(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            count: 0,
            latest: None,
        }
    }
}

/// Summary of a collection of releases at a point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseSummary {
    /// Reference time used for the recency window.
    pub generated_at: DateTime<Utc>,

    /// All releases, newest first.
    pub releases: Vec<CanonicalRelease>,

    /// Per-source breakdown, seeded sources first.
    pub sources: Vec<SourceSummary>,

    /// Releases published inside the recency window, newest first.
    pub recent: Vec<CanonicalRelease>,
}

impl ReleaseSummary {
    /// Total number of releases.
    #[must_use]
    pub fn total(&self) -> usize {
        self.releases.len()
    }

    /// Number of releases inside the recency window.
    #[must_use]
    pub fn recent_count(&self) -> usize {
        self.recent.len()
    }

    /// Returns the breakdown for a source label.
    #[must_use]
    pub fn source(&self, label: &str) -> Option<&SourceSummary> {
        self.sources.iter().find(|s| s.label == label)
    }

    /// Number of releases for a source label (0 when unknown).
    #[must_use]
    pub fn count(&self, label: &str) -> usize {
        self.source(label).map_or(0, |s| s.count)
    }

    /// Newest release for a source label.
    #[must_use]
    pub fn latest(&self, label: &str) -> Option<&CanonicalRelease> {
        self.source(label).and_then(|s| s.latest.as_ref())
    }

    /// Iterates the newest release of every source that has one.
    pub fn latest_releases(&self) -> impl Iterator<Item = &CanonicalRelease> {
        self.sources.iter().filter_map(|s| s.latest.as_ref())
    }

    /// Source labels in display order.
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.label.as_str()).collect()
    }
}
