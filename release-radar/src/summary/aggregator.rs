//! Release aggregation.

use super::release_summary::{ReleaseSummary, SourceSummary};
use crate::releases::CanonicalRelease;
use chrono::{DateTime, TimeDelta, Utc};
use tracing::debug;

/// Width of the "recent" window.
pub const RECENT_WINDOW_DAYS: i64 = 7;

/// Returns true if `release` was published strictly after `now - 7 days`.
#[must_use]
pub fn is_recent(release: &CanonicalRelease, now: DateTime<Utc>) -> bool {
    release.published_at > now - TimeDelta::days(RECENT_WINDOW_DAYS)
}

/// Sorts, counts and summarizes releases against a fixed reference time.
#[derive(Debug, Clone)]
pub struct Aggregator {
    now: DateTime<Utc>,
    labels: Vec<String>,
}

impl Aggregator {
    /// Creates an aggregator evaluating recency against `now`.
    #[must_use]
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now,
            labels: Vec::new(),
        }
    }

    /// Seeds source labels so they appear in the summary even without
    /// releases. Seeded labels keep the given order.
    #[must_use]
    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for label in labels {
            let label = label.into();
            if !self.labels.contains(&label) {
                self.labels.push(label);
            }
        }
        self
    }

    /// Aggregates `releases` into a [`ReleaseSummary`].
    ///
    /// The sort is stable: releases with equal publish times keep their
    /// input order.
    #[must_use]
    pub fn aggregate(&self, mut releases: Vec<CanonicalRelease>) -> ReleaseSummary {
        releases.sort_by(|a, b| b.published_at.cmp(&a.published_at));

        let mut sources: Vec<SourceSummary> = self
            .labels
            .iter()
            .map(|label| SourceSummary::empty(label.as_str()))
            .collect();

        for release in &releases {
            let index = match sources.iter().position(|s| s.label == release.source_label) {
                Some(index) => index,
                None => {
                    sources.push(SourceSummary::empty(release.source_label.as_str()));
                    sources.len() - 1
                }
            };
            let entry = &mut sources[index];
            entry.count += 1;
            // Sorted newest first, so the first hit per source is the latest.
            if entry.latest.is_none() {
                entry.latest = Some(release.clone());
            }
        }

        let recent: Vec<CanonicalRelease> = releases
            .iter()
            .filter(|release| is_recent(release, self.now))
            .cloned()
            .collect();

        debug!(
            total = releases.len(),
            recent = recent.len(),
            sources = sources.len(),
            "Aggregated releases"
        );

        ReleaseSummary {
            generated_at: self.now,
            releases,
            sources,
            recent,
        }
    }
}
