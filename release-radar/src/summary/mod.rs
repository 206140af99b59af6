//! Release aggregation and summary types.
//!
//! Both digest renderers read the same [`ReleaseSummary`], so the recency
//! window and latest-per-source selection are computed exactly once.

mod aggregator;
mod release_summary;

pub use aggregator::{is_recent, Aggregator, RECENT_WINDOW_DAYS};
pub use release_summary::{ReleaseSummary, SourceSummary};

use crate::releases::CanonicalRelease;
use chrono::{DateTime, Utc};

/// Aggregates releases against `now` without seeded source labels.
#[must_use]
pub fn aggregate(releases: Vec<CanonicalRelease>, now: DateTime<Utc>) -> ReleaseSummary {
    Aggregator::new(now).aggregate(releases)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::releases::sample_release;
    use chrono::TimeDelta;

    fn at(value: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(value).unwrap().with_timezone(&Utc)
    }

    fn fixture() -> Vec<CanonicalRelease> {
        vec![
            sample_release("Nuxt.js", "v4.1.2", "2025-09-12T15:30:00Z"),
            sample_release("Vue.js", "v3.5.22", "2025-09-25T10:00:00Z"),
        ]
    }

    #[test]
    fn summarizes_two_sources() {
        let summary = aggregate(fixture(), at("2025-09-26T00:00:00Z"));

        assert_eq!(summary.total(), 2);
        assert_eq!(summary.count("Vue.js"), 1);
        assert_eq!(summary.count("Nuxt.js"), 1);
        assert_eq!(summary.recent_count(), 1);
        assert_eq!(summary.recent[0].version, "v3.5.22");
        assert_eq!(summary.latest("Vue.js").unwrap().version, "v3.5.22");
        assert_eq!(summary.latest("Nuxt.js").unwrap().version, "v4.1.2");
    }

    #[test]
    fn sorts_newest_first() {
        let summary = aggregate(fixture(), at("2025-09-26T00:00:00Z"));

        let versions: Vec<_> = summary.releases.iter().map(|r| r.version.as_str()).collect();
        assert_eq!(versions, vec!["v3.5.22", "v4.1.2"]);
        assert!(summary
            .releases
            .windows(2)
            .all(|pair| pair[0].published_at >= pair[1].published_at));
    }

    #[test]
    fn equal_timestamps_keep_input_order() {
        let releases = vec![
            sample_release("Vue.js", "first", "2025-09-20T00:00:00Z"),
            sample_release("Nuxt.js", "newest", "2025-09-21T00:00:00Z"),
            sample_release("Nuxt.js", "second", "2025-09-20T00:00:00Z"),
            sample_release("Vue.js", "third", "2025-09-20T00:00:00Z"),
        ];

        let summary = aggregate(releases, at("2025-09-26T00:00:00Z"));

        let versions: Vec<_> = summary.releases.iter().map(|r| r.version.as_str()).collect();
        assert_eq!(versions, vec!["newest", "first", "second", "third"]);
        assert_eq!(summary.latest("Vue.js").unwrap().version, "first");
    }

    #[test]
    fn reaggregating_sorted_output_is_stable() {
        let now = at("2025-09-26T00:00:00Z");
        let releases = vec![
            sample_release("Vue.js", "a", "2025-09-20T00:00:00Z"),
            sample_release("Vue.js", "b", "2025-09-24T00:00:00Z"),
            sample_release("Nuxt.js", "c", "2025-09-20T00:00:00Z"),
        ];

        let once = aggregate(releases, now);
        let twice = aggregate(once.releases.clone(), now);

        assert_eq!(once, twice);
    }

    #[test]
    fn recency_window_is_strict() {
        let now = at("2025-09-26T12:00:00Z");
        let releases = vec![
            sample_release("Vue.js", "eight-days", "2025-09-18T12:00:00Z"),
            sample_release("Vue.js", "seven-days", "2025-09-19T12:00:00Z"),
            sample_release("Vue.js", "six-days", "2025-09-20T12:00:00Z"),
        ];

        let summary = aggregate(releases, now);

        let recent: Vec<_> = summary.recent.iter().map(|r| r.version.as_str()).collect();
        assert_eq!(recent, vec!["six-days"]);
    }

    #[test]
    fn empty_input_yields_zeroes() {
        let summary = Aggregator::new(at("2025-09-26T00:00:00Z"))
            .with_labels(["Vue.js", "Nuxt.js"])
            .aggregate(Vec::new());

        assert_eq!(summary.total(), 0);
        assert_eq!(summary.recent_count(), 0);
        assert_eq!(summary.labels(), vec!["Vue.js", "Nuxt.js"]);
        assert!(summary.sources.iter().all(|s| s.count == 0 && s.latest.is_none()));
        assert_eq!(summary.latest_releases().count(), 0);
    }

    #[test]
    fn unseeded_labels_are_appended() {
        let releases = vec![
            sample_release("Vite", "v7.0.0", "2025-09-25T00:00:00Z"),
            sample_release("Vue.js", "v3.5.22", "2025-09-24T00:00:00Z"),
        ];

        let summary = Aggregator::new(at("2025-09-26T00:00:00Z"))
            .with_labels(["Vue.js", "Nuxt.js", "Vue.js"])
            .aggregate(releases);

        assert_eq!(summary.labels(), vec!["Vue.js", "Nuxt.js", "Vite"]);
        assert_eq!(summary.count("Nuxt.js"), 0);
        assert_eq!(summary.count("Vite"), 1);
        assert_eq!(summary.count("Svelte"), 0);
    }
}
