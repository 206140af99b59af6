//! Runner configuration.

use crate::config::RadarConfig;
use chrono::{DateTime, Utc};

/// Configuration for a radar run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Sources and digest settings.
    radar: RadarConfig,
    /// Optional GitHub token.
    token: Option<String>,
    /// Maximum concurrent API requests.
    concurrency: usize,
    /// Fixed reference time; the wall clock when unset.
    now: Option<DateTime<Utc>>,
}

impl RunnerConfig {
    /// Creates a new configuration for a run.
    pub fn new(radar: RadarConfig, token: Option<String>, concurrency: usize) -> Self {
        Self {
            radar,
            token,
            concurrency: concurrency.max(1),
            now: None,
        }
    }

    /// Pins the reference time used for the recency window and timestamps.
    pub fn with_now(mut self, now: DateTime<Utc>) -> Self {
        self.now = Some(now);
        self
    }

    /// Returns the radar configuration.
    pub fn radar(&self) -> &RadarConfig {
        &self.radar
    }

    /// Returns the configured GitHub token.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Returns the max concurrent API requests.
    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Returns the reference time for this run.
    pub fn now(&self) -> DateTime<Utc> {
        self.now.unwrap_or_else(Utc::now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concurrency_is_at_least_one() {
        let config = RunnerConfig::new(RadarConfig::default(), None, 0);
        assert_eq!(config.concurrency(), 1);
    }

    #[test]
    fn pinned_now_is_returned() {
        let now = DateTime::parse_from_rfc3339("2025-09-26T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let config = RunnerConfig::new(RadarConfig::default(), Some("t".to_string()), 2)
            .with_now(now);

        assert_eq!(config.now(), now);
        assert_eq!(config.token(), Some("t"));
    }
}
