//! Orchestrates a release radar run.

mod config;
mod error;
mod report;

pub use config::RunnerConfig;
pub use error::RunnerError;
pub use report::RunReport;

use crate::config::Source;
use crate::fetch::{FetchError, ReleaseFetcher};
use crate::rate_limit::report_core_rate_limit;
use crate::releases::{normalize_all, CanonicalRelease, RawRelease};
use futures::stream::{self, StreamExt};
use tracing::{error, info, warn};

/// Fetches, normalizes, aggregates and renders releases for all sources.
pub struct Runner {
    config: RunnerConfig,
    fetcher: ReleaseFetcher,
}

impl Runner {
    /// Builds a runner from the provided configuration.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let fetcher = ReleaseFetcher::new(config.radar(), config.token())?;
        Ok(Self { config, fetcher })
    }

    /// Executes the full flow.
    ///
    /// A source that fails to fetch is logged and contributes no releases;
    /// the run only fails if every source does.
    pub async fn run(&self) -> Result<RunReport, RunnerError> {
        let now = self.config.now();
        let sources = &self.config.radar().sources;
        info!(count = sources.len(), "Collecting releases");

        report_core_rate_limit(self.fetcher.octocrab(), sources.len()).await;

        let fetcher = &self.fetcher;
        // `buffered` keeps source order, so equal publish times sort deterministically.
        let fetched: Vec<(&Source, Result<Vec<RawRelease>, FetchError>)> = stream::iter(sources)
            .map(|source| async move { (source, fetcher.fetch(source).await) })
            .buffered(self.config.concurrency())
            .collect()
            .await;

        let (releases, failed_sources) = collect_releases(fetched);
        ensure_any_source_succeeded(sources.len(), &failed_sources)?;

        info!(
            releases = releases.len(),
            failed = failed_sources.len(),
            "Processed release data"
        );

        Ok(RunReport::build(
            self.config.radar(),
            releases,
            now,
            failed_sources,
        )?)
    }
}

/// Normalizes successful fetches and records failed source labels.
fn collect_releases(
    fetched: Vec<(&Source, Result<Vec<RawRelease>, FetchError>)>,
) -> (Vec<CanonicalRelease>, Vec<String>) {
    let mut releases = Vec::new();
    let mut failed_sources = Vec::new();

    for (source, result) in fetched {
        match result {
            Ok(raws) => {
                if raws.is_empty() {
                    warn!(source = %source.label, "No releases returned");
                }
                releases.extend(normalize_all(&raws, &source.label, &source.repository));
            }
            Err(e) => {
                error!(
                    source = %source.label,
                    repository = %source.repository,
                    error = %e,
                    "Failed to fetch releases"
                );
                failed_sources.push(source.label.clone());
            }
        }
    }

    (releases, failed_sources)
}

/// Fails the run when every configured source failed to fetch.
///
/// An empty source list is not a failure.
fn ensure_any_source_succeeded(
    total: usize,
    failed_sources: &[String],
) -> Result<(), RunnerError> {
    if total > 0 && failed_sources.len() >= total {
        return Err(RunnerError::AllSourcesFailed { count: total });
    }
    Ok(())
}
