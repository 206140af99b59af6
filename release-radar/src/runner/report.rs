//! Run output.

use crate::config::RadarConfig;
use crate::releases::CanonicalRelease;
use crate::render::{ChatPayload, ChatRenderer, NoteDocument, NoteRenderer, RenderError};
use crate::summary::{Aggregator, ReleaseSummary};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Everything a run produces, ready for export as JSON.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Chat notification payload.
    #[serde(rename = "slack_message")]
    pub chat_message: ChatPayload,

    /// Markdown note.
    #[serde(rename = "obsidian_note")]
    pub note: NoteDocument,

    /// Reference time of the run.
    #[serde(rename = "collection_timestamp")]
    pub collected_at: DateTime<Utc>,

    /// Number of releases after normalization.
    pub releases_count: usize,

    /// Labels of sources that could not be fetched.
    pub failed_sources: Vec<String>,

    /// The aggregated data both digests were rendered from.
    pub summary: ReleaseSummary,
}

impl RunReport {
    /// Aggregates releases and renders both digests.
    ///
    /// # Errors
    ///
    /// Returns an error if the note template fails to render.
    pub fn build(
        config: &RadarConfig,
        releases: Vec<CanonicalRelease>,
        now: DateTime<Utc>,
        failed_sources: Vec<String>,
    ) -> Result<Self, RenderError> {
        let summary = Aggregator::new(now)
            .with_labels(config.labels())
            .aggregate(releases);

        let chat_message = ChatRenderer::from_sources(&config.sources).render(&summary);
        let note = NoteRenderer::new(config.note.clone()).render(&summary)?;

        Ok(Self {
            chat_message,
            note,
            collected_at: now,
            releases_count: summary.total(),
            failed_sources,
            summary,
        })
    }

    /// Returns true if some sources could not be fetched.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failed_sources.is_empty()
    }
}
