//! Chat notification payloads in Slack Block Kit shape.

use super::{joined_labels, long_date, short_date};
use crate::config::{Source, DEFAULT_MARKER};
use crate::summary::ReleaseSummary;
use serde::Serialize;
use std::collections::HashMap;

/// Number of recent releases listed by default.
pub const DEFAULT_MAX_RECENT: usize = 5;

/// A text element inside a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TextObject {
    PlainText { text: String },
    Mrkdwn { text: String },
}

impl TextObject {
    /// Returns the raw text.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::PlainText { text } | Self::Mrkdwn { text } => text,
        }
    }
}

/// A presentation block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Header { text: TextObject },
    Section { text: TextObject },
}

impl Block {
    fn header(text: String) -> Self {
        Self::Header {
            text: TextObject::PlainText { text },
        }
    }

    fn section(text: String) -> Self {
        Self::Section {
            text: TextObject::Mrkdwn { text },
        }
    }

    /// Returns the block's text.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Header { text } | Self::Section { text } => text.text(),
        }
    }
}

/// A chat message: fallback text plus ordered blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatPayload {
    /// Shown by clients that cannot render blocks.
    pub text: String,

    /// Blocks in display order.
    pub blocks: Vec<Block>,
}

/// Renders a [`ReleaseSummary`] into a [`ChatPayload`].
#[derive(Debug, Clone)]
pub struct ChatRenderer {
    markers: HashMap<String, String>,
    max_recent: usize,
}

impl Default for ChatRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatRenderer {
    /// Creates a renderer with no source markers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            markers: HashMap::new(),
            max_recent: DEFAULT_MAX_RECENT,
        }
    }

    /// Creates a renderer using the markers of the given sources.
    #[must_use]
    pub fn from_sources(sources: &[Source]) -> Self {
        sources.iter().fold(Self::new(), |renderer, source| {
            renderer.with_marker(&source.label, &source.marker)
        })
    }

    /// Sets the marker glyph for a source label.
    #[must_use]
    pub fn with_marker(mut self, label: impl Into<String>, marker: impl Into<String>) -> Self {
        self.markers.insert(label.into(), marker.into());
        self
    }

    /// Sets how many recent releases get their own block.
    #[must_use]
    pub fn with_max_recent(mut self, max_recent: usize) -> Self {
        self.max_recent = max_recent;
        self
    }

    fn marker(&self, label: &str) -> &str {
        self.markers.get(label).map_or(DEFAULT_MARKER, String::as_str)
    }

    /// Renders the payload.
    ///
    /// Block order: header, summary, then the recent releases section and
    /// the latest versions block when they have content.
    #[must_use]
    pub fn render(&self, summary: &ReleaseSummary) -> ChatPayload {
        let labels = joined_labels(&summary.labels());
        let mut blocks = vec![
            Block::header(format!("🚀 {labels} Weekly Release Summary")),
            Block::section(self.summary_text(summary)),
        ];

        if !summary.recent.is_empty() {
            blocks.push(Block::section("*🆕 Recent Releases:*".to_string()));
            blocks.extend(summary.recent.iter().take(self.max_recent).map(|release| {
                Block::section(format!(
                    "{} *{} {}*\n📅 {}\n🔗 <{}|View Release>",
                    self.marker(&release.source_label),
                    release.source_label,
                    release.version,
                    long_date(release.published_at),
                    release.url
                ))
            }));
        }

        let latest: Vec<String> = summary
            .latest_releases()
            .map(|release| {
                format!(
                    "{} {}: {} ({})\n",
                    self.marker(&release.source_label),
                    release.source_label,
                    release.version,
                    long_date(release.published_at)
                )
            })
            .collect();
        if !latest.is_empty() {
            blocks.push(Block::section(format!(
                "*📋 Current Latest Versions:*\n{}",
                latest.concat()
            )));
        }

        ChatPayload {
            text: format!("🚀 Weekly {labels} Releases Summary"),
            blocks,
        }
    }

    fn summary_text(&self, summary: &ReleaseSummary) -> String {
        let mut lines = vec![
            format!("📊 *Summary for {}*", short_date(summary.generated_at)),
            format!("• Total releases checked: {}", summary.total()),
        ];
        lines.extend(
            summary
                .sources
                .iter()
                .map(|source| format!("• {} releases: {}", source.label, source.count)),
        );
        lines.push(format!(
            "• Recent releases (last 7 days): {}",
            summary.recent_count()
        ));
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::releases::sample_release;
    use crate::summary::Aggregator;
    use chrono::{DateTime, Utc};

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2025-09-26T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn renderer() -> ChatRenderer {
        ChatRenderer::new()
            .with_marker("Vue.js", "💚")
            .with_marker("Nuxt.js", "🟢")
    }

    fn aggregate_one(label: &str) -> ReleaseSummary {
        Aggregator::new(now()).aggregate(vec![sample_release(
            label,
            "v1.0.0",
            "2025-09-25T00:00:00Z",
        )])
    }

    fn two_source_summary() -> ReleaseSummary {
        Aggregator::new(now())
            .with_labels(["Vue.js", "Nuxt.js"])
            .aggregate(vec![
                sample_release("Vue.js", "v3.5.22", "2025-09-25T10:00:00Z"),
                sample_release("Nuxt.js", "v4.1.2", "2025-09-12T15:30:00Z"),
            ])
    }

    #[test]
    fn renders_recent_and_latest_blocks() {
        let payload = renderer().render(&two_source_summary());

        assert_eq!(payload.text, "🚀 Weekly Vue.js & Nuxt.js Releases Summary");
        assert_eq!(payload.blocks.len(), 5);
        assert_eq!(
            payload.blocks[0],
            Block::header("🚀 Vue.js & Nuxt.js Weekly Release Summary".to_string())
        );
        assert_eq!(
            payload.blocks[1].text(),
            "📊 *Summary for 9/26/2025*\n\
             • Total releases checked: 2\n\
             • Vue.js releases: 1\n\
             • Nuxt.js releases: 1\n\
             • Recent releases (last 7 days): 1"
        );
        assert_eq!(payload.blocks[2].text(), "*🆕 Recent Releases:*");
        assert_eq!(
            payload.blocks[3].text(),
            "💚 *Vue.js v3.5.22*\n📅 September 25, 2025\n🔗 <https://github.com/example/v3.5.22|View Release>"
        );
        assert_eq!(
            payload.blocks[4].text(),
            "*📋 Current Latest Versions:*\n\
             💚 Vue.js: v3.5.22 (September 25, 2025)\n\
             🟢 Nuxt.js: v4.1.2 (September 12, 2025)\n"
        );
    }

    #[test]
    fn caps_recent_blocks() {
        let releases = (1..=7)
            .map(|day| {
                sample_release(
                    "Vue.js",
                    &format!("v3.5.{day}"),
                    &format!("2025-09-2{day}T00:00:00Z"),
                )
            })
            .collect();
        let summary = Aggregator::new(now() + chrono::TimeDelta::hours(36)).aggregate(releases);

        let payload = renderer().render(&summary);

        assert_eq!(summary.recent_count(), 7);
        // header, summary, recent header, 5 recent, latest
        assert_eq!(payload.blocks.len(), 9);
        assert!(payload.blocks[3].text().contains("v3.5.7"));
        assert!(payload.blocks[7].text().contains("v3.5.3"));
    }

    #[test]
    fn omits_optional_blocks_when_empty() {
        let summary = Aggregator::new(now())
            .with_labels(["Vue.js", "Nuxt.js"])
            .aggregate(Vec::new());

        let payload = renderer().render(&summary);

        assert_eq!(payload.blocks.len(), 2);
        assert!(payload.blocks[1].text().contains("• Vue.js releases: 0"));
        assert!(payload.blocks[1]
            .text()
            .contains("• Recent releases (last 7 days): 0"));
    }

    #[test]
    fn latest_block_skips_sources_without_releases() {
        let summary = Aggregator::new(now())
            .with_labels(["Vue.js", "Nuxt.js"])
            .aggregate(vec![sample_release(
                "Nuxt.js",
                "v4.1.2",
                "2025-09-12T15:30:00Z",
            )]);

        let payload = renderer().render(&summary);

        // Nothing recent, so only the latest block follows the summary.
        assert_eq!(payload.blocks.len(), 3);
        assert_eq!(
            payload.blocks[2].text(),
            "*📋 Current Latest Versions:*\n🟢 Nuxt.js: v4.1.2 (September 12, 2025)\n"
        );
    }

    #[test]
    fn unknown_sources_use_default_marker() {
        let summary = aggregate_one("Vite");
        let payload = ChatRenderer::new().render(&summary);

        assert!(payload.blocks[3].text().starts_with("• *Vite v1.0.0*"));
    }

    #[test]
    fn serializes_as_block_kit() {
        let payload = renderer().render(&two_source_summary());
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["blocks"][0]["type"], "header");
        assert_eq!(json["blocks"][0]["text"]["type"], "plain_text");
        assert_eq!(json["blocks"][1]["type"], "section");
        assert_eq!(json["blocks"][1]["text"]["type"], "mrkdwn");
        assert_eq!(json["text"], payload.text);
    }

    #[test]
    fn from_sources_uses_configured_markers() {
        let renderer = ChatRenderer::from_sources(&[Source::new("Vite", "vitejs/vite", "⚡")]);
        let payload = renderer.render(&aggregate_one("Vite"));

        assert!(payload.blocks[3].text().starts_with("⚡ *Vite v1.0.0*"));
    }
}
