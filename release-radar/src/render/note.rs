//! Markdown note documents rendered with Handlebars.

use super::{joined_labels, long_date, short_date, timestamp, RenderError};
use crate::config::NoteSettings;
use crate::summary::ReleaseSummary;
use handlebars::{no_escape, Handlebars};
use serde::Serialize;
use serde_json::json;

/// Template for the note body.
const NOTE_TEMPLATE: &str = r#"# {{heading}} Release Summary

**Date:** {{date}}
**Collection Time:** {{timestamp}}

## 📊 Summary

- **Total releases checked:** {{total}}
{{#each sources}}
- **{{label}} releases:** {{count}}
{{/each}}
- **Recent releases (last 7 days):** {{recent_count}}

## 🆕 Recent Releases

{{#each recent}}
### {{label}} {{version}}

- **Published:** {{published}}
- **Type:** {{release_type}}
- **Repository:** {{repository}}
- **URL:** [{{url}}]({{url}})
- **Description:** {{description}}

{{else}}
No new releases in the last week.
{{/each}}

## 📋 Latest Versions

{{#each latest}}
**{{label}}:** {{version}} ({{published}})
{{/each}}

## 🏷️ Tags

{{tags}}

---
*Generated automatically by {{generator}}*"#;

/// Creates a configured Handlebars registry.
///
/// The registry is configured with:
/// - No HTML escaping (for markdown output)
/// - Strict mode (catches missing variables)
#[must_use]
pub fn create_handlebars_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();
    hbs.register_escape_fn(no_escape);
    hbs.set_strict_mode(true);
    hbs
}

/// A rendered note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteDocument {
    pub title: String,
    pub content: String,
}

/// Renders a [`ReleaseSummary`] into a [`NoteDocument`].
pub struct NoteRenderer {
    handlebars: Handlebars<'static>,
    settings: NoteSettings,
}

impl Default for NoteRenderer {
    fn default() -> Self {
        Self::new(NoteSettings::default())
    }
}

impl NoteRenderer {
    /// Creates a note renderer.
    #[must_use]
    pub fn new(settings: NoteSettings) -> Self {
        Self {
            handlebars: create_handlebars_registry(),
            settings,
        }
    }

    /// Renders the note.
    ///
    /// Every recent release is listed; sources without releases are left out
    /// of the latest versions section.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render(&self, summary: &ReleaseSummary) -> Result<NoteDocument, RenderError> {
        let date = short_date(summary.generated_at);

        let sources: Vec<_> = summary
            .sources
            .iter()
            .map(|s| json!({ "label": s.label, "count": s.count }))
            .collect();

        let recent: Vec<_> = summary
            .recent
            .iter()
            .map(|r| {
                json!({
                    "label": r.source_label,
                    "version": r.version,
                    "published": long_date(r.published_at),
                    "release_type": r.release_type().as_str(),
                    "repository": r.repository,
                    "url": r.url,
                    "description": r.description,
                })
            })
            .collect();

        let latest: Vec<_> = summary
            .latest_releases()
            .map(|r| {
                json!({
                    "label": r.source_label,
                    "version": r.version,
                    "published": long_date(r.published_at),
                })
            })
            .collect();

        let tags = self
            .settings
            .tags
            .iter()
            .map(|tag| format!("#{tag}"))
            .collect::<Vec<_>>()
            .join(" ");

        let data = json!({
            "heading": joined_labels(&summary.labels()),
            "date": date,
            "timestamp": timestamp(summary.generated_at),
            "total": summary.total(),
            "sources": sources,
            "recent_count": summary.recent_count(),
            "recent": recent,
            "latest": latest,
            "tags": tags,
            "generator": self.settings.generator,
        });

        let content = self.handlebars.render_template(NOTE_TEMPLATE, &data)?;

        Ok(NoteDocument {
            title: format!("{} - {}", self.settings.title_prefix, date),
            content,
        })
    }
}
