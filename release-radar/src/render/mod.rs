//! Digest rendering.
//!
//! Both renderers consume a [`ReleaseSummary`](crate::summary::ReleaseSummary)
//! and never recompute recency or latest releases themselves.

pub mod chat;
mod error;
pub mod note;

pub use chat::{Block, ChatPayload, ChatRenderer, TextObject, DEFAULT_MAX_RECENT};
pub use error::RenderError;
pub use note::{create_handlebars_registry, NoteDocument, NoteRenderer};

use chrono::{DateTime, SecondsFormat, Utc};

/// Formats a date the way en-US short dates read (e.g., "9/26/2025").
#[must_use]
pub fn short_date(at: DateTime<Utc>) -> String {
    at.format("%-m/%-d/%Y").to_string()
}

/// Formats a date in long form (e.g., "September 25, 2025").
#[must_use]
pub fn long_date(at: DateTime<Utc>) -> String {
    at.format("%B %-d, %Y").to_string()
}

/// Formats a full UTC timestamp with millisecond precision.
#[must_use]
pub fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Joins source labels for headings (e.g., "Vue.js & Nuxt.js").
pub(crate) fn joined_labels(labels: &[&str]) -> String {
    labels.join(" & ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(value: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(value).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn formats_dates() {
        let date = at("2025-09-05T10:00:00Z");

        assert_eq!(short_date(date), "9/5/2025");
        assert_eq!(long_date(date), "September 5, 2025");
        assert_eq!(timestamp(date), "2025-09-05T10:00:00.000Z");
    }

    #[test]
    fn joins_labels() {
        assert_eq!(joined_labels(&["Vue.js", "Nuxt.js"]), "Vue.js & Nuxt.js");
        assert_eq!(joined_labels(&["Vite"]), "Vite");
    }
}
