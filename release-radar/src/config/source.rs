//! Release source definitions.

use serde::{Deserialize, Serialize};

/// Marker used for sources that do not configure one.
pub const DEFAULT_MARKER: &str = "•";

/// A repository whose releases are tracked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Source {
    /// Display label (e.g., "Vue.js").
    pub label: String,

    /// Repository in "owner/name" format.
    pub repository: String,

    /// Glyph shown next to this source in chat messages.
    #[serde(default = "default_marker")]
    pub marker: String,
}

fn default_marker() -> String {
    DEFAULT_MARKER.to_string()
}

impl Source {
    /// Creates a new source.
    pub fn new(
        label: impl Into<String>,
        repository: impl Into<String>,
        marker: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            repository: repository.into(),
            marker: marker.into(),
        }
    }

    /// Splits the repository into owner and name.
    ///
    /// Returns `None` unless the repository is exactly `owner/name` with both
    /// parts non-empty.
    #[must_use]
    pub fn owner_and_name(&self) -> Option<(&str, &str)> {
        let (owner, name) = self.repository.split_once('/')?;
        if owner.is_empty() || name.is_empty() || name.contains('/') {
            return None;
        }
        Some((owner, name))
    }
}
