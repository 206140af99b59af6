//! Top-level radar configuration.

use super::source::Source;
use serde::Deserialize;

/// Default number of releases requested per source.
pub const DEFAULT_PER_PAGE: u8 = 5;

/// Settings for the markdown note digest.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct NoteSettings {
    /// Prefix of the note title; the current date is appended.
    pub title_prefix: String,

    /// Tags written to the tag line, without the leading `#`.
    pub tags: Vec<String>,

    /// Name shown in the generated-by footer.
    pub generator: String,
}

impl Default for NoteSettings {
    fn default() -> Self {
        Self {
            title_prefix: "Vue & Nuxt Releases".to_string(),
            tags: ["vue", "nuxt", "releases", "weekly-summary"]
                .into_iter()
                .map(String::from)
                .collect(),
            generator: "Vue-Nuxt News Collector".to_string(),
        }
    }
}

/// Parsed contents of a radar config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RadarConfig {
    /// Number of releases requested per source.
    #[serde(default = "default_per_page")]
    pub per_page: u8,

    /// Alternative GitHub API root (e.g., for GitHub Enterprise).
    #[serde(default)]
    pub api_base_url: Option<String>,

    /// Tracked repositories, in display order.
    #[serde(default = "default_sources")]
    pub sources: Vec<Source>,

    /// Note digest settings.
    #[serde(default)]
    pub note: NoteSettings,
}

pub(crate) fn default_per_page() -> u8 {
    DEFAULT_PER_PAGE
}

/// The built-in sources: Vue.js core and Nuxt.
pub fn default_sources() -> Vec<Source> {
    vec![
        Source::new("Vue.js", "vuejs/core", "💚"),
        Source::new("Nuxt.js", "nuxt/nuxt", "🟢"),
    ]
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
            api_base_url: None,
            sources: default_sources(),
            note: NoteSettings::default(),
        }
    }
}

impl RadarConfig {
    /// Returns the configured source labels in display order.
    pub fn labels(&self) -> Vec<String> {
        self.sources.iter().map(|s| s.label.clone()).collect()
    }
}
