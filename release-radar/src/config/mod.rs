//! Configuration loading.
//!
//! This module handles parsing the radar TOML file and validating the
//! tracked sources. When no file is given the built-in Vue.js / Nuxt
//! configuration is used.

mod error;
mod radar;
mod source;

pub use error::ConfigError;
pub use radar::{default_sources, NoteSettings, RadarConfig, DEFAULT_PER_PAGE};
pub use source::{Source, DEFAULT_MARKER};

use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};
use url::Url;

/// Label used in validation errors for the built-in configuration.
const BUILTIN_PATH: &str = "<built-in>";

impl RadarConfig {
    /// Loads a config file, or the built-in defaults when `path` is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file is missing, unreadable, not valid
    /// TOML, or fails validation.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            debug!("No config file given, using built-in sources");
            let config = Self::default();
            config.validate(BUILTIN_PATH)?;
            return Ok(config);
        };

        info!(path = %path.display(), "Loading config");

        if !path.exists() {
            return Err(ConfigError::MissingFile {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        let config = Self::parse(&content, &path.display().to_string())?;
        info!(sources = config.sources.len(), "Loaded config");
        Ok(config)
    }

    /// Parses and validates config content.
    ///
    /// `origin` is only used in error messages.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the content is not valid TOML or fails
    /// validation.
    pub fn parse(content: &str, origin: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::TomlError {
            path: origin.to_string(),
            source: e,
        })?;
        config.validate(origin)?;
        Ok(config)
    }

    /// Validates the parsed configuration.
    fn validate(&self, origin: &str) -> Result<(), ConfigError> {
        let invalid = |message: String| ConfigError::ValidationError {
            path: origin.to_string(),
            message,
        };

        if self.sources.is_empty() {
            return Err(invalid("at least one source is required".to_string()));
        }

        if self.per_page == 0 || self.per_page > 100 {
            return Err(invalid(format!(
                "per-page must be between 1 and 100, got {}",
                self.per_page
            )));
        }

        if let Some(base) = &self.api_base_url {
            Url::parse(base).map_err(|e| invalid(format!("api-base-url '{base}': {e}")))?;
        }

        let mut seen = HashSet::new();
        for source in &self.sources {
            if source.label.trim().is_empty() {
                return Err(invalid("source label cannot be empty".to_string()));
            }
            if source.owner_and_name().is_none() {
                return Err(invalid(format!(
                    "repository '{}' must be in owner/name format",
                    source.repository
                )));
            }
            if !seen.insert(source.label.as_str()) {
                return Err(invalid(format!("duplicate source label '{}'", source.label)));
            }
        }

        Ok(())
    }
}
