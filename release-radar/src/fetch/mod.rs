//! Release fetching from the GitHub Releases API.
//!
//! One request per source, newest releases first as GitHub returns them.
//! There is no retry and no pagination beyond the first page.

mod error;

pub use error::FetchError;

use crate::config::{RadarConfig, Source};
use crate::releases::RawRelease;
use octocrab::Octocrab;
use tracing::{debug, info, info_span, Instrument};

/// Fetches raw releases for configured sources.
#[derive(Clone)]
pub struct ReleaseFetcher {
    octocrab: Octocrab,
    per_page: u8,
}

impl ReleaseFetcher {
    /// Builds a fetcher from the radar config.
    ///
    /// # Arguments
    ///
    /// * `config` - Radar configuration (page size, API base URL)
    /// * `token` - Optional GitHub token; anonymous requests are allowed
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if the GitHub client cannot be built.
    pub fn new(config: &RadarConfig, token: Option<&str>) -> Result<Self, FetchError> {
        let mut builder = Octocrab::builder();
        if let Some(token) = token {
            builder = builder.personal_token(token.to_string());
        }
        if let Some(base_url) = &config.api_base_url {
            builder = builder.base_uri(base_url.as_str())?;
        }

        Ok(Self::from_octocrab(builder.build()?, config.per_page))
    }

    /// Wraps an existing client.
    #[must_use]
    pub fn from_octocrab(octocrab: Octocrab, per_page: u8) -> Self {
        Self { octocrab, per_page }
    }

    /// Returns the underlying GitHub client.
    #[must_use]
    pub fn octocrab(&self) -> &Octocrab {
        &self.octocrab
    }

    /// Fetches the most recent releases of a source.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if the repository is malformed or the request
    /// fails.
    pub async fn fetch(&self, source: &Source) -> Result<Vec<RawRelease>, FetchError> {
        let span = info_span!(
            "fetch",
            source = %source.label,
            repository = %source.repository
        );

        async {
            let route = releases_route(source)?;
            debug!(route = %route, per_page = self.per_page, "Requesting releases");

            let releases: Vec<RawRelease> = self
                .octocrab
                .get(route, Some(&[("per_page", self.per_page)]))
                .await?;

            info!(count = releases.len(), "Fetched releases");
            Ok(releases)
        }
        .instrument(span)
        .await
    }
}

/// Builds the releases endpoint path for a source.
fn releases_route(source: &Source) -> Result<String, FetchError> {
    let (owner, name) = source
        .owner_and_name()
        .ok_or_else(|| FetchError::InvalidRepository {
            repository: source.repository.clone(),
        })?;
    Ok(format!("/repos/{owner}/{name}/releases"))
}
