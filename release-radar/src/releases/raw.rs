//! Raw GitHub release payloads.

use serde::Deserialize;

/// A release as returned by `GET /repos/{owner}/{repo}/releases`.
///
/// Only the fields the normalizer reads are modelled; everything else in
/// the response is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawRelease {
    /// Git tag of the release.
    pub tag_name: String,

    /// Display name, often equal to the tag.
    #[serde(default)]
    pub name: Option<String>,

    /// Release notes in markdown.
    #[serde(default)]
    pub body: Option<String>,

    /// Publish time. GitHub leaves this unset for drafts.
    #[serde(default)]
    pub published_at: Option<String>,

    /// Creation time of the release object.
    #[serde(default)]
    pub created_at: Option<String>,

    /// Web URL of the release page.
    pub html_url: String,

    /// `null` and absent both read as unset.
    #[serde(default)]
    pub draft: Option<bool>,

    #[serde(default)]
    pub prerelease: Option<bool>,

    /// Account that published the release.
    #[serde(default)]
    pub author: Option<RawAuthor>,

    /// Files attached to the release.
    #[serde(default)]
    pub assets: Option<Vec<RawAsset>>,
}

/// The author object of a release.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawAuthor {
    #[serde(default)]
    pub login: Option<String>,
}

/// A downloadable release asset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawAsset {
    #[serde(default)]
    pub download_count: Option<u64>,
}
