//! Release payloads and their normalization.
//!
//! Raw provider payloads ([`RawRelease`]) are mapped onto [`CanonicalRelease`]
//! records. Optional fields resolve through ordered fallback chains; only a
//! missing or malformed publish time rejects a record.

mod canonical;
mod error;
mod raw;

pub use canonical::{CanonicalRelease, ReleaseType};
pub use error::NormalizeError;
pub use raw::{RawAsset, RawAuthor, RawRelease};

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

/// Maximum description length in characters before truncation.
pub const DESCRIPTION_LIMIT: usize = 200;

/// Appended to truncated descriptions.
pub const ELLIPSIS: &str = "...";

/// Description used when a release has no body.
pub const NO_DESCRIPTION: &str = "No description available";

/// Author used when a release has no author.
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// Returns the first candidate that is present and non-empty.
///
/// Candidates are evaluated in order, so callers list them from most to
/// least preferred.
fn first_present<'a>(candidates: impl IntoIterator<Item = Option<&'a str>>) -> Option<&'a str> {
    candidates
        .into_iter()
        .flatten()
        .find(|candidate| !candidate.is_empty())
}

/// Truncates a body to [`DESCRIPTION_LIMIT`] characters plus [`ELLIPSIS`].
///
/// Bodies that already fit are returned verbatim.
fn truncate_description(body: &str) -> String {
    match body.char_indices().nth(DESCRIPTION_LIMIT) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &body[..cut]),
        None => body.to_string(),
    }
}

fn parse_published_at(raw: &RawRelease) -> Result<DateTime<Utc>, NormalizeError> {
    let value = raw
        .published_at
        .as_deref()
        .ok_or_else(|| NormalizeError::MissingPublishedAt {
            version: raw.tag_name.clone(),
        })?;

    DateTime::parse_from_rfc3339(value)
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|e| NormalizeError::InvalidPublishedAt {
            version: raw.tag_name.clone(),
            value: value.to_string(),
            message: e.to_string(),
        })
}

/// Normalizes a raw release into a [`CanonicalRelease`].
///
/// # Arguments
///
/// * `raw` - Provider payload
/// * `source_label` - Label of the source (e.g., "Vue.js")
/// * `repository` - Repository in "owner/name" format
///
/// # Errors
///
/// Returns [`NormalizeError`] if `published_at` is missing or not RFC 3339.
/// Every other absent field resolves to its fallback.
pub fn normalize(
    raw: &RawRelease,
    source_label: &str,
    repository: &str,
) -> Result<CanonicalRelease, NormalizeError> {
    let published_at = parse_published_at(raw)?;

    let display_name = first_present([raw.name.as_deref(), Some(raw.tag_name.as_str())])
        .unwrap_or(&raw.tag_name)
        .to_string();

    let description = first_present([raw.body.as_deref()])
        .map(truncate_description)
        .unwrap_or_else(|| NO_DESCRIPTION.to_string());

    let author = first_present([raw.author.as_ref().and_then(|a| a.login.as_deref())])
        .unwrap_or(UNKNOWN_AUTHOR)
        .to_string();

    let assets = raw.assets.as_deref().unwrap_or_default();
    let total_download_count = assets
        .iter()
        .map(|asset| asset.download_count.unwrap_or(0))
        .fold(0u64, u64::saturating_add);

    Ok(CanonicalRelease {
        source_label: source_label.to_string(),
        version: raw.tag_name.clone(),
        display_name,
        description,
        published_at,
        created_at: raw.created_at.clone(),
        url: raw.html_url.clone(),
        is_draft: raw.draft.unwrap_or(false),
        is_prerelease: raw.prerelease.unwrap_or(false),
        author,
        asset_count: assets.len(),
        total_download_count,
        repository: repository.to_string(),
    })
}

/// Normalizes a batch of payloads from one source.
///
/// Rejected payloads are logged and dropped; input order is kept for the
/// rest.
pub fn normalize_all(
    raws: &[RawRelease],
    source_label: &str,
    repository: &str,
) -> Vec<CanonicalRelease> {
    let releases: Vec<CanonicalRelease> = raws
        .iter()
        .filter_map(|raw| match normalize(raw, source_label, repository) {
            Ok(release) => Some(release),
            Err(e) => {
                warn!(source = source_label, error = %e, "Skipping release");
                None
            }
        })
        .collect();

    debug!(
        source = source_label,
        accepted = releases.len(),
        rejected = raws.len() - releases.len(),
        "Normalized releases"
    );
    releases
}

/// Builds a release for tests in other modules.
#[cfg(test)]
pub(crate) fn sample_release(label: &str, version: &str, published_at: &str) -> CanonicalRelease {
    let raw = RawRelease {
        tag_name: version.to_string(),
        published_at: Some(published_at.to_string()),
        html_url: format!("https://github.com/example/{version}"),
        ..Default::default()
    };
    normalize(&raw, label, "example/repo").unwrap()
}
