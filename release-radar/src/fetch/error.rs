//! Fetch error types.

use thiserror::Error;

/// Errors that can occur while fetching releases.
#[derive(Debug, Error)]
pub enum FetchError {
    /// GitHub API error.
    #[error("GitHub API error: {0}")]
    GitHubError(#[from] octocrab::Error),

    /// The source repository is not in owner/name format.
    #[error("Invalid repository '{repository}', expected owner/name")]
    InvalidRepository { repository: String },
}
