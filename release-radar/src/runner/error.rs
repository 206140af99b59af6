//! Runner error types.

/// Errors that can occur while running the radar.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Configuration loading errors.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// GitHub client initialization errors.
    #[error(transparent)]
    Fetch(#[from] crate::fetch::FetchError),

    /// Digest rendering errors.
    #[error(transparent)]
    Render(#[from] crate::render::RenderError),

    /// No source could be fetched.
    #[error("All {count} sources failed to fetch")]
    AllSourcesFailed { count: usize },
}
