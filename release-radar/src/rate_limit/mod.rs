//! GitHub API quota reporting.
//!
//! The radar never waits for a reset; it only reports the remaining core
//! quota before fetching so exhausted tokens are visible in the logs.

mod info;

pub use info::{RateLimitInfo, LOW_REMAINING_THRESHOLD};

use octocrab::Octocrab;
use tracing::{info, warn};

/// Checks the current rate limit status for core API (repos, releases, etc.).
///
/// # Errors
///
/// Returns an error if the rate limit API call fails.
pub async fn check_core_rate_limit(octocrab: &Octocrab) -> Result<RateLimitInfo, octocrab::Error> {
    let rate_limit = octocrab.ratelimit().get().await?;
    let core = &rate_limit.resources.core;

    Ok(RateLimitInfo {
        remaining: core.remaining as u32,
        reset: core.reset,
        limit: core.limit as u32,
    })
}

/// Logs the remaining core quota ahead of `planned` requests.
///
/// A failed probe is logged and otherwise ignored.
pub async fn report_core_rate_limit(octocrab: &Octocrab, planned: usize) -> Option<RateLimitInfo> {
    match check_core_rate_limit(octocrab).await {
        Ok(rate) => {
            if rate.is_insufficient_for(planned) || rate.is_low() {
                warn!(
                    remaining = rate.remaining,
                    limit = rate.limit,
                    reset = rate.reset,
                    planned,
                    "Rate limit nearly exhausted"
                );
            } else {
                info!(
                    remaining = rate.remaining,
                    limit = rate.limit,
                    "Rate limit remaining"
                );
            }
            Some(rate)
        }
        Err(e) => {
            warn!(error = %e, "Failed to check rate limit");
            None
        }
    }
}
