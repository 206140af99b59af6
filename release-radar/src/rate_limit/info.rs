//! Rate limit information.

/// Remaining requests below which the quota is reported as low.
pub const LOW_REMAINING_THRESHOLD: u32 = 5;

/// Rate limit information for a specific resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitInfo {
    /// Requests remaining in the current window.
    pub remaining: u32,

    /// Unix timestamp when the rate limit resets.
    pub reset: u64,

    /// Total requests allowed per window.
    pub limit: u32,
}

impl RateLimitInfo {
    /// Returns true if fewer than `needed` requests remain.
    #[must_use]
    pub fn is_insufficient_for(&self, needed: usize) -> bool {
        (self.remaining as usize) < needed
    }

    /// Returns true if the remaining quota is nearly exhausted.
    #[must_use]
    pub fn is_low(&self) -> bool {
        self.remaining < LOW_REMAINING_THRESHOLD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_low_quota() {
        let info = RateLimitInfo {
            remaining: 2,
            reset: 1234567890,
            limit: 60,
        };

        assert!(info.is_low());
        assert!(info.is_insufficient_for(3));
        assert!(!info.is_insufficient_for(2));
    }

    #[test]
    fn plenty_of_quota() {
        let info = RateLimitInfo {
            remaining: 59,
            reset: 0,
            limit: 60,
        };

        assert!(!info.is_low());
        assert!(!info.is_insufficient_for(2));
    }
}
