//! Rate limiter types

/// Outcome of one admission check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitDecision {
    /// Whether the request is admitted
    pub allowed: bool,
    /// Requests counted in the window, including this one when admitted
    pub current_count: u32,
    /// Maximum requests allowed in the window
    pub limit: u32,
    /// Requests left in the window
    pub remaining: u32,
    /// Whole seconds until the oldest counted request leaves the window
    pub reset_after_secs: u64,
}

impl RateLimitDecision {
    /// Decision used when limiting is switched off
    pub fn unlimited(limit: u32) -> Self {
        Self {
            allowed: true,
            current_count: 0,
            limit,
            remaining: limit,
            reset_after_secs: 0,
        }
    }

    /// Seconds to wait before retrying, only set for rejections
    pub fn retry_after(&self) -> Option<u64> {
        (!self.allowed).then_some(self.reset_after_secs)
    }
}
