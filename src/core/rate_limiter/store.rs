//! Storage abstraction for request timestamps

use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Where per-client request timestamps (milliseconds since the epoch) live
///
/// Implementations only store; admission decisions belong to
/// [`SlidingWindowLimiter`](super::SlidingWindowLimiter).
#[async_trait]
pub trait RateLimitStore: Send + Sync {
    /// Timestamps currently kept for `key`, oldest first
    async fn get(&self, key: &str) -> Result<Vec<u64>>;

    /// Drop every timestamp at or before `cutoff_ms`
    async fn prune(&self, key: &str, cutoff_ms: u64) -> Result<()>;

    /// Record a request at `timestamp_ms`
    ///
    /// `window` lets stores with native expiry drop idle keys.
    async fn append(&self, key: &str, timestamp_ms: u64, window: Duration) -> Result<()>;

    /// Remove keys with nothing newer than `cutoff_ms`, returning how many went
    async fn sweep(&self, _cutoff_ms: u64) -> Result<usize> {
        Ok(0)
    }

    /// Backend name for logs
    fn name(&self) -> &'static str;
}
