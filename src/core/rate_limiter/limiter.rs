//! Sliding window rate limiter

use super::memory::InMemoryStore;
use super::store::RateLimitStore;
use super::types::RateLimitDecision;
use crate::config::models::rate_limit::RateLimitConfig;
use crate::utils::error::Result;
use crate::utils::now_millis;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// Sliding window limiter over a pluggable [`RateLimitStore`]
///
/// A request is admitted when fewer than `max_requests` timestamps fall inside
/// the trailing window. Stale timestamps are pruned lazily on every check.
pub struct SlidingWindowLimiter {
    store: Arc<dyn RateLimitStore>,
    max_requests: u32,
    window: Duration,
    enabled: bool,
    /// Serializes prune/get/append so check-then-record is atomic in-process
    admission: Mutex<()>,
}

impl SlidingWindowLimiter {
    /// Create a limiter over an existing store
    pub fn new(config: &RateLimitConfig, store: Arc<dyn RateLimitStore>) -> Self {
        Self {
            store,
            max_requests: config.max_requests,
            window: config.window(),
            enabled: config.enabled,
            admission: Mutex::new(()),
        }
    }

    /// Create a limiter backed by a fresh in-memory store
    pub fn in_memory(config: &RateLimitConfig) -> Self {
        Self::new(config, Arc::new(InMemoryStore::new()))
    }

    /// Check and record a request made now
    pub async fn check_and_record(&self, key: &str) -> Result<RateLimitDecision> {
        self.check_and_record_at(key, now_millis()).await
    }

    /// Check and record a request made at `now_ms`
    ///
    /// Rejected requests are not recorded, so they do not extend the lockout.
    pub async fn check_and_record_at(&self, key: &str, now_ms: u64) -> Result<RateLimitDecision> {
        if !self.enabled {
            return Ok(RateLimitDecision::unlimited(self.max_requests));
        }

        let window_ms = self.window_ms();
        let _guard = self.admission.lock().await;

        self.store
            .prune(key, now_ms.saturating_sub(window_ms))
            .await?;
        let timestamps = self.store.get(key).await?;

        let current_count = timestamps.len() as u32;
        if current_count >= self.max_requests {
            let oldest = timestamps.iter().copied().min().unwrap_or(now_ms);
            let reset_after_secs = Self::seconds_until(oldest + window_ms, now_ms);
            debug!(
                "Rate limit exceeded for {}: {}/{} requests, reset in {}s",
                key, current_count, self.max_requests, reset_after_secs
            );
            return Ok(RateLimitDecision {
                allowed: false,
                current_count,
                limit: self.max_requests,
                remaining: 0,
                reset_after_secs,
            });
        }

        self.store.append(key, now_ms, self.window).await?;

        let oldest = timestamps.iter().copied().min().unwrap_or(now_ms);
        Ok(RateLimitDecision {
            allowed: true,
            current_count: current_count + 1,
            limit: self.max_requests,
            remaining: self.max_requests - current_count - 1,
            reset_after_secs: Self::seconds_until(oldest + window_ms, now_ms),
        })
    }

    /// Drop idle clients from the store
    pub async fn cleanup(&self) -> Result<usize> {
        let cutoff = now_millis().saturating_sub(self.window_ms());
        let _guard = self.admission.lock().await;
        self.store.sweep(cutoff).await
    }

    /// Start background cleanup task
    pub fn start_cleanup_task(self: Arc<Self>) -> tokio::task::JoinHandle<()> {
        let period = self.window.max(Duration::from_secs(1));
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            loop {
                interval.tick().await;
                match self.cleanup().await {
                    Ok(0) => {}
                    Ok(removed) => debug!("Rate limiter dropped {} idle clients", removed),
                    Err(e) => warn!("Rate limiter cleanup failed: {}", e),
                }
            }
        })
    }

    /// Check if rate limiting is enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Get the configured limit
    pub fn limit(&self) -> u32 {
        self.max_requests
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Backend name of the underlying store
    pub fn store_name(&self) -> &'static str {
        self.store.name()
    }

    fn window_ms(&self) -> u64 {
        self.window.as_millis() as u64
    }

    /// Whole seconds from `now_ms` until `deadline_ms`, rounded up, never negative
    fn seconds_until(deadline_ms: u64, now_ms: u64) -> u64 {
        deadline_ms.saturating_sub(now_ms).div_ceil(1000)
    }
}
