//! Rate limiting configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Rate limiting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Enable rate limiting
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Requests admitted per client inside one window
    #[serde(default = "default_max_requests")]
    pub max_requests: u32,
    /// Sliding window length in milliseconds
    #[serde(default = "default_window_ms")]
    pub window_ms: u64,
    /// Key clients by the forwarded real IP instead of the socket peer
    #[serde(default)]
    pub trust_forwarded_for: bool,
    /// Where request timestamps are kept
    #[serde(default)]
    pub store: RateLimitStoreKind,
    /// Redis URL, required when `store` is `redis`
    #[serde(default)]
    pub redis_url: Option<String>,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_requests: default_max_requests(),
            window_ms: default_window_ms(),
            trust_forwarded_for: false,
            store: RateLimitStoreKind::default(),
            redis_url: None,
        }
    }
}

impl RateLimitConfig {
    pub fn window(&self) -> Duration {
        Duration::from_millis(self.window_ms)
    }

    /// Validate rate limit configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_requests == 0 {
            return Err("max_requests cannot be 0".to_string());
        }
        if self.window_ms == 0 {
            return Err("window_ms cannot be 0".to_string());
        }
        if self.store == RateLimitStoreKind::Redis
            && self.redis_url.as_deref().is_none_or(|u| u.trim().is_empty())
        {
            return Err("redis_url is required for the redis store".to_string());
        }
        Ok(())
    }
}

/// Rate limit store backend
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RateLimitStoreKind {
    /// Process-local map; not shared between instances and lost on restart
    #[default]
    Memory,
    /// Redis sorted sets shared by every instance
    Redis,
}
