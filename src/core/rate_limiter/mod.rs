//! Rate Limiting Implementation
//!
//! Per-client sliding-window admission control. The limiter logic is separate
//! from where timestamps live: [`RateLimitStore`] is implemented by a
//! process-local map and, with the `redis` feature, by Redis sorted sets so
//! several gateway instances can share one budget.

mod limiter;
mod memory;
#[cfg(feature = "redis")]
mod redis;
mod store;
mod types;


pub use limiter::SlidingWindowLimiter;
pub use memory::InMemoryStore;
#[cfg(feature = "redis")]
pub use redis::RedisStore;
pub use store::RateLimitStore;
pub use types::RateLimitDecision;

use crate::config::models::rate_limit::{RateLimitConfig, RateLimitStoreKind};
use crate::utils::error::{GatewayError, Result};
use std::sync::Arc;
use tracing::info;

/// Build the store selected by configuration
pub async fn build_store(config: &RateLimitConfig) -> Result<Arc<dyn RateLimitStore>> {
    match config.store {
        RateLimitStoreKind::Memory => {
            info!("Rate limit store: in-memory (single process, reset on restart)");
            Ok(Arc::new(InMemoryStore::new()))
        }
        #[cfg(feature = "redis")]
        RateLimitStoreKind::Redis => {
            let url = config
                .redis_url
                .as_deref()
                .ok_or_else(|| GatewayError::config("redis_url is required for the redis store"))?;
            Ok(Arc::new(RedisStore::connect(url).await?))
        }
        #[cfg(not(feature = "redis"))]
        RateLimitStoreKind::Redis => Err(GatewayError::config(
            "redis store requested but the crate was built without the `redis` feature",
        )),
    }
}
