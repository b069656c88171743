//! Redis-backed timestamp store
//!
//! Each client is a sorted set scored by request time, so pruning is a single
//! `ZREMRANGEBYSCORE` and idle keys expire on their own.

use super::store::RateLimitStore;
use crate::utils::error::{GatewayError, Result};
use async_trait::async_trait;
use redis::{Client, aio::MultiplexedConnection};
use std::time::Duration;
use tracing::{debug, info};

const KEY_PREFIX: &str = "bento:ratelimit:";

/// Shared store for gateways running as several processes
#[derive(Clone)]
pub struct RedisStore {
    conn: MultiplexedConnection,
}

impl RedisStore {
    /// Connect to the Redis server at `url`
    pub async fn connect(url: &str) -> Result<Self> {
        info!("Connecting rate limit store to Redis");
        debug!("Redis URL: {}", Self::sanitize_url(url));

        let client = Client::open(url).map_err(GatewayError::Redis)?;
        let conn = client
            .get_multiplexed_async_connection()
            .await
            .map_err(GatewayError::Redis)?;

        Ok(Self { conn })
    }

    fn key(client: &str) -> String {
        format!("{}{}", KEY_PREFIX, client)
    }

    /// Hide credentials embedded in the URL
    fn sanitize_url(url: &str) -> String {
        match url::Url::parse(url) {
            Ok(mut parsed) if parsed.password().is_some() => {
                let _ = parsed.set_password(Some("***"));
                parsed.to_string()
            }
            Ok(parsed) => parsed.to_string(),
            Err(_) => "<invalid url>".to_string(),
        }
    }
}

#[async_trait]
impl RateLimitStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Vec<u64>> {
        let mut conn = self.conn.clone();
        let entries: Vec<(String, f64)> = redis::cmd("ZRANGE")
            .arg(Self::key(key))
            .arg(0)
            .arg(-1)
            .arg("WITHSCORES")
            .query_async(&mut conn)
            .await?;

        Ok(entries.into_iter().map(|(_, score)| score as u64).collect())
    }

    async fn prune(&self, key: &str, cutoff_ms: u64) -> Result<()> {
        let mut conn = self.conn.clone();
        let _: () = redis::cmd("ZREMRANGEBYSCORE")
            .arg(Self::key(key))
            .arg("-inf")
            .arg(cutoff_ms)
            .query_async(&mut conn)
            .await?;
        Ok(())
    }

    async fn append(&self, key: &str, timestamp_ms: u64, window: Duration) -> Result<()> {
        let mut conn = self.conn.clone();
        let redis_key = Self::key(key);
        // Members must be unique or same-millisecond requests collapse into one
        let member = format!("{}-{}", timestamp_ms, uuid::Uuid::new_v4());

        let _: () = redis::pipe()
            .atomic()
            .cmd("ZADD")
            .arg(&redis_key)
            .arg(timestamp_ms)
            .arg(member)
            .ignore()
            .cmd("PEXPIRE")
            .arg(&redis_key)
            .arg(window.as_millis() as u64)
            .ignore()
            .query_async(&mut conn)
            .await?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "redis"
    }
}
