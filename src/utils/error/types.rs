//! Error types for the gateway

use thiserror::Error;

/// Result type alias for the gateway
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Main error type for the gateway
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Missing or malformed request input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Client exceeded its sliding-window budget
    #[error("Rate limit exceeded, retry in {reset_time}s")]
    RateLimited {
        /// Seconds until the oldest counted request leaves the window
        reset_time: u64,
    },

    /// Upstream provider reported an exhausted quota
    #[error("Upstream quota exceeded: {0}")]
    QuotaExceeded(String),

    /// Upstream provider rejected our credentials
    #[error("Invalid upstream credentials: {0}")]
    InvalidCredentials(String),

    /// Any other upstream failure
    #[error("Upstream failure: {0}")]
    Upstream(String),

    /// Upstream did not answer in time
    #[error("Upstream timeout: {0}")]
    Timeout(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is not valid YAML
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Redis errors
    #[cfg(feature = "redis")]
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    /// HTTP server errors
    #[error("Server error: {0}")]
    Server(String),
}
