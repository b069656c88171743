//! Error handling

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SDKError {
    /// The proxy could not be reached at all
    #[error("Network error: {0}")]
    NetworkError(String),

    /// The proxy's limiter rejected this client
    #[error("Rate limit exceeded: {message}")]
    RateLimitError {
        message: String,
        reset_time: Option<u64>,
    },

    /// Any other non-success response
    #[error("API error ({status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    HttpError(reqwest::Error),
}

impl From<reqwest::Error> for SDKError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_connect() || error.is_timeout() {
            SDKError::NetworkError(error.to_string())
        } else {
            SDKError::HttpError(error)
        }
    }
}

pub type Result<T> = std::result::Result<T, SDKError>;
