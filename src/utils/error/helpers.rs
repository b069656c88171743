//! Helper constructors and accessors for GatewayError

use super::types::GatewayError;
use actix_web::http::StatusCode;

impl GatewayError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn rate_limited(reset_time: u64) -> Self {
        Self::RateLimited { reset_time }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn server(message: impl Into<String>) -> Self {
        Self::Server(message.into())
    }

    /// Stable machine-readable kind, used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "ValidationError",
            Self::RateLimited { .. } => "RateLimited",
            Self::QuotaExceeded(_) => "QuotaExceeded",
            Self::InvalidCredentials(_) => "InvalidCredentials",
            Self::Upstream(_) => "UpstreamFailure",
            Self::Timeout(_) => "Timeout",
            Self::Config(_) | Self::Yaml(_) => "ConfigError",
            Self::Io(_) => "IoError",
            #[cfg(feature = "redis")]
            Self::Redis(_) => "StoreError",
            Self::Server(_) => "ServerError",
        }
    }

    /// HTTP status this error is reported with
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::RateLimited { .. } | Self::QuotaExceeded(_) => StatusCode::TOO_MANY_REQUESTS,
            Self::InvalidCredentials(_) => StatusCode::UNAUTHORIZED,
            Self::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
