//! HTTP response handling for errors

use super::types::GatewayError;
use actix_web::http::header::RETRY_AFTER;
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;

/// Error body returned to clients
///
/// `error` is a short title and `message` a human-readable hint. Only the
/// rate limiter fills `reset_time`.
#[derive(Debug, Clone, Serialize, serde::Deserialize, PartialEq)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
    #[serde(rename = "resetTime", skip_serializing_if = "Option::is_none", default)]
    pub reset_time: Option<u64>,
}

impl ErrorBody {
    fn new(error: &str, message: impl Into<String>) -> Self {
        Self {
            error: error.to_string(),
            message: message.into(),
            reset_time: None,
        }
    }
}

impl GatewayError {
    /// Client-facing body; never carries raw upstream detail
    pub fn body(&self) -> ErrorBody {
        match self {
            GatewayError::Validation(message) => ErrorBody::new("Bad request", message.clone()),
            GatewayError::RateLimited { reset_time } => ErrorBody {
                reset_time: Some(*reset_time),
                ..ErrorBody::new(
                    "Too many requests",
                    "Rate limit exceeded. Please try again later.",
                )
            },
            GatewayError::QuotaExceeded(_) => ErrorBody::new(
                "API quota exceeded",
                "Please try again later or check your API limits",
            ),
            GatewayError::InvalidCredentials(_) => ErrorBody::new(
                "Invalid API key",
                "Please check your Gemini API key configuration",
            ),
            GatewayError::Timeout(_) => ErrorBody::new(
                "Upstream timeout",
                "The model took too long to respond. Please try again.",
            ),
            GatewayError::Upstream(_) => {
                ErrorBody::new("Internal server error", "Failed to generate response")
            }
            _ => ErrorBody::new("Internal server error", "An internal error occurred"),
        }
    }
}

impl ResponseError for GatewayError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status());
        if let GatewayError::RateLimited { reset_time } = self {
            builder.insert_header((RETRY_AFTER, reset_time.to_string()));
        }
        builder.json(self.body())
    }
}
