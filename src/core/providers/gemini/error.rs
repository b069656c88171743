//! Gemini error classification

use super::PROVIDER;
use super::models::{ApiErrorDetail, ErrorEnvelope};
use crate::core::providers::ProviderError;

const CREDENTIAL_MARKERS: [&str; 3] = ["API_KEY_INVALID", "INVALID_API_KEY", "API key not valid"];

/// Maps Gemini failures onto [`ProviderError`]
pub struct GeminiErrorMapper;

impl GeminiErrorMapper {
    /// Classify a non-success HTTP response
    pub fn from_http_status(status: u16, body: &str) -> ProviderError {
        let detail = serde_json::from_str::<ErrorEnvelope>(body)
            .map(|envelope| envelope.error)
            .unwrap_or_else(|_| ApiErrorDetail {
                code: Some(status),
                message: body.to_string(),
                ..ApiErrorDetail::default()
            });

        Self::classify(status, &detail, body)
    }

    fn classify(status: u16, detail: &ApiErrorDetail, raw: &str) -> ProviderError {
        let message = if detail.message.is_empty() {
            format!("HTTP {}", status)
        } else {
            detail.message.clone()
        };

        if status == 429
            || detail.status == "RESOURCE_EXHAUSTED"
            || raw.to_ascii_lowercase().contains("quota")
        {
            return ProviderError::quota_exceeded(PROVIDER, message);
        }

        if matches!(status, 401 | 403)
            || matches!(detail.status.as_str(), "UNAUTHENTICATED" | "PERMISSION_DENIED")
            || CREDENTIAL_MARKERS.iter().any(|marker| raw.contains(marker))
        {
            return ProviderError::invalid_credentials(PROVIDER, message);
        }

        ProviderError::api(PROVIDER, status, message)
    }

    /// Classify a transport failure
    pub fn from_reqwest(err: reqwest::Error) -> ProviderError {
        if err.is_timeout() {
            ProviderError::timeout(PROVIDER, err.to_string())
        } else {
            ProviderError::network(PROVIDER, err.to_string())
        }
    }
}
