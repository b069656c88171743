//! Gemini HTTP client

use super::PROVIDER;
use super::error::GeminiErrorMapper;
use super::models::{GenerateContentRequest, GenerateContentResponse};
use crate::config::models::gemini::GeminiConfig;
use crate::core::providers::{ProviderError, TextGenerator};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Client for `models/{model}:generateContent`
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http_client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GeminiClient {
    /// Create a client from provider configuration
    pub fn new(config: &GeminiConfig) -> Result<Self, ProviderError> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                ProviderError::configuration(PROVIDER, format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        if self.api_key.is_empty() {
            return Err(ProviderError::invalid_credentials(
                PROVIDER,
                "GEMINI_API_KEY is not set",
            ));
        }

        debug!("Gemini request: model={}, prompt_len={}", self.model, prompt.len());

        let response = self
            .http_client
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await
            .map_err(GeminiErrorMapper::from_reqwest)?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(GeminiErrorMapper::from_reqwest)?;

        if !status.is_success() {
            debug!("Gemini response status: {}", status);
            return Err(GeminiErrorMapper::from_http_status(status.as_u16(), &body));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body).map_err(|e| {
            ProviderError::response_parsing(PROVIDER, format!("Invalid response JSON: {}", e))
        })?;

        parsed.text().ok_or_else(|| {
            let reason = parsed
                .prompt_feedback
                .as_ref()
                .and_then(|feedback| feedback.block_reason.clone())
                .or_else(|| {
                    parsed
                        .candidates
                        .first()
                        .and_then(|candidate| candidate.finish_reason.clone())
                })
                .unwrap_or_else(|| "no candidates".to_string());
            ProviderError::response_parsing(PROVIDER, format!("Response has no text ({})", reason))
        })
    }
}
