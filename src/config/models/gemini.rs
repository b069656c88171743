//! Upstream model provider configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Gemini (Google AI Studio) configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// API key; usually supplied through `GEMINI_API_KEY`
    #[serde(default, skip_serializing)]
    pub api_key: String,
    /// API base URL
    #[serde(default = "default_gemini_base_url")]
    pub base_url: String,
    /// Model used for chat
    #[serde(default = "default_model")]
    pub model: String,
    /// Models advertised by `/api/models`
    #[serde(default = "default_available_models")]
    pub available_models: Vec<String>,
    /// Upper bound on one generation call, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_gemini_base_url(),
            model: default_model(),
            available_models: default_available_models(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

// Keep the key out of logs.
impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &if self.api_key.is_empty() { "<unset>" } else { "***" })
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("available_models", &self.available_models)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl GeminiConfig {
    /// Validate provider configuration
    pub fn validate(&self) -> Result<(), String> {
        let url = url::Url::parse(&self.base_url)
            .map_err(|e| format!("Invalid Gemini base URL '{}': {}", self.base_url, e))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(format!(
                "Gemini base URL must use http or https, got: {}",
                url.scheme()
            ));
        }

        if self.model.trim().is_empty() {
            return Err("Model cannot be empty".to_string());
        }

        if !self.available_models.contains(&self.model) {
            return Err(format!(
                "Model '{}' is not listed in available_models",
                self.model
            ));
        }

        if self.timeout_secs == 0 {
            return Err("Timeout cannot be 0".to_string());
        }

        Ok(())
    }

    /// Whether an API key is configured
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}
