//! Main gateway configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Main gateway configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GatewayConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Upstream model provider
    #[serde(default)]
    pub gemini: GeminiConfig,
    /// Rate limiting configuration
    #[serde(default)]
    pub rate_limit: RateLimitConfig,
    /// Prompt assembly
    #[serde(default)]
    pub chat: ChatConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl GatewayConfig {
    /// Apply overrides from a variable lookup (the process environment in production)
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), String>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup("GEMINI_API_KEY") {
            self.gemini.api_key = key;
        }
        if let Some(model) = lookup("GEMINI_MODEL") {
            self.gemini.model = model;
        }
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| format!("PORT must be a number, got '{}'", port))?;
        }
        if let Some(max) = lookup("RATE_LIMIT_MAX_REQUESTS") {
            self.rate_limit.max_requests = max
                .parse()
                .map_err(|_| format!("RATE_LIMIT_MAX_REQUESTS must be a number, got '{}'", max))?;
        }
        if let Some(window) = lookup("RATE_LIMIT_WINDOW_MS") {
            self.rate_limit.window_ms = window
                .parse()
                .map_err(|_| format!("RATE_LIMIT_WINDOW_MS must be a number, got '{}'", window))?;
        }
        if let Some(url) = lookup("REDIS_URL") {
            self.rate_limit.redis_url = Some(url);
            self.rate_limit.store = RateLimitStoreKind::Redis;
        }
        Ok(())
    }
}
