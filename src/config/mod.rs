//! Configuration management for the gateway
//!
//! Configuration comes from an optional YAML file, then environment overrides
//! (`GEMINI_API_KEY`, `PORT`, ...), then validation.

pub mod models;

pub use models::*;

use crate::utils::error::{GatewayError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the gateway
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Gateway configuration
    pub gateway: GatewayConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path).await?;
        let gateway: GatewayConfig = serde_yaml::from_str(&content)?;

        let config = Self { gateway };
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load the file if it exists, fall back to defaults, then apply the environment
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if tokio::fs::try_exists(path).await.unwrap_or(false) {
            Self::from_file(path).await?
        } else {
            info!("No configuration file at {:?}, using defaults", path);
            Self::default()
        };

        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply process environment overrides
    pub fn apply_env(&mut self) -> Result<()> {
        self.gateway
            .apply_overrides(|key| std::env::var(key).ok())
            .map_err(GatewayError::Config)
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.gateway.server
    }

    /// Get upstream provider configuration
    pub fn gemini(&self) -> &GeminiConfig {
        &self.gateway.gemini
    }

    /// Get rate limit configuration
    pub fn rate_limit(&self) -> &RateLimitConfig {
        &self.gateway.rate_limit
    }

    /// Get chat pipeline configuration
    pub fn chat(&self) -> &ChatConfig {
        &self.gateway.chat
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.gateway.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.gateway
            .server
            .validate()
            .map_err(|e| GatewayError::Config(format!("Server config error: {}", e)))?;

        self.gateway
            .gemini
            .validate()
            .map_err(|e| GatewayError::Config(format!("Gemini config error: {}", e)))?;

        self.gateway
            .rate_limit
            .validate()
            .map_err(|e| GatewayError::Config(format!("Rate limit config error: {}", e)))?;

        if self.gateway.chat.history_limit == 0 {
            return Err(GatewayError::Config(
                "Chat config error: history_limit cannot be 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(&self.gateway)?)
    }
}
