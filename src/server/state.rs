//! Application state shared by all workers

use crate::config::Config;
use crate::core::chat::ChatService;
use crate::core::rate_limiter::{SlidingWindowLimiter, build_store};
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::info;

/// Shared, cheaply clonable application state
#[derive(Clone)]
pub struct AppState {
    /// Gateway configuration
    pub config: Arc<Config>,
    /// Per-client admission control for the chat endpoint
    pub limiter: Arc<SlidingWindowLimiter>,
    /// Chat pipeline
    pub chat: Arc<ChatService>,
}

impl AppState {
    pub fn new(config: Config, limiter: SlidingWindowLimiter, chat: ChatService) -> Self {
        Self {
            config: Arc::new(config),
            limiter: Arc::new(limiter),
            chat: Arc::new(chat),
        }
    }

    /// Wire up the production store and the Gemini-backed chat service
    pub async fn from_config(config: &Config) -> Result<Self> {
        let store = build_store(config.rate_limit()).await?;
        let limiter = SlidingWindowLimiter::new(config.rate_limit(), store);
        info!(
            "Rate limiting: {} ({} requests per {}ms, store: {})",
            if limiter.is_enabled() { "enabled" } else { "disabled" },
            limiter.limit(),
            config.rate_limit().window_ms,
            limiter.store_name()
        );

        let chat = ChatService::from_config(config)?;
        Ok(Self::new(config.clone(), limiter, chat))
    }
}
