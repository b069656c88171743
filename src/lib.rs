//! # bento-gateway
//!
//! Backend for the bento-grid portfolio site.
//!
//! ## Features
//!
//! - **Chat proxy**: `POST /api/chat` forwards a visitor's message, with a bounded
//!   slice of the conversation and a fixed persona preamble, to Gemini
//! - **Sliding-window rate limiting**: per-client admission control over a
//!   pluggable store (in-memory or Redis)
//! - **Stable error taxonomy**: provider failures are classified into a small set
//!   of HTTP responses, never leaking raw upstream detail
//! - **Gated unlock state machine**: the keystroke / verification / riddle
//!   gauntlet guarding the hidden portfolio tile
//! - **Chat SDK**: the chat widget's session logic (history window, fallback texts)
//!
//! ## Gateway Mode
//!
//! ```rust,no_run
//! use bento_gateway::{Config, Gateway};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/gateway.yaml").await?;
//!     let gateway = Gateway::new(config).await?;
//!     gateway.run().await?;
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod sdk;
pub mod server;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use utils::error::{GatewayError, Result};

pub use core::chat::{ChatReply, ChatRequest, ChatService, ConversationMessage, MessageRole};
pub use core::providers::{ProviderError, TextGenerator};
pub use core::rate_limiter::{RateLimitDecision, RateLimitStore, SlidingWindowLimiter};
pub use core::unlock::{Feedback, GateView, SecretGate, TransitionError, UnlockEvent};

use tracing::info;

/// The chat proxy server bound to its configuration
pub struct Gateway {
    server: server::HttpServer,
}

impl Gateway {
    /// Create a new gateway instance
    pub async fn new(config: Config) -> Result<Self> {
        info!("Creating new gateway instance");

        let server = server::HttpServer::new(&config).await?;

        Ok(Self { server })
    }

    /// Run the gateway server until it is stopped
    pub async fn run(self) -> Result<()> {
        info!("Starting bento gateway");
        self.server.start().await
    }
}

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
