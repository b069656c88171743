//! Upstream text generation providers
//!
//! The chat pipeline only needs "prompt in, text out", so providers sit behind
//! [`TextGenerator`]. Gemini is the production implementation; tests script
//! their own.

pub mod error;
pub mod gemini;

pub use error::ProviderError;
pub use gemini::GeminiClient;

use async_trait::async_trait;

/// A model that completes a single prompt
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Model identifier reported back to clients
    fn model(&self) -> &str;

    /// Generate a completion for `prompt`
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;
}
