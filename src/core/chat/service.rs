//! Chat turn handling

use super::persona::persona_preamble;
use super::prompt::PromptBuilder;
use super::types::{ChatReply, ChatRequest};
use crate::config::Config;
use crate::core::providers::{GeminiClient, ProviderError, TextGenerator};
use crate::utils::error::{GatewayError, Result};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, warn};

/// Validates a turn, builds the prompt and asks the model
#[derive(Clone)]
pub struct ChatService {
    generator: Arc<dyn TextGenerator>,
    prompt: PromptBuilder,
    timeout: Duration,
}

impl ChatService {
    pub fn new(generator: Arc<dyn TextGenerator>, prompt: PromptBuilder, timeout: Duration) -> Self {
        Self {
            generator,
            prompt,
            timeout,
        }
    }

    /// Build the production service backed by Gemini
    pub fn from_config(config: &Config) -> Result<Self> {
        let gemini = config.gemini();
        if !gemini.has_api_key() {
            // Still start: health and models stay useful, chat answers 401.
            warn!("GEMINI_API_KEY is not set, chat requests will fail with 401");
        }

        let client = GeminiClient::new(gemini)?;
        Ok(Self::new(
            Arc::new(client),
            PromptBuilder::new(persona_preamble(), config.chat().history_limit),
            Duration::from_secs(gemini.timeout_secs),
        ))
    }

    /// Identifier of the model answering requests
    pub fn model(&self) -> &str {
        self.generator.model()
    }

    /// Return the message to answer, or a validation error when absent or empty
    ///
    /// Any non-empty string, whitespace included, is forwarded unchanged.
    pub fn validate(request: &ChatRequest) -> Result<&str> {
        match request.message.as_deref() {
            Some(message) if !message.is_empty() => Ok(message),
            _ => Err(GatewayError::validation("Message is required")),
        }
    }

    /// Answer one chat turn
    pub async fn reply(&self, request: &ChatRequest) -> Result<ChatReply> {
        let message = Self::validate(request)?;
        let prompt = self.prompt.build(&request.conversation_history, message);
        debug!(
            "Generating reply: history={}, prompt_len={}",
            request.conversation_history.len(),
            prompt.len()
        );

        let outcome = tokio::time::timeout(self.timeout, self.generator.generate(&prompt))
            .await
            .unwrap_or_else(|_| {
                Err(ProviderError::timeout(
                    "gemini",
                    format!("no response within {}s", self.timeout.as_secs()),
                ))
            });

        match outcome {
            Ok(text) => Ok(ChatReply::new(text, self.model())),
            Err(provider_error) => {
                let err = GatewayError::from(provider_error);
                error!("Gemini API error ({}): {}", err.kind(), err);
                Err(err)
            }
        }
    }
}
