//! Chat session

use super::errors::{Result, SDKError};
use super::types::{GREETING, Sender, TranscriptEntry, fallback_text};
use crate::core::chat::{ChatReply, ChatRequest, ConversationMessage};
use chrono::Utc;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

/// Messages sent as context with each request
pub const HISTORY_WINDOW: usize = 10;

const GREETING_ID: u64 = 1;

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default, rename = "resetTime")]
    reset_time: Option<u64>,
}

/// One visitor's conversation with the proxy
///
/// The transcript always starts with [`GREETING`]. The greeting is shown but
/// never sent as context.
#[derive(Debug)]
pub struct ChatSession {
    http_client: reqwest::Client,
    api_base: String,
    messages: Vec<TranscriptEntry>,
    next_id: u64,
    last_error: Option<String>,
}

impl ChatSession {
    /// Create a session against an API base such as `http://localhost:3001/api`
    pub fn new(api_base: impl Into<String>) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| SDKError::ConfigError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self::with_client(http_client, api_base))
    }

    pub fn with_client(http_client: reqwest::Client, api_base: impl Into<String>) -> Self {
        let api_base = api_base.into().trim_end_matches('/').to_string();
        let mut session = Self {
            http_client,
            api_base,
            messages: Vec::new(),
            next_id: GREETING_ID,
            last_error: None,
        };
        session.reset_transcript();
        session
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Everything the chat window shows, greeting first
    pub fn messages(&self) -> &[TranscriptEntry] {
        &self.messages
    }

    /// Text of the most recent failure, cleared by the next success
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Drop the conversation and start over from the greeting
    pub fn clear(&mut self) {
        self.next_id = GREETING_ID;
        self.last_error = None;
        self.reset_transcript();
    }

    /// Context for the next request: the last [`HISTORY_WINDOW`] messages after the greeting
    pub fn conversation_history(&self) -> Vec<ConversationMessage> {
        let entries: Vec<&TranscriptEntry> = self
            .messages
            .iter()
            .filter(|entry| entry.id != GREETING_ID)
            .collect();
        let skip = entries.len().saturating_sub(HISTORY_WINDOW);

        entries
            .into_iter()
            .skip(skip)
            .map(|entry| match entry.sender {
                Sender::User => ConversationMessage::user(entry.text.clone()),
                Sender::Bot => ConversationMessage::assistant(entry.text.clone()),
            })
            .collect()
    }

    /// Send what the visitor typed
    ///
    /// Blank input is ignored and returns `None`. Otherwise the user's message
    /// and then the reply (or a fallback bubble flagged `is_error`) are
    /// appended, and the appended bot entry is returned.
    pub async fn send(&mut self, input: &str) -> Option<&TranscriptEntry> {
        let message = input.trim();
        if message.is_empty() {
            return None;
        }

        let history = self.conversation_history();
        self.push(message.to_string(), Sender::User, false);

        match self.request(message, history).await {
            Ok(reply) => {
                self.last_error = None;
                self.push(reply.message, Sender::Bot, false);
            }
            Err(e) => {
                warn!("Chat request failed: {}", e);
                self.last_error = Some(e.to_string());
                self.push(fallback_text(&e).to_string(), Sender::Bot, true);
            }
        }

        self.messages.last()
    }

    /// Make one `POST {api_base}/chat` call without touching the transcript
    ///
    /// Only the proxy's limiter response (a `resetTime`, or a message
    /// mentioning "Rate limit") becomes [`SDKError::RateLimitError`].
    pub async fn request(
        &self,
        message: &str,
        history: Vec<ConversationMessage>,
    ) -> Result<ChatReply> {
        let url = format!("{}/chat", self.api_base);
        let body = ChatRequest::new(message).with_history(history);
        debug!("Sending chat request to {}", url);

        let response = self.http_client.post(&url).json(&body).send().await?;
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let parsed: Option<ErrorBody> = serde_json::from_str(&text).ok();
            let reset_time = parsed.as_ref().and_then(|b| b.reset_time);
            let message = parsed
                .and_then(|b| b.message)
                .unwrap_or_else(|| format!("HTTP error! status: {}", status.as_u16()));

            // A quota 429 from upstream is not the proxy's own limiter.
            return Err(if reset_time.is_some() || message.contains("Rate limit") {
                SDKError::RateLimitError {
                    message,
                    reset_time,
                }
            } else {
                SDKError::ApiError {
                    status: status.as_u16(),
                    message,
                }
            });
        }

        Ok(response.json::<ChatReply>().await?)
    }

    fn reset_transcript(&mut self) {
        self.messages.clear();
        self.push(GREETING.to_string(), Sender::Bot, false);
    }

    fn push(&mut self, text: String, sender: Sender, is_error: bool) {
        self.messages.push(TranscriptEntry {
            id: self.next_id,
            text,
            sender,
            timestamp: Utc::now(),
            is_error,
        });
        self.next_id += 1;
    }
}
