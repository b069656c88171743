//! Transcript types

use super::errors::SDKError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const GREETING: &str = "Hi! I'm Hans's assistant. Need quick info about his background, skills, projects, or experience? Just ask - I'll keep it short and clear.";

const RATE_LIMITED_TEXT: &str =
    "I'm receiving too many requests right now. Please wait a moment and try again.";
const UNREACHABLE_TEXT: &str = "I'm having trouble connecting to my brain right now. Please check if the backend server is running.";
const GENERIC_TEXT: &str = "Sorry, I encountered an error. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// One bubble in the chat window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub id: u64,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
    /// Set on bot bubbles that stand in for a failed request
    #[serde(default)]
    pub is_error: bool,
}

/// What the widget shows in place of a failed reply
pub fn fallback_text(error: &SDKError) -> &'static str {
    match error {
        SDKError::RateLimitError { .. } => RATE_LIMITED_TEXT,
        SDKError::ApiError { message, .. } if message.contains("Rate limit") => RATE_LIMITED_TEXT,
        SDKError::NetworkError(_) => UNREACHABLE_TEXT,
        _ => GENERIC_TEXT,
    }
}
