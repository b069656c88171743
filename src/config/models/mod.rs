//! Configuration data models
//!
//! This module defines all configuration structures used throughout the gateway.

pub mod chat;
pub mod gateway;
pub mod gemini;
pub mod logging;
pub mod rate_limit;
pub mod server;

pub use chat::*;
pub use gateway::*;
pub use gemini::*;
pub use logging::*;
pub use rate_limit::*;
pub use server::*;

/// Default listen address
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    3001
}

/// Default maximum body size in bytes
pub fn default_max_body_size() -> usize {
    256 * 1024
}

/// Default upstream timeout in seconds
pub fn default_timeout_secs() -> u64 {
    30
}

/// Default model served by the chat endpoint
pub fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}

pub fn default_available_models() -> Vec<String> {
    vec![
        "gemini-1.5-flash".to_string(),
        "gemini-1.5-pro".to_string(),
        "gemini-pro".to_string(),
    ]
}

pub fn default_gemini_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

/// Requests admitted per client inside one window
pub fn default_max_requests() -> u32 {
    15
}

/// Sliding window length in milliseconds
pub fn default_window_ms() -> u64 {
    60_000
}

/// History entries forwarded to the model
pub fn default_history_limit() -> usize {
    8
}

pub fn default_true() -> bool {
    true
}
