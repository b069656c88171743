//! Google Gemini provider (Generative Language API, `generateContent`)

pub mod client;
pub mod error;
pub mod models;

pub use client::GeminiClient;
pub use error::GeminiErrorMapper;

pub(crate) const PROVIDER: &str = "gemini";
