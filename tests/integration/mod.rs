//! Integration tests for bento-gateway
//!
//! These exercise the public surface of the crate: the actix app as a whole,
//! the upstream client over HTTP, and the unlock flow from outside.

pub mod chat_api_tests;
pub mod gemini_client_tests;
pub mod sdk_session_tests;
pub mod unlock_tests;
