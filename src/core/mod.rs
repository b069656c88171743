//! Core functionality for the gateway
//!
//! Transport-agnostic logic: the chat pipeline, its upstream providers, rate
//! limiting, and the unlock state machine.

pub mod chat;
pub mod providers;
pub mod rate_limiter;
pub mod unlock;
