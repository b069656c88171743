//! Common test utilities for bento-gateway

pub mod fixtures;
pub mod unlock;

pub use fixtures::{ScriptedGenerator, app_state, chat_request};
pub use unlock::{answer_riddle, verified_gate};
