//! Chat widget SDK
//!
//! Client side of `POST /api/chat`: keeps the visible transcript, sends a
//! bounded slice of it as context, and turns failures into friendly bot
//! messages instead of surfacing raw errors.

pub mod errors;
pub mod session;
pub mod types;

pub use errors::{Result, SDKError};
pub use session::{ChatSession, HISTORY_WINDOW};
pub use types::{GREETING, Sender, TranscriptEntry, fallback_text};
