//! Chat pipeline: validate a turn, assemble the prompt, call the model
//!
//! Rate limiting happens before this module, in the HTTP layer.

pub mod persona;
mod prompt;
mod service;
mod types;


pub use persona::{HIDDEN_VERIFICATION_CODE, persona_preamble};
pub use prompt::PromptBuilder;
pub use service::ChatService;
pub use types::{ChatReply, ChatRequest, ConversationMessage, MessageRole};
