//! Prompt assembly

use super::types::ConversationMessage;

/// Builds the single prompt string sent upstream
///
/// Layout: preamble, blank line, the last `history_limit` turns as
/// `role: content` lines, then `User: {message}` and the assistant cue.
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    preamble: String,
    history_limit: usize,
}

const USER_LABEL: &str = "User";
const ASSISTANT_CUE: &str = "Hans";

impl PromptBuilder {
    pub fn new(preamble: impl Into<String>, history_limit: usize) -> Self {
        Self {
            preamble: preamble.into(),
            history_limit,
        }
    }

    /// The most recent `history_limit` entries, oldest first
    pub fn recent<'a>(&self, history: &'a [ConversationMessage]) -> &'a [ConversationMessage] {
        let start = history.len().saturating_sub(self.history_limit);
        &history[start..]
    }

    pub fn build(&self, history: &[ConversationMessage], message: &str) -> String {
        let mut transcript = self
            .recent(history)
            .iter()
            .map(|entry| format!("{}: {}", entry.role, entry.content))
            .collect::<Vec<_>>()
            .join("\n");
        if !transcript.is_empty() {
            transcript.push('\n');
        }

        format!(
            "{}\n\n{}{}: {}\n\n{}:",
            self.preamble, transcript, USER_LABEL, message, ASSISTANT_CUE
        )
    }
}
