//! Chat pipeline configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Chat prompt assembly settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Most recent history entries forwarded to the model
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            history_limit: default_history_limit(),
        }
    }
}
