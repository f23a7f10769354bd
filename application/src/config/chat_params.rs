//! Chat loop parameters.

use conversa_domain::DEFAULT_MAX_HISTORY;
use serde::{Deserialize, Serialize};

/// Parameters controlling the conversation window.
///
/// `max_history` drives both the recency window of the context block (the
/// last `max_history` turns) and the history cap (`2 * max_history` stored
/// turns).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ChatParams {
    pub max_history: usize,
}

impl Default for ChatParams {
    fn default() -> Self {
        Self {
            max_history: DEFAULT_MAX_HISTORY,
        }
    }
}

impl ChatParams {
    pub fn with_max_history(mut self, max: usize) -> Self {
        self.max_history = max;
        self
    }
}
