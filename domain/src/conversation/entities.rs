//! Conversation domain entities

use serde::{Deserialize, Serialize};

/// Default recency cap: the history keeps at most `2 * DEFAULT_MAX_HISTORY`
/// turns, and the context window covers the last `DEFAULT_MAX_HISTORY` turns.
pub const DEFAULT_MAX_HISTORY: usize = 10;

/// Role of a message in a conversation
///
/// Displays as `User` / `Assistant`; these exact strings appear in the
/// rendered context lines sent to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    User,
    Assistant,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => write!(f, "User"),
            Role::Assistant => write!(f, "Assistant"),
        }
    }
}

/// A recorded message in a conversation (Entity)
///
/// Immutable once appended to the history. `attached_context` carries any
/// scraped page text or extracted document text that accompanied the
/// message; the timestamp is a wall-clock `%H:%M:%S` string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
    pub attached_context: Option<String>,
    pub timestamp: String,
}

impl Turn {
    fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            attached_context: None,
            timestamp: chrono::Local::now().format("%H:%M:%S").to_string(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    /// Attach context (scraped page text, extracted document text) to this turn.
    pub fn with_attached_context(mut self, context: impl Into<String>) -> Self {
        self.attached_context = Some(context.into());
        self
    }
}

/// Append-only, length-capped conversation history (Entity)
///
/// Insertion order is significant: it drives both transcript replay and the
/// recency-windowed context sent to the model. The length never exceeds
/// `2 * max_history`; once an append would cross the cap, the oldest turns
/// are evicted first.
#[derive(Debug, Clone)]
pub struct ConversationHistory {
    turns: Vec<Turn>,
    max_history: usize,
}

impl ConversationHistory {
    pub fn new(max_history: usize) -> Self {
        Self {
            turns: Vec::new(),
            max_history,
        }
    }

    pub fn max_history(&self) -> usize {
        self.max_history
    }

    /// Append a turn, evicting the oldest turns while the cap is exceeded.
    pub fn push(&mut self, turn: Turn) {
        self.turns.push(turn);
        let cap = self.max_history * 2;
        if self.turns.len() > cap {
            self.turns.drain(..self.turns.len() - cap);
        }
    }

    /// The last `n` turns, oldest first. A literal slice of stored turns,
    /// not exchange pairs.
    pub fn recent(&self, n: usize) -> &[Turn] {
        let start = self.turns.len().saturating_sub(n);
        &self.turns[start..]
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Drop every recorded turn (the "clear conversation" action).
    pub fn clear(&mut self) {
        self.turns.clear();
    }
}

impl Default for ConversationHistory {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_HISTORY)
    }
}
