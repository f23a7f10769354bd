//! Conversation turns and the capped history

pub mod entities;

pub use entities::{ConversationHistory, DEFAULT_MAX_HISTORY, Role, Turn};
