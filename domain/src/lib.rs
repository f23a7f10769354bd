//! Domain layer for conversa
//!
//! This crate contains the core entities and pure logic of the chat
//! pipeline: conversation turns, the FIFO-capped history, prompt/context
//! assembly, and document kind dispatch. It has no dependencies on
//! infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Turn
//!
//! One recorded message (user or assistant) with its timestamp and the
//! context that was attached to it (scraped page text, extracted document
//! text), if any.
//!
//! ## Context
//!
//! Text assembled from recent history plus any scraped or extracted
//! document text, prefixed to the user's raw message before it is sent to
//! the model.

pub mod context;
pub mod conversation;
pub mod core;
pub mod document;
pub mod util;

// Re-export commonly used types
pub use context::{
    AdditionalContext, ADDITIONAL_CONTEXT_HEADER, DEFAULT_CONTEXT_TURNS, HISTORY_HEADER,
    compose_context, compose_prompt, history_block, is_url,
};
pub use conversation::{ConversationHistory, DEFAULT_MAX_HISTORY, Role, Turn};
pub use crate::core::model::Model;
pub use document::{DocumentKind, UploadedFile};
pub use util::truncate_chars;
