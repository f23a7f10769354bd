//! Presentation layer for conversa
//!
//! This crate contains the CLI definition, the interactive chat REPL,
//! console rendering, and credential prompting.

pub mod chat;
pub mod cli;
pub mod credentials;
pub mod output;

// Re-export commonly used types
pub use chat::ChatRepl;
pub use cli::commands::Cli;
pub use credentials::{API_KEY_ENV, resolve_api_key};
pub use output::console::ConsoleRenderer;
