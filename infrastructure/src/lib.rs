//! Infrastructure layer for conversa
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer, plus configuration file loading.

pub mod config;
pub mod extract;
pub mod logging;
pub mod providers;
pub mod web;

// Re-export commonly used types
pub use config::{ConfigLoader, FileChatConfig, FileConfig, FileLogConfig, FileModelConfig};
pub use extract::FileTextExtractor;
pub use logging::JsonlConversationLogger;
pub use providers::GeminiGateway;
pub use web::PageScraper;
