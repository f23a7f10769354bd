//! Configuration file handling

mod file_config;
mod loader;

pub use file_config::{FileChatConfig, FileConfig, FileLogConfig, FileModelConfig};
pub use loader::ConfigLoader;
