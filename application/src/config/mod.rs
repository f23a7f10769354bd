//! Application configuration

mod chat_params;
mod generation_params;

pub use chat_params::ChatParams;
pub use generation_params::GenerationParams;
