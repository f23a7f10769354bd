//! Model provider adapters

pub mod gemini;

pub use gemini::GeminiGateway;
