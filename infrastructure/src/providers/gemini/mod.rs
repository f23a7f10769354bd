//! Gemini provider
//!
//! Implements the `LlmGateway`/`LlmSession` ports against the Gemini REST
//! `generateContent` endpoint.

mod adapter;
mod types;

pub use adapter::{GeminiGateway, GeminiSession};
