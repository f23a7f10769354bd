//! LLM Gateway port
//!
//! Defines the interface for communicating with the generative-model
//! provider.

use async_trait::async_trait;
use conversa_domain::Model;
use thiserror::Error;

/// Errors that can occur during gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("No API credential configured")]
    MissingCredential,

    #[error("Request failed: {0}")]
    Request(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("No response from model")]
    EmptyResponse,
}

/// Gateway for model communication
///
/// This port defines how the application layer reaches the model provider.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Create a new session bound to the specified model
    async fn create_session(&self, model: &Model) -> Result<Box<dyn LlmSession>, GatewayError>;
}

/// An active model session
///
/// The session handle is owned by the chat session for its whole lifetime
/// and dropped on reset. A `send` is a single attempt: no retry, no
/// backoff, and no timeout on the model's side of the round trip.
#[async_trait]
pub trait LlmSession: Send + Sync {
    /// Get the model this session is bound to
    fn model(&self) -> &Model;

    /// Send an assembled prompt and wait for the full reply text
    async fn send(&self, prompt: &str) -> Result<String, GatewayError>;
}
