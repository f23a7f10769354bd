//! Application layer for conversa
//!
//! This crate contains the chat-turn use case, port definitions, and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod session;
pub mod use_cases;

// Re-export commonly used types
pub use config::{ChatParams, GenerationParams};
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    document_extractor::{DocumentExtractor, ExtractError},
    llm_gateway::{GatewayError, LlmGateway, LlmSession},
    page_fetcher::{FetchError, PageFetcher},
};
pub use session::ChatSession;
pub use use_cases::chat_turn::{ChatTurnOutcome, ChatTurnUseCase};
