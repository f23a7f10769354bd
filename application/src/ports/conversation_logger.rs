//! Port for structured conversation logging.
//!
//! Records transcript events (prompts sent, replies received) to a
//! machine-readable log. Separate from `tracing`: tracing carries
//! human-readable diagnostics, this port captures the conversation itself.

use serde_json::Value;

/// A structured conversation event.
pub struct ConversationEvent {
    /// Event type identifier (e.g., "user_message", "assistant_reply").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for recording conversation events.
///
/// `log` is synchronous and infallible on purpose: a transcript write must
/// never disturb the chat turn it is recording.
pub trait ConversationLogger: Send + Sync {
    fn log(&self, event: ConversationEvent);
}

/// No-op implementation for tests and when transcript logging is off.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}
