//! Chat session state.
//!
//! One `ChatSession` lives for the duration of one interactive session. It
//! owns the conversation history, the staged attachments, and the model
//! session handle; `reset` returns all three to their initial state.

use crate::ports::llm_gateway::LlmSession;
use conversa_domain::{ConversationHistory, UploadedFile};

/// Session-scoped mutable state for one conversation.
pub struct ChatSession {
    history: ConversationHistory,
    pending_attachments: Vec<UploadedFile>,
    llm: Box<dyn LlmSession>,
}

impl ChatSession {
    pub fn new(llm: Box<dyn LlmSession>, max_history: usize) -> Self {
        Self {
            history: ConversationHistory::new(max_history),
            pending_attachments: Vec::new(),
            llm,
        }
    }

    pub fn history(&self) -> &ConversationHistory {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut ConversationHistory {
        &mut self.history
    }

    pub fn llm(&self) -> &dyn LlmSession {
        self.llm.as_ref()
    }

    /// Stage a file for the next turn. Order is preserved.
    pub fn attach(&mut self, file: UploadedFile) {
        self.pending_attachments.push(file);
    }

    pub fn pending_attachments(&self) -> &[UploadedFile] {
        &self.pending_attachments
    }

    /// Take every staged attachment, leaving the stage empty.
    ///
    /// Called once per turn; attachments are consumed whatever the
    /// extraction outcome.
    pub fn take_attachments(&mut self) -> Vec<UploadedFile> {
        std::mem::take(&mut self.pending_attachments)
    }

    /// The "clear conversation" action: empty history and attachments.
    pub fn reset(&mut self) {
        self.history.clear();
        self.pending_attachments.clear();
    }
}
