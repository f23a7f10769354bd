//! Prompt context assembly
//!
//! Builds the text block sent to the model: a recency window of prior
//! turns, then any scraped page text and extracted document text under an
//! `Additional Context:` marker, then the raw user message.

use crate::conversation::ConversationHistory;

/// Header line for the rendered history block.
pub const HISTORY_HEADER: &str = "Previous conversation:";

/// Marker line for scraped/extracted context appended after the history.
pub const ADDITIONAL_CONTEXT_HEADER: &str = "Additional Context:";

/// Number of raw turns included in the history block by default.
pub const DEFAULT_CONTEXT_TURNS: usize = 10;

/// URL-prefix test used to decide whether a message should be scraped.
///
/// A prefix test only, with no full URL validation.
pub fn is_url(input: &str) -> bool {
    input.starts_with("http://") || input.starts_with("https://") || input.starts_with("www.")
}

/// Render the recency window of `history` as a context block.
///
/// Returns the empty string for an empty history. Otherwise the block is the
/// header line followed by one `"{role}: {content}"` line per turn in
/// chronological order, covering the last `max_turns` stored turns (a
/// literal slice, so with alternating roles this is ~`max_turns / 2`
/// exchanges).
pub fn history_block(history: &ConversationHistory, max_turns: usize) -> String {
    if history.is_empty() {
        return String::new();
    }

    let mut block = String::from(HISTORY_HEADER);
    block.push('\n');
    for turn in history.recent(max_turns) {
        block.push_str(&format!("{}: {}\n", turn.role, turn.content));
    }
    block
}

/// Scraped and extracted text gathered for a single turn.
///
/// Sections keep their insertion order: page text first (when the raw
/// message was itself a URL), then each document's text in upload order.
#[derive(Debug, Clone, Default)]
pub struct AdditionalContext {
    sections: Vec<String>,
}

impl AdditionalContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add scraped page text.
    pub fn push_page(&mut self, text: impl Into<String>) {
        self.sections.push(text.into());
    }

    /// Add a document's extracted text, labeled with its filename.
    pub fn push_document(&mut self, filename: &str, text: impl Into<String>) {
        self.sections
            .push(format!("From file '{}':\n{}", filename, text.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// The gathered sections without the marker line. This is what gets
    /// stored on the user turn as its attached context.
    pub fn body(&self) -> String {
        self.sections.join("\n")
    }

    /// The full block: marker line plus sections.
    pub fn render(&self) -> String {
        if self.is_empty() {
            return String::new();
        }
        format!("{}\n{}", ADDITIONAL_CONTEXT_HEADER, self.body())
    }
}

/// Combine the history block and any additional context into one block.
pub fn compose_context(history_block: &str, additional: &AdditionalContext) -> String {
    match (history_block.is_empty(), additional.is_empty()) {
        (true, true) => String::new(),
        (false, true) => history_block.to_string(),
        (true, false) => additional.render(),
        (false, false) => format!("{}\n{}", history_block, additional.render()),
    }
}

/// Assemble the final prompt.
///
/// With a non-empty context the prompt is
/// `"{context}\nUser: {message}\nAssistant:"`; otherwise it is exactly the
/// bare message.
pub fn compose_prompt(context: &str, message: &str) -> String {
    if context.is_empty() {
        message.to_string()
    } else {
        format!("{}\nUser: {}\nAssistant:", context, message)
    }
}
