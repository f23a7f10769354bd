//! Chat turn use case.
//!
//! Processes one submitted message end to end: scrape (when the message is
//! a URL), extract staged documents, build the prompt from recent history
//! plus gathered context, call the model, and record both turns.
//!
//! Every external failure along the way (fetch, extraction, model call)
//! is caught here and degraded to inline text. A turn never fails; at worst
//! the assistant's reply is an error message, appended to history like any
//! other reply.

use crate::config::ChatParams;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::document_extractor::DocumentExtractor;
use crate::ports::page_fetcher::PageFetcher;
use crate::session::ChatSession;
use conversa_domain::{
    AdditionalContext, Turn, compose_context, compose_prompt, history_block, is_url,
    util::truncate_chars,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// What happened during one turn, for the presentation layer to narrate.
#[derive(Debug, Clone)]
pub struct ChatTurnOutcome {
    /// The assistant's reply (possibly an inline error message).
    pub reply: String,
    /// Whether the message was treated as a URL and scraped.
    pub scraped: bool,
    /// How many staged attachments were consumed this turn.
    pub attachments_processed: usize,
}

/// Use case for processing one chat turn.
///
/// One message is processed fully, from scrape through append, before the
/// next is accepted. There is no retry, no backoff, and no cancellation
/// once the model call is issued.
pub struct ChatTurnUseCase {
    fetcher: Arc<dyn PageFetcher>,
    extractor: Arc<dyn DocumentExtractor>,
    conversation_logger: Arc<dyn ConversationLogger>,
    params: ChatParams,
}

impl ChatTurnUseCase {
    pub fn new(
        fetcher: Arc<dyn PageFetcher>,
        extractor: Arc<dyn DocumentExtractor>,
        params: ChatParams,
    ) -> Self {
        Self {
            fetcher,
            extractor,
            conversation_logger: Arc::new(NoConversationLogger),
            params,
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Process one submitted message against the session.
    pub async fn execute(&self, session: &mut ChatSession, message: &str) -> ChatTurnOutcome {
        info!("Processing message: {}", truncate_chars(message, 80));

        let mut additional = AdditionalContext::new();

        // Scrape only when the raw input passes the URL-prefix test.
        let scraped = is_url(message);
        if scraped {
            debug!("Input looks like a URL, scraping");
            let text = match self.fetcher.fetch_page_text(message).await {
                Ok(text) => text,
                Err(e) => {
                    warn!("Scrape failed for {}: {}", message, e);
                    format!("Error fetching {}: {}", message, e)
                }
            };
            additional.push_page(text);
        }

        // Staged attachments are consumed unconditionally, whatever the
        // extraction outcome.
        let attachments = session.take_attachments();
        let attachments_processed = attachments.len();
        for file in &attachments {
            let text = match self.extractor.extract_text(file) {
                Ok(text) => text,
                Err(e) => {
                    warn!("Extraction failed for {}: {}", file.name, e);
                    e.to_string()
                }
            };
            additional.push_document(&file.name, text);
        }

        // Context is built from history as it stood before this message.
        let history = history_block(session.history(), self.params.max_history);
        let context = compose_context(&history, &additional);
        let prompt = compose_prompt(&context, message);

        self.conversation_logger.log(ConversationEvent::new(
            "user_message",
            serde_json::json!({
                "message": message,
                "prompt_bytes": prompt.len(),
                "scraped": scraped,
                "attachments": attachments_processed,
            }),
        ));

        debug!("Prompt assembled ({} bytes)", prompt.len());

        let reply = match session.llm().send(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Model call failed: {}", e);
                format!("❌ Error: {}", e)
            }
        };

        let mut user_turn = Turn::user(message);
        if !additional.is_empty() {
            user_turn = user_turn.with_attached_context(additional.body());
        }
        session.history_mut().push(user_turn);
        session.history_mut().push(Turn::assistant(reply.clone()));

        self.conversation_logger.log(ConversationEvent::new(
            "assistant_reply",
            serde_json::json!({
                "model": session.llm().model().to_string(),
                "bytes": reply.len(),
                "text": reply,
            }),
        ));

        ChatTurnOutcome {
            reply,
            scraped,
            attachments_processed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::document_extractor::ExtractError;
    use crate::ports::llm_gateway::{GatewayError, LlmSession};
    use crate::ports::page_fetcher::FetchError;
    use async_trait::async_trait;
    use conversa_domain::{Model, Role, UploadedFile};
    use std::sync::Mutex;

    // ==================== Test Mocks ====================

    /// Records every prompt it receives; replies with a fixed string or an error.
    struct MockLlm {
        model: Model,
        prompts: Arc<Mutex<Vec<String>>>,
        fail: bool,
    }

    #[async_trait]
    impl LlmSession for MockLlm {
        fn model(&self) -> &Model {
            &self.model
        }

        async fn send(&self, prompt: &str) -> Result<String, GatewayError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            if self.fail {
                Err(GatewayError::Api("quota exceeded".to_string()))
            } else {
                Ok("mock reply".to_string())
            }
        }
    }

    struct MockFetcher {
        fail: bool,
    }

    #[async_trait]
    impl PageFetcher for MockFetcher {
        async fn fetch_page_text(&self, _url: &str) -> Result<String, FetchError> {
            if self.fail {
                Err(FetchError::Timeout)
            } else {
                Ok("scraped page text".to_string())
            }
        }
    }

    /// Extracts txt attachments verbatim, errors on everything else.
    struct MockExtractor;

    impl DocumentExtractor for MockExtractor {
        fn extract_text(&self, file: &UploadedFile) -> Result<String, ExtractError> {
            match file.kind() {
                Some(conversa_domain::DocumentKind::Txt) => {
                    Ok(String::from_utf8_lossy(&file.bytes).into_owned())
                }
                _ => Err(ExtractError::Unsupported(file.extension())),
            }
        }
    }

    fn use_case(fetch_fails: bool) -> (ChatTurnUseCase, Arc<Mutex<Vec<String>>>) {
        let prompts = Arc::new(Mutex::new(Vec::new()));
        let use_case = ChatTurnUseCase::new(
            Arc::new(MockFetcher { fail: fetch_fails }),
            Arc::new(MockExtractor),
            ChatParams::default(),
        );
        (use_case, prompts)
    }

    fn session(prompts: Arc<Mutex<Vec<String>>>, fail: bool) -> ChatSession {
        ChatSession::new(
            Box::new(MockLlm {
                model: Model::default(),
                prompts,
                fail,
            }),
            10,
        )
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_bare_message_on_empty_history() {
        let (use_case, prompts) = use_case(false);
        let mut session = session(prompts.clone(), false);

        let outcome = use_case.execute(&mut session, "Hi").await;

        // No header and no trailing formatting: the prompt is exactly the message
        assert_eq!(prompts.lock().unwrap().as_slice(), ["Hi"]);
        assert_eq!(outcome.reply, "mock reply");
        assert!(!outcome.scraped);
        assert_eq!(outcome.attachments_processed, 0);
    }

    #[tokio::test]
    async fn test_turns_are_recorded_in_order() {
        let (use_case, prompts) = use_case(false);
        let mut session = session(prompts, false);

        use_case.execute(&mut session, "Hi").await;

        let turns = session.history().turns();
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].role, Role::User);
        assert_eq!(turns[0].content, "Hi");
        assert_eq!(turns[1].role, Role::Assistant);
        assert_eq!(turns[1].content, "mock reply");
    }

    #[tokio::test]
    async fn test_prior_history_appears_in_prompt() {
        let (use_case, prompts) = use_case(false);
        let mut session = session(prompts.clone(), false);

        use_case.execute(&mut session, "first question").await;
        use_case.execute(&mut session, "second question").await;

        let recorded = prompts.lock().unwrap();
        let second = &recorded[1];
        assert!(second.starts_with("Previous conversation:\n"));
        assert!(second.contains("User: first question\n"));
        assert!(second.contains("Assistant: mock reply\n"));
        assert!(second.ends_with("\nUser: second question\nAssistant:"));
    }

    #[tokio::test]
    async fn test_url_message_is_scraped_into_context() {
        let (use_case, prompts) = use_case(false);
        let mut session = session(prompts.clone(), false);

        // Three prior turns
        for turn in ["a", "b", "c"] {
            session.history_mut().push(Turn::user(turn));
        }

        let outcome = use_case.execute(&mut session, "https://example.com").await;

        assert!(outcome.scraped);
        let recorded = prompts.lock().unwrap();
        let prompt = &recorded[0];
        assert!(prompt.contains("Additional Context:\n"));
        assert!(prompt.contains("scraped page text"));
        // The scraped text precedes the model call's closing formatting
        assert!(
            prompt.find("Additional Context:").unwrap()
                < prompt.rfind("\nAssistant:").unwrap()
        );

        // The user turn carries the scraped text as attached context
        let turns = session.history().turns();
        let user_turn = &turns[turns.len() - 2];
        assert_eq!(user_turn.content, "https://example.com");
        assert!(
            user_turn
                .attached_context
                .as_deref()
                .unwrap()
                .contains("scraped page text")
        );
    }

    #[tokio::test]
    async fn test_scrape_failure_degrades_to_inline_text() {
        let (use_case, prompts) = use_case(true);
        let mut session = session(prompts.clone(), false);

        let outcome = use_case.execute(&mut session, "https://example.com").await;

        assert!(outcome.scraped);
        let recorded = prompts.lock().unwrap();
        assert!(recorded[0].contains("Error fetching https://example.com"));
        // The turn itself still succeeds
        assert_eq!(outcome.reply, "mock reply");
    }

    #[tokio::test]
    async fn test_attachments_are_extracted_in_upload_order() {
        let (use_case, prompts) = use_case(false);
        let mut session = session(prompts.clone(), false);
        session.attach(UploadedFile::new("one.txt", b"first file".to_vec()));
        session.attach(UploadedFile::new("two.txt", b"second file".to_vec()));

        let outcome = use_case.execute(&mut session, "summarize these").await;

        assert_eq!(outcome.attachments_processed, 2);
        let recorded = prompts.lock().unwrap();
        let prompt = &recorded[0];
        let one = prompt.find("From file 'one.txt':\nfirst file").unwrap();
        let two = prompt.find("From file 'two.txt':\nsecond file").unwrap();
        assert!(one < two);
    }

    #[tokio::test]
    async fn test_attachments_cleared_even_when_extraction_fails() {
        let (use_case, prompts) = use_case(false);
        let mut session = session(prompts.clone(), false);
        session.attach(UploadedFile::new("data.csv", b"a,b,c".to_vec()));

        use_case.execute(&mut session, "what's in this?").await;

        assert!(session.pending_attachments().is_empty());
        // The error message stands in for the file's content
        let recorded = prompts.lock().unwrap();
        assert!(recorded[0].contains("Unsupported file format: csv"));
    }

    #[tokio::test]
    async fn test_model_failure_becomes_assistant_reply() {
        let (use_case, prompts) = use_case(false);
        let mut session = session(prompts, true);

        let outcome = use_case.execute(&mut session, "Hi").await;

        assert_eq!(outcome.reply, "❌ Error: API error: quota exceeded");
        // Appended to history like a successful reply
        let turns = session.history().turns();
        assert_eq!(turns[1].role, Role::Assistant);
        assert_eq!(turns[1].content, outcome.reply);
    }

    #[tokio::test]
    async fn test_history_stays_capped_across_turns() {
        let (use_case, prompts) = use_case(false);
        let mut session = session(prompts, false);

        for i in 0..30 {
            use_case
                .execute(&mut session, &format!("message {}", i))
                .await;
        }

        assert_eq!(session.history().len(), 20);
        // Oldest exchanges were evicted first
        assert_eq!(session.history().turns()[0].content, "message 20");
    }

    #[tokio::test]
    async fn test_context_window_is_ten_turns() {
        let (use_case, prompts) = use_case(false);
        let mut session = session(prompts.clone(), false);

        for i in 0..8 {
            use_case
                .execute(&mut session, &format!("message {}", i))
                .await;
        }

        // 16 stored turns; the prompt for the next message windows the last 10
        use_case.execute(&mut session, "latest").await;
        let recorded = prompts.lock().unwrap();
        let prompt = recorded.last().unwrap();
        let header_and_turns: Vec<&str> = prompt
            .lines()
            .take_while(|line| !line.is_empty())
            .collect();
        // Header + 10 turn lines
        assert_eq!(header_and_turns.len(), 11);
        assert!(!prompt.contains("message 2\n"));
        assert!(prompt.contains("User: message 3\n"));
    }
}
