//! Page fetcher port
//!
//! Fetches a web page and reduces it to cleaned plain text for use as
//! prompt context.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while fetching a page
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("HTTP error: {code} {reason}")]
    Status { code: u16, reason: String },

    #[error("Request timed out")]
    Timeout,
}

/// Port for scraping a URL into prompt-ready text.
///
/// Implementations strip script/style content, normalize whitespace, and
/// bound the output length. Failures are typed here; the chat-turn use
/// case degrades them to inline text rather than letting them escape.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_page_text(&self, url: &str) -> Result<String, FetchError>;
}
