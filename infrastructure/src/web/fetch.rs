//! Page fetcher adapter: HTTP GET plus HTML-to-text cleanup.

use async_trait::async_trait;
use conversa_application::{FetchError, PageFetcher};
use conversa_domain::truncate_chars;
use std::time::Duration;
use tracing::debug;

/// Hard cap on returned page text, in characters.
const MAX_TEXT_CHARS: usize = 5000;

/// Timeout for the whole fetch.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Browser-like User-Agent; some sites refuse the default client string.
const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:109.0) Gecko/20100101 Firefox/115.0";

/// Fetches a URL and reduces the page to cleaned, truncated plain text.
pub struct PageScraper {
    client: reqwest::Client,
}

impl PageScraper {
    pub fn new() -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|e| FetchError::Request(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for PageScraper {
    async fn fetch_page_text(&self, url: &str) -> Result<String, FetchError> {
        debug!("Fetching {}", url);

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout
            } else {
                FetchError::Request(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                code: status.as_u16(),
                reason: status
                    .canonical_reason()
                    .unwrap_or("Unknown")
                    .to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        Ok(page_text(&body))
    }
}

/// Reduce an HTML document to cleaned, truncated plain text.
///
/// Script and style subtrees are pruned entirely, so their contents never
/// appear in the output even when nested inside visible elements. The
/// remaining text is normalized and capped at [`MAX_TEXT_CHARS`] characters.
pub fn page_text(html: &str) -> String {
    let visible = visible_text(html);
    let cleaned = normalize_text(&visible);
    truncate_chars(&cleaned, MAX_TEXT_CHARS).to_string()
}

/// Tags whose entire subtree is dropped.
const SKIP_TAGS: [&str; 2] = ["script", "style"];

/// Collect the visible text of the document, one text node per line.
fn visible_text(html: &str) -> String {
    let document = scraper::Html::parse_document(html);
    let mut parts = Vec::new();
    collect_element_text(document.root_element(), &mut parts);
    parts.join("\n")
}

/// Recursively collect text, skipping pruned subtrees.
fn collect_element_text(element: scraper::ElementRef, parts: &mut Vec<String>) {
    if SKIP_TAGS.contains(&element.value().name()) {
        return;
    }

    for child in element.children() {
        match child.value() {
            scraper::Node::Text(text) => {
                let t = text.trim();
                if !t.is_empty() {
                    parts.push(t.to_string());
                }
            }
            scraper::Node::Element(_) => {
                if let Some(child_el) = scraper::ElementRef::wrap(child) {
                    collect_element_text(child_el, parts);
                }
            }
            _ => {}
        }
    }
}

/// Whitespace cleanup: trim every line, break lines apart at double-space
/// runs, drop empty phrases, and rejoin with single newlines.
fn normalize_text(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .flat_map(|line| line.split("  "))
        .map(str::trim)
        .filter(|phrase| !phrase.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_text_basic() {
        let html = "<html><body><h1>Hello</h1><p>World</p></body></html>";
        let text = page_text(html);
        assert!(text.contains("Hello"));
        assert!(text.contains("World"));
    }

    #[test]
    fn test_page_text_strips_script_and_style() {
        let html = r#"
        <html><body>
            <script>var secret = 1;</script>
            <style>.foo { color: red; }</style>
            <p>Visible text</p>
        </body></html>
        "#;
        let text = page_text(html);
        assert!(text.contains("Visible text"));
        assert!(!text.contains("var secret"));
        assert!(!text.contains("color: red"));
    }

    #[test]
    fn test_page_text_strips_nested_script_and_style() {
        let html = r#"
        <html><body>
            <div>Before
                <script>nested_js();</script>
                <span>Inside<style>.bar{}</style>span text</span>
            </div>
        </body></html>
        "#;
        let text = page_text(html);
        assert!(text.contains("Before"));
        assert!(text.contains("span text"));
        assert!(!text.contains("nested_js"));
        assert!(!text.contains(".bar"));
    }

    #[test]
    fn test_page_text_empty() {
        assert!(page_text("").is_empty());
    }

    #[test]
    fn test_page_text_truncates_at_5000_chars() {
        let long_paragraph = "word ".repeat(3000);
        let html = format!("<html><body><p>{}</p></body></html>", long_paragraph);
        let text = page_text(&html);
        assert_eq!(text.chars().count(), 5000);
    }

    #[test]
    fn test_normalize_splits_on_double_spaces() {
        assert_eq!(normalize_text("left  right"), "left\nright");
        assert_eq!(normalize_text("a  b  c"), "a\nb\nc");
        // Single spaces survive
        assert_eq!(normalize_text("hello world"), "hello world");
    }

    #[test]
    fn test_normalize_trims_and_drops_empty() {
        assert_eq!(normalize_text("  padded line  "), "padded line");
        assert_eq!(normalize_text("a\n\n\nb"), "a\nb");
        assert_eq!(normalize_text("a     b"), "a\nb");
    }
}
