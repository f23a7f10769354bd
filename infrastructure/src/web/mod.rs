//! Web page fetching and text extraction

mod fetch;

pub use fetch::{PageScraper, page_text};
