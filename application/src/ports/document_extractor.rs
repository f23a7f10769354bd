//! Document extractor port
//!
//! Turns an uploaded file into plain text, dispatching on the declared
//! filename extension.

use conversa_domain::UploadedFile;
use thiserror::Error;

/// Errors that can occur during text extraction.
///
/// The Display strings double as the inline messages shown in place of the
/// file's content, so they are phrased for end users.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Unsupported file format: {0}")]
    Unsupported(String),

    #[error("Error reading TXT file: {0}")]
    Decode(String),

    #[error("Error reading PDF file: {0}")]
    Pdf(String),

    #[error("Error reading DOCX file: {0}")]
    Docx(String),
}

/// Port for extracting plain text from an uploaded document.
///
/// Extraction is local and synchronous; it has no side effects beyond
/// reading the provided bytes.
pub trait DocumentExtractor: Send + Sync {
    fn extract_text(&self, file: &UploadedFile) -> Result<String, ExtractError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_are_user_facing() {
        assert_eq!(
            ExtractError::Unsupported("csv".to_string()).to_string(),
            "Unsupported file format: csv"
        );
        assert!(
            ExtractError::Decode("invalid utf-8".to_string())
                .to_string()
                .contains("Error reading TXT")
        );
    }
}
