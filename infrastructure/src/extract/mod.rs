//! Document text extraction adapters
//!
//! Dispatches purely on the lower-cased filename extension to one handler
//! per supported kind. Parsing itself is delegated: pdf-extract for PDF,
//! docx-rs for DOCX, and a strict UTF-8 decode for TXT.

mod docx;
mod pdf;
mod txt;

use conversa_application::{DocumentExtractor, ExtractError};
use conversa_domain::{DocumentKind, UploadedFile};
use tracing::debug;

/// Extractor over local file bytes.
pub struct FileTextExtractor;

impl DocumentExtractor for FileTextExtractor {
    fn extract_text(&self, file: &UploadedFile) -> Result<String, ExtractError> {
        let Some(kind) = file.kind() else {
            return Err(ExtractError::Unsupported(file.extension()));
        };

        debug!("Extracting {} as {}", file.name, kind);

        match kind {
            DocumentKind::Pdf => pdf::extract(&file.bytes),
            DocumentKind::Docx => docx::extract(&file.bytes),
            DocumentKind::Txt => txt::extract(&file.bytes),
        }
    }
}
