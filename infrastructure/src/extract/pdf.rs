//! PDF text extraction via pdf-extract.

use conversa_application::ExtractError;

/// Extract the text of every page in document order.
///
/// pdf-extract emits each page's text followed by a page break; quality
/// depends on the PDF having a text layer (scanned images yield nothing).
pub(super) fn extract(bytes: &[u8]) -> Result<String, ExtractError> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractError::Pdf(e.to_string()))
}
