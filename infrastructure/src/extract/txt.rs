//! Plain-text extraction: a strict UTF-8 decode.

use conversa_application::ExtractError;

pub(super) fn extract(bytes: &[u8]) -> Result<String, ExtractError> {
    std::str::from_utf8(bytes)
        .map(str::to_owned)
        .map_err(|e| ExtractError::Decode(e.to_string()))
}
