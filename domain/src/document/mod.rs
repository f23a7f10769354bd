//! Uploaded documents and the closed set of supported kinds

use serde::{Deserialize, Serialize};

/// Supported document kinds (Value Object)
///
/// A closed enum: dispatch to a text extractor happens purely on the
/// lower-cased filename extension, and anything outside this set is
/// reported as unsupported rather than guessed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentKind {
    Pdf,
    Docx,
    Txt,
}

impl DocumentKind {
    /// Parse a filename extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "docx" => Some(DocumentKind::Docx),
            "txt" => Some(DocumentKind::Txt),
            _ => None,
        }
    }

    /// Parse the extension of a full filename.
    pub fn from_filename(name: &str) -> Option<Self> {
        let (_, ext) = name.rsplit_once('.')?;
        Self::from_extension(ext)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => "pdf",
            DocumentKind::Docx => "docx",
            DocumentKind::Txt => "txt",
        }
    }

    /// The extensions the upload surface accepts.
    pub fn supported_extensions() -> &'static [&'static str] {
        &["pdf", "docx", "txt"]
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An uploaded file pending extraction
///
/// Attachments are session-scoped: they are staged on the session and
/// cleared after one processing pass, whatever the outcome.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    /// The document kind declared by the filename extension, if supported.
    pub fn kind(&self) -> Option<DocumentKind> {
        DocumentKind::from_filename(&self.name)
    }

    /// The lower-cased filename extension, or the whole name when there is none.
    pub fn extension(&self) -> String {
        match self.name.rsplit_once('.') {
            Some((_, ext)) => ext.to_lowercase(),
            None => self.name.to_lowercase(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_extension() {
        assert_eq!(DocumentKind::from_extension("pdf"), Some(DocumentKind::Pdf));
        assert_eq!(DocumentKind::from_extension("PDF"), Some(DocumentKind::Pdf));
        assert_eq!(DocumentKind::from_extension("docx"), Some(DocumentKind::Docx));
        assert_eq!(DocumentKind::from_extension("txt"), Some(DocumentKind::Txt));
        assert_eq!(DocumentKind::from_extension("csv"), None);
    }

    #[test]
    fn test_kind_from_filename() {
        assert_eq!(
            DocumentKind::from_filename("report.final.PDF"),
            Some(DocumentKind::Pdf)
        );
        assert_eq!(DocumentKind::from_filename("README"), None);
        assert_eq!(DocumentKind::from_filename("data.csv"), None);
    }

    #[test]
    fn test_uploaded_file_kind_and_extension() {
        let file = UploadedFile::new("Notes.TXT", b"hello".to_vec());
        assert_eq!(file.kind(), Some(DocumentKind::Txt));
        assert_eq!(file.extension(), "txt");

        let bare = UploadedFile::new("Makefile", Vec::new());
        assert_eq!(bare.kind(), None);
        assert_eq!(bare.extension(), "makefile");
    }
}
