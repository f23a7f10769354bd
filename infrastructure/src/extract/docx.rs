//! DOCX text extraction via docx-rs.

use conversa_application::ExtractError;
use docx_rs::{DocumentChild, Paragraph, ParagraphChild, RunChild, read_docx};

/// Extract every paragraph's text, joined by newlines, in document order.
pub(super) fn extract(bytes: &[u8]) -> Result<String, ExtractError> {
    let docx = read_docx(bytes).map_err(|e| ExtractError::Docx(e.to_string()))?;

    let paragraphs: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(p) => Some(paragraph_text(p)),
            _ => None,
        })
        .collect();

    Ok(paragraphs.join("\n"))
}

fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    collect_children(&paragraph.children, &mut text);
    text
}

fn collect_children(children: &[ParagraphChild], text: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => {
                for run_child in &run.children {
                    if let RunChild::Text(t) = run_child {
                        text.push_str(&t.text);
                    }
                }
            }
            // Hyperlinks wrap their own runs
            ParagraphChild::Hyperlink(link) => collect_children(&link.children, text),
            _ => {}
        }
    }
}
