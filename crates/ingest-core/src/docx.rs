//! DOCX raw-text extraction.
//!
//! Delegates parsing to the `docx-rs` reader and uses its paragraph text
//! verbatim, paragraphs joined by newlines.

use crate::error::IngestError;
use docx_rs::{read_docx, DocumentChild, ParagraphChild, RunChild};

pub(crate) fn extract_text(bytes: &[u8]) -> Result<String, IngestError> {
    let docx = read_docx(bytes)
        .map_err(|e| IngestError::FileRead(format!("DOCX extraction failed: {}", e)))?;

    let mut paragraphs = Vec::new();
    for child in &docx.document.children {
        if let DocumentChild::Paragraph(paragraph) = child {
            let mut line = String::new();
            for para_child in &paragraph.children {
                if let ParagraphChild::Run(run) = para_child {
                    for run_child in &run.children {
                        if let RunChild::Text(text) = run_child {
                            line.push_str(&text.text);
                        }
                    }
                }
            }
            paragraphs.push(line);
        }
    }

    Ok(paragraphs.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_archive_maps_to_file_read() {
        let err = extract_text(b"plainly not a docx").unwrap_err();
        assert!(matches!(err, IngestError::FileRead(_)));
    }
}
