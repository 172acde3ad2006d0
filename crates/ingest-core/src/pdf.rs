//! PDF text extraction.
//!
//! Extraction itself is delegated to `pdf-extract`; this module owns the page
//! assembly contract: within a page, extracted tokens are joined by single
//! spaces; pages are joined by a newline, in page order 1..N.

use crate::error::IngestError;
use pdf_extract::extract_text_from_mem;

pub(crate) fn extract_text(bytes: &[u8]) -> Result<String, IngestError> {
    let raw = extract_text_from_mem(bytes)
        .map_err(|e| IngestError::FileRead(format!("PDF extraction failed: {}", e)))?;
    Ok(assemble_pages(&raw))
}

/// `pdf-extract` separates pages with form feed characters. Each page's
/// tokens collapse to single-space separation; blank pages are dropped.
fn assemble_pages(raw: &str) -> String {
    raw.split('\x0C')
        .map(|page| page.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|page| !page.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
