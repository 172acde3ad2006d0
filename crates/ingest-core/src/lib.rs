//! Document ingestion
//!
//! Converts an uploaded file's raw bytes into [`PlainText`], dispatching
//! strictly on the lower-cased filename extension. Supported formats: `txt`,
//! `pdf`, `docx`. Anything else is rejected before a single byte is read.

mod docx;
pub mod error;
pub mod observer;
mod pdf;

use shared_types::{PlainText, UploadedDocument};

pub use error::IngestError;
pub use observer::{IngestObserver, NoopObserver};

/// Extract plain text from an uploaded document.
///
/// The observer is notified at well-defined points: `started` once dispatch
/// has accepted the format, then exactly one of `succeeded` / `failed`. An
/// unsupported extension fails without a `started` call, since no read is
/// ever attempted for it.
pub fn ingest(
    document: &UploadedDocument,
    observer: &dyn IngestObserver,
) -> Result<PlainText, IngestError> {
    let extension = document.extension();
    let extract: fn(&[u8]) -> Result<String, IngestError> = match extension.as_str() {
        "txt" => extract_txt,
        "pdf" => pdf::extract_text,
        "docx" => docx::extract_text,
        _ => {
            let err = IngestError::UnsupportedFormat { extension };
            observer.failed(&document.filename, &err);
            return Err(err);
        }
    };

    observer.started(&document.filename);

    let result = extract(&document.bytes).and_then(|text| {
        PlainText::new(text).map_err(|e| IngestError::FileRead(e.to_string()))
    });

    match result {
        Ok(text) => {
            observer.succeeded(&document.filename, text.len());
            Ok(text)
        }
        Err(err) => {
            observer.failed(&document.filename, &err);
            Err(err)
        }
    }
}

/// `txt` files carry the text directly; they only need UTF-8 validation.
fn extract_txt(bytes: &[u8]) -> Result<String, IngestError> {
    String::from_utf8(bytes.to_vec())
        .map_err(|e| IngestError::FileRead(format!("Text file is not valid UTF-8: {}", e)))
}
