//! Uploaded document and extracted-text types.

use thiserror::Error;

/// Extraction produced no usable text.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("document text is empty")]
pub struct EmptyTextError;

/// Normalized UTF-8 text extracted from an uploaded document.
///
/// Invariant: never empty. Construction fails rather than letting an empty
/// extraction masquerade as a successful ingestion.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct PlainText(String);

impl PlainText {
    pub fn new(text: impl Into<String>) -> Result<Self, EmptyTextError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(EmptyTextError);
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        // Invariant holds by construction.
        false
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for PlainText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A file as selected by the user, before any extraction.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct UploadedDocument {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl UploadedDocument {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            bytes,
        }
    }

    /// Lower-cased extension suffix, empty when the filename has none.
    pub fn extension(&self) -> String {
        self.filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
            .unwrap_or_default()
    }
}
