use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestError {
    /// Extension is not one of `txt` / `pdf` / `docx`. User-correctable;
    /// raised before any read is attempted.
    #[error("Unsupported file type: .{extension}")]
    UnsupportedFormat { extension: String },

    /// Byte reading or delegated extraction failed, with the underlying cause.
    #[error("Failed to read document: {0}")]
    FileRead(String),
}
