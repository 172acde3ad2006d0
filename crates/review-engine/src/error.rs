use thiserror::Error;

#[derive(Error, Debug)]
pub enum NormalizeError {
    /// The reply text is neither valid JSON nor matchable by the labeled
    /// markdown fallback.
    #[error("Could not parse reply: {0}")]
    Parse(String),

    /// A strategy applied, but a mandatory field (summary, a dimension score)
    /// is missing or mistyped.
    #[error("Reply is missing required structure: {0}")]
    Structure(String),
}
