pub mod document;
pub mod types;

pub use document::{EmptyTextError, PlainText, UploadedDocument};
pub use types::{
    ActionItem, AnalysisResult, Dimension, DimensionScores, Importance, MissingSection, Priority,
    RiskAssessment,
};
