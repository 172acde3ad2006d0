//! Data models for the review API.

use serde::{Deserialize, Serialize};
use shared_types::AnalysisResult;

/// Request to upload a document for ingestion.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadRequest {
    pub filename: String,
    pub content_base64: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct UploadResponse {
    pub filename: String,
    pub characters: usize,
}

/// Review request. Both body contracts observed in the wild are accepted:
/// `{"prd_text": ...}` and `{"title": ..., "text": ...}`. All fields may be
/// omitted to review the session's previously-uploaded document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReviewRequest {
    pub prd_text: Option<String>,
    pub title: Option<String>,
    pub text: Option<String>,
}

impl ReviewRequest {
    /// The PRD text, whichever contract carried it. Whitespace-only text
    /// counts as absent.
    pub fn resolved_text(&self) -> Option<&str> {
        self.prd_text
            .as_deref()
            .or(self.text.as_deref())
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }

    pub fn resolved_title(&self) -> &str {
        self.title.as_deref().unwrap_or("Untitled PRD")
    }
}

/// Template request; `prd_analysis` overrides the session's current analysis.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TemplateRequest {
    pub prd_analysis: Option<AnalysisResult>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TemplateResponse {
    pub template: String,
}
