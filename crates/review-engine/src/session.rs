//! Session-owned state.
//!
//! One session owns at most one current extracted text and one current
//! analysis. Values are replaced wholesale on success and never mutated in
//! place, so a failed step leaves the previous state fully intact and
//! partial updates are never observable. Requests are serialized: a new one
//! may only begin after the previous one reached a terminal state.

use shared_types::{AnalysisResult, PlainText};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("A review request is already in flight")]
    RequestInFlight,
}

#[derive(Debug, Default)]
pub struct ReviewSession {
    text: Option<PlainText>,
    analysis: Option<AnalysisResult>,
    in_flight: bool,
}

impl ReviewSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> Option<&PlainText> {
        self.text.as_ref()
    }

    pub fn analysis(&self) -> Option<&AnalysisResult> {
        self.analysis.as_ref()
    }

    /// Mark a request as started. Fails while another request has not yet
    /// reached success or failure.
    pub fn begin_request(&mut self) -> Result<(), SessionError> {
        if self.in_flight {
            return Err(SessionError::RequestInFlight);
        }
        self.in_flight = true;
        Ok(())
    }

    /// Mark the in-flight request as terminated, successfully or not.
    pub fn finish_request(&mut self) {
        self.in_flight = false;
    }

    /// Replace the current text after a successful ingestion.
    pub fn install_text(&mut self, text: PlainText) {
        self.text = Some(text);
    }

    /// Replace the current analysis after a successful normalization.
    pub fn install_analysis(&mut self, analysis: AnalysisResult) {
        self.analysis = Some(analysis);
    }
}
