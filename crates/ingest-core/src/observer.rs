//! Progress observation for the ingestion flow.
//!
//! The ingestor itself holds no UI state; callers that want to reflect upload
//! progress implement [`IngestObserver`] and react to the hooks.

use crate::error::IngestError;

/// Invoked at the well-defined points of an ingestion: start, success,
/// failure. Default implementations do nothing.
pub trait IngestObserver {
    fn started(&self, _filename: &str) {}

    fn succeeded(&self, _filename: &str, _characters: usize) {}

    fn failed(&self, _filename: &str, _error: &IngestError) {}
}

/// Observer that ignores every event.
pub struct NoopObserver;

impl IngestObserver for NoopObserver {}
