//! HTTP handlers for the review API.

use axum::{extract::State, Json};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use std::sync::Arc;

use ingest_core::{IngestError, IngestObserver};
use review_engine::ReviewOutcome;
use shared_types::UploadedDocument;

use crate::error::ApiError;
use crate::models::*;
use crate::state::AppState;

/// Health check endpoint
pub async fn health() -> &'static str {
    "OK"
}

/// Reflects ingestion progress into the server log, the way a frontend
/// reflects it into a status line.
struct LogObserver;

impl IngestObserver for LogObserver {
    fn started(&self, filename: &str) {
        tracing::info!("Ingesting {}", filename);
    }

    fn succeeded(&self, filename: &str, characters: usize) {
        tracing::info!("Ingested {} ({} characters)", filename, characters);
    }

    fn failed(&self, filename: &str, error: &IngestError) {
        tracing::error!("Ingestion of {} failed: {}", filename, error);
    }
}

/// Upload a document; its extracted text becomes the session's current text.
pub async fn upload_document(
    State(state): State<Arc<AppState>>,
    Json(req): Json<UploadRequest>,
) -> Result<Json<UploadResponse>, ApiError> {
    let bytes = BASE64
        .decode(&req.content_base64)
        .map_err(|e| ApiError::InvalidRequest(format!("Invalid content base64: {}", e)))?;

    let document = UploadedDocument::new(req.filename.clone(), bytes);
    let text = ingest_core::ingest(&document, &LogObserver)?;
    let characters = text.len();

    // Replacement happens only now, on success: a failed ingestion above has
    // already returned and the previous text is untouched.
    state.session.lock().await.install_text(text);

    Ok(Json(UploadResponse {
        filename: req.filename,
        characters,
    }))
}

/// Run a review: send the PRD text to the AI service, normalize its reply,
/// and return the canonical analysis with its derived views.
pub async fn review(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ReviewRequest>,
) -> Result<Json<ReviewOutcome>, ApiError> {
    let title = req.resolved_title().to_string();
    let text = match req.resolved_text() {
        Some(text) => text.to_string(),
        None => state
            .session
            .lock()
            .await
            .text()
            .map(|t| t.as_str().to_string())
            .ok_or(ApiError::NoDocument)?,
    };

    state.session.lock().await.begin_request()?;

    let result = run_review(&state, &title, &text).await;

    let mut session = state.session.lock().await;
    session.finish_request();
    match result {
        Ok(outcome) => {
            session.install_analysis(outcome.analysis.clone());
            tracing::info!("Analysis complete, overall score {}", outcome.report.overall);
            Ok(Json(outcome))
        }
        Err(err) => Err(err),
    }
}

async fn run_review(state: &AppState, title: &str, text: &str) -> Result<ReviewOutcome, ApiError> {
    let reply = state.client.review(title, text).await?;
    Ok(state.engine.review_reply(&reply)?)
}

/// Generate a PRD template from the current (or supplied) analysis.
pub async fn generate_template(
    State(state): State<Arc<AppState>>,
    Json(req): Json<TemplateRequest>,
) -> Result<Json<TemplateResponse>, ApiError> {
    let analysis = match req.prd_analysis {
        Some(analysis) => analysis,
        None => state
            .session
            .lock()
            .await
            .analysis()
            .cloned()
            .ok_or(ApiError::NoAnalysis)?,
    };

    let template = state.client.generate_template(&analysis).await?;
    Ok(Json(TemplateResponse { template }))
}
