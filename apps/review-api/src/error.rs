//! Error types for the review API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use ingest_core::IngestError;
use review_engine::{NormalizeError, SessionError};
use serde_json::json;
use thiserror::Error;

use crate::client::ClientError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Normalize(#[from] NormalizeError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("No document has been uploaded yet")]
    NoDocument,

    #[error("No analysis is available yet")]
    NoAnalysis,

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Ingest(err @ IngestError::UnsupportedFormat { .. }) => {
                (StatusCode::UNSUPPORTED_MEDIA_TYPE, err.to_string())
            }
            ApiError::Ingest(err @ IngestError::FileRead(_)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, err.to_string())
            }
            ApiError::Normalize(err) => {
                tracing::error!("Reply normalization failed: {}", err);
                (StatusCode::BAD_GATEWAY, err.to_string())
            }
            ApiError::Session(err @ SessionError::RequestInFlight) => {
                (StatusCode::CONFLICT, err.to_string())
            }
            ApiError::Client(err @ ClientError::Status(_)) => {
                tracing::error!("Review service error: {}", err);
                (StatusCode::BAD_GATEWAY, err.to_string())
            }
            ApiError::Client(err @ ClientError::Transport(_)) => {
                tracing::error!("Review service unreachable: {}", err);
                (StatusCode::GATEWAY_TIMEOUT, err.to_string())
            }
            ApiError::NoDocument | ApiError::NoAnalysis => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            ApiError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        };

        let body = Json(json!({
            "error": message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
