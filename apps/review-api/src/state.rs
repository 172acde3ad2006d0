//! Application state for the review API.

use anyhow::{anyhow, Context, Result};
use review_engine::{ReviewEngine, ReviewSession};
use tokio::sync::Mutex;

use crate::client::{ReviewClient, WireContract};

pub struct AppState {
    pub client: ReviewClient,
    pub engine: ReviewEngine,
    /// The single session owning the current text and analysis. Handlers
    /// lock briefly around state transitions; the in-flight flag inside the
    /// session is what serializes whole requests.
    pub session: Mutex<ReviewSession>,
}

impl AppState {
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("REVIEW_SERVICE_URL")
            .context("REVIEW_SERVICE_URL must be set")?
            .trim_end_matches('/')
            .to_string();

        let contract = match std::env::var("REVIEW_WIRE_CONTRACT") {
            Ok(value) => WireContract::from_env_value(&value).ok_or_else(|| {
                anyhow!(
                    "REVIEW_WIRE_CONTRACT must be 'prd_text' or 'title_text', got '{}'",
                    value
                )
            })?,
            Err(_) => WireContract::default(),
        };

        tracing::info!(
            "Review service at {} using {:?} contract",
            base_url,
            contract
        );

        Ok(Self {
            client: ReviewClient::new(base_url, contract),
            engine: ReviewEngine::new(),
            session: Mutex::new(ReviewSession::new()),
        })
    }
}
