//! HTTP client for the external AI review service.
//!
//! Two endpoint calls: `/review` (PRD text in, raw reply text out) and
//! `/generate-template` (analysis in, template text out). The request-body
//! contract for `/review` changed across service versions; which one to
//! speak is explicit configuration, never guessed.

use serde::{Deserialize, Serialize};
use shared_types::AnalysisResult;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Review service returned status {0}")]
    Status(u16),

    #[error("Review service call failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Which request-body shape the `/review` endpoint expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WireContract {
    /// Canonical: `{"prd_text": ...}`.
    #[default]
    PrdText,
    /// Legacy: `{"title": ..., "text": ...}`.
    TitleText,
}

impl WireContract {
    pub fn from_env_value(value: &str) -> Option<Self> {
        match value {
            "prd_text" => Some(WireContract::PrdText),
            "title_text" => Some(WireContract::TitleText),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize)]
struct PrdTextBody<'a> {
    prd_text: &'a str,
}

#[derive(Debug, Serialize)]
struct TitleTextBody<'a> {
    title: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct ReviewReply {
    response: String,
}

#[derive(Debug, Serialize)]
struct TemplateBody<'a> {
    prd_analysis: &'a AnalysisResult,
}

#[derive(Debug, Deserialize)]
struct TemplateReply {
    template: String,
}

pub struct ReviewClient {
    http: reqwest::Client,
    base_url: String,
    contract: WireContract,
}

impl ReviewClient {
    pub fn new(base_url: impl Into<String>, contract: WireContract) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            contract,
        }
    }

    /// Send the PRD text for review; returns the raw reply text for the
    /// normalizer. `title` is only sent under the legacy contract.
    pub async fn review(&self, title: &str, text: &str) -> Result<String, ClientError> {
        let url = format!("{}/review", self.base_url);
        let request = self.http.post(&url);
        let response = match self.contract {
            WireContract::PrdText => request.json(&PrdTextBody { prd_text: text }).send().await?,
            WireContract::TitleText => request.json(&TitleTextBody { title, text }).send().await?,
        };
        let response = ok_or_status(response)?;
        Ok(response.json::<ReviewReply>().await?.response)
    }

    /// Generate a PRD template from an analysis; returned verbatim.
    pub async fn generate_template(
        &self,
        analysis: &AnalysisResult,
    ) -> Result<String, ClientError> {
        let url = format!("{}/generate-template", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(&TemplateBody {
                prd_analysis: analysis,
            })
            .send()
            .await?;
        let response = ok_or_status(response)?;
        Ok(response.json::<TemplateReply>().await?.template)
    }
}

fn ok_or_status(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(ClientError::Status(response.status().as_u16()))
    }
}
