//! JSON parse strategies: fenced block and raw reply.
//!
//! Both share one validation gate: `summary` must be a non-empty string and
//! every dimension key must be present as a number. Optional fields are read
//! tolerantly — a malformed optional collection degrades to empty rather
//! than invalidating an otherwise usable reply.

use crate::error::NormalizeError;
use crate::normalize::Outcome;
use serde_json::Value;
use shared_types::{
    ActionItem, AnalysisResult, Dimension, DimensionScores, MissingSection, RiskAssessment,
};

const FENCE_OPEN: &str = "```json";
const FENCE_CLOSE: &str = "```";

/// Strategy 1: a ```json fenced block somewhere in the reply.
pub(crate) fn from_fenced(reply: &str) -> Outcome {
    let Some(block) = fenced_block(reply) else {
        return Outcome::Declined;
    };
    match serde_json::from_str::<Value>(block) {
        Ok(value) => Outcome::Applied(validate(value)),
        // A fence whose contents don't parse is not claimed; the raw and
        // markdown strategies still get their turn.
        Err(_) => Outcome::Declined,
    }
}

/// Strategy 2: the entire reply is JSON.
pub(crate) fn from_raw(reply: &str) -> Outcome {
    match serde_json::from_str::<Value>(reply.trim()) {
        Ok(value) => Outcome::Applied(validate(value)),
        Err(_) => Outcome::Declined,
    }
}

/// Text between the opening ```json marker and the closing fence, or to the
/// end of the reply when the model forgot to close the block.
fn fenced_block(reply: &str) -> Option<&str> {
    let start = reply.find(FENCE_OPEN)? + FENCE_OPEN.len();
    let rest = &reply[start..];
    let end = rest.find(FENCE_CLOSE).unwrap_or(rest.len());
    Some(rest[..end].trim())
}

fn validate(value: Value) -> Result<AnalysisResult, NormalizeError> {
    let Some(obj) = value.as_object() else {
        return Err(NormalizeError::Structure(
            "reply JSON is not an object".to_string(),
        ));
    };

    let summary = obj
        .get("summary")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| NormalizeError::Structure("missing or empty summary".to_string()))?
        .to_string();

    let scores_obj = obj
        .get("scores")
        .and_then(Value::as_object)
        .ok_or_else(|| NormalizeError::Structure("missing scores object".to_string()))?;

    let mut scores = DimensionScores::default();
    for dim in Dimension::ALL {
        let raw = scores_obj
            .get(dim.key())
            .and_then(Value::as_f64)
            .ok_or_else(|| {
                NormalizeError::Structure(format!(
                    "score '{}' is missing or not a number",
                    dim.key()
                ))
            })?;
        scores.set(dim, raw.clamp(0.0, 10.0));
    }

    Ok(AnalysisResult {
        summary,
        scores,
        strengths: optional(obj.get("strengths")),
        areas_for_improvement: optional(obj.get("areas_for_improvement")),
        missing_sections: optional::<Vec<MissingSection>>(obj.get("missing_sections")),
        action_items: optional::<Vec<ActionItem>>(obj.get("action_items")),
        risk_assessment: obj
            .get("risk_assessment")
            .cloned()
            .and_then(|v| serde_json::from_value::<RiskAssessment>(v).ok())
            .filter(|r| !r.is_empty()),
        prd_type: obj.get("prd_type").and_then(Value::as_str).map(String::from),
        estimated_complexity: obj
            .get("estimated_complexity")
            .and_then(Value::as_str)
            .map(String::from),
    })
}

/// Deserialize an optional field, degrading to the default on absence or
/// shape mismatch.
fn optional<T: serde::de::DeserializeOwned + Default>(value: Option<&Value>) -> T {
    value
        .cloned()
        .and_then(|v| serde_json::from_value(v).ok())
        .unwrap_or_default()
}
