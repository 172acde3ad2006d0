//! Response normalization.
//!
//! The AI service's reply is untrusted text in one of several shapes: a
//! fenced JSON block, raw JSON, or the legacy labeled-markdown format. Each
//! shape is a parse strategy; strategies are tried in fixed priority order
//! and either claim the reply or decline so the next one runs. Shape
//! detection lives entirely here — downstream stages only ever see the
//! canonical [`AnalysisResult`].

mod json;
mod markdown;

use crate::error::NormalizeError;
use shared_types::AnalysisResult;

/// Outcome of offering a reply to one strategy.
pub(crate) enum Outcome {
    /// The strategy recognized the shape. Its verdict is final — a structure
    /// failure here does not fall through to later strategies.
    Applied(Result<AnalysisResult, NormalizeError>),
    /// The shape is not this strategy's; try the next one.
    Declined,
}

#[derive(Debug, Clone, Copy)]
enum Strategy {
    FencedJson,
    RawJson,
    MarkdownSections,
}

impl Strategy {
    /// Priority order: always try structured JSON first, fall back to the
    /// legacy markdown labels only when no valid JSON is obtainable.
    const PRIORITY: [Strategy; 3] = [
        Strategy::FencedJson,
        Strategy::RawJson,
        Strategy::MarkdownSections,
    ];

    fn apply(self, reply: &str) -> Outcome {
        match self {
            Strategy::FencedJson => json::from_fenced(reply),
            Strategy::RawJson => json::from_raw(reply),
            Strategy::MarkdownSections => markdown::from_labeled(reply),
        }
    }
}

/// Normalize a raw reply into the canonical analysis model.
///
/// Pure function of the input text: identical input yields identical output
/// or identical failure kind.
pub fn normalize(raw_reply: &str) -> Result<AnalysisResult, NormalizeError> {
    for strategy in Strategy::PRIORITY {
        if let Outcome::Applied(result) = strategy.apply(raw_reply) {
            return result;
        }
    }
    Err(NormalizeError::Parse(
        "reply is neither JSON nor labeled markdown".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::{Dimension, Importance, Priority};

    const FULL_SCORES: &str = r#"{
        "clarity": 8, "structure": 6, "completeness": 7, "ambiguity": 4,
        "stakeholder_consideration": 8, "technical_depth": 6,
        "feasibility": 9, "business_impact_alignment": 7
    }"#;

    fn raw_reply() -> String {
        format!(r#"{{"summary": "Well-scoped PRD.", "scores": {}}}"#, FULL_SCORES)
    }

    #[test]
    fn test_raw_json_reply_normalizes() {
        let result = normalize(&raw_reply()).unwrap();
        assert_eq!(result.summary, "Well-scoped PRD.");
        assert_eq!(result.scores.clarity, 8.0);
        assert_eq!(result.scores.business_impact_alignment, 7.0);
    }

    #[test]
    fn test_fenced_json_matches_raw_json() {
        let raw = raw_reply();
        let fenced = format!(
            "Here is the structured review you asked for:\n```json\n{}\n```\nLet me know if anything is unclear.",
            raw
        );
        assert_eq!(normalize(&fenced).unwrap(), normalize(&raw).unwrap());
    }

    #[test]
    fn test_fence_without_closing_marker_still_parses() {
        let fenced = format!("```json\n{}", raw_reply());
        assert_eq!(normalize(&fenced).unwrap().summary, "Well-scoped PRD.");
    }

    #[test]
    fn test_empty_object_is_structure_error() {
        let err = normalize("{}").unwrap_err();
        assert!(matches!(err, NormalizeError::Structure(_)));
    }

    #[test]
    fn test_missing_one_score_is_structure_error() {
        let reply = r#"{"summary": "s", "scores": {"clarity": 8}}"#;
        let err = normalize(reply).unwrap_err();
        assert!(matches!(err, NormalizeError::Structure(_)));
    }

    #[test]
    fn test_non_numeric_score_is_structure_error() {
        let reply = raw_reply().replace("\"clarity\": 8", "\"clarity\": \"eight\"");
        let err = normalize(&reply).unwrap_err();
        assert!(matches!(err, NormalizeError::Structure(_)));
    }

    #[test]
    fn test_empty_summary_is_structure_error() {
        let reply = raw_reply().replace("Well-scoped PRD.", "   ");
        let err = normalize(&reply).unwrap_err();
        assert!(matches!(err, NormalizeError::Structure(_)));
    }

    #[test]
    fn test_unparseable_prose_is_parse_error() {
        let err = normalize("not json or markdown").unwrap_err();
        assert!(matches!(err, NormalizeError::Parse(_)));
    }

    #[test]
    fn test_empty_reply_is_parse_error() {
        let err = normalize("").unwrap_err();
        assert!(matches!(err, NormalizeError::Parse(_)));
    }

    #[test]
    fn test_out_of_range_scores_are_clamped() {
        let reply = raw_reply()
            .replace("\"clarity\": 8", "\"clarity\": 14")
            .replace("\"ambiguity\": 4", "\"ambiguity\": -3");
        let result = normalize(&reply).unwrap();
        assert_eq!(result.scores.clarity, 10.0);
        assert_eq!(result.scores.ambiguity, 0.0);
    }

    #[test]
    fn test_json_optional_fields_are_carried() {
        let reply = format!(
            r#"{{
                "summary": "s",
                "scores": {scores},
                "strengths": ["Clear objective"],
                "areas_for_improvement": ["Define edge cases"],
                "missing_sections": [
                    {{"section": "Rollout plan", "importance": "High", "description": "No launch phases"}}
                ],
                "action_items": [
                    {{"task": "Add metrics", "priority": "Medium", "owner": "PM", "effort": "1d"}}
                ],
                "risk_assessment": {{"technical_risks": ["Vendor API unproven"]}},
                "prd_type": "Feature",
                "estimated_complexity": "High"
            }}"#,
            scores = FULL_SCORES
        );
        let result = normalize(&reply).unwrap();
        assert_eq!(result.strengths, vec!["Clear objective"]);
        assert_eq!(result.missing_sections[0].importance, Importance::High);
        assert_eq!(result.action_items[0].priority, Priority::Medium);
        assert_eq!(
            result.risk_assessment.unwrap().technical_risks,
            vec!["Vendor API unproven"]
        );
        assert_eq!(result.prd_type.as_deref(), Some("Feature"));
        assert_eq!(result.estimated_complexity.as_deref(), Some("High"));
    }

    #[test]
    fn test_malformed_optional_field_does_not_invalidate() {
        let reply = format!(
            r#"{{"summary": "s", "scores": {}, "strengths": "not a list"}}"#,
            FULL_SCORES
        );
        let result = normalize(&reply).unwrap();
        assert!(result.strengths.is_empty());
    }

    #[test]
    fn test_markdown_reply_normalizes() {
        let reply = "\
**1. Summary:** This PRD describes the integration of payments.

**2. Scores**
**Clarity:** 4
**Structure:** 3
**Completeness:** 5
**Ambiguity:** 2
**Stakeholder Consideration:** 4
**Technical Depth:** 3
**Feasibility:** 5
**Business Impact Alignment:** 4

**3. Strengths and Areas for Improvement:**

**Strengths:**
- **Clarity:** Clear objective stated at the beginning.
- **Completeness:** Covers key user journeys.

**Areas for Improvement:**
- **Ambiguity:** Some terms are vague and need definition.
- **Structure:** Lacks proper sectioning (e.g. user stories, edge cases).
";
        let result = normalize(reply).unwrap();
        assert_eq!(
            result.summary,
            "This PRD describes the integration of payments."
        );
        // Legacy 1–5 digits land on the canonical scale doubled.
        assert_eq!(result.scores.clarity, 8.0);
        assert_eq!(result.scores.completeness, 10.0);
        assert_eq!(result.scores.ambiguity, 4.0);
        assert_eq!(result.strengths.len(), 2);
        assert!(result.strengths[0].contains("Clear objective"));
        assert_eq!(result.areas_for_improvement.len(), 2);
        assert!(result.areas_for_improvement[1].contains("Lacks proper sectioning"));
    }

    #[test]
    fn test_markdown_missing_dimension_scores_zero() {
        let reply = "**1. Summary:** Short summary.\n\n**2. Scores**\n**Clarity:** 4\n";
        let result = normalize(reply).unwrap();
        assert_eq!(result.scores.clarity, 8.0);
        for dim in Dimension::ALL.iter().skip(1) {
            assert_eq!(result.scores.get(*dim), 0.0, "{:?}", dim);
        }
    }

    #[test]
    fn test_markdown_scores_without_summary_is_structure_error() {
        let reply = "**Clarity:** 4\n**Structure:** 3\n";
        let err = normalize(reply).unwrap_err();
        assert!(matches!(err, NormalizeError::Structure(_)));
    }

    #[test]
    fn test_invalid_fenced_json_falls_back_to_markdown() {
        let reply =
            "```json\n{broken\n```\n**1. Summary:** Recovered.\n**2. Scores**\n**Clarity:** 3\n";
        let result = normalize(reply).unwrap();
        assert_eq!(result.summary, "Recovered.");
        assert_eq!(result.scores.clarity, 6.0);
    }

    #[test]
    fn test_normalize_is_deterministic() {
        let reply = raw_reply();
        assert_eq!(normalize(&reply).unwrap(), normalize(&reply).unwrap());
    }
}
