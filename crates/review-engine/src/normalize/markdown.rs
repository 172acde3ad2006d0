//! Legacy labeled-markdown parse strategy.
//!
//! Older service versions replied with numbered prose sections instead of
//! JSON: "1. Summary", a scores block of `**<Dimension>:** <digit>` lines on
//! a 1–5 scale, and "3. Strengths and Areas for Improvement" split into two
//! bulleted sub-sections. This strategy reproduces that extraction. Scores
//! are partial-credit: a dimension with no label scores 0 rather than
//! failing the parse.

use crate::error::NormalizeError;
use crate::normalize::Outcome;
use lazy_static::lazy_static;
use regex::Regex;
use shared_types::{AnalysisResult, Dimension, DimensionScores};

lazy_static! {
    /// "1. Summary" (with or without bolding) up to the next numbered label.
    static ref SUMMARY_RE: Regex =
        Regex::new(r"(?s)\*{0,2}1\.\s*Summary:?\*{0,2}:?\s*(.*?)(?:\n\s*\*{0,2}\d+\.|\z)")
            .unwrap();
    /// Everything after the "3. Strengths and Areas for Improvement" label.
    static ref SECTION3_RE: Regex = Regex::new(
        r"(?s)\*{0,2}3\.\s*Strengths and Areas for Improvement:?\*{0,2}:?(.*)\z"
    )
    .unwrap();
    static ref STRENGTHS_RE: Regex =
        Regex::new(r"(?s)\*{0,2}Strengths:?\*{0,2}:?\s*(.*?)\*{0,2}Areas for Improvement")
            .unwrap();
    static ref IMPROVEMENTS_RE: Regex =
        Regex::new(r"(?s)\*{0,2}Areas for Improvement:?\*{0,2}:?\s*(.*)\z").unwrap();
    static ref BULLET_RE: Regex = Regex::new(r"^[-•*]\s*").unwrap();
    /// One `<label>: <digit>` matcher per dimension, tolerant of bolding and
    /// casing.
    static ref SCORE_RES: Vec<(Dimension, Regex)> = Dimension::ALL
        .iter()
        .map(|dim| {
            let pattern = format!(
                r"(?i)\*{{0,2}}{}:?\*{{0,2}}:?\s*(\d)",
                regex::escape(dim.label())
            );
            (*dim, Regex::new(&pattern).unwrap())
        })
        .collect();
}

/// Strategy 3: labeled markdown sections.
pub(crate) fn from_labeled(reply: &str) -> Outcome {
    let summary = SUMMARY_RE
        .captures(reply)
        .map(|cap| cap[1].trim().to_string());

    let mut scores = DimensionScores::default();
    let mut any_score = false;
    for (dim, re) in SCORE_RES.iter() {
        if let Some(cap) = re.captures(reply) {
            if let Ok(digit) = cap[1].parse::<f64>() {
                // Legacy replies score 1–5; double onto the canonical scale.
                scores.set(*dim, (digit * 2.0).clamp(0.0, 10.0));
                any_score = true;
            }
        }
    }

    // No recognizable label at all: this reply is not labeled markdown.
    if summary.is_none() && !any_score {
        return Outcome::Declined;
    }

    let summary = match summary.filter(|s| !s.is_empty()) {
        Some(s) => s,
        None => {
            return Outcome::Applied(Err(NormalizeError::Structure(
                "missing or empty summary".to_string(),
            )))
        }
    };

    let (strengths, improvements) = strengths_and_improvements(reply);

    let mut result = AnalysisResult::new(summary, scores);
    result.strengths = strengths;
    result.areas_for_improvement = improvements;
    Outcome::Applied(Ok(result))
}

fn strengths_and_improvements(reply: &str) -> (Vec<String>, Vec<String>) {
    let Some(cap) = SECTION3_RE.captures(reply) else {
        return (Vec::new(), Vec::new());
    };
    let section = cap.get(1).map(|m| m.as_str()).unwrap_or("");

    let strengths = STRENGTHS_RE
        .captures(section)
        .map(|c| bullet_list(&c[1]))
        .unwrap_or_default();
    let improvements = IMPROVEMENTS_RE
        .captures(section)
        .map(|c| bullet_list(&c[1]))
        .unwrap_or_default();
    (strengths, improvements)
}

/// Split a sub-section into ordered items: one per non-blank line, leading
/// bullet marker stripped.
fn bullet_list(section: &str) -> Vec<String> {
    section
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| BULLET_RE.replace(line, "").trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}
