//! Score aggregation and banding.

use shared_types::{AnalysisResult, Dimension};

/// A single dimension's score, on the canonical 0–10 scale.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DimensionScore {
    pub dimension: Dimension,
    pub score: f64,
}

/// Derived scores for one analysis: per-dimension in canonical order, plus
/// the overall mean. Recomputed fresh on every analysis, never mutated.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScoreReport {
    pub dimension_scores: Vec<DimensionScore>,
    pub overall: f64,
}

/// Derive the score report from a canonical analysis.
///
/// Dimension order is always [`Dimension::ALL`] regardless of the order keys
/// appeared in the source reply. The overall mean divides by the fixed
/// dimension count, rounded to one decimal.
pub fn aggregate(analysis: &AnalysisResult) -> ScoreReport {
    let dimension_scores: Vec<DimensionScore> = Dimension::ALL
        .iter()
        .map(|dim| DimensionScore {
            dimension: *dim,
            score: analysis.scores.get(*dim),
        })
        .collect();

    let total: f64 = dimension_scores.iter().map(|entry| entry.score).sum();
    let overall = round_one_decimal(total / Dimension::COUNT as f64);

    ScoreReport {
        dimension_scores,
        overall,
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Qualitative tier for a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Band {
    High,
    Medium,
    Low,
}

/// Threshold table for banding. Both historical colorings are instances of
/// this table rather than separate code paths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandThresholds {
    /// Scores at or above this are [`Band::High`].
    pub high: f64,
    /// Scores at or above this (but below `high`) are [`Band::Medium`].
    pub medium: f64,
}

impl BandThresholds {
    /// The coarser legacy coloring: high ≥ 8, medium ≥ 5.
    pub fn legacy() -> Self {
        Self {
            high: 8.0,
            medium: 5.0,
        }
    }
}

impl Default for BandThresholds {
    /// The breakdown-view coloring: high ≥ 8, medium ≥ 6.
    fn default() -> Self {
        Self {
            high: 8.0,
            medium: 6.0,
        }
    }
}

/// Map a score to its qualitative band under the given threshold table.
pub fn band(score: f64, thresholds: &BandThresholds) -> Band {
    if score >= thresholds.high {
        Band::High
    } else if score >= thresholds.medium {
        Band::Medium
    } else {
        Band::Low
    }
}
