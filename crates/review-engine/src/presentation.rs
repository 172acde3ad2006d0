//! Presentation model builder.
//!
//! A pure projection of the canonical analysis plus its score report into
//! view-ready structures: chart series, breakdown rows, tagged lists, and
//! badges. Nothing in here parses reply text or knows about any rendering
//! technology; empty optional collections surface as placeholder strings so
//! a renderer never has to special-case absence.

use crate::score::{band, Band, BandThresholds, ScoreReport};
use shared_types::{ActionItem, AnalysisResult, MissingSection};

pub const CHART_SCALE: [f64; 2] = [0.0, 10.0];

const DEFAULT_PRD_TYPE: &str = "General";
const DEFAULT_COMPLEXITY: &str = "Medium";

/// Radar/bar series: dimension labels with matching values, fixed order.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub scale: [f64; 2],
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OverallBadge {
    pub score: f64,
    pub band: Band,
}

/// One row of the per-dimension breakdown.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BreakdownRow {
    pub dimension: String,
    pub score: f64,
    pub percent: f64,
    pub band: Band,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    Strength,
    Improvement,
}

/// A strengths/improvements entry tagged with its category for styling.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TaggedItem {
    pub text: String,
    pub category: ItemCategory,
}

/// A list plus the placeholder a renderer shows when the list is empty.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ListSection<T> {
    pub items: Vec<T>,
    pub placeholder: String,
}

impl<T> ListSection<T> {
    fn new(items: Vec<T>, placeholder: &str) -> Self {
        Self {
            items,
            placeholder: placeholder.to_string(),
        }
    }
}

/// The four risk groups, each with its own empty-state placeholder.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RiskView {
    pub technical: ListSection<String>,
    pub business: ListSection<String>,
    pub timeline: ListSection<String>,
    pub mitigations: ListSection<String>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MetadataBadges {
    pub prd_type: String,
    pub estimated_complexity: String,
}

/// Everything a renderer needs for one analysis.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PresentationModel {
    pub chart: ChartSeries,
    pub overall: OverallBadge,
    pub breakdown: Vec<BreakdownRow>,
    pub strengths: Vec<TaggedItem>,
    pub improvements: Vec<TaggedItem>,
    pub missing_sections: ListSection<MissingSection>,
    pub action_items: ListSection<ActionItem>,
    pub risks: RiskView,
    pub badges: MetadataBadges,
}

/// Build the presentation model. Pure and deterministic: identical inputs
/// produce structurally identical models.
pub fn build(
    analysis: &AnalysisResult,
    report: &ScoreReport,
    thresholds: &BandThresholds,
) -> PresentationModel {
    let chart = ChartSeries {
        labels: report
            .dimension_scores
            .iter()
            .map(|entry| entry.dimension.label().to_string())
            .collect(),
        values: report.dimension_scores.iter().map(|e| e.score).collect(),
        scale: CHART_SCALE,
    };

    let breakdown = report
        .dimension_scores
        .iter()
        .map(|entry| BreakdownRow {
            dimension: entry.dimension.label().to_string(),
            score: entry.score,
            percent: entry.score / 10.0 * 100.0,
            band: band(entry.score, thresholds),
        })
        .collect();

    let tag = |texts: &[String], category: ItemCategory| {
        texts
            .iter()
            .map(|text| TaggedItem {
                text: text.clone(),
                category,
            })
            .collect::<Vec<_>>()
    };

    let risk = analysis.risk_assessment.clone().unwrap_or_default();

    PresentationModel {
        chart,
        overall: OverallBadge {
            score: report.overall,
            band: band(report.overall, thresholds),
        },
        breakdown,
        strengths: tag(&analysis.strengths, ItemCategory::Strength),
        improvements: tag(&analysis.areas_for_improvement, ItemCategory::Improvement),
        missing_sections: ListSection::new(
            analysis.missing_sections.clone(),
            "No missing sections identified",
        ),
        action_items: ListSection::new(analysis.action_items.clone(), "No action items suggested"),
        risks: RiskView {
            technical: ListSection::new(risk.technical_risks, "No technical risks identified"),
            business: ListSection::new(risk.business_risks, "No business risks identified"),
            timeline: ListSection::new(risk.timeline_risks, "No timeline risks identified"),
            mitigations: ListSection::new(risk.mitigations, "No mitigations suggested"),
        },
        badges: MetadataBadges {
            prd_type: analysis
                .prd_type
                .clone()
                .unwrap_or_else(|| DEFAULT_PRD_TYPE.to_string()),
            estimated_complexity: analysis
                .estimated_complexity
                .clone()
                .unwrap_or_else(|| DEFAULT_COMPLEXITY.to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::aggregate;
    use pretty_assertions::assert_eq;
    use shared_types::{Dimension, DimensionScores};

    fn sample_analysis() -> AnalysisResult {
        let mut scores = DimensionScores::default();
        for (i, dim) in Dimension::ALL.iter().enumerate() {
            scores.set(*dim, (i + 2) as f64);
        }
        let mut analysis = AnalysisResult::new("A tidy PRD.", scores);
        analysis.strengths = vec!["Clear objective".to_string()];
        analysis.areas_for_improvement = vec!["Define edge cases".to_string()];
        analysis
    }

    #[test]
    fn test_chart_series_in_fixed_order_with_scale() {
        let analysis = sample_analysis();
        let model = build(&analysis, &aggregate(&analysis), &BandThresholds::default());
        assert_eq!(model.chart.labels[0], "Clarity");
        assert_eq!(model.chart.labels[7], "Business Impact Alignment");
        assert_eq!(model.chart.values, vec![2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        assert_eq!(model.chart.scale, [0.0, 10.0]);
    }

    #[test]
    fn test_breakdown_percent_and_band() {
        let analysis = sample_analysis();
        let model = build(&analysis, &aggregate(&analysis), &BandThresholds::default());
        let row = &model.breakdown[7];
        assert_eq!(row.score, 9.0);
        assert_eq!(row.percent, 90.0);
        assert_eq!(row.band, Band::High);
        assert_eq!(model.breakdown[0].band, Band::Low);
    }

    #[test]
    fn test_items_keep_order_and_category() {
        let analysis = sample_analysis();
        let model = build(&analysis, &aggregate(&analysis), &BandThresholds::default());
        assert_eq!(model.strengths[0].text, "Clear objective");
        assert_eq!(model.strengths[0].category, ItemCategory::Strength);
        assert_eq!(model.improvements[0].category, ItemCategory::Improvement);
    }

    #[test]
    fn test_absent_collections_expose_placeholders() {
        let analysis = sample_analysis();
        let model = build(&analysis, &aggregate(&analysis), &BandThresholds::default());
        assert!(model.missing_sections.items.is_empty());
        assert_eq!(
            model.missing_sections.placeholder,
            "No missing sections identified"
        );
        assert_eq!(model.risks.technical.placeholder, "No technical risks identified");
        assert_eq!(model.risks.mitigations.placeholder, "No mitigations suggested");
    }

    #[test]
    fn test_badges_default_when_metadata_absent() {
        let analysis = sample_analysis();
        let model = build(&analysis, &aggregate(&analysis), &BandThresholds::default());
        assert_eq!(model.badges.prd_type, "General");
        assert_eq!(model.badges.estimated_complexity, "Medium");
    }

    #[test]
    fn test_badges_carry_metadata_when_present() {
        let mut analysis = sample_analysis();
        analysis.prd_type = Some("Platform".to_string());
        analysis.estimated_complexity = Some("High".to_string());
        let model = build(&analysis, &aggregate(&analysis), &BandThresholds::default());
        assert_eq!(model.badges.prd_type, "Platform");
        assert_eq!(model.badges.estimated_complexity, "High");
    }

    #[test]
    fn test_build_is_deterministic() {
        let analysis = sample_analysis();
        let report = aggregate(&analysis);
        let first = build(&analysis, &report, &BandThresholds::default());
        let second = build(&analysis, &report, &BandThresholds::default());
        assert_eq!(first, second);
    }
}
