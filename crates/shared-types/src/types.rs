//! Canonical analysis model shared across the workspace.
//!
//! Everything downstream of the normalizer (aggregation, presentation,
//! template generation) consumes these types; nothing downstream ever parses
//! reply text again.

/// One of the eight fixed quality axes a PRD is scored on.
///
/// The variant order is the canonical display order everywhere in the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Clarity,
    Structure,
    Completeness,
    Ambiguity,
    StakeholderConsideration,
    TechnicalDepth,
    Feasibility,
    BusinessImpactAlignment,
}

impl Dimension {
    /// All dimensions in canonical display order.
    pub const ALL: [Dimension; 8] = [
        Dimension::Clarity,
        Dimension::Structure,
        Dimension::Completeness,
        Dimension::Ambiguity,
        Dimension::StakeholderConsideration,
        Dimension::TechnicalDepth,
        Dimension::Feasibility,
        Dimension::BusinessImpactAlignment,
    ];

    pub const COUNT: usize = Self::ALL.len();

    /// Human-readable label, e.g. "Stakeholder Consideration".
    pub fn label(&self) -> &'static str {
        match self {
            Dimension::Clarity => "Clarity",
            Dimension::Structure => "Structure",
            Dimension::Completeness => "Completeness",
            Dimension::Ambiguity => "Ambiguity",
            Dimension::StakeholderConsideration => "Stakeholder Consideration",
            Dimension::TechnicalDepth => "Technical Depth",
            Dimension::Feasibility => "Feasibility",
            Dimension::BusinessImpactAlignment => "Business Impact Alignment",
        }
    }

    /// Wire key used in JSON score maps, e.g. "stakeholder_consideration".
    pub fn key(&self) -> &'static str {
        match self {
            Dimension::Clarity => "clarity",
            Dimension::Structure => "structure",
            Dimension::Completeness => "completeness",
            Dimension::Ambiguity => "ambiguity",
            Dimension::StakeholderConsideration => "stakeholder_consideration",
            Dimension::TechnicalDepth => "technical_depth",
            Dimension::Feasibility => "feasibility",
            Dimension::BusinessImpactAlignment => "business_impact_alignment",
        }
    }
}

/// Scores for all eight dimensions on the canonical 0–10 scale.
///
/// Stored as fixed fields rather than a map so that cardinality and ordering
/// are facts of the type, not of whatever key order a reply happened to use.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DimensionScores {
    pub clarity: f64,
    pub structure: f64,
    pub completeness: f64,
    pub ambiguity: f64,
    pub stakeholder_consideration: f64,
    pub technical_depth: f64,
    pub feasibility: f64,
    pub business_impact_alignment: f64,
}

impl DimensionScores {
    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Clarity => self.clarity,
            Dimension::Structure => self.structure,
            Dimension::Completeness => self.completeness,
            Dimension::Ambiguity => self.ambiguity,
            Dimension::StakeholderConsideration => self.stakeholder_consideration,
            Dimension::TechnicalDepth => self.technical_depth,
            Dimension::Feasibility => self.feasibility,
            Dimension::BusinessImpactAlignment => self.business_impact_alignment,
        }
    }

    pub fn set(&mut self, dimension: Dimension, score: f64) {
        let slot = match dimension {
            Dimension::Clarity => &mut self.clarity,
            Dimension::Structure => &mut self.structure,
            Dimension::Completeness => &mut self.completeness,
            Dimension::Ambiguity => &mut self.ambiguity,
            Dimension::StakeholderConsideration => &mut self.stakeholder_consideration,
            Dimension::TechnicalDepth => &mut self.technical_depth,
            Dimension::Feasibility => &mut self.feasibility,
            Dimension::BusinessImpactAlignment => &mut self.business_impact_alignment,
        };
        *slot = score;
    }

    /// Iterate scores in canonical dimension order.
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, f64)> + '_ {
        Dimension::ALL.iter().map(move |d| (*d, self.get(*d)))
    }
}

/// Importance of a missing PRD section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Importance {
    #[serde(alias = "high")]
    High,
    #[serde(alias = "medium")]
    Medium,
    #[serde(alias = "low")]
    Low,
}

/// Priority of a suggested action item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Priority {
    #[serde(alias = "high")]
    High,
    #[serde(alias = "medium")]
    Medium,
    #[serde(alias = "low")]
    Low,
}

/// A section the reviewer found absent from the PRD.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MissingSection {
    pub section: String,
    pub importance: Importance,
    #[serde(default)]
    pub description: String,
}

/// A concrete follow-up the reviewer suggested.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ActionItem {
    pub task: String,
    pub priority: Priority,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub effort: String,
}

/// Risk groups called out by the reviewer.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RiskAssessment {
    #[serde(default)]
    pub technical_risks: Vec<String>,
    #[serde(default)]
    pub business_risks: Vec<String>,
    #[serde(default)]
    pub timeline_risks: Vec<String>,
    #[serde(default)]
    pub mitigations: Vec<String>,
}

impl RiskAssessment {
    pub fn is_empty(&self) -> bool {
        self.technical_risks.is_empty()
            && self.business_risks.is_empty()
            && self.timeline_risks.is_empty()
            && self.mitigations.is_empty()
    }
}

/// Canonical result of one PRD review.
///
/// `summary` and `scores` are mandatory; every other field defaults to empty
/// when the reply omitted it. The session replaces this value wholesale on
/// each successful analysis.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnalysisResult {
    pub summary: String,
    pub scores: DimensionScores,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub strengths: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub areas_for_improvement: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub missing_sections: Vec<MissingSection>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub action_items: Vec<ActionItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_assessment: Option<RiskAssessment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prd_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_complexity: Option<String>,
}

impl AnalysisResult {
    /// A result carrying only the mandatory fields.
    pub fn new(summary: impl Into<String>, scores: DimensionScores) -> Self {
        Self {
            summary: summary.into(),
            scores,
            strengths: Vec::new(),
            areas_for_improvement: Vec::new(),
            missing_sections: Vec::new(),
            action_items: Vec::new(),
            risk_assessment: None,
            prd_type: None,
            estimated_complexity: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_dimension_order_is_canonical() {
        let labels: Vec<&str> = Dimension::ALL.iter().map(|d| d.label()).collect();
        assert_eq!(
            labels,
            vec![
                "Clarity",
                "Structure",
                "Completeness",
                "Ambiguity",
                "Stakeholder Consideration",
                "Technical Depth",
                "Feasibility",
                "Business Impact Alignment",
            ]
        );
    }

    #[test]
    fn test_scores_get_set_round_trip() {
        let mut scores = DimensionScores::default();
        for (i, dim) in Dimension::ALL.iter().enumerate() {
            scores.set(*dim, i as f64);
        }
        for (i, dim) in Dimension::ALL.iter().enumerate() {
            assert_eq!(scores.get(*dim), i as f64);
        }
    }

    #[test]
    fn test_scores_iter_follows_canonical_order() {
        let scores = DimensionScores {
            clarity: 1.0,
            business_impact_alignment: 8.0,
            ..Default::default()
        };
        let collected: Vec<(Dimension, f64)> = scores.iter().collect();
        assert_eq!(collected[0], (Dimension::Clarity, 1.0));
        assert_eq!(collected[7], (Dimension::BusinessImpactAlignment, 8.0));
    }

    #[test]
    fn test_optional_fields_default_when_absent() {
        let json = r#"{
            "summary": "Solid draft",
            "scores": {
                "clarity": 8, "structure": 6, "completeness": 7, "ambiguity": 4,
                "stakeholder_consideration": 8, "technical_depth": 6,
                "feasibility": 9, "business_impact_alignment": 7
            }
        }"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert!(result.strengths.is_empty());
        assert!(result.action_items.is_empty());
        assert!(result.risk_assessment.is_none());
        assert!(result.prd_type.is_none());
    }

    #[test]
    fn test_importance_accepts_both_spellings() {
        let upper: Importance = serde_json::from_str("\"High\"").unwrap();
        let lower: Importance = serde_json::from_str("\"high\"").unwrap();
        assert_eq!(upper, Importance::High);
        assert_eq!(lower, Importance::High);
    }

    #[test]
    fn test_risk_assessment_empty_check() {
        assert!(RiskAssessment::default().is_empty());
        let risks = RiskAssessment {
            technical_risks: vec!["Unproven vendor API".to_string()],
            ..Default::default()
        };
        assert!(!risks.is_empty());
    }
}
