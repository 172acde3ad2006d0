pub mod error;
pub mod normalize;
pub mod presentation;
pub mod score;
pub mod session;

pub use error::NormalizeError;
pub use normalize::normalize;
pub use presentation::PresentationModel;
pub use score::{band, Band, BandThresholds, DimensionScore, ScoreReport};
pub use session::{ReviewSession, SessionError};

use shared_types::AnalysisResult;

/// Everything derived from one reply: the canonical analysis, its score
/// report, and the view-ready presentation model.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ReviewOutcome {
    pub analysis: AnalysisResult,
    pub report: ScoreReport,
    pub presentation: PresentationModel,
}

/// ReviewEngine entry point.
///
/// Runs the full pipeline on a raw service reply: normalize, aggregate,
/// build the presentation model.
pub struct ReviewEngine {
    thresholds: BandThresholds,
}

impl ReviewEngine {
    pub fn new() -> Self {
        Self {
            thresholds: BandThresholds::default(),
        }
    }

    /// Use a non-default banding table, e.g. [`BandThresholds::legacy`].
    pub fn with_thresholds(thresholds: BandThresholds) -> Self {
        Self { thresholds }
    }

    pub fn review_reply(&self, raw_reply: &str) -> Result<ReviewOutcome, NormalizeError> {
        let analysis = normalize::normalize(raw_reply)?;
        let report = score::aggregate(&analysis);
        let presentation = presentation::build(&analysis, &report, &self.thresholds);
        Ok(ReviewOutcome {
            analysis,
            report,
            presentation,
        })
    }
}

impl Default for ReviewEngine {
    fn default() -> Self {
        Self::new()
    }
}
