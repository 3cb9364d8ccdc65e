pub mod engine;
pub mod normalize;
pub mod types;
pub mod verdict;

pub use self::normalize::normalize;
pub use self::types::{NormalizedFeatureSet, ScoreDetails, Term, TermContribution};
pub use self::verdict::Verdict;
use crate::config::{Config, ScoringWeights, VerdictThresholds};
use crate::error::DtResult;
use crate::features::FeatureSet;

/// Validated weights and thresholds; turns a `FeatureSet` into a score and
/// verdict. Holds no per-text state.
#[derive(Debug, Clone)]
pub struct Scorer {
    pub weights: ScoringWeights,
    pub thresholds: VerdictThresholds,
}

impl Scorer {
    pub fn new(config: Config) -> DtResult<Self> {
        config.validate()?;
        Ok(Self {
            weights: config.weights,
            thresholds: config.thresholds,
        })
    }

    pub fn score_full(&self, features: &FeatureSet) -> f64 {
        engine::score_full(features, &self.weights)
    }

    pub fn score_debug(&self, features: &FeatureSet) -> ScoreDetails {
        engine::score_details(features, &self.weights)
    }

    pub fn verdict(&self, score: f64) -> Verdict {
        Verdict::from_score(score, &self.thresholds)
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            thresholds: VerdictThresholds::default(),
        }
    }
}
