use crate::config::VerdictThresholds;
use serde::Serialize;
use strum_macros::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    #[strum(to_string = "high probability AI-generated")]
    HighProbabilityAi,
    #[strum(to_string = "indeterminate / possible AI")]
    Indeterminate,
    #[strum(to_string = "likely human")]
    LikelyHuman,
}

impl Verdict {
    /// Bands are closed on their lower edge.
    pub fn from_score(score: f64, thresholds: &VerdictThresholds) -> Self {
        if score >= thresholds.threshold_high {
            Self::HighProbabilityAi
        } else if score >= thresholds.threshold_possible {
            Self::Indeterminate
        } else {
            Self::LikelyHuman
        }
    }

    pub fn marker(&self) -> &'static str {
        match self {
            Self::HighProbabilityAi => "🔴",
            Self::Indeterminate => "🟠",
            Self::LikelyHuman => "🟢",
        }
    }
}
