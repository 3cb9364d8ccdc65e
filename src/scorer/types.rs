use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Feature values after range normalization; every field lies in [0,1].
///
/// `perplexity`, `ttr` and `var_sent_len` are already inverted. `avg_sent_len`
/// holds the centered peak (1 at the middle of the range), which enters the
/// score as `1 - avg_sent_len`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedFeatureSet {
    pub perplexity: f64,
    pub ttr: f64,
    pub var_sent_len: f64,
    pub repetition: f64,
    pub punct_ratio: f64,
    pub avg_sent_len: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Term {
    Perplexity,
    Ttr,
    VarSentLen,
    Repetition,
    PunctRatio,
    AvgSentLen,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TermContribution {
    pub term: Term,
    // Value in [0,1] that is multiplied by the weight
    pub signal: f64,
    pub weight: f64,
    // signal * weight, in score points (0..=100 scale)
    pub points: f64,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ScoreDetails {
    pub score: f64,
    pub normalized: NormalizedFeatureSet,
    pub terms: Vec<TermContribution>,
}
