use crate::config::Config;
use crate::consts::{DEFAULT_NGRAM_SIZE, SHORT_TEXT_WORDS};
use crate::error::{DetectorError, DtResult};
use crate::features::{self, FeatureSet};
use crate::oracle::{PerplexityOracle, PerplexitySource};
use crate::scorer::{ScoreDetails, Scorer, Verdict};
use serde::Serialize;
use tracing::debug;

/// Entry point for analyses: validated scoring config plus extraction options.
///
/// Stateless across calls; one instance can serve any number of texts from
/// any number of threads.
#[derive(Debug, Clone)]
pub struct Detector {
    pub scorer: Scorer,
    pub ngram_size: usize,
}

#[derive(Serialize, Debug, Clone)]
pub struct AnalysisReport {
    pub score: f64,
    pub verdict: Verdict,
    pub features: FeatureSet,
    pub perplexity_source: PerplexitySource,
    pub word_count: usize,
    pub sentence_count: usize,
    pub short_text: bool,
    pub details: ScoreDetails,
}

impl Default for Detector {
    fn default() -> Self {
        Self {
            scorer: Scorer::default(),
            ngram_size: DEFAULT_NGRAM_SIZE,
        }
    }
}

impl Detector {
    pub fn new(config: Config, ngram_size: usize) -> DtResult<Self> {
        if ngram_size == 0 {
            return Err(DetectorError::Config(
                "n-gram size must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            scorer: Scorer::new(config)?,
            ngram_size,
        })
    }

    /// Runs the full pipeline. Returns `None` when the trimmed text is empty:
    /// there is nothing to analyze, which is not an error.
    pub fn analyze(
        &self,
        text: &str,
        oracle: Option<&dyn PerplexityOracle>,
    ) -> Option<AnalysisReport> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let extraction = features::extract(text, oracle, self.ngram_size);
        debug!("Features: {:?}", extraction.features);

        let details = self.scorer.score_debug(&extraction.features);
        debug!("Score breakdown: {:?}", details.terms);

        let score = details.score;
        Some(AnalysisReport {
            score,
            verdict: self.scorer.verdict(score),
            features: extraction.features,
            perplexity_source: extraction.perplexity_source,
            word_count: extraction.word_count,
            sentence_count: extraction.sentence_count,
            short_text: extraction.word_count < SHORT_TEXT_WORDS,
            details,
        })
    }
}

/// Convenience wrapper with default weights and thresholds.
pub fn analyze_text(text: &str, oracle: Option<&dyn PerplexityOracle>) -> Option<AnalysisReport> {
    Detector::default().analyze(text, oracle)
}
