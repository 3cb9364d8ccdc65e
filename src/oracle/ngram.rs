use super::PerplexityOracle;
use crate::error::{DetectorError, DtResult};
use crate::segmenter::{tokenize, word_tokens};
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Unigram language model over a `word<TAB>count` frequency table.
///
/// Probabilities use add-one smoothing with one extra slot reserved for
/// unseen words, so every token has a non-zero probability.
pub struct NgramOracle {
    counts: HashMap<String, f64>,
    total: f64,
}

impl NgramOracle {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> DtResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            DetectorError::Config(format!(
                "Could not open frequency table at '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> DtResult<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .quoting(false)
            .flexible(true)
            .from_reader(reader);

        let mut counts: HashMap<String, f64> = HashMap::new();
        let mut skipped = 0usize;

        for result in rdr.records() {
            let rec = result?;
            if rec.len() < 2 {
                skipped += 1;
                continue;
            }

            let word = rec[0].trim().to_lowercase();
            if word.is_empty() {
                skipped += 1;
                continue;
            }

            let count: f64 = match rec[1].trim().parse() {
                Ok(v) if f64::is_finite(v) && v > 0.0 => v,
                _ => {
                    skipped += 1;
                    continue;
                }
            };

            *counts.entry(word).or_default() += count;
        }

        if counts.is_empty() {
            return Err(DetectorError::Validation(
                "Frequency table contains no usable rows".to_string(),
            ));
        }

        let total: f64 = counts.values().sum();
        debug!(
            "Loaded {} vocabulary entries ({} rows skipped, total count {})",
            counts.len(),
            skipped,
            total
        );

        Ok(Self { counts, total })
    }

    pub fn vocabulary_size(&self) -> usize {
        self.counts.len()
    }

    fn probability(&self, word: &str) -> f64 {
        let count = self.counts.get(word).copied().unwrap_or(0.0);
        let denom = self.total + self.counts.len() as f64 + 1.0;
        (count + 1.0) / denom
    }
}

impl PerplexityOracle for NgramOracle {
    fn name(&self) -> &str {
        "ngram"
    }

    fn estimate_surprise(&self, text: &str) -> DtResult<f64> {
        let words = word_tokens(&tokenize(text));
        if words.is_empty() {
            return Err(DetectorError::Oracle(
                "no word tokens to score".to_string(),
            ));
        }

        let nll: f64 = words.iter().map(|w| -self.probability(w).ln()).sum();
        Ok((nll / words.len() as f64).exp())
    }
}
