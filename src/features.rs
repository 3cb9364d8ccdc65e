//! Stylistic surface metrics.
//!
//! Every extractor is a pure function that returns 0.0 for degenerate input
//! instead of failing.

use crate::consts::{
    DEFAULT_AVG_SENT_LEN, DEFAULT_PERPLEXITY, DEFAULT_PUNCT_RATIO, DEFAULT_REPETITION,
    DEFAULT_TTR, DEFAULT_VAR_SENT_LEN, PUNCTUATION_CHARS,
};
use crate::oracle::{resolve_perplexity, PerplexityOracle, PerplexitySource};
use crate::segmenter::{sentence_word_count, split_sentences, tokenize, word_tokens};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Raw (un-normalized) feature values for one text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureSet {
    pub perplexity: f64,
    pub ttr: f64,
    pub avg_sent_len: f64,
    pub var_sent_len: f64,
    pub punct_ratio: f64,
    pub repetition: f64,
}

impl Default for FeatureSet {
    fn default() -> Self {
        Self {
            perplexity: DEFAULT_PERPLEXITY,
            ttr: DEFAULT_TTR,
            avg_sent_len: DEFAULT_AVG_SENT_LEN,
            var_sent_len: DEFAULT_VAR_SENT_LEN,
            punct_ratio: DEFAULT_PUNCT_RATIO,
            repetition: DEFAULT_REPETITION,
        }
    }
}

impl FeatureSet {
    /// Replaces any non-finite value with its documented default.
    pub fn sanitized(&self) -> Self {
        let d = Self::default();
        let pick = |v: f64, fallback: f64| if v.is_finite() { v } else { fallback };
        Self {
            perplexity: pick(self.perplexity, d.perplexity),
            ttr: pick(self.ttr, d.ttr),
            avg_sent_len: pick(self.avg_sent_len, d.avg_sent_len),
            var_sent_len: pick(self.var_sent_len, d.var_sent_len),
            punct_ratio: pick(self.punct_ratio, d.punct_ratio),
            repetition: pick(self.repetition, d.repetition),
        }
    }
}

/// Output of a full extraction pass.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub features: FeatureSet,
    pub perplexity_source: PerplexitySource,
    pub word_count: usize,
    pub sentence_count: usize,
}

pub fn extract(
    text: &str,
    oracle: Option<&dyn PerplexityOracle>,
    ngram_size: usize,
) -> Extraction {
    let text = text.trim();
    let words = word_tokens(&tokenize(text));
    let sentences = split_sentences(text);
    let (perplexity, perplexity_source) = resolve_perplexity(oracle, text);

    let features = FeatureSet {
        perplexity,
        ttr: type_token_ratio(&words),
        avg_sent_len: avg_sentence_length(&sentences),
        var_sent_len: sentence_length_variance(&sentences),
        punct_ratio: punctuation_ratio(text),
        repetition: repetition_score(&words, ngram_size),
    };

    Extraction {
        features,
        perplexity_source,
        word_count: words.len(),
        sentence_count: sentences.len(),
    }
}

pub fn type_token_ratio<S: AsRef<str>>(tokens: &[S]) -> f64 {
    if tokens.is_empty() {
        return 0.0;
    }
    let distinct: HashSet<&str> = tokens.iter().map(|t| t.as_ref()).collect();
    distinct.len() as f64 / tokens.len() as f64
}

fn sentence_lengths<S: AsRef<str>>(sentences: &[S]) -> Vec<f64> {
    sentences
        .iter()
        .map(|s| sentence_word_count(s.as_ref()) as f64)
        .collect()
}

pub fn avg_sentence_length<S: AsRef<str>>(sentences: &[S]) -> f64 {
    if sentences.is_empty() {
        return 0.0;
    }
    let lens = sentence_lengths(sentences);
    lens.iter().sum::<f64>() / lens.len() as f64
}

/// Population variance (divisor N) of per-sentence word counts.
pub fn sentence_length_variance<S: AsRef<str>>(sentences: &[S]) -> f64 {
    if sentences.len() < 2 {
        return 0.0;
    }
    let lens = sentence_lengths(sentences);
    let n = lens.len() as f64;
    let mean = lens.iter().sum::<f64>() / n;
    lens.iter().map(|l| (l - mean) * (l - mean)).sum::<f64>() / n
}

pub fn punctuation_ratio(text: &str) -> f64 {
    if text.is_empty() {
        return 0.0;
    }
    let mut total = 0usize;
    let mut punct = 0usize;
    for ch in text.chars() {
        total += 1;
        if PUNCTUATION_CHARS.contains(&ch) {
            punct += 1;
        }
    }
    punct as f64 / total.max(1) as f64
}

/// Share of n-gram occurrences that belong to an n-gram seen more than once.
///
/// Windows overlap, so a run of `k` identical tokens yields `k - n + 1`
/// n-grams.
pub fn repetition_score<S: AsRef<str>>(tokens: &[S], n: usize) -> f64 {
    if n == 0 || tokens.len() < n {
        return 0.0;
    }

    let mut counts: HashMap<Vec<&str>, usize> = HashMap::new();
    let mut total = 0usize;
    for window in tokens.windows(n) {
        let key: Vec<&str> = window.iter().map(|t| t.as_ref()).collect();
        *counts.entry(key).or_default() += 1;
        total += 1;
    }

    let repeated: usize = counts.values().filter(|&&c| c > 1).sum();
    repeated as f64 / total.max(1) as f64
}
