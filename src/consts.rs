/// Empirical (min, max) bounds for each raw feature.
/// These are part of the scoring contract and are not user-tunable.
pub const PERPLEXITY_RANGE: (f64, f64) = (10.0, 120.0);
pub const TTR_RANGE: (f64, f64) = (0.2, 0.8);
pub const VAR_SENT_LEN_RANGE: (f64, f64) = (0.0, 20.0);
pub const REPETITION_RANGE: (f64, f64) = (0.0, 0.2);
pub const PUNCT_RATIO_RANGE: (f64, f64) = (0.0, 0.08);
pub const AVG_SENT_LEN_RANGE: (f64, f64) = (2.0, 30.0);

/// Fallbacks substituted for a feature that is missing or non-finite.
pub const DEFAULT_PERPLEXITY: f64 = 100.0;
pub const DEFAULT_TTR: f64 = 0.5;
pub const DEFAULT_VAR_SENT_LEN: f64 = 1.0;
pub const DEFAULT_REPETITION: f64 = 0.0;
pub const DEFAULT_PUNCT_RATIO: f64 = 0.02;
pub const DEFAULT_AVG_SENT_LEN: f64 = 10.0;

/// Window size for the n-gram repetition metric.
pub const DEFAULT_NGRAM_SIZE: usize = 3;

/// Characters counted by the punctuation ratio.
pub const PUNCTUATION_CHARS: &[char] = &[
    '.', ',', ';', ':', '!', '?', '"', '\'', '(', ')', '[', ']', '{', '}',
];

/// Below this many words the verdict is flagged as unreliable.
pub const SHORT_TEXT_WORDS: usize = 50;

/// Tolerance when checking that fusion weights sum to 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Scale from the [0,1] weighted sum to the reported score.
pub const SCORE_SCALE: f64 = 100.0;
