use crate::consts::WEIGHT_SUM_TOLERANCE;
use crate::error::{DetectorError, DtResult};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub weights: ScoringWeights,
    #[command(flatten)]
    pub thresholds: VerdictThresholds,
}

/// Fusion weights. Each term's normalized value in [0,1] is multiplied by
/// its weight; the weights must sum to 1.0.
#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScoringWeights {
    // Low perplexity => predictable => AI-like
    #[arg(long, default_value_t = 0.35)]
    pub weight_perplexity: f64,

    // === LEXICAL ===
    #[arg(long, default_value_t = 0.15)]
    pub weight_ttr: f64,
    #[arg(long, default_value_t = 0.15)]
    pub weight_repetition: f64,

    // === RHYTHM ===
    #[arg(long, default_value_t = 0.15)]
    pub weight_var_sent_len: f64,
    #[arg(long, default_value_t = 0.10)]
    pub weight_avg_sent_len: f64,

    #[arg(long, default_value_t = 0.10)]
    pub weight_punct_ratio: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            weight_perplexity: 0.35,
            weight_ttr: 0.15,
            weight_repetition: 0.15,
            weight_var_sent_len: 0.15,
            weight_avg_sent_len: 0.10,
            weight_punct_ratio: 0.10,
        }
    }
}

/// Lower bounds (inclusive) of the two upper verdict bands.
#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct VerdictThresholds {
    #[arg(long, default_value_t = 75.0)]
    pub threshold_high: f64,
    #[arg(long, default_value_t = 50.0)]
    pub threshold_possible: f64,
}

impl Default for VerdictThresholds {
    fn default() -> Self {
        Self {
            threshold_high: 75.0,
            threshold_possible: 50.0,
        }
    }
}

impl ScoringWeights {
    pub fn as_array(&self) -> [f64; 6] {
        [
            self.weight_perplexity,
            self.weight_ttr,
            self.weight_var_sent_len,
            self.weight_repetition,
            self.weight_punct_ratio,
            self.weight_avg_sent_len,
        ]
    }

    pub fn total(&self) -> f64 {
        self.as_array().iter().sum()
    }

    pub fn validate(&self) -> DtResult<()> {
        if let Some(bad) = self.as_array().iter().find(|w| !w.is_finite() || **w < 0.0) {
            return Err(DetectorError::Validation(format!(
                "Weights must be finite and non-negative (got {})",
                bad
            )));
        }
        let total = self.total();
        if (total - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(DetectorError::Validation(format!(
                "Weights must sum to 1.0 (got {:.6})",
                total
            )));
        }
        Ok(())
    }

    pub fn merge_from_cli(&mut self, cli_weights: &ScoringWeights, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$field = cli_weights.$field;
                }
            };
        }

        update_if_present!(weight_perplexity);
        update_if_present!(weight_ttr);
        update_if_present!(weight_repetition);
        update_if_present!(weight_var_sent_len);
        update_if_present!(weight_avg_sent_len);
        update_if_present!(weight_punct_ratio);
    }
}

impl VerdictThresholds {
    pub fn validate(&self) -> DtResult<()> {
        let ordered = 0.0 <= self.threshold_possible
            && self.threshold_possible <= self.threshold_high
            && self.threshold_high <= 100.0;
        if !ordered {
            return Err(DetectorError::Validation(format!(
                "Thresholds must satisfy 0 <= possible ({}) <= high ({}) <= 100",
                self.threshold_possible, self.threshold_high
            )));
        }
        Ok(())
    }

    pub fn merge_from_cli(&mut self, cli: &VerdictThresholds, matches: &ArgMatches) {
        if matches.value_source("threshold_high") == Some(ValueSource::CommandLine) {
            self.threshold_high = cli.threshold_high;
        }
        if matches.value_source("threshold_possible") == Some(ValueSource::CommandLine) {
            self.threshold_possible = cli.threshold_possible;
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> DtResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            DetectorError::Config(format!(
                "Could not read weights file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Applies only the flags the user actually typed, so file values win
    /// over clap defaults.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        self.weights.merge_from_cli(&cli.weights, matches);
        self.thresholds.merge_from_cli(&cli.thresholds, matches);
    }

    pub fn validate(&self) -> DtResult<()> {
        self.weights.validate()?;
        self.thresholds.validate()
    }
}
