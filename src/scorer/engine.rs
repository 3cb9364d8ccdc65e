use super::normalize::normalize_features;
use super::types::{NormalizedFeatureSet, ScoreDetails, Term, TermContribution};
use crate::config::ScoringWeights;
use crate::consts::SCORE_SCALE;
use crate::features::FeatureSet;

fn signals(n: &NormalizedFeatureSet) -> [(Term, f64); 6] {
    [
        (Term::Perplexity, n.perplexity),
        (Term::Ttr, n.ttr),
        (Term::VarSentLen, n.var_sent_len),
        (Term::Repetition, n.repetition),
        (Term::PunctRatio, n.punct_ratio),
        // Mid-length sentences pull the score down; both extremes push it up.
        (Term::AvgSentLen, 1.0 - n.avg_sent_len),
    ]
}

#[inline]
fn clamp_score(raw: f64) -> f64 {
    let s = raw * SCORE_SCALE;
    if s.is_nan() {
        return 0.0;
    }
    s.clamp(0.0, SCORE_SCALE)
}

/// Weighted fusion of all six terms into a 0..=100 score.
pub fn score_full(features: &FeatureSet, weights: &ScoringWeights) -> f64 {
    let n = normalize_features(&features.sanitized());
    let raw: f64 = signals(&n)
        .iter()
        .zip(weights.as_array())
        .map(|((_, signal), w)| signal * w)
        .sum();
    clamp_score(raw)
}

/// Same result as `score_full`, plus the per-term breakdown.
pub fn score_details(features: &FeatureSet, weights: &ScoringWeights) -> ScoreDetails {
    let normalized = normalize_features(&features.sanitized());

    let mut raw = 0.0;
    let mut terms = Vec::with_capacity(6);
    for ((term, signal), weight) in signals(&normalized).into_iter().zip(weights.as_array()) {
        let weighted = signal * weight;
        raw += weighted;
        terms.push(TermContribution {
            term,
            signal,
            weight,
            points: weighted * SCORE_SCALE,
        });
    }

    ScoreDetails {
        score: clamp_score(raw),
        normalized,
        terms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_terms_follow_weight_order() {
        let d = score_details(&FeatureSet::default(), &ScoringWeights::default());
        let order: Vec<Term> = d.terms.iter().map(|t| t.term).collect();
        assert_eq!(order, Term::iter().collect::<Vec<_>>());
        assert_eq!(d.terms[0].weight, 0.35);
        assert_eq!(d.terms[5].weight, 0.10);
    }

    #[test]
    fn test_full_and_details_agree() {
        let f = FeatureSet {
            perplexity: 42.0,
            ttr: 0.61,
            avg_sent_len: 14.2,
            var_sent_len: 7.5,
            punct_ratio: 0.031,
            repetition: 0.04,
        };
        let w = ScoringWeights::default();
        let d = score_details(&f, &w);
        assert_eq!(d.score, score_full(&f, &w));
        assert_eq!(d.terms.len(), 6);
        let summed: f64 = d.terms.iter().map(|t| t.points).sum();
        assert!((summed - d.score).abs() < 1e-9);
    }

    #[test]
    fn test_nan_features_use_defaults() {
        let f = FeatureSet {
            perplexity: f64::NAN,
            ..Default::default()
        };
        let w = ScoringWeights::default();
        assert_eq!(score_full(&f, &w), score_full(&FeatureSet::default(), &w));
    }

    #[test]
    fn test_oversized_weights_still_clamped() {
        let w = ScoringWeights {
            weight_perplexity: 5.0,
            ..Default::default()
        };
        let f = FeatureSet {
            perplexity: 1.0,
            ..Default::default()
        };
        assert_eq!(score_full(&f, &w), 100.0);
    }
}
