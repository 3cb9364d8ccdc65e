use super::types::NormalizedFeatureSet;
use crate::consts::{
    AVG_SENT_LEN_RANGE, PERPLEXITY_RANGE, PUNCT_RATIO_RANGE, REPETITION_RANGE, TTR_RANGE,
    VAR_SENT_LEN_RANGE,
};
use crate::features::FeatureSet;

/// Linear clamp-and-scale of `x` from `[min, max]` onto `[0, 1]`.
#[inline]
pub fn normalize(x: f64, min: f64, max: f64) -> f64 {
    if x <= min {
        return 0.0;
    }
    if x >= max {
        return 1.0;
    }
    (x - min) / (max - min)
}

#[inline]
fn normalize_in(x: f64, range: (f64, f64)) -> f64 {
    normalize(x, range.0, range.1)
}

/// Peaks at 1 when `avg` sits at the middle of its range, 0 at either end.
#[inline]
pub fn centered_peak(avg: f64) -> f64 {
    1.0 - (normalize_in(avg, AVG_SENT_LEN_RANGE) - 0.5).abs() * 2.0
}

/// Expects finite input (see `FeatureSet::sanitized`).
pub fn normalize_features(f: &FeatureSet) -> NormalizedFeatureSet {
    NormalizedFeatureSet {
        perplexity: 1.0 - normalize_in(f.perplexity, PERPLEXITY_RANGE),
        ttr: 1.0 - normalize_in(f.ttr, TTR_RANGE),
        var_sent_len: 1.0 - normalize_in(f.var_sent_len, VAR_SENT_LEN_RANGE),
        repetition: normalize_in(f.repetition, REPETITION_RANGE),
        punct_ratio: normalize_in(f.punct_ratio, PUNCT_RATIO_RANGE),
        avg_sent_len: centered_peak(f.avg_sent_len),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_peak_shape() {
        assert_eq!(centered_peak(16.0), 1.0);
        assert_eq!(centered_peak(2.0), 0.0);
        assert_eq!(centered_peak(30.0), 0.0);
        assert_eq!(centered_peak(0.0), 0.0);
        assert_eq!(centered_peak(500.0), 0.0);
        assert!((centered_peak(9.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_inversions() {
        let n = normalize_features(&FeatureSet {
            perplexity: 10.0,
            ttr: 0.8,
            avg_sent_len: 16.0,
            var_sent_len: 0.0,
            punct_ratio: 0.08,
            repetition: 0.0,
        });
        assert_eq!(n.perplexity, 1.0);
        assert_eq!(n.ttr, 0.0);
        assert_eq!(n.var_sent_len, 1.0);
        assert_eq!(n.punct_ratio, 1.0);
        assert_eq!(n.repetition, 0.0);
        assert_eq!(n.avg_sent_len, 1.0);
    }
}
