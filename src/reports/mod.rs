mod plain;
mod tables;

pub use self::plain::{render_json, render_plain};
pub use self::tables::{breakdown as print_breakdown_report, summary as print_summary_report};

use proseforge::features::FeatureSet;
use strum_macros::{Display, EnumString};

#[derive(Debug, Clone, Copy, EnumString, Display, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum OutputFormat {
    Table,
    Plain,
    Json,
}

/// `(key, label, precision)` for each raw feature, in report order. Every
/// renderer goes through this so the printed numbers agree across formats.
pub const FEATURE_ROWS: [(&str, &str, usize); 6] = [
    ("perplexity", "Perplexity", 2),
    ("ttr", "Type-Token Ratio", 3),
    ("avg_sent_len", "Avg Sentence Length (words)", 2),
    ("var_sent_len", "Sentence Length Variance", 3),
    ("punct_ratio", "Punctuation Ratio", 4),
    ("repetition", "N-gram Repetition", 4),
];

pub const SCORE_PRECISION: usize = 1;

fn feature_values(f: &FeatureSet) -> [f64; 6] {
    [
        f.perplexity,
        f.ttr,
        f.avg_sent_len,
        f.var_sent_len,
        f.punct_ratio,
        f.repetition,
    ]
}

/// `(key, label, formatted value)` for each feature, in report order.
pub fn feature_rows(f: &FeatureSet) -> Vec<(&'static str, &'static str, String)> {
    FEATURE_ROWS
        .iter()
        .zip(feature_values(f))
        .map(|(&(key, label, prec), v)| (key, label, format!("{:.*}", prec, v)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_rows_follow_table_order() {
        let rows = feature_rows(&FeatureSet::default());
        let keys: Vec<&str> = rows.iter().map(|(k, _, _)| *k).collect();
        assert_eq!(
            keys,
            vec!["perplexity", "ttr", "avg_sent_len", "var_sent_len", "punct_ratio", "repetition"]
        );
        assert_eq!(rows[5].1, "N-gram Repetition");
        assert_eq!(rows[0].2, "100.00");
        assert_eq!(rows[4].2, "0.0200");
    }
}
