use super::{feature_rows, SCORE_PRECISION};
use proseforge::api::AnalysisReport;
use proseforge::error::DtResult;
use proseforge::oracle::PerplexitySource;
use proseforge::scorer::Verdict;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write;

pub fn render_plain(report: &AnalysisReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "score: {:.*}", SCORE_PRECISION, report.score);
    let _ = writeln!(out, "verdict: {}", report.verdict);
    for (key, _, value) in feature_rows(&report.features) {
        let _ = writeln!(out, "{}: {}", key, value);
    }
    let _ = writeln!(out, "perplexity_source: {}", report.perplexity_source);
    out
}

#[derive(Serialize)]
struct JsonReport<'a> {
    score: f64,
    verdict: Verdict,
    label: String,
    features: BTreeMap<&'static str, f64>,
    perplexity_source: PerplexitySource,
    word_count: usize,
    sentence_count: usize,
    short_text: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    breakdown: Option<&'a [proseforge::scorer::TermContribution]>,
}

/// Values are rounded exactly as the text reports print them.
fn rounded(formatted: &str) -> f64 {
    formatted.parse().unwrap_or(f64::NAN)
}

pub fn render_json(report: &AnalysisReport, with_breakdown: bool) -> DtResult<String> {
    let features = feature_rows(&report.features)
        .into_iter()
        .map(|(key, _, value)| (key, rounded(&value)))
        .collect();

    let json = JsonReport {
        score: rounded(&format!("{:.*}", SCORE_PRECISION, report.score)),
        verdict: report.verdict,
        label: report.verdict.to_string(),
        features,
        perplexity_source: report.perplexity_source,
        word_count: report.word_count,
        sentence_count: report.sentence_count,
        short_text: report.short_text,
        breakdown: with_breakdown.then_some(report.details.terms.as_slice()),
    };
    Ok(serde_json::to_string_pretty(&json)?)
}
