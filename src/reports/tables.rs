use super::{feature_rows, SCORE_PRECISION};
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use proseforge::api::AnalysisReport;
use proseforge::oracle::PerplexitySource;
use proseforge::scorer::Verdict;

fn verdict_color(v: Verdict) -> Color {
    match v {
        Verdict::HighProbabilityAi => Color::Red,
        Verdict::Indeterminate => Color::Yellow,
        Verdict::LikelyHuman => Color::Green,
    }
}

pub fn summary_table(report: &AnalysisReport) -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let color = verdict_color(report.verdict);
    table.add_row(vec![
        Cell::new("AI Score").add_attribute(Attribute::Bold),
        Cell::new(format!("{:.*}%", SCORE_PRECISION, report.score))
            .fg(color)
            .add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Verdict").add_attribute(Attribute::Bold),
        Cell::new(format!("{} {}", report.verdict.marker(), report.verdict)).fg(color),
    ]);

    for (key, label, value) in feature_rows(&report.features) {
        let value = if key == "perplexity" && report.perplexity_source == PerplexitySource::Default {
            format!("{} (default)", value)
        } else {
            value
        };
        table.add_row(vec![Cell::new(label), Cell::new(value)]);
    }

    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }
    table
}

pub fn summary(report: &AnalysisReport) {
    println!("\n=== RESULT ===");
    println!("{}", summary_table(report));

    println!("\nNotes:");
    println!("- This is a heuristic estimate: no detector is infallible.");
    if report.short_text {
        println!(
            "- ⚠️  Only {} words: very short texts are hard to classify.",
            report.word_count
        );
    }
    println!("- Adjust weights or thresholds with --weights or the --weight-* flags.");
}

pub fn breakdown_table(report: &AnalysisReport) -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Term").add_attribute(Attribute::Bold),
        Cell::new("Signal"),
        Cell::new("Weight"),
        Cell::new("Points").fg(Color::Cyan),
    ]);

    for i in 1..=3 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for t in &report.details.terms {
        table.add_row(vec![
            Cell::new(t.term.to_string()).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.3}", t.signal)),
            Cell::new(format!("{:.2}", t.weight)),
            Cell::new(format!("{:.2}", t.points)).fg(Color::Cyan),
        ]);
    }

    table.add_row(vec![
        Cell::new("total").add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(""),
        Cell::new(format!("{:.2}", report.score)).add_attribute(Attribute::Bold),
    ]);
    table
}

pub fn breakdown(report: &AnalysisReport) {
    println!("\n{}", breakdown_table(report));
}
