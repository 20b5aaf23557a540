// Colored terminal output for frequency tables, cliques, and similarity.
//
// main.rs delegates all human-readable rendering here; the `--json` path
// bypasses this module entirely.

use std::fmt::Display;

use colored::Colorize;

use crate::dataset::models::Clique;
use crate::frequency::FrequencyTable;
use crate::pipeline::timeline::TimelineStep;
use crate::similarity::{SimilarityMetric, SimilarityReport};

/// Longest clique rendering before truncation.
const MAX_CLIQUE_CHARS: usize = 100;

/// Display the top `top_n` rows of a frequency table with proportional bars.
pub fn display_frequency_table<K>(
    title: &str,
    table: &FrequencyTable<K>,
    top_n: usize,
    label: impl Fn(&K) -> String,
) {
    if table.is_empty() {
        println!("No {title} to show; the selected cliques are empty.");
        return;
    }

    println!(
        "\n{}",
        format!(
            "=== {} ({} distinct, {} total) ===",
            title,
            table.len(),
            table.total()
        )
        .bold()
    );
    println!();

    let bar_width: usize = 20;
    let max_count = table.top(1).first().map(|(_, c)| *c).unwrap_or(1).max(1);

    for (i, (key, count)) in table.top(top_n).iter().enumerate() {
        let filled = ((*count as f64 / max_count as f64) * bar_width as f64).round() as usize;
        let bar = format!(
            "[{}{}]",
            "=".repeat(filled),
            " ".repeat(bar_width.saturating_sub(filled))
        );
        let name = super::truncate_chars(&label(key), 40);
        println!("  {:>4}. {:<42} {} {}", i + 1, name, bar.bright_green(), count);
    }

    if table.len() > top_n {
        println!(
            "  {}",
            format!("... {} more not shown", table.len() - top_n).dimmed()
        );
    }
}

/// Display an extracted clique collection.
pub fn display_cliques<E: Display>(title: &str, cliques: &[Clique<E>]) {
    println!(
        "\n{}",
        format!("=== {} ({} cliques) ===", title, cliques.len()).bold()
    );
    if cliques.is_empty() {
        println!("  {}", "none".dimmed());
        return;
    }
    for (i, clique) in cliques.iter().enumerate() {
        let rendered = super::truncate_chars(&super::format_members(clique.members()), MAX_CLIQUE_CHARS);
        println!("  {:>4}. {} {}", i + 1, rendered, format!("[{}]", clique.len()).dimmed());
    }
}

/// Display one similarity score, or all of them.
pub fn display_similarity_report(report: &SimilarityReport, only: Option<SimilarityMetric>) {
    println!(
        "\n{}",
        format!(
            "=== Similarity ({} vs {} cliques) ===",
            report.left_size, report.right_size
        )
        .bold()
    );

    let metrics: Vec<SimilarityMetric> = match only {
        Some(metric) => vec![metric],
        None => SimilarityMetric::ALL.to_vec(),
    };
    for metric in metrics {
        let score = report.get(metric);
        println!("  {:<16} {}", metric.as_str(), colorize_score(score));
    }
}

/// Display a slice-to-slice similarity series.
pub fn display_timeline(steps: &[TimelineStep], metric: SimilarityMetric) {
    if steps.is_empty() {
        println!("Fewer than two time slices touch this reference set; nothing to compare.");
        return;
    }

    println!(
        "\n{}",
        format!("=== {} timeline ({} steps) ===", metric, steps.len()).bold()
    );
    println!(
        "  {:>6} -> {:<6} {:>8} {:>8}  {}",
        "From".dimmed(),
        "To".dimmed(),
        "Cliques".dimmed(),
        "Cliques".dimmed(),
        "Score".dimmed(),
    );
    println!("  {}", "-".repeat(44).dimmed());
    for step in steps {
        println!(
            "  {:>6} -> {:<6} {:>8} {:>8}  {}",
            step.from,
            step.to,
            step.from_cliques,
            step.to_cliques,
            colorize_score(step.similarity)
        );
    }
}

/// Color a [0, 1] score: high green, middling yellow, low red.
fn colorize_score(score: f64) -> colored::ColoredString {
    let text = format!("{score:.3}");
    if score >= 0.66 {
        text.green()
    } else if score >= 0.33 {
        text.yellow()
    } else {
        text.red()
    }
}
