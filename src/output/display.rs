//! Display functions for command results

use crate::commands::{BenchmarkResult, PrepareResult, ScoreReport};
use crate::possibilities::PossibleWord;
use colored::Colorize;

/// Print a ranked possibility list, capped at `limit` entries
pub fn print_possibilities(words: &[PossibleWord], limit: usize) {
    if words.is_empty() {
        println!("{}", "No formable words for this rack.".yellow());
        return;
    }

    println!(
        "\n{} formable {}:",
        words.len().to_string().bright_cyan().bold(),
        if words.len() == 1 { "word" } else { "words" }
    );

    for possibility in words.iter().take(limit) {
        println!(
            "  {:<8} {}",
            possibility.word.bright_white().bold(),
            format!("{} pts", possibility.score).cyan()
        );
    }

    if words.len() > limit {
        println!("  … and {} more", words.len() - limit);
    }
}

/// Print a placement scoring report
pub fn print_score_report(report: &ScoreReport) {
    println!("\n{}", "─".repeat(50).cyan());
    let labels = report.bonus_labels();

    for (placement, label) in report.placements.iter().zip(&labels) {
        let bonus = if label.is_empty() {
            String::new()
        } else {
            format!("  [{label}]")
        };
        println!(
            "  {} at ({},{})  {} pts{}",
            placement.letter.to_string().bright_white().bold(),
            placement.row,
            placement.col,
            placement.letter.value(),
            bonus.bright_yellow()
        );
    }

    println!("{}", "─".repeat(50).cyan());
    println!(
        "  Base {}  ×{}  =  {}",
        report.breakdown.base,
        report.breakdown.word_multiplier,
        report.breakdown.total.to_string().green().bold()
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Dictionary size:  {}", result.dictionary_size);
    println!("   Racks tested:     {}", result.total_racks);
    println!(
        "   Words per rack:   {}",
        format!("{:.1}", result.average_words_per_rack)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Fewest found:     {}",
        format!("{}", result.min_words).yellow()
    );
    println!(
        "   Most found:       {}",
        format!("{}", result.max_words).green()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Racks/second:     {:.1}", result.racks_per_second);
}

/// Print the result of word-list preparation
pub fn print_prepare_result(result: &PrepareResult) {
    println!(
        "{} Read {} lines, wrote {} words.",
        "✓".green().bold(),
        result.lines_read,
        result.words_written
    );
}
