//! Display functions for command results

use super::formatters::{create_progress_bar, format_duration, placement};
use crate::commands::{BenchmarkResult, CheckResult, SearchOutcome};
use colored::Colorize;

/// Print a ranked word list, at most `limit` rows
pub fn print_search_outcome(outcome: &SearchOutcome, limit: usize) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("{}", outcome.title.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    if outcome.results.is_empty() {
        println!("\n  {}", "No words found.".bright_black());
    }

    let best = outcome.results.first().map_or(1, |r| r.points.max(1));
    for (i, result) in outcome.results.iter().take(limit).enumerate() {
        let bar = create_progress_bar(f64::from(result.points), f64::from(best), 12);
        print!(
            "{:>4}. {:<12} {:>3} {}",
            (i + 1).to_string().bright_black(),
            result.word.bright_white().bold(),
            result.points.to_string().bright_yellow(),
            bar.green()
        );
        if let Some(pattern) = &outcome.pattern {
            print!("  {}", placement(pattern, result));
        }
        println!();
    }

    let shown = outcome.results.len().min(limit);
    println!(
        "\n{} of {} words in {}\n",
        shown,
        outcome.results.len(),
        format_duration(outcome.duration)
    );
}

/// Print whether a word is valid and its value
pub fn print_check_result(result: &CheckResult) {
    if result.valid {
        println!(
            "✅ {} is a word worth {} points\n",
            result.word.bright_white().bold(),
            result.points.to_string().bright_yellow()
        );
    } else {
        println!(
            "❌ {} is not in the word list (would score {})\n",
            result.word.bright_white().bold(),
            result.points
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Cases run:        {}", result.total_cases);
    println!("   Words found:      {}", result.total_words);
    println!(
        "   Rack search:      {}",
        format_duration(result.mean_subset).bright_yellow()
    );
    println!(
        "   Filtered search:  {}",
        format_duration(result.mean_filtered).bright_yellow()
    );
    println!(
        "   Pattern search:   {}",
        format_duration(result.mean_pattern).bright_yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Cases/second:     {:.1}", result.cases_per_second);

    if let Some(slowest) = &result.slowest {
        println!(
            "\n🐢 Slowest rack: {} ({})",
            slowest.rack.bright_white().bold(),
            format_duration(slowest.subset + slowest.filtered + slowest.pattern)
        );
    }
}
