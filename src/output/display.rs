//! Display functions for command results

use super::formatters::{colored_feedback, create_progress_bar, plural};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult, TestAllStatistics};
use colored::Colorize;
use std::collections::BTreeMap;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            colored_feedback(&step.feedback),
            step.feedback.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            if let Some(worst) = step.worst_case {
                println!("  Worst case: {worst} candidates");
            }
        }
    }

    println!();
    let count = result.steps.len();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {count} guess{}!", plural(count))
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {count} guess{}", plural(count))
                .red()
                .bold()
        );
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "WORD ANALYSIS:".bright_cyan().bold(),
        result.word.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = create_progress_bar(
        result.worst_case as f64,
        result.total_candidates as f64,
        30,
    );

    println!("\n📊 Against {} possible answers:", result.total_candidates);
    println!(
        "   Possible answer:   {}",
        if result.is_candidate {
            "yes".green()
        } else {
            "no".yellow()
        }
    );
    println!("   Frequency score:   {}", result.score);
    println!("   Adjusted score:    {}", result.adjusted_score);
    println!(
        "   Worst case:        [{}] {}",
        bar.yellow(),
        format!("{} candidates", result.worst_case).bright_yellow()
    );
    println!("   Feedback groups:   {}", result.groups);
    println!(
        "   Expected:          {:.1} candidates remain",
        result.expected_remaining
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!("   Solved:           {}", result.solved);
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        result.min_guesses.to_string().green()
    );
    println!(
        "   Worst case:       {}",
        result.max_guesses.to_string().yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    print_distribution(&result.distribution, result.total_words);

    if !result.failures.is_empty() {
        println!("\n😰 {}", "Not solved:".red().bold());
        for word in &result.failures {
            println!("   {}", word.text().to_uppercase().red());
        }
    }
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ({}) ", stats.strategy);
    println!("{}", "═".repeat(70));

    let total = stats.total_words.max(1) as f64;

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total words tested:  {}", stats.total_words);
    println!(
        "  Successfully solved: {} {}",
        stats.solved,
        format!("({:.1}%)", stats.solved as f64 / total * 100.0).green()
    );
    if !stats.failures.is_empty() {
        println!(
            "  Failed to solve:     {} {}",
            stats.failures.len(),
            format!("({:.1}%)", stats.failures.len() as f64 / total * 100.0).red()
        );
    }
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Guess range:         {}-{}",
        stats.min_guesses, stats.max_guesses
    );
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );
    println!(
        "  Time per word:       {:.1}ms",
        stats.total_time.as_millis() as f64 / total
    );

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    print_distribution(&stats.guess_distribution, stats.solved);

    if !stats.hardest_words.is_empty() {
        println!("\n🧗 {}", "Hardest Words".yellow().bold());
        for (word, guesses) in stats.hardest_words.iter().take(5) {
            println!(
                "  {} ({guesses} guess{})",
                word.text().to_uppercase().yellow(),
                plural(*guesses)
            );
        }
    }

    if !stats.failures.is_empty() {
        println!("\n❌ {}", "Not Solved".red().bold());
        for word in &stats.failures {
            println!("  {}", word.text().to_uppercase().red());
        }
    }

    println!("\n🎯 First Guess Usage");
    let mut first_guesses: Vec<_> = stats.first_guesses.iter().collect();
    first_guesses.sort_by_key(|(_, count)| std::cmp::Reverse(**count));
    for (word, count) in first_guesses.iter().take(5) {
        println!(
            "  {}: {count} times ({:.1}%)",
            word.text().to_uppercase(),
            **count as f64 / total * 100.0
        );
    }
    println!();
}

fn print_distribution(distribution: &BTreeMap<usize, usize>, total: usize) {
    let max_count = distribution.values().max().copied().unwrap_or(1);
    for (&guesses, &count) in distribution {
        let pct = count as f64 / total.max(1) as f64 * 100.0;
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!("   {guesses}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
