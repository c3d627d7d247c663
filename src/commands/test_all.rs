//! Test all answers
//!
//! Runs the solver against every answer word and collects statistics.

use super::solve::solve_word;
use crate::core::{Rules, Word};
use crate::output::formatters::create_progress_bar;
use crate::solver::{Solver, Strategy};
use anyhow::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result from testing a single word
#[derive(Debug, Clone)]
pub struct WordTestResult {
    pub word: String,
    pub guesses: Vec<String>,
    pub success: bool,
}

/// Statistics from testing all words
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    pub guess_distribution: FxHashMap<usize, usize>,
    pub max_guesses: usize,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub hardest_words: Vec<(String, usize)>,
    pub failed_words: Vec<String>,
}

impl TestAllStatistics {
    /// Percentage of tested words solved within the budget
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_words == 0 {
            0.0
        } else {
            self.solved as f64 / self.total_words as f64 * 100.0
        }
    }
}

/// Run the solver on all answer words (or the first `limit` of them)
///
/// # Errors
///
/// Returns an error if an answer word does not fit the rules.
pub fn run_test_all<S: Strategy>(
    solver: &Solver<S>,
    rules: &Rules,
    answers: &[Word],
    limit: Option<usize>,
    show_progress: bool,
) -> Result<TestAllStatistics> {
    let test_words = &answers[..limit.unwrap_or(answers.len()).min(answers.len())];
    info!("testing {} words", test_words.len());

    let pb = if show_progress {
        ProgressBar::new(test_words.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let total_start = Instant::now();
    let mut results = Vec::with_capacity(test_words.len());

    for (idx, answer) in test_words.iter().enumerate() {
        let solved = solve_word(answer.text(), rules, solver)?;
        results.push(WordTestResult {
            word: solved.target,
            guesses: solved.guesses.into_iter().map(|step| step.word).collect(),
            success: solved.success,
        });

        if idx % 10 == 0 {
            let avg = results.iter().map(|r| r.guesses.len()).sum::<usize>() as f64
                / results.len() as f64;
            pb.set_message(format!("Avg: {avg:.2}"));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    Ok(summarize(&results, rules.max_guesses, total_start.elapsed()))
}

fn summarize(
    results: &[WordTestResult],
    max_guesses: usize,
    total_time: Duration,
) -> TestAllStatistics {
    let mut guess_distribution: FxHashMap<usize, usize> = FxHashMap::default();
    for result in results.iter().filter(|r| r.success) {
        *guess_distribution.entry(result.guesses.len()).or_insert(0) += 1;
    }

    let solved = results.iter().filter(|r| r.success).count();
    let total_guesses: usize = results
        .iter()
        .filter(|r| r.success)
        .map(|r| r.guesses.len())
        .sum();
    let average_guesses = if solved > 0 {
        total_guesses as f64 / solved as f64
    } else {
        0.0
    };

    let mut hardest_words: Vec<(String, usize)> = results
        .iter()
        .filter(|r| r.success && r.guesses.len() + 1 >= max_guesses)
        .map(|r| (r.word.clone(), r.guesses.len()))
        .collect();
    hardest_words.sort_by_key(|(_, n)| std::cmp::Reverse(*n));
    hardest_words.truncate(10);

    let failed_words = results
        .iter()
        .filter(|r| !r.success)
        .map(|r| r.word.clone())
        .collect();

    TestAllStatistics {
        total_words: results.len(),
        solved,
        failed: results.len() - solved,
        guess_distribution,
        max_guesses,
        total_time,
        average_guesses,
        hardest_words,
        failed_words,
    }
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total words tested:  {}", stats.total_words);
    println!(
        "  Successfully solved: {} {}",
        stats.solved,
        format!("({:.1}%)", stats.win_rate()).green()
    );
    if stats.failed > 0 {
        println!(
            "  Failed to solve:     {} {}",
            stats.failed,
            format!("({:.1}%)", 100.0 - stats.win_rate()).red()
        );
    }
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = stats.guess_distribution.values().copied().max().unwrap_or(0);
    for guesses in 1..=stats.max_guesses {
        let count = stats.guess_distribution.get(&guesses).copied().unwrap_or(0);
        let percentage = if stats.solved > 0 {
            count as f64 / stats.solved as f64 * 100.0
        } else {
            0.0
        };
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!("  {guesses} guesses: {} {count:4} ({percentage:5.1}%)", bar.green());
    }

    if !stats.hardest_words.is_empty() {
        println!("\n😰 {}", "Hardest Words".yellow().bold());
        for (word, guesses) in stats.hardest_words.iter().take(5) {
            println!("  {} ({} guesses)", word.to_uppercase().yellow(), guesses);
        }
    }

    if !stats.failed_words.is_empty() {
        println!("\n❌ {}", "Not Solved".red().bold());
        for word in stats.failed_words.iter().take(10) {
            println!("  {}", word.to_uppercase().red());
        }
    }
}
