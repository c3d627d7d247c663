//! Display functions for command results

use super::formatters::spaced_word;
use crate::commands::{GuessStep, SolveResult};
use crate::core::Symbols;
use colored::Colorize;

fn format_step(turn: usize, step: &GuessStep, symbols: &Symbols) -> String {
    let reduction = if step.candidates_after == 0 {
        String::new()
    } else {
        format!(
            "{} → {} candidates",
            step.candidates_before, step.candidates_after
        )
    };
    format!(
        "{turn}. {} {}  {}",
        spaced_word(&step.word).to_uppercase(),
        step.feedback.render(symbols),
        reduction.bright_black()
    )
}

/// Print each guess the suggester made and whether it found the answer
pub fn print_solve_result(result: &SolveResult, symbols: &Symbols, show_candidates: bool) {
    let rule = "─".repeat(50);
    println!("\n{}", rule.cyan());
    println!(
        "Answer: {}",
        spaced_word(&result.target).to_uppercase().bright_yellow().bold()
    );
    println!("{}\n", rule.cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        if show_candidates {
            println!("{}", format_step(i + 1, step, symbols));
        } else {
            println!(
                "{}. {} {}",
                i + 1,
                spaced_word(&step.word).to_uppercase(),
                step.feedback.render(symbols)
            );
        }
    }

    let verdict = match (result.success, result.guesses.len()) {
        (true, 1) => "Solved in 1 guess!".to_string(),
        (true, n) => format!("Solved in {n} guesses!"),
        (false, n) => format!("Not solved after {n} guesses"),
    };
    println!();
    if result.success {
        println!("{}", verdict.green().bold());
    } else {
        println!("{}", verdict.red().bold());
    }
}
