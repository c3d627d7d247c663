//! Formatting utilities for terminal output
//!
//! Everything here returns a `String` so the same text can go to stdout, a
//! test buffer or a TUI widget.

use crate::core::{Feedback, History, Symbols};
use crate::game::{Stats, keyboard_summary};
use std::fmt::Write;

/// Width of the rule printed between history entries
pub const RULE_WIDTH: usize = 15;

/// A word with a space before each letter, as in `" p l a n e t"`
#[must_use]
pub fn spaced_word(word: &str) -> String {
    word.chars().fold(String::new(), |mut out, c| {
        out.push(' ');
        out.push(c);
        out
    })
}

/// Feedback drawn with the given symbol set
#[must_use]
pub fn feedback_symbols(feedback: &Feedback, symbols: &Symbols) -> String {
    feedback.render(symbols)
}

/// Every guess so far with its feedback underneath
///
/// ```text
/// ---------------
/// Guess 1:  g a r d e n
///          ⬛🟨⬛⬛🟩🟨
/// ---------------
/// ```
#[must_use]
pub fn format_history(history: &History, symbols: &Symbols) -> String {
    let rule = "-".repeat(RULE_WIDTH);
    let mut out = format!("{rule}\n");
    for (i, entry) in history.iter().enumerate() {
        let _ = writeln!(
            out,
            "Guess {}: {}\n         {}\n{rule}",
            i + 1,
            spaced_word(entry.guess().text()),
            feedback_symbols(entry.feedback(), symbols)
        );
    }
    out
}

/// What the history reveals about each letter, two letters per row
#[must_use]
pub fn format_keyboard(history: &History, symbols: &Symbols) -> String {
    let keys = keyboard_summary(history);
    let mut out = format!("\nKeyboard information\n{}\n", "-".repeat(12));
    for pair in keys.chunks(2) {
        let cells: Vec<String> = pair
            .iter()
            .map(|(letter, status)| format!("{letter}: {}", symbols.key(*status)))
            .collect();
        let _ = writeln!(out, "{}", cells.join("\t"));
    }
    out
}

/// Wins per guess count and losses
#[must_use]
pub fn format_stats(stats: &Stats) -> String {
    let mut out = String::from("\nGames won in:\n");
    for (i, count) in stats.wins_by_guesses().iter().enumerate() {
        let _ = writeln!(out, "{} moves: {count}", i + 1);
    }
    let _ = writeln!(out, "Games lost: {}", stats.losses());
    out
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
