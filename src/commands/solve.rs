//! Word solving command
//!
//! Plays the suggester against a known answer and records every step.

use crate::core::{Feedback, History, HistoryEntry, Rules, Word};
use crate::solver::{Solver, Strategy};
use anyhow::{Context, Result, bail};
use log::debug;

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

/// A single guess step in the solution
#[derive(Debug, Clone)]
pub struct GuessStep {
    pub word: String,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve `target` with the given solver, within the rules' guess budget
///
/// Stops early if no candidate is left, which only happens when the target
/// is missing from the solver's vocabulary.
///
/// # Errors
///
/// Returns an error if the target is not a valid word for the rules.
pub fn solve_word<S: Strategy>(
    target: &str,
    rules: &Rules,
    solver: &Solver<S>,
) -> Result<SolveResult> {
    let answer = rules
        .word(target)
        .with_context(|| format!("Invalid target word '{target}'"))?;

    let mut history = History::new();
    let mut guesses = Vec::new();
    let mut success = false;

    while !rules.has_lost(history.len()) {
        let candidates_before = solver.count_candidates(&history);
        let Some(guess) = solver.next_guess(&history) else {
            debug!("no candidates left for {}", answer.text());
            break;
        };

        let feedback = rules.classify(guess, &answer)?;
        history = history.appended(HistoryEntry::new(guess.clone(), feedback.clone())?);
        let candidates_after = solver.count_candidates(&history);

        guesses.push(GuessStep {
            word: guess.text().to_string(),
            feedback,
            candidates_before,
            candidates_after,
        });

        if rules.has_won(guess, &answer) {
            success = true;
            break;
        }
    }

    Ok(SolveResult {
        success,
        guesses,
        target: answer.text().to_string(),
    })
}

/// Check a target is a word the solver can reach
///
/// # Errors
///
/// Returns an error if `target` is not in `vocabulary`.
pub fn require_known(target: &Word, vocabulary: &[Word]) -> Result<()> {
    if !vocabulary.contains(target) {
        bail!("'{}' is not in the word list", target.text());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{FilterPolicy, StrategyType};
    use crate::wordlists::VOCAB;
    use crate::wordlists::loader::words_from_slice;

    fn vocab() -> Vec<Word> {
        words_from_slice(VOCAB)
    }

    #[test]
    fn solves_every_reachable_word_in_budget_or_reports_failure() {
        let vocab = vocab();
        let solver = Solver::new(StrategyType::First, &vocab, FilterPolicy::default());
        let result = solve_word("planet", &Rules::default(), &solver).unwrap();

        assert!(!result.guesses.is_empty());
        assert!(result.guesses.len() <= 6);
        if result.success {
            assert_eq!(result.guesses.last().unwrap().word, "planet");
            assert!(result.guesses.last().unwrap().feedback.is_perfect());
        }
    }

    #[test]
    fn candidates_never_grow() {
        let vocab = vocab();
        let solver = Solver::new(StrategyType::Frequency, &vocab, FilterPolicy::default());
        let result = solve_word("silver", &Rules::default(), &solver).unwrap();

        for step in &result.guesses {
            assert!(step.candidates_after <= step.candidates_before);
            assert!(step.candidates_after >= 1);
        }
    }

    #[test]
    fn first_word_solves_in_one() {
        let vocab = vocab();
        let solver = Solver::new(StrategyType::First, &vocab, FilterPolicy::default());
        let first = vocab[0].text().to_string();
        let result = solve_word(&first, &Rules::default(), &solver).unwrap();

        assert!(result.success);
        assert_eq!(result.guesses.len(), 1);
        assert_eq!(result.guesses[0].candidates_after, 1);
    }

    #[test]
    fn respects_guess_budget() {
        let vocab = vocab();
        let solver = Solver::new(StrategyType::First, &vocab, FilterPolicy::default());
        let result = solve_word("yellow", &Rules::new(6, 2), &solver).unwrap();
        assert!(result.guesses.len() <= 2);
    }

    #[test]
    fn invalid_target_is_an_error() {
        let vocab = vocab();
        let solver = Solver::new(StrategyType::First, &vocab, FilterPolicy::default());
        assert!(solve_word("plan", &Rules::default(), &solver).is_err());
        assert!(solve_word("pl4net", &Rules::default(), &solver).is_err());
    }

    #[test]
    fn unknown_target_is_rejected() {
        let vocab = vocab();
        assert!(require_known(&Word::new("zzzzzz").unwrap(), &vocab).is_err());
        assert!(require_known(&Word::new("planet").unwrap(), &vocab).is_ok());
    }
}
