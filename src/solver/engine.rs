//! Suggestion engine

use super::filter::{FilterPolicy, filter_by_history};
use super::strategy::{FirstStrategy, Strategy};
use crate::core::{History, Word};
use log::debug;

/// Suggests guesses consistent with a round's history
///
/// Holds a borrowed vocabulary; each call filters it afresh, so the solver
/// itself never changes.
pub struct Solver<'a, S: Strategy> {
    strategy: S,
    vocabulary: &'a [Word],
    policy: FilterPolicy,
}

impl<'a, S: Strategy> Solver<'a, S> {
    /// Create a new solver
    ///
    /// # Parameters
    /// - `strategy`: How to pick among the remaining candidates
    /// - `vocabulary`: Words that may be suggested, in preference order
    /// - `policy`: Extra pruning on top of the feedback constraints
    pub const fn new(strategy: S, vocabulary: &'a [Word], policy: FilterPolicy) -> Self {
        Self {
            strategy,
            vocabulary,
            policy,
        }
    }

    /// Get the next guess given the history so far
    ///
    /// Returns `None` when no word in the vocabulary is consistent with the history.
    pub fn next_guess(&self, history: &History) -> Option<&'a Word> {
        let candidates = self.get_candidates(history);
        let guess = self.strategy.select_guess(&candidates);
        debug!(
            "suggesting {:?} from {} candidates",
            guess.map(Word::text),
            candidates.len()
        );
        guess
    }

    /// Get the words still consistent with the history
    pub fn get_candidates(&self, history: &History) -> Vec<&'a Word> {
        filter_by_history(self.vocabulary, history, self.policy)
    }

    /// Count how many candidates remain given the history
    pub fn count_candidates(&self, history: &History) -> usize {
        self.get_candidates(history).len()
    }

    #[must_use]
    pub const fn strategy(&self) -> &S {
        &self.strategy
    }

    #[must_use]
    pub const fn policy(&self) -> FilterPolicy {
        self.policy
    }

    #[must_use]
    pub const fn vocabulary(&self) -> &'a [Word] {
        self.vocabulary
    }
}

/// Suggest the first vocabulary word consistent with `history`
///
/// Uses the default filter policy. Deterministic: identical inputs always
/// give the same word.
///
/// # Examples
/// ```
/// use wordle_six::core::{History, HistoryEntry, Word};
/// use wordle_six::solver::suggest_next;
///
/// let vocab: Vec<Word> = ["bpples", "apples"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let history = History::new()
///     .appended(HistoryEntry::evaluate(&vocab[0], &vocab[1]).unwrap());
///
/// assert_eq!(suggest_next(&vocab, &history).map(Word::text), Some("apples"));
/// ```
#[must_use]
pub fn suggest_next<'a>(vocabulary: &'a [Word], history: &History) -> Option<&'a Word> {
    Solver::new(FirstStrategy, vocabulary, FilterPolicy::default()).next_guess(history)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Feedback, HistoryEntry, LetterStatus};
    use crate::solver::StrategyType;

    fn setup_vocab() -> Vec<Word> {
        ["silver", "sliver", "garden", "danger", "ranged", "planet"]
            .iter()
            .map(|w| Word::new(*w).unwrap())
            .collect()
    }

    fn play(history: &History, guess: &Word, answer: &Word) -> History {
        history.appended(HistoryEntry::evaluate(guess, answer).unwrap())
    }

    #[test]
    fn next_guess_with_empty_history_is_first_word() {
        let vocab = setup_vocab();
        let solver = Solver::new(StrategyType::First, &vocab, FilterPolicy::default());
        assert_eq!(solver.next_guess(&History::new()).unwrap().text(), "silver");
    }

    #[test]
    fn next_guess_filters_candidates() {
        let vocab = setup_vocab();
        let solver = Solver::new(StrategyType::First, &vocab, FilterPolicy::default());

        let answer = Word::new("danger").unwrap();
        let history = play(&History::new(), &vocab[0], &answer);
        let next = solver.next_guess(&history).unwrap();

        assert_ne!(next.text(), "silver");
        assert!(solver.get_candidates(&history).contains(&&answer));
    }

    #[test]
    fn next_guess_returns_none_when_no_candidates() {
        let vocab = setup_vocab();
        let solver = Solver::new(StrategyType::First, &vocab, FilterPolicy::default());

        // Claim every letter of "bright" and of "planes" is absent
        let history = History::new()
            .appended(
                HistoryEntry::new(
                    Word::new("bright").unwrap(),
                    Feedback::new(vec![LetterStatus::Absent; 6]),
                )
                .unwrap(),
            )
            .appended(
                HistoryEntry::new(
                    Word::new("planes").unwrap(),
                    Feedback::new(vec![LetterStatus::Absent; 6]),
                )
                .unwrap(),
            );

        assert_eq!(solver.count_candidates(&history), 0);
        assert!(solver.next_guess(&history).is_none());
    }

    #[test]
    fn count_candidates_never_grows() {
        let vocab = setup_vocab();
        let solver = Solver::new(StrategyType::First, &vocab, FilterPolicy::default());
        let answer = Word::new("ranged").unwrap();

        let mut history = History::new();
        let mut previous = solver.count_candidates(&history);
        assert_eq!(previous, vocab.len());

        for guess in &vocab {
            history = play(&history, guess, &answer);
            let now = solver.count_candidates(&history);
            assert!(now <= previous);
            assert!(now >= 1);
            previous = now;
        }
    }

    #[test]
    fn suggest_next_is_deterministic() {
        let vocab = setup_vocab();
        let answer = Word::new("planet").unwrap();
        let history = play(&History::new(), &vocab[2], &answer);

        let first = suggest_next(&vocab, &history);
        let second = suggest_next(&vocab, &history);
        assert_eq!(first, second);
        assert!(first.is_some());
    }

    #[test]
    fn unique_letter_policy_changes_candidates() {
        let vocab: Vec<Word> = ["pepper", "planet"]
            .iter()
            .map(|w| Word::new(*w).unwrap())
            .collect();

        let strict = Solver::new(StrategyType::First, &vocab, FilterPolicy::UNIQUE_LETTERS);
        let loose = Solver::new(StrategyType::First, &vocab, FilterPolicy::default());

        assert_eq!(strict.next_guess(&History::new()).unwrap().text(), "planet");
        assert_eq!(loose.next_guess(&History::new()).unwrap().text(), "pepper");
    }
}
