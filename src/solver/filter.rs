//! Candidate filtering
//!
//! Narrows a vocabulary to the words consistent with every piece of feedback
//! seen so far. Filtering never mutates its input; it yields a new reduced set.

use crate::core::{History, HistoryEntry, LetterStatus, Word};
use log::debug;

/// Extra pruning applied on top of the feedback constraints
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterPolicy {
    /// Discard every candidate with a repeated letter
    ///
    /// Assumes answers never repeat a letter. That holds for some answer lists
    /// but not in general, so it is off by default.
    pub reject_repeated_letters: bool,
}

impl FilterPolicy {
    /// Policy that also assumes answers have no repeated letters
    pub const UNIQUE_LETTERS: Self = Self {
        reject_repeated_letters: true,
    };

    /// Check the policy's own restrictions
    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        !(self.reject_repeated_letters && word.has_repeated_letters())
    }
}

/// Check whether `candidate` could be the answer given one guess's feedback
///
/// - `Correct` at `i` requires the same letter at `i`.
/// - `Misplaced` at `i` requires the letter somewhere, but not at `i`.
/// - `Absent` excludes the letter entirely, unless another position of the same
///   guess still accounts for that letter (`Correct`, or the one `Misplaced`
///   occurrence kept for a repeat). Then it only excludes the letter at `i`.
#[must_use]
pub fn entry_allows(entry: &HistoryEntry, candidate: &Word) -> bool {
    let guess = entry.guess();
    if candidate.len() != guess.len() {
        return false;
    }

    entry
        .feedback()
        .statuses()
        .iter()
        .enumerate()
        .all(|(i, &status)| {
            let letter = guess.letter_at(i);
            match status {
                LetterStatus::Correct => candidate.letter_at(i) == letter,
                LetterStatus::Misplaced => {
                    candidate.has_letter(letter) && candidate.letter_at(i) != letter
                }
                LetterStatus::Absent => {
                    if is_accounted_elsewhere(entry, letter) {
                        candidate.letter_at(i) != letter
                    } else {
                        !candidate.has_letter(letter)
                    }
                }
            }
        })
}

/// True if some position of the entry's guess holds `letter` not marked `Absent`
fn is_accounted_elsewhere(entry: &HistoryEntry, letter: u8) -> bool {
    entry
        .guess()
        .positions_of(letter)
        .iter()
        .any(|&i| entry.feedback().status_at(i) != LetterStatus::Absent)
}

/// Check a candidate against the whole history and the policy
#[must_use]
pub fn is_consistent(candidate: &Word, history: &History, policy: FilterPolicy) -> bool {
    policy.admits(candidate) && history.iter().all(|entry| entry_allows(entry, candidate))
}

/// Filter a vocabulary down to the words consistent with `history`
///
/// Order is preserved, so filtering an already filtered set with the same
/// history returns the same set.
///
/// # Examples
/// ```
/// use wordle_six::core::{History, HistoryEntry, Word};
/// use wordle_six::solver::{FilterPolicy, filter_by_history};
///
/// let vocab: Vec<Word> = ["silver", "sliver", "planet"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let answer = Word::new("sliver").unwrap();
/// let history = History::new()
///     .appended(HistoryEntry::evaluate(&vocab[0], &answer).unwrap());
///
/// let remaining = filter_by_history(&vocab, &history, FilterPolicy::default());
/// assert_eq!(remaining, vec![&answer]);
/// ```
pub fn filter_by_history<'a, I>(
    vocabulary: I,
    history: &History,
    policy: FilterPolicy,
) -> Vec<&'a Word>
where
    I: IntoIterator<Item = &'a Word>,
{
    let mut before = 0;
    let remaining: Vec<&'a Word> = vocabulary
        .into_iter()
        .inspect(|_| before += 1)
        .filter(|word| is_consistent(word, history, policy))
        .collect();

    debug!(
        "filtered {before} words to {} over {} guesses",
        remaining.len(),
        history.len()
    );
    remaining
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn history_for(answer: &str, guesses: &[&str]) -> History {
        let answer = Word::new(answer).unwrap();
        guesses
            .iter()
            .map(|g| HistoryEntry::evaluate(&Word::new(*g).unwrap(), &answer).unwrap())
            .collect()
    }

    fn texts<'a>(words: &[&'a Word]) -> Vec<&'a str> {
        words.iter().map(|w| w.text()).collect()
    }

    #[test]
    fn empty_history_keeps_everything() {
        let vocab = words(&["planet", "garden", "pepper"]);
        let remaining = filter_by_history(&vocab, &History::new(), FilterPolicy::default());
        assert_eq!(remaining.len(), 3);
    }

    #[test]
    fn correct_letters_pin_positions() {
        let vocab = words(&["planet", "planes", "plaque", "garden"]);
        let history = history_for("planet", &["planes"]);
        let remaining = filter_by_history(&vocab, &history, FilterPolicy::default());
        assert_eq!(texts(&remaining), vec!["planet"]);
    }

    #[test]
    fn misplaced_requires_letter_elsewhere() {
        // r is misplaced at 0: candidates need an r, but not first
        let entry = HistoryEntry::new(
            Word::new("rabbit").unwrap(),
            Feedback::parse("Y-----", 6).unwrap(),
        )
        .unwrap();
        assert!(entry_allows(&entry, &Word::new("corner").unwrap()));
        assert!(!entry_allows(&entry, &Word::new("rocket").unwrap()));
        assert!(!entry_allows(&entry, &Word::new("summon").unwrap()));
    }

    #[test]
    fn absent_excludes_letter() {
        let entry = HistoryEntry::new(
            Word::new("bright").unwrap(),
            Feedback::parse("------", 6).unwrap(),
        )
        .unwrap();
        assert!(entry_allows(&entry, &Word::new("planes").unwrap()));
        assert!(!entry_allows(&entry, &Word::new("planet").unwrap()));
    }

    #[test]
    fn absent_repeat_of_correct_letter_is_not_total_absence() {
        // "pepper" vs "planet": p at 0 correct, other p's absent
        let history = history_for("planet", &["pepper"]);
        let entry = &history.entries()[0];
        assert!(entry_allows(entry, &Word::new("planet").unwrap()));
        assert!(!entry_allows(entry, &Word::new("garden").unwrap()));
    }

    #[test]
    fn absent_repeat_of_misplaced_letter_keeps_answer() {
        // "eerily" vs "planet": first e misplaced, second e absent
        let history = history_for("planet", &["eerily"]);
        let entry = &history.entries()[0];
        assert!(entry_allows(entry, &Word::new("planet").unwrap()));
        // e at position 1 is ruled out by the absent repeat
        assert!(!entry_allows(entry, &Word::new("pewter").unwrap()));
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let history = history_for("planet", &["garden"]);
        let five = Word::with_length("plant", 5).unwrap();
        assert!(!entry_allows(&history.entries()[0], &five));
    }

    #[test]
    fn answer_always_survives() {
        let vocab = words(&[
            "planet", "garden", "pepper", "letter", "better", "silver", "bright", "banana",
        ]);
        for answer in &vocab {
            let history = history_for(answer.text(), &["garden", "pepper", "letter"]);
            let remaining = filter_by_history(&vocab, &history, FilterPolicy::default());
            assert!(
                remaining.contains(&answer),
                "{answer} was filtered out of its own history"
            );
        }
    }

    #[test]
    fn filtering_is_idempotent() {
        let vocab = words(&["planet", "planes", "plaque", "garden", "silver", "pastel"]);
        let history = history_for("pastel", &["planet"]);
        let once = filter_by_history(&vocab, &history, FilterPolicy::default());
        let twice = filter_by_history(once.iter().copied(), &history, FilterPolicy::default());
        assert_eq!(once, twice);
        assert!(once.len() <= vocab.len());
    }

    #[test]
    fn unique_letters_policy() {
        let vocab = words(&["planet", "pepper", "letter", "garden"]);
        let remaining = filter_by_history(&vocab, &History::new(), FilterPolicy::UNIQUE_LETTERS);
        assert_eq!(texts(&remaining), vec!["planet", "garden"]);
        assert!(!FilterPolicy::UNIQUE_LETTERS.admits(&Word::new("pepper").unwrap()));
        assert!(FilterPolicy::default().admits(&Word::new("pepper").unwrap()));
    }
}
