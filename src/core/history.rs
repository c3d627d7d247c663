//! Guess history
//!
//! A `History` only ever grows by one entry per turn. Appending produces a new
//! value; the previous snapshot stays valid for whoever still holds it.

use super::feedback::Feedback;
use super::word::{Word, WordError};
use std::rc::Rc;

/// One played guess and the feedback it received
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    guess: Word,
    feedback: Feedback,
}

impl HistoryEntry {
    /// Pair a guess with its feedback
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` if the feedback is not aligned with the guess.
    pub fn new(guess: Word, feedback: Feedback) -> Result<Self, WordError> {
        if guess.len() != feedback.len() {
            return Err(WordError::InvalidLength {
                expected: guess.len(),
                actual: feedback.len(),
            });
        }
        Ok(Self { guess, feedback })
    }

    /// Play `guess` against `answer` and record the result
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` if the words differ in length.
    pub fn evaluate(guess: &Word, answer: &Word) -> Result<Self, WordError> {
        let feedback = Feedback::calculate(guess, answer)?;
        Ok(Self {
            guess: guess.clone(),
            feedback,
        })
    }

    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        &self.feedback
    }
}

/// Ordered, append-only record of a round's guesses
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: Rc<[HistoryEntry]>,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A new history with `entry` added at the end
    #[must_use]
    pub fn appended(&self, entry: HistoryEntry) -> Self {
        let entries: Rc<[HistoryEntry]> = self
            .entries
            .iter()
            .cloned()
            .chain(std::iter::once(entry))
            .collect();
        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HistoryEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    /// True if `word` has already been played
    #[must_use]
    pub fn contains_guess(&self, word: &Word) -> bool {
        self.entries.iter().any(|entry| entry.guess() == word)
    }
}

impl FromIterator<HistoryEntry> for History {
    fn from_iter<I: IntoIterator<Item = HistoryEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a HistoryEntry;
    type IntoIter = std::slice::Iter<'a, HistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn entry_rejects_misaligned_feedback() {
        let feedback = Feedback::perfect(5);
        assert_eq!(
            HistoryEntry::new(word("planet"), feedback),
            Err(WordError::InvalidLength {
                expected: 6,
                actual: 5
            })
        );
    }

    #[test]
    fn evaluate_records_feedback() {
        let entry = HistoryEntry::evaluate(&word("planet"), &word("planet")).unwrap();
        assert_eq!(entry.guess().text(), "planet");
        assert!(entry.feedback().is_perfect());
    }

    #[test]
    fn appended_leaves_original_untouched() {
        let empty = History::new();
        let entry = HistoryEntry::evaluate(&word("garden"), &word("planet")).unwrap();

        let one = empty.appended(entry.clone());
        let two = one.appended(HistoryEntry::evaluate(&word("planet"), &word("planet")).unwrap());

        assert!(empty.is_empty());
        assert_eq!(one.len(), 1);
        assert_eq!(two.len(), 2);
        assert_eq!(two.entries()[0], entry);
        assert!(two.last().unwrap().feedback().is_perfect());
    }

    #[test]
    fn contains_guess() {
        let history: History = [HistoryEntry::evaluate(&word("garden"), &word("planet")).unwrap()]
            .into_iter()
            .collect();
        assert!(history.contains_guess(&word("garden")));
        assert!(!history.contains_guess(&word("planet")));
    }

    #[test]
    fn iterates_in_order() {
        let answer = word("planet");
        let history = History::new()
            .appended(HistoryEntry::evaluate(&word("bright"), &answer).unwrap())
            .appended(HistoryEntry::evaluate(&word("garden"), &answer).unwrap());

        let guesses: Vec<&str> = history.iter().map(|e| e.guess().text()).collect();
        assert_eq!(guesses, vec!["bright", "garden"]);
        assert_eq!(
            history.entries()[0].feedback().count(LetterStatus::Absent),
            5
        );
    }
}
