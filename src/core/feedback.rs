//! Guess feedback calculation and representation
//!
//! Feedback is one `LetterStatus` per letter, positionally aligned with the
//! guess. Repeated letters in a guess are resolved so that a letter is never
//! reported more often than the answer can account for:
//!
//! 1. Exact position matches are `Correct`.
//! 2. Other letters present anywhere in the answer are tentatively `Misplaced`,
//!    the rest `Absent`.
//! 3. For a letter repeated in the guess, if any occurrence is `Correct` every
//!    other occurrence becomes `Absent`; otherwise only the first misplaced
//!    occurrence survives.

use super::status::{LetterStatus, Symbols};
use super::word::{Word, WordError};
use log::trace;
use std::fmt;
use std::str::FromStr;

/// Feedback for a single guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Box<[LetterStatus]>);

impl Feedback {
    /// Wrap a list of statuses
    #[must_use]
    pub fn new(statuses: Vec<LetterStatus>) -> Self {
        Self(statuses.into_boxed_slice())
    }

    /// Feedback with every letter `Correct`
    #[must_use]
    pub fn perfect(length: usize) -> Self {
        Self::new(vec![LetterStatus::Correct; length])
    }

    /// Calculate the feedback when `guess` is played against `answer`
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` if the two words differ in length.
    ///
    /// # Examples
    /// ```
    /// use wordle_six::core::{Feedback, LetterStatus::*, Word};
    ///
    /// let guess = Word::new("banana").unwrap();
    /// let answer = Word::new("animal").unwrap();
    /// let feedback = Feedback::calculate(&guess, &answer).unwrap();
    ///
    /// // b is absent, the first a and first n are kept as misplaced,
    /// // the repeats are dropped
    /// assert_eq!(
    ///     feedback.statuses(),
    ///     &[Absent, Misplaced, Misplaced, Absent, Absent, Absent]
    /// );
    /// ```
    pub fn calculate(guess: &Word, answer: &Word) -> Result<Self, WordError> {
        if guess.len() != answer.len() {
            return Err(WordError::InvalidLength {
                expected: answer.len(),
                actual: guess.len(),
            });
        }

        let mut statuses: Vec<LetterStatus> = guess
            .letters()
            .iter()
            .zip(answer.letters())
            .map(|(&g, &a)| {
                if g == a {
                    LetterStatus::Correct
                } else if answer.has_letter(g) {
                    LetterStatus::Misplaced
                } else {
                    LetterStatus::Absent
                }
            })
            .collect();

        for positions in guess.repeated_positions() {
            let has_correct = positions
                .iter()
                .any(|&i| statuses[i] == LetterStatus::Correct);

            if has_correct {
                for &i in positions {
                    if statuses[i] != LetterStatus::Correct {
                        statuses[i] = LetterStatus::Absent;
                    }
                }
            } else {
                let mut kept_first = false;
                for &i in positions {
                    if statuses[i] == LetterStatus::Misplaced {
                        if kept_first {
                            statuses[i] = LetterStatus::Absent;
                        }
                        kept_first = true;
                    }
                }
            }
        }

        let feedback = Self::new(statuses);
        trace!("feedback {guess} vs {answer}: {feedback}");
        Ok(feedback)
    }

    /// The statuses, one per letter
    #[inline]
    #[must_use]
    pub fn statuses(&self) -> &[LetterStatus] {
        &self.0
    }

    /// Status at a position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn status_at(&self, position: usize) -> LetterStatus {
        self.0[position]
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every letter is `Correct`
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&s| s == LetterStatus::Correct)
    }

    /// Count the letters with a given status
    #[must_use]
    pub fn count(&self, status: LetterStatus) -> usize {
        self.0.iter().filter(|&&s| s == status).count()
    }

    /// Parse feedback like `"GY-G-Y"` or `"🟩🟨⬛🟩⬛🟨"`
    ///
    /// Returns `None` on an unknown character or when the length is not `length`.
    #[must_use]
    pub fn parse(s: &str, length: usize) -> Option<Self> {
        let statuses: Option<Vec<LetterStatus>> =
            s.trim().chars().map(LetterStatus::from_char).collect();
        statuses
            .filter(|statuses| statuses.len() == length)
            .map(Self::new)
    }

    /// Render with the given symbol set
    #[must_use]
    pub fn render(&self, symbols: &Symbols) -> String {
        self.0.iter().map(|&s| symbols.letter(s)).collect()
    }
}

impl FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let length = s.trim().chars().count();
        if length == 0 {
            return Err("Empty feedback string".to_string());
        }
        Self::parse(s, length).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(&Symbols::BLOCKS))
    }
}
