//! Game rules
//!
//! Word length, guess budget and feedback symbols are carried in a `Rules`
//! value instead of process-wide globals, so every component can be driven
//! with alternate settings.

use super::feedback::Feedback;
use super::status::Symbols;
use super::word::{Word, WordError};

/// Default number of letters in a word
pub const WORD_LENGTH: usize = 6;

/// Default number of guesses allowed per round
pub const MAX_GUESSES: usize = 6;

/// Rules of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    pub word_length: usize,
    pub max_guesses: usize,
    pub symbols: Symbols,
}

impl Default for Rules {
    fn default() -> Self {
        Self::new(WORD_LENGTH, MAX_GUESSES)
    }
}

impl Rules {
    #[must_use]
    pub const fn new(word_length: usize, max_guesses: usize) -> Self {
        Self {
            word_length,
            max_guesses,
            symbols: Symbols::BLOCKS,
        }
    }

    /// Replace the symbol set used when rendering feedback
    #[must_use]
    pub const fn with_symbols(mut self, symbols: Symbols) -> Self {
        self.symbols = symbols;
        self
    }

    /// Build a word of this rule set's length
    ///
    /// # Errors
    /// Returns `WordError` if the text is not a valid word of `word_length` letters.
    pub fn word(&self, text: &str) -> Result<Word, WordError> {
        Word::with_length(text, self.word_length)
    }

    /// Classify `guess` against `answer`
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` if either word is not `word_length` long.
    ///
    /// # Examples
    /// ```
    /// use wordle_six::core::{LetterStatus, Rules, Word};
    ///
    /// let rules = Rules::default();
    /// let guess = Word::new("bright").unwrap();
    /// let feedback = rules.classify(&guess, &guess).unwrap();
    /// assert!(feedback.is_perfect());
    /// assert_eq!(feedback.count(LetterStatus::Correct), 6);
    /// ```
    pub fn classify(&self, guess: &Word, answer: &Word) -> Result<Feedback, WordError> {
        for word in [guess, answer] {
            if word.len() != self.word_length {
                return Err(WordError::InvalidLength {
                    expected: self.word_length,
                    actual: word.len(),
                });
            }
        }
        Feedback::calculate(guess, answer)
    }

    /// True iff the guess is the answer
    #[must_use]
    pub fn has_won(&self, guess: &Word, answer: &Word) -> bool {
        guess == answer
    }

    /// True iff `guess_count` guesses exhaust the budget
    #[must_use]
    pub const fn has_lost(&self, guess_count: usize) -> bool {
        guess_count >= self.max_guesses
    }
}
