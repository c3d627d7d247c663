//! A single round of the game
//!
//! `AwaitingGuess -> (suggested | typed guess) -> feedback -> Won | Lost | AwaitingGuess`.

use crate::core::{History, HistoryEntry, Rules, Vocabulary, Word, WordError};
use crate::solver::{Solver, Strategy};
use log::{debug, info};
use std::fmt;

/// Where a round stands after the latest guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    AwaitingGuess,
    /// Won on the given guess number
    Won(usize),
    Lost,
}

impl RoundState {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::AwaitingGuess)
    }
}

/// Reasons a guess is refused
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundError {
    InvalidWord(WordError),
    UnknownWord(String),
    RoundOver,
}

impl fmt::Display for RoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWord(WordError::InvalidLength { expected, .. }) => {
                write!(f, "Invalid! Guess must be of length {expected}")
            }
            Self::InvalidWord(err) => write!(f, "Invalid! {err}"),
            Self::UnknownWord(_) => write!(f, "Invalid! Unknown word"),
            Self::RoundOver => write!(f, "The round is already over"),
        }
    }
}

impl std::error::Error for RoundError {}

impl From<WordError> for RoundError {
    fn from(err: WordError) -> Self {
        Self::InvalidWord(err)
    }
}

/// State of one round: the hidden answer and everything guessed so far
#[derive(Debug, Clone)]
pub struct Round<'a> {
    rules: Rules,
    vocabulary: &'a Vocabulary,
    answer: Word,
    history: History,
    state: RoundState,
}

impl<'a> Round<'a> {
    #[must_use]
    pub fn new(rules: Rules, vocabulary: &'a Vocabulary, answer: Word) -> Self {
        debug!("new round, answer has {} letters", answer.len());
        Self {
            rules,
            vocabulary,
            answer,
            history: History::new(),
            state: RoundState::AwaitingGuess,
        }
    }

    /// Submit a typed guess
    ///
    /// # Errors
    /// - `RoundError::RoundOver` once the round is won or lost
    /// - `RoundError::InvalidWord` for a malformed word or wrong length
    /// - `RoundError::UnknownWord` if the word is not in the vocabulary
    pub fn submit(&mut self, text: &str) -> Result<RoundState, RoundError> {
        if self.state.is_over() {
            return Err(RoundError::RoundOver);
        }

        let text = text.trim();
        let guess = self.rules.word(text)?;
        let guess = self
            .vocabulary
            .get(guess.text())
            .cloned()
            .ok_or_else(|| RoundError::UnknownWord(text.to_string()))?;

        let feedback = self.rules.classify(&guess, &self.answer)?;
        self.history = self.history.appended(HistoryEntry::new(guess, feedback)?);

        let guess_count = self.history.len();
        let won = self
            .history
            .last()
            .is_some_and(|entry| self.rules.has_won(entry.guess(), &self.answer));

        self.state = if won {
            info!("round won in {guess_count} guesses");
            RoundState::Won(guess_count)
        } else if self.rules.has_lost(guess_count) {
            info!("round lost after {guess_count} guesses");
            RoundState::Lost
        } else {
            RoundState::AwaitingGuess
        };

        Ok(self.state)
    }

    /// Suggest a guess consistent with this round's history
    pub fn suggest<S: Strategy>(&self, solver: &Solver<'_, S>) -> Option<Word> {
        solver.next_guess(&self.history).cloned()
    }

    /// Start over with a new answer and an empty history
    pub fn restart(&mut self, answer: Word) {
        self.answer = answer;
        self.history = History::new();
        self.state = RoundState::AwaitingGuess;
    }

    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    #[must_use]
    pub const fn answer(&self) -> &Word {
        &self.answer
    }

    #[must_use]
    pub const fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Number of guesses made so far
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn guesses_left(&self) -> usize {
        self.rules.max_guesses.saturating_sub(self.history.len())
    }
}
