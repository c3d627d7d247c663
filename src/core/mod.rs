//! Core domain types for Wordle
//!
//! Words, feedback, history and rules. Everything here is a pure value type;
//! "updates" return new values.

mod feedback;
mod history;
mod rules;
mod status;
mod vocabulary;
mod word;

pub use feedback::Feedback;
pub use history::{History, HistoryEntry};
pub use rules::{MAX_GUESSES, Rules, WORD_LENGTH};
pub use status::{KeyStatus, LetterStatus, Symbols};
pub use vocabulary::Vocabulary;
pub use word::{Word, WordError};
