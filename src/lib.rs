//! Six-letter Wordle
//!
//! A word game with a hidden six-letter answer, feedback per letter, and a
//! suggester that narrows the vocabulary to words consistent with every
//! guess so far.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_six::core::{History, HistoryEntry, Rules, Word};
//! use wordle_six::solver::suggest_next;
//!
//! let rules = Rules::default();
//! let vocab: Vec<Word> = ["garden", "planet", "silver"]
//!     .iter()
//!     .map(|w| rules.word(w).unwrap())
//!     .collect();
//! let answer = rules.word("planet").unwrap();
//!
//! let feedback = rules.classify(&vocab[0], &answer).unwrap();
//! assert_eq!(feedback.to_string(), "⬛🟨⬛⬛🟩🟨");
//!
//! let history = History::new().appended(HistoryEntry::new(vocab[0].clone(), feedback).unwrap());
//! assert_eq!(suggest_next(&vocab, &history).map(Word::text), Some("planet"));
//! ```

// Core domain types
pub mod core;

// Candidate filtering and suggestion
pub mod solver;

// Rounds, statistics and answer selection
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
