//! Candidate filtering and guess suggestion
//!
//! This module narrows the vocabulary to words consistent with a history and
//! picks the next guess from what remains.

mod engine;
pub mod filter;
pub mod strategy;

pub use engine::{Solver, suggest_next};
pub use filter::{FilterPolicy, entry_allows, filter_by_history, is_consistent};
pub use strategy::{
    AlphabeticalStrategy, FirstStrategy, FrequencyStrategy, Strategy, StrategyType,
};
