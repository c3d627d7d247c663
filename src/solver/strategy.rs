//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations. Every strategy is
//! deterministic: the same candidates always give the same pick.

use crate::core::Word;
use rustc_hash::FxHashMap;

/// A strategy for picking the next guess among the remaining candidates
pub trait Strategy {
    /// Select one candidate
    ///
    /// `candidates` is in vocabulary order. Returns `None` only if it is empty.
    fn select_guess<'a>(&self, candidates: &[&'a Word]) -> Option<&'a Word>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrategyType {
    /// First remaining word in vocabulary order (default)
    #[default]
    First,
    /// Lexicographically lowest remaining word
    Alphabetical,
    /// Word built from the most common letter at each position
    Frequency,
}

impl Strategy for StrategyType {
    fn select_guess<'a>(&self, candidates: &[&'a Word]) -> Option<&'a Word> {
        match self {
            Self::First => FirstStrategy.select_guess(candidates),
            Self::Alphabetical => AlphabeticalStrategy.select_guess(candidates),
            Self::Frequency => FrequencyStrategy.select_guess(candidates),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "first", "alphabetical", "frequency".
    /// Defaults to first if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "alphabetical" | "alpha" => Self::Alphabetical,
            "frequency" | "freq" => Self::Frequency,
            _ => Self::First,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Alphabetical => "alphabetical",
            Self::Frequency => "frequency",
        }
    }
}

/// Takes the first candidate in iteration order
pub struct FirstStrategy;

impl Strategy for FirstStrategy {
    fn select_guess<'a>(&self, candidates: &[&'a Word]) -> Option<&'a Word> {
        candidates.first().copied()
    }
}

/// Takes the lexicographically lowest candidate
pub struct AlphabeticalStrategy;

impl Strategy for AlphabeticalStrategy {
    fn select_guess<'a>(&self, candidates: &[&'a Word]) -> Option<&'a Word> {
        candidates.iter().copied().min()
    }
}

/// Scores each candidate by how common its letters are at their positions
///
/// A letter counts once per word even if repeated, so words that probe more
/// distinct letters score higher. Ties go to the earliest candidate.
pub struct FrequencyStrategy;

impl FrequencyStrategy {
    fn positional_counts(candidates: &[&Word]) -> FxHashMap<(usize, u8), usize> {
        let mut counts = FxHashMap::default();
        for word in candidates {
            for (i, &letter) in word.letters().iter().enumerate() {
                *counts.entry((i, letter)).or_insert(0) += 1;
            }
        }
        counts
    }

    fn score(word: &Word, counts: &FxHashMap<(usize, u8), usize>) -> usize {
        word.letters()
            .iter()
            .enumerate()
            .filter(|&(i, letter)| word.positions_of(*letter).first() == Some(&i))
            .map(|(i, &letter)| counts.get(&(i, letter)).copied().unwrap_or(0))
            .sum()
    }
}

impl Strategy for FrequencyStrategy {
    fn select_guess<'a>(&self, candidates: &[&'a Word]) -> Option<&'a Word> {
        let counts = Self::positional_counts(candidates);

        let mut best: Option<(&'a Word, usize)> = None;
        for &word in candidates {
            let score = Self::score(word, &counts);
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((word, score));
            }
        }
        best.map(|(word, _)| word)
    }
}
