//! Letter classifications and their display symbols

use std::fmt;

/// Classification of one letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterStatus {
    /// Letter is in the answer at this position
    Correct,
    /// Letter is in the answer, but elsewhere
    Misplaced,
    /// Letter is not in the answer (or its occurrences are already accounted for)
    Absent,
}

/// What the guesses so far reveal about a single letter of the alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyStatus {
    Correct,
    Misplaced,
    Absent,
    /// Letter has not been guessed yet
    #[default]
    Unseen,
}

impl From<LetterStatus> for KeyStatus {
    fn from(status: LetterStatus) -> Self {
        match status {
            LetterStatus::Correct => Self::Correct,
            LetterStatus::Misplaced => Self::Misplaced,
            LetterStatus::Absent => Self::Absent,
        }
    }
}

impl LetterStatus {
    /// Parse a single feedback character
    ///
    /// Accepts `G`/`🟩` for correct, `Y`/`🟨` for misplaced and
    /// `-`/`_`/`X`/`⬛`/`⬜` for absent (letters are case-insensitive).
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Misplaced),
            '-' | '_' | 'X' | 'x' | '⬛' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// The characters used to draw each status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbols {
    pub correct: char,
    pub misplaced: char,
    pub absent: char,
    pub unseen: char,
}

impl Symbols {
    /// Coloured squares, as shown by the game
    pub const BLOCKS: Self = Self {
        correct: '🟩',
        misplaced: '🟨',
        absent: '⬛',
        unseen: '⬜',
    };

    /// Plain ASCII letters, as typed by a player
    pub const LETTERS: Self = Self {
        correct: 'G',
        misplaced: 'Y',
        absent: '-',
        unseen: '.',
    };

    #[must_use]
    pub const fn letter(&self, status: LetterStatus) -> char {
        match status {
            LetterStatus::Correct => self.correct,
            LetterStatus::Misplaced => self.misplaced,
            LetterStatus::Absent => self.absent,
        }
    }

    #[must_use]
    pub const fn key(&self, status: KeyStatus) -> char {
        match status {
            KeyStatus::Correct => self.correct,
            KeyStatus::Misplaced => self.misplaced,
            KeyStatus::Absent => self.absent,
            KeyStatus::Unseen => self.unseen,
        }
    }
}

impl Default for Symbols {
    fn default() -> Self {
        Self::BLOCKS
    }
}

impl fmt::Display for LetterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Symbols::BLOCKS.letter(*self))
    }
}

impl fmt::Display for KeyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Symbols::BLOCKS.key(*self))
    }
}
