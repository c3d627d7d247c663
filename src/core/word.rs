//! Word representation
//!
//! A Word stores a fixed-length lowercase word along with letter position
//! indices used by feedback calculation and candidate filtering.

use super::rules::WORD_LENGTH;
use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A Wordle word with letter position tracking
///
/// Stores the word as bytes and maintains a map of letter positions for duplicate handling.
#[derive(Debug, Clone)]
pub struct Word {
    text: String,
    letters: Box<[u8]>,
    letter_positions: FxHashMap<u8, Vec<usize>>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength { expected: usize, actual: usize },
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { expected, actual } => {
                write!(f, "Word must be exactly {expected} letters, got {actual}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new six-letter Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 6
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_six::core::Word;
    ///
    /// let word = Word::new("planet").unwrap();
    /// assert_eq!(word.text(), "planet");
    ///
    /// assert!(Word::new("crane").is_err());
    /// assert!(Word::new("plan3t").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        Self::with_length(text, WORD_LENGTH)
    }

    /// Create a new Word of an arbitrary fixed length
    ///
    /// # Errors
    /// Same conditions as [`Word::new`], checked against `length`.
    pub fn with_length(text: impl Into<String>, length: usize) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if text.len() != length {
            return Err(WordError::InvalidLength {
                expected: length,
                actual: text.len(),
            });
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let letters: Box<[u8]> = text.as_bytes().into();

        let mut letter_positions: FxHashMap<u8, Vec<usize>> = FxHashMap::default();
        for (i, &letter) in letters.iter().enumerate() {
            letter_positions.entry(letter).or_default().push(i);
        }

        Ok(Self {
            text,
            letters,
            letter_positions,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        &self.letters
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false for a constructed word; present for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> u8 {
        self.letters[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.letter_positions.contains_key(&letter)
    }

    /// Get all positions where a letter appears, in ascending order
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    pub fn positions_of(&self, letter: u8) -> &[usize] {
        self.letter_positions
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
    }

    /// Position groups of every letter that occurs more than once
    pub(crate) fn repeated_positions(&self) -> impl Iterator<Item = &[usize]> {
        self.letter_positions
            .values()
            .filter(|positions| positions.len() > 1)
            .map(Vec::as_slice)
    }

    /// True if any letter occurs more than once
    #[must_use]
    pub fn has_repeated_letters(&self) -> bool {
        self.letter_positions.len() < self.letters.len()
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Word {}

impl Hash for Word {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl PartialOrd for Word {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Word {
    fn cmp(&self, other: &Self) -> Ordering {
        self.text.cmp(&other.text)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("planet").unwrap();
        assert_eq!(word.text(), "planet");
        assert_eq!(word.letters(), b"planet");
        assert_eq!(word.len(), 6);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("PLANET").unwrap();
        assert_eq!(word.text(), "planet");

        let word2 = Word::new("PlAnEt").unwrap();
        assert_eq!(word2.text(), "planet");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(
            Word::new("too long"),
            Err(WordError::InvalidLength {
                expected: 6,
                actual: 8
            })
        );
        assert_eq!(
            Word::new("crane"),
            Err(WordError::InvalidLength {
                expected: 6,
                actual: 5
            })
        );
        assert!(matches!(
            Word::new(""),
            Err(WordError::InvalidLength { actual: 0, .. })
        ));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("plane1"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("plan t"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("plané!"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_with_custom_length() {
        let word = Word::with_length("crane", 5).unwrap();
        assert_eq!(word.len(), 5);
        assert!(Word::with_length("planet", 5).is_err());
    }

    #[test]
    fn word_letter_at() {
        let word = Word::new("planet").unwrap();
        assert_eq!(word.letter_at(0), b'p');
        assert_eq!(word.letter_at(5), b't');
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("planet").unwrap();
        assert!(word.has_letter(b'p'));
        assert!(word.has_letter(b'e'));
        assert!(!word.has_letter(b'z'));
    }

    #[test]
    fn word_positions_of_duplicates() {
        let word = Word::new("pepper").unwrap();
        assert_eq!(word.positions_of(b'p'), &[0, 2, 3]);
        assert_eq!(word.positions_of(b'e'), &[1, 4]);
        assert_eq!(word.positions_of(b'r'), &[5]);
        assert_eq!(word.positions_of(b'z'), &[] as &[usize]);
    }

    #[test]
    fn word_repeated_letters() {
        assert!(Word::new("pepper").unwrap().has_repeated_letters());
        assert!(Word::new("better").unwrap().has_repeated_letters());
        assert!(!Word::new("planet").unwrap().has_repeated_letters());

        let word = Word::new("pepper").unwrap();
        let mut groups: Vec<&[usize]> = word.repeated_positions().collect();
        groups.sort_unstable();
        assert_eq!(groups, vec![&[0, 2, 3][..], &[1, 4][..]]);
    }

    #[test]
    fn word_display() {
        let word = Word::new("planet").unwrap();
        assert_eq!(format!("{word}"), "planet");
    }

    #[test]
    fn word_equality_and_order() {
        let a = Word::new("planet").unwrap();
        let b = Word::new("PLANET").unwrap();
        let c = Word::new("garden").unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(c < a);
    }
}
