//! The set of words accepted as guesses

use super::word::Word;
use rustc_hash::FxHashMap;

/// Immutable, ordered word set with constant-time lookup
///
/// Iteration order is insertion order with duplicates dropped; suggestions
/// rely on this order being stable.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    words: Vec<Word>,
    index: FxHashMap<String, usize>,
}

impl Vocabulary {
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        words.into_iter().collect()
    }

    /// Look up a word by text (case-insensitive)
    #[must_use]
    pub fn get(&self, text: &str) -> Option<&Word> {
        self.index
            .get(&text.to_lowercase())
            .map(|&i| &self.words[i])
    }

    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.get(text).is_some()
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl FromIterator<Word> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        let mut words = Vec::new();
        let mut index = FxHashMap::default();
        for word in iter {
            if !index.contains_key(word.text()) {
                index.insert(word.text().to_string(), words.len());
                words.push(word);
            }
        }
        Self { words, index }
    }
}

impl<'a> IntoIterator for &'a Vocabulary {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
