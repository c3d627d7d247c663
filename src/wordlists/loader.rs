//! Loading word lists from files or the embedded constants

use crate::core::Word;
use log::{debug, warn};
use std::fs;
use std::io;
use std::path::Path;

/// Load words of `length` letters from a file, one per line
///
/// Blank lines and `#` comments are skipped. Lines that are not valid words
/// of the requested length are skipped with a warning.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_six::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt", 6).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, length: usize) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = parse_words(&content, length);
    debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Parse words of `length` letters from text, one per line
#[must_use]
pub fn parse_words(content: &str, length: usize) -> Vec<Word> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| match Word::with_length(line, length) {
            Ok(word) => Some(word),
            Err(err) => {
                warn!("skipping word list entry {line:?}: {err}");
                None
            }
        })
        .collect()
}

/// Convert an embedded string slice to six-letter words
///
/// # Examples
/// ```
/// use wordle_six::wordlists::loader::words_from_slice;
/// use wordle_six::wordlists::ANSWERS;
///
/// let words = words_from_slice(ANSWERS);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["planet", "crane", "gardens", "silver"]);
        let texts: Vec<_> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["planet", "silver"]);
    }

    #[test]
    fn words_from_slice_empty() {
        assert!(words_from_slice(&[]).is_empty());
    }

    #[test]
    fn parse_words_skips_comments_and_blanks() {
        let text = "# six letters\nplanet\n\n  Garden  \nno\nsilv3r\n";
        let words = parse_words(text, 6);
        let texts: Vec<_> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["planet", "garden"]);
    }

    #[test]
    fn parse_words_honours_length() {
        let words = parse_words("crane\nplanet\nslate\n", 5);
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_from_file("does/not/exist.txt", 6).is_err());
    }

    #[test]
    fn load_embedded_answers() {
        use crate::wordlists::ANSWERS;
        assert_eq!(words_from_slice(ANSWERS).len(), ANSWERS.len());
    }
}
