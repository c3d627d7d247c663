//! Keyboard summary: what the history reveals about each letter

use crate::core::{History, KeyStatus};

/// The status of `letter` as far as the history shows
///
/// Each guess containing the letter contributes the status at the letter's
/// first position in that guess. Later guesses override earlier ones, except
/// that nothing overrides `Correct`.
#[must_use]
pub fn letter_status(letter: u8, history: &History) -> KeyStatus {
    let letter = letter.to_ascii_lowercase();
    let mut status = KeyStatus::Unseen;

    for entry in history {
        let Some(&position) = entry.guess().positions_of(letter).first() else {
            continue;
        };
        let seen = KeyStatus::from(entry.feedback().status_at(position));
        if seen == KeyStatus::Correct || status != KeyStatus::Correct {
            status = seen;
        }
    }

    status
}

/// Status of every letter `a..=z`, alphabetically
#[must_use]
pub fn keyboard_summary(history: &History) -> Vec<(char, KeyStatus)> {
    (b'a'..=b'z')
        .map(|letter| (char::from(letter), letter_status(letter, history)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{HistoryEntry, Word};

    fn history_for(answer: &str, guesses: &[&str]) -> History {
        let answer = Word::new(answer).unwrap();
        guesses
            .iter()
            .map(|g| HistoryEntry::evaluate(&Word::new(*g).unwrap(), &answer).unwrap())
            .collect()
    }

    #[test]
    fn unseen_without_history() {
        assert_eq!(letter_status(b'a', &History::new()), KeyStatus::Unseen);
    }

    #[test]
    fn statuses_from_one_guess() {
        // garden vs planet: g absent, a misplaced, r absent, d absent, e correct, n misplaced
        let history = history_for("planet", &["garden"]);
        assert_eq!(letter_status(b'g', &history), KeyStatus::Absent);
        assert_eq!(letter_status(b'a', &history), KeyStatus::Misplaced);
        assert_eq!(letter_status(b'e', &history), KeyStatus::Correct);
        assert_eq!(letter_status(b'n', &history), KeyStatus::Misplaced);
        assert_eq!(letter_status(b'z', &history), KeyStatus::Unseen);
        assert_eq!(letter_status(b'E', &history), KeyStatus::Correct);
    }

    #[test]
    fn correct_is_never_downgraded() {
        let history = history_for("planet", &["planes", "castle"]);
        assert_eq!(letter_status(b'a', &history), KeyStatus::Correct);
        // castle's l is misplaced, but planes already showed it correct
        assert_eq!(letter_status(b'l', &history), KeyStatus::Correct);
    }

    #[test]
    fn later_status_replaces_earlier() {
        // garden shows a misplaced, planes then shows it correct
        let history = history_for("planet", &["garden", "planes"]);
        assert_eq!(letter_status(b'a', &history), KeyStatus::Correct);
    }

    #[test]
    fn summary_lists_alphabet() {
        let keys = keyboard_summary(&History::new());
        assert_eq!(keys.len(), 26);
        assert_eq!(keys[0], ('a', KeyStatus::Unseen));
        assert_eq!(keys[25], ('z', KeyStatus::Unseen));
    }
}
