use wordle_six::core::{History, HistoryEntry, Word};
use wordle_six::solver::{FilterPolicy, Solver, StrategyType, filter_by_history, suggest_next};
use wordle_six::wordlists::loader::words_from_slice;
use wordle_six::wordlists::{ANSWERS, VOCAB};

fn word(text: &str) -> Word {
    Word::new(text).unwrap()
}

fn history_for(answer: &Word, guesses: &[&Word]) -> History {
    guesses
        .iter()
        .map(|g| HistoryEntry::evaluate(g, answer).unwrap())
        .collect()
}

#[test]
fn test_end_to_end_suggestion() {
    let vocab = vec![word("apples"), word("bpples")];
    let answer = word("apples");
    let history = history_for(&answer, &[&vocab[1]]);

    let feedback = history.last().unwrap().feedback();
    assert_eq!(feedback.to_string(), "⬛🟩🟩🟩🟩🟩");

    let remaining = filter_by_history(&vocab, &history, FilterPolicy::default());
    assert_eq!(remaining, vec![&vocab[0]]);
    assert_eq!(suggest_next(&vocab, &history), Some(&vocab[0]));
}

#[test]
fn test_filter_is_idempotent_and_shrinks() {
    let vocab = words_from_slice(VOCAB);
    let answers = words_from_slice(ANSWERS);

    for answer in answers.iter().step_by(23) {
        let history = history_for(answer, &[&vocab[0], &vocab[100], &vocab[300]]);
        for policy in [FilterPolicy::default(), FilterPolicy::UNIQUE_LETTERS] {
            let once = filter_by_history(&vocab, &history, policy);
            let twice = filter_by_history(once.iter().copied(), &history, policy);

            assert!(once.len() <= vocab.len());
            assert_eq!(once, twice);
        }
    }
}

#[test]
fn test_answer_always_remains_candidate() {
    let vocab = words_from_slice(VOCAB);
    let answers = words_from_slice(ANSWERS);

    for answer in &answers {
        let history = history_for(answer, &[&vocab[5], &vocab[250], &vocab[500]]);
        let remaining = filter_by_history(&vocab, &history, FilterPolicy::default());
        assert!(remaining.contains(&answer), "{answer} was filtered out");
    }
}

#[test]
fn test_filter_does_not_touch_vocabulary() {
    let vocab = words_from_slice(&VOCAB[..40]);
    let before = vocab.clone();
    let history = history_for(&vocab[3], &[&vocab[0]]);

    let _ = filter_by_history(&vocab, &history, FilterPolicy::default());
    assert_eq!(vocab, before);
}

#[test]
fn test_suggestion_is_deterministic() {
    let vocab = words_from_slice(VOCAB);
    let answer = word("silver");
    let history = history_for(&answer, &[&word("planet")]);

    for strategy in [StrategyType::First, StrategyType::Alphabetical, StrategyType::Frequency] {
        let solver = Solver::new(strategy, &vocab, FilterPolicy::default());
        assert_eq!(solver.next_guess(&history), solver.next_guess(&history));
    }
    assert_eq!(suggest_next(&vocab, &history), suggest_next(&vocab, &history));
}

#[test]
fn test_no_candidates_is_none() {
    let vocab = vec![word("planet")];
    let history = history_for(&word("silver"), &[&word("planet")]);
    assert_eq!(suggest_next(&vocab, &history), None);
}

#[test]
fn test_empty_history_suggests_first_word() {
    let vocab = words_from_slice(VOCAB);
    assert_eq!(suggest_next(&vocab, &History::new()), Some(&vocab[0]));
}

#[test]
fn test_suggester_solves_answers_within_budget_mostly() {
    let vocab = words_from_slice(VOCAB);
    let answers = words_from_slice(ANSWERS);
    let solver = Solver::new(StrategyType::Frequency, &vocab, FilterPolicy::default());

    for answer in answers.iter().step_by(17) {
        let mut history = History::new();
        let mut solved = false;
        for _ in 0..vocab.len() {
            let guess = solver.next_guess(&history).unwrap();
            history = history.appended(HistoryEntry::evaluate(guess, answer).unwrap());
            if guess == answer {
                solved = true;
                break;
            }
        }
        assert!(solved, "{answer} never reached");
    }
}
