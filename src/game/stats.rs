//! Session statistics

use super::round::RoundState;

/// Games won in each number of guesses, plus games lost
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stats {
    wins: Vec<usize>,
    losses: usize,
}

impl Stats {
    /// Empty statistics for a guess budget of `max_guesses`
    #[must_use]
    pub fn new(max_guesses: usize) -> Self {
        Self {
            wins: vec![0; max_guesses],
            losses: 0,
        }
    }

    /// A copy with one more finished round counted
    ///
    /// Rounds still in progress are not counted.
    #[must_use]
    pub fn recorded(&self, outcome: RoundState) -> Self {
        let mut next = self.clone();
        match outcome {
            RoundState::Won(guesses) if guesses >= 1 => {
                if guesses > next.wins.len() {
                    next.wins.resize(guesses, 0);
                }
                next.wins[guesses - 1] += 1;
            }
            RoundState::Lost => next.losses += 1,
            RoundState::Won(_) | RoundState::AwaitingGuess => {}
        }
        next
    }

    /// Wins indexed by guess count minus one
    #[must_use]
    pub fn wins_by_guesses(&self) -> &[usize] {
        &self.wins
    }

    #[must_use]
    pub fn wins(&self) -> usize {
        self.wins.iter().sum()
    }

    #[must_use]
    pub const fn losses(&self) -> usize {
        self.losses
    }

    #[must_use]
    pub fn games(&self) -> usize {
        self.wins() + self.losses
    }

    /// Percentage of games won, 0 with no games
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        let games = self.games();
        if games == 0 {
            0.0
        } else {
            self.wins() as f64 / games as f64 * 100.0
        }
    }

    /// Mean guesses over won games
    #[must_use]
    pub fn average_guesses(&self) -> Option<f64> {
        let wins = self.wins();
        (wins > 0).then(|| {
            let total: usize = self
                .wins
                .iter()
                .enumerate()
                .map(|(i, count)| (i + 1) * count)
                .sum();
            total as f64 / wins as f64
        })
    }
}
