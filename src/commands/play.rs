//! Text game
//!
//! A line-oriented game loop. Input and output are generic so the whole
//! session can be driven from a script or a test buffer.

use crate::core::{Rules, Vocabulary};
use crate::game::{AnswerPool, Round, RoundState, Stats};
use crate::output::formatters::{format_history, format_keyboard, format_stats};
use crate::solver::{Solver, Strategy};
use anyhow::Result;
use log::{debug, info};
use rand::Rng;
use std::io::{BufRead, Write};

const HELP_MESSAGE: &str = "Ah, you need help? Unfortunate.\n\
    Type a six-letter word to guess it, or one of:\n  \
    h  show this help\n  \
    k  show what each letter is known to be\n  \
    a  let the computer guess\n  \
    q  quit";

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    Finished(RoundState),
    Quit,
}

/// Game loop state shared across rounds
pub struct Game<'a, S: Strategy> {
    rules: Rules,
    vocabulary: &'a Vocabulary,
    solver: &'a Solver<'a, S>,
}

impl<'a, S: Strategy> Game<'a, S> {
    pub const fn new(
        rules: Rules,
        vocabulary: &'a Vocabulary,
        solver: &'a Solver<'a, S>,
    ) -> Self {
        Self {
            rules,
            vocabulary,
            solver,
        }
    }

    /// Play rounds until the player quits, declines another round or the
    /// answers run out
    ///
    /// Returns the statistics of the finished rounds.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn run<R, W, G>(
        &self,
        input: &mut R,
        output: &mut W,
        answers: &mut AnswerPool,
        rng: &mut G,
    ) -> Result<Stats>
    where
        R: BufRead,
        W: Write,
        G: Rng + ?Sized,
    {
        let mut stats = Stats::new(self.rules.max_guesses);

        loop {
            let Some(answer) = answers.draw(rng) else {
                writeln!(output, "No answers left to play. Thanks for playing!")?;
                break;
            };

            let mut round = Round::new(self.rules, self.vocabulary, answer);
            match self.play_round(&mut round, input, output)? {
                RoundOutcome::Quit => break,
                RoundOutcome::Finished(state) => {
                    stats = stats.recorded(state);
                    write!(output, "{}", format_stats(&stats))?;
                }
            }

            write!(output, "Would you like to play again (y/n)? ")?;
            output.flush()?;
            match read_line(input)? {
                Some(reply) if reply.eq_ignore_ascii_case("y") => {}
                _ => break,
            }
        }

        info!("session over after {} games", stats.games());
        Ok(stats)
    }

    /// Play one round to a win, a loss or a quit
    ///
    /// End of input counts as quitting.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn play_round<R: BufRead, W: Write>(
        &self,
        round: &mut Round<'_>,
        input: &mut R,
        output: &mut W,
    ) -> Result<RoundOutcome> {
        let symbols = self.rules.symbols;

        loop {
            write!(output, "Enter guess {}: ", round.guess_count() + 1)?;
            output.flush()?;
            let Some(line) = read_line(input)? else {
                return Ok(RoundOutcome::Quit);
            };

            let guess = match line.to_ascii_lowercase().as_str() {
                "q" => return Ok(RoundOutcome::Quit),
                "h" => {
                    writeln!(output, "{HELP_MESSAGE}")?;
                    continue;
                }
                "k" => {
                    write!(output, "{}", format_keyboard(round.history(), &symbols))?;
                    continue;
                }
                "a" => {
                    let Some(suggestion) = round.suggest(self.solver) else {
                        writeln!(output, "No suggestion available")?;
                        continue;
                    };
                    debug!("auto guess {}", suggestion.text());
                    suggestion.text().to_string()
                }
                _ => line,
            };

            let state = match round.submit(&guess) {
                Ok(state) => state,
                Err(err) => {
                    writeln!(output, "{err}")?;
                    continue;
                }
            };

            writeln!(output, "{}", format_history(round.history(), &symbols))?;
            match state {
                RoundState::Won(guesses) => {
                    writeln!(output, "Correct! You won in {guesses} guesses!")?;
                    return Ok(RoundOutcome::Finished(state));
                }
                RoundState::Lost => {
                    writeln!(output, "You lose! The answer was: {}", round.answer())?;
                    return Ok(RoundOutcome::Finished(state));
                }
                RoundState::AwaitingGuess => {}
            }
        }
    }
}

/// Read one trimmed line, `None` at end of input
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
