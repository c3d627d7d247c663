//! TUI application state and logic

use crate::core::{Rules, Vocabulary};
use crate::game::{AnswerPool, Round, RoundState, Stats};
use crate::solver::{Solver, StrategyType};
use anyhow::{Result, anyhow};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{debug, info};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Messages kept in the log panel
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<'a> {
    pub round: Round<'a>,
    pub solver: Solver<'a, StrategyType>,
    pub answers: AnswerPool,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Stats,
    pub input_mode: InputMode,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    RoundOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    /// Start the first round with an answer drawn from `answers`
    ///
    /// # Errors
    ///
    /// Returns an error if the answer pool is empty.
    pub fn new(
        rules: Rules,
        vocabulary: &'a Vocabulary,
        solver: Solver<'a, StrategyType>,
        mut answers: AnswerPool,
    ) -> Result<Self> {
        let answer = answers
            .draw_random()
            .ok_or_else(|| anyhow!("No answers to play"))?;

        let mut app = Self {
            round: Round::new(rules, vocabulary, answer),
            solver,
            answers,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Stats::new(rules.max_guesses),
            input_mode: InputMode::Guessing,
            should_quit: false,
        };
        app.add_message(
            &format!(
                "Guess the {}-letter word in {} tries. Tab suggests a word.",
                rules.word_length, rules.max_guesses
            ),
            MessageStyle::Info,
        );
        Ok(app)
    }

    /// React to one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_round(),
            KeyCode::Enter if self.input_mode == InputMode::RoundOver => self.new_round(),
            _ if self.input_mode == InputMode::RoundOver => {}
            KeyCode::Char(c) => self.type_letter(c),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Tab => self.fill_suggestion(),
            KeyCode::Enter => self.submit_guess(),
            _ => {}
        }
    }

    pub fn type_letter(&mut self, c: char) {
        if c.is_ascii_alphabetic() && self.input_buffer.len() < self.round.rules().word_length {
            self.input_buffer.push(c.to_ascii_lowercase());
        }
    }

    /// Replace the typed letters with the suggested guess
    pub fn fill_suggestion(&mut self) {
        match self.round.suggest(&self.solver) {
            Some(word) => {
                debug!("filled suggestion {}", word.text());
                self.input_buffer = word.text().to_string();
            }
            None => self.add_message("No suggestion available", MessageStyle::Error),
        }
    }

    pub fn submit_guess(&mut self) {
        let guess = std::mem::take(&mut self.input_buffer);
        match self.round.submit(&guess) {
            Ok(RoundState::Won(guesses)) => {
                self.finish_round(RoundState::Won(guesses));
                self.add_message(
                    &format!("Correct! You won in {guesses} guesses!"),
                    MessageStyle::Success,
                );
            }
            Ok(RoundState::Lost) => {
                self.finish_round(RoundState::Lost);
                self.add_message(
                    &format!("You lose! The answer was: {}", self.round.answer()),
                    MessageStyle::Error,
                );
            }
            Ok(RoundState::AwaitingGuess) => {
                let remaining = self.candidates_count();
                self.add_message(
                    &format!("{remaining} candidates remaining"),
                    MessageStyle::Info,
                );
            }
            Err(err) => {
                self.input_buffer = guess;
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
        }
    }

    fn finish_round(&mut self, outcome: RoundState) {
        self.stats = self.stats.recorded(outcome);
        self.input_mode = InputMode::RoundOver;
        self.add_message("Press Enter for a new round or Esc to quit.", MessageStyle::Info);
    }

    /// Abandon the current round and start another
    ///
    /// An abandoned round is not counted in the statistics.
    pub fn new_round(&mut self) {
        let Some(answer) = self.answers.draw_random() else {
            self.add_message("No answers left to play. Thanks for playing!", MessageStyle::Info);
            return;
        };
        info!("new round, {} answers left", self.answers.len());
        self.round.restart(answer);
        self.input_buffer.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message("New round started!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    #[must_use]
    pub fn candidates_count(&self) -> usize {
        self.solver.count_candidates(self.round.history())
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<Stats> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<Stats> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.stats)
}
