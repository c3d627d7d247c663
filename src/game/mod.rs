//! Playing the game: rounds, answers, keyboard and session statistics

mod answers;
mod keyboard;
mod round;
mod stats;

pub use answers::AnswerPool;
pub use keyboard::{keyboard_summary, letter_status};
pub use round::{Round, RoundError, RoundState};
pub use stats::Stats;
