//! Command implementations

pub mod play;
pub mod solve;
pub mod test_all;

pub use play::{Game, RoundOutcome};
pub use solve::{GuessStep, SolveResult, require_known, solve_word};
pub use test_all::{TestAllStatistics, print_test_all_statistics, run_test_all};
