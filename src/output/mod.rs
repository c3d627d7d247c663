//! Terminal output formatting
//!
//! Text rendering shared by the text game, the command reports and the TUI.

pub mod display;
pub mod formatters;

pub use display::print_solve_result;
