//! Word lists
//!
//! `VOCAB` holds every six-letter word accepted as a guess; `ANSWERS` is the
//! subset that may be drawn as a hidden answer. Both are embedded at build
//! time from `data/`.

mod embedded;
pub mod loader;

pub use embedded::{ANSWERS, ANSWERS_COUNT, VOCAB, VOCAB_COUNT};
