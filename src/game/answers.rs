//! Random answers without repetition

use crate::core::Word;
use log::debug;
use rand::Rng;

/// Answers not yet used this session
#[derive(Debug, Clone)]
pub struct AnswerPool {
    remaining: Vec<Word>,
}

impl AnswerPool {
    #[must_use]
    pub const fn new(answers: Vec<Word>) -> Self {
        Self { remaining: answers }
    }

    /// Take a random answer out of the pool
    ///
    /// Returns `None` once every answer has been used.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Word> {
        if self.remaining.is_empty() {
            return None;
        }
        let index = rng.random_range(0..self.remaining.len());
        let answer = self.remaining.swap_remove(index);
        debug!("drew answer, {} left in pool", self.remaining.len());
        Some(answer)
    }

    /// Take a random answer using the thread-local generator
    pub fn draw_random(&mut self) -> Option<Word> {
        self.draw(&mut rand::rng())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }
}
