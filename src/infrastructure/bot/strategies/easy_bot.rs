//! Easy bot strategy
//!
//! Plays uniformly random legal moves and never searches.

use rand::RngCore;

use super::{BotStrategy, SearchOptions};
use crate::domain::errors::GameError;
use crate::domain::services::random_move;
use crate::domain::value_objects::{Difficulty, Move};

/// Easy difficulty bot strategy
pub struct EasyBotStrategy;

impl EasyBotStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EasyBotStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl BotStrategy for EasyBotStrategy {
    fn difficulty(&self) -> Difficulty {
        Difficulty::Easy
    }

    fn choose_move(
        &self,
        piles: &[u32],
        _options: &SearchOptions,
        rng: &mut dyn RngCore,
    ) -> Result<Move, GameError> {
        random_move(piles, rng)
    }
}
