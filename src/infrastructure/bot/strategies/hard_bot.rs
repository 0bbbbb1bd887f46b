//! Hard bot strategy
//!
//! Always plays the move of the configured search engine.

use rand::RngCore;

use super::{search_move, BotStrategy, SearchOptions};
use crate::domain::errors::GameError;
use crate::domain::value_objects::{Difficulty, Move};

/// Hard difficulty bot strategy
pub struct HardBotStrategy;

impl HardBotStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HardBotStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl BotStrategy for HardBotStrategy {
    fn difficulty(&self) -> Difficulty {
        Difficulty::Hard
    }

    fn choose_move(
        &self,
        piles: &[u32],
        options: &SearchOptions,
        rng: &mut dyn RngCore,
    ) -> Result<Move, GameError> {
        search_move(piles, options, rng)
    }
}
