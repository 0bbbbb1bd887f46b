//! Medium bot strategy
//!
//! Flips a coin every move: random play on heads, the configured search
//! engine on tails.

use rand::{Rng, RngCore};

use super::{search_move, BotStrategy, SearchOptions};
use crate::domain::errors::GameError;
use crate::domain::services::random_move;
use crate::domain::value_objects::{Difficulty, Move};

/// Probability of a random move instead of a searched one
pub const MEDIUM_RANDOM_RATE: f64 = 0.5;

/// Medium difficulty bot strategy
pub struct MediumBotStrategy;

impl MediumBotStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MediumBotStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl BotStrategy for MediumBotStrategy {
    fn difficulty(&self) -> Difficulty {
        Difficulty::Medium
    }

    fn choose_move(
        &self,
        piles: &[u32],
        options: &SearchOptions,
        rng: &mut dyn RngCore,
    ) -> Result<Move, GameError> {
        if rng.gen_bool(MEDIUM_RANDOM_RATE) {
            random_move(piles, rng)
        } else {
            search_move(piles, options, rng)
        }
    }
}
