//! Bot strategies module
//!
//! One strategy per difficulty. Each blends random play with the search
//! engine selected in the session options.

mod easy_bot;
mod hard_bot;
mod medium_bot;

pub use easy_bot::*;
pub use hard_bot::*;
pub use medium_bot::*;

use rand::RngCore;

use crate::domain::errors::GameError;
use crate::domain::services::{best_move_bfs, best_move_minimax, is_terminal, DEFAULT_BFS_DEPTH};
use crate::domain::value_objects::{Difficulty, Move, SearchStrategy};

/// Which engine to search with, and how deep the breadth-first one goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    pub strategy: SearchStrategy,
    pub bfs_max_depth: usize,
}

impl SearchOptions {
    pub fn new(strategy: SearchStrategy, bfs_max_depth: usize) -> Self {
        Self {
            strategy,
            bfs_max_depth,
        }
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self::new(SearchStrategy::Minimax, DEFAULT_BFS_DEPTH)
    }
}

/// Bot strategy trait
pub trait BotStrategy: Send + Sync {
    fn difficulty(&self) -> Difficulty;

    /// Pick a move for a position that still has one
    fn choose_move(
        &self,
        piles: &[u32],
        options: &SearchOptions,
        rng: &mut dyn RngCore,
    ) -> Result<Move, GameError>;
}

/// Run the engine named in `options`
pub fn search_move(
    piles: &[u32],
    options: &SearchOptions,
    rng: &mut dyn RngCore,
) -> Result<Move, GameError> {
    match options.strategy {
        SearchStrategy::Minimax => best_move_minimax(piles, rng),
        SearchStrategy::Bfs => best_move_bfs(piles, options.bfs_max_depth, rng),
    }
}

pub fn bot_for_difficulty(difficulty: Difficulty) -> Box<dyn BotStrategy> {
    match difficulty {
        Difficulty::Easy => Box::new(EasyBotStrategy::new()),
        Difficulty::Medium => Box::new(MediumBotStrategy::new()),
        Difficulty::Hard => Box::new(HardBotStrategy::new()),
    }
}

/// The computer opponent's move, or `None` when it has nothing to play
pub fn select_ai_move(
    piles: &[u32],
    difficulty: Difficulty,
    options: &SearchOptions,
    rng: &mut dyn RngCore,
) -> Result<Option<Move>, GameError> {
    if is_terminal(piles) {
        return Ok(None);
    }

    let bot = bot_for_difficulty(difficulty);
    bot.choose_move(piles, options, rng).map(Some)
}
