use std::sync::Arc;

use crate::domain::entities::GameSession;
use crate::domain::value_objects::{Difficulty, GameSettings, SearchStrategy};
use crate::infrastructure::services::SessionStore;

/// Set options input; missing fields fall back to the defaults
#[derive(Debug)]
pub struct SetOptionsInput {
    pub strategy: Option<String>,
    pub difficulty: Option<String>,
}

/// Set options use case: replaces the opponent options and restarts the game
pub struct SetOptions {
    sessions: Arc<SessionStore>,
}

impl SetOptions {
    pub fn new(sessions: Arc<SessionStore>) -> Self {
        Self { sessions }
    }

    pub async fn execute(&self, input: SetOptionsInput) -> Result<GameSession, SetOptionsError> {
        let defaults = GameSettings::default();

        let strategy = match input.strategy {
            Some(s) => SearchStrategy::from_str(&s).ok_or(SetOptionsError::InvalidStrategy(s))?,
            None => defaults.strategy,
        };
        let difficulty = match input.difficulty {
            Some(d) => Difficulty::from_str(&d).ok_or(SetOptionsError::InvalidDifficulty(d))?,
            None => defaults.difficulty,
        };

        let mut slot = self.sessions.lock().await;
        slot.session.reset(GameSettings::new(strategy, difficulty));

        tracing::info!(
            strategy = strategy.as_str(),
            difficulty = difficulty.as_str(),
            piles = ?slot.session.piles,
            "Game reset with new options"
        );

        Ok(slot.session.clone())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SetOptionsError {
    #[error("Unknown strategy: {0}")]
    InvalidStrategy(String),
    #[error("Unknown difficulty: {0}")]
    InvalidDifficulty(String),
}
