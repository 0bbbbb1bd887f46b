use std::sync::Arc;

use crate::domain::errors::GameError;
use crate::domain::value_objects::{Move, Piles, Player, Turn};
use crate::infrastructure::bot::strategies::{select_ai_move, SearchOptions};
use crate::infrastructure::services::SessionStore;

/// AI move output
#[derive(Debug)]
pub struct PlayAiMoveOutput {
    pub piles: Piles,
    /// `Some(Ai)` when the AI took the last stone, `Some(Human)` when it had
    /// nothing left to play
    pub winner: Option<Player>,
    /// Move taken; `None` when there was none
    pub mv: Option<Move>,
}

/// Play AI move use case
pub struct PlayAiMove {
    sessions: Arc<SessionStore>,
    bfs_max_depth: usize,
}

impl PlayAiMove {
    pub fn new(sessions: Arc<SessionStore>, bfs_max_depth: usize) -> Self {
        Self {
            sessions,
            bfs_max_depth,
        }
    }

    pub async fn execute(&self) -> Result<PlayAiMoveOutput, PlayAiMoveError> {
        let mut guard = self.sessions.lock().await;
        let slot = &mut *guard;

        if slot.session.turn != Turn::Ai {
            return Err(PlayAiMoveError::NotAiTurn);
        }

        let session = &mut slot.session;
        let options = SearchOptions::new(session.strategy, self.bfs_max_depth);
        let choice = select_ai_move(&session.piles, session.difficulty, &options, &mut slot.rng)?;

        let Some(mv) = choice else {
            let winner = session.forfeit(Player::Ai);
            tracing::info!(piles = ?session.piles, "AI has no legal move, game over");
            return Ok(PlayAiMoveOutput {
                piles: session.piles.clone(),
                winner: Some(winner),
                mv: None,
            });
        };

        let winner = session.play(Player::Ai, mv)?;
        tracing::info!(
            strategy = session.strategy.as_str(),
            difficulty = session.difficulty.as_str(),
            pile = mv.pile,
            remove = mv.remove,
            piles = ?session.piles,
            "AI move played"
        );
        if winner.is_some() {
            tracing::info!("AI took the last stone and wins");
        }

        Ok(PlayAiMoveOutput {
            piles: session.piles.clone(),
            winner,
            mv: Some(mv),
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PlayAiMoveError {
    #[error("Not AI turn")]
    NotAiTurn,
    #[error("Game error: {0}")]
    Game(#[from] GameError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::DEFAULT_BFS_DEPTH;
    use crate::domain::value_objects::{
        default_piles, Difficulty, GameSettings, SearchStrategy,
    };

    async fn ai_to_move(piles: &[u32], settings: GameSettings) -> Arc<SessionStore> {
        let sessions = Arc::new(SessionStore::new(Piles::from_slice(piles), Some(21)));
        {
            let mut slot = sessions.lock().await;
            slot.session.reset(settings);
            slot.session.turn = Turn::Ai;
        }
        sessions
    }

    #[tokio::test]
    async fn test_rejected_on_human_turn() {
        let sessions = Arc::new(SessionStore::new(default_piles(), Some(21)));
        let err = PlayAiMove::new(sessions, DEFAULT_BFS_DEPTH)
            .execute()
            .await
            .unwrap_err();
        assert!(matches!(err, PlayAiMoveError::NotAiTurn));
    }

    #[tokio::test]
    async fn test_hard_minimax_plays_optimally() {
        let settings = GameSettings::new(SearchStrategy::Minimax, Difficulty::Hard);
        let sessions = ai_to_move(&[3, 0, 2], settings).await;

        let output = PlayAiMove::new(sessions.clone(), DEFAULT_BFS_DEPTH)
            .execute()
            .await
            .unwrap();

        assert_eq!(output.mv, Some(Move::new(0, 1)));
        assert_eq!(output.piles.as_slice(), &[2, 0, 2]);
        assert_eq!(output.winner, None);
        assert_eq!(sessions.snapshot().await.turn, Turn::Human);
    }

    #[tokio::test]
    async fn test_taking_last_stone_ends_game() {
        let settings = GameSettings::new(SearchStrategy::Bfs, Difficulty::Hard);
        let sessions = ai_to_move(&[0, 4, 0], settings).await;

        let output = PlayAiMove::new(sessions.clone(), DEFAULT_BFS_DEPTH)
            .execute()
            .await
            .unwrap();

        assert_eq!(output.mv, Some(Move::new(1, 4)));
        assert_eq!(output.winner, Some(Player::Ai));
        assert!(sessions.snapshot().await.is_over());
    }

    #[tokio::test]
    async fn test_empty_board_forfeits() {
        let settings = GameSettings::new(SearchStrategy::Minimax, Difficulty::Easy);
        let sessions = ai_to_move(&[0, 0], settings).await;

        let output = PlayAiMove::new(sessions.clone(), DEFAULT_BFS_DEPTH)
            .execute()
            .await
            .unwrap();

        assert_eq!(output.mv, None);
        assert_eq!(output.winner, Some(Player::Human));
        assert!(sessions.snapshot().await.is_over());
    }
}
