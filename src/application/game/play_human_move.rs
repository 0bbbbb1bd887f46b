use std::sync::Arc;

use crate::domain::errors::GameError;
use crate::domain::value_objects::{Move, Piles, Player, Turn};
use crate::infrastructure::services::SessionStore;

/// Human move input, as loosely typed as the request body
#[derive(Debug)]
pub struct PlayHumanMoveInput {
    pub pile: Option<i64>,
    pub remove: Option<i64>,
}

/// Human move output
#[derive(Debug)]
pub struct PlayHumanMoveOutput {
    pub piles: Piles,
    /// `Some(Human)` when this move took the last stone
    pub winner: Option<Player>,
}

/// Play human move use case
pub struct PlayHumanMove {
    sessions: Arc<SessionStore>,
}

impl PlayHumanMove {
    pub fn new(sessions: Arc<SessionStore>) -> Self {
        Self { sessions }
    }

    pub async fn execute(
        &self,
        input: PlayHumanMoveInput,
    ) -> Result<PlayHumanMoveOutput, PlayHumanMoveError> {
        let mut slot = self.sessions.lock().await;

        // Turn is checked before the body is even looked at
        if slot.session.turn != Turn::Human {
            return Err(PlayHumanMoveError::NotYourTurn);
        }

        let mv = parse_move(input.pile, input.remove).ok_or(PlayHumanMoveError::InvalidMove)?;
        let winner = slot.session.play(Player::Human, mv)?;

        tracing::info!(
            pile = mv.pile,
            remove = mv.remove,
            piles = ?slot.session.piles,
            "Human move played"
        );
        if winner.is_some() {
            tracing::info!("Human took the last stone and wins");
        }

        Ok(PlayHumanMoveOutput {
            piles: slot.session.piles.clone(),
            winner,
        })
    }
}

/// Missing or negative fields cannot form a move
fn parse_move(pile: Option<i64>, remove: Option<i64>) -> Option<Move> {
    let pile = usize::try_from(pile?).ok()?;
    let remove = u32::try_from(remove?).ok()?;
    Some(Move::new(pile, remove))
}

#[derive(Debug, thiserror::Error)]
pub enum PlayHumanMoveError {
    #[error("Not your turn")]
    NotYourTurn,
    #[error("Invalid move")]
    InvalidMove,
}

impl From<GameError> for PlayHumanMoveError {
    fn from(err: GameError) -> Self {
        match err {
            GameError::WrongTurn { .. } => PlayHumanMoveError::NotYourTurn,
            GameError::InvalidMove { .. } | GameError::NoLegalMoves => {
                PlayHumanMoveError::InvalidMove
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::default_piles;

    fn use_case(piles: &[u32]) -> (PlayHumanMove, Arc<SessionStore>) {
        let sessions = Arc::new(SessionStore::new(Piles::from_slice(piles), Some(1)));
        (PlayHumanMove::new(sessions.clone()), sessions)
    }

    fn input(pile: i64, remove: i64) -> PlayHumanMoveInput {
        PlayHumanMoveInput {
            pile: Some(pile),
            remove: Some(remove),
        }
    }

    #[tokio::test]
    async fn test_valid_move_passes_turn() {
        let (use_case, sessions) = use_case(&default_piles());

        let output = use_case.execute(input(1, 5)).await.unwrap();
        assert_eq!(output.piles.as_slice(), &[3, 0, 2]);
        assert_eq!(output.winner, None);
        assert_eq!(sessions.snapshot().await.turn, Turn::Ai);
    }

    #[tokio::test]
    async fn test_second_move_is_out_of_turn() {
        let (use_case, _) = use_case(&default_piles());
        use_case.execute(input(0, 1)).await.unwrap();

        let err = use_case.execute(input(0, 1)).await.unwrap_err();
        assert!(matches!(err, PlayHumanMoveError::NotYourTurn));
    }

    #[tokio::test]
    async fn test_invalid_inputs() {
        let (use_case, sessions) = use_case(&default_piles());

        for bad in [
            input(-1, 1),
            input(3, 1),
            input(0, 0),
            input(0, -2),
            input(0, 4),
            PlayHumanMoveInput {
                pile: None,
                remove: Some(1),
            },
            PlayHumanMoveInput {
                pile: Some(0),
                remove: None,
            },
        ] {
            let err = use_case.execute(bad).await.unwrap_err();
            assert!(matches!(err, PlayHumanMoveError::InvalidMove));
        }

        let session = sessions.snapshot().await;
        assert_eq!(session.piles.as_slice(), &[3, 5, 2]);
        assert_eq!(session.turn, Turn::Human);
    }

    #[tokio::test]
    async fn test_last_stone_wins() {
        let (use_case, sessions) = use_case(&[0, 0, 2]);

        let output = use_case.execute(input(2, 2)).await.unwrap();
        assert_eq!(output.winner, Some(Player::Human));
        assert!(sessions.snapshot().await.is_over());

        let err = use_case.execute(input(0, 1)).await.unwrap_err();
        assert!(matches!(err, PlayHumanMoveError::NotYourTurn));
    }
}
