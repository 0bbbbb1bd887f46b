use serde::Serialize;

use crate::domain::errors::GameError;
use crate::domain::services::{apply_move, is_terminal};
use crate::domain::value_objects::{
    default_piles, Difficulty, GameSettings, Move, Piles, Player, SearchStrategy, Turn,
};

/// The one game record a server instance plays
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSession {
    pub piles: Piles,
    pub turn: Turn,
    pub strategy: SearchStrategy,
    pub difficulty: Difficulty,
    /// Configuration restored on every reset
    #[serde(skip)]
    initial_piles: Piles,
    #[serde(skip)]
    pub updated_at: i64,
}

impl GameSession {
    /// Create a session on `initial_piles`, human to move, default options
    pub fn new(initial_piles: Piles) -> Self {
        let settings = GameSettings::default();
        Self {
            piles: initial_piles.clone(),
            turn: Turn::Human,
            strategy: settings.strategy,
            difficulty: settings.difficulty,
            initial_piles,
            updated_at: chrono::Utc::now().timestamp(),
        }
    }

    /// Apply new options and start over from the initial piles
    pub fn reset(&mut self, settings: GameSettings) {
        self.strategy = settings.strategy;
        self.difficulty = settings.difficulty;
        self.piles = self.initial_piles.clone();
        self.turn = Turn::Human;
        self.touch();
    }

    pub fn is_over(&self) -> bool {
        self.turn == Turn::None
    }

    /// Check turn ownership first, then move legality
    pub fn validate_move(&self, player: Player, mv: Move) -> Result<(), GameError> {
        if self.turn != Turn::from(player) {
            return Err(GameError::WrongTurn {
                player,
                turn: self.turn,
            });
        }
        if !mv.is_legal(&self.piles) {
            return Err(GameError::InvalidMove {
                pile: mv.pile,
                remove: mv.remove,
            });
        }
        Ok(())
    }

    /// Play `mv` for `player`. Returns the winner when the move empties the
    /// board, which also ends the game.
    pub fn play(&mut self, player: Player, mv: Move) -> Result<Option<Player>, GameError> {
        self.validate_move(player, mv)?;
        self.piles = apply_move(&self.piles, mv);
        self.touch();

        if is_terminal(&self.piles) {
            self.turn = Turn::None;
            return Ok(Some(player));
        }

        self.turn = Turn::from(player.opponent());
        Ok(None)
    }

    /// End the game because `player` has no move; the opponent wins
    pub fn forfeit(&mut self, player: Player) -> Player {
        self.turn = Turn::None;
        self.touch();
        player.opponent()
    }

    fn touch(&mut self) {
        self.updated_at = chrono::Utc::now().timestamp();
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(default_piles())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_defaults() {
        let session = GameSession::default();
        assert_eq!(session.piles.as_slice(), &[3, 5, 2]);
        assert_eq!(session.turn, Turn::Human);
        assert_eq!(session.strategy, SearchStrategy::Minimax);
        assert_eq!(session.difficulty, Difficulty::Medium);
    }

    #[test]
    fn test_play_alternates_turns() {
        let mut session = GameSession::default();

        assert_eq!(session.play(Player::Human, Move::new(1, 5)), Ok(None));
        assert_eq!(session.piles.as_slice(), &[3, 0, 2]);
        assert_eq!(session.turn, Turn::Ai);

        assert_eq!(session.play(Player::Ai, Move::new(0, 1)), Ok(None));
        assert_eq!(session.turn, Turn::Human);
    }

    #[test]
    fn test_wrong_turn_rejected() {
        let mut session = GameSession::default();
        let err = session.play(Player::Ai, Move::new(0, 1)).unwrap_err();
        assert_eq!(
            err,
            GameError::WrongTurn {
                player: Player::Ai,
                turn: Turn::Human
            }
        );
        assert_eq!(session.piles.as_slice(), &[3, 5, 2]);
    }

    #[test]
    fn test_invalid_moves_rejected() {
        let mut session = GameSession::default();
        for mv in [Move::new(3, 1), Move::new(0, 0), Move::new(2, 3)] {
            assert_eq!(
                session.play(Player::Human, mv),
                Err(GameError::InvalidMove {
                    pile: mv.pile,
                    remove: mv.remove
                })
            );
        }
        assert_eq!(session.turn, Turn::Human);
    }

    #[test]
    fn test_last_stone_ends_game() {
        let mut session = GameSession::new(Piles::from_slice(&[0, 2]));
        assert_eq!(session.play(Player::Human, Move::new(1, 2)), Ok(Some(Player::Human)));
        assert!(session.is_over());

        // No one moves until options are reset
        assert!(matches!(
            session.play(Player::Ai, Move::new(1, 1)),
            Err(GameError::WrongTurn { .. })
        ));
        assert!(matches!(
            session.play(Player::Human, Move::new(1, 1)),
            Err(GameError::WrongTurn { .. })
        ));
    }

    #[test]
    fn test_reset_restores_initial_piles() {
        let mut session = GameSession::default();
        session.play(Player::Human, Move::new(0, 3)).unwrap();

        session.reset(GameSettings::new(SearchStrategy::Bfs, Difficulty::Hard));
        assert_eq!(session.piles.as_slice(), &[3, 5, 2]);
        assert_eq!(session.turn, Turn::Human);
        assert_eq!(session.strategy, SearchStrategy::Bfs);
        assert_eq!(session.difficulty, Difficulty::Hard);
    }

    #[test]
    fn test_forfeit() {
        let mut session = GameSession::default();
        assert_eq!(session.forfeit(Player::Ai), Player::Human);
        assert!(session.is_over());
    }

    #[test]
    fn test_snapshot_shape() {
        let json = serde_json::to_value(GameSession::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "piles": [3, 5, 2],
                "turn": "human",
                "strategy": "Minimax",
                "difficulty": "Medium"
            })
        );
    }
}
