use crate::domain::value_objects::{Player, Turn};

/// Errors raised by the game rules and the search engines
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("Invalid move: cannot remove {remove} from pile {pile}")]
    InvalidMove { pile: usize, remove: u32 },
    #[error("Not {player}'s turn (turn: {turn})")]
    WrongTurn { player: Player, turn: Turn },
    #[error("No legal moves: the game is already over")]
    NoLegalMoves,
}
