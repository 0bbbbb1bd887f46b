use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two sides of the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Human,
    Ai,
}

impl Player {
    pub fn as_str(&self) -> &'static str {
        match self {
            Player::Human => "human",
            Player::Ai => "ai",
        }
    }

    pub fn opponent(&self) -> Player {
        match self {
            Player::Human => Player::Ai,
            Player::Ai => Player::Human,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who owns the next move; `None` once the game is over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Turn {
    #[default]
    Human,
    Ai,
    None,
}

impl Turn {
    pub fn as_str(&self) -> &'static str {
        match self {
            Turn::Human => "human",
            Turn::Ai => "ai",
            Turn::None => "none",
        }
    }
}

impl From<Player> for Turn {
    fn from(player: Player) -> Self {
        match player {
            Player::Human => Turn::Human,
            Player::Ai => Turn::Ai,
        }
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
