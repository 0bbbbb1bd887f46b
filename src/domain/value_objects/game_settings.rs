use serde::{Deserialize, Serialize};

/// Search engine the computer opponent plays with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SearchStrategy {
    #[default]
    Minimax,
    #[serde(rename = "BFS")]
    Bfs,
}

impl SearchStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchStrategy::Minimax => "Minimax",
            SearchStrategy::Bfs => "BFS",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Minimax" => Some(SearchStrategy::Minimax),
            "BFS" => Some(SearchStrategy::Bfs),
            _ => None,
        }
    }
}

/// How often the computer opponent plays at random instead of searching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Easy" => Some(Difficulty::Easy),
            "Medium" => Some(Difficulty::Medium),
            "Hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

/// Opponent options chosen by the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameSettings {
    pub strategy: SearchStrategy,
    pub difficulty: Difficulty,
}

impl GameSettings {
    pub fn new(strategy: SearchStrategy, difficulty: Difficulty) -> Self {
        Self {
            strategy,
            difficulty,
        }
    }
}
