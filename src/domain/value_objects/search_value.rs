use serde::Serialize;

/// Game-theoretic value of a position, seen from the AI (maximizing) side.
///
/// Variants are declared in ascending order so `Ord` matches the numeric
/// score. `Draw` cannot occur under normal play but stays representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SearchValue {
    HumanWins,
    Draw,
    AiWins,
}

impl SearchValue {
    /// Numeric score: -1, 0 or +1
    pub fn score(&self) -> i8 {
        match self {
            SearchValue::HumanWins => -1,
            SearchValue::Draw => 0,
            SearchValue::AiWins => 1,
        }
    }
}
