//! Piles and moves - the board representation of a Nim game
//!
//! A game has a handful of piles, so configurations are kept inline.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Inline capacity for pile configurations
pub const MAX_INLINE_PILES: usize = 8;

/// Most piles a configured game may start with
pub const MAX_PILES: usize = 5;

/// Most stones a configured pile may start with
pub const MAX_PILE_STONES: u32 = 10;

/// Piles every new game starts with
pub const DEFAULT_PILES: [u32; 3] = [3, 5, 2];

/// Ordered pile configuration, one stone count per pile
pub type Piles = SmallVec<[u32; MAX_INLINE_PILES]>;

/// Build the default starting configuration
pub fn default_piles() -> Piles {
    Piles::from_slice(&DEFAULT_PILES)
}

/// Whether `piles` is a playable starting configuration: between one and
/// `MAX_PILES` piles, none above `MAX_PILE_STONES`, at least one stone.
///
/// Both searches run to completion under the session lock, so their state
/// space has to stay small.
pub fn is_valid_start(piles: &[u32]) -> bool {
    !piles.is_empty()
        && piles.len() <= MAX_PILES
        && piles.iter().all(|&stones| stones <= MAX_PILE_STONES)
        && piles.iter().any(|&stones| stones > 0)
}

/// A single move: take `remove` stones from pile `pile`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub pile: usize,
    pub remove: u32,
}

impl Move {
    pub fn new(pile: usize, remove: u32) -> Self {
        Self { pile, remove }
    }

    /// Whether the move can be played on `piles`
    pub fn is_legal(&self, piles: &[u32]) -> bool {
        match piles.get(self.pile) {
            Some(&stones) => self.remove >= 1 && self.remove <= stones,
            None => false,
        }
    }
}

/// Order-independent identity of a configuration (values sorted descending)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PilesKey(Piles);

impl PilesKey {
    pub fn new(piles: &[u32]) -> Self {
        let mut sorted = Piles::from_slice(piles);
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        Self(sorted)
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_legality() {
        let piles = [3u32, 0, 2];

        assert!(Move::new(0, 1).is_legal(&piles));
        assert!(Move::new(0, 3).is_legal(&piles));
        assert!(Move::new(2, 2).is_legal(&piles));

        assert!(!Move::new(0, 0).is_legal(&piles));
        assert!(!Move::new(0, 4).is_legal(&piles));
        assert!(!Move::new(1, 1).is_legal(&piles));
        assert!(!Move::new(3, 1).is_legal(&piles));
    }

    #[test]
    fn test_start_limits() {
        assert!(is_valid_start(&DEFAULT_PILES));
        assert!(is_valid_start(&[MAX_PILE_STONES; MAX_PILES]));
        assert!(is_valid_start(&[0, 1]));

        assert!(!is_valid_start(&[]));
        assert!(!is_valid_start(&[0, 0, 0]));
        assert!(!is_valid_start(&[MAX_PILE_STONES + 1]));
        assert!(!is_valid_start(&[u32::MAX, 1]));
        assert!(!is_valid_start(&[1; MAX_PILES + 1]));
    }

    #[test]
    fn test_key_sorts_descending() {
        let key = PilesKey::new(&[2, 0, 3]);
        assert_eq!(key.as_slice(), &[3, 2, 0]);
    }

    #[test]
    fn test_move_wire_format() {
        let json = serde_json::to_value(Move::new(1, 5)).unwrap();
        assert_eq!(json, serde_json::json!({"pile": 1, "remove": 5}));
    }
}
