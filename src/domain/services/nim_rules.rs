//! Nim rules - move generation, transitions and terminal detection
//!
//! Every function here is pure: configurations are borrowed and never
//! mutated, so search code can keep exploring from the same parent.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::errors::GameError;
use crate::domain::value_objects::{Move, Piles, PilesKey};

/// All legal moves, piles in index order, removal counts ascending
pub fn generate_moves(piles: &[u32]) -> Vec<Move> {
    let total: usize = piles.iter().map(|&stones| stones as usize).sum();
    let mut moves = Vec::with_capacity(total);
    for (pile, &stones) in piles.iter().enumerate() {
        for remove in 1..=stones {
            moves.push(Move::new(pile, remove));
        }
    }
    moves
}

/// Configuration reached by playing `mv` on `piles`.
///
/// `mv` must be legal for `piles`; callers pass generated or validated moves.
pub fn apply_move(piles: &[u32], mv: Move) -> Piles {
    debug_assert!(mv.is_legal(piles), "illegal move {:?} on {:?}", mv, piles);
    let mut next = Piles::from_slice(piles);
    next[mv.pile] -= mv.remove;
    next
}

/// A game is over once every pile is empty
pub fn is_terminal(piles: &[u32]) -> bool {
    piles.iter().all(|&stones| stones == 0)
}

/// Canonical memoization key: values sorted descending
pub fn piles_key(piles: &[u32]) -> PilesKey {
    PilesKey::new(piles)
}

/// XOR of all pile sizes; nonzero means the player to move can force a win
pub fn nim_sum(piles: &[u32]) -> u32 {
    piles.iter().fold(0, |acc, &stones| acc ^ stones)
}

/// Uniformly random legal move
pub fn random_move<R: Rng + ?Sized>(piles: &[u32], rng: &mut R) -> Result<Move, GameError> {
    generate_moves(piles)
        .choose(rng)
        .copied()
        .ok_or(GameError::NoLegalMoves)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    /// Every configuration of three piles holding at most `max` stones each
    fn configurations(max: u32) -> Vec<[u32; 3]> {
        let mut all = Vec::new();
        for a in 0..=max {
            for b in 0..=max {
                for c in 0..=max {
                    all.push([a, b, c]);
                }
            }
        }
        all
    }

    #[test]
    fn test_generate_moves_order() {
        let moves = generate_moves(&[2, 0, 1]);
        assert_eq!(
            moves,
            vec![Move::new(0, 1), Move::new(0, 2), Move::new(2, 1)]
        );
    }

    #[test]
    fn test_generate_moves_legal_and_non_empty() {
        for piles in configurations(4) {
            let moves = generate_moves(&piles);
            assert_eq!(moves.is_empty(), is_terminal(&piles), "piles {:?}", piles);
            assert_eq!(moves.len() as u32, piles.iter().sum::<u32>());
            assert!(moves.iter().all(|mv| mv.is_legal(&piles)));
        }
    }

    #[test]
    fn test_generate_moves_idempotent() {
        let piles = [3u32, 5, 2];
        let first = generate_moves(&piles);
        let second = generate_moves(&piles);
        assert_eq!(first, second);
        assert_eq!(piles, [3, 5, 2]);
    }

    #[test]
    fn test_apply_move_changes_one_pile() {
        for piles in configurations(3) {
            let total: u32 = piles.iter().sum();
            for mv in generate_moves(&piles) {
                let next = apply_move(&piles, mv);
                assert_eq!(next.iter().sum::<u32>(), total - mv.remove);
                for (i, (&before, &after)) in piles.iter().zip(next.iter()).enumerate() {
                    if i == mv.pile {
                        assert_eq!(after, before - mv.remove);
                    } else {
                        assert_eq!(after, before);
                    }
                }
            }
        }
    }

    #[test]
    fn test_apply_move_leaves_input_untouched() {
        let piles: Piles = Piles::from_slice(&[3, 5, 2]);
        let next = apply_move(&piles, Move::new(1, 5));
        assert_eq!(next.as_slice(), &[3, 0, 2]);
        assert_eq!(piles.as_slice(), &[3, 5, 2]);
    }

    #[test]
    fn test_is_terminal() {
        assert!(is_terminal(&[0, 0, 0]));
        assert!(is_terminal(&[]));
        assert!(!is_terminal(&[0, 1, 0]));
        assert!(generate_moves(&[0, 0, 0]).is_empty());
    }

    #[test]
    fn test_piles_key_permutation_invariant() {
        assert_eq!(piles_key(&[2, 0, 3]), piles_key(&[3, 2, 0]));
        assert_eq!(piles_key(&[1, 2, 3]), piles_key(&[3, 1, 2]));
        assert_ne!(piles_key(&[1, 2, 3]), piles_key(&[1, 2, 2]));
    }

    #[test]
    fn test_nim_sum() {
        assert_eq!(nim_sum(&[3, 5, 2]), 4);
        assert_eq!(nim_sum(&[1, 1]), 0);
        assert_eq!(nim_sum(&[3, 0, 2]), 1);
    }

    #[test]
    fn test_random_move() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..20 {
            let mv = random_move(&[3, 5, 2], &mut rng).unwrap();
            assert!(mv.is_legal(&[3, 5, 2]));
        }
        assert_eq!(
            random_move(&[0, 0], &mut rng),
            Err(GameError::NoLegalMoves)
        );
    }
}
