//! Minimax search with alpha-beta pruning and memoization
//!
//! Values are always seen from the AI (maximizing) side. Positions are
//! memoized under their canonical key plus the side to move, so permuted
//! configurations share one entry.
//!
//! An alpha-beta cutoff only proves a bound on a node's value, so every memo
//! entry records whether it is exact or a lower/upper bound. Bounds are
//! reused only when they already decide the caller's window.
//!
//! # Example
//!
//! ```
//! use nim_backend::domain::services::MinimaxSearch;
//! use nim_backend::domain::value_objects::SearchValue;
//! use rand::SeedableRng;
//!
//! let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(1);
//! let mut search = MinimaxSearch::new();
//! let best = search.best_move(&[3, 5, 2], &mut rng).unwrap();
//! assert_eq!(best.value, SearchValue::AiWins);
//! ```

use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;

use super::nim_rules::{apply_move, generate_moves, is_terminal, piles_key};
use crate::domain::errors::GameError;
use crate::domain::value_objects::{Move, PilesKey, SearchValue};

/// Alpha-beta window bound, outside the -1..=1 score range
pub const INF: i8 = 2;

/// How a memoized value relates to the true value of the position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bound {
    Exact,
    /// True value is at least the stored one (fail-high)
    Lower,
    /// True value is at most the stored one (fail-low)
    Upper,
}

#[derive(Debug, Clone, Copy)]
struct MemoEntry {
    value: SearchValue,
    bound: Bound,
}

/// Memo table for one top-level search, keyed by (canonical piles, AI to move)
#[derive(Debug, Default)]
pub struct Memo {
    entries: HashMap<(PilesKey, bool), MemoEntry>,
    nodes: u64,
}

impl Memo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Distinct positions stored
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Positions expanded (memo misses)
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    fn probe(&self, key: &(PilesKey, bool), alpha: i8, beta: i8) -> Option<SearchValue> {
        let entry = self.entries.get(key)?;
        let score = entry.value.score();
        match entry.bound {
            Bound::Exact => Some(entry.value),
            Bound::Lower if score >= beta => Some(entry.value),
            Bound::Upper if score <= alpha => Some(entry.value),
            _ => None,
        }
    }

    fn store(&mut self, key: (PilesKey, bool), value: SearchValue, bound: Bound) {
        // A bound at the edge of the score range is already exact
        let bound = match (bound, value) {
            (Bound::Lower, SearchValue::AiWins) | (Bound::Upper, SearchValue::HumanWins) => {
                Bound::Exact
            }
            _ => bound,
        };
        self.entries.insert(key, MemoEntry { value, bound });
    }
}

/// Value of `piles` with `maximizing` telling whether the AI is to move.
///
/// Terminal positions are lost by the side to move: the opponent just took
/// the last stone.
pub fn minimax(
    piles: &[u32],
    maximizing: bool,
    mut alpha: i8,
    mut beta: i8,
    memo: &mut Memo,
) -> SearchValue {
    let key = (piles_key(piles), maximizing);
    if let Some(value) = memo.probe(&key, alpha, beta) {
        return value;
    }
    memo.nodes += 1;

    if is_terminal(piles) {
        let value = if maximizing {
            SearchValue::HumanWins
        } else {
            SearchValue::AiWins
        };
        memo.store(key, value, Bound::Exact);
        return value;
    }

    let (alpha_in, beta_in) = (alpha, beta);
    let value = if maximizing {
        let mut best = SearchValue::HumanWins;
        for mv in generate_moves(piles) {
            let child = apply_move(piles, mv);
            best = best.max(minimax(&child, false, alpha, beta, memo));
            alpha = alpha.max(best.score());
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let mut best = SearchValue::AiWins;
        for mv in generate_moves(piles) {
            let child = apply_move(piles, mv);
            best = best.min(minimax(&child, true, alpha, beta, memo));
            beta = beta.min(best.score());
            if beta <= alpha {
                break;
            }
        }
        best
    };

    let bound = if value.score() <= alpha_in {
        Bound::Upper
    } else if value.score() >= beta_in {
        Bound::Lower
    } else {
        Bound::Exact
    };
    memo.store(key, value, bound);
    value
}

/// Best root move together with its value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    pub mv: Move,
    pub value: SearchValue,
}

/// Minimax searcher owning the memo of one top-level search.
///
/// Create a fresh searcher per game position so the memo never grows
/// across unrelated games.
#[derive(Debug, Default)]
pub struct MinimaxSearch {
    memo: Memo,
}

impl MinimaxSearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> u64 {
        self.memo.nodes()
    }

    pub fn memo_len(&self) -> usize {
        self.memo.len()
    }

    /// Exact value of `piles` with the given side to move
    pub fn evaluate(&mut self, piles: &[u32], ai_to_move: bool) -> SearchValue {
        minimax(piles, ai_to_move, -INF, INF, &mut self.memo)
    }

    /// Best move for the AI, ties broken uniformly at random.
    ///
    /// Each root move is searched with a full window, so root values are
    /// exact.
    pub fn best_move<R: Rng + ?Sized>(
        &mut self,
        piles: &[u32],
        rng: &mut R,
    ) -> Result<ScoredMove, GameError> {
        let mut best_value: Option<SearchValue> = None;
        let mut best_moves: Vec<Move> = Vec::new();

        for mv in generate_moves(piles) {
            let child = apply_move(piles, mv);
            let value = minimax(&child, false, -INF, INF, &mut self.memo);
            match best_value {
                Some(best) if value < best => {}
                Some(best) if value == best => best_moves.push(mv),
                _ => {
                    best_value = Some(value);
                    best_moves.clear();
                    best_moves.push(mv);
                }
            }
        }

        let value = best_value.ok_or(GameError::NoLegalMoves)?;
        let mv = *best_moves.choose(rng).ok_or(GameError::NoLegalMoves)?;
        Ok(ScoredMove { mv, value })
    }
}

/// Optimal AI move for `piles`; fails on a finished game
pub fn best_move_minimax<R: Rng + ?Sized>(piles: &[u32], rng: &mut R) -> Result<Move, GameError> {
    let mut search = MinimaxSearch::new();
    let best = search.best_move(piles, rng)?;
    tracing::debug!(
        piles = ?piles,
        chosen = ?best.mv,
        value = ?best.value,
        nodes = search.nodes(),
        memo = search.memo_len(),
        "minimax search finished"
    );
    Ok(best.mv)
}
