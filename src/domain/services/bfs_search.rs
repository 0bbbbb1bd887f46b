//! Bounded breadth-first search for a winning line
//!
//! Explores positions level by level from the AI's turn and returns the
//! first AI move of the first line found where the AI takes the last stone.
//! The line only needs to exist, not to be forced: the human replies are
//! explored like any other branch. Only AI moves count against the depth
//! budget.
//!
//! Visited positions are keyed by the ordered pile tuple and the side to
//! move. Unlike minimax, permutations of one configuration are distinct
//! states here.

use std::collections::{HashSet, VecDeque};

use rand::Rng;
use smallvec::SmallVec;

use super::nim_rules::{apply_move, generate_moves, is_terminal, random_move};
use crate::domain::errors::GameError;
use crate::domain::value_objects::{Move, Piles};

/// AI-move budget used when none is configured
pub const DEFAULT_BFS_DEPTH: usize = 4;

/// One step of an explored line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PathStep {
    Ai(Move),
    Human(Move),
}

type Path = SmallVec<[PathStep; 8]>;

struct Frontier {
    piles: Piles,
    ai_to_move: bool,
    path: Path,
}

impl Frontier {
    fn ai_moves(&self) -> usize {
        self.path
            .iter()
            .filter(|step| matches!(step, PathStep::Ai(_)))
            .count()
    }

    fn first_ai_move(&self) -> Option<Move> {
        self.path.iter().find_map(|step| match step {
            PathStep::Ai(mv) => Some(*mv),
            PathStep::Human(_) => None,
        })
    }
}

/// Result of one breadth-first run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BfsOutcome {
    mv: Option<Move>,
    /// Non-terminal positions whose moves were generated
    expanded: usize,
    /// Distinct (ordered piles, side to move) states ever enqueued
    visited: usize,
}

/// First AI move of a winning line within `max_depth` AI moves, if any
pub fn find_winning_move(piles: &[u32], max_depth: usize) -> Option<Move> {
    let outcome = search(piles, max_depth);
    tracing::debug!(
        expanded = outcome.expanded,
        visited = outcome.visited,
        found = outcome.mv.is_some(),
        "bfs finished"
    );
    outcome.mv
}

fn search(piles: &[u32], max_depth: usize) -> BfsOutcome {
    let root = Frontier {
        piles: Piles::from_slice(piles),
        ai_to_move: true,
        path: Path::new(),
    };
    let mut visited: HashSet<(Piles, bool)> = HashSet::new();
    visited.insert((root.piles.clone(), true));
    let mut queue = VecDeque::from([root]);
    let mut expanded = 0usize;

    while let Some(node) = queue.pop_front() {
        if node.ai_moves() > max_depth {
            continue;
        }

        if is_terminal(&node.piles) {
            // Human to move on an empty board: the AI took the last stone
            if !node.ai_to_move {
                if let Some(mv) = node.first_ai_move() {
                    return BfsOutcome {
                        mv: Some(mv),
                        expanded,
                        visited: visited.len(),
                    };
                }
            }
            continue;
        }

        expanded += 1;
        for mv in generate_moves(&node.piles) {
            let child = apply_move(&node.piles, mv);
            if !visited.insert((child.clone(), !node.ai_to_move)) {
                continue;
            }
            let mut path = node.path.clone();
            path.push(if node.ai_to_move {
                PathStep::Ai(mv)
            } else {
                PathStep::Human(mv)
            });
            queue.push_back(Frontier {
                piles: child,
                ai_to_move: !node.ai_to_move,
                path,
            });
        }
    }

    BfsOutcome {
        mv: None,
        expanded,
        visited: visited.len(),
    }
}

/// AI move from the bounded breadth-first search.
///
/// Falls back to a random legal move of `piles` itself when no winning line
/// fits in the budget. Fails on a finished game.
pub fn best_move_bfs<R: Rng + ?Sized>(
    piles: &[u32],
    max_depth: usize,
    rng: &mut R,
) -> Result<Move, GameError> {
    if is_terminal(piles) {
        return Err(GameError::NoLegalMoves);
    }

    match find_winning_move(piles, max_depth) {
        Some(mv) => Ok(mv),
        None => {
            tracing::debug!(piles = ?piles, max_depth, "no winning line, playing at random");
            random_move(piles, rng)
        }
    }
}
