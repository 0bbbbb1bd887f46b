//! Domain services - pure Nim rules and the two search engines

pub mod bfs_search;
pub mod minimax;
pub mod nim_rules;

pub use bfs_search::{best_move_bfs, find_winning_move, DEFAULT_BFS_DEPTH};
pub use minimax::{best_move_minimax, minimax, Memo, MinimaxSearch, ScoredMove, INF};
pub use nim_rules::{apply_move, generate_moves, is_terminal, nim_sum, piles_key, random_move};
