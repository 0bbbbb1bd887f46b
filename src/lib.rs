//! Nim game backend
//!
//! The core (`domain`) holds the rules and two move-selection engines:
//! minimax with alpha-beta pruning and memoization, and a bounded
//! breadth-first search. `application` wraps them into use cases over the
//! server's single game session, and `api` exposes those over HTTP.

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
