pub mod game;
pub mod health;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::api::sse::sse_handler;
use crate::api::AppState;

/// Create the game router.
///
/// Paths match the ones the browser client already calls.
pub fn create_game_router(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/state", get(game::get_state))
        .route("/set_options", post(game::set_options))
        .route("/move/human", post(game::human_move))
        .route("/move/ai", post(game::ai_move))
        .route("/events", get(sse_handler))
        .route("/health", get(health::health_handler))
        .with_state(state)
}
