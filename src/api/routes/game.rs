use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};

use crate::api::AppState;
use crate::application::game::{
    GetGameState, PlayAiMove, PlayAiMoveError, PlayHumanMove, PlayHumanMoveError,
    PlayHumanMoveInput, SetOptions, SetOptionsError, SetOptionsInput,
};
use crate::domain::entities::GameSession;
use crate::domain::value_objects::{Difficulty, Move, Piles, Player, SearchStrategy, Turn};
use crate::infrastructure::app_state::GameEvent;

// ============================================================================
// Request/Response DTOs
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct SetOptionsRequest {
    pub strategy: Option<String>,
    pub difficulty: Option<String>,
}

/// Fields stay loosely typed so bad values are reported as invalid moves
#[derive(Debug, Default, Deserialize)]
pub struct HumanMoveRequest {
    pub pile: Option<i64>,
    pub remove: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct GameStateResponse {
    pub piles: Piles,
    pub turn: Turn,
    pub strategy: SearchStrategy,
    pub difficulty: Difficulty,
}

impl From<GameSession> for GameStateResponse {
    fn from(session: GameSession) -> Self {
        Self {
            piles: session.piles,
            turn: session.turn,
            strategy: session.strategy,
            difficulty: session.difficulty,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HumanMoveResponse {
    pub piles: Piles,
    pub winner: Option<Player>,
}

#[derive(Debug, Serialize)]
pub struct AiMoveResponse {
    pub piles: Piles,
    pub winner: Option<Player>,
    #[serde(rename = "move")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mv: Option<Move>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn error_response(status: StatusCode, code: &str, error: String) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error,
            code: code.to_string(),
            details: None,
        }),
    )
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /state - Current session
pub async fn get_state(State(state): State<Arc<AppState>>) -> Json<GameStateResponse> {
    let session = GetGameState::new(state.sessions.clone()).execute().await;
    Json(session.into())
}

/// POST /set_options - Change strategy/difficulty and restart the game
pub async fn set_options(
    State(state): State<Arc<AppState>>,
    body: Option<Json<SetOptionsRequest>>,
) -> Result<Json<GameStateResponse>, ApiError> {
    let body = body.map(|Json(b)| b).unwrap_or_default();
    let session = SetOptions::new(state.sessions.clone())
        .execute(SetOptionsInput {
            strategy: body.strategy,
            difficulty: body.difficulty,
        })
        .await
        .map_err(|e| {
            let details = match &e {
                SetOptionsError::InvalidStrategy(_) => "Expected Minimax or BFS",
                SetOptionsError::InvalidDifficulty(_) => "Expected Easy, Medium or Hard",
            };
            let (status, Json(mut response)) =
                error_response(StatusCode::BAD_REQUEST, "INVALID_OPTIONS", e.to_string());
            response.details = Some(details.to_string());
            (status, Json(response))
        })?;

    let event = GameEvent::new("gameUpdate")
        .with_action("optionsChanged")
        .with_data(serde_json::json!({
            "piles": session.piles,
            "turn": session.turn,
            "strategy": session.strategy,
            "difficulty": session.difficulty,
        }));
    state.broadcast_event(event);

    Ok(Json(session.into()))
}

/// POST /move/human - Apply the player's move
pub async fn human_move(
    State(state): State<Arc<AppState>>,
    body: Option<Json<HumanMoveRequest>>,
) -> Result<Json<HumanMoveResponse>, ApiError> {
    let body = body.map(|Json(b)| b).unwrap_or_default();
    let result = PlayHumanMove::new(state.sessions.clone())
        .execute(PlayHumanMoveInput {
            pile: body.pile,
            remove: body.remove,
        })
        .await
        .map_err(|e| {
            let code = match &e {
                PlayHumanMoveError::NotYourTurn => "NOT_YOUR_TURN",
                PlayHumanMoveError::InvalidMove => "INVALID_MOVE",
            };
            error_response(StatusCode::BAD_REQUEST, code, e.to_string())
        })?;

    let event = GameEvent::new("gameUpdate")
        .with_action("humanMove")
        .with_data(serde_json::json!({
            "piles": result.piles,
            "winner": result.winner,
            "move": { "pile": body.pile, "remove": body.remove },
        }));
    state.broadcast_event(event);
    if let Some(winner) = result.winner {
        broadcast_game_over(&state, winner);
    }

    Ok(Json(HumanMoveResponse {
        piles: result.piles,
        winner: result.winner,
    }))
}

/// POST /move/ai - Let the computer opponent play
pub async fn ai_move(
    State(state): State<Arc<AppState>>,
) -> Result<Json<AiMoveResponse>, ApiError> {
    let result = PlayAiMove::new(state.sessions.clone(), state.config.bfs_max_depth)
        .execute()
        .await
        .map_err(|e| match &e {
            PlayAiMoveError::NotAiTurn => {
                error_response(StatusCode::BAD_REQUEST, "NOT_AI_TURN", e.to_string())
            }
            PlayAiMoveError::Game(_) => {
                tracing::error!("AI move failed: {}", e);
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "AI_MOVE_ERROR", e.to_string())
            }
        })?;

    let event = GameEvent::new("gameUpdate")
        .with_action("aiMove")
        .with_data(serde_json::json!({
            "piles": result.piles,
            "winner": result.winner,
            "move": result.mv,
        }));
    state.broadcast_event(event);
    if let Some(winner) = result.winner {
        broadcast_game_over(&state, winner);
    }

    Ok(Json(AiMoveResponse {
        piles: result.piles,
        winner: result.winner,
        mv: result.mv,
    }))
}

fn broadcast_game_over(state: &AppState, winner: Player) {
    let event = GameEvent::new("gameOver").with_data(serde_json::json!({ "winner": winner }));
    state.broadcast_event(event);
}
