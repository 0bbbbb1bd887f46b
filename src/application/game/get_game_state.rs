use std::sync::Arc;

use crate::domain::entities::GameSession;
use crate::infrastructure::services::SessionStore;

/// Get game state use case
pub struct GetGameState {
    sessions: Arc<SessionStore>,
}

impl GetGameState {
    pub fn new(sessions: Arc<SessionStore>) -> Self {
        Self { sessions }
    }

    pub async fn execute(&self) -> GameSession {
        self.sessions.snapshot().await
    }
}
