use std::sync::Arc;

use async_broadcast::{broadcast, Receiver, Sender};

use crate::infrastructure::config::AppConfig;
use crate::infrastructure::services::SessionStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,

    /// The game session and its RNG
    pub sessions: Arc<SessionStore>,

    /// Event broadcaster for SSE
    pub event_sender: Sender<GameEvent>,
    pub event_receiver: Receiver<GameEvent>,
}

impl AppState {
    /// Build state from `PORT` / `NIM_*` environment variables
    pub fn from_env() -> Self {
        Self::with_config(AppConfig::from_env())
    }

    pub fn with_config(config: AppConfig) -> Self {
        tracing::info!(
            piles = ?config.initial_piles,
            bfs_max_depth = config.bfs_max_depth,
            seeded = config.rng_seed.is_some(),
            "Initializing game session"
        );

        let sessions = Arc::new(SessionStore::new(
            config.initial_piles.clone(),
            config.rng_seed,
        ));

        // Create event broadcaster (capacity of 100 events)
        let (mut event_sender, event_receiver) = broadcast(100);
        // Slow subscribers lose the oldest updates instead of blocking moves
        event_sender.set_overflow(true);

        Self {
            config,
            sessions,
            event_sender,
            event_receiver,
        }
    }

    /// Broadcast an event to all connected SSE clients
    pub fn broadcast_event(&self, event: GameEvent) {
        let receiver_count = self.event_sender.receiver_count();
        tracing::debug!(
            "Broadcasting event '{}' to {} receivers",
            event.event_type,
            receiver_count
        );
        match self.event_sender.try_broadcast(event) {
            Ok(None) => {}
            Ok(Some(_)) => {
                tracing::debug!("Event broadcast with overflow");
            }
            Err(e) => {
                tracing::warn!("Failed to broadcast event: {:?}", e);
            }
        }
    }
}

/// Game event for SSE broadcasting
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    /// Additional data fields (flattened into root)
    #[serde(flatten)]
    pub data: serde_json::Value,
    pub timestamp: i64,
}

impl GameEvent {
    pub fn new(event_type: &str) -> Self {
        Self {
            event_type: event_type.to_string(),
            action: None,
            data: serde_json::Value::Object(serde_json::Map::new()),
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }

    pub fn with_action(mut self, action: &str) -> Self {
        self.action = Some(action.to_string());
        self
    }

    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = data;
        self
    }
}
