use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;

use async_broadcast::RecvError;
use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
};
use futures::stream::Stream;

use crate::infrastructure::app_state::AppState;

/// GET /events - Stream of game updates
pub async fn sse_handler(
    State(state): State<Arc<AppState>>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    // Subscribe before reading the snapshot so no update falls in between
    let mut receiver = state.event_sender.new_receiver();
    let session = state.sessions.snapshot().await;

    let stream = async_stream::stream! {
        tracing::debug!("SSE stream started");

        yield Ok(Event::default()
            .event("connected")
            .data(serde_json::json!({
                "message": "Connected to SSE stream",
                "piles": session.piles,
                "turn": session.turn,
                "timestamp": chrono::Utc::now().timestamp_millis()
            }).to_string()));

        let mut heartbeat_interval = tokio::time::interval(Duration::from_secs(20));

        loop {
            tokio::select! {
                _ = heartbeat_interval.tick() => {
                    tracing::trace!("SSE heartbeat");
                    yield Ok(Event::default().comment("heartbeat"));
                }
                result = receiver.recv() => {
                    match result {
                        Ok(event) => {
                            tracing::debug!("SSE forwarding event: {}", event.event_type);
                            let json = serde_json::to_string(&event).unwrap_or_default();
                            yield Ok(Event::default()
                                .event("event")
                                .data(json));
                        }
                        Err(RecvError::Overflowed(skipped)) => {
                            tracing::warn!("SSE client lagging, skipped {} events", skipped);
                        }
                        Err(RecvError::Closed) => {
                            tracing::warn!("SSE channel closed, closing stream");
                            break;
                        }
                    }
                }
            }
        }

        tracing::debug!("SSE stream closed");
    };

    Sse::new(stream).keep_alive(KeepAlive::default())
}
