//! Live-feed WebSocket handler.
//!
//! DESIGN
//! ======
//! One-directional: on upgrade the connection is registered as a
//! subscriber, then a `select!` loop forwards broadcast events as JSON text
//! frames until the client goes away. Incoming frames are drained and
//! ignored (the REST API is the write path).
//!
//! LIFECYCLE
//! =========
//! 1. Upgrade → subscriber channel registered under a fresh connection id
//! 2. Mutations elsewhere → `AppState::broadcast` → channel → text frame
//! 3. Close/error → subscriber deregistered

use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::Response;
use tokio::sync::mpsc;
use tracing::{debug, info};
use uuid::Uuid;

use records::{LiveEvent, encode_event};

use crate::state::AppState;

#[cfg(test)]
#[path = "ws_test.rs"]
mod tests;

const SUBSCRIBER_BUFFER: usize = 256;

pub async fn handle_live(State(state): State<AppState>, ws: WebSocketUpgrade) -> Response {
    ws.on_upgrade(move |socket| run_live(socket, state))
}

async fn run_live(mut socket: WebSocket, state: AppState) {
    let connection_id = Uuid::new_v4();
    let (tx, mut rx) = mpsc::channel::<LiveEvent>(SUBSCRIBER_BUFFER);

    state.subscribers.write().await.insert(connection_id, tx);
    info!(%connection_id, "live: subscriber connected");

    loop {
        tokio::select! {
            event = rx.recv() => {
                let Some(event) = event else { break };
                if socket.send(Message::Text(encode_event(&event).into())).await.is_err() {
                    break;
                }
            }
            incoming = socket.recv() => {
                match incoming {
                    Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                    Some(Ok(other)) => {
                        // Read-only feed; drain whatever the client sends.
                        debug!(%connection_id, ?other, "live: ignoring inbound frame");
                    }
                }
            }
        }
    }

    state.subscribers.write().await.remove(&connection_id);
    info!(%connection_id, "live: subscriber disconnected");
}
