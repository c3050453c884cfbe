//! WebSocket handler: text relay through the hub.
//!
//! LIFECYCLE
//! =========
//! 1. Upgrade → generate a client id, register an outbound channel in the hub
//! 2. Inbound text → log, compose a reply, broadcast it to every client
//! 3. Hub messages → forward to this socket
//! 4. Close, error or failed send → unregister

#[cfg(test)]
#[path = "ws_test.rs"]
mod ws_test;

use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::Response;
use tokio::sync::mpsc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::reply;
use crate::state::AppState;

pub const CLIENT_CHANNEL_CAPACITY: usize = 256;

pub async fn handle_ws(State(state): State<AppState>, ws: WebSocketUpgrade) -> Response {
    ws.on_upgrade(move |socket| run_ws(socket, state))
}

async fn run_ws(mut socket: WebSocket, state: AppState) {
    let client_id = Uuid::new_v4();
    let (client_tx, mut client_rx) = mpsc::channel::<String>(CLIENT_CHANNEL_CAPACITY);
    state.hub.register(client_id, client_tx).await;
    info!(%client_id, "ws: client connected");

    loop {
        tokio::select! {
            msg = socket.recv() => {
                let Some(msg) = msg else { break };
                let Ok(msg) = msg else { break };
                match msg {
                    Message::Text(text) => {
                        info!(%client_id, text = %text.as_str(), "ws: recv text");
                        let answer = reply::compose(text.as_str());
                        let delivered = state.hub.broadcast(&answer).await;
                        debug!(%client_id, delivered, "ws: reply broadcast");
                    }
                    Message::Close(_) => break,
                    _ => {}
                }
            }
            Some(text) = client_rx.recv() => {
                if socket.send(Message::Text(text.into())).await.is_err() {
                    break;
                }
            }
        }
    }

    state.hub.unregister(client_id).await;
    info!(%client_id, "ws: client disconnected");
}
