//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the server config and the `Hub`: every live `/ws` connection owns a
//! bounded outbound channel registered here under a fresh client id.
//! Broadcast is best-effort; a full or closed channel is skipped so one slow
//! client never stalls the others.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{RwLock, mpsc};
use uuid::Uuid;

use crate::config::ServerConfig;

// =============================================================================
// HUB
// =============================================================================

/// Registry of connected clients: `client_id` -> sender for outgoing text.
#[derive(Clone, Default)]
pub struct Hub {
    clients: Arc<RwLock<HashMap<Uuid, mpsc::Sender<String>>>>,
}

impl Hub {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn register(&self, client_id: Uuid, tx: mpsc::Sender<String>) {
        self.clients.write().await.insert(client_id, tx);
    }

    pub async fn unregister(&self, client_id: Uuid) {
        self.clients.write().await.remove(&client_id);
    }

    pub async fn len(&self) -> usize {
        self.clients.read().await.len()
    }

    /// Queue `text` for every registered client. Returns how many accepted it.
    pub async fn broadcast(&self, text: &str) -> usize {
        let clients = self.clients.read().await;
        let mut delivered = 0;
        for (client_id, tx) in clients.iter() {
            match tx.try_send(text.to_owned()) {
                Ok(()) => delivered += 1,
                Err(e) => tracing::debug!(%client_id, error = %e, "hub: skipped client"),
            }
        }
        delivered
    }
}

// =============================================================================
// APP STATE
// =============================================================================

#[derive(Clone)]
pub struct AppState {
    pub hub: Hub,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        Self { hub: Hub::new(), config: Arc::new(config) }
    }
}
