use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::{RwLock, broadcast};
use tokio_util::sync::CancellationToken;

use crate::config::AppConfig;

/// Application shared state accessible from axum handlers and background
/// tasks.
#[derive(Clone)]
pub struct SharedState {
    inner: Arc<SharedStateInner>,
}

struct SharedStateInner {
    /// Broadcast channel for WebSocket toast commands
    ws_tx: broadcast::Sender<String>,
    /// Application configuration
    config: RwLock<AppConfig>,
    /// Cancelled once at shutdown; stops the server and background loops
    shutdown: CancellationToken,
    /// Process start time, reported by /status
    started_at: DateTime<Utc>,
}

impl SharedState {
    pub fn new(config: AppConfig) -> Self {
        let (ws_tx, _) = broadcast::channel(256);

        Self {
            inner: Arc::new(SharedStateInner {
                ws_tx,
                config: RwLock::new(config),
                shutdown: CancellationToken::new(),
                started_at: Utc::now(),
            }),
        }
    }

    pub fn server_port(&self) -> u16 {
        // Read from config; fallback to 8080.
        self.inner
            .config
            .try_read()
            .map(|c| c.server_port)
            .unwrap_or(8080)
    }

    pub fn ws_sender(&self) -> &broadcast::Sender<String> {
        &self.inner.ws_tx
    }

    pub fn subscribe_ws(&self) -> broadcast::Receiver<String> {
        self.inner.ws_tx.subscribe()
    }

    pub fn shutdown_token(&self) -> &CancellationToken {
        &self.inner.shutdown
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.inner.started_at
    }

    /// Get a read lock on the current config.
    pub async fn config(&self) -> tokio::sync::RwLockReadGuard<'_, AppConfig> {
        self.inner.config.read().await
    }
}
