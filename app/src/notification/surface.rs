//! Toast surface abstraction and the WebSocket-backed implementation.

use std::future::Future;
use std::time::Duration;

use serde_json::json;
use tokio::sync::broadcast;
use tokio::time::sleep;

use super::animation::Easing;

/// Rendering seam for the toast element.
///
/// `animate_offset` resolves once the transition has visually finished;
/// callers sequence display changes after it.
pub trait ToastSurface: Send + Sync + 'static {
    fn set_text(&self, text: &str);

    fn set_visible(&self, visible: bool);

    fn animate_offset(
        &self,
        to: f64,
        duration: Duration,
        easing: Easing,
    ) -> impl Future<Output = ()> + Send;
}

/// Broadcasts toast commands to connected overlay WebSocket clients.
///
/// The overlay page applies each command; completion is modeled on the
/// server side by waiting out the announced duration.
#[derive(Clone)]
pub struct WsToastSurface {
    ws_tx: broadcast::Sender<String>,
}

impl WsToastSurface {
    pub fn new(ws_tx: broadcast::Sender<String>) -> Self {
        Self { ws_tx }
    }

    fn send(&self, payload: serde_json::Value) {
        // No subscribers is fine; the overlay page may not be open yet.
        let _ = self.ws_tx.send(payload.to_string());
    }
}

impl ToastSurface for WsToastSurface {
    fn set_text(&self, text: &str) {
        self.send(json!({
            "type": "toast_text",
            "data": { "text": text },
        }));
    }

    fn set_visible(&self, visible: bool) {
        self.send(json!({
            "type": "toast_visible",
            "data": { "visible": visible },
        }));
    }

    fn animate_offset(
        &self,
        to: f64,
        duration: Duration,
        easing: Easing,
    ) -> impl Future<Output = ()> + Send {
        self.send(json!({
            "type": "toast_animate",
            "data": {
                "to": to,
                "duration_ms": duration.as_millis() as u64,
                "easing": easing,
            },
        }));
        async move { sleep(duration).await }
    }
}
