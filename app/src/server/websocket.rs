use axum::{
    extract::{
        State, WebSocketUpgrade,
        ws::{Message, WebSocket},
    },
    response::IntoResponse,
};
use futures::{SinkExt, StreamExt};

use crate::app::SharedState;

/// WebSocket upgrade handler.
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<SharedState>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: SharedState) {
    let (mut sender, mut receiver) = socket.split();
    let mut rx = state.subscribe_ws();

    // Send connection confirmation
    let client_id = uuid::Uuid::new_v4().to_string();
    let welcome = serde_json::json!({
        "type": "connected",
        "data": { "clientId": client_id }
    });
    if sender
        .send(Message::Text(welcome.to_string().into()))
        .await
        .is_err()
    {
        return;
    }

    tracing::info!("Overlay client connected: {}", client_id);

    // Forward broadcast toast commands to this client
    let mut send_task = tokio::spawn(async move {
        while let Ok(msg) = rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    });

    let ws_tx = state.ws_sender().clone();
    let cid = client_id.clone();
    let mut recv_task = tokio::spawn(async move {
        while let Some(Ok(msg)) = receiver.next().await {
            match msg {
                Message::Text(text) => {
                    handle_client_message(&text, &ws_tx);
                }
                Message::Close(_) => break,
                _ => {}
            }
        }
        tracing::info!("Overlay client disconnected: {}", cid);
    });

    // Wait for either task to finish
    tokio::select! {
        _ = &mut send_task => recv_task.abort(),
        _ = &mut recv_task => send_task.abort(),
    }
}

/// Route incoming client messages.
///
/// Overlay clients are display-only; the only message they send is an
/// application-level ping.
fn handle_client_message(text: &str, ws_tx: &tokio::sync::broadcast::Sender<String>) {
    let Ok(msg) = serde_json::from_str::<serde_json::Value>(text) else {
        return;
    };

    if msg.get("type").and_then(|t| t.as_str()) == Some("ping") {
        let pong = serde_json::json!({ "type": "pong" });
        let _ = ws_tx.send(pong.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::handle_client_message;

    #[tokio::test]
    async fn ping_is_answered_with_pong() {
        let (tx, mut rx) = tokio::sync::broadcast::channel(8);
        handle_client_message(r#"{"type":"ping"}"#, &tx);
        let reply: serde_json::Value = serde_json::from_str(&rx.recv().await.unwrap()).unwrap();
        assert_eq!(reply["type"], "pong");
    }

    #[test]
    fn other_messages_are_ignored() {
        let (tx, mut rx) = tokio::sync::broadcast::channel(8);
        handle_client_message(r#"{"type":"toast_text"}"#, &tx);
        handle_client_message("not json", &tx);
        assert!(rx.try_recv().is_err());
    }
}
