use axum::extract::State;
use axum::{Json, Router, routing::get};
use tower_http::cors::CorsLayer;

use crate::app::SharedState;

use super::{assets, websocket};

/// Create the axum router with all routes.
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(assets::overlay_index))
        .route("/status", get(status_handler))
        .route("/ws", get(websocket::ws_handler))
        .fallback(assets::overlay_fallback)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// GET /status — health and start time.
async fn status_handler(State(state): State<SharedState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "started_at": state.started_at().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[tokio::test]
    async fn status_reports_ok_and_start_time() {
        let state = SharedState::new(AppConfig::from_env().unwrap());
        let Json(body) = status_handler(State(state)).await;
        assert_eq!(body["status"], "ok");
        assert!(body["started_at"].as_str().is_some());
    }
}
