//! Overlay server binary.
//!
//! Starts the axum web server, the unread poll loop, and signal handling.

use tracing_subscriber::EnvFilter;

use unread_client::api::UnreadApiClient;
use unread_overlay_lib::app::SharedState;
use unread_overlay_lib::background;
use unread_overlay_lib::notification::{NotificationController, WsToastSurface};
use unread_overlay_lib::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting unread overlay");

    let config = unread_overlay_lib::init_foundation()?;
    let state = SharedState::new(config);

    let server_state = state.clone();
    let server_handle = tokio::spawn(async move {
        if let Err(e) = server::start_server(server_state).await {
            tracing::error!("Server failed: {e}");
        }
    });

    let source = UnreadApiClient::new(state.config().await.endpoint_url.clone());
    let surface = WsToastSurface::new(state.ws_sender().clone());
    let controller = NotificationController::new(source, surface);

    let s = state.clone();
    tokio::spawn(async move { background::unread_sync_loop(s, controller).await });

    tracing::info!(
        port = state.server_port(),
        "Overlay running. Press Ctrl+C to stop."
    );

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutting down...");

    state.shutdown_token().cancel();
    server_handle.abort();
    Ok(())
}
