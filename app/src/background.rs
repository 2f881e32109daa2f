//! Background task loops: startup poll and optional periodic unread sync.

use std::time::Duration;

use tokio::time::sleep;
use tokio_util::sync::CancellationToken;

use crate::app::SharedState;
use crate::notification::{NotificationController, ToastSurface, UnreadSource};

async fn sleep_or_cancel(token: &CancellationToken, duration: Duration) -> bool {
    tokio::select! {
        _ = token.cancelled() => true,
        _ = sleep(duration) => false,
    }
}

/// Poll the unread endpoint once at startup, then on the configured
/// interval. Interval `0` keeps the poll-once-on-load behavior.
pub async fn unread_sync_loop<D, S>(state: SharedState, controller: NotificationController<D, S>)
where
    D: UnreadSource,
    S: ToastSurface,
{
    let shutdown_token = state.shutdown_token().clone();

    controller.refresh().await;

    let interval = state.config().await.poll_interval_secs;
    if interval == 0 {
        tracing::info!("Unread sync: single startup poll completed");
        return;
    }

    loop {
        if sleep_or_cancel(&shutdown_token, Duration::from_secs(interval)).await {
            tracing::info!("Unread sync loop stopped (shutdown)");
            return;
        }
        controller.refresh().await;
    }
}
