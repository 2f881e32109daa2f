//! Toast visibility state machine.
//!
//! One controller instance is the single authority over the toast: it
//! reconciles poll results with current visibility, arms and cancels the
//! auto-hide timer, and drives the appear/disappear transitions.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::sleep;

use unread_client::api::UnreadApiClient;
use unread_client::{UnreadError, UnreadStatus};

use super::animation::{
    APPEAR_DURATION, DISAPPEAR_DURATION, Easing, HIDE_DELAY, OFF_SCREEN_OFFSET, ON_SCREEN_OFFSET,
};
use super::surface::ToastSurface;

/// Data source seam for the unread-message endpoint.
pub trait UnreadSource: Send + Sync + 'static {
    fn fetch_unread(&self) -> impl Future<Output = Result<UnreadStatus, UnreadError>> + Send;
}

impl UnreadSource for UnreadApiClient {
    fn fetch_unread(&self) -> impl Future<Output = Result<UnreadStatus, UnreadError>> + Send {
        self.get_unread_status()
    }
}

/// Mutable toast state. The pending timer handle is the only shared
/// resource; holding it here keeps at most one hide timer outstanding.
#[derive(Debug, Default)]
struct ToastState {
    visible: bool,
    pending_hide: Option<JoinHandle<()>>,
    last_applied_poll: u64,
}

/// Single authority over toast visibility and the auto-hide timer.
///
/// Cheap to clone; timer tasks hold a clone to call back into [`hide`].
///
/// [`hide`]: NotificationController::hide
pub struct NotificationController<D, S> {
    inner: Arc<ControllerInner<D, S>>,
}

impl<D, S> Clone for NotificationController<D, S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

struct ControllerInner<D, S> {
    source: D,
    surface: Arc<S>,
    state: Mutex<ToastState>,
    poll_seq: AtomicU64,
}

impl<D, S> NotificationController<D, S>
where
    D: UnreadSource,
    S: ToastSurface,
{
    pub fn new(source: D, surface: S) -> Self {
        Self {
            inner: Arc::new(ControllerInner {
                source,
                surface: Arc::new(surface),
                state: Mutex::new(ToastState::default()),
                poll_seq: AtomicU64::new(0),
            }),
        }
    }

    /// Poll the data source once and reconcile the toast with the result.
    ///
    /// Failures are logged and swallowed; the toast keeps its current
    /// state and the next poll is the only recovery path.
    pub async fn refresh(&self) {
        let seq = self.inner.poll_seq.fetch_add(1, Ordering::Relaxed) + 1;

        let status = match self.inner.source.fetch_unread().await {
            Ok(status) => status,
            Err(e) => {
                tracing::error!("Failed to fetch unread status: {e}");
                return;
            }
        };

        // A newer poll may have completed while this one was in flight;
        // its decision wins.
        {
            let mut st = self.inner.state.lock().await;
            if seq < st.last_applied_poll {
                tracing::debug!(
                    seq,
                    latest = st.last_applied_poll,
                    "Dropping stale poll result"
                );
                return;
            }
            st.last_applied_poll = seq;
        }

        if status.unread_count > 0 {
            self.show(status.resolved_sender()).await;
        } else {
            self.hide().await;
        }
    }

    /// Present the toast for `sender` and (re)arm the auto-hide timer.
    ///
    /// Safe to call while already visible: the text is refreshed and the
    /// countdown restarts from now.
    pub async fn show(&self, sender: &str) {
        self.inner
            .surface
            .set_text(&format!("Message from {sender}!!!"));

        let mut st = self.inner.state.lock().await;
        if !st.visible {
            self.inner.surface.set_visible(true);
            st.visible = true;
        }

        // Fire-and-forget: re-running the slide-in against a toast that
        // already settled on screen is a no-op.
        let surface = Arc::clone(&self.inner.surface);
        tokio::spawn(async move {
            surface
                .animate_offset(ON_SCREEN_OFFSET, APPEAR_DURATION, Easing::EaseOut)
                .await;
        });

        if let Some(timer) = st.pending_hide.take() {
            timer.abort();
        }
        let controller = self.clone();
        st.pending_hide = Some(tokio::spawn(async move {
            sleep(HIDE_DELAY).await;
            controller.hide().await;
        }));
    }

    /// Dismiss the toast. Safe to call while already hidden.
    ///
    /// Display is switched off only once the slide-out has finished, so
    /// the element never pops out mid-transition.
    pub async fn hide(&self) {
        let mut st = self.inner.state.lock().await;
        if let Some(timer) = st.pending_hide.take() {
            timer.abort();
        }
        st.visible = false;
        drop(st);

        let surface = Arc::clone(&self.inner.surface);
        tokio::spawn(async move {
            surface
                .animate_offset(OFF_SCREEN_OFFSET, DISAPPEAR_DURATION, Easing::EaseIn)
                .await;
            surface.set_visible(false);
        });
    }

    /// Whether the toast is currently presented.
    pub async fn is_visible(&self) -> bool {
        self.inner.state.lock().await.visible
    }

    #[cfg(test)]
    pub(crate) async fn has_pending_hide(&self) -> bool {
        self.inner.state.lock().await.pending_hide.is_some()
    }
}
