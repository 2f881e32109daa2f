//! Unread-message toast notification system.
//!
//! The controller owns toast visibility state, reconciles poll results
//! from the unread endpoint, schedules the auto-hide timer, and drives
//! appear/disappear animations on an injected surface.

pub mod animation;
pub mod controller;
pub mod surface;


pub use controller::{NotificationController, UnreadSource};
pub use surface::{ToastSurface, WsToastSurface};
