//! Animation parameters for the toast's appear/disappear transitions.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Easing curve applied by the rendering side of an offset animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    EaseOut,
    EaseIn,
}

/// Vertical offset of the toast when fully on screen.
pub const ON_SCREEN_OFFSET: f64 = -50.0;

/// Vertical offset of the toast at its off-screen resting position.
pub const OFF_SCREEN_OFFSET: f64 = 100.0;

/// Slide-in transition length.
pub const APPEAR_DURATION: Duration = Duration::from_millis(1000);

/// Slide-out transition length.
pub const DISAPPEAR_DURATION: Duration = Duration::from_millis(500);

/// Delay before a visible toast auto-dismisses.
pub const HIDE_DELAY: Duration = Duration::from_secs(7);
