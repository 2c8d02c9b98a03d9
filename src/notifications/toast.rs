//! Welcome toast lifecycle.
//!
//! The toast is a transient notice, not a [`super::Notification`]. Its phase
//! only moves forward: `Idle -> Pending -> Visible -> Expired`. A widget gets
//! exactly one toast per lifetime; any request after the first is ignored,
//! whatever phase the toast is in. Retiring the toast (widget teardown) jumps
//! straight to `Expired`.

use std::time::Duration;

use serde::Serialize;
use tokio::time::Instant;

use super::model::Category;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastPhase {
    #[default]
    Idle,
    Pending,
    Visible,
    Expired,
}

/// Outcome of asking for the welcome toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastRequest {
    Scheduled,
    /// A toast was already requested for this widget; nothing changed.
    Ignored(ToastPhase),
}

/// Content of the welcome toast.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ToastNotice {
    pub title: &'static str,
    pub message: &'static str,
    pub category: Category,
}

pub static WELCOME_TOAST: ToastNotice = ToastNotice {
    title: "Workshop Update",
    message: "New message from your instructor about the upcoming session.",
    category: Category::Success,
};

/// When the toast was armed and how long each stage lasts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct ToastWindow {
    armed_at: Instant,
    delay: Duration,
    visible: Duration,
}

/// Toast state, read against a clock.
///
/// The phase is derived from the armed window and `now`, so it is exact at
/// the boundaries: visible for `[armed + delay, armed + delay + visible)`.
/// Timers are not needed to advance it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Toast {
    window: Option<ToastWindow>,
    retired: bool,
}

impl Toast {
    #[must_use]
    pub fn phase_at(&self, now: Instant) -> ToastPhase {
        if self.retired {
            return ToastPhase::Expired;
        }
        let Some(window) = self.window else {
            return ToastPhase::Idle;
        };
        let elapsed = now.saturating_duration_since(window.armed_at);
        if elapsed < window.delay {
            ToastPhase::Pending
        } else if elapsed < window.delay.saturating_add(window.visible) {
            ToastPhase::Visible
        } else {
            ToastPhase::Expired
        }
    }

    #[must_use]
    pub fn is_visible_at(&self, now: Instant) -> bool {
        self.phase_at(now) == ToastPhase::Visible
    }

    /// Arm the toast at `now`. Only an idle toast can be armed.
    pub fn arm(&mut self, now: Instant, delay: Duration, visible: Duration) -> ToastRequest {
        match self.phase_at(now) {
            ToastPhase::Idle => {
                self.window = Some(ToastWindow { armed_at: now, delay, visible });
                ToastRequest::Scheduled
            }
            phase => ToastRequest::Ignored(phase),
        }
    }

    /// Take the toast off screen for good, whatever its phase.
    pub fn retire(&mut self) {
        self.retired = true;
    }
}

#[cfg(test)]
#[path = "toast_test.rs"]
mod tests;
