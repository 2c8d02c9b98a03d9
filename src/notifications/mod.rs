//! Notification center — read/unread tracking and the welcome toast.
//!
//! DESIGN
//! ======
//! The notification list is plain owned data: every read-marking happens
//! synchronously on `&mut self`, so the unread count is always derived from
//! the current list and can never drift from the badge. The toast phase is
//! read off the Tokio clock against the window armed at scheduling time, so
//! it flips exactly at its deadlines. The toast timer task only logs the
//! transitions and is aborted on teardown, which also retires the toast.
//!
//! ERROR HANDLING
//! ==============
//! None of the operations can fail. Unknown ids are silent no-ops so UI clicks
//! never surface errors.

pub mod model;
pub mod toast;

use std::time::Duration;

use time::OffsetDateTime;
use tokio::time::Instant;
use tracing::{debug, info};
use uuid::Uuid;

pub use model::{Category, Notification, format_relative, seed_notifications};
pub use toast::{Toast, ToastNotice, ToastPhase, ToastRequest, WELCOME_TOAST};

use crate::panel::Panel;
use crate::timer::{TimerSet, millis};

pub struct NotificationCenter {
    id: Uuid,
    notifications: Vec<Notification>,
    toast: Toast,
    panel: Panel,
    timers: TimerSet,
}

impl NotificationCenter {
    /// Center seeded with the fixed demo notifications.
    #[must_use]
    pub fn new() -> Self {
        Self::with_notifications(seed_notifications(OffsetDateTime::now_utc()))
    }

    #[must_use]
    pub fn with_notifications(notifications: Vec<Notification>) -> Self {
        let center = Self {
            id: Uuid::new_v4(),
            notifications,
            toast: Toast::default(),
            panel: Panel::default(),
            timers: TimerSet::new(),
        };
        debug!(
            widget = %center.id,
            total = center.notifications.len(),
            unread = center.unread_count(),
            "notification center seeded"
        );
        center
    }

    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    // =========================================================================
    // NOTIFICATIONS
    // =========================================================================

    /// Notifications in creation order.
    #[must_use]
    pub fn list_notifications(&self) -> &[Notification] {
        &self.notifications
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    /// Badge value for the bell button; `None` hides the badge.
    #[must_use]
    pub fn badge(&self) -> Option<usize> {
        match self.unread_count() {
            0 => None,
            n => Some(n),
        }
    }

    /// Mark one notification read. Returns true if its flag changed.
    pub fn mark_as_read(&mut self, id: &str) -> bool {
        let Some(notification) = self.notifications.iter_mut().find(|n| n.id == id) else {
            debug!(widget = %self.id, notification = id, "mark_as_read on unknown id ignored");
            return false;
        };
        if notification.read {
            return false;
        }
        notification.read = true;
        debug!(widget = %self.id, notification = id, unread = self.unread_count(), "notification marked read");
        true
    }

    /// Mark every notification read. Returns how many flags changed.
    pub fn mark_all_as_read(&mut self) -> usize {
        let mut changed = 0;
        for notification in self.notifications.iter_mut().filter(|n| !n.read) {
            notification.read = true;
            changed += 1;
        }
        if changed > 0 {
            info!(widget = %self.id, changed, "all notifications marked read");
        }
        changed
    }

    // =========================================================================
    // TOAST
    // =========================================================================

    /// Show the welcome toast after `delay`, then hide it after `visible`.
    ///
    /// One toast per widget: only the first request is scheduled, later ones
    /// report the current phase and change nothing.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime. The toast is only armed
    /// once its timer exists, so a failed call leaves it idle.
    pub fn schedule_welcome_toast(&mut self, delay: Duration, visible: Duration) -> ToastRequest {
        let now = Instant::now();
        let phase = self.toast.phase_at(now);
        if phase != ToastPhase::Idle {
            let outcome = ToastRequest::Ignored(phase);
            debug!(widget = %self.id, ?outcome, "welcome toast request ignored");
            return outcome;
        }

        let widget = self.id;
        self.timers.spawn(async move {
            tokio::time::sleep(delay).await;
            info!(%widget, visible_ms = millis(visible), "welcome toast shown");
            tokio::time::sleep(visible).await;
            debug!(%widget, "welcome toast hidden");
        });
        let outcome = self.toast.arm(now, delay, visible);

        info!(
            widget = %self.id,
            delay_ms = millis(delay),
            visible_ms = millis(visible),
            "welcome toast scheduled"
        );
        outcome
    }

    #[must_use]
    pub fn toast_phase(&self) -> ToastPhase {
        self.toast.phase_at(Instant::now())
    }

    /// The toast content while it is on screen.
    #[must_use]
    pub fn visible_toast(&self) -> Option<&'static ToastNotice> {
        self.bell_attention().then_some(&WELCOME_TOAST)
    }

    /// Whether the bell button should draw attention (it bounces while the
    /// toast is up).
    #[must_use]
    pub fn bell_attention(&self) -> bool {
        self.toast.is_visible_at(Instant::now())
    }

    // =========================================================================
    // PANEL
    // =========================================================================

    #[must_use]
    pub fn panel(&self) -> Panel {
        self.panel
    }

    pub fn open_panel(&mut self) {
        self.panel.open();
    }

    pub fn close_panel(&mut self) {
        self.panel.close();
    }

    pub fn toggle_panel(&mut self) {
        self.panel.toggle();
    }

    // =========================================================================
    // TEARDOWN
    // =========================================================================

    /// Cancel every pending timer and retire the toast, so a torn-down
    /// widget never reports a visible toast. Timers are also cancelled on drop.
    pub fn teardown(&mut self) -> usize {
        self.toast.retire();
        let cancelled = self.timers.cancel_all();
        debug!(widget = %self.id, cancelled, "notification center torn down");
        cancelled
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
