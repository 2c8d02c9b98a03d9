//! Landing page host.
//!
//! Mounts the notification center and the chat assistant side by side. The
//! two widgets share nothing; the page only owns them, starts the welcome
//! toast on mount, and produces a [`PageSnapshot`] for whatever renders it.

use serde::Serialize;
use time::OffsetDateTime;
use tracing::info;

use crate::chat::{ChatAssistant, ChatMessage};
use crate::config::WidgetConfig;
use crate::notifications::{Notification, NotificationCenter, ToastNotice, ToastPhase, format_relative};
use crate::panel::Panel;

pub struct Page {
    pub notifications: NotificationCenter,
    pub chat: ChatAssistant,
}

impl Page {
    /// Build both widgets and schedule the welcome toast.
    ///
    /// Must be called inside a Tokio runtime.
    #[must_use]
    pub fn mount(config: &WidgetConfig) -> Self {
        let mut notifications = NotificationCenter::new();
        notifications.schedule_welcome_toast(config.toast_delay, config.toast_visible);
        let chat = ChatAssistant::from_config(config);

        info!(
            notifications = %notifications.id(),
            chat = %chat.id(),
            unread = notifications.unread_count(),
            "page mounted"
        );
        Self { notifications, chat }
    }

    /// Everything a renderer needs, as of `now`.
    #[must_use]
    pub fn snapshot(&self, now: OffsetDateTime) -> PageSnapshot {
        let notifications = self
            .notifications
            .list_notifications()
            .iter()
            .map(|n| NotificationView { age: format_relative(n.created_at, now), notification: n.clone() })
            .collect();

        PageSnapshot {
            notifications: NotificationsSnapshot {
                panel: self.notifications.panel(),
                badge: self.notifications.badge(),
                bell_attention: self.notifications.bell_attention(),
                toast_phase: self.notifications.toast_phase(),
                toast: self.notifications.visible_toast().cloned(),
                items: notifications,
            },
            chat: ChatSnapshot {
                panel: self.chat.panel(),
                draft: self.chat.draft().to_owned(),
                pending_replies: self.chat.pending_replies(),
                transcript: self.chat.transcript(),
            },
        }
    }

    /// Cancel all widget timers. Also happens when the page is dropped.
    pub fn unmount(&mut self) {
        let cancelled = self.notifications.teardown() + self.chat.teardown();
        info!(cancelled, "page unmounted");
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct PageSnapshot {
    pub notifications: NotificationsSnapshot,
    pub chat: ChatSnapshot,
}

#[derive(Clone, Debug, Serialize)]
pub struct NotificationsSnapshot {
    pub panel: Panel,
    /// `None` hides the badge.
    pub badge: Option<usize>,
    pub bell_attention: bool,
    pub toast_phase: ToastPhase,
    pub toast: Option<ToastNotice>,
    pub items: Vec<NotificationView>,
}

#[derive(Clone, Debug, Serialize)]
pub struct NotificationView {
    #[serde(flatten)]
    pub notification: Notification,
    /// Relative age label, e.g. "5m ago".
    pub age: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct ChatSnapshot {
    pub panel: Panel,
    pub draft: String,
    pub pending_replies: usize,
    pub transcript: Vec<ChatMessage>,
}

#[cfg(test)]
#[path = "page_test.rs"]
mod tests;
