//! Chat assistant — scripted replies to user messages.
//!
//! DESIGN
//! ======
//! The transcript is append-only. A user turn is appended synchronously,
//! then a reply timer is registered; when it fires it appends one canned
//! reply at the end of the transcript. Since the user turn is already in
//! place when the timer is scheduled, a reply can never land before the
//! message that triggered it. Replies from rapid-fire messages each have
//! their own timer and may interleave with later user turns.
//!
//! The transcript sits behind `Arc<Mutex<_>>` only so reply timers can reach
//! it; they hold a `Weak` and all of them are aborted on teardown.

pub mod model;
pub mod replies;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use time::OffsetDateTime;
use tracing::{debug, info};
use uuid::Uuid;

pub use model::{ChatMessage, MessageIds, Origin};
pub use replies::{CANNED_REPLIES, GREETING, is_canned_reply, pick_reply};

use crate::config::{DEFAULT_CHAT_REPLY_DELAY_MS, WidgetConfig};
use crate::panel::Panel;
use crate::timer::{TimerSet, millis};

#[derive(Debug, Default)]
struct Transcript {
    messages: Vec<ChatMessage>,
    ids: MessageIds,
}

impl Transcript {
    fn append(&mut self, text: String, origin: Origin) -> ChatMessage {
        let created_at = OffsetDateTime::now_utc();
        let message = ChatMessage { id: self.ids.issue(created_at), text, origin, created_at };
        self.messages.push(message.clone());
        message
    }
}

pub struct ChatAssistant {
    id: Uuid,
    transcript: Arc<Mutex<Transcript>>,
    draft: String,
    panel: Panel,
    reply_delay: Duration,
    timers: TimerSet,
}

impl ChatAssistant {
    /// Assistant whose transcript opens with the greeting.
    #[must_use]
    pub fn new(reply_delay: Duration) -> Self {
        let mut transcript = Transcript::default();
        transcript.append(GREETING.to_owned(), Origin::Assistant);

        let assistant = Self {
            id: Uuid::new_v4(),
            transcript: Arc::new(Mutex::new(transcript)),
            draft: String::new(),
            panel: Panel::default(),
            reply_delay,
            timers: TimerSet::new(),
        };
        debug!(widget = %assistant.id, reply_delay_ms = millis(reply_delay), "chat assistant ready");
        assistant
    }

    #[must_use]
    pub fn from_config(config: &WidgetConfig) -> Self {
        Self::new(config.reply_delay)
    }

    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    #[must_use]
    pub fn reply_delay(&self) -> Duration {
        self.reply_delay
    }

    // =========================================================================
    // TRANSCRIPT
    // =========================================================================

    /// Append a user turn and schedule the assistant's reply.
    ///
    /// Blank input (empty or whitespace only) is ignored and returns `None`.
    /// Text is stored as typed, without trimming.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime, because the reply timer
    /// cannot be spawned. The user turn is already in the transcript by then
    /// and no reply will follow it.
    pub fn send_user_message(&mut self, text: &str) -> Option<ChatMessage> {
        if text.trim().is_empty() {
            debug!(widget = %self.id, "blank chat message ignored");
            return None;
        }

        let message = lock(&self.transcript).append(text.to_owned(), Origin::User);
        debug!(widget = %self.id, message = %message.id, "user message appended");

        let transcript = Arc::downgrade(&self.transcript);
        let widget = self.id;
        let trigger = message.id.clone();
        self.timers.schedule(self.reply_delay, move || {
            let Some(transcript) = transcript.upgrade() else {
                return;
            };
            let text = pick_reply(&mut rand::rng());
            let reply = lock(&transcript).append(text.to_owned(), Origin::Assistant);
            info!(%widget, %trigger, reply = %reply.id, "assistant replied");
        });

        Some(message)
    }

    /// Snapshot of the transcript in creation order.
    #[must_use]
    pub fn transcript(&self) -> Vec<ChatMessage> {
        lock(&self.transcript).messages.clone()
    }

    /// Replies scheduled but not yet appended.
    #[must_use]
    pub fn pending_replies(&self) -> usize {
        self.timers.pending()
    }

    // =========================================================================
    // DRAFT INPUT
    // =========================================================================

    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Send the draft and clear it. A blank draft stays as typed.
    pub fn submit_draft(&mut self) -> Option<ChatMessage> {
        if self.draft.trim().is_empty() {
            return None;
        }
        let draft = std::mem::take(&mut self.draft);
        self.send_user_message(&draft)
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

    /// Cancel every pending reply. Also runs on drop.
    pub fn teardown(&mut self) -> usize {
        let cancelled = self.timers.cancel_all();
        debug!(widget = %self.id, cancelled, "chat assistant torn down");
        cancelled
    }
}

impl Default for ChatAssistant {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_CHAT_REPLY_DELAY_MS))
    }
}

fn lock(transcript: &Mutex<Transcript>) -> MutexGuard<'_, Transcript> {
    transcript.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
