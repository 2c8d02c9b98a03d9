//! Interactive widgets for the workshop-booking demo page.
//!
//! DESIGN
//! ======
//! The page is static content plus two self-contained widgets: a
//! notification center with a one-shot welcome toast, and a scripted chat
//! assistant that answers with canned replies after a short delay. Each
//! widget owns its state; the only asynchronous pieces are the timers
//! registered in a per-widget [`timer::TimerSet`], which are aborted when the
//! widget is torn down.
//!
//! All timer-driven operations must run inside a Tokio runtime.

pub mod chat;
pub mod config;
pub mod notifications;
pub mod page;
pub mod panel;
pub mod timer;

pub use chat::{ChatAssistant, ChatMessage, Origin};
pub use config::{ConfigError, WidgetConfig};
pub use notifications::{Category, Notification, NotificationCenter, ToastPhase, ToastRequest};
pub use page::{Page, PageSnapshot};
pub use panel::Panel;
