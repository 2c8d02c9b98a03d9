//! Notification records and their display helpers.

use serde::Serialize;
use time::{Duration, OffsetDateTime};

/// Visual category of a notification (drives the icon and accent color).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Success,
    Warning,
    Info,
}

/// A single notification shown in the notification panel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    pub category: Category,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// Only ever moves from false to true.
    pub read: bool,
}

impl Notification {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        message: impl Into<String>,
        category: Category,
        created_at: OffsetDateTime,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            message: message.into(),
            category,
            created_at,
            read: false,
        }
    }

    #[must_use]
    pub fn into_read(mut self) -> Self {
        self.read = true;
        self
    }
}

/// The fixed notifications every session starts with, aged relative to `now`.
#[must_use]
pub fn seed_notifications(now: OffsetDateTime) -> Vec<Notification> {
    vec![
        Notification::new(
            "1",
            "Workshop Confirmed",
            "Your Python Programming workshop has been confirmed for Jan 15, 2024.",
            Category::Success,
            now - Duration::minutes(5),
        ),
        Notification::new(
            "2",
            "New Instructor Available",
            "Dr. Priya Sharma is now available for Machine Learning workshops.",
            Category::Info,
            now - Duration::minutes(30),
        ),
        Notification::new(
            "3",
            "Workshop Deadline Approaching",
            "Submit your React Development workshop proposal by tomorrow.",
            Category::Warning,
            now - Duration::hours(2),
        )
        .into_read(),
    ]
}

/// Human-readable age of `created_at` as seen at `now`.
///
/// Under a minute (or in the future) is "Just now", then whole minutes, then
/// whole hours; a day or older falls back to the calendar date.
#[must_use]
pub fn format_relative(created_at: OffsetDateTime, now: OffsetDateTime) -> String {
    let elapsed = now - created_at;
    let minutes = elapsed.whole_minutes();
    let hours = elapsed.whole_hours();

    if minutes < 1 {
        "Just now".to_owned()
    } else if minutes < 60 {
        format!("{minutes}m ago")
    } else if hours < 24 {
        format!("{hours}h ago")
    } else {
        let date = created_at.date();
        format!("{}/{}/{}", u8::from(date.month()), date.day(), date.year())
    }
}

#[cfg(test)]
#[path = "model_test.rs"]
mod tests;
