use serde::Serialize;
use time::OffsetDateTime;

/// Who authored a transcript turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    User,
    Assistant,
}

/// A single chat turn. Never mutated once appended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub id: String,
    pub text: String,
    pub origin: Origin,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Issues message ids from creation time in Unix milliseconds.
///
/// Two messages created in the same millisecond would collide, so each id is
/// bumped to at least one past the previous one. Ids are therefore unique and
/// strictly increasing within a session.
#[derive(Clone, Copy, Debug, Default)]
pub struct MessageIds {
    last: Option<i64>,
}

impl MessageIds {
    pub fn issue(&mut self, created_at: OffsetDateTime) -> String {
        let millis = i64::try_from(created_at.unix_timestamp_nanos() / 1_000_000).unwrap_or(i64::MAX);
        let id = match self.last {
            Some(last) if millis <= last => last.saturating_add(1),
            _ => millis,
        };
        self.last = Some(id);
        id.to_string()
    }
}

#[cfg(test)]
#[path = "model_test.rs"]
mod tests;
