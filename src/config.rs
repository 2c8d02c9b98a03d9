//! Widget timing configuration parsed from environment variables.

use std::time::Duration;

pub const DEFAULT_CHAT_REPLY_DELAY_MS: u64 = 1000;
pub const DEFAULT_TOAST_DELAY_MS: u64 = 10_000;
pub const DEFAULT_TOAST_VISIBLE_MS: u64 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}' is not a whole number of milliseconds")]
    InvalidNumber { key: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Delay between a user message and the assistant's canned reply.
    pub reply_delay: Duration,
    /// Delay before the welcome toast appears.
    pub toast_delay: Duration,
    /// How long the welcome toast stays on screen.
    pub toast_visible: Duration,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            reply_delay: Duration::from_millis(DEFAULT_CHAT_REPLY_DELAY_MS),
            toast_delay: Duration::from_millis(DEFAULT_TOAST_DELAY_MS),
            toast_visible: Duration::from_millis(DEFAULT_TOAST_VISIBLE_MS),
        }
    }
}

impl WidgetConfig {
    /// Build typed widget config from environment variables.
    ///
    /// Optional:
    /// - `CHAT_REPLY_DELAY_MS`: default 1000
    /// - `TOAST_DELAY_MS`: default 10000
    /// - `TOAST_VISIBLE_MS`: default 3000
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`WidgetConfig::from_env`], reading values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            reply_delay: parse_millis(&lookup, "CHAT_REPLY_DELAY_MS", DEFAULT_CHAT_REPLY_DELAY_MS)?,
            toast_delay: parse_millis(&lookup, "TOAST_DELAY_MS", DEFAULT_TOAST_DELAY_MS)?,
            toast_visible: parse_millis(&lookup, "TOAST_VISIBLE_MS", DEFAULT_TOAST_VISIBLE_MS)?,
        })
    }
}

fn parse_millis<F>(lookup: &F, key: &'static str, default: u64) -> Result<Duration, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(Duration::from_millis(default));
    };
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| ConfigError::InvalidNumber { key, value: raw })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
