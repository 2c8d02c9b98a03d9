//! Scripted assistant lines.

use rand::Rng;

/// First turn of every transcript.
pub const GREETING: &str = "Hi! I'm your workshop booking assistant. How can I help you today?";

/// Replies the assistant picks from, uniformly, for every user message.
pub const CANNED_REPLIES: [&str; 5] = [
    "Hello! I'm here to help you with workshop bookings. What would you like to know?",
    "You can book workshops by contacting instructors directly through our platform.",
    "To check workshop availability, please visit the scheduling section.",
    "For technical support, please contact our administrators.",
    "Workshop statistics are available in the dashboard for instructors.",
];

/// Draw one canned reply uniformly at random.
#[must_use]
pub fn pick_reply<R: Rng>(rng: &mut R) -> &'static str {
    CANNED_REPLIES[rng.random_range(0..CANNED_REPLIES.len())]
}

#[must_use]
pub fn is_canned_reply(text: &str) -> bool {
    CANNED_REPLIES.contains(&text)
}

#[cfg(test)]
#[path = "replies_test.rs"]
mod tests;
