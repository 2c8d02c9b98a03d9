use std::time::Duration;

use time::OffsetDateTime;
use tracing::{error, info, warn};
use workshop_widgets::{Page, WidgetConfig};

/// Drives a short scripted session against the page widgets and prints the
/// final page snapshot as JSON.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    // Bad overrides are non-fatal: fall back to the stock timings.
    let config = match WidgetConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, "widget config invalid; using defaults");
            WidgetConfig::default()
        }
    };

    let mut page = Page::mount(&config);

    page.chat.open_panel();
    page.chat.set_draft("How do I book a workshop?");
    page.chat.submit_draft();
    page.chat.send_user_message("Is there a Python workshop in Mumbai?");

    page.notifications.open_panel();
    page.notifications.mark_as_read("1");
    info!(unread = page.notifications.unread_count(), "after reading the first notification");

    // Long enough for every reply and the full toast cycle.
    let settle = config
        .reply_delay
        .max(config.toast_delay.saturating_add(config.toast_visible))
        .saturating_add(Duration::from_millis(50));
    tokio::time::sleep(settle).await;

    page.notifications.mark_all_as_read();
    page.unmount();

    match serde_json::to_string_pretty(&page.snapshot(OffsetDateTime::now_utc())) {
        Ok(json) => println!("{json}"),
        Err(e) => error!(error = %e, "failed to render page snapshot"),
    }
}
