use time::macros::datetime;
use tokio::time::sleep;

use super::*;

fn fixture() -> NotificationCenter {
    let now = datetime!(2024-01-10 12:00 UTC);
    NotificationCenter::with_notifications(vec![
        Notification::new("a", "A", "first", Category::Success, now),
        Notification::new("b", "B", "second", Category::Info, now),
        Notification::new("c", "C", "third", Category::Warning, now).into_read(),
        Notification::new("d", "D", "fourth", Category::Info, now),
    ])
}

fn expected_unread(center: &NotificationCenter) -> usize {
    center.list_notifications().iter().filter(|n| !n.read).count()
}

// =============================================================================
// unread count / badge
// =============================================================================

#[test]
fn seeded_center_has_two_unread() {
    let center = NotificationCenter::new();
    assert_eq!(center.list_notifications().len(), 3);
    assert_eq!(center.unread_count(), 2);
    assert_eq!(center.badge(), Some(2));
    assert!(!center.is_empty());
}

#[test]
fn mark_as_read_decrements_unread() {
    let mut center = fixture();
    assert_eq!(center.unread_count(), 3);
    assert!(center.mark_as_read("a"));
    assert_eq!(center.unread_count(), 2);
    assert!(center.list_notifications()[0].read);
}

#[test]
fn mark_as_read_already_read_is_noop() {
    let mut center = fixture();
    assert!(!center.mark_as_read("c"));
    assert_eq!(center.unread_count(), 3);
}

#[test]
fn mark_as_read_unknown_id_leaves_state_unchanged() {
    let mut center = fixture();
    let before = center.list_notifications().to_vec();
    assert!(!center.mark_as_read("nope"));
    assert!(!center.mark_as_read(""));
    assert_eq!(center.list_notifications(), before.as_slice());
    assert_eq!(center.unread_count(), 3);
}

#[test]
fn unread_count_tracks_any_sequence_of_marks() {
    let mut center = fixture();
    for id in ["b", "b", "x", "d", "c", "a", "a", "d"] {
        center.mark_as_read(id);
        assert_eq!(center.unread_count(), expected_unread(&center));
        assert_eq!(center.badge().unwrap_or(0), center.unread_count());
    }
    assert_eq!(center.unread_count(), 0);
}

#[test]
fn mark_all_as_read_zeroes_unread_and_is_idempotent() {
    let mut center = fixture();
    assert_eq!(center.mark_all_as_read(), 3);
    assert_eq!(center.unread_count(), 0);
    assert_eq!(center.badge(), None);
    assert_eq!(center.mark_all_as_read(), 0);
    assert_eq!(center.unread_count(), 0);
}

#[test]
fn mark_all_as_read_on_empty_center() {
    let mut center = NotificationCenter::with_notifications(Vec::new());
    assert!(center.is_empty());
    assert_eq!(center.mark_all_as_read(), 0);
    assert_eq!(center.unread_count(), 0);
}

#[test]
fn list_preserves_creation_order_after_marks() {
    let mut center = fixture();
    center.mark_as_read("b");
    let ids: Vec<&str> = center.list_notifications().iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, ["a", "b", "c", "d"]);
}

// =============================================================================
// panel
// =============================================================================

#[test]
fn panel_toggle_does_not_touch_data() {
    let mut center = fixture();
    assert_eq!(center.panel(), Panel::Closed);
    center.open_panel();
    assert!(center.panel().is_open());
    center.toggle_panel();
    assert!(!center.panel().is_open());
    center.open_panel();
    center.close_panel();
    assert_eq!(center.unread_count(), 3);
}

// =============================================================================
// welcome toast
// =============================================================================

#[tokio::test(start_paused = true)]
async fn toast_hidden_visible_hidden_windows() {
    let mut center = fixture();
    let outcome = center.schedule_welcome_toast(Duration::from_millis(10_000), Duration::from_millis(3000));
    assert_eq!(outcome, ToastRequest::Scheduled);
    assert_eq!(center.toast_phase(), ToastPhase::Pending);

    // t = 9_999
    sleep(Duration::from_millis(9999)).await;
    assert!(center.visible_toast().is_none());
    assert!(!center.bell_attention());

    // t = 10_000
    sleep(Duration::from_millis(1)).await;
    assert_eq!(center.visible_toast(), Some(&WELCOME_TOAST));
    assert!(center.bell_attention());

    // t = 12_999
    sleep(Duration::from_millis(2999)).await;
    assert!(center.visible_toast().is_some());

    // t = 13_000
    sleep(Duration::from_millis(1)).await;
    assert!(center.visible_toast().is_none());
    assert_eq!(center.toast_phase(), ToastPhase::Expired);
    assert!(!center.bell_attention());
}

#[tokio::test(start_paused = true)]
async fn toast_visible_exactly_at_show_deadline() {
    let mut center = fixture();
    center.schedule_welcome_toast(Duration::from_millis(10_000), Duration::from_millis(3000));

    sleep(Duration::from_millis(10_000)).await;
    assert!(center.bell_attention());
    sleep(Duration::from_millis(3000)).await;
    assert!(!center.bell_attention());
    assert_eq!(center.toast_phase(), ToastPhase::Expired);
}

#[tokio::test(start_paused = true)]
async fn toast_second_request_does_not_stack() {
    let mut center = fixture();
    center.schedule_welcome_toast(Duration::from_millis(100), Duration::from_millis(100));
    assert_eq!(
        center.schedule_welcome_toast(Duration::from_millis(10), Duration::from_millis(1000)),
        ToastRequest::Ignored(ToastPhase::Pending)
    );
    assert_eq!(center.timers.pending(), 1);

    // The ignored request's shorter delay must not take effect.
    sleep(Duration::from_millis(50)).await;
    assert!(center.visible_toast().is_none());

    sleep(Duration::from_millis(50)).await;
    assert!(center.visible_toast().is_some());
    assert_eq!(
        center.schedule_welcome_toast(Duration::ZERO, Duration::ZERO),
        ToastRequest::Ignored(ToastPhase::Visible)
    );

    sleep(Duration::from_millis(100)).await;
    assert_eq!(center.toast_phase(), ToastPhase::Expired);
    assert_eq!(
        center.schedule_welcome_toast(Duration::ZERO, Duration::from_millis(10)),
        ToastRequest::Ignored(ToastPhase::Expired)
    );
    sleep(Duration::from_millis(5)).await;
    assert!(center.visible_toast().is_none());
}

#[tokio::test(start_paused = true)]
async fn toast_does_not_affect_notification_list() {
    let mut center = fixture();
    center.schedule_welcome_toast(Duration::from_millis(10), Duration::from_millis(10));
    sleep(Duration::from_millis(15)).await;
    assert!(center.visible_toast().is_some());
    assert_eq!(center.list_notifications().len(), 4);
    assert_eq!(center.unread_count(), 3);
}

#[tokio::test(start_paused = true)]
async fn toast_timer_finishes_after_hide_deadline() {
    let mut center = fixture();
    center.schedule_welcome_toast(Duration::from_millis(10), Duration::from_millis(10));
    assert_eq!(center.timers.pending(), 1);
    sleep(Duration::from_millis(21)).await;
    assert_eq!(center.timers.pending(), 0);
}

#[test]
fn toast_request_outside_runtime_stays_idle() {
    let mut center = fixture();
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        center.schedule_welcome_toast(Duration::from_millis(10), Duration::from_millis(10))
    }));
    assert!(result.is_err());
    assert_eq!(center.toast_phase(), ToastPhase::Idle);
    assert!(center.visible_toast().is_none());
}

#[tokio::test(start_paused = true)]
async fn teardown_cancels_pending_toast() {
    let mut center = fixture();
    center.schedule_welcome_toast(Duration::from_millis(100), Duration::from_millis(100));
    assert_eq!(center.teardown(), 1);
    assert_eq!(center.timers.pending(), 0);

    sleep(Duration::from_millis(150)).await;
    assert_eq!(center.toast_phase(), ToastPhase::Expired);
    assert!(center.visible_toast().is_none());
}

#[tokio::test(start_paused = true)]
async fn teardown_while_visible_hides_toast() {
    let mut center = fixture();
    center.schedule_welcome_toast(Duration::from_millis(10), Duration::from_millis(100));
    sleep(Duration::from_millis(20)).await;
    assert!(center.visible_toast().is_some());
    assert!(center.bell_attention());

    center.teardown();
    assert!(center.visible_toast().is_none());
    assert!(!center.bell_attention());
    assert_eq!(center.toast_phase(), ToastPhase::Expired);
}

#[tokio::test(start_paused = true)]
async fn torn_down_center_ignores_new_toast_requests() {
    let mut center = fixture();
    center.teardown();
    assert_eq!(
        center.schedule_welcome_toast(Duration::from_millis(10), Duration::from_millis(10)),
        ToastRequest::Ignored(ToastPhase::Expired)
    );
    assert_eq!(center.timers.pending(), 0);
}
