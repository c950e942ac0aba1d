//! Lifecycle Integration Tests

use crate::helpers::{RecordingHost, TestCarouselBuilder, fire_due, hide_delay};
use attachment_carousel::{CarouselController, CarouselError, CarouselSettings, ManualScheduler};

#[test]
fn test_empty_items_fail_to_mount() {
    let result = CarouselController::new(
        &[],
        0,
        "",
        RecordingHost::default(),
        ManualScheduler::new(),
        &CarouselSettings::default(),
    );
    assert!(matches!(result, Err(CarouselError::NoAttachments)));
}

#[test]
fn test_teardown_cancels_pending_timer() {
    let (mut carousel, clock) = TestCarouselBuilder::new(&["A", "B"]).build();
    let armed = carousel.auto_hide_token().unwrap();

    carousel.teardown();

    assert!(carousel.is_torn_down());
    assert!(!clock.is_pending(armed));
    assert_eq!(fire_due(&mut carousel, &clock, hide_delay()), 0);
}

#[test]
fn test_late_timer_after_teardown_is_ignored() {
    let (mut carousel, _clock) = TestCarouselBuilder::new(&["A", "B"]).build();
    let armed = carousel.auto_hide_token().unwrap();
    let before = carousel.arrow_state();

    carousel.teardown();

    assert!(!carousel.handle_timer(armed));
    assert_eq!(carousel.arrow_state(), before);
    assert!(carousel.host().calls.is_empty());
}

#[test]
fn test_events_after_teardown_are_noops() {
    let (mut carousel, clock) = TestCarouselBuilder::new(&["A", "B", "C"]).build();
    carousel.teardown();
    let scheduled = clock.scheduled_total();
    let index = carousel.current_index();

    carousel.go_to_page(0);
    carousel.step(-1);
    carousel.handle_tap();
    carousel.set_gesture_active(true);
    carousel.show_arrows();
    carousel.arm_auto_hide();
    carousel.swipe_down();

    assert_eq!(carousel.current_index(), index);
    assert_eq!(carousel.active_source(), "A");
    assert!(carousel.arrows_visible());
    assert!(!carousel.is_gesture_active());
    assert!(carousel.host().calls.is_empty());
    assert_eq!(clock.scheduled_total(), scheduled);
    assert_eq!(clock.pending_count(), 0);
}

#[test]
fn test_teardown_is_idempotent() {
    let (mut carousel, clock) = TestCarouselBuilder::new(&["A"]).build();
    carousel.teardown();
    carousel.teardown();
    assert!(carousel.is_torn_down());
    assert_eq!(clock.pending_count(), 0);
}

#[test]
fn test_drop_cancels_pending_timer() {
    let (carousel, clock) = TestCarouselBuilder::new(&["A", "B"]).build();
    assert_eq!(clock.pending_count(), 1);

    drop(carousel);
    assert_eq!(clock.pending_count(), 0);
}
