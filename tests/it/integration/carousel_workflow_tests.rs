//! Carousel Navigation Integration Tests

use crate::helpers::{HostCall, TestCarouselBuilder, fire_due, hide_delay};
use attachment_carousel::constants::{STEP_BACK, STEP_FORWARD};

#[test]
fn test_mount_and_step_back_end_to_end() {
    let (mut carousel, _clock) = TestCarouselBuilder::new(&["A", "B", "C"])
        .initial_index(0)
        .initial_source("A")
        .build();

    let display: Vec<&str> = carousel.items().iter().map(|i| i.source.as_str()).collect();
    assert_eq!(display, vec!["C", "B", "A"]);
    assert_eq!(carousel.current_index(), 2);
    assert_eq!(carousel.active_source(), "A");
    assert!(carousel.host().calls.is_empty());

    carousel.step(STEP_BACK);

    assert_eq!(carousel.current_index(), 1);
    assert_eq!(carousel.active_source(), "B");
    assert_eq!(
        carousel.host().calls,
        vec![
            HostCall::DismissKeyboard,
            HostCall::Navigate("B".into()),
            HostCall::SetPagerPage(1),
        ]
    );
}

#[test]
fn test_initial_source_matches_initial_page() {
    for initial in 0..4 {
        let (carousel, _clock) = TestCarouselBuilder::new(&["A", "B", "C", "D"])
            .initial_index(initial)
            .build();
        let item = &carousel.items()[carousel.current_index()];
        assert_eq!(carousel.active_source(), item.source);
        assert_eq!(carousel.logical_index(), initial);
    }
}

#[test]
fn test_forward_then_back_returns_to_start() {
    let (mut carousel, _clock) = TestCarouselBuilder::new(&["A", "B", "C", "D"])
        .initial_index(1)
        .build();
    let start = carousel.current_index();
    let start_source = carousel.active_source().to_string();

    carousel.step(STEP_FORWARD);
    assert_eq!(carousel.current_index(), start + 1);
    carousel.step(STEP_BACK);

    assert_eq!(carousel.current_index(), start);
    assert_eq!(carousel.active_source(), start_source);
    assert_eq!(carousel.host().navigations(), vec!["A".to_string(), start_source]);
}

#[test]
fn test_swipe_selection_does_not_move_pager() {
    let (mut carousel, _clock) = TestCarouselBuilder::new(&["A", "B", "C"]).build();

    carousel.go_to_page(0);

    assert_eq!(carousel.active_source(), "C");
    assert_eq!(carousel.host().navigations(), vec!["C".to_string()]);
    assert_eq!(carousel.host().count(&HostCall::SetPagerPage(0)), 0);
    assert_eq!(carousel.host().count(&HostCall::DismissKeyboard), 1);
}

#[test]
fn test_out_of_range_pages_are_clamped() {
    let (mut carousel, _clock) = TestCarouselBuilder::new(&["A", "B", "C"]).build();

    carousel.go_to_page(10);
    assert_eq!(carousel.current_index(), 2);
    assert_eq!(carousel.active_source(), "A");

    carousel.go_to_page(-5);
    assert_eq!(carousel.current_index(), 0);
    assert_eq!(carousel.active_source(), "C");
}

#[test]
fn test_step_past_edge_stays_on_edge() {
    let (mut carousel, _clock) = TestCarouselBuilder::new(&["A", "B"]).build();

    carousel.step(STEP_FORWARD);
    assert_eq!(carousel.current_index(), 1);
    assert_eq!(carousel.active_source(), "A");
    assert_eq!(carousel.host().count(&HostCall::SetPagerPage(1)), 1);
}

#[test]
fn test_navigation_reveals_hidden_arrows() {
    let (mut carousel, clock) = TestCarouselBuilder::new(&["A", "B", "C"]).build();
    fire_due(&mut carousel, &clock, hide_delay());
    assert!(!carousel.arrows_visible());

    carousel.step(STEP_BACK);
    assert!(carousel.arrows_visible());
    assert_eq!(clock.pending_count(), 1);
}

#[test]
fn test_swipe_down_passes_through() {
    let (mut carousel, _clock) = TestCarouselBuilder::new(&["A", "B"]).build();
    let index = carousel.current_index();

    carousel.swipe_down();

    assert_eq!(carousel.host().calls, vec![HostCall::Close]);
    assert_eq!(carousel.current_index(), index);
}

#[test]
fn test_mismatched_initial_source_is_kept() {
    let (carousel, _clock) = TestCarouselBuilder::new(&["A", "B"])
        .initial_index(0)
        .initial_source("B")
        .build();
    assert_eq!(carousel.active_source(), "B");
    assert!(carousel.is_active("B"));
}

#[test]
fn test_huge_initial_index_clamps_to_first_display_page() {
    for initial in [usize::MAX, 1usize << 63, 3] {
        let (carousel, _clock) = TestCarouselBuilder::new(&["A", "B", "C"])
            .initial_index(initial)
            .initial_source("C")
            .build();
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(carousel.items()[carousel.current_index()].source, "C");
    }
}

#[test]
fn test_extreme_steps_saturate() {
    let (mut carousel, _clock) = TestCarouselBuilder::new(&["A", "B", "C"])
        .initial_index(1)
        .build();

    carousel.step(isize::MAX);
    assert_eq!(carousel.current_index(), 2);
    assert_eq!(carousel.active_source(), "A");

    carousel.step(isize::MIN);
    assert_eq!(carousel.current_index(), 0);
    assert_eq!(carousel.active_source(), "C");
}

#[test]
fn test_extreme_page_requests_clamp() {
    let (mut carousel, _clock) = TestCarouselBuilder::new(&["A", "B"]).build();

    carousel.go_to_page(isize::MIN);
    assert_eq!(carousel.current_index(), 0);
    carousel.go_to_page(isize::MAX);
    assert_eq!(carousel.current_index(), 1);
}
