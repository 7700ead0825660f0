//! Gesture Scenario Tests
//!
//! Drives complete interactions through the public carousel API:
//! - Indicator navigation and clamping
//! - Drag, overscroll, and snap-on-release
//! - Mixed mouse and touch input

use swiper_core::{
    sample_slides, Carousel, FixedStrip, PointerEvent, PointerPhase, PointerSource, TouchPoint,
};

const WIDTH: f64 = 300.0;

/// Ten demo slides in a 300px viewport.
fn demo() -> (Carousel, FixedStrip) {
    let carousel = Carousel::new(sample_slides(10)).expect("demo slides are non-empty");
    (carousel, FixedStrip::new(WIDTH, 10))
}

/// Drag from `from` to `to` with the mouse and release.
fn swipe(carousel: &mut Carousel, strip: &FixedStrip, from: f64, to: f64) {
    carousel.handle_pointer(&PointerEvent::mouse(PointerPhase::Start, from), strip);
    carousel.handle_pointer(&PointerEvent::mouse(PointerPhase::Move, to), strip);
    carousel.handle_pointer(&PointerEvent::mouse(PointerPhase::End, to), strip);
}

fn touch(phase: PointerPhase, x: f64) -> PointerEvent {
    PointerEvent::touch(phase, &[TouchPoint { x }])
}

// ============================================================================
// Indicator Navigation
// ============================================================================

#[test]
fn test_go_to_any_index_lands_on_a_boundary() {
    let (mut carousel, strip) = demo();

    for idx in -5_isize..15 {
        carousel.go_to(idx, &strip);
        let active = carousel.active_index();
        assert!(active <= 9, "index {idx} gave {active}");
        #[allow(clippy::cast_precision_loss)]
        let expected = -(WIDTH * active as f64);
        assert_eq!(carousel.offset_x(), expected, "index {idx}");
    }
}

#[test]
fn test_go_to_current_index_is_idempotent() {
    let (mut carousel, strip) = demo();
    carousel.go_to(3, &strip);
    let before = carousel.state().clone();

    carousel.go_to(3, &strip);
    assert_eq!(carousel.state(), &before);
}

#[test]
fn test_next_nine_times_reaches_last_slide() {
    let (mut carousel, strip) = demo();

    for _ in 0..9 {
        carousel.next(&strip);
    }
    assert_eq!(carousel.active_index(), 9);
    assert!(carousel.view().next_disabled);
    assert_eq!(carousel.view().next_class(), "swiper-button-next disabled");

    carousel.next(&strip);
    assert_eq!(carousel.active_index(), 9);
    assert_eq!(carousel.offset_x(), -2700.0);
}

#[test]
fn test_prev_walks_back_to_first_slide() {
    let (mut carousel, strip) = demo();
    carousel.go_to(2, &strip);

    carousel.prev(&strip);
    carousel.prev(&strip);
    carousel.prev(&strip);
    assert_eq!(carousel.active_index(), 0);
    assert!(carousel.view().prev_disabled);
}

// ============================================================================
// Dragging
// ============================================================================

#[test]
fn test_drag_there_and_back_restores_start_offset() {
    let (mut carousel, strip) = demo();
    carousel.go_to(2, &strip);

    carousel.begin_drag(400.0, &strip);
    carousel.drag_to(460.0);
    carousel.drag_to(400.0);
    assert_eq!(carousel.offset_x(), -600.0);
}

#[test]
fn test_overscroll_past_start_is_capped() {
    let (mut carousel, strip) = demo();
    carousel.begin_drag(0.0, &strip);
    assert_eq!(carousel.drag_to(250.0), 180.0);
    assert_eq!(carousel.drag_to(1000.0), 180.0);
}

#[test]
fn test_short_drag_from_second_slide_snaps_back() {
    let (mut carousel, strip) = demo();
    carousel.go_to(1, &strip);

    swipe(&mut carousel, &strip, 100.0, 150.0);
    assert_eq!(carousel.offset_x(), -300.0);
    assert_eq!(carousel.active_index(), 1);
}

#[test]
fn test_committed_swipe_toward_start_advances_back() {
    let (mut carousel, strip) = demo();
    carousel.go_to(2, &strip);

    swipe(&mut carousel, &strip, 100.0, 281.0);
    assert_eq!(carousel.offset_x(), -300.0);
    assert_eq!(carousel.active_index(), 1);
}

#[test]
fn test_short_swipe_toward_start_is_not_committed() {
    let (mut carousel, strip) = demo();
    carousel.go_to(2, &strip);

    carousel.begin_drag(100.0, &strip);
    carousel.drag_to(279.0);
    let outcome = carousel.end_drag().expect("drag was active");

    // 179px of travel stays under the threshold; -421 rounds to -300.
    assert!(!outcome.committed);
    assert_eq!(outcome.offset_x, -300.0);
    assert_eq!(outcome.active_index, 1);
}

#[test]
fn test_long_committed_swipe_skips_a_slide() {
    let (mut carousel, strip) = demo();

    carousel.begin_drag(500.0, &strip);
    carousel.drag_to(100.0);
    let outcome = carousel.end_drag().expect("drag was active");

    assert!(outcome.committed);
    assert_eq!(outcome.offset_x, -600.0);
    assert_eq!(outcome.active_index, 2);
}

#[test]
fn test_sub_threshold_drag_rounds_to_nearest() {
    let (mut carousel, strip) = demo();

    carousel.begin_drag(500.0, &strip);
    carousel.drag_to(330.0);
    let outcome = carousel.end_drag().expect("drag was active");

    // 170px is under the 180px commit threshold but past half a slide.
    assert!(!outcome.committed);
    assert_eq!(outcome.offset_x, -300.0);
    assert_eq!(outcome.active_index, 1);
}

#[test]
fn test_overscroll_past_end_snaps_to_last_slide() {
    let (mut carousel, strip) = demo();
    carousel.go_to(9, &strip);

    swipe(&mut carousel, &strip, 500.0, 100.0);
    assert_eq!(carousel.offset_x(), -2700.0);
    assert_eq!(carousel.active_index(), 9);
}

#[test]
fn test_short_overscroll_past_end_reverts_to_last_slide() {
    let (mut carousel, strip) = demo();
    carousel.go_to(9, &strip);

    carousel.begin_drag(500.0, &strip);
    assert_eq!(carousel.drag_to(340.0), -2860.0);
    let outcome = carousel.end_drag().expect("drag was active");

    assert!(!outcome.committed);
    assert_eq!(outcome.offset_x, -2700.0);
    assert_eq!(outcome.active_index, 9);
    assert_eq!(carousel.offset_x(), carousel.state().min_offset_x);
    assert!(!carousel.can_go_next());
}

#[test]
fn test_strip_is_marked_while_swiping() {
    let (mut carousel, strip) = demo();
    carousel.begin_drag(10.0, &strip);
    assert_eq!(carousel.view().strip_class(), "swiper-list is-swiping");

    carousel.end_drag();
    assert_eq!(carousel.view().strip_class(), "swiper-list");
}

// ============================================================================
// Touch Input
// ============================================================================

#[test]
fn test_touch_drag_matches_mouse_drag() {
    let (mut by_touch, strip) = demo();
    by_touch.handle_pointer(&touch(PointerPhase::Start, 600.0), &strip);
    by_touch.handle_pointer(&touch(PointerPhase::Move, 300.0), &strip);
    by_touch.handle_pointer(&touch(PointerPhase::End, 300.0), &strip);

    let (mut by_mouse, _) = demo();
    swipe(&mut by_mouse, &strip, 600.0, 300.0);

    assert_eq!(by_touch.state(), by_mouse.state());
}

#[test]
fn test_touch_cancel_releases_like_end() {
    let (mut carousel, strip) = demo();
    carousel.handle_pointer(&touch(PointerPhase::Start, 600.0), &strip);
    carousel.handle_pointer(&touch(PointerPhase::Move, 350.0), &strip);

    let cancel = PointerEvent::release(PointerSource::Touch, PointerPhase::Cancel);
    assert!(carousel.handle_pointer(&cancel, &strip));
    assert!(!carousel.is_dragging());
    assert_eq!(carousel.active_index(), 1);
}

#[test]
fn test_touch_start_without_coordinates_is_ignored() {
    let (mut carousel, strip) = demo();
    let empty = PointerEvent::touch(PointerPhase::Start, &[]);
    assert!(!carousel.handle_pointer(&empty, &strip));
    assert!(!carousel.is_dragging());
}
