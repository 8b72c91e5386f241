//! Level 3: Pointer Interaction
//!
//! Tests hover states, click-to-step on the track, dragging with the strict
//! no-cross rule, and the Slint callback factories.

mod common;

use common::harness::SliderHarness;
use slint_range_slider::{
    Event, Point, PointerButton, RangeSlider, SliderConfig, Thumb, ThumbState, ValueEvent,
};

fn harness_with(left: i32, right: i32) -> SliderHarness {
    let harness = SliderHarness::new();
    harness.ctrl.set_value_right(right).unwrap();
    harness.ctrl.set_value_left(left).unwrap();
    harness.clear();
    harness
}

fn state(harness: &SliderHarness, thumb: Thumb) -> ThumbState {
    harness.ctrl.slider().borrow().thumb_state(thumb)
}

fn selected(harness: &SliderHarness) -> Option<Thumb> {
    harness.ctrl.slider().borrow().selected_thumb()
}

// ============================================================================
// Hover
// ============================================================================

#[test]
fn test_hover_makes_thumb_hot() {
    let harness = SliderHarness::new();
    let (x, y) = harness.thumb_center(Thumb::Left);

    harness.mouse_move(x, y);
    assert_eq!(state(&harness, Thumb::Left), ThumbState::Hot);
    assert_eq!(state(&harness, Thumb::Right), ThumbState::Normal);

    harness.mouse_move(50, y);
    assert_eq!(state(&harness, Thumb::Left), ThumbState::Normal);
    assert!(harness.invalidations() >= 2);
}

// ============================================================================
// Click on the track
// ============================================================================

#[test]
fn test_click_past_right_thumb_increments_right() {
    let harness = SliderHarness::new();

    harness.click(140, 22);

    assert_eq!(harness.right(), 8);
    assert_eq!(harness.left(), 0);
    assert_eq!(
        harness.tracker.kinds(),
        vec![ValueEvent::ValueChanged, ValueEvent::RightValueChanged]
    );
    assert_eq!(selected(&harness), Some(Thumb::Right));
    assert_eq!(state(&harness, Thumb::Right), ThumbState::Hot);
    assert_eq!(harness.focus_requests(), 1);
}

#[test]
fn test_click_between_thumbs_moves_closest_toward_pointer() {
    let harness = SliderHarness::new();

    // Right thumb spans x = 92..103; the left one x = 1..12.
    harness.click(80, 22);
    assert_eq!(harness.right(), 6);
    assert_eq!(harness.left(), 0);
    assert_eq!(selected(&harness), Some(Thumb::Right));
}

#[test]
fn test_click_before_left_thumb_decrements_left() {
    let harness = harness_with(3, 7);

    harness.click(20, 22);
    assert_eq!(harness.left(), 2);
    assert_eq!(selected(&harness), Some(Thumb::Left));
    assert_eq!(
        harness.tracker.kinds(),
        vec![ValueEvent::ValueChanged, ValueEvent::LeftValueChanged]
    );
}

#[test]
fn test_click_at_range_end_selects_without_change() {
    let harness = harness_with(0, 10);

    harness.click(144, 22);
    assert_eq!(harness.right(), 10);
    assert!(harness.tracker.is_empty());
    assert_eq!(selected(&harness), Some(Thumb::Right));
    assert_eq!(harness.focus_requests(), 1);
}

#[test]
fn test_secondary_button_is_ignored() {
    let harness = SliderHarness::new();

    harness.ctrl.handle_event(Event::PointerDown {
        position: Point::new(140, 22),
        button: PointerButton::Secondary,
    });
    assert_eq!(harness.right(), 7);
    assert_eq!(selected(&harness), None);
    assert_eq!(harness.focus_requests(), 0);
}

// ============================================================================
// Drag
// ============================================================================

#[test]
fn test_press_on_thumb_starts_drag() {
    let harness = SliderHarness::new();
    let (x, y) = harness.thumb_center(Thumb::Right);

    harness.mouse_down(x, y);
    assert_eq!(state(&harness, Thumb::Right), ThumbState::Pressed);
    assert_eq!(harness.ctrl.slider().borrow().interaction().dragging(), Some(Thumb::Right));
    assert_eq!(selected(&harness), Some(Thumb::Right));
    assert_eq!(harness.right(), 7);
    assert!(harness.tracker.is_empty());

    harness.mouse_up(x, y);
    assert_eq!(harness.ctrl.slider().borrow().interaction().dragging(), None);
}

#[test]
fn test_drag_left_into_right_is_blocked() {
    let harness = SliderHarness::new();
    let (x, y) = harness.thumb_center(Thumb::Left);

    harness.mouse_down(x, y);
    assert_eq!(state(&harness, Thumb::Left), ThumbState::Pressed);

    harness.mouse_move(harness.coordinate_for_value(9), y);
    assert_eq!(harness.left(), 0);

    harness.mouse_move(harness.coordinate_for_value(6), y);
    assert_eq!(harness.left(), 6);
    // The pointer is off the thumb's old rectangle; selection keeps it Hot.
    assert_eq!(state(&harness, Thumb::Left), ThumbState::Hot);

    harness.mouse_move(harness.coordinate_for_value(7), y);
    assert_eq!(harness.left(), 6);
    assert_eq!(harness.right(), 7);

    harness.mouse_up(harness.coordinate_for_value(7), y);
    assert_eq!(harness.tracker.count(ValueEvent::LeftValueChanged), 1);
    assert_eq!(harness.tracker.count(ValueEvent::RightValueChanged), 0);
}

#[test]
fn test_drag_right_thumb_to_the_end() {
    let harness = SliderHarness::new();
    let (x, y) = harness.thumb_center(Thumb::Right);

    harness.drag((x, y), &[(120, y), (145, y), (500, y)]);
    // x = 120 projects to 8, 145 to 10; 500 is past the maximum and dropped.
    assert_eq!(harness.right(), 10);
    assert_eq!(harness.tracker.count(ValueEvent::RightValueChanged), 2);
}

#[test]
fn test_leaving_mid_drag_drops_highlight() {
    let harness = SliderHarness::new();
    let (x, y) = harness.thumb_center(Thumb::Right);

    harness.mouse_down(x, y);
    harness.mouse_move(120, 40);
    assert_eq!(state(&harness, Thumb::Right), ThumbState::Hot);

    harness.leave();
    assert_eq!(state(&harness, Thumb::Right), ThumbState::Normal);
    assert_eq!(selected(&harness), None);
}

#[test]
fn test_drag_on_widest_range_does_not_overflow() {
    let mut config = SliderConfig::default();
    config.minimum = 1;
    config.maximum = i32::MAX;
    config.value_left = 1;
    config.value_right = i32::MAX;
    let harness = SliderHarness::with_slider(RangeSlider::with_config(config).unwrap());
    let (x, y) = harness.thumb_center(Thumb::Right);

    harness.mouse_down(x, y);
    assert_eq!(harness.ctrl.slider().borrow().interaction().dragging(), Some(Thumb::Right));

    // Projects far past i32::MAX: dropped.
    harness.mouse_move(400, y);
    assert_eq!(harness.right(), i32::MAX);

    harness.mouse_move(72, y);
    assert!(harness.right() > 1 && harness.right() < i32::MAX);

    harness.mouse_move(-400, y);
    harness.mouse_up(-400, y);
    assert!(harness.left() <= harness.right());
    harness.ctrl.paint();
}

#[test]
fn test_moves_after_release_do_not_drag() {
    let harness = SliderHarness::new();
    let (x, y) = harness.thumb_center(Thumb::Right);

    harness.click(x, y);
    harness.mouse_move(130, y);
    assert_eq!(harness.right(), 7);
}

#[test]
fn test_leave_clears_selection() {
    let harness = SliderHarness::new();
    harness.click(140, 22);
    assert_eq!(selected(&harness), Some(Thumb::Right));

    harness.leave();
    assert_eq!(selected(&harness), None);
    assert_eq!(state(&harness, Thumb::Right), ThumbState::Normal);
}

// ============================================================================
// Callback factories
// ============================================================================

#[test]
fn test_callback_factories_drive_the_slider() {
    let harness = SliderHarness::new();
    let pressed = harness.ctrl.pointer_pressed_callback();
    let moved = harness.ctrl.pointer_moved_callback();
    let released = harness.ctrl.pointer_released_callback();
    let exited = harness.ctrl.pointer_exited_callback();
    let scrolled = harness.ctrl.scrolled_callback();

    pressed(140.0, 22.0);
    released();
    assert_eq!(harness.right(), 8);

    scrolled(-1.0);
    assert_eq!(harness.right(), 7);

    let (x, y) = harness.thumb_center(Thumb::Left);
    pressed(x as f32, y as f32);
    moved(58.5, y as f32);
    released();
    assert_eq!(harness.left(), 4);

    exited();
    assert_eq!(selected(&harness), None);
}
