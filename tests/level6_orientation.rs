//! Level 6: Orientation and Bounds
//!
//! Tests swapping orientation about the widget center, direction
//! re-derivation, and auto-size behaviour.

mod common;

use common::harness::SliderHarness;
use slint_range_slider::{Orientation, Point, RangeSlider, Size, Thumb, ThumbDirection, TickStyle};

fn centered_slider() -> RangeSlider {
    let mut slider = RangeSlider::new();
    // 145 x 45 centered on (100, 100).
    slider.set_location(Point::new(28, 78));
    slider
}

#[test]
fn test_toggle_swaps_size_about_center() {
    let mut slider = centered_slider();
    assert_eq!(slider.bounds().center(), Point::new(100, 100));

    slider.toggle_orientation();
    assert_eq!(slider.orientation(), Orientation::Vertical);
    assert_eq!(slider.size(), Size::new(45, 145));
    assert_eq!(slider.location(), Point::new(78, 28));
    assert_eq!(slider.bounds().center(), Point::new(100, 100));
    assert_eq!(slider.thumb_direction(Thumb::Left), ThumbDirection::Right);
    assert_eq!(slider.thumb_direction(Thumb::Right), ThumbDirection::Right);

    slider.toggle_orientation();
    assert_eq!(slider.size(), Size::new(145, 45));
    assert_eq!(slider.location(), Point::new(28, 78));
    assert_eq!(slider.thumb_direction(Thumb::Left), ThumbDirection::Bottom);
}

#[test]
fn test_setting_same_orientation_keeps_size() {
    let mut slider = centered_slider();
    assert!(!slider.set_orientation(Orientation::Horizontal));
    assert_eq!(slider.size(), Size::new(145, 45));
    assert_eq!(slider.location(), Point::new(28, 78));
}

#[test]
fn test_vertical_top_left_points_left() {
    let mut slider = RangeSlider::new();
    slider.set_tick_style(TickStyle::TopLeft);
    slider.set_orientation(Orientation::Vertical);
    assert_eq!(slider.thumb_direction(Thumb::Left), ThumbDirection::Left);
    assert_eq!(slider.thumb_direction(Thumb::Right), ThumbDirection::Left);
}

#[test]
fn test_orientation_keeps_values() {
    let harness = SliderHarness::new();
    harness.ctrl.set_value_left(2).unwrap();
    harness.clear();

    harness.ctrl.set_orientation(Orientation::Vertical);
    assert_eq!(harness.left(), 2);
    assert_eq!(harness.right(), 7);
    assert!(harness.tracker.is_empty());
    assert_eq!(harness.invalidations(), 1);
}

#[test]
fn test_auto_size_fixes_cross_axis() {
    let harness = SliderHarness::new();
    harness.ctrl.set_auto_size(true);

    harness.ctrl.set_size(Size::new(300, 200));
    assert_eq!(harness.ctrl.slider().borrow().size(), Size::new(300, 45));

    harness.ctrl.set_auto_size(false);
    harness.ctrl.set_size(Size::new(300, 200));
    assert_eq!(harness.ctrl.slider().borrow().size(), Size::new(300, 200));
}

#[test]
fn test_resize_moves_thumbs() {
    let harness = SliderHarness::new();
    harness.ctrl.set_size(Size::new(245, 45));

    let slider = harness.ctrl.slider();
    let host = harness.ctrl.host();
    // Track is 232 wide, so the tick step is 23.
    let rect = slider.borrow().thumb_rect(Thumb::Right, &*host.borrow());
    assert_eq!(rect.x, 162);
}
