//! Test harness for the range slider controller.
//!
//! Provides a recording host adapter with fixed thumb glyph sizes and helper
//! methods for simulating user interactions through Slint window events.

#![allow(dead_code)]

use super::CallbackTracker;
use slint::{
    platform::{PointerEventButton, WindowEvent},
    Color, LogicalPosition,
};
use slint_range_slider::{
    BorderStyle, HostAdapter, Orientation, RangeSlider, RangeSliderController, Rect, Size,
    TickEdgeStyle, ThumbDirection, ThumbMetrics, ThumbState, ValueEvent,
};

/// Thumb glyph pointing up or down.
pub const VERTICAL_GLYPH: Size = Size::new(11, 19);
/// Thumb glyph pointing left or right.
pub const HORIZONTAL_GLYPH: Size = Size::new(19, 11);

/// One call the widget made into the host.
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    Invalidate,
    Focus,
    Acquire(u32),
    Release(u32),
    Track(Rect),
    Ticks(Rect, i32, TickEdgeStyle, Orientation),
    DirectedThumb(Rect, ThumbState, ThumbDirection),
    DoublePointedThumb(Rect, ThumbState, Orientation),
    Border(Rect, Color, BorderStyle),
    Fill(Rect, Color),
}

/// Host adapter that records every call.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub calls: Vec<HostCall>,
    next_context: u32,
}

impl RecordingHost {
    pub fn count(&self, call: &HostCall) -> usize {
        self.calls.iter().filter(|c| *c == call).count()
    }

    /// Only the drawing calls, without context bookkeeping.
    pub fn draws(&self) -> Vec<HostCall> {
        self.calls
            .iter()
            .filter(|c| {
                !matches!(
                    c,
                    HostCall::Invalidate | HostCall::Focus | HostCall::Acquire(_) | HostCall::Release(_)
                )
            })
            .cloned()
            .collect()
    }
}

impl ThumbMetrics for RecordingHost {
    fn measure_thumb_size(&self, direction: ThumbDirection, _state: ThumbState) -> Size {
        match direction {
            ThumbDirection::Top | ThumbDirection::Bottom => VERTICAL_GLYPH,
            ThumbDirection::Left | ThumbDirection::Right => HORIZONTAL_GLYPH,
        }
    }
}

impl HostAdapter for RecordingHost {
    type Context = u32;

    fn invalidate(&mut self) {
        self.calls.push(HostCall::Invalidate);
    }

    fn request_focus(&mut self) {
        self.calls.push(HostCall::Focus);
    }

    fn acquire_drawing_context(&mut self) -> u32 {
        self.next_context += 1;
        self.calls.push(HostCall::Acquire(self.next_context));
        self.next_context
    }

    fn release_drawing_context(&mut self, ctx: u32) {
        self.calls.push(HostCall::Release(ctx));
    }

    fn draw_track(&mut self, _ctx: &mut u32, rect: Rect) {
        self.calls.push(HostCall::Track(rect));
    }

    fn draw_ticks(&mut self, _ctx: &mut u32, rect: Rect, count: i32, edge_style: TickEdgeStyle, axis: Orientation) {
        self.calls.push(HostCall::Ticks(rect, count, edge_style, axis));
    }

    fn draw_directed_thumb(&mut self, _ctx: &mut u32, rect: Rect, state: ThumbState, direction: ThumbDirection) {
        self.calls.push(HostCall::DirectedThumb(rect, state, direction));
    }

    fn draw_double_pointed_thumb(&mut self, _ctx: &mut u32, rect: Rect, state: ThumbState, axis: Orientation) {
        self.calls.push(HostCall::DoublePointedThumb(rect, state, axis));
    }

    fn draw_border(&mut self, _ctx: &mut u32, rect: Rect, color: Color, style: BorderStyle) {
        self.calls.push(HostCall::Border(rect, color, style));
    }

    fn fill_rect(&mut self, _ctx: &mut u32, rect: Rect, color: Color) {
        self.calls.push(HostCall::Fill(rect, color));
    }
}

/// Test harness wrapping a controller with value notification tracking.
pub struct SliderHarness {
    pub ctrl: RangeSliderController<RecordingHost>,
    pub tracker: CallbackTracker,
}

impl SliderHarness {
    /// Default slider: `[0, 10]`, thumbs at 0 and 7, 145 × 45.
    pub fn new() -> Self {
        Self::with_slider(RangeSlider::new())
    }

    pub fn with_slider(slider: RangeSlider) -> Self {
        let ctrl = RangeSliderController::with_slider(slider, RecordingHost::default());
        let tracker = CallbackTracker::new();

        let record = |event: ValueEvent| {
            let ctrl = ctrl.clone();
            let events = tracker.events.clone();
            move || {
                events
                    .borrow_mut()
                    .push((event, ctrl.value_left(), ctrl.value_right()));
            }
        };
        ctrl.on_value_changed(record(ValueEvent::ValueChanged));
        ctrl.on_left_value_changed(record(ValueEvent::LeftValueChanged));
        ctrl.on_right_value_changed(record(ValueEvent::RightValueChanged));

        Self { ctrl, tracker }
    }

    pub fn left(&self) -> i32 {
        self.ctrl.value_left()
    }

    pub fn right(&self) -> i32 {
        self.ctrl.value_right()
    }

    // === Pointer simulation ===

    fn send(&self, event: WindowEvent) {
        assert!(self.ctrl.handle_window_event(&event));
    }

    pub fn mouse_down(&self, x: i32, y: i32) {
        self.send(WindowEvent::PointerPressed {
            position: LogicalPosition::new(x as f32, y as f32),
            button: PointerEventButton::Left,
        });
    }

    pub fn mouse_move(&self, x: i32, y: i32) {
        self.send(WindowEvent::PointerMoved {
            position: LogicalPosition::new(x as f32, y as f32),
        });
    }

    pub fn mouse_up(&self, x: i32, y: i32) {
        self.send(WindowEvent::PointerReleased {
            position: LogicalPosition::new(x as f32, y as f32),
            button: PointerEventButton::Left,
        });
    }

    pub fn click(&self, x: i32, y: i32) {
        self.mouse_down(x, y);
        self.mouse_up(x, y);
    }

    /// Press on `from`, move through each point of `path`, release.
    pub fn drag(&self, from: (i32, i32), path: &[(i32, i32)]) {
        self.mouse_down(from.0, from.1);
        let mut last = from;
        for &(x, y) in path {
            self.mouse_move(x, y);
            last = (x, y);
        }
        self.mouse_up(last.0, last.1);
    }

    pub fn scroll(&self, delta_y: f32) {
        self.send(WindowEvent::PointerScrolled {
            position: LogicalPosition::new(0.0, 0.0),
            delta_x: 0.0,
            delta_y,
        });
    }

    pub fn leave(&self) {
        self.send(WindowEvent::PointerExited);
    }

    // === Coordinates ===

    /// Main-axis pointer coordinate that projects onto `value`.
    pub fn coordinate_for_value(&self, value: i32) -> i32 {
        let slider = self.ctrl.slider();
        let slider = slider.borrow();
        let extent = match slider.orientation() {
            Orientation::Horizontal => slider.size().width,
            Orientation::Vertical => slider.size().height,
        };
        let span = slider.maximum() - slider.minimum();
        (value - slider.minimum()) * extent / span
    }

    /// Center of a thumb's rectangle.
    pub fn thumb_center(&self, thumb: slint_range_slider::Thumb) -> (i32, i32) {
        let host = self.ctrl.host();
        let host = host.borrow();
        let center = self.ctrl.slider().borrow().thumb_rect(thumb, &*host).center();
        (center.x, center.y)
    }

    // === Host inspection ===

    pub fn invalidations(&self) -> usize {
        self.ctrl.host().borrow().count(&HostCall::Invalidate)
    }

    pub fn focus_requests(&self) -> usize {
        self.ctrl.host().borrow().count(&HostCall::Focus)
    }

    pub fn clear(&self) {
        self.ctrl.host().borrow_mut().calls.clear();
        self.tracker.clear();
    }
}
