//! High-level controller for embedding the slider in a Slint application.
//!
//! The [`RangeSliderController`] owns the widget state and the host adapter,
//! applies [`Effects`] (focus, change notifications, repaint requests) after
//! every operation, and hands out closures shaped like Slint callbacks.
//!
//! # Example
//!
//! ```ignore
//! use slint_range_slider::RangeSliderController;
//!
//! slint::include_modules!();
//!
//! fn main() {
//!     let window = MainWindow::new().unwrap();
//!     let ctrl = RangeSliderController::new(MyHost::new(window.as_weak()));
//!
//!     // Pointer ingress
//!     window.on_slider_pointer_pressed(ctrl.pointer_pressed_callback());
//!     window.on_slider_pointer_moved(ctrl.pointer_moved_callback());
//!     window.on_slider_pointer_released(ctrl.pointer_released_callback());
//!     window.on_slider_pointer_exited(ctrl.pointer_exited_callback());
//!     window.on_slider_scrolled(ctrl.scrolled_callback());
//!
//!     // Value notifications
//!     ctrl.on_value_changed({
//!         let ctrl = ctrl.clone();
//!         let w = window.as_weak();
//!         move || {
//!             if let Some(w) = w.upgrade() {
//!                 w.set_range_label(format!("{}..{}", ctrl.value_left(), ctrl.value_right()).into());
//!             }
//!         }
//!     });
//!
//!     window.run().unwrap();
//! }
//! ```

use slint::platform::{PointerEventButton, WindowEvent};
use slint::{Color, LogicalPosition};
use std::cell::RefCell;
use std::rc::Rc;

use crate::error::Result;
use crate::geometry::{Orientation, Point, Size};
use crate::host::{self, HostAdapter};
use crate::interaction::{Effects, Event, PointerButton};
use crate::layout::{BorderStyle, PaintPlan, TickEdgeStyle, TickStyle};
use crate::slider::RangeSlider;
use crate::thumb::{Thumb, ThumbDirection};
use crate::value::{ValueChanges, ValueEvent};

impl From<PointerEventButton> for PointerButton {
    fn from(button: PointerEventButton) -> Self {
        match button {
            PointerEventButton::Left => PointerButton::Primary,
            PointerEventButton::Right => PointerButton::Secondary,
            PointerEventButton::Middle => PointerButton::Middle,
            _ => PointerButton::Other,
        }
    }
}

fn to_point(position: LogicalPosition) -> Point {
    Point::new(position.x.floor() as i32, position.y.floor() as i32)
}

fn wheel_delta(delta_y: f32) -> i32 {
    let delta = delta_y.round() as i32;
    if delta == 0 && delta_y != 0.0 {
        delta_y.signum() as i32
    } else {
        delta
    }
}

impl Event {
    /// Translate a Slint window event into a slider event.
    ///
    /// Returns `None` for events the slider does not react to.
    pub fn from_window_event(event: &WindowEvent) -> Option<Event> {
        match event {
            WindowEvent::PointerPressed { position, button, .. } => Some(Event::PointerDown {
                position: to_point(*position),
                button: (*button).into(),
            }),
            WindowEvent::PointerMoved { position, .. } => Some(Event::PointerMove(to_point(*position))),
            WindowEvent::PointerReleased { .. } => Some(Event::PointerUp),
            WindowEvent::PointerExited => Some(Event::PointerLeave),
            WindowEvent::PointerScrolled { delta_y, .. } => Some(Event::Wheel(wheel_delta(*delta_y))),
            _ => None,
        }
    }
}

type Listener = Rc<dyn Fn()>;

#[derive(Default)]
struct Listeners {
    value_changed: Vec<Listener>,
    left_value_changed: Vec<Listener>,
    right_value_changed: Vec<Listener>,
}

impl Listeners {
    fn for_event(&self, event: ValueEvent) -> &[Listener] {
        match event {
            ValueEvent::ValueChanged => &self.value_changed,
            ValueEvent::LeftValueChanged => &self.left_value_changed,
            ValueEvent::RightValueChanged => &self.right_value_changed,
        }
    }
}

/// Controller that manages slider state and provides callback implementations.
///
/// Clone this controller to share it across callbacks. Listeners run after
/// all internal borrows are released, so they may call back into the
/// controller (including setters); such nested mutations apply immediately
/// and notify in call order.
pub struct RangeSliderController<H: HostAdapter> {
    slider: Rc<RefCell<RangeSlider>>,
    host: Rc<RefCell<H>>,
    listeners: Rc<RefCell<Listeners>>,
}

impl<H: HostAdapter> Clone for RangeSliderController<H> {
    fn clone(&self) -> Self {
        Self {
            slider: self.slider.clone(),
            host: self.host.clone(),
            listeners: self.listeners.clone(),
        }
    }
}

impl<H: HostAdapter> RangeSliderController<H> {
    /// Create a controller for a default slider.
    pub fn new(host: H) -> Self {
        Self::with_slider(RangeSlider::new(), host)
    }

    pub fn with_slider(slider: RangeSlider, host: H) -> Self {
        Self {
            slider: Rc::new(RefCell::new(slider)),
            host: Rc::new(RefCell::new(host)),
            listeners: Rc::new(RefCell::new(Listeners::default())),
        }
    }

    /// Get access to the widget state.
    pub fn slider(&self) -> Rc<RefCell<RangeSlider>> {
        self.slider.clone()
    }

    pub fn host(&self) -> Rc<RefCell<H>> {
        self.host.clone()
    }

    // === Listeners ===

    pub fn on_value_changed(&self, f: impl Fn() + 'static) {
        self.listeners.borrow_mut().value_changed.push(Rc::new(f));
    }

    pub fn on_left_value_changed(&self, f: impl Fn() + 'static) {
        self.listeners.borrow_mut().left_value_changed.push(Rc::new(f));
    }

    pub fn on_right_value_changed(&self, f: impl Fn() + 'static) {
        self.listeners.borrow_mut().right_value_changed.push(Rc::new(f));
    }

    // === Effects ===

    fn apply(&self, effects: Effects) {
        if effects.focus {
            self.host.borrow_mut().request_focus();
        }
        self.notify(effects.changes);
        if effects.repaint {
            self.host.borrow_mut().invalidate();
        }
    }

    fn notify(&self, changes: ValueChanges) {
        for event in changes.events() {
            // Snapshot so listeners may register more listeners.
            let listeners: Vec<Listener> = self.listeners.borrow().for_event(event).to_vec();
            for listener in listeners {
                listener();
            }
        }
    }

    fn commit(&self, changes: ValueChanges) {
        self.apply(Effects {
            repaint: true,
            focus: false,
            changes,
        });
    }

    fn update(&self, f: impl FnOnce(&mut RangeSlider)) {
        f(&mut *self.slider.borrow_mut());
        self.host.borrow_mut().invalidate();
    }

    // === Values ===

    pub fn minimum(&self) -> i32 {
        self.slider.borrow().minimum()
    }

    pub fn maximum(&self) -> i32 {
        self.slider.borrow().maximum()
    }

    pub fn value_left(&self) -> i32 {
        self.slider.borrow().value_left()
    }

    pub fn value_right(&self) -> i32 {
        self.slider.borrow().value_right()
    }

    pub fn small_change(&self) -> i32 {
        self.slider.borrow().small_change()
    }

    pub fn set_minimum(&self, value: i32) -> Result<()> {
        let changes = self.slider.borrow_mut().set_minimum(value)?;
        self.commit(changes);
        Ok(())
    }

    pub fn set_maximum(&self, value: i32) -> Result<()> {
        let changes = self.slider.borrow_mut().set_maximum(value)?;
        self.commit(changes);
        Ok(())
    }

    pub fn set_value_left(&self, value: i32) -> Result<()> {
        let changes = self.slider.borrow_mut().set_value_left(value)?;
        self.commit(changes);
        Ok(())
    }

    pub fn set_value_right(&self, value: i32) -> Result<()> {
        let changes = self.slider.borrow_mut().set_value_right(value)?;
        self.commit(changes);
        Ok(())
    }

    pub fn set_small_change(&self, value: i32) -> Result<()> {
        self.slider.borrow_mut().set_small_change(value)
    }

    pub fn increment_left(&self) {
        let changes = self.slider.borrow_mut().increment_left();
        self.commit(changes);
    }

    pub fn increment_right(&self) {
        let changes = self.slider.borrow_mut().increment_right();
        self.commit(changes);
    }

    pub fn decrement_left(&self) {
        let changes = self.slider.borrow_mut().decrement_left();
        self.commit(changes);
    }

    pub fn decrement_right(&self) {
        let changes = self.slider.borrow_mut().decrement_right();
        self.commit(changes);
    }

    // === Appearance ===

    pub fn orientation(&self) -> Orientation {
        self.slider.borrow().orientation()
    }

    pub fn set_orientation(&self, orientation: Orientation) {
        self.update(|s| {
            s.set_orientation(orientation);
        });
    }

    pub fn set_tick_style(&self, tick_style: TickStyle) {
        self.update(|s| s.set_tick_style(tick_style));
    }

    pub fn set_tick_edge_style(&self, style: TickEdgeStyle) {
        self.update(|s| s.set_tick_edge_style(style));
    }

    pub fn set_border_style(&self, style: BorderStyle) {
        self.update(|s| s.set_border_style(style));
    }

    pub fn set_border_color(&self, color: Color) {
        self.update(|s| s.set_border_color(color));
    }

    pub fn set_thumb_color(&self, thumb: Thumb, color: Color) {
        self.update(|s| s.set_thumb_color(thumb, color));
    }

    pub fn set_thumb_direction(&self, thumb: Thumb, direction: ThumbDirection) {
        self.update(|s| s.set_thumb_direction(thumb, direction));
    }

    pub fn set_size(&self, size: Size) {
        self.update(|s| s.set_size(size));
    }

    pub fn set_auto_size(&self, auto_size: bool) {
        self.slider.borrow_mut().set_auto_size(auto_size);
    }

    // === Event ingress ===

    /// Feed one event through the interaction state machine and apply the
    /// resulting effects.
    pub fn handle_event(&self, event: Event) {
        let effects = {
            let host = self.host.borrow();
            self.slider.borrow_mut().handle_event(event, &*host)
        };
        self.apply(effects);
    }

    /// Handle a Slint window event. Returns `false` if the slider ignores it.
    pub fn handle_window_event(&self, event: &WindowEvent) -> bool {
        match Event::from_window_event(event) {
            Some(event) => {
                self.handle_event(event);
                true
            }
            None => false,
        }
    }

    // === Painting ===

    pub fn paint_plan(&self) -> PaintPlan {
        let host = self.host.borrow();
        self.slider.borrow().plan(&*host)
    }

    /// Paint with a context acquired from (and released to) the host.
    pub fn paint(&self) {
        let plan = self.paint_plan();
        host::paint(&plan, &mut *self.host.borrow_mut());
    }

    /// Paint on a context the caller already holds.
    pub fn paint_with(&self, ctx: &mut H::Context) {
        let plan = self.paint_plan();
        host::render(&plan, &mut *self.host.borrow_mut(), ctx);
    }
}

impl<H: HostAdapter + 'static> RangeSliderController<H> {
    // === Callback factories ===

    /// Returns a callback for a pointer press with the primary button,
    /// taking logical `(x, y)` relative to the slider.
    pub fn pointer_pressed_callback(&self) -> impl Fn(f32, f32) {
        let ctrl = self.clone();
        move |x, y| ctrl.handle_event(Event::press(to_point(LogicalPosition::new(x, y))))
    }

    pub fn pointer_moved_callback(&self) -> impl Fn(f32, f32) {
        let ctrl = self.clone();
        move |x, y| ctrl.handle_event(Event::PointerMove(to_point(LogicalPosition::new(x, y))))
    }

    pub fn pointer_released_callback(&self) -> impl Fn() {
        let ctrl = self.clone();
        move || ctrl.handle_event(Event::PointerUp)
    }

    pub fn pointer_exited_callback(&self) -> impl Fn() {
        let ctrl = self.clone();
        move || ctrl.handle_event(Event::PointerLeave)
    }

    /// Returns a callback for vertical scroll deltas.
    pub fn scrolled_callback(&self) -> impl Fn(f32) {
        let ctrl = self.clone();
        move |delta_y| ctrl.handle_event(Event::Wheel(wheel_delta(delta_y)))
    }
}
