//! Pointer and wheel handling.
//!
//! [`InteractionState::handle`] consumes one [`Event`] at a time, updates the
//! per-thumb visual state, the drag/selection bookkeeping and the value
//! model, and returns the [`Effects`] the host has to carry out. It never
//! fails: input that would break a value invariant is dropped.
//!
//! Per thumb:
//!
//! ```text
//! Normal  --pointer enters rect-------------------> Hot
//! Hot     --pointer leaves rect, not selected------> Normal
//! Hot     --primary down on rect-------------------> Pressed (drag starts)
//! Pressed --next move or leave---------------------> Hot or Normal
//! any     --thumb becomes selected-----------------> at least Hot until deselected
//! ```

use crate::geometry::{Frame, Point, SliderGeometry};
use crate::hit_test::closest_thumb;
use crate::thumb::{Thumb, ThumbState};
use crate::value::{StepDirection, ValueChanges, ValueModel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PointerButton {
    #[default]
    Primary,
    Secondary,
    Middle,
    Other,
}

/// Input the slider reacts to. Positions are in widget client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    PointerMove(Point),
    PointerDown { position: Point, button: PointerButton },
    PointerUp,
    PointerLeave,
    /// Wheel rotation; positive scrolls up.
    Wheel(i32),
}

impl Event {
    /// Primary-button press at `position`.
    pub fn press(position: Point) -> Self {
        Event::PointerDown {
            position,
            button: PointerButton::Primary,
        }
    }
}

/// What the host has to do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Effects {
    pub repaint: bool,
    pub focus: bool,
    pub changes: ValueChanges,
}

impl Effects {
    fn repaint(changes: ValueChanges) -> Self {
        Self {
            repaint: true,
            focus: false,
            changes,
        }
    }

}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionState {
    left_visual: ThumbState,
    right_visual: ThumbState,
    dragging: Option<Thumb>,
    selected: Option<Thumb>,
    last_pointer: Option<Point>,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visual(&self, thumb: Thumb) -> ThumbState {
        match thumb {
            Thumb::Left => self.left_visual,
            Thumb::Right => self.right_visual,
        }
    }

    /// The thumb being dragged, if any. At most one thumb drags at a time.
    pub fn dragging(&self) -> Option<Thumb> {
        self.dragging
    }

    pub fn dragging_left(&self) -> bool {
        self.dragging == Some(Thumb::Left)
    }

    pub fn dragging_right(&self) -> bool {
        self.dragging == Some(Thumb::Right)
    }

    /// Sticky focus: routes wheel input and keeps the hover highlight.
    pub fn selected(&self) -> Option<Thumb> {
        self.selected
    }

    pub fn handle(&mut self, event: Event, values: &mut ValueModel, frame: &Frame) -> Effects {
        match event {
            Event::PointerMove(position) => self.pointer_move(position, values, frame),
            Event::PointerDown { position, button } => {
                self.last_pointer = Some(position);
                if button != PointerButton::Primary {
                    log::trace!("ignoring {button:?} press at {position:?}");
                    return Effects::default();
                }
                self.pointer_down(position, values, frame)
            }
            Event::PointerUp => {
                self.dragging = None;
                Effects::repaint(ValueChanges::NONE)
            }
            Event::PointerLeave => self.pointer_leave(values, frame),
            Event::Wheel(delta) => self.wheel(delta, values),
        }
    }

    fn set_visual(&mut self, thumb: Thumb, state: ThumbState) {
        match thumb {
            Thumb::Left => self.left_visual = state,
            Thumb::Right => self.right_visual = state,
        }
    }

    /// Recompute both visuals for a pointer at `location`.
    fn update_visuals(&mut self, geometry: &SliderGeometry, location: Point, new_state: ThumbState) {
        for thumb in [Thumb::Left, Thumb::Right] {
            let state = if geometry.thumb_rect(thumb).contains(location) {
                new_state
            } else if self.selected == Some(thumb) {
                ThumbState::Hot
            } else {
                ThumbState::Normal
            };
            self.set_visual(thumb, state);
        }
    }

    fn select(&mut self, thumb: Thumb) {
        self.selected = Some(thumb);
        if self.visual(thumb) == ThumbState::Normal {
            self.set_visual(thumb, ThumbState::Hot);
        }
    }

    fn pointer_down(&mut self, position: Point, values: &mut ValueModel, frame: &Frame) -> Effects {
        let geometry = SliderGeometry::new(*values, *frame);
        self.dragging = None;
        self.update_visuals(&geometry, position, ThumbState::Pressed);

        self.dragging = if self.left_visual == ThumbState::Pressed {
            Some(Thumb::Left)
        } else if self.right_visual == ThumbState::Pressed {
            Some(Thumb::Right)
        } else {
            None
        };

        let changes = match self.dragging {
            Some(thumb) => {
                self.select(thumb);
                ValueChanges::NONE
            }
            None => {
                // Click on the empty track: nudge the closest thumb toward the pointer.
                let thumb = closest_thumb(&geometry, position);
                let orientation = frame.orientation;
                let near = orientation.near_edge(&geometry.thumb_rect(thumb));
                let direction = if orientation.main(position) < near {
                    StepDirection::Decrement
                } else {
                    StepDirection::Increment
                };
                let changes = values.step(thumb, direction);
                self.select(thumb);
                changes
            }
        };

        Effects {
            repaint: true,
            focus: true,
            changes,
        }
    }

    fn pointer_move(&mut self, position: Point, values: &mut ValueModel, frame: &Frame) -> Effects {
        self.last_pointer = Some(position);
        let geometry = SliderGeometry::new(*values, *frame);
        self.update_visuals(&geometry, position, ThumbState::Hot);

        let changes = match (self.dragging, geometry.value_at(position)) {
            (Some(thumb), Some(value)) => values.try_move(thumb, value),
            _ => ValueChanges::NONE,
        };
        Effects::repaint(changes)
    }

    fn pointer_leave(&mut self, values: &ValueModel, frame: &Frame) -> Effects {
        self.selected = None;
        match self.last_pointer {
            Some(location) => {
                let geometry = SliderGeometry::new(*values, *frame);
                self.update_visuals(&geometry, location, ThumbState::Normal);
            }
            None => {
                self.left_visual = ThumbState::Normal;
                self.right_visual = ThumbState::Normal;
            }
        }
        Effects::repaint(ValueChanges::NONE)
    }

    fn wheel(&mut self, delta: i32, values: &mut ValueModel) -> Effects {
        if delta == 0 {
            return Effects::default();
        }
        let Some(thumb) = self.selected else {
            log::trace!("wheel delta {delta} with no selected thumb");
            return Effects::default();
        };
        let direction = if delta > 0 {
            StepDirection::Increment
        } else {
            StepDirection::Decrement
        };
        Effects::repaint(values.step(thumb, direction))
    }
}
