//! The coupled value pair behind the slider.
//!
//! [`ValueModel`] owns `Minimum`, `Maximum`, the two thumb values and the
//! step size, and guards every write against the invariants
//! `Minimum < Maximum`, `Minimum <= left <= right <= Maximum` and
//! `small_change >= 1`.
//!
//! Two validity rules coexist:
//!
//! - Property setters are non-strict: programmatic configuration may place
//!   both thumbs on the same value.
//! - Stepping (and dragging, see [`crate::interaction`]) is strict: a thumb
//!   never moves onto or past the other one. A step that would do so is a
//!   no-op.

use crate::error::{Property, Result, SliderError};
use crate::thumb::Thumb;

/// Widest allowed `maximum - minimum`. Keeps the span and the tick count
/// (`span + 1`) representable as `i32`.
pub const MAX_SPAN: i64 = i32::MAX as i64 - 1;

fn span_fits(minimum: i32, maximum: i32) -> bool {
    i64::from(maximum) - i64::from(minimum) <= MAX_SPAN
}

/// Notification emitted after a successful value mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueEvent {
    /// Any thumb value changed. Always delivered first.
    ValueChanged,
    LeftValueChanged,
    RightValueChanged,
}

/// Which thumb values a mutation actually changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValueChanges {
    left: bool,
    right: bool,
}

impl ValueChanges {
    pub const NONE: ValueChanges = ValueChanges {
        left: false,
        right: false,
    };

    pub(crate) fn of(thumb: Thumb) -> Self {
        match thumb {
            Thumb::Left => Self { left: true, right: false },
            Thumb::Right => Self { left: false, right: true },
        }
    }

    pub fn left(&self) -> bool {
        self.left
    }

    pub fn right(&self) -> bool {
        self.right
    }

    pub fn is_empty(&self) -> bool {
        !self.left && !self.right
    }

    /// Accumulate the changes of a later mutation into this one.
    pub fn merge(&mut self, other: ValueChanges) {
        self.left |= other.left;
        self.right |= other.right;
    }

    /// Notifications in delivery order: `ValueChanged` first, then the
    /// per-thumb events.
    pub fn events(&self) -> impl Iterator<Item = ValueEvent> {
        let any = (!self.is_empty()).then_some(ValueEvent::ValueChanged);
        let left = self.left.then_some(ValueEvent::LeftValueChanged);
        let right = self.right.then_some(ValueEvent::RightValueChanged);
        any.into_iter().chain(left).chain(right)
    }
}

/// Direction of a single `small_change` step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Increment,
    Decrement,
}

/// Integer range `[minimum, maximum]` with two ordered thumb values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueModel {
    minimum: i32,
    maximum: i32,
    left: i32,
    right: i32,
    small_change: i32,
}

impl Default for ValueModel {
    fn default() -> Self {
        Self {
            minimum: 0,
            maximum: 10,
            left: 0,
            right: 7,
            small_change: 1,
        }
    }
}

impl ValueModel {
    /// Build a model, validating every field.
    ///
    /// The first offending property is reported.
    pub fn new(minimum: i32, maximum: i32, left: i32, right: i32, small_change: i32) -> Result<Self> {
        if maximum <= minimum {
            return Err(SliderError::invalid(
                Property::Maximum,
                maximum,
                "'Maximum' should be greater than 'Minimum'.",
            ));
        }
        if !span_fits(minimum, maximum) {
            return Err(SliderError::invalid(
                Property::Maximum,
                maximum,
                "'Maximum' - 'Minimum' should not exceed 2147483646.",
            ));
        }
        let mut model = Self {
            minimum,
            maximum,
            left: minimum,
            right: maximum,
            small_change: 1,
        };
        model.set_small_change(small_change)?;
        model.set_right(right)?;
        model.set_left(left)?;
        Ok(model)
    }

    pub fn minimum(&self) -> i32 {
        self.minimum
    }

    pub fn maximum(&self) -> i32 {
        self.maximum
    }

    pub fn left(&self) -> i32 {
        self.left
    }

    pub fn right(&self) -> i32 {
        self.right
    }

    pub fn small_change(&self) -> i32 {
        self.small_change
    }

    pub fn value(&self, thumb: Thumb) -> i32 {
        match thumb {
            Thumb::Left => self.left,
            Thumb::Right => self.right,
        }
    }

    /// `maximum - minimum`; always in `1..=MAX_SPAN` for a valid model.
    pub fn span(&self) -> i32 {
        self.maximum - self.minimum
    }

    /// Number of ticks along the track: one per integer in `[minimum, maximum]`.
    pub fn tick_count(&self) -> i32 {
        self.span() + 1
    }

    // === Guarded setters ===

    /// Set `Minimum`. Thumb values below the new minimum are raised to it.
    pub fn set_minimum(&mut self, value: i32) -> Result<ValueChanges> {
        if value >= self.maximum {
            return Err(SliderError::invalid(
                Property::Minimum,
                value,
                "'Minimum' should be less than 'Maximum'.",
            ));
        }
        if !span_fits(value, self.maximum) {
            return Err(SliderError::invalid(
                Property::Minimum,
                value,
                "'Maximum' - 'Minimum' should not exceed 2147483646.",
            ));
        }
        self.minimum = value;
        let mut changes = ValueChanges::NONE;
        if self.left < value {
            self.left = value;
            changes.merge(ValueChanges::of(Thumb::Left));
        }
        if self.right < value {
            self.right = value;
            changes.merge(ValueChanges::of(Thumb::Right));
        }
        self.check_invariants()?;
        Ok(changes)
    }

    /// Set `Maximum`. Thumb values above the new maximum are lowered to it.
    pub fn set_maximum(&mut self, value: i32) -> Result<ValueChanges> {
        if value <= self.minimum {
            return Err(SliderError::invalid(
                Property::Maximum,
                value,
                "'Maximum' should be greater than 'Minimum'.",
            ));
        }
        if !span_fits(self.minimum, value) {
            return Err(SliderError::invalid(
                Property::Maximum,
                value,
                "'Maximum' - 'Minimum' should not exceed 2147483646.",
            ));
        }
        self.maximum = value;
        let mut changes = ValueChanges::NONE;
        if self.right > value {
            self.right = value;
            changes.merge(ValueChanges::of(Thumb::Right));
        }
        if self.left > value {
            self.left = value;
            changes.merge(ValueChanges::of(Thumb::Left));
        }
        self.check_invariants()?;
        Ok(changes)
    }

    pub fn set_left(&mut self, value: i32) -> Result<ValueChanges> {
        if value < self.minimum || value > self.maximum {
            return Err(SliderError::invalid(
                Property::ValueLeft,
                value,
                "'ValueLeft' should be between 'Minimum' and 'Maximum'.",
            ));
        }
        if value > self.right {
            return Err(SliderError::invalid(
                Property::ValueLeft,
                value,
                "'ValueLeft' should be less than or equal to 'ValueRight'.",
            ));
        }
        let changed = self.left != value;
        self.left = value;
        self.check_invariants()?;
        Ok(if changed { ValueChanges::of(Thumb::Left) } else { ValueChanges::NONE })
    }

    pub fn set_right(&mut self, value: i32) -> Result<ValueChanges> {
        if value < self.minimum || value > self.maximum {
            return Err(SliderError::invalid(
                Property::ValueRight,
                value,
                "'ValueRight' should be between 'Minimum' and 'Maximum'.",
            ));
        }
        if value < self.left {
            return Err(SliderError::invalid(
                Property::ValueRight,
                value,
                "'ValueRight' should be greater than or equal to 'ValueLeft'.",
            ));
        }
        let changed = self.right != value;
        self.right = value;
        self.check_invariants()?;
        Ok(if changed { ValueChanges::of(Thumb::Right) } else { ValueChanges::NONE })
    }

    pub fn set_value(&mut self, thumb: Thumb, value: i32) -> Result<ValueChanges> {
        match thumb {
            Thumb::Left => self.set_left(value),
            Thumb::Right => self.set_right(value),
        }
    }

    pub fn set_small_change(&mut self, value: i32) -> Result<()> {
        if value <= 0 {
            return Err(SliderError::invalid(
                Property::SmallChange,
                value,
                "'SmallChange' should be greater than 0.",
            ));
        }
        self.small_change = value;
        Ok(())
    }

    // === Interactive (strict) rules ===

    /// `minimum <= value <= maximum` and strictly below the right thumb.
    pub fn is_valid_left(&self, value: i32) -> bool {
        value >= self.minimum && value <= self.maximum && value < self.right
    }

    /// `minimum <= value <= maximum` and strictly above the left thumb.
    pub fn is_valid_right(&self, value: i32) -> bool {
        value >= self.minimum && value <= self.maximum && value > self.left
    }

    pub fn is_valid(&self, thumb: Thumb, value: i32) -> bool {
        match thumb {
            Thumb::Left => self.is_valid_left(value),
            Thumb::Right => self.is_valid_right(value),
        }
    }

    /// Move `thumb` to `value` if the strict rule allows it; otherwise do
    /// nothing.
    pub fn try_move(&mut self, thumb: Thumb, value: i32) -> ValueChanges {
        if !self.is_valid(thumb, value) {
            log::trace!("dropped {thumb:?} -> {value}: would cross or leave range");
            return ValueChanges::NONE;
        }
        match self.set_value(thumb, value) {
            Ok(changes) => changes,
            Err(err) => {
                // is_valid implies the non-strict setter rules hold.
                log::error!("strict move of {thumb:?} to {value} rejected: {err}");
                ValueChanges::NONE
            }
        }
    }

    /// Step `thumb` by `small_change`, saturating at the range ends.
    ///
    /// A step that would put the thumbs on the same value (or past each
    /// other) is dropped, not shortened.
    pub fn step(&mut self, thumb: Thumb, direction: StepDirection) -> ValueChanges {
        let current = self.value(thumb);
        let target = match direction {
            StepDirection::Increment => current.saturating_add(self.small_change).min(self.maximum),
            StepDirection::Decrement => current.saturating_sub(self.small_change).max(self.minimum),
        };
        if target == current {
            log::trace!("{thumb:?} already at the end of the range");
            return ValueChanges::NONE;
        }
        self.try_move(thumb, target)
    }

    pub fn increment_left(&mut self) -> ValueChanges {
        self.step(Thumb::Left, StepDirection::Increment)
    }

    pub fn decrement_left(&mut self) -> ValueChanges {
        self.step(Thumb::Left, StepDirection::Decrement)
    }

    pub fn increment_right(&mut self) -> ValueChanges {
        self.step(Thumb::Right, StepDirection::Increment)
    }

    pub fn decrement_right(&mut self) -> ValueChanges {
        self.step(Thumb::Right, StepDirection::Decrement)
    }

    /// Verify `minimum < maximum`, `minimum <= left <= right <= maximum` and
    /// `small_change >= 1`.
    pub fn check_invariants(&self) -> Result<()> {
        if self.minimum >= self.maximum {
            return Err(SliderError::InvariantViolation(format!(
                "minimum {} is not below maximum {}",
                self.minimum, self.maximum
            )));
        }
        if !(self.minimum <= self.left && self.left <= self.right && self.right <= self.maximum) {
            return Err(SliderError::InvariantViolation(format!(
                "values out of order: {} <= {} <= {} <= {}",
                self.minimum, self.left, self.right, self.maximum
            )));
        }
        if self.small_change < 1 {
            return Err(SliderError::InvariantViolation(format!(
                "small change {} is below 1",
                self.small_change
            )));
        }
        Ok(())
    }
}
