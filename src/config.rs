//! Widget configuration.
//!
//! [`SliderConfig`] collects everything needed to build a
//! [`RangeSlider`](crate::RangeSlider); [`VisualConfig`] is the appearance
//! part of it and stays owned by the widget afterwards.

use slint::Color;

use crate::error::Result;
use crate::geometry::{Bounds, Orientation};
use crate::layout::{default_thumb_direction, BorderStyle, TickEdgeStyle, TickStyle};
use crate::thumb::{Thumb, ThumbDirection};
use crate::value::ValueModel;

/// Appearance settings.
///
/// Thumb directions are derived from orientation and tick style whenever
/// either changes; [`set_thumb_direction`](Self::set_thumb_direction)
/// overrides them until the next such change.
///
/// Recolor slots default to fully transparent, which leaves the renderer's
/// theme colors visible.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualConfig {
    orientation: Orientation,
    tick_style: TickStyle,
    left_thumb_direction: ThumbDirection,
    right_thumb_direction: ThumbDirection,
    pub tick_edge_style: TickEdgeStyle,
    pub border_style: BorderStyle,
    pub border_color: Color,
    pub left_thumb_color: Color,
    pub right_thumb_color: Color,
}

impl Default for VisualConfig {
    fn default() -> Self {
        let orientation = Orientation::default();
        let tick_style = TickStyle::default();
        let direction = default_thumb_direction(orientation, tick_style);
        Self {
            orientation,
            tick_style,
            left_thumb_direction: direction,
            right_thumb_direction: direction,
            tick_edge_style: TickEdgeStyle::default(),
            border_style: BorderStyle::default(),
            border_color: Color::default(),
            left_thumb_color: Color::default(),
            right_thumb_color: Color::default(),
        }
    }
}

impl VisualConfig {
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn tick_style(&self) -> TickStyle {
        self.tick_style
    }

    /// Set the orientation and re-derive both thumb directions.
    ///
    /// This only changes appearance; resizing the widget is up to
    /// [`RangeSlider::set_orientation`](crate::RangeSlider::set_orientation).
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
        self.derive_thumb_directions();
    }

    /// Set the tick style and re-derive both thumb directions.
    pub fn set_tick_style(&mut self, tick_style: TickStyle) {
        self.tick_style = tick_style;
        self.derive_thumb_directions();
    }

    pub fn thumb_direction(&self, thumb: Thumb) -> ThumbDirection {
        match thumb {
            Thumb::Left => self.left_thumb_direction,
            Thumb::Right => self.right_thumb_direction,
        }
    }

    pub fn set_thumb_direction(&mut self, thumb: Thumb, direction: ThumbDirection) {
        match thumb {
            Thumb::Left => self.left_thumb_direction = direction,
            Thumb::Right => self.right_thumb_direction = direction,
        }
    }

    pub fn thumb_color(&self, thumb: Thumb) -> Color {
        match thumb {
            Thumb::Left => self.left_thumb_color,
            Thumb::Right => self.right_thumb_color,
        }
    }

    fn derive_thumb_directions(&mut self) {
        let direction = default_thumb_direction(self.orientation, self.tick_style);
        self.left_thumb_direction = direction;
        self.right_thumb_direction = direction;
    }
}

/// Full construction-time configuration of a slider.
///
/// Start from `SliderConfig::default()` and override fields:
///
/// ```
/// use slint_range_slider::{RangeSlider, SliderConfig};
///
/// let mut config = SliderConfig::default();
/// config.maximum = 100;
/// config.value_right = 60;
/// let slider = RangeSlider::with_config(config).unwrap();
/// assert_eq!(slider.value_right(), 60);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct SliderConfig {
    pub minimum: i32,
    pub maximum: i32,
    pub value_left: i32,
    pub value_right: i32,
    pub small_change: i32,
    /// Location in the parent and size (default 145 × 45).
    pub bounds: Bounds,
    /// Keep the cross-axis dimension fixed on resize.
    pub auto_size: bool,
    pub visual: VisualConfig,
}

impl Default for SliderConfig {
    fn default() -> Self {
        let values = ValueModel::default();
        Self {
            minimum: values.minimum(),
            maximum: values.maximum(),
            value_left: values.left(),
            value_right: values.right(),
            small_change: values.small_change(),
            bounds: Bounds::default(),
            auto_size: false,
            visual: VisualConfig::default(),
        }
    }
}

impl SliderConfig {
    /// Validate the numeric part of the configuration.
    pub fn values(&self) -> Result<ValueModel> {
        ValueModel::new(
            self.minimum,
            self.maximum,
            self.value_left,
            self.value_right,
            self.small_change,
        )
    }
}
