//! The range slider widget state.
//!
//! [`RangeSlider`] ties the value model, appearance, interaction state and
//! bounds together. It is toolkit independent: measurements come in through
//! [`ThumbMetrics`], and every mutating call reports what changed so the
//! caller (usually [`RangeSliderController`](crate::RangeSliderController))
//! can repaint and notify listeners.

use slint::Color;

use crate::config::{SliderConfig, VisualConfig};
use crate::error::Result;
use crate::geometry::{Bounds, Frame, Orientation, Point, Rect, Size, SliderGeometry};
use crate::hit_test::thumb_at;
use crate::host::ThumbMetrics;
use crate::interaction::{Effects, Event, InteractionState};
use crate::layout::{self, BorderStyle, PaintPlan, TickEdgeStyle, TickStyle};
use crate::thumb::{Thumb, ThumbDirection, ThumbSizes, ThumbState};
use crate::value::{ValueChanges, ValueModel};

#[derive(Debug, Clone, PartialEq)]
pub struct RangeSlider {
    values: ValueModel,
    visual: VisualConfig,
    interaction: InteractionState,
    bounds: Bounds,
    auto_size: bool,
}

impl Default for RangeSlider {
    fn default() -> Self {
        Self::new()
    }
}

impl RangeSlider {
    /// Slider with the default configuration: `[0, 10]`, thumbs at 0 and 7,
    /// horizontal, ticks below the track, 145 × 45.
    pub fn new() -> Self {
        let config = SliderConfig::default();
        Self {
            values: ValueModel::default(),
            visual: config.visual,
            interaction: InteractionState::new(),
            bounds: config.bounds,
            auto_size: config.auto_size,
        }
    }

    pub fn with_config(config: SliderConfig) -> Result<Self> {
        let values = config.values()?;
        Ok(Self {
            values,
            visual: config.visual,
            interaction: InteractionState::new(),
            bounds: config.bounds,
            auto_size: config.auto_size,
        })
    }

    // === Values ===

    pub fn values(&self) -> &ValueModel {
        &self.values
    }

    pub fn minimum(&self) -> i32 {
        self.values.minimum()
    }

    pub fn maximum(&self) -> i32 {
        self.values.maximum()
    }

    pub fn value_left(&self) -> i32 {
        self.values.left()
    }

    pub fn value_right(&self) -> i32 {
        self.values.right()
    }

    pub fn small_change(&self) -> i32 {
        self.values.small_change()
    }

    pub fn set_minimum(&mut self, value: i32) -> Result<ValueChanges> {
        self.values.set_minimum(value)
    }

    pub fn set_maximum(&mut self, value: i32) -> Result<ValueChanges> {
        self.values.set_maximum(value)
    }

    pub fn set_value_left(&mut self, value: i32) -> Result<ValueChanges> {
        self.values.set_left(value)
    }

    pub fn set_value_right(&mut self, value: i32) -> Result<ValueChanges> {
        self.values.set_right(value)
    }

    pub fn set_small_change(&mut self, value: i32) -> Result<()> {
        self.values.set_small_change(value)
    }

    pub fn increment_left(&mut self) -> ValueChanges {
        self.values.increment_left()
    }

    pub fn increment_right(&mut self) -> ValueChanges {
        self.values.increment_right()
    }

    pub fn decrement_left(&mut self) -> ValueChanges {
        self.values.decrement_left()
    }

    pub fn decrement_right(&mut self) -> ValueChanges {
        self.values.decrement_right()
    }

    // === Appearance ===

    pub fn visual(&self) -> &VisualConfig {
        &self.visual
    }

    pub fn orientation(&self) -> Orientation {
        self.visual.orientation()
    }

    /// Switch orientation, swapping width and height about the widget's
    /// center. Returns `false` if the orientation was already `orientation`.
    pub fn set_orientation(&mut self, orientation: Orientation) -> bool {
        if self.visual.orientation() == orientation {
            return false;
        }
        self.bounds = self.bounds.resized_about_center(self.bounds.size.transposed());
        self.visual.set_orientation(orientation);
        log::debug!(
            "orientation -> {orientation:?}, bounds now {:?}",
            self.bounds
        );
        true
    }

    pub fn toggle_orientation(&mut self) {
        self.set_orientation(self.orientation().toggled());
    }

    pub fn tick_style(&self) -> TickStyle {
        self.visual.tick_style()
    }

    pub fn set_tick_style(&mut self, tick_style: TickStyle) {
        self.visual.set_tick_style(tick_style);
    }

    pub fn tick_edge_style(&self) -> TickEdgeStyle {
        self.visual.tick_edge_style
    }

    pub fn set_tick_edge_style(&mut self, style: TickEdgeStyle) {
        self.visual.tick_edge_style = style;
    }

    pub fn border_style(&self) -> BorderStyle {
        self.visual.border_style
    }

    pub fn set_border_style(&mut self, style: BorderStyle) {
        self.visual.border_style = style;
    }

    pub fn border_color(&self) -> Color {
        self.visual.border_color
    }

    pub fn set_border_color(&mut self, color: Color) {
        self.visual.border_color = color;
    }

    pub fn thumb_color(&self, thumb: Thumb) -> Color {
        self.visual.thumb_color(thumb)
    }

    pub fn set_thumb_color(&mut self, thumb: Thumb, color: Color) {
        match thumb {
            Thumb::Left => self.visual.left_thumb_color = color,
            Thumb::Right => self.visual.right_thumb_color = color,
        }
    }

    pub fn thumb_direction(&self, thumb: Thumb) -> ThumbDirection {
        self.visual.thumb_direction(thumb)
    }

    /// Override the derived direction of one thumb.
    pub fn set_thumb_direction(&mut self, thumb: Thumb, direction: ThumbDirection) {
        self.visual.set_thumb_direction(thumb, direction);
    }

    // === Bounds ===

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn size(&self) -> Size {
        self.bounds.size
    }

    pub fn location(&self) -> Point {
        self.bounds.location
    }

    pub fn set_location(&mut self, location: Point) {
        self.bounds.location = location;
    }

    /// Resize the widget. With auto-size on, the cross-axis dimension is
    /// kept and only the main axis follows `size`.
    pub fn set_size(&mut self, size: Size) {
        let current = self.bounds.size;
        self.bounds.size = match (self.auto_size, self.orientation()) {
            (false, _) => size,
            (true, Orientation::Horizontal) => Size::new(size.width, current.height),
            (true, Orientation::Vertical) => Size::new(current.width, size.height),
        };
    }

    pub fn auto_size(&self) -> bool {
        self.auto_size
    }

    pub fn set_auto_size(&mut self, auto_size: bool) {
        self.auto_size = auto_size;
    }

    // === Interaction ===

    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    pub fn selected_thumb(&self) -> Option<Thumb> {
        self.interaction.selected()
    }

    pub fn thumb_state(&self, thumb: Thumb) -> ThumbState {
        self.interaction.visual(thumb)
    }

    /// Feed one input event through the interaction state machine.
    pub fn handle_event<M: ThumbMetrics + ?Sized>(&mut self, event: Event, metrics: &M) -> Effects {
        let frame = self.frame(metrics);
        self.interaction.handle(event, &mut self.values, &frame)
    }

    // === Geometry and painting ===

    pub fn thumb_sizes<M: ThumbMetrics + ?Sized>(&self, metrics: &M) -> ThumbSizes {
        let measure = |thumb| {
            metrics.measure_thumb_size(self.visual.thumb_direction(thumb), ThumbState::Normal)
        };
        ThumbSizes::new(measure(Thumb::Left), measure(Thumb::Right))
    }

    pub fn frame<M: ThumbMetrics + ?Sized>(&self, metrics: &M) -> Frame {
        Frame::new(self.bounds.size, self.orientation(), self.thumb_sizes(metrics))
    }

    pub fn geometry<M: ThumbMetrics + ?Sized>(&self, metrics: &M) -> SliderGeometry {
        SliderGeometry::new(self.values, self.frame(metrics))
    }

    pub fn thumb_rect<M: ThumbMetrics + ?Sized>(&self, thumb: Thumb, metrics: &M) -> Rect {
        self.geometry(metrics).thumb_rect(thumb)
    }

    /// Whether either thumb is under `point`.
    pub fn is_over_thumb<M: ThumbMetrics + ?Sized>(&self, point: Point, metrics: &M) -> bool {
        thumb_at(&self.geometry(metrics), point).is_some()
    }

    pub fn plan<M: ThumbMetrics + ?Sized>(&self, metrics: &M) -> PaintPlan {
        layout::plan(
            &self.geometry(metrics),
            &self.visual,
            &self.interaction,
            self.bounds.client_rect(),
        )
    }
}
