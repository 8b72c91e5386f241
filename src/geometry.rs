//! Value ↔ pixel mapping.
//!
//! Everything here is a pure function of a [`ValueModel`] snapshot and a
//! [`Frame`] (widget size, orientation and measured thumb sizes). Pixel
//! coordinates are integers relative to the widget's client origin.
//!
//! The track and thumb formulas carry small fixed biases (`+1`/`+5` on the
//! thumb origin, `-2`/`-4` on the usable track length) so that the pointed
//! end of a thumb lands exactly on its tick.

use crate::thumb::{Thumb, ThumbSizes};
use crate::value::ValueModel;

/// Thickness of the track strip in pixels.
pub const TRACK_THICKNESS: i32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Width and height exchanged.
    pub fn transposed(self) -> Self {
        Self::new(self.height, self.width)
    }
}

/// Axis-aligned rectangle. `right()`/`bottom()` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Half-open containment: the right and bottom edges are outside.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Rect {
        Rect::new(self.x + dx, self.y + dy, self.width, self.height)
    }
}

/// Widget position in its parent plus its size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub location: Point,
    pub size: Size,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            location: Point::default(),
            size: Size::new(145, 45),
        }
    }
}

impl Bounds {
    pub fn new(location: Point, size: Size) -> Self {
        Self { location, size }
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.location.x + self.size.width / 2,
            self.location.y + self.size.height / 2,
        )
    }

    /// Resize to `size` keeping the current center point.
    pub fn resized_about_center(&self, size: Size) -> Bounds {
        let mid = self.center();
        Bounds::new(
            Point::new(mid.x - size.width / 2, mid.y - size.height / 2),
            size,
        )
    }

    /// The widget's own coordinate space: origin at zero, same size.
    pub fn client_rect(&self) -> Rect {
        Rect::from_origin_size(Point::default(), self.size)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn toggled(self) -> Orientation {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    /// Coordinate of `p` along the axis the thumbs travel.
    pub fn main(self, p: Point) -> i32 {
        match self {
            Orientation::Horizontal => p.x,
            Orientation::Vertical => p.y,
        }
    }

    /// Extent of `size` along the axis the thumbs travel.
    pub fn main_extent(self, size: Size) -> i32 {
        match self {
            Orientation::Horizontal => size.width,
            Orientation::Vertical => size.height,
        }
    }

    /// Leading edge of `rect` along the main axis.
    pub fn near_edge(self, rect: &Rect) -> i32 {
        match self {
            Orientation::Horizontal => rect.x,
            Orientation::Vertical => rect.y,
        }
    }

    /// Trailing edge of `rect` along the main axis.
    pub fn far_edge(self, rect: &Rect) -> i32 {
        match self {
            Orientation::Horizontal => rect.right(),
            Orientation::Vertical => rect.bottom(),
        }
    }
}

/// Everything besides the values that the geometry depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub size: Size,
    pub orientation: Orientation,
    pub thumbs: ThumbSizes,
}

impl Frame {
    pub fn new(size: Size, orientation: Orientation, thumbs: ThumbSizes) -> Self {
        Self {
            size,
            orientation,
            thumbs,
        }
    }
}

/// Round half to even, matching the reference renderer's pixel snapping.
pub fn round_half_even(v: f64) -> i32 {
    v.round_ties_even() as i32
}

/// Half of a thumb's width, rounded up. Used as the track's side margin.
pub fn thumb_border(thumb_width: i32) -> i32 {
    (thumb_width + 1).div_euclid(2)
}

/// `value / span`, or `value` itself for an empty span.
///
/// A validated [`ValueModel`] always has a positive span; the empty case is
/// kept so the placement formula stays total.
pub fn relative_value(span: i32, value: i32) -> f64 {
    match span {
        0 => value as f64,
        span => value as f64 / span as f64,
    }
}

/// Pixels per value step along `usable` pixels, or 0 for an empty span.
pub fn tick_step(usable: i32, span: i32) -> f64 {
    match span {
        0 => 0.0,
        span => usable as f64 / span as f64,
    }
}

/// The strip the thumbs travel along.
pub fn track_rect(size: Size, orientation: Orientation, border: i32) -> Rect {
    match orientation {
        Orientation::Horizontal => Rect::new(
            border,
            size.height.div_euclid(2) - 3,
            size.width - 2 * border - 1,
            TRACK_THICKNESS,
        ),
        Orientation::Vertical => Rect::new(
            size.width.div_euclid(2),
            8,
            TRACK_THICKNESS,
            size.height - 15,
        ),
    }
}

/// Rectangle of a thumb of size `thumb` sitting on `value`.
pub fn thumb_rect(values: &ValueModel, value: i32, size: Size, orientation: Orientation, thumb: Size) -> Rect {
    let span = values.span();
    let relative = relative_value(span, value);
    let thumb_value = (relative * span as f64 - values.minimum() as f64).abs();
    let track = track_rect(size, orientation, thumb_border(thumb.width));

    match orientation {
        Orientation::Horizontal => {
            let y = (size.height - thumb.height).div_euclid(2);
            let x = round_half_even(tick_step(track.width - 2, span) * thumb_value + 1.0);
            Rect::from_origin_size(Point::new(x, y), thumb)
        }
        Orientation::Vertical => {
            let x = (size.width - thumb.width).div_euclid(2) + 2;
            let y = round_half_even(tick_step(track.height - 4, span) * thumb_value + 5.0);
            Rect::from_origin_size(Point::new(x, y), thumb)
        }
    }
}

/// Project a pointer position onto a value.
///
/// The projection is relative to the full widget extent along the main axis,
/// not the track, so there is a small systematic offset near both ends.
/// Returns `None` for a zero-sized widget, or when the projected value is
/// not representable as `i32` (pointer far outside a very wide range).
pub fn value_at(values: &ValueModel, size: Size, orientation: Orientation, p: Point) -> Option<i32> {
    let extent = orientation.main_extent(size);
    if extent <= 0 {
        return None;
    }
    let fraction = orientation.main(p) as f64 / extent as f64;
    let offset = (fraction * values.span() as f64).round_ties_even();
    let value = values.minimum() as f64 + offset;
    if value < i32::MIN as f64 || value > i32::MAX as f64 {
        return None;
    }
    Some(value as i32)
}

/// Re-orient a thumb rectangle for the double-pointed glyph so its long edge
/// is perpendicular to the track.
pub fn double_pointed_rect(rect: Rect, orientation: Orientation) -> Rect {
    let swap = match orientation {
        Orientation::Horizontal => rect.width > rect.height,
        Orientation::Vertical => rect.height > rect.width,
    };
    if swap {
        Rect::from_origin_size(rect.origin(), rect.size().transposed())
    } else {
        rect
    }
}

/// Geometry of one widget state: a value snapshot placed in a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderGeometry {
    pub values: ValueModel,
    pub frame: Frame,
}

impl SliderGeometry {
    pub fn new(values: ValueModel, frame: Frame) -> Self {
        Self { values, frame }
    }

    pub fn orientation(&self) -> Orientation {
        self.frame.orientation
    }

    /// Track rectangle, using the left thumb's width for the margins.
    pub fn track(&self) -> Rect {
        track_rect(
            self.frame.size,
            self.frame.orientation,
            thumb_border(self.frame.thumbs.left.width),
        )
    }

    pub fn thumb_rect(&self, thumb: Thumb) -> Rect {
        thumb_rect(
            &self.values,
            self.values.value(thumb),
            self.frame.size,
            self.frame.orientation,
            self.frame.thumbs.get(thumb),
        )
    }

    /// Rectangle `thumb` would occupy at `value`.
    pub fn thumb_rect_at(&self, thumb: Thumb, value: i32) -> Rect {
        thumb_rect(
            &self.values,
            value,
            self.frame.size,
            self.frame.orientation,
            self.frame.thumbs.get(thumb),
        )
    }

    pub fn value_at(&self, p: Point) -> Option<i32> {
        value_at(&self.values, self.frame.size, self.frame.orientation, p)
    }
}
