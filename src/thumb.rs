use crate::geometry::Size;

/// One of the two slider handles.
///
/// Named by value order, not screen position: at equal values `Left` is
/// considered to come before `Right`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Thumb {
    Left,
    Right,
}

/// Visual state of a thumb, as understood by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThumbState {
    #[default]
    Normal,
    Hot,
    Pressed,
}

/// Which way the pointed end of a thumb glyph faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThumbDirection {
    #[default]
    Bottom,
    Right,
    Top,
    Left,
}

/// Measured glyph sizes of both thumbs.
///
/// The geometry treats these as opaque: they come from the renderer through
/// [`ThumbMetrics`](crate::host::ThumbMetrics).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThumbSizes {
    pub left: Size,
    pub right: Size,
}

impl ThumbSizes {
    pub fn new(left: Size, right: Size) -> Self {
        Self { left, right }
    }

    /// Both thumbs share one size.
    pub fn uniform(size: Size) -> Self {
        Self::new(size, size)
    }

    pub fn get(&self, thumb: Thumb) -> Size {
        match thumb {
            Thumb::Left => self.left,
            Thumb::Right => self.right,
        }
    }
}
