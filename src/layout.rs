//! Paint planning.
//!
//! [`plan`] turns the current widget state into a [`PaintPlan`]: an ordered
//! list of drawing commands (track, tick strips, thumbs with their recolor
//! fills, border) that a renderer replays through a
//! [`HostAdapter`](crate::host::HostAdapter). Planning never touches a
//! drawing context.

use slint::Color;

use crate::config::VisualConfig;
use crate::geometry::{double_pointed_rect, Orientation, Rect, SliderGeometry};
use crate::interaction::InteractionState;
use crate::thumb::{Thumb, ThumbDirection, ThumbState};

/// Perpendicular distance between the track and a tick strip.
pub const TICK_STRIP_OFFSET: i32 = 15;

/// Which side(s) of the track carry tick marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TickStyle {
    None,
    TopLeft,
    #[default]
    BottomRight,
    Both,
}

/// Edge style for tick strokes. Passed through to the renderer untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TickEdgeStyle {
    Flat,
    #[default]
    Etched,
    Bump,
    Raised,
    Sunken,
    Dotted,
    Dashed,
    Solid,
}

/// Border decoration around the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BorderStyle {
    #[default]
    None,
    Dotted,
    Dashed,
    Solid,
    Inset,
    Outset,
}

/// Thumb direction implied by orientation and tick style: thumbs point at
/// the side carrying ticks, and downward/rightward when there are none.
pub fn default_thumb_direction(orientation: Orientation, tick_style: TickStyle) -> ThumbDirection {
    match (orientation, tick_style) {
        (Orientation::Horizontal, TickStyle::None | TickStyle::BottomRight) => ThumbDirection::Bottom,
        (Orientation::Horizontal, TickStyle::TopLeft | TickStyle::Both) => ThumbDirection::Top,
        (Orientation::Vertical, TickStyle::None | TickStyle::BottomRight) => ThumbDirection::Right,
        (Orientation::Vertical, TickStyle::TopLeft | TickStyle::Both) => ThumbDirection::Left,
    }
}

/// Tick strip rectangles for `track`, in paint order.
///
/// Each strip is the track shifted perpendicular to the main axis by
/// [`TICK_STRIP_OFFSET`]; `Both` paints the positive side first.
pub fn tick_strips(track: Rect, orientation: Orientation, tick_style: TickStyle) -> Vec<Rect> {
    let shift = |distance: i32| match orientation {
        Orientation::Horizontal => track.offset(0, distance),
        Orientation::Vertical => track.offset(distance, 0),
    };
    match tick_style {
        TickStyle::None => Vec::new(),
        TickStyle::TopLeft => vec![shift(-TICK_STRIP_OFFSET)],
        TickStyle::BottomRight => vec![shift(TICK_STRIP_OFFSET)],
        TickStyle::Both => {
            let positive = shift(TICK_STRIP_OFFSET);
            let negative = match orientation {
                Orientation::Horizontal => positive.offset(0, -2 * TICK_STRIP_OFFSET),
                Orientation::Vertical => positive.offset(-2 * TICK_STRIP_OFFSET, 0),
            };
            vec![positive, negative]
        }
    }
}

/// One drawing step of a paint plan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaintCommand {
    Track(Rect),
    Ticks {
        rect: Rect,
        count: i32,
        edge_style: TickEdgeStyle,
        axis: Orientation,
    },
    DirectedThumb {
        thumb: Thumb,
        rect: Rect,
        state: ThumbState,
        direction: ThumbDirection,
    },
    DoublePointedThumb {
        thumb: Thumb,
        rect: Rect,
        state: ThumbState,
        axis: Orientation,
    },
    /// Recolor overlay; a transparent color leaves the pixels untouched.
    FillRect { rect: Rect, color: Color },
    Border {
        rect: Rect,
        color: Color,
        style: BorderStyle,
    },
}

/// Ordered drawing commands for one paint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaintPlan {
    commands: Vec<PaintCommand>,
}

impl PaintPlan {
    pub fn commands(&self) -> &[PaintCommand] {
        &self.commands
    }

    pub fn track(&self) -> Option<Rect> {
        self.commands.iter().find_map(|c| match c {
            PaintCommand::Track(rect) => Some(*rect),
            _ => None,
        })
    }

    pub fn tick_strips(&self) -> Vec<Rect> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                PaintCommand::Ticks { rect, .. } => Some(*rect),
                _ => None,
            })
            .collect()
    }

    /// The drawn rectangle of `thumb` (re-oriented for double-pointed glyphs).
    pub fn thumb_rect(&self, thumb: Thumb) -> Option<Rect> {
        self.commands.iter().find_map(|c| match *c {
            PaintCommand::DirectedThumb { thumb: t, rect, .. }
            | PaintCommand::DoublePointedThumb { thumb: t, rect, .. }
                if t == thumb =>
            {
                Some(rect)
            }
            _ => None,
        })
    }

    pub fn border(&self) -> Option<(Rect, Color, BorderStyle)> {
        self.commands.iter().find_map(|c| match *c {
            PaintCommand::Border { rect, color, style } => Some((rect, color, style)),
            _ => None,
        })
    }
}

/// Plan one paint of the widget.
///
/// `client` is the widget's client rectangle, used for the border.
pub fn plan(
    geometry: &SliderGeometry,
    visual: &VisualConfig,
    interaction: &InteractionState,
    client: Rect,
) -> PaintPlan {
    let orientation = geometry.orientation();
    let track = geometry.track();
    let mut commands = vec![PaintCommand::Track(track)];

    let count = geometry.values.tick_count();
    commands.extend(
        tick_strips(track, orientation, visual.tick_style())
            .into_iter()
            .map(|rect| PaintCommand::Ticks {
                rect,
                count,
                edge_style: visual.tick_edge_style,
                axis: orientation,
            }),
    );

    for thumb in [Thumb::Left, Thumb::Right] {
        let rect = geometry.thumb_rect(thumb);
        let state = interaction.visual(thumb);
        let painted = if visual.tick_style() == TickStyle::Both {
            let rect = double_pointed_rect(rect, orientation);
            commands.push(PaintCommand::DoublePointedThumb {
                thumb,
                rect,
                state,
                axis: orientation,
            });
            rect
        } else {
            commands.push(PaintCommand::DirectedThumb {
                thumb,
                rect,
                state,
                direction: visual.thumb_direction(thumb),
            });
            rect
        };
        commands.push(PaintCommand::FillRect {
            rect: painted,
            color: visual.thumb_color(thumb),
        });
    }

    commands.push(PaintCommand::Border {
        rect: client,
        color: visual.border_color,
        style: visual.border_style,
    });

    PaintPlan { commands }
}
