//! Interface to the surrounding UI toolkit.
//!
//! The core never draws or measures on its own. It asks a [`ThumbMetrics`]
//! implementation for thumb glyph sizes and replays a
//! [`PaintPlan`](crate::layout::PaintPlan) through a [`HostAdapter`].
//!
//! Drawing contexts are borrowed for the duration of a paint only. When the
//! caller does not supply one, [`DrawingScope`] acquires it from the host and
//! releases it on every exit path, including unwinding.

use slint::Color;

use crate::geometry::{Orientation, Rect, Size};
use crate::layout::{BorderStyle, PaintCommand, PaintPlan, TickEdgeStyle};
use crate::thumb::{ThumbDirection, ThumbState};

/// Renderer-dependent thumb glyph sizes.
pub trait ThumbMetrics {
    /// Intrinsic size of a thumb pointing in `direction`.
    fn measure_thumb_size(&self, direction: ThumbDirection, state: ThumbState) -> Size;
}

/// Operations the toolkit provides to the widget.
pub trait HostAdapter: ThumbMetrics {
    /// Toolkit drawing context (graphics handle, canvas, command buffer...).
    type Context;

    /// Request a repaint.
    fn invalidate(&mut self);
    fn request_focus(&mut self);

    fn acquire_drawing_context(&mut self) -> Self::Context;
    fn release_drawing_context(&mut self, ctx: Self::Context);

    fn draw_track(&mut self, ctx: &mut Self::Context, rect: Rect);
    fn draw_ticks(
        &mut self,
        ctx: &mut Self::Context,
        rect: Rect,
        count: i32,
        edge_style: TickEdgeStyle,
        axis: Orientation,
    );
    fn draw_directed_thumb(
        &mut self,
        ctx: &mut Self::Context,
        rect: Rect,
        state: ThumbState,
        direction: ThumbDirection,
    );
    fn draw_double_pointed_thumb(
        &mut self,
        ctx: &mut Self::Context,
        rect: Rect,
        state: ThumbState,
        axis: Orientation,
    );
    fn draw_border(&mut self, ctx: &mut Self::Context, rect: Rect, color: Color, style: BorderStyle);
    fn fill_rect(&mut self, ctx: &mut Self::Context, rect: Rect, color: Color);
}

/// A drawing context acquired from the host, released on drop.
pub struct DrawingScope<'a, H: HostAdapter> {
    host: &'a mut H,
    ctx: Option<H::Context>,
}

impl<'a, H: HostAdapter> DrawingScope<'a, H> {
    pub fn acquire(host: &'a mut H) -> Self {
        let ctx = host.acquire_drawing_context();
        Self {
            host,
            ctx: Some(ctx),
        }
    }

    /// Replay `plan` on the scoped context.
    pub fn render(&mut self, plan: &PaintPlan) {
        if let Some(ctx) = self.ctx.as_mut() {
            render(plan, self.host, ctx);
        }
    }
}

impl<H: HostAdapter> Drop for DrawingScope<'_, H> {
    fn drop(&mut self) {
        if let Some(ctx) = self.ctx.take() {
            self.host.release_drawing_context(ctx);
        }
    }
}

/// Replay `plan` on a borrowed context.
pub fn render<H: HostAdapter>(plan: &PaintPlan, host: &mut H, ctx: &mut H::Context) {
    for command in plan.commands() {
        match *command {
            PaintCommand::Track(rect) => host.draw_track(ctx, rect),
            PaintCommand::Ticks {
                rect,
                count,
                edge_style,
                axis,
            } => host.draw_ticks(ctx, rect, count, edge_style, axis),
            PaintCommand::DirectedThumb {
                rect,
                state,
                direction,
                ..
            } => host.draw_directed_thumb(ctx, rect, state, direction),
            PaintCommand::DoublePointedThumb {
                rect, state, axis, ..
            } => host.draw_double_pointed_thumb(ctx, rect, state, axis),
            PaintCommand::FillRect { rect, color } => host.fill_rect(ctx, rect, color),
            PaintCommand::Border { rect, color, style } => host.draw_border(ctx, rect, color, style),
        }
    }
}

/// Acquire a context, replay `plan`, release the context.
pub fn paint<H: HostAdapter>(plan: &PaintPlan, host: &mut H) {
    DrawingScope::acquire(host).render(plan);
}
