//! Bubble layout: where the tooltip body and its arrow go.
//!
//! All positions use y-down coordinates. Body offsets are the top-left of the
//! bubble relative to the anchor's top-left; arrow offsets are the arrow's
//! center relative to the bubble's center. Every function is total over the
//! nine sides.

use iced::{Color, Point, Rectangle, Size, Vector};

use crate::config::TooltipConfig;
use crate::widget::TooltipSide;

/// Top-left of the tooltip body relative to the anchor's top-left.
///
/// On the main axis the body is pushed fully outside the anchor plus margin,
/// arrow clearance and the current nudge displacement; on the cross axis it
/// is centered on the anchor.
pub fn body_offset(
    anchor: Size,
    content: Size,
    side: TooltipSide,
    margin_x: f32,
    margin_y: f32,
    actual_arrow_height: f32,
    displacement: f32,
) -> Vector {
    let x = if side.is_leading() {
        -(content.width + margin_x + actual_arrow_height + displacement)
    } else if side.is_trailing() {
        anchor.width + margin_x + actual_arrow_height + displacement
    } else {
        (anchor.width - content.width) / 2.0
    };

    let y = if side.is_top() {
        -(content.height + margin_y + actual_arrow_height + displacement)
    } else if side.is_bottom() {
        anchor.height + margin_y + actual_arrow_height + displacement
    } else {
        (anchor.height - content.height) / 2.0
    };

    Vector::new(x, y)
}

/// Center of the arrow relative to the center of the body.
///
/// The arrow sits flush against the edge facing the anchor. Corner sides
/// slide it toward the anchor-side corner, keeping half the border radius,
/// half the border width and one arrow width of clearance so it never clips
/// the rounded corner.
pub fn arrow_offset(
    content: Size,
    side: TooltipSide,
    arrow_height: f32,
    border_radius: f32,
    border_width: f32,
    arrow_width: f32,
) -> Vector {
    let flush_x = content.width / 2.0 + arrow_height / 2.0;
    let corner_x = content.width / 2.0 - border_radius / 2.0 - border_width / 2.0 - arrow_width;
    let flush_y = content.height / 2.0 + arrow_height / 2.0;

    let x = match side {
        TooltipSide::Top | TooltipSide::Center | TooltipSide::Bottom => 0.0,
        TooltipSide::Leading => flush_x,
        TooltipSide::Trailing => -flush_x,
        TooltipSide::LeadingTop | TooltipSide::LeadingBottom => corner_x,
        TooltipSide::TrailingTop | TooltipSide::TrailingBottom => -corner_x,
    };

    let y = if side.is_top() {
        flush_y
    } else if side.is_bottom() {
        -flush_y
    } else {
        0.0
    };

    Vector::new(x, y)
}

/// The arrow is drawn only when enabled and there is an edge to put it on.
pub fn arrow_visible(config: &TooltipConfig) -> bool {
    config.show_arrow && config.side != TooltipSide::Center
}

/// Everything the renderer needs to draw one bubble, relative to the anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BubbleLayout {
    /// Body rectangle (padded content bounds).
    pub body: Rectangle,
    /// Arrow center.
    pub arrow_center: Point,
    /// Unrotated arrow frame: `arrow_width` x `arrow_height`.
    pub arrow_size: Size,
    pub arrow_rotation: f32,
    /// Seam-hiding nudge for the arrow fill.
    pub arrow_background_offset: Vector,
    pub show_arrow: bool,
    pub fill: Color,
    pub stroke: Color,
    pub border_width: f32,
    pub border_radius: f32,
}

impl BubbleLayout {
    /// Lay out a bubble for an anchor of `anchor` size whose padded content
    /// measured `content`.
    pub fn compute(config: &TooltipConfig, anchor: Size, content: Size, displacement: f32) -> Self {
        let side = config.side;
        let offset = body_offset(
            anchor,
            content,
            side,
            config.margin_x,
            config.margin_y,
            config.actual_arrow_height(),
            displacement,
        );
        let body = Rectangle::new(Point::new(offset.x, offset.y), content);

        let arrow = arrow_offset(
            content,
            side,
            config.arrow_height,
            config.border_radius,
            config.border_width,
            config.arrow_width,
        );
        let (dx, dy) = side.arrow_background_offset();

        Self {
            body,
            arrow_center: body.center() + arrow,
            arrow_size: Size::new(config.arrow_width, config.arrow_height),
            arrow_rotation: side.arrow_rotation(),
            arrow_background_offset: Vector::new(dx, dy),
            show_arrow: arrow_visible(config),
            fill: config.background_color,
            stroke: config.stroke_color(),
            border_width: config.border_width,
            border_radius: config.border_radius,
        }
    }

    /// Same layout moved by `by` (e.g. into screen space).
    pub fn translate(self, by: Vector) -> Self {
        Self {
            body: self.body + by,
            arrow_center: self.arrow_center + by,
            ..self
        }
    }

    /// Arrow center relative to the body center.
    pub fn arrow_offset(&self) -> Vector {
        self.arrow_center - self.body.center()
    }
}
