//! Arrow cutout mask.
//!
//! The body outline must open up where the arrow meets it so the arrow's own
//! border continues the body's border without a line across its base. The
//! mask is the body's bounding box (inflated by the border width on every
//! side) minus a hole of `arrow_width x (arrow_height + border_width)` placed
//! and rotated like the arrow.
//!
//! iced's canvas has no luminance-to-alpha masking, so the renderer paints
//! the part of the hole that overlaps the body's border band in the body
//! fill color instead (see [`CutoutMask::border_strip`]), then draws the
//! arrow over it.

use std::f32::consts::FRAC_PI_2;

use iced::{Point, Rectangle, Size};

use crate::layout::BubbleLayout;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CutoutMask {
    /// Opaque region: body bounds grown by the border width on each side.
    pub outer: Rectangle,
    /// Hole center, at the arrow center.
    pub hole_center: Point,
    /// Unrotated hole size.
    pub hole_size: Size,
    pub rotation: f32,
    border_width: f32,
    body: Rectangle,
}

impl CutoutMask {
    /// Mask for a bubble, or `None` when no arrow is drawn.
    pub fn compute(layout: &BubbleLayout) -> Option<Self> {
        if !layout.show_arrow {
            return None;
        }
        let bw = layout.border_width;
        Some(Self {
            outer: inflate(layout.body, bw),
            hole_center: layout.arrow_center,
            hole_size: Size::new(layout.arrow_size.width, layout.arrow_size.height + bw),
            rotation: layout.arrow_rotation,
            border_width: bw,
            body: layout.body,
        })
    }

    /// Axis-aligned bounds of the rotated hole. Arrow rotations are quarter
    /// turns, so the rotated hole is itself a rectangle.
    pub fn hole_bounds(&self) -> Rectangle {
        let quarter_turns = (self.rotation / FRAC_PI_2).round() as i32;
        let size = if quarter_turns.rem_euclid(2) == 1 {
            Size::new(self.hole_size.height, self.hole_size.width)
        } else {
            self.hole_size
        };
        Rectangle::new(
            Point::new(self.hole_center.x - size.width / 2.0, self.hole_center.y - size.height / 2.0),
            size,
        )
    }

    /// Whether the masked body is visible at `point`.
    pub fn contains(&self, point: Point) -> bool {
        self.outer.contains(point) && !self.hole_bounds().contains(point)
    }

    /// Region to repaint in the body fill color: the hole clipped to the band
    /// the body stroke covers (the stroke straddles the body edge).
    pub fn border_strip(&self) -> Option<Rectangle> {
        let band = inflate(self.body, self.border_width / 2.0);
        self.hole_bounds().intersection(&band)
    }
}

pub(crate) fn inflate(rect: Rectangle, by: f32) -> Rectangle {
    Rectangle::new(
        Point::new(rect.x - by, rect.y - by),
        Size::new(rect.width + by * 2.0, rect.height + by * 2.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TooltipConfig;
    use crate::widget::TooltipSide;

    fn layout_for(side: TooltipSide) -> BubbleLayout {
        BubbleLayout::compute(
            &TooltipConfig::default().with_side(side),
            Size::new(100.0, 40.0),
            Size::new(80.0, 30.0),
            0.0,
        )
    }

    #[test]
    fn test_outer_is_body_grown_by_border() {
        let layout = layout_for(TooltipSide::Bottom);
        let mask = CutoutMask::compute(&layout).unwrap();
        assert_eq!(mask.outer.width, 80.0 + 2.0 * 2.0);
        assert_eq!(mask.outer.height, 30.0 + 2.0 * 2.0);
        assert_eq!(mask.outer.center(), layout.body.center());
    }

    #[test]
    fn test_hole_matches_arrow_footprint() {
        let mask = CutoutMask::compute(&layout_for(TooltipSide::Bottom)).unwrap();
        assert_eq!(mask.hole_size, Size::new(12.0, 6.0 + 2.0));
        assert_eq!(mask.hole_bounds().size(), Size::new(12.0, 8.0));

        let sideways = CutoutMask::compute(&layout_for(TooltipSide::Leading)).unwrap();
        assert_eq!(sideways.hole_bounds().size(), Size::new(8.0, 12.0));
    }

    #[test]
    fn test_hole_erases_border_under_arrow() {
        let layout = layout_for(TooltipSide::Bottom);
        let mask = CutoutMask::compute(&layout).unwrap();
        // Top edge of the body, straight above the arrow: masked out.
        let under_arrow = Point::new(layout.arrow_center.x, layout.body.y);
        assert!(!mask.contains(under_arrow));
        // Same edge away from the arrow: still visible.
        assert!(mask.contains(Point::new(layout.body.x + 4.0, layout.body.y)));
        assert!(mask.contains(layout.body.center()));
    }

    #[test]
    fn test_border_strip_stays_on_border_band() {
        let layout = layout_for(TooltipSide::Top);
        let mask = CutoutMask::compute(&layout).unwrap();
        let strip = mask.border_strip().unwrap();
        let bottom_edge = layout.body.y + layout.body.height;
        assert_eq!(strip.width, 12.0);
        assert!(strip.y >= bottom_edge - 1.0 && strip.y < bottom_edge);
        assert!((strip.y + strip.height - (bottom_edge + 1.0)).abs() < 1e-4);
    }

    #[test]
    fn test_no_mask_without_arrow() {
        assert!(CutoutMask::compute(&layout_for(TooltipSide::Center)).is_none());

        let mut config = TooltipConfig::default();
        config.show_arrow = false;
        let layout = BubbleLayout::compute(&config, Size::new(10.0, 10.0), Size::new(10.0, 10.0), 0.0);
        assert!(CutoutMask::compute(&layout).is_none());
    }
}
