//! Bubble rendering: body, cutout and arrow on an iced canvas frame.

use iced::advanced::graphics::geometry::Renderer as _;
use iced::advanced::Renderer as _;
use iced::widget::canvas::{self, Path, Stroke};
use iced::{Point, Renderer, Vector};

use crate::layout::BubbleLayout;
use crate::masking::{inflate, CutoutMask};

/// Extra room around the body for the arrow, its stroke and the fill nudge.
fn overhang(bubble: &BubbleLayout) -> f32 {
    bubble.arrow_size.width.max(bubble.arrow_size.height) + bubble.border_width * 2.0 + 1.0
}

/// Draw a bubble given in screen coordinates.
pub fn draw_bubble(renderer: &mut Renderer, bubble: &BubbleLayout) {
    let bounds = inflate(bubble.body, overhang(bubble));
    let local = bubble.translate(Vector::new(-bounds.x, -bounds.y));

    let mut frame = canvas::Frame::new(renderer, bounds.size());
    paint_bubble(&mut frame, &local);
    let geometry = frame.into_geometry();

    renderer.with_translation(Vector::new(bounds.x, bounds.y), |renderer| {
        renderer.draw_geometry(geometry);
    });
}

/// Paint order: body fill and stroke, border strip under the arrow, arrow
/// fill (nudged one pixel into the body), arrow edges.
pub fn paint_bubble(frame: &mut canvas::Frame, bubble: &BubbleLayout) {
    let body = Path::rounded_rectangle(
        bubble.body.position(),
        bubble.body.size(),
        bubble.border_radius.into(),
    );
    frame.fill(&body, bubble.fill);
    if bubble.stroke.a > 0.0 {
        frame.stroke(
            &body,
            Stroke::default().with_color(bubble.stroke).with_width(bubble.border_width),
        );
    }

    let Some(mask) = CutoutMask::compute(bubble) else { return };
    if let Some(strip) = mask.border_strip() {
        frame.fill_rectangle(strip.position(), strip.size(), bubble.fill);
    }

    let (w, h) = (bubble.arrow_size.width, bubble.arrow_size.height);
    // Unrotated arrow points up (toward -y), base on its frame's bottom edge.
    let apex = Point::new(0.0, -h / 2.0);
    let base_left = Point::new(-w / 2.0, h / 2.0);
    let base_right = Point::new(w / 2.0, h / 2.0);

    let arrow_fill = Path::new(|b| {
        b.move_to(apex);
        b.line_to(base_right);
        b.line_to(base_left);
        b.close();
    });
    frame.with_save(|frame| {
        frame.translate(Vector::new(bubble.arrow_center.x, bubble.arrow_center.y) + bubble.arrow_background_offset);
        frame.rotate(bubble.arrow_rotation);
        frame.fill(&arrow_fill, bubble.fill);
    });

    if bubble.stroke.a > 0.0 {
        // Open path: the base stays unstroked so the arrow merges into the body.
        let arrow_edges = Path::new(|b| {
            b.move_to(base_left);
            b.line_to(apex);
            b.line_to(base_right);
        });
        frame.with_save(|frame| {
            frame.translate(Vector::new(bubble.arrow_center.x, bubble.arrow_center.y));
            frame.rotate(bubble.arrow_rotation);
            frame.stroke(
                &arrow_edges,
                Stroke::default().with_color(bubble.stroke).with_width(bubble.border_width),
            );
        });
    }
}
