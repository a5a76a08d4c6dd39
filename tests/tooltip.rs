//! End-to-end tests for tooltip attachment, layout and animation.

use std::time::{Duration, Instant};

use arrow_tooltip::controller::PLACEHOLDER_SIZE;
use arrow_tooltip::masking::CutoutMask;
use arrow_tooltip::{Attachment, TooltipConfig, TooltipSide};
use iced::{Point, Size, Vector};

const ANCHOR: Size = Size::new(100.0, 40.0);
const CONTENT: Size = Size::new(80.0, 30.0);

#[test]
fn test_default_attachment_places_bubble_below() {
    let t0 = Instant::now();
    let mut controller = Attachment::new().controller();
    controller.set_presented(true, t0);
    controller.record_measurement(CONTENT);

    let layout = controller.layout(ANCHOR);
    assert_eq!(layout.body.position(), Point::new(10.0, 54.0));
    assert!(layout.show_arrow);
    // Arrow points up at the anchor from the body's top edge.
    assert_eq!(layout.arrow_rotation, 0.0);
    assert_eq!(layout.arrow_center, Point::new(50.0, 51.0));
}

#[test]
fn test_layout_before_measurement_uses_placeholder() {
    let mut controller = Attachment::new().side(TooltipSide::Top).controller();
    controller.set_presented(true, Instant::now());

    let layout = controller.layout(ANCHOR);
    assert_eq!(layout.body.size(), PLACEHOLDER_SIZE);
    assert_eq!(layout.body.y, -(10.0 + 8.0 + 6.0));
}

#[test]
fn test_custom_corner_config() {
    let config = TooltipConfig {
        border_radius: 8.0,
        border_width: 2.0,
        arrow_width: 12.0,
        ..TooltipConfig::default()
    };
    let mut controller = Attachment::new().config(config).side(TooltipSide::LeadingTop).controller();
    controller.set_presented(true, Instant::now());
    controller.record_measurement(CONTENT);

    let layout = controller.layout(ANCHOR);
    assert_eq!(layout.arrow_offset(), Vector::new(23.0, 18.0));
    assert_eq!(layout.body.position(), Point::new(-94.0, -44.0));
    // Arrow points down toward the anchor.
    assert_eq!(layout.arrow_rotation, std::f32::consts::PI);
}

#[test]
fn test_every_side_gets_a_cutout_except_center() {
    for side in TooltipSide::ALL {
        let mut controller = Attachment::new().side(side).controller();
        controller.set_presented(true, Instant::now());
        controller.record_measurement(CONTENT);
        let mask = CutoutMask::compute(&controller.layout(ANCHOR));
        assert_eq!(mask.is_some(), side != TooltipSide::Center, "{side}");
    }
}

#[test]
fn test_hidden_arrow_pulls_bubble_in() {
    let t0 = Instant::now();
    let no_arrow = TooltipConfig { show_arrow: false, ..TooltipConfig::default() };

    let mut with = Attachment::new().side(TooltipSide::Trailing).controller();
    let mut without = Attachment::new().config(no_arrow).side(TooltipSide::Trailing).controller();
    for c in [&mut with, &mut without] {
        c.set_presented(true, t0);
        c.record_measurement(CONTENT);
    }

    let dx = with.layout(ANCHOR).body.x - without.layout(ANCHOR).body.x;
    assert_eq!(dx, 6.0);
    assert!(!without.layout(ANCHOR).show_arrow);
}

#[test]
fn test_nudge_loop_runs_while_presented_and_stops_when_hidden() {
    let t0 = Instant::now();
    let config = TooltipConfig {
        enable_animation: true,
        animation_offset: 12.0,
        animation_time: 0.5,
        ..TooltipConfig::default()
    };
    let mut controller = Attachment::new().config(config).controller();
    controller.set_presented(true, t0);

    let at = |ms| t0 + Duration::from_millis(ms);
    let mut seen = Vec::new();
    for ms in [250, 500, 549, 550, 1000, 1050, 1100, 1600] {
        controller.tick(at(ms));
        seen.push(controller.displacement());
    }
    assert_eq!(seen, vec![0.0, 12.0, 12.0, 0.0, 0.0, 12.0, 0.0, 12.0]);

    controller.set_presented(false, at(1650));
    assert!(!controller.is_animating());
    for ms in [1650, 2150, 2200, 5000] {
        controller.tick(at(ms));
        assert_eq!(controller.displacement(), 0.0);
    }
}

#[test]
fn test_reshowing_restarts_the_cycle() {
    let t0 = Instant::now();
    let config = TooltipConfig { enable_animation: true, ..TooltipConfig::default() };
    let mut controller = Attachment::new().config(config).controller();
    controller.set_presented(true, t0);
    controller.set_presented(false, t0 + Duration::from_millis(900));

    let t1 = t0 + Duration::from_secs(3);
    controller.set_presented(true, t1);
    controller.tick(t1 + Duration::from_millis(999));
    assert_eq!(controller.displacement(), 0.0);
    controller.tick(t1 + Duration::from_secs(1));
    assert_eq!(controller.displacement(), 10.0);
}
