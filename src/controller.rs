//! Presentation state for one tooltip attachment.
//!
//! The controller owns everything that changes while a tooltip is shown: the
//! measured size of the floating content, the nudge animation and whether
//! the overlay is mounted. The visibility flag itself belongs to the caller,
//! who reports it through [`TooltipController::set_presented`].

use std::time::{Duration, Instant};

use iced::{Size, Subscription};

use crate::animation::{Nudge, Transition, EASE_DURATION};
use crate::config::TooltipConfig;
use crate::layout::BubbleLayout;

/// Content size assumed until the first layout pass reports the real one.
pub const PLACEHOLDER_SIZE: Size = Size::new(10.0, 10.0);

/// Tick rate while the nudge animation runs.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Clone)]
pub struct TooltipController {
    config: TooltipConfig,
    presented: bool,
    mounted: bool,
    measured: Size,
    nudge: Nudge,
    eased: Transition,
    last_tick: Instant,
}

impl Default for TooltipController {
    fn default() -> Self {
        Self::new(TooltipConfig::default())
    }
}

impl TooltipController {
    pub fn new(config: TooltipConfig) -> Self {
        let now = Instant::now();
        let nudge = Nudge::new(config.animation_period(), config.animation_offset);
        Self {
            config,
            presented: false,
            mounted: false,
            measured: PLACEHOLDER_SIZE,
            nudge,
            eased: Transition::settled(0.0, now),
            last_tick: now,
        }
    }

    pub fn config(&self) -> &TooltipConfig {
        &self.config
    }

    pub fn is_presented(&self) -> bool {
        self.presented
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn measured_size(&self) -> Size {
        self.measured
    }

    /// Follow the caller's visibility flag. Showing mounts a fresh overlay
    /// (placeholder size, animation restarted); hiding unmounts it.
    pub fn set_presented(&mut self, presented: bool, now: Instant) {
        self.presented = presented;
        match (presented, self.mounted) {
            (true, false) => self.mount(now),
            (false, true) => self.unmount(),
            _ => {}
        }
    }

    fn mount(&mut self, now: Instant) {
        self.mounted = true;
        self.measured = PLACEHOLDER_SIZE;
        self.eased = Transition::settled(0.0, now);
        self.last_tick = now;
        if self.config.enable_animation {
            self.nudge.start(now);
        }
        tracing::debug!("Tooltip mounted (side {}, animation {})", self.config.side, self.nudge.is_running());
    }

    fn unmount(&mut self) {
        self.mounted = false;
        self.nudge.stop();
        self.eased = Transition::settled(0.0, self.last_tick);
        tracing::debug!("Tooltip unmounted (side {})", self.config.side);
    }

    /// Store the size the floating content laid out at. Returns true if it
    /// changed. Ignored while unmounted.
    pub fn record_measurement(&mut self, size: Size) -> bool {
        if !self.mounted || size == self.measured {
            return false;
        }
        tracing::debug!("Tooltip content measured at {}x{}", size.width, size.height);
        self.measured = size;
        true
    }

    /// Advance the nudge animation to `now`. Returns true while something
    /// visible changed or is still easing. No-op once unmounted.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.mounted {
            return false;
        }
        self.last_tick = now;
        let moved = self.nudge.advance(now);
        if moved {
            self.eased.retarget(self.nudge.target(), now, self.ease_duration());
        }
        moved || !self.eased.is_settled(now)
    }

    /// Position changes ease in and out only while the animation is enabled,
    /// and never for longer than the nudge holds.
    fn ease_duration(&self) -> Duration {
        if self.config.enable_animation {
            EASE_DURATION.min(self.nudge.hold())
        } else {
            Duration::ZERO
        }
    }

    /// Current nudge displacement: 0 or `animation_offset`.
    pub fn displacement(&self) -> f32 {
        self.nudge.target()
    }

    /// Displacement as drawn, following the eased transition.
    pub fn rendered_displacement(&self) -> f32 {
        self.eased.value(self.last_tick)
    }

    pub fn is_animating(&self) -> bool {
        self.mounted && self.nudge.is_running()
    }

    /// Bubble layout for an anchor of the given size, relative to the anchor.
    pub fn layout(&self, anchor: Size) -> BubbleLayout {
        BubbleLayout::compute(&self.config, anchor, self.measured, self.rendered_displacement())
    }

    /// Frame ticks for the nudge animation, present only while it runs.
    ///
    /// Map it into the app's message type; once the overlay unmounts the
    /// subscription disappears and iced drops the timer.
    pub fn subscription(&self) -> Subscription<Instant> {
        if self.is_animating() {
            iced::time::every(FRAME_INTERVAL)
        } else {
            Subscription::none()
        }
    }
}
