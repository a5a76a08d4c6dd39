//! Nudge animation: the looping attention-drawing bounce.
//!
//! A cycle rests for `period`, jumps out by `offset`, holds for a tenth of
//! `period`, then drops back to zero and starts over. The state machine is
//! driven by [`Nudge::advance`] with the current time, so callers decide the
//! tick rate and tests can step simulated time.

use std::time::{Duration, Instant};

/// Default length of the eased transition between displacements.
pub const EASE_DURATION: Duration = Duration::from_millis(350);

/// Fraction of the period the nudge stays out.
const HOLD_FRACTION: f64 = 0.1;

/// Quadratic ease-in/ease-out of `t` in `[0, 1]`.
pub fn ease_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Displacement is 0; nudges at `until`.
    Resting { until: Instant },
    /// Displacement is `offset`; drops back at `until`.
    Nudged { until: Instant },
    Stopped,
}

/// Two-phase nudge timer.
#[derive(Debug, Clone)]
pub struct Nudge {
    period: Duration,
    offset: f32,
    phase: Phase,
    target: f32,
}

impl Nudge {
    pub fn new(period: Duration, offset: f32) -> Self {
        Self { period, offset, phase: Phase::Stopped, target: 0.0 }
    }

    /// How long the nudge stays out each cycle.
    pub fn hold(&self) -> Duration {
        self.period.mul_f64(HOLD_FRACTION)
    }

    /// Start a fresh cycle at `now`. A zero period never starts.
    pub fn start(&mut self, now: Instant) -> bool {
        self.target = 0.0;
        if self.period.is_zero() {
            tracing::warn!("Nudge animation has a zero period; not starting");
            self.phase = Phase::Stopped;
            return false;
        }
        self.phase = Phase::Resting { until: now + self.period };
        true
    }

    /// Stop the loop and pin the displacement at zero. Later `advance` calls
    /// do nothing until the next `start`.
    pub fn stop(&mut self) {
        self.phase = Phase::Stopped;
        self.target = 0.0;
    }

    pub fn is_running(&self) -> bool {
        self.phase != Phase::Stopped
    }

    /// Current displacement target: 0 or `offset`.
    pub fn target(&self) -> f32 {
        self.target
    }

    /// When the next phase change is due.
    pub fn next_deadline(&self) -> Option<Instant> {
        match self.phase {
            Phase::Resting { until } | Phase::Nudged { until } => Some(until),
            Phase::Stopped => None,
        }
    }

    /// Apply every phase change due by `now`. Returns true if the target moved.
    pub fn advance(&mut self, now: Instant) -> bool {
        let before = self.target;
        loop {
            match self.phase {
                Phase::Resting { until } if now >= until => {
                    self.target = self.offset;
                    self.phase = Phase::Nudged { until: until + self.hold() };
                }
                Phase::Nudged { until } if now >= until => {
                    self.target = 0.0;
                    self.phase = Phase::Resting { until: until + self.period };
                }
                _ => break,
            }
        }
        self.target != before
    }
}

/// Eased interpolation from one displacement to another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    from: f32,
    to: f32,
    started: Instant,
    duration: Duration,
}

impl Transition {
    /// A transition already at rest on `value`.
    pub fn settled(value: f32, now: Instant) -> Self {
        Self { from: value, to: value, started: now, duration: Duration::ZERO }
    }

    /// Head toward `to`, starting from wherever the curve is at `now`.
    pub fn retarget(&mut self, to: f32, now: Instant, duration: Duration) {
        self.from = self.value(now);
        self.to = to;
        self.started = now;
        self.duration = duration;
    }

    pub fn value(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return self.to;
        }
        let t = now.saturating_duration_since(self.started).as_secs_f64() / self.duration.as_secs_f64();
        let eased = ease_in_out(t) as f32;
        self.from + (self.to - self.from) * eased
    }

    pub fn is_settled(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_in_out_endpoints() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(0.5), 0.5);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert_eq!(ease_in_out(2.0), 1.0);
        assert!(ease_in_out(0.25) < 0.25);
        assert!(ease_in_out(0.75) > 0.75);
    }

    #[test]
    fn test_nudge_cycle() {
        let t0 = Instant::now();
        let period = Duration::from_secs(1);
        let mut nudge = Nudge::new(period, 10.0);
        assert!(nudge.start(t0));
        assert_eq!(nudge.target(), 0.0);

        assert!(!nudge.advance(t0 + Duration::from_millis(999)));
        assert_eq!(nudge.target(), 0.0);

        assert!(nudge.advance(t0 + period));
        assert_eq!(nudge.target(), 10.0);

        assert!(nudge.advance(t0 + Duration::from_millis(1100)));
        assert_eq!(nudge.target(), 0.0);

        // Next cycle: out again one period after dropping back.
        nudge.advance(t0 + Duration::from_millis(2099));
        assert_eq!(nudge.target(), 0.0);
        nudge.advance(t0 + Duration::from_millis(2100));
        assert_eq!(nudge.target(), 10.0);
    }

    #[test]
    fn test_nudge_catches_up_after_long_gap() {
        let t0 = Instant::now();
        let mut nudge = Nudge::new(Duration::from_secs(1), 4.0);
        nudge.start(t0);
        // 3 full cycles (3.3s) plus 1.05s into the fourth: nudged.
        nudge.advance(t0 + Duration::from_millis(4350));
        assert_eq!(nudge.target(), 4.0);
        assert_eq!(nudge.next_deadline(), Some(t0 + Duration::from_millis(4400)));
    }

    #[test]
    fn test_stopped_nudge_ignores_time() {
        let t0 = Instant::now();
        let mut nudge = Nudge::new(Duration::from_secs(1), 10.0);
        nudge.start(t0);
        nudge.advance(t0 + Duration::from_secs(1));
        nudge.stop();
        assert_eq!(nudge.target(), 0.0);
        assert!(!nudge.advance(t0 + Duration::from_secs(5)));
        assert_eq!(nudge.target(), 0.0);
        assert!(!nudge.is_running());
        assert_eq!(nudge.next_deadline(), None);
    }

    #[test]
    fn test_zero_period_never_starts() {
        let mut nudge = Nudge::new(Duration::ZERO, 10.0);
        assert!(!nudge.start(Instant::now()));
        assert!(!nudge.is_running());
    }

    #[test]
    fn test_transition_eases_between_values() {
        let t0 = Instant::now();
        let mut tr = Transition::settled(0.0, t0);
        assert_eq!(tr.value(t0), 0.0);

        tr.retarget(10.0, t0, Duration::from_millis(100));
        assert_eq!(tr.value(t0), 0.0);
        assert_eq!(tr.value(t0 + Duration::from_millis(50)), 5.0);
        assert_eq!(tr.value(t0 + Duration::from_millis(100)), 10.0);
        assert!(tr.is_settled(t0 + Duration::from_millis(100)));

        let mid = tr.value(t0 + Duration::from_millis(25));
        assert!(mid > 0.0 && mid < 2.5);
    }

    #[test]
    fn test_zero_duration_transition_snaps() {
        let t0 = Instant::now();
        let mut tr = Transition::settled(3.0, t0);
        tr.retarget(7.0, t0, Duration::ZERO);
        assert_eq!(tr.value(t0), 7.0);
    }
}
