//! Host-side tween for carrying a [`TrackFrame`] out over time
//!
//! The controller never animates; it only emits frames and waits for the
//! completion signal. Hosts without a native transition engine (tests, the
//! CLI viewport) drive this animator with elapsed time and report completion
//! when it goes inactive.

use std::time::Duration;

use super::types::{Easing, TrackFrame, Transition};

#[derive(Debug, Clone)]
pub struct TransitionAnimator {
    active: bool,
    start: f32,
    target: f32,
    current: f32,
    elapsed: Duration,
    duration: Duration,
    easing: Easing,
}

impl Default for TransitionAnimator {
    fn default() -> Self {
        Self {
            active: false,
            start: 0.0,
            target: 0.0,
            current: 0.0,
            elapsed: Duration::ZERO,
            duration: Duration::ZERO,
            easing: Easing::default(),
        }
    }
}

impl TransitionAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Offset currently shown by the tween.
    pub fn current(&self) -> f32 {
        self.current
    }

    /// Apply a frame. Snaps land immediately; animated frames start a tween
    /// from wherever the track currently is.
    pub fn begin(&mut self, frame: TrackFrame) {
        match frame.transition {
            Transition::None => {
                self.active = false;
                self.start = frame.offset;
                self.target = frame.offset;
                self.current = frame.offset;
            }
            Transition::Animated { duration, easing } => {
                self.active = true;
                self.start = self.current;
                self.target = frame.offset;
                self.elapsed = Duration::ZERO;
                self.duration = duration;
                self.easing = easing;
            }
        }
    }

    /// Advance the tween by `dt`. Returns Some(next_offset) while animating
    /// (the last value is the target), or None when inactive.
    pub fn tick(&mut self, dt: Duration) -> Option<f32> {
        if !self.active {
            return None;
        }
        self.elapsed = self.elapsed.saturating_add(dt);
        if self.elapsed >= self.duration {
            self.active = false;
            self.current = self.target;
            return Some(self.target);
        }
        let t = (self.elapsed.as_secs_f32() / self.duration.as_secs_f32())
            .clamp(0.0, 1.0);
        let te = apply_easing(t, self.easing);
        self.current = self.start + (self.target - self.start) * te;
        Some(self.current)
    }

    /// Jump straight to the end of the current tween.
    pub fn finish(&mut self) -> Option<f32> {
        if !self.active {
            return None;
        }
        self.active = false;
        self.current = self.target;
        Some(self.target)
    }
}

/// Map linear progress `t` in [0, 1] through an easing curve.
pub fn apply_easing(t: f32, easing: Easing) -> f32 {
    let t = t.clamp(0.0, 1.0);
    match easing {
        Easing::Linear => t,
        Easing::EaseIn => t * t,
        Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
        Easing::EaseInOut => {
            if t < 0.5 {
                2.0 * t * t
            } else {
                1.0 - 2.0 * (1.0 - t) * (1.0 - t)
            }
        }
        Easing::CubicBezier(points) => cubic_bezier(t, points),
    }
}

fn bezier_axis(a1: f32, a2: f32, s: f32) -> f32 {
    let u = 1.0 - s;
    3.0 * u * u * s * a1 + 3.0 * u * s * s * a2 + s * s * s
}

fn bezier_axis_slope(a1: f32, a2: f32, s: f32) -> f32 {
    let u = 1.0 - s;
    3.0 * u * u * a1 + 6.0 * u * s * (a2 - a1) + 3.0 * s * s * (1.0 - a2)
}

/// Solve x(s) = x for the curve parameter, then return y(s).
fn cubic_bezier(x: f32, [x1, y1, x2, y2]: [f32; 4]) -> f32 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    let mut s = x;
    for _ in 0..8 {
        let err = bezier_axis(x1, x2, s) - x;
        if err.abs() < 1e-6 {
            return bezier_axis(y1, y2, s);
        }
        let slope = bezier_axis_slope(x1, x2, s);
        if slope.abs() < 1e-6 {
            break;
        }
        s = (s - err / slope).clamp(0.0, 1.0);
    }

    // Newton stalled; bisection always converges since x(s) is monotone
    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    s = x;
    for _ in 0..32 {
        let value = bezier_axis(x1, x2, s);
        if (value - x).abs() < 1e-6 {
            break;
        }
        if value < x {
            lo = s;
        } else {
            hi = s;
        }
        s = 0.5 * (lo + hi);
    }
    bezier_axis(y1, y2, s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_endpoints_are_fixed() {
        for easing in [
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
            Easing::default(),
        ] {
            assert_eq!(apply_easing(0.0, easing), 0.0, "{easing}");
            assert_eq!(apply_easing(1.0, easing), 1.0, "{easing}");
        }
    }

    #[test]
    fn default_bezier_front_loads_motion() {
        let mid = apply_easing(0.5, Easing::default());
        assert!(mid > 0.75 && mid < 0.85, "got {mid}");

        let mut last = 0.0;
        for step in 1..=20 {
            let value = apply_easing(step as f32 / 20.0, Easing::default());
            assert!(value >= last);
            last = value;
        }
    }

    #[test]
    fn linear_bezier_is_identity() {
        let curve = Easing::CubicBezier([0.0, 0.0, 1.0, 1.0]);
        for step in 0..=10 {
            let t = step as f32 / 10.0;
            assert!((apply_easing(t, curve) - t).abs() < 1e-4);
        }
    }

    #[test]
    fn tween_reaches_target_and_goes_inactive() {
        let mut animator = TransitionAnimator::new();
        animator.begin(TrackFrame::snap(100.0));
        assert!(!animator.is_active());
        assert_eq!(animator.current(), 100.0);

        animator.begin(TrackFrame {
            offset: 400.0,
            transition: Transition::Animated {
                duration: Duration::from_millis(100),
                easing: Easing::Linear,
            },
        });
        assert!(animator.is_active());

        let half = animator.tick(Duration::from_millis(50)).unwrap();
        assert!((half - 250.0).abs() < 1e-3);
        assert!(animator.is_active());

        assert_eq!(animator.tick(Duration::from_millis(60)), Some(400.0));
        assert!(!animator.is_active());
        assert_eq!(animator.tick(Duration::from_millis(16)), None);
    }

    #[test]
    fn finish_jumps_to_target() {
        let mut animator = TransitionAnimator::new();
        animator.begin(TrackFrame {
            offset: 990.0,
            transition: Transition::Animated {
                duration: Duration::from_millis(600),
                easing: Easing::default(),
            },
        });
        assert_eq!(animator.finish(), Some(990.0));
        assert_eq!(animator.finish(), None);
    }
}
