use crate::constants::{EASE_OUT_P1, EASE_OUT_P2};
use crate::parallax::ParallaxFrame;
use instant::Instant;
use std::time::Duration;

#[inline]
fn bezier(s: f32, a: f32, b: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * a + 3.0 * inv * s * s * b + s * s * s
}

#[inline]
fn bezier_slope(s: f32, a: f32, b: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * a + 6.0 * inv * s * (b - a) + 3.0 * s * s * (1.0 - b)
}

/// Evaluate a CSS-style cubic-bezier timing function at progress `t`.
pub fn cubic_bezier(t: f32, p1: (f32, f32), p2: (f32, f32)) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t == 0.0 || t == 1.0 {
        return t;
    }
    // Newton on x(s) = t, falling back to bisection when the slope flattens
    let mut s = t;
    for _ in 0..8 {
        let err = bezier(s, p1.0, p2.0) - t;
        if err.abs() < 1e-6 {
            return bezier(s, p1.1, p2.1);
        }
        let d = bezier_slope(s, p1.0, p2.0);
        if d.abs() < 1e-6 {
            break;
        }
        s -= err / d;
    }
    let (mut lo, mut hi) = (0.0f32, 1.0f32);
    s = t;
    for _ in 0..32 {
        let x = bezier(s, p1.0, p2.0);
        if (x - t).abs() < 1e-6 {
            break;
        }
        if x < t {
            lo = s;
        } else {
            hi = s;
        }
        s = 0.5 * (lo + hi);
    }
    bezier(s, p1.1, p2.1)
}

#[inline]
pub fn ease_out(t: f32) -> f32 {
    cubic_bezier(t, EASE_OUT_P1, EASE_OUT_P2)
}

/// Eased move between two parallax frames.
///
/// Retargeting mid-flight starts the new move from whatever is currently on
/// screen.
#[derive(Clone, Debug)]
pub struct FrameTransition {
    from: ParallaxFrame,
    to: ParallaxFrame,
    started: Option<Instant>,
    duration: Duration,
}

impl FrameTransition {
    pub fn new(initial: ParallaxFrame, duration: Duration) -> Self {
        Self {
            from: initial,
            to: initial,
            started: None,
            duration,
        }
    }

    pub fn target(&self) -> &ParallaxFrame {
        &self.to
    }

    pub fn retarget(&mut self, target: ParallaxFrame, now: Instant) {
        if target == self.to {
            return;
        }
        self.from = self.sample(now);
        self.to = target;
        self.started = Some(now);
    }

    /// Progress in [0, 1] at `now`, before easing.
    pub fn progress(&self, now: Instant) -> f32 {
        match self.started {
            None => 1.0,
            Some(_) if self.duration.is_zero() => 1.0,
            Some(t0) => {
                let elapsed = if now > t0 {
                    now.duration_since(t0)
                } else {
                    Duration::ZERO
                };
                (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
            }
        }
    }

    pub fn is_settled(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    pub fn sample(&self, now: Instant) -> ParallaxFrame {
        let p = self.progress(now);
        if p >= 1.0 {
            return self.to;
        }
        self.from.lerp(&self.to, ease_out(p))
    }
}
