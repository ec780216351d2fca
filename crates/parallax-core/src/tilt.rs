//! Gravity readings and the baseline-relative tilt derived from them.

/// Raw gravity vector as reported by a platform sensor, in units of g.
///
/// Axes follow the device frame: `x` points right, `y` points up along the
/// screen and `z` points out of the screen.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GravityReading {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl GravityReading {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// X/Y reference captured from the first reading after the motion source
/// starts. Subtracting it makes the current hand posture the neutral pose.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Baseline {
    pub x: f64,
    pub y: f64,
}

impl Baseline {
    pub fn capture(reading: &GravityReading) -> Self {
        Self {
            x: reading.x,
            y: reading.y,
        }
    }
}

/// Device attitude relative to the captured baseline.
///
/// `x` and `y` are deltas against the baseline; `z` is the raw gravity Z.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TiltVector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl TiltVector {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn relative_to(reading: &GravityReading, baseline: &Baseline) -> Self {
        Self {
            x: reading.x - baseline.x,
            y: reading.y - baseline.y,
            z: reading.z,
        }
    }
}
