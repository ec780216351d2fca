// Conversions from browser motion data to the core's gravity readings.
// Kept free of web-sys types so host tests can include this file directly.

use parallax_core::{GravityReading, STANDARD_GRAVITY};

/// `accelerationIncludingGravity` (m/s^2) to a gravity vector in g.
///
/// At rest the accelerometer reports the reaction to gravity, so the sign is
/// flipped: a phone lying face up reads (0, 0, +9.8) and has gravity (0, 0, -1).
/// Missing axes (the browser reports `null`) come back as `None`.
#[inline]
pub fn gravity_from_acceleration(
    x: Option<f64>,
    y: Option<f64>,
    z: Option<f64>,
) -> Option<GravityReading> {
    let reading = GravityReading::new(
        -x? / STANDARD_GRAVITY,
        -y? / STANDARD_GRAVITY,
        -z? / STANDARD_GRAVITY,
    );
    reading.is_finite().then_some(reading)
}
