use std::time::Duration;

// Default tuning for the parallax banner. Front-ends may override these per
// instance through `ParallaxConfig`.

// Sensor cadence
pub const SENSOR_INTERVAL: Duration = Duration::from_micros(16_667); // ~1/60 s
pub const RATE_GATE_TOLERANCE: Duration = Duration::from_millis(1); // absorbs event timestamp jitter

// Standard gravity, used to turn m/s^2 into g
pub const STANDARD_GRAVITY: f64 = 9.80665;

// Motion-to-pixel mapping
pub const MAX_OFFSET_PX: f32 = 30.0;
pub const MAX_ANGLE_X_DEG: f32 = 40.0; // forward/back tilt
pub const MAX_ANGLE_Y_DEG: f32 = 30.0; // left/right tilt
pub const PERSPECTIVE: f32 = 0.7;

// Per-layer parallax factors and scales
pub const BACKGROUND_FACTOR: f32 = 0.6;
pub const MIDDLE_FACTOR: f32 = 0.3;
pub const FOREGROUND_FACTOR: f32 = 1.0;

pub const BACKGROUND_SCALE: f32 = 1.3; // oversized so offsets never expose an edge
pub const MIDDLE_SCALE: f32 = 1.0;
pub const FOREGROUND_SCALE: f32 = 1.1;

// Eased transition applied to every offset/angle change
pub const TRANSITION_DURATION: Duration = Duration::from_millis(80);

// CSS `ease-out` control points: cubic-bezier(0, 0, 0.58, 1)
pub const EASE_OUT_P1: (f32, f32) = (0.0, 0.0);
pub const EASE_OUT_P2: (f32, f32) = (0.58, 1.0);
