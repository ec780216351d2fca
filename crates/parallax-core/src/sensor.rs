use crate::constants::RATE_GATE_TOLERANCE;
use crate::tilt::GravityReading;
use std::time::Duration;

/// Callback a sensor invokes for every gravity reading it delivers.
pub type SensorSink = Box<dyn FnMut(GravityReading)>;

/// Platform gravity sensor.
///
/// Implementations deliver readings on the same execution context that
/// renders, so the sink may touch UI state without locking.
pub trait GravitySensor {
    /// Whether the device exposes gravity readings at all.
    fn is_available(&self) -> bool;

    /// Begin delivering readings to `sink`, roughly every `interval`.
    /// Replaces any previously registered sink.
    fn start_updates(&mut self, interval: Duration, sink: SensorSink);

    /// Stop delivering readings. The registered sink is dropped.
    fn stop_updates(&mut self);
}

/// Thins a push-based event stream down to a fixed interval.
///
/// Timestamps are in milliseconds on any monotonic clock (the browser's
/// `Event.timeStamp` for instance).
#[derive(Clone, Debug)]
pub struct RateGate {
    interval_ms: f64,
    last_ms: Option<f64>,
}

impl RateGate {
    pub fn new(interval: Duration) -> Self {
        let tolerance = RATE_GATE_TOLERANCE.min(interval);
        Self {
            interval_ms: (interval - tolerance).as_secs_f64() * 1000.0,
            last_ms: None,
        }
    }

    /// Returns true when the event at `now_ms` should be passed through.
    pub fn admit(&mut self, now_ms: f64) -> bool {
        match self.last_ms {
            Some(last) if now_ms >= last && now_ms - last < self.interval_ms => false,
            _ => {
                // a timestamp going backwards means the clock was reset; start over
                self.last_ms = Some(now_ms);
                true
            }
        }
    }

    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}
