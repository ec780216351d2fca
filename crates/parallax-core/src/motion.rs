//! Baseline-relative tilt published from a [`GravitySensor`].
//!
//! The source is the single writer of the tilt state: only the sink it hands
//! to the sensor mutates it. Readers call [`MotionSource::tilt`] or register a
//! listener with [`MotionSource::subscribe`]. Everything runs on one thread,
//! so the shared state is an `Rc<RefCell<_>>` rather than a lock.

use crate::constants::SENSOR_INTERVAL;
use crate::sensor::GravitySensor;
use crate::tilt::{Baseline, GravityReading, TiltVector};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

type TiltListener = Box<dyn FnMut(TiltVector)>;

#[derive(Debug, Default)]
struct MotionState {
    baseline: Option<Baseline>,
    tilt: TiltVector,
}

impl MotionState {
    fn ingest(&mut self, reading: GravityReading) -> Option<TiltVector> {
        if !reading.is_finite() {
            return None;
        }
        let baseline = *self.baseline.get_or_insert_with(|| {
            log::debug!(
                "[motion] baseline captured x={:.3} y={:.3}",
                reading.x,
                reading.y
            );
            Baseline::capture(&reading)
        });
        self.tilt = TiltVector::relative_to(&reading, &baseline);
        Some(self.tilt)
    }
}

pub struct MotionSource<S: GravitySensor> {
    sensor: S,
    interval: Duration,
    state: Rc<RefCell<MotionState>>,
    listeners: Rc<RefCell<Vec<TiltListener>>>,
    running: bool,
}

impl<S: GravitySensor> MotionSource<S> {
    pub fn new(sensor: S) -> Self {
        Self::with_interval(sensor, SENSOR_INTERVAL)
    }

    pub fn with_interval(sensor: S, interval: Duration) -> Self {
        Self {
            sensor,
            interval,
            state: Rc::new(RefCell::new(MotionState::default())),
            listeners: Rc::new(RefCell::new(Vec::new())),
            running: false,
        }
    }

    /// Start polling the sensor. Does nothing when the sensor is unavailable
    /// or the source is already running.
    ///
    /// The first reading after this call becomes the baseline.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        if !self.sensor.is_available() {
            log::debug!("[motion] gravity sensor unavailable; not starting");
            return;
        }
        self.state.borrow_mut().baseline = None;

        let state = self.state.clone();
        let listeners = self.listeners.clone();
        self.sensor.start_updates(
            self.interval,
            Box::new(move |reading| {
                // release the state borrow before listeners run so they can read tilt()
                let published = state.borrow_mut().ingest(reading);
                if let Some(tilt) = published {
                    for listener in listeners.borrow_mut().iter_mut() {
                        listener(tilt);
                    }
                }
            }),
        );
        self.running = true;
        log::debug!(
            "[motion] started interval={:.1}ms",
            self.interval.as_secs_f64() * 1000.0
        );
    }

    /// Stop polling and forget the baseline. The last published tilt stays
    /// readable.
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.sensor.stop_updates();
        self.state.borrow_mut().baseline = None;
        self.running = false;
        log::debug!("[motion] stopped");
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Latest baseline-relative tilt. Zero until the first reading arrives.
    #[inline]
    pub fn tilt(&self) -> TiltVector {
        self.state.borrow().tilt
    }

    pub fn baseline(&self) -> Option<Baseline> {
        self.state.borrow().baseline
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Register a listener called with every published tilt.
    ///
    /// Listeners must not call `subscribe` from inside the callback.
    pub fn subscribe(&mut self, listener: impl FnMut(TiltVector) + 'static) {
        self.listeners.borrow_mut().push(Box::new(listener));
    }
}

impl<S: GravitySensor> Drop for MotionSource<S> {
    fn drop(&mut self) {
        self.stop();
    }
}
