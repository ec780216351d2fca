// Motion source behaviour against a scripted sensor.

use parallax_core::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

#[derive(Default)]
struct SensorLog {
    sink: Option<SensorSink>,
    starts: usize,
    stops: usize,
    interval: Option<Duration>,
}

#[derive(Clone)]
struct FakeSensor {
    available: bool,
    log: Rc<RefCell<SensorLog>>,
}

impl FakeSensor {
    fn new(available: bool) -> Self {
        Self {
            available,
            log: Rc::new(RefCell::new(SensorLog::default())),
        }
    }

    fn push(&self, x: f64, y: f64, z: f64) {
        // take the sink out so it can run without holding the log borrow
        let sink = self.log.borrow_mut().sink.take();
        if let Some(mut sink) = sink {
            sink(GravityReading::new(x, y, z));
            let mut log = self.log.borrow_mut();
            if log.sink.is_none() {
                log.sink = Some(sink);
            }
        }
    }
}

impl GravitySensor for FakeSensor {
    fn is_available(&self) -> bool {
        self.available
    }

    fn start_updates(&mut self, interval: Duration, sink: SensorSink) {
        let mut log = self.log.borrow_mut();
        log.sink = Some(sink);
        log.starts += 1;
        log.interval = Some(interval);
    }

    fn stop_updates(&mut self) {
        let mut log = self.log.borrow_mut();
        log.sink = None;
        log.stops += 1;
    }
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn first_reading_becomes_baseline() {
    let sensor = FakeSensor::new(true);
    let mut source = MotionSource::new(sensor.clone());
    source.start();
    assert!(source.is_running());

    sensor.push(0.2, -0.6, -0.7);
    let tilt = source.tilt();
    assert!(approx(tilt.x, 0.0));
    assert!(approx(tilt.y, 0.0));
    assert!(approx(tilt.z, -0.7));
    assert_eq!(source.baseline(), Some(Baseline { x: 0.2, y: -0.6 }));
}

#[test]
fn later_readings_are_relative_to_baseline_and_z_passes_through() {
    let sensor = FakeSensor::new(true);
    let mut source = MotionSource::new(sensor.clone());
    source.start();
    sensor.push(0.1, -0.5, -0.8);

    for &(x, y, z) in &[(0.4, -0.2, -0.9), (-0.3, -0.9, 0.1), (0.1, -0.5, -0.8)] {
        sensor.push(x, y, z);
        let tilt = source.tilt();
        assert!(approx(tilt.x, x - 0.1), "x for {x}");
        assert!(approx(tilt.y, y + 0.5), "y for {y}");
        assert!(approx(tilt.z, z), "z for {z}");
    }
}

#[test]
fn unavailable_sensor_is_a_silent_no_op() {
    let sensor = FakeSensor::new(false);
    let mut source = MotionSource::new(sensor.clone());
    source.start();

    assert!(!source.is_running());
    assert_eq!(sensor.log.borrow().starts, 0);
    sensor.push(0.5, 0.5, 0.5);
    assert_eq!(source.tilt(), TiltVector::ZERO);
}

#[test]
fn stop_then_start_recaptures_baseline() {
    let sensor = FakeSensor::new(true);
    let mut source = MotionSource::new(sensor.clone());
    source.start();
    sensor.push(0.3, 0.3, -0.9);
    sensor.push(0.5, 0.1, -0.9);
    assert!(approx(source.tilt().x, 0.2));

    source.stop();
    assert!(!source.is_running());
    assert_eq!(source.baseline(), None);
    assert_eq!(sensor.log.borrow().stops, 1);

    source.start();
    sensor.push(-0.4, 0.2, -0.9);
    assert_eq!(source.baseline(), Some(Baseline { x: -0.4, y: 0.2 }));
    sensor.push(-0.2, 0.0, -0.9);
    assert!(approx(source.tilt().x, 0.2));
    assert!(approx(source.tilt().y, -0.2));
}

#[test]
fn readings_after_stop_are_not_published() {
    let sensor = FakeSensor::new(true);
    let mut source = MotionSource::new(sensor.clone());
    source.start();
    sensor.push(0.0, 0.0, -1.0);
    sensor.push(0.25, 0.0, -1.0);
    source.stop();

    sensor.push(0.9, 0.9, 0.0);
    assert!(approx(source.tilt().x, 0.25));
}

#[test]
fn start_twice_registers_once() {
    let sensor = FakeSensor::new(true);
    let mut source = MotionSource::new(sensor.clone());
    source.start();
    source.start();
    assert_eq!(sensor.log.borrow().starts, 1);
    assert_eq!(sensor.log.borrow().interval, Some(SENSOR_INTERVAL));

    source.stop();
    source.stop();
    assert_eq!(sensor.log.borrow().stops, 1);
}

#[test]
fn non_finite_readings_are_dropped() {
    let sensor = FakeSensor::new(true);
    let mut source = MotionSource::new(sensor.clone());
    source.start();
    sensor.push(f64::NAN, 0.0, 0.0);
    assert_eq!(source.baseline(), None);

    sensor.push(0.1, 0.1, -1.0);
    sensor.push(0.2, f64::INFINITY, -1.0);
    assert_eq!(source.tilt(), TiltVector { x: 0.0, y: 0.0, z: -1.0 });
}

#[test]
fn subscribers_see_every_published_tilt() {
    let sensor = FakeSensor::new(true);
    let mut source = MotionSource::new(sensor.clone());
    let seen = Rc::new(RefCell::new(Vec::new()));
    let seen_in = seen.clone();
    source.subscribe(move |t| seen_in.borrow_mut().push(t));
    source.start();

    sensor.push(0.5, 0.5, -0.5);
    sensor.push(0.75, 0.25, -0.5);
    let seen = seen.borrow();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0], TiltVector { x: 0.0, y: 0.0, z: -0.5 });
    assert_eq!(seen[1], TiltVector { x: 0.25, y: -0.25, z: -0.5 });
}

#[test]
fn dropping_source_stops_sensor() {
    let sensor = FakeSensor::new(true);
    {
        let mut source = MotionSource::with_interval(sensor.clone(), Duration::from_millis(10));
        source.start();
        assert_eq!(source.interval(), Duration::from_millis(10));
    }
    assert_eq!(sensor.log.borrow().stops, 1);
    assert!(sensor.log.borrow().sink.is_none());
}

#[test]
fn rate_gate_thins_events_to_interval() {
    let mut gate = RateGate::new(Duration::from_millis(20));
    assert!(gate.admit(0.0));
    assert!(!gate.admit(5.0));
    assert!(!gate.admit(15.0));
    assert!(gate.admit(19.5)); // within tolerance
    assert!(!gate.admit(30.0));
    assert!(gate.admit(40.0));
}

#[test]
fn rate_gate_restarts_when_clock_goes_backwards() {
    let mut gate = RateGate::new(Duration::from_millis(20));
    assert!(gate.admit(1000.0));
    assert!(gate.admit(3.0));
    assert!(!gate.admit(10.0));
    gate.reset();
    assert!(gate.admit(11.0));
}
