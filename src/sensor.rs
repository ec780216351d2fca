//! `devicemotion` events as a [`GravitySensor`].

use crate::gravity::gravity_from_acceleration;
use parallax_core::{GravitySensor, RateGate, SensorSink};
use std::time::Duration;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

const EVENT: &str = "devicemotion";

pub struct DeviceMotionSensor {
    window: web::Window,
    listener: Option<Closure<dyn FnMut(web::DeviceMotionEvent)>>,
}

impl DeviceMotionSensor {
    pub fn new(window: web::Window) -> Self {
        Self {
            window,
            listener: None,
        }
    }
}

impl GravitySensor for DeviceMotionSensor {
    fn is_available(&self) -> bool {
        js_sys::Reflect::has(&self.window, &JsValue::from_str("DeviceMotionEvent"))
            .unwrap_or(false)
    }

    fn start_updates(&mut self, interval: Duration, mut sink: SensorSink) {
        self.stop_updates();
        // the browser picks its own cadence; thin it to the requested interval
        let mut gate = RateGate::new(interval);
        let closure = Closure::wrap(Box::new(move |ev: web::DeviceMotionEvent| {
            if !gate.admit(ev.time_stamp()) {
                return;
            }
            let Some(a) = ev.acceleration_including_gravity() else {
                return;
            };
            if let Some(reading) = gravity_from_acceleration(a.x(), a.y(), a.z()) {
                sink(reading);
            }
        }) as Box<dyn FnMut(_)>);
        match self
            .window
            .add_event_listener_with_callback(EVENT, closure.as_ref().unchecked_ref())
        {
            Ok(()) => self.listener = Some(closure),
            Err(e) => log::warn!("[motion] could not listen for {}: {:?}", EVENT, e),
        }
    }

    fn stop_updates(&mut self) {
        if let Some(closure) = self.listener.take() {
            _ = self
                .window
                .remove_event_listener_with_callback(EVENT, closure.as_ref().unchecked_ref());
        }
    }
}

/// Ask for motion access where the browser gates it behind a user gesture
/// (`DeviceMotionEvent.requestPermission`). Elsewhere this does nothing.
pub async fn request_permission() {
    let Some(window) = web::window() else {
        return;
    };
    let Ok(ctor) = js_sys::Reflect::get(&window, &JsValue::from_str("DeviceMotionEvent")) else {
        return;
    };
    let Ok(request) = js_sys::Reflect::get(&ctor, &JsValue::from_str("requestPermission")) else {
        return;
    };
    let Some(request) = request.dyn_ref::<js_sys::Function>() else {
        return;
    };
    let promise = match request.call0(&ctor) {
        Ok(p) => js_sys::Promise::resolve(&p),
        Err(e) => {
            log::debug!("[motion] requestPermission threw: {:?}", e);
            return;
        }
    };
    match wasm_bindgen_futures::JsFuture::from(promise).await {
        Ok(state) => log::info!("[motion] permission {:?}", state.as_string()),
        Err(e) => log::debug!("[motion] permission request failed: {:?}", e),
    }
}
