use crate::dom;
use crate::sensor::{self, DeviceMotionSensor};
use parallax_core::MotionSource;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub type SharedMotion = Rc<RefCell<MotionSource<DeviceMotionSensor>>>;

pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    if let Some(window) = web::window() {
        dom::add_listener(&window, "resize", move |_| {
            dom::sync_canvas_backing_size(&canvas_resize);
        });
    }
}

/// Poll the sensor only while the banner is on screen.
pub fn wire_visibility(document: &web::Document, motion: SharedMotion) {
    let doc = document.clone();
    let motion_vis = motion.clone();
    dom::add_listener(document, "visibilitychange", move |_| {
        let mut m = motion_vis.borrow_mut();
        if dom::is_page_visible(&doc) {
            m.start();
        } else {
            m.stop();
        }
    });

    if let Some(window) = web::window() {
        let motion_hide = motion.clone();
        dom::add_listener(&window, "pagehide", move |_| {
            motion_hide.borrow_mut().stop();
        });

        let doc = document.clone();
        dom::add_listener(&window, "pageshow", move |_| {
            if dom::is_page_visible(&doc) {
                motion.borrow_mut().start();
            }
        });
    }
}

/// Some browsers only deliver motion events after a permission prompt
/// triggered from a user gesture. Ask once, on the first tap.
pub fn wire_permission_gesture(document: &web::Document) {
    let asked = Rc::new(Cell::new(false));
    dom::add_listener(document, "pointerup", move |_| {
        if asked.replace(true) {
            return;
        }
        spawn_local(sensor::request_permission());
    });
}
