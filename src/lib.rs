#![cfg(target_arch = "wasm32")]
use instant::Instant;
use parallax_core::{Layer, MotionSource, ParallaxView};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod gravity;
mod images;
mod page_config;
mod render;
mod sensor;

use constants::CANVAS_ID;
use sensor::DeviceMotionSensor;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("tilt-parallax starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let cfg = page_config::config_from_lookup(|key| dom::data_attribute(&canvas, key));
    log::info!(
        "[config] max_offset={} max_angle=({}, {}) scales=({}, {}, {})",
        cfg.max_offset,
        cfg.max_angle_x,
        cfg.max_angle_y,
        cfg.background.scale,
        cfg.middle.scale,
        cfg.foreground.scale
    );

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    events::wire_canvas_resize(&canvas);

    // Sensor -> view: every published tilt retargets the eased frame
    let view = Rc::new(RefCell::new(ParallaxView::new(cfg.clone())));
    let motion = Rc::new(RefCell::new(MotionSource::new(DeviceMotionSensor::new(
        window.clone(),
    ))));
    {
        let view = view.clone();
        motion
            .borrow_mut()
            .subscribe(move |tilt| view.borrow_mut().set_tilt(tilt, Instant::now()));
    }
    if dom::is_page_visible(&document) {
        motion.borrow_mut().start();
        if !motion.borrow().is_running() {
            log::info!("[motion] no motion sensor; banner stays neutral");
        }
    }
    events::wire_visibility(&document, motion.clone());
    events::wire_permission_gesture(&document);

    let gpu = frame::init_gpu(&canvas).await;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(view, canvas, gpu)));

    for layer in Layer::ALL {
        let url = cfg.layer(layer).image.clone();
        let frame_ctx = frame_ctx.clone();
        spawn_local(async move {
            match images::load_bitmap(&url).await {
                Ok(bitmap) => frame_ctx.borrow_mut().set_layer_image(layer, &bitmap),
                Err(e) => log::warn!("[images] {} '{}' not loaded: {:?}", layer.name(), url, e),
            }
        });
    }

    frame::start_loop(frame_ctx);
    Ok(())
}
