use crate::render;
use instant::Instant;
use parallax_core::{Layer, ParallaxView};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub view: Rc<RefCell<ParallaxView>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
    // set when something other than the eased frame changed (resize, new image)
    pub dirty: bool,
}

impl<'a> FrameContext<'a> {
    pub fn new(
        view: Rc<RefCell<ParallaxView>>,
        canvas: web::HtmlCanvasElement,
        gpu: Option<render::GpuState<'a>>,
    ) -> Self {
        Self {
            view,
            canvas,
            gpu,
            dirty: true,
        }
    }

    pub fn set_layer_image(&mut self, layer: Layer, bitmap: &web::ImageBitmap) {
        if let Some(g) = &mut self.gpu {
            g.set_layer_image(layer, bitmap);
            self.dirty = true;
        }
    }

    pub fn frame(&mut self) {
        let Some(g) = &mut self.gpu else {
            return;
        };
        let now = Instant::now();
        let w = self.canvas.width();
        let h = self.canvas.height();
        let (frame, animating) = {
            let view = self.view.borrow();
            (view.frame(now), view.is_animating(now))
        };
        // a settled banner needs no redraw until the next tilt or resize
        let resized = g.resize_if_needed(w, h);
        if !animating && !self.dirty && !resized {
            return;
        }
        // offsets are configured in CSS pixels; the surface is in device pixels
        let dpr = web::window()
            .map(|w| w.device_pixel_ratio() as f32)
            .unwrap_or(1.0);
        let view = self.view.borrow();
        match g.render(&frame, view.config(), dpr) {
            Ok(()) => self.dirty = false,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("[gpu] surface lost; reconfiguring");
                g.reconfigure();
            }
            Err(e) => log::error!("render error: {:?}", e),
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
