use wasm_bindgen::JsCast;
use web_sys as web;

/// Register `handler` for `event` on `target` for the lifetime of the page.
pub fn add_listener(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(web::Event) + 'static,
) {
    let closure = wasm_bindgen::closure::Closure::wrap(
        Box::new(move |ev: web::Event| handler(ev)) as Box<dyn FnMut(_)>
    );
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::warn!("[dom] failed to listen for {}: {:?}", event, e);
    }
    closure.forget();
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Read a `data-*` attribute through `HTMLElement.dataset`.
#[inline]
pub fn data_attribute(el: &web::HtmlElement, key: &str) -> Option<String> {
    el.dataset().get(key)
}

/// Whether the page is currently shown to the user.
#[inline]
pub fn is_page_visible(document: &web::Document) -> bool {
    document.visibility_state() == web::VisibilityState::Visible
}
