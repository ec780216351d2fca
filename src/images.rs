use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

#[inline]
fn js_err(e: wasm_bindgen::JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

/// Fetch and decode an image into a bitmap WebGPU can copy from.
pub async fn load_bitmap(url: &str) -> anyhow::Result<web::ImageBitmap> {
    if url.is_empty() {
        anyhow::bail!("no image reference");
    }
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let img = web::HtmlImageElement::new().map_err(js_err)?;
    // keeps cross-origin images usable as texture sources
    img.set_cross_origin(Some("anonymous"));
    img.set_src(url);
    JsFuture::from(img.decode()).await.map_err(js_err)?;

    let promise = window
        .create_image_bitmap_with_html_image_element(&img)
        .map_err(js_err)?;
    let bitmap = JsFuture::from(promise)
        .await
        .map_err(js_err)?
        .dyn_into::<web::ImageBitmap>()
        .map_err(js_err)?;
    Ok(bitmap)
}
