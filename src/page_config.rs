// Banner configuration read from `data-*` attributes on the canvas.
// Pure parsing over a lookup function; the DOM side lives in `dom.rs`.

use parallax_core::{Layer, ParallaxConfig};

// Keys as they appear in `HTMLElement.dataset` (camelCase of the attribute)
pub const KEY_BACK: &str = "back";
pub const KEY_MIDDLE: &str = "middle";
pub const KEY_FRONT: &str = "front";
pub const KEY_MAX_OFFSET: &str = "maxOffset";
pub const KEY_MAX_ANGLE_X: &str = "maxAngleX";
pub const KEY_MAX_ANGLE_Y: &str = "maxAngleY";
pub const KEY_PERSPECTIVE: &str = "perspective";
pub const KEY_BACKGROUND_SCALE: &str = "backgroundScale";
pub const KEY_MIDDLE_SCALE: &str = "middleScale";
pub const KEY_FOREGROUND_SCALE: &str = "foregroundScale";

#[inline]
fn parse_f32(raw: Option<String>) -> Option<f32> {
    raw?.trim().parse::<f32>().ok().filter(|v| v.is_finite())
}

fn override_f32(lookup: &impl Fn(&str) -> Option<String>, key: &str, slot: &mut f32) {
    if let Some(v) = parse_f32(lookup(key)) {
        *slot = v;
    }
}

/// Build a config from page-supplied values, keeping defaults for anything
/// missing or unparsable. An invalid result falls back to the defaults
/// wholesale (image references are kept).
pub fn config_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ParallaxConfig {
    let image = |key: &str| lookup(key).map(|s| s.trim().to_string()).unwrap_or_default();
    let images = ParallaxConfig::with_images(image(KEY_BACK), image(KEY_MIDDLE), image(KEY_FRONT));

    let mut cfg = images.clone();
    override_f32(&lookup, KEY_MAX_OFFSET, &mut cfg.max_offset);
    override_f32(&lookup, KEY_MAX_ANGLE_X, &mut cfg.max_angle_x);
    override_f32(&lookup, KEY_MAX_ANGLE_Y, &mut cfg.max_angle_y);
    override_f32(&lookup, KEY_PERSPECTIVE, &mut cfg.perspective);
    override_f32(
        &lookup,
        KEY_BACKGROUND_SCALE,
        &mut cfg.layer_mut(Layer::Background).scale,
    );
    override_f32(&lookup, KEY_MIDDLE_SCALE, &mut cfg.layer_mut(Layer::Middle).scale);
    override_f32(
        &lookup,
        KEY_FOREGROUND_SCALE,
        &mut cfg.layer_mut(Layer::Foreground).scale,
    );

    match cfg.validate() {
        Ok(()) => cfg,
        Err(e) => {
            log::warn!("[config] {}; using defaults", e);
            images
        }
    }
}
