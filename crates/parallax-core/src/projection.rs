//! Maps a [`ParallaxFrame`] onto the banner rectangle for the GPU.
//!
//! Local space is banner pixels centred on the banner with +Y up. Each layer
//! is drawn as a quad covering the banner; the fragment stage turns local
//! positions into image UVs so the offset, scaled image stays clipped to the
//! banner. The whole composite is then tilted by two perspective rotations.

use crate::config::{Layer, ParallaxConfig};
use crate::parallax::ParallaxFrame;
use glam::{Mat4, Vec2, Vec4};

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LayerUniforms {
    pub clip_from_local: [[f32; 4]; 4],
    pub half_size: [f32; 2],
    pub uv_scale: [f32; 2],
    pub uv_offset: [f32; 2],
    pub _pad: [f32; 2],
}

/// Size of an image scaled to cover `viewport` while keeping its aspect.
pub fn aspect_fill(image: Vec2, viewport: Vec2) -> Vec2 {
    if image.x <= 0.0 || image.y <= 0.0 {
        return viewport;
    }
    let s = (viewport.x / image.x).max(viewport.y / image.y);
    image * s
}

/// Perspective divide along the view axis for an eye `distance` pixels in
/// front of the plane.
#[inline]
fn perspective(distance: f32) -> Mat4 {
    Mat4::from_cols(
        Vec4::new(1.0, 0.0, 0.0, 0.0),
        Vec4::new(0.0, 1.0, 0.0, 0.0),
        Vec4::new(0.0, 0.0, 1.0, -1.0 / distance),
        Vec4::new(0.0, 0.0, 0.0, 1.0),
    )
}

/// Drops depth so the next effect sees a flat, projected image.
const FLATTEN: Mat4 = Mat4::from_cols(
    Vec4::new(1.0, 0.0, 0.0, 0.0),
    Vec4::new(0.0, 1.0, 0.0, 0.0),
    Vec4::ZERO,
    Vec4::new(0.0, 0.0, 0.0, 1.0),
);

/// Local banner pixels to local banner pixels (homogeneous), tilted about X
/// first and then about Y, each with its own perspective projection.
pub fn tilt_transform(frame: &ParallaxFrame, perspective_amount: f32, viewport: Vec2) -> Mat4 {
    let distance = viewport.x.max(viewport.y).max(1.0) / perspective_amount.max(f32::EPSILON);
    let p = perspective(distance);
    let about_x = FLATTEN * p * Mat4::from_rotation_x(frame.rotation_x.to_radians());
    let about_y = FLATTEN * p * Mat4::from_rotation_y(frame.rotation_y.to_radians());
    about_y * about_x
}

/// Local banner pixels to clip space.
pub fn clip_from_local(frame: &ParallaxFrame, perspective_amount: f32, viewport: Vec2) -> Mat4 {
    let half = (viewport * 0.5).max(Vec2::ONE);
    let ndc = Mat4::from_scale(glam::Vec3::new(1.0 / half.x, 1.0 / half.y, 1.0));
    ndc * tilt_transform(frame, perspective_amount, viewport)
}

/// Uniforms for one layer.
///
/// `viewport` is in device pixels; layer offsets are in CSS pixels and are
/// scaled by `pixel_ratio` (devicePixelRatio) to match.
pub fn layer_uniforms(
    frame: &ParallaxFrame,
    cfg: &ParallaxConfig,
    layer: Layer,
    image_size: Vec2,
    viewport: Vec2,
    pixel_ratio: f32,
) -> LayerUniforms {
    let pixel_ratio = if pixel_ratio.is_finite() && pixel_ratio > 0.0 {
        pixel_ratio
    } else {
        1.0
    };
    let drawn = aspect_fill(image_size, viewport) * cfg.layer(layer).scale;
    let uv_scale = Vec2::ONE / drawn.max(Vec2::splat(1e-3));
    // offsets are in screen orientation (+Y down), same as image UVs
    let uv_offset = Vec2::splat(0.5) - frame.offset(layer) * pixel_ratio * uv_scale;
    LayerUniforms {
        clip_from_local: clip_from_local(frame, cfg.perspective, viewport).to_cols_array_2d(),
        half_size: (viewport * 0.5).to_array(),
        uv_scale: uv_scale.to_array(),
        uv_offset: uv_offset.to_array(),
        _pad: [0.0; 2],
    }
}

/// Image UV sampled at a local banner position. Mirrors the fragment shader.
pub fn local_to_uv(uniforms: &LayerUniforms, local: Vec2) -> Vec2 {
    let screen = Vec2::new(local.x, -local.y);
    screen * Vec2::from(uniforms.uv_scale) + Vec2::from(uniforms.uv_offset)
}
