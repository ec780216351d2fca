//! Tilt to per-layer offsets and composite rotation angles.

use crate::config::{Layer, ParallaxConfig};
use crate::tilt::TiltVector;
use glam::Vec2;

/// Rotation for one axis: the tilt component clamped to [-1, 1] and scaled
/// to the axis' maximum angle in degrees.
#[inline]
pub fn axis_angle(tilt: f32, max_angle_deg: f32) -> f32 {
    tilt.clamp(-1.0, 1.0) * max_angle_deg
}

/// Offset in pixels for one layer.
#[inline]
pub fn layer_offset(cfg: &ParallaxConfig, layer: Layer, tilt: &TiltVector) -> Vec2 {
    let k = layer.direction() * cfg.max_offset * cfg.layer(layer).parallax_factor;
    Vec2::new(tilt.x as f32, tilt.y as f32) * k
}

/// Everything the renderer needs from one tilt sample.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ParallaxFrame {
    /// Pixel offsets indexed by [`Layer::index`].
    pub offsets: [Vec2; 3],
    /// Degrees about the horizontal axis, driven by forward/back tilt.
    pub rotation_x: f32,
    /// Degrees about the vertical axis, driven by left/right tilt.
    pub rotation_y: f32,
}

impl ParallaxFrame {
    pub const NEUTRAL: Self = Self {
        offsets: [Vec2::ZERO; 3],
        rotation_x: 0.0,
        rotation_y: 0.0,
    };

    pub fn compute(cfg: &ParallaxConfig, tilt: &TiltVector) -> Self {
        let mut offsets = [Vec2::ZERO; 3];
        for layer in Layer::ALL {
            offsets[layer.index()] = layer_offset(cfg, layer, tilt);
        }
        Self {
            offsets,
            rotation_x: axis_angle(tilt.y as f32, cfg.max_angle_x),
            rotation_y: axis_angle(tilt.x as f32, cfg.max_angle_y),
        }
    }

    #[inline]
    pub fn offset(&self, layer: Layer) -> Vec2 {
        self.offsets[layer.index()]
    }

    pub fn lerp(&self, to: &Self, t: f32) -> Self {
        Self {
            offsets: std::array::from_fn(|i| self.offsets[i].lerp(to.offsets[i], t)),
            rotation_x: self.rotation_x + (to.rotation_x - self.rotation_x) * t,
            rotation_y: self.rotation_y + (to.rotation_y - self.rotation_y) * t,
        }
    }
}
