use crate::constants::*;
use std::time::Duration;
use thiserror::Error;

/// The three stacked layers, back to front.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    Background,
    Middle,
    Foreground,
}

impl Layer {
    /// Draw order: background first.
    pub const ALL: [Layer; 3] = [Layer::Background, Layer::Middle, Layer::Foreground];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Layer::Background => 0,
            Layer::Middle => 1,
            Layer::Foreground => 2,
        }
    }

    /// Background moves against the tilt, the other two move with it.
    #[inline]
    pub fn direction(self) -> f32 {
        match self {
            Layer::Background => -1.0,
            Layer::Middle | Layer::Foreground => 1.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Layer::Background => "background",
            Layer::Middle => "middle",
            Layer::Foreground => "foreground",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LayerConfig {
    /// Image reference understood by the front-end (a URL on the web).
    pub image: String,
    pub parallax_factor: f32,
    pub scale: f32,
}

impl LayerConfig {
    pub fn new(image: impl Into<String>, parallax_factor: f32, scale: f32) -> Self {
        Self {
            image: image.into(),
            parallax_factor,
            scale,
        }
    }
}

/// Static tuning for one parallax banner.
#[derive(Clone, Debug, PartialEq)]
pub struct ParallaxConfig {
    pub max_offset: f32,
    pub max_angle_x: f32,
    pub max_angle_y: f32,
    pub perspective: f32,
    pub transition: Duration,
    pub background: LayerConfig,
    pub middle: LayerConfig,
    pub foreground: LayerConfig,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            max_offset: MAX_OFFSET_PX,
            max_angle_x: MAX_ANGLE_X_DEG,
            max_angle_y: MAX_ANGLE_Y_DEG,
            perspective: PERSPECTIVE,
            transition: TRANSITION_DURATION,
            background: LayerConfig::new("", BACKGROUND_FACTOR, BACKGROUND_SCALE),
            middle: LayerConfig::new("", MIDDLE_FACTOR, MIDDLE_SCALE),
            foreground: LayerConfig::new("", FOREGROUND_FACTOR, FOREGROUND_SCALE),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f32 },
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },
    #[error("{field} must be greater than zero, got {value}")]
    NotPositive { field: &'static str, value: f32 },
    #[error("transition duration must be greater than zero")]
    ZeroTransition,
}

fn check_finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotFinite { field, value })
    }
}

fn check_non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    check_finite(field, value)?;
    if value < 0.0 {
        return Err(ConfigError::Negative { field, value });
    }
    Ok(())
}

fn check_positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    check_finite(field, value)?;
    if value <= 0.0 {
        return Err(ConfigError::NotPositive { field, value });
    }
    Ok(())
}

impl ParallaxConfig {
    /// Default tuning with the three image references filled in.
    pub fn with_images(
        background: impl Into<String>,
        middle: impl Into<String>,
        foreground: impl Into<String>,
    ) -> Self {
        let mut cfg = Self::default();
        cfg.background.image = background.into();
        cfg.middle.image = middle.into();
        cfg.foreground.image = foreground.into();
        cfg
    }

    #[inline]
    pub fn layer(&self, layer: Layer) -> &LayerConfig {
        match layer {
            Layer::Background => &self.background,
            Layer::Middle => &self.middle,
            Layer::Foreground => &self.foreground,
        }
    }

    #[inline]
    pub fn layer_mut(&mut self, layer: Layer) -> &mut LayerConfig {
        match layer {
            Layer::Background => &mut self.background,
            Layer::Middle => &mut self.middle,
            Layer::Foreground => &mut self.foreground,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_non_negative("max_offset", self.max_offset)?;
        check_non_negative("max_angle_x", self.max_angle_x)?;
        check_non_negative("max_angle_y", self.max_angle_y)?;
        check_positive("perspective", self.perspective)?;
        if self.transition.is_zero() {
            return Err(ConfigError::ZeroTransition);
        }
        check_non_negative("background.parallax_factor", self.background.parallax_factor)?;
        check_non_negative("middle.parallax_factor", self.middle.parallax_factor)?;
        check_non_negative("foreground.parallax_factor", self.foreground.parallax_factor)?;
        check_positive("background.scale", self.background.scale)?;
        check_positive("middle.scale", self.middle.scale)?;
        check_positive("foreground.scale", self.foreground.scale)?;
        Ok(())
    }
}
