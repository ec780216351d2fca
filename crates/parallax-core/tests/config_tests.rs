// Configuration defaults and validation.

use parallax_core::*;
use std::time::Duration;

#[test]
fn defaults_are_valid() {
    let cfg = ParallaxConfig::default();
    assert_eq!(cfg.validate(), Ok(()));
    assert_eq!(cfg.max_offset, 30.0);
    assert_eq!(cfg.max_angle_x, 40.0);
    assert_eq!(cfg.max_angle_y, 30.0);
    assert_eq!(cfg.transition, Duration::from_millis(80));
}

#[test]
fn with_images_keeps_default_tuning() {
    let cfg = ParallaxConfig::with_images("back.png", "mid.png", "fore.png");
    assert_eq!(cfg.layer(Layer::Background).image, "back.png");
    assert_eq!(cfg.layer(Layer::Middle).image, "mid.png");
    assert_eq!(cfg.layer(Layer::Foreground).image, "fore.png");
    assert_eq!(cfg.background.parallax_factor, BACKGROUND_FACTOR);
    assert_eq!(cfg.foreground.scale, FOREGROUND_SCALE);
}

#[test]
fn rejects_bad_values() {
    let mut cfg = ParallaxConfig::default();
    cfg.max_offset = -1.0;
    assert_eq!(
        cfg.validate(),
        Err(ConfigError::Negative {
            field: "max_offset",
            value: -1.0
        })
    );

    let mut cfg = ParallaxConfig::default();
    cfg.layer_mut(Layer::Middle).scale = 0.0;
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::NotPositive {
            field: "middle.scale",
            ..
        })
    ));

    let mut cfg = ParallaxConfig::default();
    cfg.max_angle_y = f32::NAN;
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::NotFinite {
            field: "max_angle_y",
            ..
        })
    ));

    let mut cfg = ParallaxConfig::default();
    cfg.transition = Duration::ZERO;
    assert_eq!(cfg.validate(), Err(ConfigError::ZeroTransition));
}

#[test]
fn error_messages_name_the_field() {
    let err = ConfigError::NotPositive {
        field: "perspective",
        value: 0.0,
    };
    assert_eq!(err.to_string(), "perspective must be greater than zero, got 0");
}

#[test]
fn layer_order_and_direction() {
    let order: Vec<usize> = Layer::ALL.iter().map(|l| l.index()).collect();
    assert_eq!(order, vec![0, 1, 2]);
    assert_eq!(Layer::Background.direction(), -1.0);
    assert_eq!(Layer::Middle.direction(), 1.0);
    assert_eq!(Layer::Foreground.name(), "foreground");
}
