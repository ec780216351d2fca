// Tilt to offset/angle mapping.

use parallax_core::*;

fn tilt(x: f64, y: f64) -> TiltVector {
    TiltVector { x, y, z: -1.0 }
}

#[test]
fn axis_angle_scales_and_clamps() {
    assert!((axis_angle(0.5, 30.0) - 15.0).abs() < 1e-6);
    assert!((axis_angle(2.0, 30.0) - 30.0).abs() < 1e-6);
    assert!((axis_angle(-7.0, 30.0) + 30.0).abs() < 1e-6);
    assert_eq!(axis_angle(0.0, 40.0), 0.0);
}

#[test]
fn rotations_use_the_crossed_axes() {
    let cfg = ParallaxConfig::default();
    let frame = ParallaxFrame::compute(&cfg, &tilt(0.5, -0.25));
    // forward/back tilt (y) rotates about X, left/right tilt (x) about Y
    assert!((frame.rotation_x - (-0.25 * MAX_ANGLE_X_DEG)).abs() < 1e-5);
    assert!((frame.rotation_y - 0.5 * MAX_ANGLE_Y_DEG).abs() < 1e-5);
}

#[test]
fn out_of_range_tilt_clamps_rotation_but_not_offset() {
    let cfg = ParallaxConfig::default();
    let frame = ParallaxFrame::compute(&cfg, &tilt(2.0, 0.0));
    assert!((frame.rotation_y - cfg.max_angle_y).abs() < 1e-5);
    let fg = frame.offset(Layer::Foreground);
    assert!((fg.x - 2.0 * cfg.max_offset).abs() < 1e-4);
}

#[test]
fn background_moves_against_the_other_layers() {
    let cfg = ParallaxConfig::default();
    for &(x, y) in &[(0.3, 0.1), (-0.6, 0.4), (0.05, -0.9)] {
        let frame = ParallaxFrame::compute(&cfg, &tilt(x, y));
        let bg = frame.offset(Layer::Background);
        for layer in [Layer::Middle, Layer::Foreground] {
            let o = frame.offset(layer);
            assert!(bg.x * o.x < 0.0, "x sign for {layer:?} at ({x}, {y})");
            assert!(bg.y * o.y < 0.0, "y sign for {layer:?} at ({x}, {y})");
        }
    }
}

#[test]
fn offsets_stay_within_layer_budget() {
    let cfg = ParallaxConfig::default();
    let steps = [-1.0, -0.7, -0.2, 0.0, 0.35, 0.8, 1.0];
    for &x in &steps {
        for &y in &steps {
            let frame = ParallaxFrame::compute(&cfg, &tilt(x, y));
            for layer in Layer::ALL {
                let limit = cfg.max_offset * cfg.layer(layer).parallax_factor + 1e-4;
                let o = frame.offset(layer);
                assert!(o.x.abs() <= limit && o.y.abs() <= limit, "{layer:?} {o:?}");
            }
        }
    }
}

#[test]
fn offsets_follow_layer_factors() {
    let cfg = ParallaxConfig::default();
    let frame = ParallaxFrame::compute(&cfg, &tilt(1.0, 0.5));
    let bg = frame.offset(Layer::Background);
    let mid = frame.offset(Layer::Middle);
    let fg = frame.offset(Layer::Foreground);
    assert!((bg.x + 30.0 * 0.6).abs() < 1e-4);
    assert!((bg.y + 15.0 * 0.6).abs() < 1e-4);
    assert!((mid.x - 30.0 * 0.3).abs() < 1e-4);
    assert!((fg.x - 30.0).abs() < 1e-4);
    assert!((fg.y - 15.0).abs() < 1e-4);
}

#[test]
fn zero_tilt_is_neutral() {
    let cfg = ParallaxConfig::default();
    let frame = ParallaxFrame::compute(&cfg, &TiltVector::ZERO);
    assert_eq!(frame, ParallaxFrame::NEUTRAL);
}

#[test]
fn lerp_hits_endpoints() {
    let cfg = ParallaxConfig::default();
    let a = ParallaxFrame::NEUTRAL;
    let b = ParallaxFrame::compute(&cfg, &tilt(0.4, -0.4));
    assert_eq!(a.lerp(&b, 0.0), a);
    assert_eq!(a.lerp(&b, 1.0), b);
    let mid = a.lerp(&b, 0.5);
    assert!((mid.rotation_y - b.rotation_y * 0.5).abs() < 1e-5);
}
