use approx::assert_relative_eq;
use client_core::{Direction, MotionState};
use client_runtime::parallax::{
    LayerTextures, ParallaxConfig, ParallaxDriver, layer_metrics, scroll_speed,
};
use glam::Vec2;

/// Tall enough that the platform is drawn at texture size (scale 1).
fn unit_scale_driver() -> ParallaxDriver {
    let d = ParallaxDriver::new(
        Vec2::new(1280.0, 2000.0),
        LayerTextures::default(),
        ParallaxConfig::default(),
    );
    assert_relative_eq!(d.metrics().scale, 1.0);
    d
}

fn walking(direction: Direction) -> MotionState {
    MotionState {
        walk: true,
        direction,
        ..Default::default()
    }
}

#[test]
fn hover_speed_beats_run() {
    let cfg = ParallaxConfig::default();
    let m = MotionState {
        walk: true,
        run: true,
        hover: true,
        ..Default::default()
    };
    assert_relative_eq!(scroll_speed(&m, &cfg), 7.5);
    let m = MotionState {
        hover: false,
        ..m
    };
    assert_relative_eq!(scroll_speed(&m, &cfg), 3.75);
    assert_relative_eq!(scroll_speed(&MotionState::default(), &cfg), 1.25);
}

#[test]
fn standing_still_never_scrolls() {
    let mut d = unit_scale_driver();
    d.set_position_x(12.0);
    let idle = MotionState {
        walk: false,
        run: true,
        hover: true,
        direction: Direction::Left,
        ..Default::default()
    };
    for _ in 0..30 {
        assert!(!d.advance(&idle));
    }
    assert_relative_eq!(d.position_x(), 12.0);
}

#[test]
fn one_walk_tick_moves_by_base_speed_and_fans_out() {
    let mut d = unit_scale_driver();
    assert!(d.advance(&walking(Direction::Right)));
    assert_relative_eq!(d.position_x(), -1.25);
    assert_relative_eq!(d.background().tile_offset.x, -0.125);
    assert_relative_eq!(d.midground().tile_offset.x, -0.3125);
    assert_relative_eq!(d.platform().tile_offset.x, -1.25);
}

#[test]
fn scroll_step_follows_layer_scale() {
    let mut d = ParallaxDriver::new(
        Vec2::new(800.0, 600.0),
        LayerTextures::default(),
        ParallaxConfig::default(),
    );
    let scale = d.metrics().scale;
    assert_relative_eq!(scale, 240.0 / 413.0, epsilon = 1e-6);
    let run_left = MotionState {
        run: true,
        ..walking(Direction::Left)
    };
    d.advance(&run_left);
    assert_relative_eq!(d.position_x(), 3.75 * scale, epsilon = 1e-5);
}

#[test]
fn resize_recomputes_metrics_before_layout() {
    let mut d = unit_scale_driver();
    let m = d.resize(Vec2::new(640.0, 480.0));
    let expect = layer_metrics(480.0, 413.0, &ParallaxConfig::default());
    assert_eq!(m, expect);
    assert_eq!(d.metrics(), expect);
    assert_relative_eq!(d.platform().size.y, expect.floor_height);
    assert_relative_eq!(d.platform().tile_scale.x, expect.scale);
    assert_relative_eq!(d.background().size.y, 864.0 * expect.scale, epsilon = 1e-3);
    assert_relative_eq!(d.midground().node.position.y, -expect.floor_height);
    assert_eq!(d.sky().size, Vec2::new(640.0, 480.0));
}

#[test]
fn resize_keeps_scroll_position() {
    let mut d = unit_scale_driver();
    d.advance(&walking(Direction::Right));
    d.resize(Vec2::new(640.0, 480.0));
    assert_relative_eq!(d.position_x(), -1.25);
}
