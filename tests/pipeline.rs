//! End-to-end frame pipeline through the root re-exports.

use approx::assert_relative_eq;
use glam::Vec2;
use spineboy_adventure::client::{Action, Control, Direction};
use spineboy_adventure::runtime::{SceneConfig, SpineboyScene};

#[test]
fn shipped_config_drives_a_full_session() {
    let cfg = SceneConfig::load().expect("data/config");
    let mut scene = SpineboyScene::new(&cfg, Vec2::new(1280.0, 720.0)).expect("scene");
    let dt = 1.0 / 60.0;
    let mut now = 0.0_f64;
    let step = |scene: &mut SpineboyScene, n: u32, now: &mut f64| {
        for _ in 0..n {
            *now += 1000.0 / 60.0;
            scene.frame(dt, *now);
        }
    };

    step(&mut scene, 240, &mut now);
    assert_eq!(scene.current_action(), Some(Action::Idle));

    // KeyK is an extra jump binding in controls.toml
    assert_eq!(scene.key_down("KeyK", now), Some(Control::Jump));
    step(&mut scene, 1, &mut now);
    assert_eq!(scene.current_action(), Some(Action::Jump));
    scene.key_up("KeyK", now);
    step(&mut scene, 90, &mut now);
    assert_eq!(scene.current_action(), Some(Action::Idle));

    let scale = scene.metrics().scale;
    scene.key_down("ArrowLeft", now);
    step(&mut scene, 10, &mut now);
    assert_eq!(scene.direction(), Direction::Left);
    assert_relative_eq!(scene.scroll_x(), 10.0 * 1.25 * scale, epsilon = 1e-3);

    scene.dispose();
    step(&mut scene, 10, &mut now);
    assert_relative_eq!(scene.scroll_x(), 10.0 * 1.25 * scale, epsilon = 1e-3);
}
