use client_core::Control;
use client_core::systems::keyboard::KeyMap;
use client_runtime::{SceneConfig, SpineboyScene};
use glam::Vec2;
use platform_winit::{key_code_name, window_title};
use winit::keyboard::{KeyCode, NativeKeyCode, PhysicalKey};

#[test]
fn winit_codes_match_default_bindings() {
    let map = KeyMap::default();
    let cases = [
        (KeyCode::Space, Control::Jump),
        (KeyCode::KeyW, Control::Up),
        (KeyCode::ArrowUp, Control::Up),
        (KeyCode::KeyA, Control::Left),
        (KeyCode::ArrowLeft, Control::Left),
        (KeyCode::KeyS, Control::Down),
        (KeyCode::ArrowDown, Control::Down),
        (KeyCode::KeyD, Control::Right),
        (KeyCode::ArrowRight, Control::Right),
    ];
    for (code, control) in cases {
        let name = key_code_name(PhysicalKey::Code(code)).expect("named code");
        assert_eq!(map.lookup(&name), Some(control), "{name}");
    }
}

#[test]
fn unidentified_keys_have_no_name() {
    let key = PhysicalKey::Unidentified(NativeKeyCode::Unidentified);
    assert_eq!(key_code_name(key), None);
}

#[test]
fn title_reports_animation_and_scroll() {
    let scene = SpineboyScene::new(&SceneConfig::default(), Vec2::new(800.0, 600.0)).unwrap();
    let title = window_title(&scene);
    assert!(title.contains("spawn"), "{title}");
    assert!(title.contains("x=0"), "{title}");
}
