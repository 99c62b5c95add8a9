use client_core::systems::joystick::JoystickConfig;
use client_core::{Control, InputAggregator, InputConfig};

fn with_stick() -> InputAggregator {
    InputAggregator::new(InputConfig {
        joystick: Some(JoystickConfig::default()),
        ..Default::default()
    })
}

#[test]
fn far_right_promotes_to_run() {
    let mut input = with_stick();
    input.joystick_move(40.0, 0.0);
    assert!(input.key(Control::Right).pressed);
    assert!(input.key(Control::Right).double_tap);
}

#[test]
fn easing_off_clears_run_but_keeps_walking() {
    let mut input = with_stick();
    input.joystick_move(40.0, 0.0);
    input.joystick_move(20.0, 0.0);
    assert!(input.key(Control::Right).pressed);
    assert!(!input.key(Control::Right).double_tap);
}

#[test]
fn reversing_moves_run_to_the_other_side() {
    let mut input = with_stick();
    input.joystick_move(40.0, 0.0);
    input.joystick_move(-40.0, 0.0);
    assert!(!input.key(Control::Right).pressed);
    assert!(!input.key(Control::Right).double_tap);
    assert!(input.key(Control::Left).pressed);
    assert!(input.key(Control::Left).double_tap);
}

#[test]
fn vertical_axis_convention() {
    let mut input = with_stick();
    input.joystick_move(0.0, 11.0);
    assert!(input.key(Control::Down).pressed, "stick up hovers");
    input.joystick_move(0.0, -11.0);
    assert!(input.key(Control::Jump).pressed, "stick down jumps");
    assert!(!input.key(Control::Down).pressed);
    input.joystick_end();
    assert!(!input.key(Control::Jump).pressed);
}

#[test]
fn keyboard_hold_survives_vertical_stick() {
    let mut input = with_stick();
    input.key_down("KeyD", 0.0);
    input.joystick_move(0.0, 20.0);
    assert!(input.key(Control::Right).pressed, "KeyD still held");
    assert!(input.key(Control::Down).pressed);
    input.joystick_end();
    assert!(input.key(Control::Right).pressed);
    assert!(!input.key(Control::Down).pressed);
    input.key_up("KeyD", 100.0);
    assert!(!input.key(Control::Right).pressed);
}

#[test]
fn stick_leaving_threshold_releases_what_it_held() {
    let mut input = with_stick();
    input.joystick_move(25.0, 0.0);
    assert!(input.key(Control::Right).pressed);
    input.joystick_move(5.0, 0.0);
    assert!(!input.key(Control::Right).pressed);
}
