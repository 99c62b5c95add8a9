use client_core::{Control, InputAggregator};

#[test]
fn slow_presses_never_double_tap() {
    let mut input = InputAggregator::default();
    let mut t = 0.0;
    for _ in 0..10 {
        input.key_down("KeyD", t);
        assert!(!input.key(Control::Right).double_tap, "press at {t}ms");
        t += 120.0;
        input.key_up("KeyD", t);
        t += 300.0;
    }
    assert!(!input.key(Control::Right).double_tap);
}

#[test]
fn fast_repress_sets_flag_and_next_release_consumes_it() {
    let mut input = InputAggregator::default();
    input.key_down("ArrowLeft", 1_000.0);
    input.key_up("ArrowLeft", 1_080.0);
    input.key_down("ArrowLeft", 1_379.0);
    assert!(input.key(Control::Left).double_tap, "299ms after release");
    // held for a long time: flag persists
    assert!(input.key(Control::Left).pressed);
    input.key_up("ArrowLeft", 5_000.0);
    assert!(!input.key(Control::Left).double_tap);
    assert!(!input.key(Control::Left).pressed);
}

#[test]
fn exactly_window_apart_is_not_a_double_tap() {
    let mut input = InputAggregator::default();
    input.key_down("KeyA", 0.0);
    input.key_up("KeyA", 100.0);
    input.key_down("KeyA", 400.0);
    assert!(!input.key(Control::Left).double_tap);
}

#[test]
fn consuming_release_keeps_old_baseline() {
    let mut input = InputAggregator::default();
    input.key_down("KeyD", 0.0);
    input.key_up("KeyD", 100.0);
    input.key_down("KeyD", 200.0); // double tap
    input.key_up("KeyD", 250.0); // consumes, baseline stays at 100
    input.key_down("KeyD", 450.0); // 350ms after the baseline
    assert!(!input.key(Control::Right).double_tap);
    assert_eq!(input.key(Control::Right).timestamp_ms, Some(100.0));
}

#[test]
fn wasd_and_arrows_feed_the_same_control() {
    let mut input = InputAggregator::default();
    input.key_down("KeyD", 0.0);
    input.key_up("ArrowRight", 50.0);
    input.key_down("ArrowRight", 150.0);
    assert!(input.key(Control::Right).double_tap);
    assert_eq!(input.key_down("KeyZ", 160.0), None);
}
