use client_core::{
    Action, AnimationMap, AnimationPlayer, CharacterController, Control, ControllerError, KeyTable,
};

/// Records every entry started; completion is driven by the test.
#[derive(Debug, Default)]
struct Recording {
    current: Option<String>,
    complete: bool,
    started: Vec<String>,
    missing: Option<&'static str>,
}

impl AnimationPlayer for Recording {
    fn has_animation(&self, name: &str) -> bool {
        self.missing != Some(name)
    }
    fn set_animation(&mut self, name: &str, _looping: bool) {
        self.current = Some(name.to_string());
        self.complete = false;
        self.started.push(name.to_string());
    }
    fn set_time_scale(&mut self, _time_scale: f32) {}
    fn current_name(&self) -> Option<&str> {
        self.current.as_deref()
    }
    fn is_complete(&self) -> bool {
        self.complete
    }
    fn set_default_mix(&mut self, _seconds: f32) {}
}

fn controller() -> CharacterController<Recording> {
    CharacterController::new(Recording::default(), AnimationMap::default()).expect("all clips")
}

fn keys(held: &[Control]) -> KeyTable {
    let mut k = KeyTable::default();
    for c in held {
        k[*c].pressed = true;
    }
    k
}

#[test]
fn missing_clip_fails_at_construction() {
    let player = Recording {
        missing: Some("hoverboard"),
        ..Default::default()
    };
    let err = CharacterController::new(player, AnimationMap::default()).unwrap_err();
    assert_eq!(
        err,
        ControllerError::MissingAnimation {
            action: Action::Hover,
            name: "hoverboard".into()
        }
    );
}

#[test]
fn repeated_request_does_not_restart() {
    let mut c = controller();
    let walking = keys(&[Control::Right]);
    for _ in 0..20 {
        c.update(&walking);
    }
    assert_eq!(c.player().started, vec!["walk".to_string()]);
    assert!(!c.play(Action::Walk));
    assert_eq!(c.player().started.len(), 1);
}

#[test]
fn jump_preempts_everything_until_complete() {
    let mut c = controller();
    let all = keys(&[Control::Right, Control::Down, Control::Jump]);
    c.update(&all);
    assert_eq!(c.current_action(), Some(Action::Jump));
    // jump released mid-air: still no other clip while it plays
    let no_jump = keys(&[Control::Right, Control::Down]);
    for _ in 0..5 {
        c.update(&no_jump);
        assert_eq!(c.current_action(), Some(Action::Jump));
    }
    c.player_mut().complete = true;
    c.update(&no_jump);
    assert_eq!(c.current_action(), Some(Action::Hover));
    assert_eq!(c.player().started, vec!["jump", "hoverboard"]);
}

#[test]
fn held_jump_after_completion_retriggers() {
    let mut c = controller();
    let jump = keys(&[Control::Jump]);
    c.update(&jump);
    c.player_mut().complete = true;
    // completed jump falls through to locomotion
    c.update(&jump);
    assert_eq!(c.current_action(), Some(Action::Idle));
    c.update(&jump);
    assert_eq!(c.current_action(), Some(Action::Jump));
}

#[test]
fn spawn_freezes_input_until_complete() {
    let mut c = controller();
    c.spawn();
    assert!(c.is_spawning());
    c.update(&keys(&[Control::Left]));
    assert!(c.is_spawning());
    assert!(!c.state().walk, "input ignored during spawn");
    c.player_mut().complete = true;
    assert!(!c.is_spawning());
    c.update(&keys(&[Control::Left]));
    assert_eq!(c.current_action(), Some(Action::Walk));
    assert_eq!(c.direction(), client_core::Direction::Left);
}

#[test]
fn run_is_sticky_through_the_controller() {
    let mut c = controller();
    let mut k = keys(&[Control::Right]);
    k[Control::Right].double_tap = true;
    c.update(&k);
    assert_eq!(c.current_action(), Some(Action::Run));
    k[Control::Right].double_tap = false;
    c.update(&k);
    assert_eq!(c.current_action(), Some(Action::Run));
    c.update(&KeyTable::default());
    assert_eq!(c.current_action(), Some(Action::Idle));
}
