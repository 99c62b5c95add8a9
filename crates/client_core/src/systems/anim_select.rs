//! Locomotion animation priority.
//!
//! Jump is handled by the controller before this table because it pre-empts
//! everything until its one-shot clip completes.

use super::motion::MotionState;
use crate::animation::Action;

pub type Rule = (fn(&MotionState) -> bool, Action);

fn hovering(s: &MotionState) -> bool {
    s.hover
}

fn running(s: &MotionState) -> bool {
    s.run
}

fn walking(s: &MotionState) -> bool {
    s.walk
}

fn always(_: &MotionState) -> bool {
    true
}

/// Evaluated top to bottom; first match wins.
pub const LOCOMOTION: [Rule; 4] = [
    (hovering, Action::Hover),
    (running, Action::Run),
    (walking, Action::Walk),
    (always, Action::Idle),
];

#[must_use]
pub fn pick_locomotion(state: &MotionState) -> Action {
    LOCOMOTION
        .iter()
        .find(|(pred, _)| pred(state))
        .map_or(Action::Idle, |(_, action)| *action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_beats_run_beats_walk() {
        let mut s = MotionState {
            walk: true,
            run: true,
            hover: true,
            ..Default::default()
        };
        assert_eq!(pick_locomotion(&s), Action::Hover);
        s.hover = false;
        assert_eq!(pick_locomotion(&s), Action::Run);
        s.run = false;
        assert_eq!(pick_locomotion(&s), Action::Walk);
        s.walk = false;
        assert_eq!(pick_locomotion(&s), Action::Idle);
    }

    #[test]
    fn jump_flag_alone_is_not_locomotion() {
        let s = MotionState {
            jump: true,
            ..Default::default()
        };
        assert_eq!(pick_locomotion(&s), Action::Idle);
    }
}
