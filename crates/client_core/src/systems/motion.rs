//! Motion resolution: key-state snapshot + previous motion → next motion.
//!
//! Pure and tick-free so the sticky rules can be tested frame by frame.

use crate::input::{Control, KeyTable};

/// Horizontal facing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    Left,
    #[default]
    Right,
}

impl Direction {
    #[must_use]
    pub fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }

    /// Positive (and zero) maps to `Right`.
    #[must_use]
    pub fn from_sign(v: f32) -> Self {
        if v < 0.0 {
            Direction::Left
        } else {
            Direction::Right
        }
    }
}

/// Controls the controller reads each frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlSnapshot {
    pub left: bool,
    pub right: bool,
    pub down: bool,
    pub jump: bool,
    /// Either horizontal control carries a double tap.
    pub run_intent: bool,
}

impl ControlSnapshot {
    #[must_use]
    pub fn from_keys(keys: &KeyTable) -> Self {
        Self {
            left: keys[Control::Left].pressed,
            right: keys[Control::Right].pressed,
            down: keys[Control::Down].pressed,
            jump: keys[Control::Jump].pressed,
            run_intent: keys[Control::Left].double_tap || keys[Control::Right].double_tap,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MotionState {
    pub walk: bool,
    /// Sticky while `walk` holds.
    pub run: bool,
    pub hover: bool,
    pub jump: bool,
    pub direction: Direction,
}

/// Resolve this frame's motion.
///
/// Rules:
/// - walk while either horizontal control is held.
/// - run latches on a run intent and stays latched until walking stops.
/// - hover and jump mirror their controls.
/// - left wins over right; with neither held the facing is kept.
#[must_use]
pub fn resolve(prev: MotionState, input: ControlSnapshot) -> MotionState {
    let walk = input.left || input.right;
    let direction = if input.left {
        Direction::Left
    } else if input.right {
        Direction::Right
    } else {
        prev.direction
    };
    MotionState {
        walk,
        run: walk && (prev.run || input.run_intent),
        hover: input.down,
        jump: input.jump,
        direction,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_needs_walk() {
        let out = resolve(
            MotionState::default(),
            ControlSnapshot {
                run_intent: true,
                ..Default::default()
            },
        );
        assert!(!out.walk && !out.run);
    }

    #[test]
    fn left_wins_when_both_held() {
        let out = resolve(
            MotionState::default(),
            ControlSnapshot {
                left: true,
                right: true,
                ..Default::default()
            },
        );
        assert_eq!(out.direction, Direction::Left);
    }

    #[test]
    fn facing_persists_without_horizontal_input() {
        let prev = MotionState {
            direction: Direction::Left,
            ..Default::default()
        };
        let out = resolve(
            prev,
            ControlSnapshot {
                down: true,
                ..Default::default()
            },
        );
        assert_eq!(out.direction, Direction::Left);
        assert!(out.hover && !out.walk);
    }

    #[test]
    fn direction_sign_roundtrip() {
        assert_eq!(Direction::from_sign(Direction::Left.sign()), Direction::Left);
        assert_eq!(Direction::from_sign(0.0), Direction::Right);
    }
}
