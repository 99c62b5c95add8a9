//! Analog input source: on-screen joystick displacement → logical controls.
//!
//! Axis convention follows the joystick widget: `+x` right, `+y` up. Pushing
//! up holds the hover control (`Down`), pulling down holds `Jump`.

use crate::input::{Control, KeyTable};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JoystickConfig {
    /// Per-axis displacement that counts as holding a direction.
    pub move_threshold: f32,
    /// Horizontal displacement that promotes walking to running.
    pub run_threshold: f32,
}

impl Default for JoystickConfig {
    fn default() -> Self {
        Self {
            move_threshold: 10.0,
            run_threshold: 30.0,
        }
    }
}

/// Controls the joystick can hold, in `Joystick::held` order.
const DRIVEN: [Control; 4] = [Control::Left, Control::Right, Control::Down, Control::Jump];
/// Controls the joystick can mark as running, in `Joystick::running` order.
const RUN_SIDES: [Control; 2] = [Control::Left, Control::Right];

/// The stick only writes a control when its own view of it changes, so a
/// key the keyboard holds survives stick samples on the other axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Joystick {
    pub cfg: JoystickConfig,
    engaged: bool,
    held: [bool; 4],
    running: [bool; 2],
}

impl Joystick {
    #[must_use]
    pub fn new(cfg: JoystickConfig) -> Self {
        Self {
            cfg,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn engaged(&self) -> bool {
        self.engaged
    }

    /// Whether the stick itself currently holds `control`.
    #[must_use]
    pub fn holds(&self, control: Control) -> bool {
        DRIVEN
            .iter()
            .position(|c| *c == control)
            .is_some_and(|i| self.held[i])
    }

    /// Apply one displacement sample.
    pub fn on_move(&mut self, keys: &mut KeyTable, x: f32, y: f32) {
        let t = self.cfg.move_threshold;
        let run = self.cfg.run_threshold;
        self.engaged = true;

        let held = [x < -t, x > t, y > t, y < -t];
        for (i, c) in DRIVEN.into_iter().enumerate() {
            if held[i] != self.held[i] {
                keys[c].pressed = held[i];
            }
        }
        self.held = held;

        let running = [x < -run, x > run];
        for (i, c) in RUN_SIDES.into_iter().enumerate() {
            if running[i] != self.running[i] {
                keys[c].double_tap = running[i];
            }
        }
        self.running = running;
    }

    /// Stick released: drop what it was holding.
    pub fn on_end(&mut self, keys: &mut KeyTable) {
        if !self.engaged {
            return;
        }
        self.engaged = false;
        for (i, c) in DRIVEN.into_iter().enumerate() {
            if self.held[i] {
                keys[c].pressed = false;
            }
        }
        for (i, c) in RUN_SIDES.into_iter().enumerate() {
            if self.running[i] {
                keys[c].double_tap = false;
            }
        }
        self.held = [false; 4];
        self.running = [false; 2];
    }
}
