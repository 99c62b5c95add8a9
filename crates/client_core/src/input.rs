//! Logical controls and the key-state table shared by every input source.
//!
//! Keyboard and joystick both write into one `KeyTable`; the character
//! controller only ever reads it. Timestamps are host milliseconds from any
//! monotonic clock.

use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

/// Re-press window that marks a double tap (run trigger).
pub const DOUBLE_TAP_WINDOW_MS: f64 = 300.0;

/// Logical control driven by one or more physical inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Control {
    Up,
    Down,
    Left,
    Right,
    Jump,
}

impl Control {
    pub const ALL: [Control; 5] = [
        Control::Up,
        Control::Down,
        Control::Left,
        Control::Right,
        Control::Jump,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Control::Up => "up",
            Control::Down => "down",
            Control::Left => "left",
            Control::Right => "right",
            Control::Jump => "jump",
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownControl(pub String);

impl fmt::Display for UnknownControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown control `{}`", self.0)
    }
}

impl std::error::Error for UnknownControl {}

impl FromStr for Control {
    type Err = UnknownControl;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" => Ok(Control::Up),
            "down" => Ok(Control::Down),
            "left" => Ok(Control::Left),
            "right" => Ok(Control::Right),
            // `space` is what the scene historically called the jump control
            "jump" | "space" => Ok(Control::Jump),
            other => Err(UnknownControl(other.to_string())),
        }
    }
}

/// State of one logical control.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct KeyState {
    pub pressed: bool,
    /// Run trigger: set by a fast re-press or by joystick displacement.
    pub double_tap: bool,
    /// Last recorded release; `None` until the first release.
    pub timestamp_ms: Option<f64>,
}

impl KeyState {
    /// Key-down. Marks a double tap when the press lands inside `window_ms`
    /// of the last recorded release; an existing double tap is kept.
    pub fn press(&mut self, now_ms: f64, window_ms: f64) {
        self.pressed = true;
        let fast = self
            .timestamp_ms
            .is_some_and(|released| now_ms - released < window_ms);
        self.double_tap = self.double_tap || fast;
    }

    /// Key-up. Consumes a pending double tap; otherwise records this release
    /// as the baseline for the next measurement.
    pub fn release(&mut self, now_ms: f64) {
        self.pressed = false;
        if self.double_tap {
            self.double_tap = false;
        } else {
            self.timestamp_ms = Some(now_ms);
        }
    }
}

/// One `KeyState` per `Control`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct KeyTable {
    keys: [KeyState; 5],
}

impl KeyTable {
    #[must_use]
    pub fn get(&self, control: Control) -> &KeyState {
        &self.keys[control.slot()]
    }

    pub fn get_mut(&mut self, control: Control) -> &mut KeyState {
        &mut self.keys[control.slot()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Control, &KeyState)> {
        Control::ALL.into_iter().map(|c| (c, &self.keys[c.slot()]))
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl Index<Control> for KeyTable {
    type Output = KeyState;

    fn index(&self, control: Control) -> &KeyState {
        self.get(control)
    }
}

impl IndexMut<Control> for KeyTable {
    fn index_mut(&mut self, control: Control) -> &mut KeyState {
        self.get_mut(control)
    }
}
