//! Input aggregator: keyboard + optional joystick into one key-state table.
//!
//! Events may arrive at any time between ticks; they only ever mutate the
//! table. After `dispose` both sources are detached and events are dropped.

use crate::input::{Control, DOUBLE_TAP_WINDOW_MS, KeyState, KeyTable};
use crate::systems::joystick::{Joystick, JoystickConfig};
use crate::systems::keyboard::{self, KeyMap};

#[derive(Clone, Debug, PartialEq)]
pub struct InputConfig {
    pub keymap: KeyMap,
    pub double_tap_window_ms: f64,
    /// `None` leaves the analog source off.
    pub joystick: Option<JoystickConfig>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            keymap: KeyMap::default(),
            double_tap_window_ms: DOUBLE_TAP_WINDOW_MS,
            joystick: None,
        }
    }
}

#[derive(Debug)]
pub struct InputAggregator {
    keys: KeyTable,
    keymap: KeyMap,
    window_ms: f64,
    joystick: Option<Joystick>,
    attached: bool,
}

impl Default for InputAggregator {
    fn default() -> Self {
        Self::new(InputConfig::default())
    }
}

impl InputAggregator {
    #[must_use]
    pub fn new(cfg: InputConfig) -> Self {
        Self {
            keys: KeyTable::default(),
            keymap: cfg.keymap,
            window_ms: cfg.double_tap_window_ms,
            joystick: cfg.joystick.map(Joystick::new),
            attached: true,
        }
    }

    #[must_use]
    pub fn keys(&self) -> &KeyTable {
        &self.keys
    }

    #[must_use]
    pub fn key(&self, control: Control) -> &KeyState {
        self.keys.get(control)
    }

    #[must_use]
    pub fn has_joystick(&self) -> bool {
        self.joystick.is_some()
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Keyboard key-down by code. Returns the control it drove, if any.
    pub fn key_down(&mut self, code: &str, now_ms: f64) -> Option<Control> {
        if !self.attached {
            return None;
        }
        keyboard::key_down(&self.keymap, &mut self.keys, code, now_ms, self.window_ms)
    }

    /// Keyboard key-up by code. Returns the control it drove, if any.
    pub fn key_up(&mut self, code: &str, now_ms: f64) -> Option<Control> {
        if !self.attached {
            return None;
        }
        keyboard::key_up(&self.keymap, &mut self.keys, code, now_ms)
    }

    /// Joystick displacement sample; ignored when no joystick is configured.
    pub fn joystick_move(&mut self, x: f32, y: f32) {
        if !self.attached {
            return;
        }
        if let Some(j) = self.joystick.as_mut() {
            j.on_move(&mut self.keys, x, y);
        }
    }

    pub fn joystick_end(&mut self) {
        if !self.attached {
            return;
        }
        if let Some(j) = self.joystick.as_mut() {
            j.on_end(&mut self.keys);
        }
    }

    /// Detach both sources. Held controls stay as they were; nothing will
    /// update them again.
    pub fn dispose(&mut self) {
        if !self.attached {
            return;
        }
        self.attached = false;
        self.joystick = None;
        log::info!("input aggregator detached");
    }
}
