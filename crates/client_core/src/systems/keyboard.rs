//! Digital input source: physical key codes → logical controls.
//!
//! Codes are DOM `KeyboardEvent.code` strings (`KeyW`, `ArrowUp`, `Space`);
//! winit's `KeyCode` variant names use the same spelling.

use std::collections::HashMap;

use crate::input::{Control, KeyTable};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMap {
    bindings: HashMap<String, Control>,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::from_pairs([
            ("Space", Control::Jump),
            ("KeyW", Control::Up),
            ("ArrowUp", Control::Up),
            ("KeyA", Control::Left),
            ("ArrowLeft", Control::Left),
            ("KeyS", Control::Down),
            ("ArrowDown", Control::Down),
            ("KeyD", Control::Right),
            ("ArrowRight", Control::Right),
        ])
    }
}

impl KeyMap {
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, Control)>) -> Self {
        Self {
            bindings: pairs
                .into_iter()
                .map(|(code, control)| (code.to_string(), control))
                .collect(),
        }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Bind (or rebind) a code; returns the control it was bound to before.
    pub fn bind(&mut self, code: impl Into<String>, control: Control) -> Option<Control> {
        self.bindings.insert(code.into(), control)
    }

    #[must_use]
    pub fn lookup(&self, code: &str) -> Option<Control> {
        self.bindings.get(code).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Apply a key-down. Returns the control touched, `None` for unmapped codes.
pub fn key_down(
    map: &KeyMap,
    keys: &mut KeyTable,
    code: &str,
    now_ms: f64,
    window_ms: f64,
) -> Option<Control> {
    let control = map.lookup(code)?;
    keys[control].press(now_ms, window_ms);
    Some(control)
}

/// Apply a key-up. Returns the control touched, `None` for unmapped codes.
pub fn key_up(map: &KeyMap, keys: &mut KeyTable, code: &str, now_ms: f64) -> Option<Control> {
    let control = map.lookup(code)?;
    keys[control].release(now_ms);
    Some(control)
}
