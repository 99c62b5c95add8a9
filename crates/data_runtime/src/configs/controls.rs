//! Input bindings and thresholds loaded from data/config/controls.toml.

use crate::loader::{env_parse, load_toml_or_default};
use anyhow::Result;
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Deserialize)]
pub struct ControlsCfg {
    pub double_tap_window_ms: Option<f64>,
    pub joystick_enabled: Option<bool>,
    pub joystick_move_threshold: Option<f32>,
    pub joystick_run_threshold: Option<f32>,
    /// Extra/overriding bindings: key code (`KeyJ`) → control (`jump`).
    #[serde(default)]
    pub bindings: BTreeMap<String, String>,
}

impl Default for ControlsCfg {
    fn default() -> Self {
        Self {
            double_tap_window_ms: Some(300.0),
            joystick_enabled: Some(false),
            joystick_move_threshold: Some(10.0),
            joystick_run_threshold: Some(30.0),
            bindings: BTreeMap::new(),
        }
    }
}

pub fn load_default() -> Result<ControlsCfg> {
    let mut cfg: ControlsCfg = load_toml_or_default("config/controls.toml")?;
    if let Some(ms) = env_parse("DOUBLE_TAP_MS") {
        cfg.double_tap_window_ms = Some(ms);
    }
    if let Some(on) = env_parse("JOYSTICK") {
        cfg.joystick_enabled = Some(on);
    }
    Ok(cfg)
}
