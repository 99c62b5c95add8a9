//! Spineboy clip table from data/config/spineboy_animations.toml with
//! optional env overrides of clip names.

use crate::loader::{env_parse, load_toml_or_default};
use anyhow::Result;
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct ClipCfg {
    pub name: Option<String>,
    pub looping: Option<bool>,
    pub time_scale: Option<f32>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct SpineboyAnimCfg {
    /// Cross-fade between entries, seconds.
    pub default_mix: Option<f32>,
    pub idle: Option<ClipCfg>,
    pub walk: Option<ClipCfg>,
    pub run: Option<ClipCfg>,
    pub jump: Option<ClipCfg>,
    pub hover: Option<ClipCfg>,
    pub spawn: Option<ClipCfg>,
    /// Clip durations in seconds, keyed by clip name.
    #[serde(default)]
    pub clips: BTreeMap<String, f32>,
}

impl SpineboyAnimCfg {
    /// Clip config for an action key (`idle`, `walk`, ...).
    #[must_use]
    pub fn clip(&self, action: &str) -> Option<&ClipCfg> {
        match action {
            "idle" => self.idle.as_ref(),
            "walk" => self.walk.as_ref(),
            "run" => self.run.as_ref(),
            "jump" => self.jump.as_ref(),
            "hover" => self.hover.as_ref(),
            "spawn" => self.spawn.as_ref(),
            _ => None,
        }
    }

    fn clip_slot(&mut self, action: &str) -> Option<&mut Option<ClipCfg>> {
        match action {
            "idle" => Some(&mut self.idle),
            "walk" => Some(&mut self.walk),
            "run" => Some(&mut self.run),
            "jump" => Some(&mut self.jump),
            "hover" => Some(&mut self.hover),
            "spawn" => Some(&mut self.spawn),
            _ => None,
        }
    }
}

pub fn load_default() -> Result<SpineboyAnimCfg> {
    let mut cfg: SpineboyAnimCfg = load_toml_or_default("config/spineboy_animations.toml")?;
    for action in ["idle", "walk", "run", "jump", "hover", "spawn"] {
        let key = format!("SPINEBOY_ANIM_{}", action.to_ascii_uppercase());
        if let Ok(name) = std::env::var(&key) {
            if let Some(slot) = cfg.clip_slot(action) {
                slot.get_or_insert_with(ClipCfg::default).name = Some(name);
            }
        }
    }
    if let Some(mix) = env_parse("SPINEBOY_ANIM_MIX") {
        cfg.default_mix = Some(mix);
    }
    Ok(cfg)
}
