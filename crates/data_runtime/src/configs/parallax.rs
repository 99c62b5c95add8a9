//! Parallax scene tuning loaded from data/config/parallax.toml.

use crate::loader::{env_parse, load_toml_or_default};
use anyhow::Result;
use serde::Deserialize;

/// Texture pixel sizes `[width, height]` of the scene layers.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct TexturesCfg {
    pub sky: Option<[f32; 2]>,
    pub background: Option<[f32; 2]>,
    pub midground: Option<[f32; 2]>,
    pub platform: Option<[f32; 2]>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ParallaxCfg {
    pub base_speed: Option<f32>,
    pub run_speed: Option<f32>,
    pub hover_speed: Option<f32>,
    pub background_ratio: Option<f32>,
    pub midground_ratio: Option<f32>,
    pub platform_ratio: Option<f32>,
    /// Platform height cap as a fraction of the viewport height.
    pub max_platform_fraction: Option<f32>,
    /// Walkable surface height as a fraction of the platform texture.
    pub floor_ratio: Option<f32>,
    /// Skeleton scale relative to the layer scale.
    pub character_scale_ratio: Option<f32>,
    pub resize_debounce_ms: Option<f64>,
    #[serde(default)]
    pub textures: TexturesCfg,
}

pub fn load_default() -> Result<ParallaxCfg> {
    let mut cfg: ParallaxCfg = load_toml_or_default("config/parallax.toml")?;
    if let Some(ms) = env_parse("RESIZE_DEBOUNCE_MS") {
        cfg.resize_debounce_ms = Some(ms);
    }
    Ok(cfg)
}
