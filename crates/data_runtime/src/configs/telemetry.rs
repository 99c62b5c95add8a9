//! Logging configuration loaded from data/config/telemetry.toml with env overrides.

use crate::loader::load_toml_or_default;
use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryCfg {
    pub log_level: Option<String>,
    /// Emit timestamps on each log line.
    pub timestamps: Option<bool>,
}

impl Default for TelemetryCfg {
    fn default() -> Self {
        Self {
            log_level: Some("info".to_string()),
            timestamps: Some(true),
        }
    }
}

impl TelemetryCfg {
    /// `env_logger` filter used when `RUST_LOG` is unset.
    #[must_use]
    pub fn default_filter(&self) -> String {
        let lvl = self.log_level.as_deref().unwrap_or("info");
        format!("{lvl},winit=warn")
    }
}

pub fn load_default() -> Result<TelemetryCfg> {
    let mut cfg: TelemetryCfg = load_toml_or_default("config/telemetry.toml")?;
    if let Ok(lvl) = std::env::var("LOG_LEVEL") {
        cfg.log_level = Some(lvl);
    }
    Ok(cfg)
}
