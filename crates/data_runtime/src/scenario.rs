//! Scripted input scenarios for headless runs (`tools/sim-harness`).

use anyhow::{Context, Result, ensure};
use serde::Deserialize;
use std::path::Path;

fn default_dt_ms() -> f64 {
    1000.0 / 60.0
}

#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub name: String,
    /// Initial viewport `[width, height]`.
    pub viewport: [f32; 2],
    #[serde(default = "default_dt_ms")]
    pub dt_ms: f64,
    pub frames: u32,
    #[serde(default)]
    pub joystick: bool,
    #[serde(default)]
    pub events: Vec<ScenarioEvent>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ScenarioEvent {
    pub at_ms: f64,
    #[serde(flatten)]
    pub kind: EventKind,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventKind {
    KeyDown { code: String },
    KeyUp { code: String },
    Joystick { x: f32, y: f32 },
    JoystickEnd,
    Resize { width: f32, height: f32 },
}

impl Scenario {
    /// Parse and sanity-check a scenario document.
    pub fn from_json(txt: &str) -> Result<Self> {
        let mut scen: Scenario = serde_json::from_str(txt).context("parse scenario json")?;
        ensure!(scen.dt_ms > 0.0, "scenario `{}`: dt_ms must be positive", scen.name);
        ensure!(
            scen.viewport.iter().all(|v| *v > 0.0),
            "scenario `{}`: viewport must be non-zero",
            scen.name
        );
        scen.events.sort_by(|a, b| a.at_ms.total_cmp(&b.at_ms));
        Ok(scen)
    }

    /// Total simulated time.
    #[must_use]
    pub fn duration_ms(&self) -> f64 {
        self.dt_ms * f64::from(self.frames)
    }
}

pub fn load_scenario(path: &Path) -> Result<Scenario> {
    let txt =
        std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    Scenario::from_json(&txt).with_context(|| format!("scenario {}", path.display()))
}
