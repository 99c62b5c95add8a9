//! Path resolution and raw reads under `data/`.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

/// Prefer the workspace `data/` so tests and tools can run from any crate.
#[must_use]
pub fn data_root() -> PathBuf {
    let here = Path::new(env!("CARGO_MANIFEST_DIR"));
    let ws = here.join("../../data");
    if ws.is_dir() { ws } else { here.join("data") }
}

/// Read a text file under `data/`.
pub fn read_text(rel: impl AsRef<Path>) -> Result<String> {
    let path = data_root().join(rel);
    fs::read_to_string(&path).with_context(|| format!("read data: {}", path.display()))
}

/// Parse `data/<rel>` as TOML, or fall back to `T::default()` when absent.
pub fn load_toml_or_default<T: DeserializeOwned + Default>(rel: impl AsRef<Path>) -> Result<T> {
    let path = data_root().join(rel.as_ref());
    if !path.is_file() {
        return Ok(T::default());
    }
    let txt = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    toml::from_str::<T>(&txt).with_context(|| format!("parse TOML {}", path.display()))
}

/// Parse an env var when it is set; unparsable values are ignored.
pub(crate) fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}
