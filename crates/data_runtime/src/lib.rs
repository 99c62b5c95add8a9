//! data_runtime: configuration schemas and loaders.
//!
//! Every config lives under `data/config/*.toml`. Fields are optional; code
//! defaults fill the gaps and a few env vars override for quick tuning.

pub mod loader;
pub mod scenario;
pub mod configs {
    pub mod controls;
    pub mod parallax;
    pub mod spineboy_animations;
    pub mod telemetry;
}
