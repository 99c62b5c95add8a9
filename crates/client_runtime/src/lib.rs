//! Client runtime for the spineboy scene.
//!
//! - `ticker`: single-threaded per-frame tick source with cancellable subscriptions.
//! - `clips`: built-in clip player implementing `client_core::AnimationPlayer`.
//! - `character`: controller bound to the ticker and the shared input table.
//! - `parallax`: scroll driver and its tick-driven scene wrapper.
//! - `resize`: deferred viewport changes.
//! - `replay`: headless playback of scripted input scenarios.
//! - `scene`: config assembly and startup/teardown of the whole scene.

#![deny(warnings, clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

pub mod character;
pub mod clips;
pub mod parallax;
pub mod replay;
pub mod resize;
pub mod scene;
pub mod ticker;

pub use character::CharacterRig;
pub use clips::ClipPlayer;
pub use parallax::{
    LayerMetrics, LayerTextures, MotionSource, ParallaxConfig, ParallaxDriver, ParallaxScene,
};
pub use replay::{AnimationChange, ReplayReport, replay};
pub use resize::ResizeDebouncer;
pub use scene::{SceneConfig, SpineboyScene, default_log_filter};
pub use ticker::{FrameListener, Subscription, Ticker};
