//! Client glue for the spineboy scene: input state and the character controller.
//!
//! - `input` / `aggregator`: logical key-state table fed by keyboard and joystick.
//! - `systems`: pure per-frame helpers (motion resolve, animation priority, sources).
//! - `controller`: the character controller driving the animation player.

#![deny(warnings, clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::struct_excessive_bools
)]

pub mod aggregator;
pub mod animation;
pub mod controller;
pub mod input;
pub mod systems;
pub mod view;

pub use aggregator::{InputAggregator, InputConfig};
pub use animation::{Action, AnimationDesc, AnimationMap, AnimationPlayer, ControllerError};
pub use controller::CharacterController;
pub use input::{Control, KeyState, KeyTable};
pub use systems::motion::{Direction, MotionState};
