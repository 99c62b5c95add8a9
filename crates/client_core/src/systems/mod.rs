//! Input sources and per-frame resolution helpers.
//!
//! Everything here is plain data in, plain data out; the controller and the
//! runtime wire it to a tick source.

pub mod anim_select;
pub mod joystick;
pub mod keyboard;
pub mod motion;
