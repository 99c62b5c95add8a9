//! Animation actions, their playback descriptors, and the playback seam.

use std::fmt;

use thiserror::Error;

/// Semantic action the character can play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Idle,
    Walk,
    Run,
    Jump,
    Hover,
    Spawn,
}

impl Action {
    pub const ALL: [Action; 6] = [
        Action::Idle,
        Action::Walk,
        Action::Run,
        Action::Jump,
        Action::Hover,
        Action::Spawn,
    ];

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Action::Idle => "idle",
            Action::Walk => "walk",
            Action::Run => "run",
            Action::Jump => "jump",
            Action::Hover => "hover",
            Action::Spawn => "spawn",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Playback configuration for one action.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationDesc {
    /// Clip name inside the skeleton data.
    pub name: String,
    pub looping: bool,
    pub time_scale: f32,
}

impl AnimationDesc {
    #[must_use]
    pub fn looped(name: &str) -> Self {
        Self {
            name: name.to_string(),
            looping: true,
            time_scale: 1.0,
        }
    }

    #[must_use]
    pub fn once(name: &str) -> Self {
        Self {
            name: name.to_string(),
            looping: false,
            time_scale: 1.0,
        }
    }

    #[must_use]
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }
}

/// Action → descriptor table. Immutable once the controller owns it.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationMap {
    pub idle: AnimationDesc,
    pub walk: AnimationDesc,
    pub run: AnimationDesc,
    pub jump: AnimationDesc,
    pub hover: AnimationDesc,
    pub spawn: AnimationDesc,
}

impl Default for AnimationMap {
    fn default() -> Self {
        Self {
            idle: AnimationDesc::looped("idle"),
            walk: AnimationDesc::looped("walk"),
            run: AnimationDesc::looped("run"),
            jump: AnimationDesc::once("jump").with_time_scale(1.5),
            hover: AnimationDesc::looped("hoverboard"),
            spawn: AnimationDesc::once("portal"),
        }
    }
}

impl AnimationMap {
    #[must_use]
    pub fn get(&self, action: Action) -> &AnimationDesc {
        match action {
            Action::Idle => &self.idle,
            Action::Walk => &self.walk,
            Action::Run => &self.run,
            Action::Jump => &self.jump,
            Action::Hover => &self.hover,
            Action::Spawn => &self.spawn,
        }
    }

    pub fn get_mut(&mut self, action: Action) -> &mut AnimationDesc {
        match action {
            Action::Idle => &mut self.idle,
            Action::Walk => &mut self.walk,
            Action::Run => &mut self.run,
            Action::Jump => &mut self.jump,
            Action::Hover => &mut self.hover,
            Action::Spawn => &mut self.spawn,
        }
    }

    /// Action whose clip is `name`, if any.
    #[must_use]
    pub fn action_for(&self, name: &str) -> Option<Action> {
        Action::ALL.into_iter().find(|a| self.get(*a).name == name)
    }
}

/// Playback handle of the skeletal animation runtime (single track).
pub trait AnimationPlayer {
    fn has_animation(&self, name: &str) -> bool;
    /// Replace the current track entry.
    fn set_animation(&mut self, name: &str, looping: bool);
    /// Time scale of the current track entry.
    fn set_time_scale(&mut self, time_scale: f32);
    fn current_name(&self) -> Option<&str>;
    /// True once the current entry has played through its clip once.
    fn is_complete(&self) -> bool;
    /// Cross-fade applied between consecutive entries.
    fn set_default_mix(&mut self, seconds: f32);
    /// Advance playback. Players driven by their own host ignore this.
    fn update(&mut self, _dt: f32) {}
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ControllerError {
    #[error("skeleton has no animation `{name}` (needed for {action})")]
    MissingAnimation { action: Action, name: String },
}

/// Check every action resolves to a clip the player knows.
pub fn validate<P: AnimationPlayer + ?Sized>(
    player: &P,
    map: &AnimationMap,
) -> Result<(), ControllerError> {
    for action in Action::ALL {
        let desc = map.get(action);
        if !player.has_animation(&desc.name) {
            return Err(ControllerError::MissingAnimation {
                action,
                name: desc.name.clone(),
            });
        }
    }
    Ok(())
}
