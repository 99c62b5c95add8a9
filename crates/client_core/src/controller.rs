//! Spineboy character controller.
//!
//! Each frame: key table → `MotionState` → exactly one animation request.
//! The controller owns two view nodes: `view` (placed by the scene) and an
//! inner directional node whose horizontal scale mirrors the skeleton.

use glam::Vec2;

use crate::animation::{Action, AnimationMap, AnimationPlayer, ControllerError, validate};
use crate::input::KeyTable;
use crate::systems::anim_select::pick_locomotion;
use crate::systems::motion::{ControlSnapshot, Direction, MotionState, resolve};
use crate::view::Node;

/// Cross-fade between consecutive clips.
pub const DEFAULT_MIX_S: f32 = 0.2;
/// Skeleton scale relative to the scene's layer scale.
pub const RIG_SCALE_RATIO: f32 = 0.32;

#[derive(Debug)]
pub struct CharacterController<P> {
    player: P,
    animations: AnimationMap,
    state: MotionState,
    view: Node,
    directional: Node,
    rig: Node,
    rig_scale_ratio: f32,
}

impl<P: AnimationPlayer> CharacterController<P> {
    /// Take ownership of the animation player after checking every action
    /// has a clip. A missing clip is a startup failure.
    pub fn new(player: P, animations: AnimationMap) -> Result<Self, ControllerError> {
        Self::with_mix(player, animations, DEFAULT_MIX_S)
    }

    pub fn with_mix(
        mut player: P,
        animations: AnimationMap,
        default_mix: f32,
    ) -> Result<Self, ControllerError> {
        validate(&player, &animations)?;
        player.set_default_mix(default_mix);
        Ok(Self {
            player,
            animations,
            state: MotionState::default(),
            view: Node::default(),
            directional: Node::default(),
            rig: Node::default(),
            rig_scale_ratio: RIG_SCALE_RATIO,
        })
    }

    #[must_use]
    pub fn with_rig_scale_ratio(mut self, ratio: f32) -> Self {
        self.rig_scale_ratio = ratio;
        self
    }

    #[must_use]
    pub fn state(&self) -> MotionState {
        self.state
    }

    #[must_use]
    pub fn animations(&self) -> &AnimationMap {
        &self.animations
    }

    #[must_use]
    pub fn player(&self) -> &P {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut P {
        &mut self.player
    }

    /// Root node; the scene positions it.
    #[must_use]
    pub fn view(&self) -> &Node {
        &self.view
    }

    /// Mirroring node between `view` and the skeleton.
    #[must_use]
    pub fn directional_view(&self) -> &Node {
        &self.directional
    }

    /// Skeleton node (uniform scale from `resize`).
    #[must_use]
    pub fn rig(&self) -> &Node {
        &self.rig
    }

    /// Facing as shown on screen.
    #[must_use]
    pub fn direction(&self) -> Direction {
        Direction::from_sign(self.directional.scale.x)
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.directional.scale.x = direction.sign();
        self.state.direction = direction;
    }

    /// Force the one-shot portal entrance.
    pub fn spawn(&mut self) {
        log::info!("spawning");
        self.play(Action::Spawn);
    }

    #[must_use]
    pub fn is_spawning(&self) -> bool {
        self.is_playing(Action::Spawn)
    }

    /// `action` is the current entry and has not completed yet.
    #[must_use]
    pub fn is_playing(&self, action: Action) -> bool {
        let name = &self.animations.get(action).name;
        self.player.current_name() == Some(name.as_str()) && !self.player.is_complete()
    }

    #[must_use]
    pub fn current_action(&self) -> Option<Action> {
        self.player
            .current_name()
            .and_then(|n| self.animations.action_for(n))
    }

    /// Switch to `action` unless it is already the current entry.
    /// Returns whether a new entry was started.
    pub fn play(&mut self, action: Action) -> bool {
        let desc = self.animations.get(action);
        if self.player.current_name() == Some(desc.name.as_str()) {
            return false;
        }
        self.player.set_animation(&desc.name, desc.looping);
        self.player.set_time_scale(desc.time_scale);
        log::debug!(
            "animation -> {} ({action}, loop={}, x{})",
            desc.name,
            desc.looping,
            desc.time_scale
        );
        true
    }

    /// One frame of controller logic.
    pub fn update(&mut self, keys: &KeyTable) {
        if self.is_spawning() {
            return;
        }
        let next = resolve(self.state, ControlSnapshot::from_keys(keys));
        if next != self.state {
            log::trace!("motion {:?} -> {:?}", self.state, next);
        }
        self.state = next;
        if self.direction() != next.direction {
            self.set_direction(next.direction);
        }
        self.apply_animation();
    }

    fn apply_animation(&mut self) {
        if self.state.jump {
            self.play(Action::Jump);
        }
        if self.is_playing(Action::Jump) {
            return;
        }
        self.play(pick_locomotion(&self.state));
    }

    /// Stand on the platform: centered horizontally, feet on the floor line.
    pub fn resize(&mut self, viewport: Vec2, floor_height: f32, scale: f32) {
        self.view.position = Vec2::new(viewport.x / 2.0, viewport.y - floor_height);
        self.rig.scale = Vec2::splat(scale * self.rig_scale_ratio);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Control;

    #[derive(Default)]
    struct Stub {
        current: Option<String>,
        complete: bool,
        mix: f32,
        time_scale: f32,
    }

    impl AnimationPlayer for Stub {
        fn has_animation(&self, _name: &str) -> bool {
            true
        }
        fn set_animation(&mut self, name: &str, _looping: bool) {
            self.current = Some(name.to_string());
            self.complete = false;
        }
        fn set_time_scale(&mut self, time_scale: f32) {
            self.time_scale = time_scale;
        }
        fn current_name(&self) -> Option<&str> {
            self.current.as_deref()
        }
        fn is_complete(&self) -> bool {
            self.complete
        }
        fn set_default_mix(&mut self, seconds: f32) {
            self.mix = seconds;
        }
    }

    #[test]
    fn construction_applies_default_mix() {
        let c = CharacterController::new(Stub::default(), AnimationMap::default()).unwrap();
        assert!((c.player().mix - DEFAULT_MIX_S).abs() < f32::EPSILON);
        assert_eq!(c.direction(), Direction::Right);
    }

    #[test]
    fn direction_mirrors_view() {
        let mut c = CharacterController::new(Stub::default(), AnimationMap::default()).unwrap();
        c.set_direction(Direction::Left);
        assert!(c.directional_view().scale.x < 0.0);
        assert_eq!(c.direction(), Direction::Left);
        let mut keys = KeyTable::default();
        keys[Control::Right].pressed = true;
        c.update(&keys);
        assert_eq!(c.direction(), Direction::Right);
        assert!(c.directional_view().scale.x > 0.0);
    }

    #[test]
    fn jump_clip_uses_its_time_scale() {
        let mut c = CharacterController::new(Stub::default(), AnimationMap::default()).unwrap();
        let mut keys = KeyTable::default();
        keys[Control::Jump].pressed = true;
        c.update(&keys);
        assert_eq!(c.current_action(), Some(Action::Jump));
        assert!((c.player().time_scale - 1.5).abs() < f32::EPSILON);
    }

    #[test]
    fn resize_places_on_floor_line() {
        let mut c = CharacterController::new(Stub::default(), AnimationMap::default()).unwrap();
        c.resize(Vec2::new(800.0, 600.0), 100.0, 0.5);
        assert_eq!(c.view().position, Vec2::new(400.0, 500.0));
        approx::assert_relative_eq!(c.rig().scale.x, 0.16, epsilon = 1e-6);
    }
}
