//! Scene wiring: input, character and parallax on one ticker.
//!
//! Startup order matters: the character registers before the parallax scene
//! so each frame scrolls with the motion resolved in that same frame.

use std::cell::RefCell;
use std::rc::Rc;
use std::str::FromStr;

use anyhow::{Context, Result};
use client_core::systems::joystick::JoystickConfig;
use client_core::{
    Action, AnimationMap, AnimationPlayer, CharacterController, Control, Direction,
    InputAggregator, InputConfig, KeyTable, MotionState,
};
use data_runtime::configs::{controls, parallax, spineboy_animations, telemetry};
use glam::Vec2;

use crate::character::CharacterRig;
use crate::clips::ClipPlayer;
use crate::parallax::{
    LayerMetrics, LayerTextures, MotionSource, ParallaxConfig, ParallaxDriver, ParallaxScene,
};
use crate::resize::{RESIZE_DEBOUNCE_MS, ResizeDebouncer};
use crate::ticker::Ticker;

/// Everything the scene needs, already merged from data files and defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub input: InputConfig,
    pub animations: AnimationMap,
    pub default_mix: f32,
    /// Clip name → duration (seconds) for the built-in clip player.
    pub clips: Vec<(String, f32)>,
    pub parallax: ParallaxConfig,
    pub textures: LayerTextures,
    pub character_scale_ratio: f32,
    pub resize_debounce_ms: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            input: InputConfig::default(),
            animations: AnimationMap::default(),
            default_mix: client_core::controller::DEFAULT_MIX_S,
            clips: [
                ("idle", 1.6667),
                ("walk", 0.8667),
                ("run", 0.6667),
                ("jump", 1.3333),
                ("hoverboard", 1.0),
                ("portal", 3.2333),
            ]
            .into_iter()
            .map(|(n, d)| (n.to_string(), d))
            .collect(),
            parallax: ParallaxConfig::default(),
            textures: LayerTextures::default(),
            character_scale_ratio: client_core::controller::RIG_SCALE_RATIO,
            resize_debounce_ms: RESIZE_DEBOUNCE_MS,
        }
    }
}

impl SceneConfig {
    /// Load `data/config/{controls,spineboy_animations,parallax}.toml`.
    pub fn load() -> Result<Self> {
        let controls = controls::load_default().context("load controls config")?;
        let anims = spineboy_animations::load_default().context("load animation config")?;
        let par = parallax::load_default().context("load parallax config")?;
        Ok(Self::from_cfgs(&controls, &anims, &par))
    }

    #[must_use]
    pub fn from_cfgs(
        controls: &controls::ControlsCfg,
        anims: &spineboy_animations::SpineboyAnimCfg,
        par: &parallax::ParallaxCfg,
    ) -> Self {
        let mut cfg = Self::default();
        cfg.apply_controls(controls);
        cfg.apply_animations(anims);
        cfg.apply_parallax(par);
        cfg
    }

    fn apply_controls(&mut self, c: &controls::ControlsCfg) {
        if let Some(ms) = c.double_tap_window_ms {
            self.input.double_tap_window_ms = ms;
        }
        if c.joystick_enabled.unwrap_or(false) {
            let mut j = JoystickConfig::default();
            if let Some(v) = c.joystick_move_threshold {
                j.move_threshold = v;
            }
            if let Some(v) = c.joystick_run_threshold {
                j.run_threshold = v;
            }
            self.input.joystick = Some(j);
        }
        for (code, control) in &c.bindings {
            match Control::from_str(control) {
                Ok(ctrl) => {
                    self.input.keymap.bind(code.clone(), ctrl);
                }
                Err(e) => log::warn!("binding {code}: {e}; skipped"),
            }
        }
    }

    fn apply_animations(&mut self, a: &spineboy_animations::SpineboyAnimCfg) {
        if let Some(mix) = a.default_mix {
            self.default_mix = mix;
        }
        for action in Action::ALL {
            let Some(clip) = a.clip(action.key()) else {
                continue;
            };
            let desc = self.animations.get_mut(action);
            if let Some(name) = &clip.name {
                desc.name.clone_from(name);
            }
            if let Some(looping) = clip.looping {
                desc.looping = looping;
            }
            if let Some(ts) = clip.time_scale {
                desc.time_scale = ts;
            }
        }
        for (name, duration) in &a.clips {
            match self.clips.iter_mut().find(|(n, _)| n == name) {
                Some(entry) => entry.1 = *duration,
                None => self.clips.push((name.clone(), *duration)),
            }
        }
    }

    fn apply_parallax(&mut self, p: &parallax::ParallaxCfg) {
        let d = &mut self.parallax;
        let fields = [
            (&mut d.base_speed, p.base_speed),
            (&mut d.run_speed, p.run_speed),
            (&mut d.hover_speed, p.hover_speed),
            (&mut d.background_ratio, p.background_ratio),
            (&mut d.midground_ratio, p.midground_ratio),
            (&mut d.platform_ratio, p.platform_ratio),
            (&mut d.max_platform_fraction, p.max_platform_fraction),
            (&mut d.floor_ratio, p.floor_ratio),
        ];
        for (slot, value) in fields {
            if let Some(v) = value {
                *slot = v;
            }
        }
        if let Some(r) = p.character_scale_ratio {
            self.character_scale_ratio = r;
        }
        if let Some(ms) = p.resize_debounce_ms {
            self.resize_debounce_ms = ms;
        }
        let t = &p.textures;
        for (slot, value) in [
            (&mut self.textures.sky, t.sky),
            (&mut self.textures.background, t.background),
            (&mut self.textures.midground, t.midground),
            (&mut self.textures.platform, t.platform),
        ] {
            if let Some([w, h]) = value {
                *slot = Vec2::new(w, h);
            }
        }
    }
}

/// `env_logger` filter from data/config/telemetry.toml (falls back to info).
#[must_use]
pub fn default_log_filter() -> String {
    telemetry::load_default()
        .map(|t| t.default_filter())
        .unwrap_or_else(|_| "info,winit=warn".to_string())
}

pub struct SpineboyScene<P: AnimationPlayer + 'static = ClipPlayer> {
    ticker: Ticker,
    input: Rc<RefCell<InputAggregator>>,
    character: Rc<RefCell<CharacterRig<P>>>,
    parallax: Rc<RefCell<ParallaxScene>>,
    resize: ResizeDebouncer,
    viewport: Vec2,
    disposed: bool,
}

impl<P: AnimationPlayer + 'static> std::fmt::Debug for SpineboyScene<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpineboyScene")
            .field("ticker", &self.ticker)
            .field("viewport", &self.viewport)
            .field("disposed", &self.disposed)
            .finish_non_exhaustive()
    }
}

impl SpineboyScene<ClipPlayer> {
    /// Scene driven by the built-in clip player.
    pub fn new(cfg: &SceneConfig, viewport: Vec2) -> Result<Self> {
        let player = ClipPlayer::new(cfg.clips.iter().map(|(n, d)| (n.clone(), *d)));
        Self::with_player(cfg, player, viewport)
    }
}

impl<P: AnimationPlayer + 'static> SpineboyScene<P> {
    pub fn with_player(cfg: &SceneConfig, player: P, viewport: Vec2) -> Result<Self> {
        let ticker = Ticker::new();
        let input = Rc::new(RefCell::new(InputAggregator::new(cfg.input.clone())));

        let controller =
            CharacterController::with_mix(player, cfg.animations.clone(), cfg.default_mix)
                .context("character animations")?
                .with_rig_scale_ratio(cfg.character_scale_ratio);
        let character = CharacterRig::attach(&ticker, controller, input.clone());

        let driver = ParallaxDriver::new(viewport, cfg.textures, cfg.parallax);
        let metrics = driver.metrics();
        let source: Rc<RefCell<dyn MotionSource>> = character.clone();
        let parallax = ParallaxScene::attach(&ticker, driver, source);

        {
            let mut rig = character.borrow_mut();
            let c = rig.controller_mut();
            c.resize(viewport, metrics.floor_height, metrics.scale);
            c.spawn();
        }
        log::info!(
            "scene ready {}x{} (scale={:.3}, floor={:.1})",
            viewport.x,
            viewport.y,
            metrics.scale,
            metrics.floor_height
        );

        Ok(Self {
            ticker,
            input,
            character,
            parallax,
            resize: ResizeDebouncer::new(cfg.resize_debounce_ms),
            viewport,
            disposed: false,
        })
    }

    pub fn key_down(&mut self, code: &str, now_ms: f64) -> Option<Control> {
        self.input.borrow_mut().key_down(code, now_ms)
    }

    pub fn key_up(&mut self, code: &str, now_ms: f64) -> Option<Control> {
        self.input.borrow_mut().key_up(code, now_ms)
    }

    pub fn joystick_move(&mut self, x: f32, y: f32) {
        self.input.borrow_mut().joystick_move(x, y);
    }

    pub fn joystick_end(&mut self) {
        self.input.borrow_mut().joystick_end();
    }

    /// Host reported a new size; applied on the first frame after the delay.
    pub fn request_resize(&mut self, viewport: Vec2, now_ms: f64) {
        if self.disposed {
            return;
        }
        self.resize.request(viewport, now_ms);
    }

    /// Apply a due resize, then run one tick.
    pub fn frame(&mut self, dt: f32, now_ms: f64) {
        if self.disposed {
            return;
        }
        if let Some(vp) = self.resize.poll(now_ms) {
            self.apply_resize(vp);
        }
        self.ticker.tick(dt);
    }

    fn apply_resize(&mut self, viewport: Vec2) {
        self.viewport = viewport;
        let LayerMetrics {
            floor_height,
            scale,
        } = self.parallax.borrow_mut().resize(viewport);
        self.character
            .borrow_mut()
            .controller_mut()
            .resize(viewport, floor_height, scale);
    }

    /// Detach input and both tick subscriptions; drop any pending resize.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.input.borrow_mut().dispose();
        self.character.borrow_mut().dispose();
        self.parallax.borrow_mut().dispose();
        self.resize.cancel();
        log::info!("scene disposed after {} frames", self.ticker.frames());
    }

    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    #[must_use]
    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    #[must_use]
    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    #[must_use]
    pub fn keys(&self) -> KeyTable {
        *self.input.borrow().keys()
    }

    #[must_use]
    pub fn motion(&self) -> MotionState {
        self.character.borrow().motion()
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.character.borrow().controller().direction()
    }

    #[must_use]
    pub fn current_action(&self) -> Option<Action> {
        self.character.borrow().controller().current_action()
    }

    #[must_use]
    pub fn is_spawning(&self) -> bool {
        self.character.borrow().controller().is_spawning()
    }

    /// Character root position (centre of the floor line).
    #[must_use]
    pub fn character_position(&self) -> Vec2 {
        self.character.borrow().controller().view().position
    }

    #[must_use]
    pub fn scroll_x(&self) -> f32 {
        self.parallax.borrow().driver().position_x()
    }

    #[must_use]
    pub fn metrics(&self) -> LayerMetrics {
        self.parallax.borrow().driver().metrics()
    }

    /// Read-only access to the parallax layers.
    pub fn with_parallax<R>(&self, f: impl FnOnce(&ParallaxDriver) -> R) -> R {
        f(self.parallax.borrow().driver())
    }

    /// Read-only access to the character controller.
    pub fn with_character<R>(&self, f: impl FnOnce(&CharacterController<P>) -> R) -> R {
        f(self.character.borrow().controller())
    }
}
