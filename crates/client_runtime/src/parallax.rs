//! Parallax scene: one authoritative scroll offset fanned out to the layers.
//!
//! The platform layer's tile offset is the key position; background and
//! midground follow it at fixed ratios. The offset only moves while the
//! character walks, against its facing.

use std::cell::RefCell;
use std::rc::Rc;

use client_core::MotionState;
use client_core::view::{Node, Sprite, TilingLayer};
use glam::Vec2;

use crate::ticker::{FrameListener, Subscription, Ticker};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxConfig {
    pub base_speed: f32,
    pub run_speed: f32,
    pub hover_speed: f32,
    pub background_ratio: f32,
    pub midground_ratio: f32,
    pub platform_ratio: f32,
    /// Platform height cap as a fraction of the viewport height.
    pub max_platform_fraction: f32,
    /// Walkable surface as a fraction of the platform texture height.
    pub floor_ratio: f32,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            base_speed: 1.25,
            run_speed: 3.75,
            hover_speed: 7.5,
            background_ratio: 0.1,
            midground_ratio: 0.25,
            platform_ratio: 1.0,
            max_platform_fraction: 0.4,
            floor_ratio: 0.43,
        }
    }
}

/// Texture pixel sizes of the four layers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerTextures {
    pub sky: Vec2,
    pub background: Vec2,
    pub midground: Vec2,
    pub platform: Vec2,
}

impl Default for LayerTextures {
    fn default() -> Self {
        Self {
            sky: Vec2::new(1024.0, 1024.0),
            background: Vec2::new(1920.0, 864.0),
            midground: Vec2::new(1920.0, 540.0),
            platform: Vec2::new(1920.0, 413.0),
        }
    }
}

/// Result of a resize, consumed by the character placement.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayerMetrics {
    pub floor_height: f32,
    pub scale: f32,
}

/// Hover beats run beats walk.
#[must_use]
pub fn scroll_speed(motion: &MotionState, cfg: &ParallaxConfig) -> f32 {
    if motion.hover {
        cfg.hover_speed
    } else if motion.run {
        cfg.run_speed
    } else {
        cfg.base_speed
    }
}

/// Uniform layer scale and floor line for a viewport height.
///
/// The platform is drawn at most `max_platform_fraction` of the viewport
/// tall and never upscaled past its texture height.
#[must_use]
pub fn layer_metrics(viewport_h: f32, platform_h: f32, cfg: &ParallaxConfig) -> LayerMetrics {
    if platform_h <= 0.0 {
        return LayerMetrics {
            floor_height: 0.0,
            scale: 1.0,
        };
    }
    let scale = platform_h.min(viewport_h * cfg.max_platform_fraction) / platform_h;
    LayerMetrics {
        floor_height: scale * platform_h * cfg.floor_ratio,
        scale,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParallaxDriver {
    cfg: ParallaxConfig,
    textures: LayerTextures,
    viewport: Vec2,
    metrics: LayerMetrics,
    scroll_x: f32,
    view: Node,
    sky: Sprite,
    background: TilingLayer,
    midground: TilingLayer,
    platform: TilingLayer,
}

impl ParallaxDriver {
    #[must_use]
    pub fn new(viewport: Vec2, textures: LayerTextures, cfg: ParallaxConfig) -> Self {
        let mut d = Self {
            cfg,
            textures,
            viewport,
            metrics: LayerMetrics::default(),
            scroll_x: 0.0,
            view: Node::default(),
            sky: Sprite {
                node: Node::default(),
                size: Vec2::ZERO,
                anchor: Vec2::new(0.0, 1.0),
            },
            background: TilingLayer::new(0.0, 0.0, 1.0),
            midground: TilingLayer::new(0.0, 0.0, 1.0),
            platform: TilingLayer::new(0.0, 0.0, 1.0),
        };
        d.resize(viewport);
        d
    }

    #[must_use]
    pub fn config(&self) -> &ParallaxConfig {
        &self.cfg
    }

    /// Authoritative scroll offset; with the default ratios this is the
    /// platform's tile offset.
    #[must_use]
    pub fn position_x(&self) -> f32 {
        self.scroll_x
    }

    pub fn set_position_x(&mut self, value: f32) {
        self.scroll_x = value;
        self.background.tile_offset.x = value * self.cfg.background_ratio;
        self.midground.tile_offset.x = value * self.cfg.midground_ratio;
        self.platform.tile_offset.x = value * self.cfg.platform_ratio;
    }

    /// One frame of scrolling. Returns whether the offset moved.
    pub fn advance(&mut self, motion: &MotionState) -> bool {
        if !motion.walk {
            return false;
        }
        let step = scroll_speed(motion, &self.cfg) * self.metrics.scale * motion.direction.sign();
        self.set_position_x(self.position_x() - step);
        true
    }

    /// Recompute scale and floor line, then lay the layers out again.
    pub fn resize(&mut self, viewport: Vec2) -> LayerMetrics {
        self.viewport = viewport;
        self.metrics = layer_metrics(viewport.y, self.textures.platform.y, &self.cfg);
        let LayerMetrics {
            floor_height,
            scale,
        } = self.metrics;

        // layers hang from the bottom edge
        self.view.position = Vec2::new(0.0, viewport.y);
        self.sky.size = viewport;

        for (layer, tex) in [
            (&mut self.background, self.textures.background),
            (&mut self.midground, self.textures.midground),
        ] {
            layer.size = Vec2::new(viewport.x, tex.y * scale);
            layer.tile_scale = Vec2::splat(scale);
            layer.node.position.y = -floor_height;
        }
        self.platform.size = Vec2::new(viewport.x, floor_height);
        self.platform.tile_scale = Vec2::splat(scale);

        log::debug!(
            "parallax resize {}x{}: scale={scale:.3} floor={floor_height:.1}",
            viewport.x,
            viewport.y
        );
        self.metrics
    }

    #[must_use]
    pub fn metrics(&self) -> LayerMetrics {
        self.metrics
    }

    #[must_use]
    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    #[must_use]
    pub fn view(&self) -> &Node {
        &self.view
    }

    #[must_use]
    pub fn sky(&self) -> &Sprite {
        &self.sky
    }

    #[must_use]
    pub fn background(&self) -> &TilingLayer {
        &self.background
    }

    #[must_use]
    pub fn midground(&self) -> &TilingLayer {
        &self.midground
    }

    #[must_use]
    pub fn platform(&self) -> &TilingLayer {
        &self.platform
    }
}

/// Anything the scene can read the character's motion from.
pub trait MotionSource {
    fn motion(&self) -> MotionState;
}

/// Tick-driven wrapper: pulls motion from the character once per frame.
pub struct ParallaxScene {
    driver: ParallaxDriver,
    source: Rc<RefCell<dyn MotionSource>>,
    subscription: Option<Subscription>,
}

impl std::fmt::Debug for ParallaxScene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParallaxScene")
            .field("driver", &self.driver)
            .field("subscription", &self.subscription)
            .finish_non_exhaustive()
    }
}

impl ParallaxScene {
    /// Build and register on `ticker`. Register after the character so the
    /// scroll reads this frame's motion.
    #[must_use]
    pub fn attach(
        ticker: &Ticker,
        driver: ParallaxDriver,
        source: Rc<RefCell<dyn MotionSource>>,
    ) -> Rc<RefCell<Self>> {
        let scene = Rc::new(RefCell::new(Self {
            driver,
            source,
            subscription: None,
        }));
        let sub = ticker.add(&scene);
        scene.borrow_mut().subscription = Some(sub);
        scene
    }

    #[must_use]
    pub fn driver(&self) -> &ParallaxDriver {
        &self.driver
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.subscription.as_ref().is_some_and(Subscription::is_active)
    }

    /// Resize while attached; a torn-down scene keeps its last metrics.
    pub fn resize(&mut self, viewport: Vec2) -> LayerMetrics {
        if !self.is_attached() {
            log::debug!("resize after dispose ignored");
            return self.driver.metrics();
        }
        self.driver.resize(viewport)
    }

    pub fn dispose(&mut self) {
        if let Some(sub) = self.subscription.take() {
            sub.cancel();
            log::info!("parallax scene disposed");
        }
    }
}

impl FrameListener for ParallaxScene {
    fn on_tick(&mut self, _dt: f32) {
        if !self.is_attached() {
            return;
        }
        let motion = match self.source.try_borrow() {
            Ok(s) => s.motion(),
            Err(_) => {
                log::warn!("motion source busy; parallax frame skipped");
                return;
            }
        };
        self.driver.advance(&motion);
    }
}
