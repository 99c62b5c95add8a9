//! platform_winit: window + input + frame loop (winit 0.30).
//!
//! Owns the `SpineboyScene`, forwards keyboard and resize events to it and
//! ticks it once per redraw. There is no renderer here; the window title
//! shows the current animation and scroll offset.

use std::time::Instant;

use client_runtime::{SceneConfig, SpineboyScene};
use glam::Vec2;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::PhysicalKey,
    window::{Window, WindowAttributes, WindowId},
};

/// Longest frame step fed to the scene (after a stall or a debugger pause).
const MAX_DT_S: f32 = 0.1;

struct App {
    cfg: SceneConfig,
    window: Option<Window>,
    scene: Option<SpineboyScene>,
    started: Instant,
    last_time: Option<Instant>,
    title: String,
}

impl App {
    fn new(cfg: SceneConfig) -> Self {
        Self {
            cfg,
            window: None,
            scene: None,
            started: Instant::now(),
            last_time: None,
            title: String::new(),
        }
    }

    fn now_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1000.0
    }

    fn on_key(&mut self, event: &KeyEvent) {
        if event.repeat {
            return;
        }
        let Some(code) = key_code_name(event.physical_key) else {
            return;
        };
        let now = self.now_ms();
        let Some(scene) = self.scene.as_mut() else {
            return;
        };
        let control = match event.state {
            ElementState::Pressed => scene.key_down(&code, now),
            ElementState::Released => scene.key_up(&code, now),
        };
        if let Some(c) = control {
            log::trace!("{code} {:?} -> {c}", event.state);
        }
    }

    fn redraw(&mut self) {
        let now = Instant::now();
        let dt = self
            .last_time
            .map_or(0.0, |t| (now - t).as_secs_f32())
            .min(MAX_DT_S);
        self.last_time = Some(now);
        let now_ms = self.now_ms();
        let (Some(window), Some(scene)) = (&self.window, self.scene.as_mut()) else {
            return;
        };
        scene.frame(dt, now_ms);
        let title = window_title(scene);
        if title != self.title {
            window.set_title(&title);
            self.title = title;
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let window = match event_loop.create_window(
            WindowAttributes::default()
                .with_title("Spineboy Adventure")
                .with_inner_size(winit::dpi::LogicalSize::new(1280.0, 720.0)),
        ) {
            Ok(w) => w,
            Err(e) => {
                log::error!("create window: {e}");
                event_loop.exit();
                return;
            }
        };
        let size = window.inner_size();
        let viewport = Vec2::new(size.width as f32, size.height as f32);
        match SpineboyScene::new(&self.cfg, viewport) {
            Ok(scene) => self.scene = Some(scene),
            Err(e) => {
                log::error!("scene init failed: {e:#}");
                event_loop.exit();
                return;
            }
        }
        self.last_time = Some(Instant::now());
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.window.as_ref().is_none_or(|w| w.id() != window_id) {
            return;
        }
        match event {
            WindowEvent::CloseRequested => {
                if let Some(scene) = self.scene.as_mut() {
                    scene.dispose();
                }
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                let now = self.now_ms();
                if let Some(scene) = self.scene.as_mut() {
                    scene.request_resize(Vec2::new(size.width as f32, size.height as f32), now);
                }
            }
            WindowEvent::KeyboardInput { event, .. } => self.on_key(&event),
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(win) = &self.window {
            win.request_redraw();
        }
    }
}

/// Key-code name as the bindings spell it (`KeyD`, `ArrowLeft`, `Space`).
#[must_use]
pub fn key_code_name(key: PhysicalKey) -> Option<String> {
    match key {
        PhysicalKey::Code(code) => Some(format!("{code:?}")),
        PhysicalKey::Unidentified(_) => None,
    }
}

/// Status line shown in the title bar.
#[must_use]
pub fn window_title(scene: &SpineboyScene) -> String {
    let action = scene
        .current_action()
        .map_or_else(|| "-".to_string(), |a| a.to_string());
    format!(
        "Spineboy Adventure | {action} | {:?} | x={:.0}",
        scene.direction(),
        scene.scroll_x()
    )
}

fn is_headless() -> bool {
    if std::env::var("SPINEBOY_HEADLESS")
        .map(|v| v == "1")
        .unwrap_or(false)
    {
        return true;
    }
    if std::env::var("CI")
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false)
    {
        return true;
    }
    #[cfg(any(
        target_os = "linux",
        target_os = "freebsd",
        target_os = "dragonfly",
        target_os = "netbsd",
        target_os = "openbsd",
    ))]
    {
        if std::env::var_os("DISPLAY").is_none() && std::env::var_os("WAYLAND_DISPLAY").is_none() {
            return true;
        }
    }
    false
}

pub fn run() -> anyhow::Result<()> {
    if is_headless() {
        log::info!("no display; skipping window");
        return Ok(());
    }
    let cfg = SceneConfig::load()?;
    let event_loop = EventLoop::new()?;
    let mut app = App::new(cfg);
    event_loop.run_app(&mut app)?;
    Ok(())
}
