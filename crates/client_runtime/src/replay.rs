//! Headless scenario playback: scripted input events against a live scene.

use anyhow::Result;
use client_core::systems::joystick::JoystickConfig;
use client_core::{Action, Direction};
use data_runtime::scenario::{EventKind, Scenario};
use glam::Vec2;

use crate::scene::{SceneConfig, SpineboyScene};

/// One animation switch observed after a frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationChange {
    pub frame: u32,
    pub at_ms: f64,
    pub action: Option<Action>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReplayReport {
    pub frames: u32,
    pub changes: Vec<AnimationChange>,
    pub final_action: Option<Action>,
    pub final_direction: Direction,
    pub scroll_x: f32,
    pub viewport: Vec2,
}

/// Run `scen` frame by frame. Events fire before the first frame at or
/// after their timestamp; the joystick is forced on when the scenario
/// asks for it.
#[allow(clippy::cast_possible_truncation)]
pub fn replay(scen: &Scenario, cfg: &SceneConfig) -> Result<ReplayReport> {
    let mut cfg = cfg.clone();
    if scen.joystick && cfg.input.joystick.is_none() {
        cfg.input.joystick = Some(JoystickConfig::default());
    }
    let mut scene = SpineboyScene::new(&cfg, Vec2::from(scen.viewport))?;
    let dt = scen.dt_ms as f32 / 1000.0;
    let mut events = scen.events.iter().peekable();
    let mut changes = vec![AnimationChange {
        frame: 0,
        at_ms: 0.0,
        action: scene.current_action(),
    }];

    for frame in 1..=scen.frames {
        let now_ms = scen.dt_ms * f64::from(frame);
        while let Some(ev) = events.next_if(|e| e.at_ms <= now_ms) {
            match &ev.kind {
                EventKind::KeyDown { code } => {
                    scene.key_down(code, ev.at_ms);
                }
                EventKind::KeyUp { code } => {
                    scene.key_up(code, ev.at_ms);
                }
                EventKind::Joystick { x, y } => scene.joystick_move(*x, *y),
                EventKind::JoystickEnd => scene.joystick_end(),
                EventKind::Resize { width, height } => {
                    scene.request_resize(Vec2::new(*width, *height), ev.at_ms);
                }
            }
        }
        scene.frame(dt, now_ms);
        let action = scene.current_action();
        if changes.last().is_none_or(|c| c.action != action) {
            log::debug!("frame {frame}: {action:?}");
            changes.push(AnimationChange {
                frame,
                at_ms: now_ms,
                action,
            });
        }
    }

    let report = ReplayReport {
        frames: scen.frames,
        changes,
        final_action: scene.current_action(),
        final_direction: scene.direction(),
        scroll_x: scene.scroll_x(),
        viewport: scene.viewport(),
    };
    scene.dispose();
    Ok(report)
}
