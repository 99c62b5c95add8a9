//! Deferred resize: the host reports a new size, the scene applies it once
//! the viewport has settled for `delay_ms`.

use glam::Vec2;

pub const RESIZE_DEBOUNCE_MS: f64 = 50.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizeDebouncer {
    delay_ms: f64,
    pending: Option<(Vec2, f64)>,
}

impl Default for ResizeDebouncer {
    fn default() -> Self {
        Self::new(RESIZE_DEBOUNCE_MS)
    }
}

impl ResizeDebouncer {
    #[must_use]
    pub fn new(delay_ms: f64) -> Self {
        Self {
            delay_ms: delay_ms.max(0.0),
            pending: None,
        }
    }

    /// Latest request wins and restarts the delay.
    pub fn request(&mut self, viewport: Vec2, now_ms: f64) {
        if viewport.x <= 0.0 || viewport.y <= 0.0 {
            log::warn!("ignoring resize to {}x{}", viewport.x, viewport.y);
            return;
        }
        self.pending = Some((viewport, now_ms + self.delay_ms));
    }

    /// Size to apply now, if the delay has elapsed.
    pub fn poll(&mut self, now_ms: f64) -> Option<Vec2> {
        match self.pending {
            Some((vp, due)) if now_ms >= due => {
                self.pending = None;
                Some(vp)
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
