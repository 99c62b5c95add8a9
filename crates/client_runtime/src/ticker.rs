//! Per-frame tick source.
//!
//! Single-threaded: listeners are called once per `tick`, in registration
//! order. The ticker only holds weak references; a component registers
//! itself at construction and cancels its `Subscription` on dispose.
//! Cancelling (or adding) from inside a listener is allowed: the tick walks
//! a snapshot and checks each entry's flag right before calling it.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

pub trait FrameListener {
    fn on_tick(&mut self, dt: f32);
}

struct Entry {
    id: u64,
    live: Rc<Cell<bool>>,
    listener: Weak<RefCell<dyn FrameListener>>,
}

#[derive(Default)]
struct TickerInner {
    next_id: u64,
    entries: Vec<Entry>,
    frames: u64,
}

/// Cloneable handle; all clones share one listener list.
#[derive(Clone, Default)]
pub struct Ticker {
    inner: Rc<RefCell<TickerInner>>,
}

impl std::fmt::Debug for Ticker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ticker")
            .field("listeners", &self.len())
            .field("frames", &self.frames())
            .finish()
    }
}

/// Registration token. Dropping it does not cancel; call `cancel`.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    live: Rc<Cell<bool>>,
}

impl Subscription {
    pub fn cancel(&self) {
        self.live.set(false);
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.live.get()
    }

    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }
}

impl Ticker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add<L: FrameListener + 'static>(&self, listener: &Rc<RefCell<L>>) -> Subscription {
        let dyn_listener: Rc<RefCell<dyn FrameListener>> = listener.clone();
        let live = Rc::new(Cell::new(true));
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.entries.push(Entry {
            id,
            live: live.clone(),
            listener: Rc::downgrade(&dyn_listener),
        });
        Subscription { id, live }
    }

    /// Run one frame.
    pub fn tick(&self, dt: f32) {
        let snapshot: Vec<(u64, Rc<Cell<bool>>, Weak<RefCell<dyn FrameListener>>)> = {
            let mut inner = self.inner.borrow_mut();
            inner.frames += 1;
            inner
                .entries
                .iter()
                .map(|e| (e.id, e.live.clone(), e.listener.clone()))
                .collect()
        };
        for (id, live, listener) in snapshot {
            if !live.get() {
                continue;
            }
            let Some(listener) = listener.upgrade() else {
                continue;
            };
            match listener.try_borrow_mut() {
                Ok(mut l) => l.on_tick(dt),
                Err(_) => log::warn!("tick listener {id} busy; skipped this frame"),
            }
        }
        self.prune();
    }

    fn prune(&self) {
        self.inner
            .borrow_mut()
            .entries
            .retain(|e| e.live.get() && e.listener.strong_count() > 0);
    }

    /// Active listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner
            .borrow()
            .entries
            .iter()
            .filter(|e| e.live.get() && e.listener.strong_count() > 0)
            .count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Frames ticked so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.inner.borrow().frames
    }
}
