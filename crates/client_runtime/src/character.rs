//! Character controller bound to the frame ticker and the shared input table.

use std::cell::RefCell;
use std::rc::Rc;

use client_core::{AnimationPlayer, CharacterController, InputAggregator, KeyTable, MotionState};

use crate::parallax::MotionSource;
use crate::ticker::{FrameListener, Subscription, Ticker};

#[derive(Debug)]
pub struct CharacterRig<P> {
    controller: CharacterController<P>,
    input: Rc<RefCell<InputAggregator>>,
    subscription: Option<Subscription>,
}

impl<P: AnimationPlayer + 'static> CharacterRig<P> {
    /// Build and register on `ticker`; the returned handle keeps it alive.
    #[must_use]
    pub fn attach(
        ticker: &Ticker,
        controller: CharacterController<P>,
        input: Rc<RefCell<InputAggregator>>,
    ) -> Rc<RefCell<Self>> {
        let rig = Rc::new(RefCell::new(Self {
            controller,
            input,
            subscription: None,
        }));
        let sub = ticker.add(&rig);
        rig.borrow_mut().subscription = Some(sub);
        rig
    }
}

impl<P: AnimationPlayer> CharacterRig<P> {
    #[must_use]
    pub fn controller(&self) -> &CharacterController<P> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut CharacterController<P> {
        &mut self.controller
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.subscription.as_ref().is_some_and(Subscription::is_active)
    }

    /// Detach from the ticker. Idempotent.
    pub fn dispose(&mut self) {
        if let Some(sub) = self.subscription.take() {
            sub.cancel();
            log::info!("character detached");
        }
    }
}

impl<P: AnimationPlayer> FrameListener for CharacterRig<P> {
    fn on_tick(&mut self, dt: f32) {
        if !self.is_attached() {
            return;
        }
        self.controller.player_mut().update(dt);
        let keys: KeyTable = match self.input.try_borrow() {
            Ok(input) => *input.keys(),
            Err(_) => {
                log::warn!("input table busy; controller frame skipped");
                return;
            }
        };
        self.controller.update(&keys);
    }
}

impl<P: AnimationPlayer> MotionSource for CharacterRig<P> {
    fn motion(&self) -> MotionState {
        self.controller.state()
    }
}
