use crate::runtime::effect::Effect;
use crate::runtime::event::WidgetEvent;
use crate::runtime::scheduler::Scheduler;
use crate::runtime::subscription::PointerRouter;
use crate::terminal::{KeyEvent, PointerEvent};
use crate::widgets::components::dropdown::Dropdown;
use crate::widgets::traits::{Drawable, InteractionResult, Interactive, TextAction};
use std::time::{Duration, Instant};

/// Headless driver for one mounted dropdown.
///
/// Owns the scheduler that holds the dropdown's debounce timers and the
/// pointer router it subscribes to. Callers pass the current `Instant`
/// into every call, which keeps the whole state machine testable with
/// virtual time. Every method returns whether a render is needed.
pub struct Session {
    dropdown: Dropdown,
    scheduler: Scheduler,
    router: PointerRouter,
}

impl Session {
    pub fn new(mut dropdown: Dropdown) -> Self {
        let router = PointerRouter::new();
        dropdown.mount(&router);
        Self {
            dropdown,
            scheduler: Scheduler::new(),
            router,
        }
    }

    pub fn dropdown(&self) -> &Dropdown {
        &self.dropdown
    }

    pub fn router(&self) -> &PointerRouter {
        &self.router
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        let result = self.dropdown.on_key(key);
        self.apply(result, now)
    }

    pub fn handle_text_action(&mut self, action: TextAction, now: Instant) -> bool {
        let result = self.dropdown.on_text_action(action);
        self.apply(result, now)
    }

    pub fn handle_pointer(&mut self, event: PointerEvent, now: Instant) -> bool {
        if !self.router.is_listening(self.dropdown.id()) {
            return false;
        }
        let result = self.dropdown.on_pointer(event);
        self.apply(result, now)
    }

    /// Fires every timer due at `now`.
    pub fn advance(&mut self, now: Instant) -> bool {
        let mut render = false;
        for event in self.scheduler.drain_ready(now) {
            render |= self.dispatch(event, now);
        }
        render
    }

    pub fn poll_timeout(&self, now: Instant, default_timeout: Duration) -> Duration {
        self.scheduler.poll_timeout(now, default_timeout)
    }

    fn dispatch(&mut self, event: WidgetEvent, now: Instant) -> bool {
        let result = self.dropdown.on_event(&event);
        self.apply(result, now)
    }

    fn apply(&mut self, result: InteractionResult, now: Instant) -> bool {
        for effect in result.effects {
            match effect {
                Effect::Schedule(command) => self.scheduler.schedule(command, now),
            }
        }
        result.request_render
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.dropdown.unmount();
    }
}
