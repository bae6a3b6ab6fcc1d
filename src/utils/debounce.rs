use std::rc::Rc;

use super::timer::{GlooScheduler, Scheduler, TimerSlot};

/// Trailing-edge debounce: only the last call of a burst runs, `wait_ms`
/// after that call, with its arguments.
pub struct Debouncer<A: 'static, S: Scheduler = GlooScheduler> {
    wait_ms: u32,
    callback: Rc<dyn Fn(A)>,
    slot: TimerSlot<S>,
}

impl<A: 'static> Debouncer<A, GlooScheduler> {
    pub fn new<F>(wait_ms: u32, callback: F) -> Self
    where
        F: Fn(A) + 'static,
    {
        Self::with_scheduler(wait_ms, GlooScheduler, callback)
    }
}

impl<A: 'static, S: Scheduler> Debouncer<A, S> {
    pub fn with_scheduler<F>(wait_ms: u32, scheduler: S, callback: F) -> Self
    where
        F: Fn(A) + 'static,
    {
        Self {
            wait_ms,
            callback: Rc::new(callback),
            slot: TimerSlot::new(scheduler),
        }
    }

    pub fn call(&mut self, args: A) {
        let callback = self.callback.clone();
        self.slot.arm(self.wait_ms, move || callback(args));
    }

    pub fn cancel(&mut self) {
        self.slot.cancel();
    }
}
