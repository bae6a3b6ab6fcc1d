use gloo_timers::callback::Timeout;

/// Schedules one-shot callbacks. Dropping the returned handle cancels the
/// callback if it has not fired yet.
pub trait Scheduler {
    type Handle;

    fn schedule<F>(&self, delay_ms: u32, task: F) -> Self::Handle
    where
        F: FnOnce() + 'static;
}

/// Browser timers backed by `setTimeout`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GlooScheduler;

impl Scheduler for GlooScheduler {
    type Handle = Timeout;

    fn schedule<F>(&self, delay_ms: u32, task: F) -> Timeout
    where
        F: FnOnce() + 'static,
    {
        Timeout::new(delay_ms, task)
    }
}

/// Holds at most one pending timer. Arming cancels whatever was pending.
pub struct TimerSlot<S: Scheduler = GlooScheduler> {
    scheduler: S,
    pending: Option<S::Handle>,
}

impl<S: Scheduler> TimerSlot<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            pending: None,
        }
    }

    pub fn arm<F>(&mut self, delay_ms: u32, task: F)
    where
        F: FnOnce() + 'static,
    {
        // old handle goes first so two timers of one kind never coexist
        self.pending = None;
        self.pending = Some(self.scheduler.schedule(delay_ms, task));
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

impl Default for TimerSlot<GlooScheduler> {
    fn default() -> Self {
        Self::new(GlooScheduler)
    }
}


#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::manual::ManualScheduler;
    use super::TimerSlot;

    #[test]
    fn arming_replaces_the_pending_timer() {
        let clock = ManualScheduler::new();
        let fired = Rc::new(RefCell::new(Vec::new()));
        let mut slot = TimerSlot::new(clock.clone());

        let log = fired.clone();
        slot.arm(100, move || log.borrow_mut().push("first"));
        let log = fired.clone();
        slot.arm(100, move || log.borrow_mut().push("second"));

        assert_eq!(clock.pending(), 1);
        clock.advance(200);
        assert_eq!(*fired.borrow(), vec!["second"]);
    }

    #[test]
    fn dropping_the_slot_cancels() {
        let clock = ManualScheduler::new();
        let fired = Rc::new(RefCell::new(false));
        {
            let mut slot = TimerSlot::new(clock.clone());
            let flag = fired.clone();
            slot.arm(50, move || *flag.borrow_mut() = true);
        }
        assert_eq!(clock.pending(), 0);
        clock.advance(100);
        assert!(!*fired.borrow());
    }
}
