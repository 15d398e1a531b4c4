//! Debounce Utility
//!
//! Delays an action until no new call arrived for a fixed quiet period.

use std::cell::RefCell;
use std::rc::Rc;

use crate::scheduler::Scheduler;

/// Trailing-edge debouncer over an injected [`Scheduler`]
///
/// Each [`Debouncer::call`] supersedes the pending one; a superseded action is
/// cancelled, never executed.
pub struct Debouncer<S: Scheduler> {
    scheduler: S,
    delay_ms: u32,
    pending: Rc<RefCell<Option<S::Handle>>>,
}

impl<S: Scheduler> Debouncer<S> {
    pub fn new(scheduler: S, delay_ms: u32) -> Self {
        Self {
            scheduler,
            delay_ms,
            pending: Rc::new(RefCell::new(None)),
        }
    }

    /// Restart the quiet window with `action` as the one to run
    pub fn call(&self, action: impl FnOnce() + 'static) {
        let handle = self.scheduler.schedule(self.delay_ms, Box::new(action));
        // Replacing drops (and so cancels) the previous handle
        let previous = self.pending.replace(Some(handle));
        drop(previous);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::ManualScheduler;

    #[test]
    fn test_keystroke_burst_fires_once_after_last() {
        let clock = ManualScheduler::new();
        let debouncer = Debouncer::new(clock.clone(), 500);
        let fired: Rc<RefCell<Vec<(u64, String)>>> = Rc::new(RefCell::new(Vec::new()));

        for (at, value) in [(0, "r"), (100, "re"), (200, "rep")] {
            clock.advance(at - clock.now());
            let fired = fired.clone();
            let at_clock = clock.clone();
            debouncer.call(move || fired.borrow_mut().push((at_clock.now(), value.to_string())));
        }

        clock.advance(499);
        assert!(fired.borrow().is_empty());
        clock.advance(1);
        assert_eq!(*fired.borrow(), vec![(700, "rep".to_string())]);
        clock.advance(5_000);
        assert_eq!(fired.borrow().len(), 1);
    }

    #[test]
    fn test_separate_windows_each_fire() {
        let clock = ManualScheduler::new();
        let debouncer = Debouncer::new(clock.clone(), 500);
        let count = Rc::new(RefCell::new(0));
        for _ in 0..2 {
            let count = count.clone();
            debouncer.call(move || *count.borrow_mut() += 1);
            clock.advance(600);
        }
        assert_eq!(*count.borrow(), 2);
    }
}
