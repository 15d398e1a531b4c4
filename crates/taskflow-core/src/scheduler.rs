//! Timer Abstraction
//!
//! Every delayed action in the layer (debounce windows, toast dwell, staggered
//! animations) goes through [`Scheduler`]. The browser binds it to
//! `setTimeout`; tests drive a [`ManualScheduler`] by hand.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// A one-shot callback queued for later
pub type Task = Box<dyn FnOnce() + 'static>;

/// Source of delayed callbacks
pub trait Scheduler {
    /// Cancels the scheduled task when dropped
    type Handle;

    /// Run `task` after `delay_ms`; dropping the handle cancels it
    fn schedule(&self, delay_ms: u32, task: Task) -> Self::Handle;

    /// Run `task` after `delay_ms` with no way to cancel it
    fn defer(&self, delay_ms: u32, task: Task);
}

struct Pending {
    due: u64,
    seq: u64,
    cancelled: Rc<Cell<bool>>,
    task: Task,
}

#[derive(Default)]
struct Clock {
    now: u64,
    next_seq: u64,
    pending: Vec<Pending>,
}

/// Virtual clock: tasks only run when [`ManualScheduler::advance`] moves time
/// past their due instant.
///
/// Tasks due at the same instant run in the order they were scheduled.
/// Tasks scheduled while advancing run in the same call if they fall due
/// before the target instant.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<Clock>>,
}

/// Handle returned by [`ManualScheduler::schedule`]
pub struct ManualHandle {
    cancelled: Rc<Cell<bool>>,
}

impl Drop for ManualHandle {
    fn drop(&mut self) {
        self.cancelled.set(true);
    }
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Milliseconds elapsed on the virtual clock
    pub fn now(&self) -> u64 {
        self.clock.borrow().now
    }

    /// Tasks still waiting, cancelled ones excluded
    pub fn pending_count(&self) -> usize {
        self.clock
            .borrow()
            .pending
            .iter()
            .filter(|p| !p.cancelled.get())
            .count()
    }

    /// Move the clock forward, running every task that falls due
    pub fn advance(&self, ms: u64) {
        let target = self.clock.borrow().now + ms;
        loop {
            let next = {
                let mut clock = self.clock.borrow_mut();
                let idx = clock
                    .pending
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| p.due <= target)
                    .min_by_key(|(_, p)| (p.due, p.seq))
                    .map(|(i, _)| i);
                match idx {
                    Some(i) => {
                        let pending = clock.pending.swap_remove(i);
                        clock.now = pending.due;
                        Some(pending)
                    }
                    None => None,
                }
            };
            // Borrow released before running so tasks may schedule more work
            match next {
                Some(pending) if !pending.cancelled.get() => (pending.task)(),
                Some(_) => {}
                None => break,
            }
        }
        self.clock.borrow_mut().now = target;
    }

    fn push(&self, delay_ms: u32, task: Task) -> Rc<Cell<bool>> {
        let cancelled = Rc::new(Cell::new(false));
        let mut clock = self.clock.borrow_mut();
        let seq = clock.next_seq;
        clock.next_seq += 1;
        let due = clock.now + u64::from(delay_ms);
        clock.pending.push(Pending {
            due,
            seq,
            cancelled: cancelled.clone(),
            task,
        });
        cancelled
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn schedule(&self, delay_ms: u32, task: Task) -> ManualHandle {
        ManualHandle {
            cancelled: self.push(delay_ms, task),
        }
    }

    fn defer(&self, delay_ms: u32, task: Task) {
        self.push(delay_ms, task);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder() -> (Rc<RefCell<Vec<(u64, &'static str)>>>, ManualScheduler) {
        (Rc::new(RefCell::new(Vec::new())), ManualScheduler::new())
    }

    #[test]
    fn test_tasks_run_in_due_order() {
        let (log, clock) = recorder();
        for (delay, name) in [(300, "c"), (100, "a"), (200, "b")] {
            let log = log.clone();
            let at = clock.clone();
            clock.defer(delay, Box::new(move || log.borrow_mut().push((at.now(), name))));
        }
        clock.advance(250);
        assert_eq!(*log.borrow(), vec![(100, "a"), (200, "b")]);
        clock.advance(50);
        assert_eq!(log.borrow().last(), Some(&(300, "c")));
        assert_eq!(clock.now(), 300);
    }

    #[test]
    fn test_dropped_handle_cancels() {
        let (log, clock) = recorder();
        let log2 = log.clone();
        let handle = clock.schedule(10, Box::new(move || log2.borrow_mut().push((0, "x"))));
        drop(handle);
        clock.advance(100);
        assert!(log.borrow().is_empty());
        assert_eq!(clock.pending_count(), 0);
    }

    #[test]
    fn test_nested_schedule_within_advance() {
        let (log, clock) = recorder();
        let inner_clock = clock.clone();
        let log2 = log.clone();
        clock.defer(
            100,
            Box::new(move || {
                let at = inner_clock.clone();
                inner_clock.defer(50, Box::new(move || log2.borrow_mut().push((at.now(), "nested"))));
            }),
        );
        clock.advance(200);
        assert_eq!(*log.borrow(), vec![(150, "nested")]);
    }
}
