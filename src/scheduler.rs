//! Browser Timers
//!
//! [`Scheduler`] on top of `setTimeout` via gloo-timers.

use gloo_timers::callback::Timeout;
use taskflow_core::scheduler::{Scheduler, Task};

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    /// Dropping a `Timeout` clears it
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Task) -> Timeout {
        Timeout::new(delay_ms, task)
    }

    fn defer(&self, delay_ms: u32, task: Task) {
        let _ = Timeout::new(delay_ms, task).forget();
    }
}
