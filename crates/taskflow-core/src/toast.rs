//! Toast Lifecycle
//!
//! A toast slides in from off-screen, stays for the dwell time and slides out
//! before removal. Every toast runs its own timeline; there is no queue.

use crate::config::ToastTiming;
use crate::scheduler::Scheduler;

/// Anything that can surface a transient message
pub trait Notify {
    fn notify(&self, message: &str, kind: ToastKind);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn palette(&self) -> &'static str {
        match self {
            ToastKind::Success => "bg-green-500 text-white",
            ToastKind::Error => "bg-red-500 text-white",
        }
    }
}

/// Where a toast is on its timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// Just created, parked off-screen
    Entering,
    /// Slid into view
    Visible,
    /// Sliding back out, removal pending
    Leaving,
}

/// Class that parks the toast off-screen
pub const OFFSCREEN_CLASS: &str = "translate-x-full";

const BASE_CLASSES: &str =
    "fixed top-4 right-4 z-50 px-6 py-4 rounded-xl shadow-lg transform transition-transform duration-300";

/// Full class attribute for a toast
pub fn toast_classes(kind: ToastKind, phase: ToastPhase) -> String {
    match phase {
        ToastPhase::Visible => format!("{} {}", BASE_CLASSES, kind.palette()),
        ToastPhase::Entering | ToastPhase::Leaving => {
            format!("{} {} {}", BASE_CLASSES, OFFSCREEN_CLASS, kind.palette())
        }
    }
}

/// A rendered toast the lifecycle can drive
pub trait ToastSurface {
    fn set_phase(&self, phase: ToastPhase);
    /// Take the toast out of the document; a no-op if already gone
    fn remove(&self);
}

/// Schedule the full timeline for a freshly created toast
///
/// Offsets are measured from creation: reveal at `enter_delay_ms`, start
/// leaving at `dwell_ms`, removal `exit_ms` later.
pub fn run_lifecycle<S, T>(scheduler: &S, timing: &ToastTiming, surface: T)
where
    S: Scheduler + Clone + 'static,
    T: ToastSurface + Clone + 'static,
{
    let reveal = surface.clone();
    scheduler.defer(timing.enter_delay_ms, Box::new(move || reveal.set_phase(ToastPhase::Visible)));

    let exit_ms = timing.exit_ms;
    let later = scheduler.clone();
    scheduler.defer(
        timing.dwell_ms,
        Box::new(move || {
            surface.set_phase(ToastPhase::Leaving);
            later.defer(exit_ms, Box::new(move || surface.remove()));
        }),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::ManualScheduler;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct FakeToast {
        events: Rc<RefCell<Vec<(u64, &'static str)>>>,
        clock: ManualScheduler,
    }

    impl ToastSurface for FakeToast {
        fn set_phase(&self, phase: ToastPhase) {
            let label = match phase {
                ToastPhase::Entering => "entering",
                ToastPhase::Visible => "offscreen class removed",
                ToastPhase::Leaving => "offscreen class added",
            };
            self.events.borrow_mut().push((self.clock.now(), label));
        }

        fn remove(&self) {
            self.events.borrow_mut().push((self.clock.now(), "removed"));
        }
    }

    #[test]
    fn test_timeline_from_creation() {
        let clock = ManualScheduler::new();
        let toast = FakeToast {
            clock: clock.clone(),
            ..Default::default()
        };
        run_lifecycle(&clock, &ToastTiming::default(), toast.clone());

        clock.advance(99);
        assert!(toast.events.borrow().is_empty());
        clock.advance(1);
        assert_eq!(toast.events.borrow().last(), Some(&(100, "offscreen class removed")));
        clock.advance(2_900);
        assert_eq!(toast.events.borrow().last(), Some(&(3_000, "offscreen class added")));
        clock.advance(299);
        assert_eq!(toast.events.borrow().len(), 2);
        clock.advance(1);
        assert_eq!(toast.events.borrow().last(), Some(&(3_300, "removed")));
        assert_eq!(clock.pending_count(), 0);
    }

    #[test]
    fn test_concurrent_toasts_are_independent() {
        let clock = ManualScheduler::new();
        let first = FakeToast {
            clock: clock.clone(),
            ..Default::default()
        };
        let second = FakeToast {
            clock: clock.clone(),
            ..Default::default()
        };
        run_lifecycle(&clock, &ToastTiming::default(), first.clone());
        clock.advance(1_000);
        run_lifecycle(&clock, &ToastTiming::default(), second.clone());

        clock.advance(2_300);
        assert_eq!(first.events.borrow().last(), Some(&(3_300, "removed")));
        assert_eq!(second.events.borrow().last(), Some(&(1_100, "offscreen class removed")));
        clock.advance(1_000);
        assert_eq!(second.events.borrow().last(), Some(&(4_300, "removed")));
    }

    #[test]
    fn test_classes_per_phase() {
        let entering = toast_classes(ToastKind::Success, ToastPhase::Entering);
        let visible = toast_classes(ToastKind::Error, ToastPhase::Visible);
        assert!(entering.contains(OFFSCREEN_CLASS));
        assert!(entering.ends_with("bg-green-500 text-white"));
        assert!(!visible.contains(OFFSCREEN_CLASS));
        assert!(visible.contains("bg-red-500"));
        assert!(toast_classes(ToastKind::Error, ToastPhase::Leaving).contains(OFFSCREEN_CLASS));
    }
}
