//! Toast Notifications
//!
//! `Toaster` pushes entries into a signal; `ToastHost` renders one element per
//! entry at the end of `<body>`. Each entry's phase is driven by the shared
//! toast lifecycle.

use std::cell::Cell;
use std::rc::Rc;

use leptos::prelude::*;
use taskflow_core::scheduler::Scheduler;
use taskflow_core::toast::{run_lifecycle, toast_classes, Notify, ToastKind, ToastPhase, ToastSurface};
use taskflow_core::ToastTiming;

use crate::scheduler::BrowserScheduler;

/// One visible toast
#[derive(Clone)]
pub struct ToastEntry {
    id: u64,
    message: String,
    kind: ToastKind,
    phase: ArcRwSignal<ToastPhase>,
}

/// Renders every live toast, stacked in creation order
#[component]
pub fn ToastHost(entries: ArcRwSignal<Vec<ToastEntry>>) -> impl IntoView {
    view! {
        <For
            each=move || entries.get()
            key=|entry| entry.id
            children=move |entry: ToastEntry| {
                let kind = entry.kind;
                let phase = entry.phase.clone();
                view! {
                    <div role="status" class=move || toast_classes(kind, phase.get())>{entry.message}</div>
                }
            }
        />
    }
}

/// Handle on a mounted toast for the lifecycle
#[derive(Clone)]
struct MountedToast {
    id: u64,
    phase: ArcRwSignal<ToastPhase>,
    entries: ArcRwSignal<Vec<ToastEntry>>,
}

impl ToastSurface for MountedToast {
    fn set_phase(&self, phase: ToastPhase) {
        self.phase.set(phase);
    }

    fn remove(&self) {
        let id = self.id;
        self.entries.update(|list| list.retain(|entry| entry.id != id));
    }
}

/// Toast notifier shared by every installer
#[derive(Clone)]
pub struct Toaster<S = BrowserScheduler> {
    entries: ArcRwSignal<Vec<ToastEntry>>,
    next_id: Rc<Cell<u64>>,
    timing: ToastTiming,
    scheduler: S,
}

impl<S: Scheduler + Clone + 'static> Toaster<S> {
    /// Mount the host at the end of `<body>`
    pub fn mount(timing: ToastTiming, scheduler: S) -> Self {
        let entries = ArcRwSignal::new(Vec::new());
        let host = entries.clone();
        mount_to_body(move || view! { <ToastHost entries=host /> });
        Self {
            entries,
            next_id: Rc::new(Cell::new(0)),
            timing,
            scheduler,
        }
    }
}

impl<S: Scheduler + Clone + 'static> Notify for Toaster<S> {
    fn notify(&self, message: &str, kind: ToastKind) {
        tracing::debug!(message, ?kind, "showing toast");
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        let phase = ArcRwSignal::new(ToastPhase::Entering);
        self.entries.update(|list| {
            list.push(ToastEntry {
                id,
                message: message.to_string(),
                kind,
                phase: phase.clone(),
            })
        });

        run_lifecycle(
            &self.scheduler,
            &self.timing,
            MountedToast {
                id,
                phase,
                entries: self.entries.clone(),
            },
        );
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use taskflow_core::toast::OFFSCREEN_CLASS;
    use taskflow_core::ManualScheduler;
    use wasm_bindgen_test::wasm_bindgen_test;
    use web_sys::Element;

    use crate::dom;

    fn toast_with(message: &str) -> Option<Element> {
        let document = dom::document()?;
        dom::query_all(&document, "[role=status]")
            .into_iter()
            .find(|el| el.text_content().as_deref() == Some(message))
    }

    fn offscreen(el: &Element) -> bool {
        el.class_list().contains(OFFSCREEN_CLASS)
    }

    // Let pending reactive updates reach the DOM
    async fn settle() {
        TimeoutFuture::new(0).await;
    }

    #[wasm_bindgen_test]
    async fn toast_slides_in_out_and_is_removed() {
        let clock = ManualScheduler::new();
        let toaster = Toaster::mount(ToastTiming::default(), clock.clone());
        toaster.notify("Task completed", ToastKind::Success);
        settle().await;

        let toast = toast_with("Task completed").unwrap();
        assert!(offscreen(&toast));
        assert!(toast.class_list().contains("bg-green-500"));

        clock.advance(100);
        settle().await;
        assert!(!offscreen(&toast));

        clock.advance(2_900);
        settle().await;
        assert!(offscreen(&toast));
        assert!(toast_with("Task completed").is_some());

        clock.advance(300);
        settle().await;
        assert!(toast_with("Task completed").is_none());
    }

    #[wasm_bindgen_test]
    async fn error_toasts_stack_independently() {
        let clock = ManualScheduler::new();
        let toaster = Toaster::mount(ToastTiming::default(), clock.clone());
        toaster.notify("First failure", ToastKind::Error);
        clock.advance(1_000);
        toaster.notify("Second failure", ToastKind::Error);

        clock.advance(2_300);
        settle().await;
        assert!(toast_with("First failure").is_none());
        let second = toast_with("Second failure").unwrap();
        assert!(second.class_list().contains("bg-red-500"));
        assert!(!offscreen(&second));
    }
}
