//! Toggle Buttons
//!
//! Binds `.toggle-task` and `.toggle-project-status` buttons to the toggle
//! controller and renders confirmed results into their subtree.

use std::rc::Rc;

use leptos::task::spawn_local;
use taskflow_core::appearance::{ProjectAppearance, TaskAppearance, BUSY_CLASSES, TASK_CARD_SELECTOR};
use taskflow_core::toggle::{ToggleController, ToggleOutcome, ToggleSurface};
use taskflow_core::{EntityKind, ToggleTarget};
use web_sys::{Document, Element, MouseEvent};

use crate::commands::HttpToggleTransport;
use crate::components::Toaster;
use crate::context::AppContext;
use crate::{dom, page_data};

type Controller = ToggleController<HttpToggleTransport, Toaster>;

const TASK_BUTTON_SELECTOR: &str = ".toggle-task";
const PROJECT_BUTTON_SELECTOR: &str = ".toggle-project-status";

fn set_busy(button: &Element, busy: bool) {
    if busy {
        let _ = button.set_attribute("disabled", "");
        dom::add_classes(button, BUSY_CLASSES);
    } else {
        let _ = button.remove_attribute("disabled");
        dom::remove_classes(button, BUSY_CLASSES);
    }
}

/// Task button plus the card around it
struct TaskSurface {
    button: Element,
}

impl ToggleSurface for TaskSurface {
    fn set_busy(&self, busy: bool) {
        set_busy(&self.button, busy);
    }

    fn show_completed(&self, completed: bool) {
        let look = TaskAppearance::for_state(completed);
        dom::apply_classes(&self.button, look.button);
        self.button.set_inner_html(look.button_html);

        let Some(card) = self.button.closest(TASK_CARD_SELECTOR).ok().flatten() else {
            return;
        };
        if let Some(title) = dom::query_in(&card, "h3") {
            dom::apply_classes(&title, look.title);
        }
        if let Some(description) = dom::query_in(&card, "p") {
            dom::apply_classes(&description, look.description);
        }
    }
}

/// Project button plus its status badge
struct ProjectSurface {
    button: Element,
    badge: Option<Element>,
}

impl ToggleSurface for ProjectSurface {
    fn set_busy(&self, busy: bool) {
        set_busy(&self.button, busy);
    }

    fn show_completed(&self, completed: bool) {
        let look = ProjectAppearance::for_state(completed);
        self.button.set_text_content(Some(look.button_label));
        if let Some(badge) = &self.badge {
            badge.set_text_content(Some(look.badge_label));
            dom::apply_classes(badge, look.badge);
        }
    }
}

/// Completion state the markup currently displays
fn shows_completed(button: &Element, kind: EntityKind) -> bool {
    match kind {
        EntityKind::Task => TaskAppearance::for_state(true)
            .button
            .add
            .iter()
            .all(|class| button.class_list().contains(class)),
        EntityKind::Project => {
            dom::text_of(button).trim() == ProjectAppearance::for_state(true).button_label
        }
    }
}

fn bind(ctx: &AppContext, document: &Document, controller: Rc<Controller>, button: Element, kind: EntityKind) {
    let ctx = ctx.clone();
    let doc = document.clone();
    let target_el = button.clone();
    dom::listen::<MouseEvent>(&target_el, "click", move |ev| {
        if kind == EntityKind::Project {
            ev.prevent_default();
        }
        if button.has_attribute("disabled") {
            return;
        }
        let raw_id = button.get_attribute(kind.id_attribute()).unwrap_or_default();
        let target = match ToggleTarget::new(kind, raw_id) {
            Ok(target) => target.with_current_completed(shows_completed(&button, kind)),
            Err(err) => {
                tracing::warn!(error = %err, "ignoring toggle click");
                return;
            }
        };

        let controller = controller.clone();
        let ctx = ctx.clone();
        let button = button.clone();
        let doc = doc.clone();
        spawn_local(async move {
            let outcome = match kind {
                EntityKind::Task => controller.toggle(&target, &TaskSurface { button }).await,
                EntityKind::Project => {
                    let badge = doc.get_element_by_id(&ProjectAppearance::badge_id(target.entity_id()));
                    controller.toggle(&target, &ProjectSurface { button, badge }).await
                }
            };
            if kind == EntityKind::Task && matches!(outcome, ToggleOutcome::Applied { .. }) {
                ctx.refresh_dashboard_after(ctx.config.stats_refresh_delay_ms);
            }
        });
    });
}

pub fn install(ctx: &AppContext, document: &Document) {
    let tasks = dom::query_all(document, TASK_BUTTON_SELECTOR);
    let projects = dom::query_all(document, PROJECT_BUTTON_SELECTOR);
    if tasks.is_empty() && projects.is_empty() {
        return;
    }
    tracing::debug!(tasks = tasks.len(), projects = projects.len(), "binding toggle buttons");

    let transport = HttpToggleTransport::new(page_data::csrf_token(document));
    let controller = Rc::new(ToggleController::new(transport, ctx.toaster.clone()));

    for button in tasks {
        bind(ctx, document, controller.clone(), button, EntityKind::Task);
    }
    for button in projects {
        bind(ctx, document, controller.clone(), button, EntityKind::Project);
    }
}
