//! Entrance Animations
//!
//! Staggered fade/slide-in for lists of server-rendered elements.

use taskflow_core::animation::Entrance;
use taskflow_core::appearance::TASK_CARD_SELECTOR;
use taskflow_core::scheduler::Scheduler;
use web_sys::{Document, Element};

use crate::context::AppContext;
use crate::dom;

/// Park every element at its offset, then reveal them one step apart
pub fn stagger(elements: Vec<Element>, entrance: Entrance, scheduler: &impl Scheduler) {
    for (index, element) in elements.into_iter().enumerate() {
        dom::set_styles(&element, &[("opacity", "0"), ("transform", entrance.offset)]);
        scheduler.defer(
            entrance.delay_for(index),
            Box::new(move || {
                dom::set_styles(
                    &element,
                    &[
                        ("transition", entrance.transition),
                        ("opacity", "1"),
                        ("transform", entrance.settled),
                    ],
                );
            }),
        );
    }
}

/// Cards that get the entrance, whether or not they hold a toggle
fn task_cards(document: &Document) -> Vec<Element> {
    dom::query_all(document, TASK_CARD_SELECTOR)
}

/// Every task card on the page, dashboard included
pub fn install(ctx: &AppContext, document: &Document) {
    let cards = task_cards(document);
    if cards.is_empty() {
        return;
    }
    stagger(cards, Entrance::task_cards(ctx.config.stagger_step_ms), &ctx.scheduler);
}
