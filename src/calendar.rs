//! Calendar Effects
//!
//! Hover scaling, click flash on days with tasks, navigation press feedback
//! and the grid entrance. Purely cosmetic.

use taskflow_core::animation::{
    is_blank_day, Entrance, AGENDA_CARD_SELECTOR, CALENDAR_DAY_SELECTOR, CALENDAR_GRID_SELECTOR, DAY_FLASH,
    HOVER_SCALE, HOVER_TRANSITION, MONTH_NAV_SELECTOR, NAV_PRESS_OPACITY, NAV_PRESS_TRANSFORM, REST_SCALE,
    TASK_INDICATOR_SELECTOR,
};
use taskflow_core::scheduler::Scheduler;
use web_sys::{Document, Element, MouseEvent};

use crate::animations::stagger;
use crate::context::AppContext;
use crate::dom;

fn flash_day(day: &Element, scheduler: &impl Scheduler) {
    let number = dom::query_in(day, "span").map(|span| dom::text_of(&span));
    tracing::debug!(day = number.as_deref().map(str::trim).unwrap_or(""), "calendar day clicked");

    dom::set_styles(
        day,
        &[("background-color", DAY_FLASH.background), ("border-color", DAY_FLASH.border)],
    );
    let day = day.clone();
    scheduler.defer(
        DAY_FLASH.duration_ms,
        Box::new(move || dom::set_styles(&day, &[("background-color", ""), ("border-color", "")])),
    );
}

fn bind_day(ctx: &AppContext, day: Element) {
    if is_blank_day(&dom::text_of(&day)) {
        return;
    }

    let hovered = day.clone();
    dom::listen::<MouseEvent>(&day, "mouseenter", move |_| {
        dom::set_styles(&hovered, &[("transform", HOVER_SCALE), ("transition", HOVER_TRANSITION)]);
    });
    let left = day.clone();
    dom::listen::<MouseEvent>(&day, "mouseleave", move |_| {
        dom::set_styles(&left, &[("transform", REST_SCALE)]);
    });

    if dom::query_in(&day, TASK_INDICATOR_SELECTOR).is_some() {
        dom::set_styles(&day, &[("cursor", "pointer")]);
        let clicked = day.clone();
        let scheduler = ctx.scheduler;
        dom::listen::<MouseEvent>(&day, "click", move |_| flash_day(&clicked, &scheduler));
    }
}

pub fn install(ctx: &AppContext, document: &Document) {
    let days = dom::query_all(document, CALENDAR_DAY_SELECTOR);
    for day in days.iter().cloned() {
        bind_day(ctx, day);
    }

    for link in dom::query_all(document, MONTH_NAV_SELECTOR) {
        let pressed = link.clone();
        dom::listen::<MouseEvent>(&link, "click", move |_| {
            dom::set_styles(&pressed, &[("opacity", NAV_PRESS_OPACITY), ("transform", NAV_PRESS_TRANSFORM)]);
        });
    }

    if dom::query(document, CALENDAR_GRID_SELECTOR).is_some() {
        stagger(days, Entrance::CALENDAR_DAYS, &ctx.scheduler);
        stagger(
            dom::query_all(document, AGENDA_CARD_SELECTOR),
            Entrance::AGENDA_CARDS,
            &ctx.scheduler,
        );
    }
}
