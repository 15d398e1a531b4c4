//! Page Enhancements
//!
//! Behaviour shared by every page: keyboard shortcuts, smooth anchor
//! scrolling, focus rings and autofocus.

use taskflow_core::shortcuts::{match_shortcut, Shortcut, OPEN_DROPDOWN_CLASS, SEARCH_INPUT_SELECTOR};
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, KeyboardEvent, MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::dom;

const FOCUS_RING: &[&str] = &["ring-2", "ring-indigo-500"];
const FIRST_INPUT_SELECTOR: &str = "form input:not([type=\"hidden\"]):first-of-type";

fn focus(document: &Document, selector: &str) -> bool {
    match dom::query(document, selector).and_then(|el| el.dyn_into::<HtmlElement>().ok()) {
        Some(el) => el.focus().is_ok(),
        None => false,
    }
}

fn bind_shortcuts(document: &Document) {
    let doc = document.clone();
    dom::listen::<KeyboardEvent>(document, "keydown", move |ev| {
        match match_shortcut(&ev.key(), ev.meta_key(), ev.ctrl_key()) {
            Some(Shortcut::FocusSearch) => {
                ev.prevent_default();
                if focus(&doc, SEARCH_INPUT_SELECTOR) {
                    tracing::debug!("search focused via keyboard shortcut");
                }
            }
            Some(Shortcut::CloseDropdowns) => {
                let selector = format!(".{}", OPEN_DROPDOWN_CLASS);
                for dropdown in dom::query_all(&doc, &selector) {
                    dom::remove_classes(&dropdown, &[OPEN_DROPDOWN_CLASS]);
                }
            }
            None => {}
        }
    });
}

fn bind_smooth_scroll(document: &Document) {
    for link in dom::query_all(document, "a[href^=\"#\"]") {
        let doc = document.clone();
        let anchor = link.clone();
        dom::listen::<MouseEvent>(&link, "click", move |ev| {
            let Some(href) = anchor.get_attribute("href") else {
                return;
            };
            // A bare "#" is not a valid selector and simply misses
            let Some(target) = dom::query(&doc, &href) else {
                return;
            };
            ev.prevent_default();
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        });
    }
}

fn bind_focus_rings(document: &Document) {
    for input in dom::query_all(document, "input, textarea, select") {
        let Some(parent) = input.parent_element() else {
            continue;
        };
        let focused = parent.clone();
        dom::listen::<Event>(&input, "focus", move |_| dom::add_classes(&focused, FOCUS_RING));
        dom::listen::<Event>(&input, "blur", move |_| dom::remove_classes(&parent, FOCUS_RING));
    }
}

pub fn install(document: &Document) {
    focus(document, FIRST_INPUT_SELECTOR);
    bind_focus_rings(document);
    bind_smooth_scroll(document);
    bind_shortcuts(document);
}
