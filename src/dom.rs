//! DOM Helpers
//!
//! Thin wrappers over web-sys used by every installer. Lookups that fail
//! (missing element, invalid selector) yield nothing instead of an error.

use taskflow_core::appearance::ClassChange;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, HtmlElement, NodeList};

pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// All elements matching `selector` in the document
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    match document.query_selector_all(selector) {
        Ok(list) => elements(list),
        Err(err) => {
            tracing::warn!(selector, error = ?err, "invalid selector");
            Vec::new()
        }
    }
}

pub fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

pub fn query_in(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

/// Attach `handler` for the lifetime of the page
pub fn listen<E>(target: &EventTarget, event: &str, mut handler: impl FnMut(E) + 'static)
where
    E: JsCast + 'static,
{
    let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    });
    if let Err(err) = target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
        tracing::warn!(event, error = ?err, "failed to attach listener");
    }
    callback.forget();
}

pub fn add_classes(element: &Element, classes: &[&str]) {
    let list = element.class_list();
    for class in classes {
        let _ = list.add_1(class);
    }
}

pub fn remove_classes(element: &Element, classes: &[&str]) {
    let list = element.class_list();
    for class in classes {
        let _ = list.remove_1(class);
    }
}

pub fn apply_classes(element: &Element, change: ClassChange) {
    remove_classes(element, change.remove);
    add_classes(element, change.add);
}

/// Set inline style properties; silently skips non-HTML elements
pub fn set_styles(element: &Element, properties: &[(&str, &str)]) {
    let Some(element) = element.dyn_ref::<HtmlElement>() else {
        return;
    };
    let style = element.style();
    for (name, value) in properties {
        let _ = style.set_property(name, value);
    }
}

pub fn text_of(element: &Element) -> String {
    element.text_content().unwrap_or_default()
}
