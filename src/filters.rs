//! Filter Synchronizer
//!
//! Mirrors the task list filter controls into the URL. Dropdowns navigate on
//! change; the search box navigates once typing pauses.

use std::rc::Rc;

use taskflow_core::debounce::Debouncer;
use taskflow_core::filter::{FilterField, FilterState};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement, HtmlSelectElement};

use crate::context::AppContext;
use crate::dom;

const TOP_SEARCH_ID: &str = "topSearchInput";

fn control_selector(tag: &str, field: FilterField) -> String {
    format!("{}[name=\"{}\"]", tag, field.param())
}

fn search_input(document: &Document) -> Option<HtmlInputElement> {
    document
        .get_element_by_id(TOP_SEARCH_ID)
        .or_else(|| dom::query(document, &control_selector("input", FilterField::Search)))
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
}

fn select(document: &Document, field: FilterField) -> Option<HtmlSelectElement> {
    dom::query(document, &control_selector("select", field)).and_then(|el| el.dyn_into().ok())
}

/// Current value of every control, read at the moment of navigation
pub fn read_state(document: &Document) -> FilterState {
    FilterState::from_controls(|field| match field {
        FilterField::Search => search_input(document).map(|input| input.value()),
        _ => select(document, field).map(|select| select.value()),
    })
}

fn navigate(document: &Document) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let location = window.location();
    let path = location.pathname().unwrap_or_default();
    let url = read_state(document).navigation_url(&path);
    tracing::debug!(%url, "applying filters");
    if let Err(err) = location.set_href(&url) {
        tracing::warn!(error = ?err, "filter navigation failed");
    }
}

pub fn install(ctx: &AppContext, document: &Document) {
    for field in FilterField::ALL {
        if field == FilterField::Search {
            continue;
        }
        let Some(control) = select(document, field) else {
            continue;
        };
        let doc = document.clone();
        dom::listen::<web_sys::Event>(&control, "change", move |_| {
            tracing::debug!(filter = field.param(), "filter changed");
            navigate(&doc);
        });
    }

    if let Some(input) = search_input(document) {
        let debouncer = Rc::new(Debouncer::new(ctx.scheduler, ctx.config.search_debounce_ms));
        let doc = document.clone();
        dom::listen::<web_sys::Event>(&input, "input", move |_| {
            let doc = doc.clone();
            debouncer.call(move || navigate(&doc));
        });
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn reads_every_control() {
        let document = dom::document().unwrap();
        let root = document.create_element("form").unwrap();
        root.set_inner_html(
            r#"<input id="topSearchInput" name="search" value="  weekly report ">
               <select name="status"><option value="">All</option><option value="completed" selected>Done</option></select>
               <select name="priority"><option value="" selected>Any</option></select>
               <select name="project_id"><option value="None" selected>None</option></select>
               <select name="sort"><option value="due_date" selected>Due</option></select>"#,
        );
        document.body().unwrap().append_child(&root).unwrap();

        let url = read_state(&document).navigation_url("/tasks/");
        root.remove();

        assert_eq!(url, "/tasks/?search=weekly+report&status=completed&sort=due_date");
    }
}
