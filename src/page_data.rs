//! Page Data Provider
//!
//! Reads what the server rendered into the page: aggregate numbers, the
//! forgery-protection token and the optional configuration block.

use taskflow_core::config::CONFIG_ELEMENT_ID;
use taskflow_core::stats::PageText;
use taskflow_core::{ConfigError, UiConfig};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement};

use crate::dom;

const CSRF_SELECTOR: &str = "[name=csrfmiddlewaretoken]";

/// Element text lookup backed by the live document
pub struct DocumentText<'a>(pub &'a Document);

impl PageText for DocumentText<'_> {
    fn text_of(&self, id: &str) -> Option<String> {
        self.0.get_element_by_id(id)?.text_content()
    }
}

/// Value of the hidden CSRF field, empty when the page has none
pub fn csrf_token(document: &Document) -> String {
    let token = dom::query(document, CSRF_SELECTOR)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value());
    match token {
        Some(token) => token,
        None => {
            tracing::warn!("page has no CSRF token field; toggles will be rejected");
            String::new()
        }
    }
}

/// Raw JSON of the embedded configuration block, if any
pub fn embedded_config(document: &Document) -> Option<String> {
    document.get_element_by_id(CONFIG_ELEMENT_ID)?.text_content()
}

/// Effective configuration for a parsed document
///
/// A malformed block yields the defaults together with the parse error.
pub fn page_config(document: &Document) -> (UiConfig, Option<ConfigError>) {
    match UiConfig::from_embedded(embedded_config(document).as_deref()) {
        Ok(config) => (config, None),
        Err(err) => (UiConfig::default(), Some(err)),
    }
}
