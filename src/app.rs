//! TaskFlow Frontend Boot
//!
//! Composition root: builds the shared context and hands it to each
//! installer. Installers no-op when their markup is missing, so the same
//! bundle serves every page.

use web_sys::Document;

use crate::charts::Dashboard;
use crate::components::Toaster;
use crate::context::AppContext;
use crate::scheduler::BrowserScheduler;
use crate::{animations, calendar, dom, enhancements, filters, page_data, toggle};

/// Enhance the page now, or once the document has finished parsing
///
/// The configuration block is part of the markup, so nothing reads it before
/// parsing is done.
pub fn start() {
    let Some(document) = dom::document() else {
        return;
    };

    if document.ready_state() == "loading" {
        let doc = document.clone();
        let mut booted = false;
        dom::listen::<web_sys::Event>(&document, "DOMContentLoaded", move |_| {
            if !std::mem::replace(&mut booted, true) {
                boot(&doc);
            }
        });
    } else {
        boot(&document);
    }
}

fn boot(document: &Document) {
    let (config, config_error) = page_data::page_config(document);
    if config.debug {
        wasm_tracing::set_as_global_default();
    }
    if let Some(err) = config_error {
        tracing::warn!(error = %err, "ignoring embedded configuration");
    }

    let scheduler = BrowserScheduler;
    let toaster = Toaster::mount(config.toast.clone(), scheduler);
    let dashboard = Dashboard::new(document.clone());
    let ctx = AppContext::new(config, scheduler, toaster, dashboard);

    enhancements::install(document);
    filters::install(&ctx, document);
    toggle::install(&ctx, document);
    animations::install(&ctx, document);
    calendar::install(&ctx, document);
    ctx.refresh_dashboard_after(ctx.config.chart_init_delay_ms);

    tracing::info!(path = %document.url().unwrap_or_default(), "TaskFlow frontend ready");
}
