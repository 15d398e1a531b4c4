//! TaskFlow Frontend Entry Point

mod animations;
mod app;
mod calendar;
mod charts;
mod commands;
mod components;
mod context;
mod dom;
mod enhancements;
mod filters;
mod page_data;
mod scheduler;
mod toggle;

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn main() {
    console_error_panic_hook::set_once();
    app::start();
}
