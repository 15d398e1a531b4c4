//! Chart.js Binding
//!
//! Draws the dashboard charts with the page's global `Chart` and refreshes the
//! completion percentage card.

use std::rc::Rc;

use js_sys::Reflect;
use serde::Serialize;
use taskflow_core::charts::{is_integer_tick, tooltip_label, ChartBackend, ChartCallback, ChartConfig, DashboardRenderer};
use taskflow_core::scheduler::Scheduler;
use taskflow_core::stats::{ids, DashboardSnapshot, DashboardStats};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement};

use crate::page_data::DocumentText;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = Chart)]
    type JsChart;

    #[wasm_bindgen(catch, constructor, js_class = "Chart")]
    fn new(canvas: &HtmlCanvasElement, config: &JsValue) -> Result<JsChart, JsValue>;

    #[wasm_bindgen(method)]
    fn destroy(this: &JsChart);
}

type JsCallback = Closure<dyn Fn(JsValue) -> JsValue>;

/// A drawn chart and the JS callbacks its config points at
pub struct LiveChart {
    chart: JsChart,
    _callbacks: Vec<JsCallback>,
}

fn make_callback(callback: ChartCallback) -> JsCallback {
    match callback {
        ChartCallback::TooltipTaskCount => Closure::new(|context: JsValue| {
            let value = Reflect::get(&context, &JsValue::from_str("parsed"))
                .and_then(|parsed| Reflect::get(&parsed, &JsValue::from_str("y")))
                .ok()
                .and_then(|y| y.as_f64())
                .unwrap_or(0.0);
            JsValue::from_str(&tooltip_label(value))
        }),
        ChartCallback::IntegerTicks => Closure::new(|value: JsValue| match value.as_f64() {
            Some(v) if is_integer_tick(v) => value,
            _ => JsValue::from_str(""),
        }),
    }
}

/// Hang each callback off its config path; missing paths are skipped
fn install_callbacks(config: &JsValue, callbacks: &[ChartCallback]) -> Vec<JsCallback> {
    let mut installed = Vec::new();
    for callback in callbacks {
        let (path, property) = callback.location();
        let parent = path.iter().try_fold(config.clone(), |node, key| {
            Reflect::get(&node, &JsValue::from_str(key)).ok().filter(|v| v.is_object())
        });
        let Some(parent) = parent else {
            tracing::warn!(?callback, "chart config has no slot for callback");
            continue;
        };
        let function = make_callback(*callback);
        if Reflect::set(&parent, &JsValue::from_str(property), function.as_ref()).is_ok() {
            installed.push(function);
        }
    }
    installed
}

pub struct ChartJs {
    document: Document,
}

impl ChartBackend for ChartJs {
    type Chart = LiveChart;

    fn create(&self, canvas_id: &str, config: &ChartConfig) -> Option<LiveChart> {
        let canvas = self
            .document
            .get_element_by_id(canvas_id)?
            .dyn_into::<HtmlCanvasElement>()
            .ok()?;

        let value = match config.serialize(&serde_wasm_bindgen::Serializer::json_compatible()) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(canvas = canvas_id, error = %err, "chart config did not serialize");
                return None;
            }
        };
        let callbacks = install_callbacks(&value, &config.callbacks);

        match JsChart::new(&canvas, &value) {
            Ok(chart) => Some(LiveChart {
                chart,
                _callbacks: callbacks,
            }),
            Err(err) => {
                tracing::warn!(canvas = canvas_id, error = ?err, "Chart.js could not draw");
                None
            }
        }
    }

    fn destroy(&self, chart: LiveChart) {
        chart.chart.destroy();
    }
}

fn show_completion_percentage(document: &Document, stats: &DashboardStats) {
    if let Some(el) = document.get_element_by_id(ids::COMPLETION_PERCENTAGE) {
        el.set_text_content(Some(&stats.completion_label()));
    }
}

/// Dashboard charts for the current page
#[derive(Clone)]
pub struct Dashboard {
    document: Document,
    renderer: Rc<DashboardRenderer<ChartJs>>,
}

impl Dashboard {
    pub fn new(document: Document) -> Self {
        let renderer = DashboardRenderer::new(ChartJs {
            document: document.clone(),
        });
        Self {
            document,
            renderer: Rc::new(renderer),
        }
    }

    /// Read the snapshot the server rendered and redraw everything
    pub fn refresh(&self) {
        let snapshot = DashboardSnapshot::read(&DocumentText(&self.document));
        tracing::debug!(
            total = snapshot.stats.total,
            completed = snapshot.stats.completed,
            pending = snapshot.stats.pending,
            "dashboard stats read"
        );
        show_completion_percentage(&self.document, &snapshot.stats);
        self.renderer.render(&snapshot);
    }

    pub fn refresh_after(&self, scheduler: &impl Scheduler, delay_ms: u32) {
        let dashboard = self.clone();
        scheduler.defer(delay_ms, Box::new(move || dashboard.refresh()));
    }
}
