//! Dashboard Charts
//!
//! Chart.js configurations for the three dashboard charts and a registry
//! that tears down the previous chart on a canvas before drawing a new one.

use std::cell::RefCell;
use std::collections::HashMap;

use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::stats::{DashboardSnapshot, DashboardStats, WeeklySeries};

pub const COMPLETION_CANVAS: &str = "completionChart";
pub const PRIORITY_CANVAS: &str = "priorityChart";
pub const WEEKLY_CANVAS: &str = "weeklyChart";

const FONT_FAMILY: &str = "Inter";
const GREEN: (&str, &str) = ("rgba(34, 197, 94, 0.8)", "rgba(34, 197, 94, 1)");
const ORANGE: (&str, &str) = ("rgba(249, 115, 22, 0.8)", "rgba(249, 115, 22, 1)");
const RED: (&str, &str) = ("rgba(239, 68, 68, 0.8)", "rgba(239, 68, 68, 1)");
const AMBER: (&str, &str) = ("rgba(245, 158, 11, 0.8)", "rgba(245, 158, 11, 1)");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Doughnut,
    Bar,
    Line,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<u32>,
    #[serde(flatten)]
    pub style: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

/// JS functions a config needs; installed by the binding, not serialized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartCallback {
    /// `options.plugins.tooltip.callbacks.label`
    TooltipTaskCount,
    /// `options.scales.y.ticks.callback`
    IntegerTicks,
}

impl ChartCallback {
    /// Object path the function hangs off, and its property name
    pub fn location(&self) -> (&'static [&'static str], &'static str) {
        match self {
            ChartCallback::TooltipTaskCount => (&["options", "plugins", "tooltip", "callbacks"], "label"),
            ChartCallback::IntegerTicks => (&["options", "scales", "y", "ticks"], "callback"),
        }
    }
}

/// Tooltip line for `value` completions
pub fn tooltip_label(value: f64) -> String {
    let plural = if value == 1.0 { "" } else { "s" };
    format!("{} task{} completed", value, plural)
}

/// Whether an axis tick should be labelled
pub fn is_integer_tick(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: Value,
    #[serde(skip)]
    pub callbacks: Vec<ChartCallback>,
}

fn style(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

fn labels(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

fn count_axes() -> Value {
    json!({
        "y": {
            "beginAtZero": true,
            "ticks": { "stepSize": 1, "font": { "family": FONT_FAMILY } },
            "grid": { "color": "rgba(0, 0, 0, 0.1)" }
        },
        "x": {
            "ticks": { "font": { "family": FONT_FAMILY } },
            "grid": { "display": false }
        }
    })
}

/// Doughnut of completed vs pending
pub fn completion_chart(stats: &DashboardStats) -> ChartConfig {
    ChartConfig {
        kind: ChartKind::Doughnut,
        data: ChartData {
            labels: labels(&["Completed", "Pending"]),
            datasets: vec![Dataset {
                label: None,
                data: vec![stats.completed, stats.pending],
                style: style(json!({
                    "backgroundColor": [GREEN.0, ORANGE.0],
                    "borderColor": [GREEN.1, ORANGE.1],
                    "borderWidth": 2,
                    "hoverOffset": 10
                })),
            }],
        },
        options: json!({
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": {
                "legend": {
                    "position": "bottom",
                    "labels": {
                        "padding": 20,
                        "usePointStyle": true,
                        "font": { "size": 12, "family": FONT_FAMILY }
                    }
                }
            },
            "cutout": "60%",
            "animation": { "animateRotate": true, "duration": 1000 }
        }),
        callbacks: Vec::new(),
    }
}

/// Bars for high/medium/low
pub fn priority_chart(stats: &DashboardStats) -> ChartConfig {
    let p = stats.priorities;
    ChartConfig {
        kind: ChartKind::Bar,
        data: ChartData {
            labels: labels(&["High", "Medium", "Low"]),
            datasets: vec![Dataset {
                label: Some("Tasks by Priority".to_string()),
                data: vec![p.high, p.medium, p.low],
                style: style(json!({
                    "backgroundColor": [RED.0, AMBER.0, GREEN.0],
                    "borderColor": [RED.1, AMBER.1, GREEN.1],
                    "borderWidth": 2,
                    "borderRadius": 8,
                    "borderSkipped": false
                })),
            }],
        },
        options: json!({
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": { "legend": { "display": false } },
            "scales": count_axes(),
            "animation": { "duration": 1000, "easing": "easeOutQuart" }
        }),
        callbacks: Vec::new(),
    }
}

/// Line of completions over the last seven days
pub fn weekly_chart(weekly: &WeeklySeries) -> ChartConfig {
    ChartConfig {
        kind: ChartKind::Line,
        data: ChartData {
            labels: weekly.labels.clone(),
            datasets: vec![Dataset {
                label: Some("Tasks Completed".to_string()),
                data: weekly.values.clone(),
                style: style(json!({
                    "borderColor": GREEN.1,
                    "backgroundColor": "rgba(34, 197, 94, 0.1)",
                    "borderWidth": 3,
                    "fill": true,
                    "tension": 0.4,
                    "pointBackgroundColor": GREEN.1,
                    "pointBorderColor": "#fff",
                    "pointBorderWidth": 2,
                    "pointRadius": 6,
                    "pointHoverRadius": 8
                })),
            }],
        },
        options: json!({
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": {
                "legend": { "display": false },
                "tooltip": { "callbacks": {} }
            },
            "scales": count_axes(),
            "animation": { "duration": 1000, "easing": "easeOutQuart" },
            "interaction": { "intersect": false, "mode": "index" }
        }),
        callbacks: vec![ChartCallback::TooltipTaskCount, ChartCallback::IntegerTicks],
    }
}

/// Drawing surface for chart configs
pub trait ChartBackend {
    type Chart;

    /// `None` when the canvas is absent or the library refused the config
    fn create(&self, canvas_id: &str, config: &ChartConfig) -> Option<Self::Chart>;

    fn destroy(&self, chart: Self::Chart);
}

/// At most one live chart per canvas
pub struct ChartRegistry<B: ChartBackend> {
    backend: B,
    live: RefCell<HashMap<String, B::Chart>>,
}

impl<B: ChartBackend> ChartRegistry<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            live: RefCell::new(HashMap::new()),
        }
    }

    /// Replace whatever is drawn on `canvas_id`; false if nothing was drawn
    pub fn render(&self, canvas_id: &str, config: &ChartConfig) -> bool {
        let previous = self.live.borrow_mut().remove(canvas_id);
        if let Some(chart) = previous {
            self.backend.destroy(chart);
        }
        match self.backend.create(canvas_id, config) {
            Some(chart) => {
                self.live.borrow_mut().insert(canvas_id.to_string(), chart);
                true
            }
            None => false,
        }
    }

    pub fn live_count(&self) -> usize {
        self.live.borrow().len()
    }
}

/// Renders the three dashboard charts from one snapshot
pub struct DashboardRenderer<B: ChartBackend> {
    registry: ChartRegistry<B>,
}

impl<B: ChartBackend> DashboardRenderer<B> {
    pub fn new(backend: B) -> Self {
        Self {
            registry: ChartRegistry::new(backend),
        }
    }

    pub fn render(&self, snapshot: &DashboardSnapshot) {
        let charts = [
            (COMPLETION_CANVAS, completion_chart(&snapshot.stats)),
            (PRIORITY_CANVAS, priority_chart(&snapshot.stats)),
            (WEEKLY_CANVAS, weekly_chart(&snapshot.weekly)),
        ];
        let mut drawn = 0;
        for (canvas, config) in &charts {
            if self.registry.render(canvas, config) {
                drawn += 1;
            }
        }
        tracing::debug!(drawn, "dashboard charts rendered");
    }

    pub fn registry(&self) -> &ChartRegistry<B> {
        &self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::PriorityCounts;
    use std::cell::Cell;

    #[derive(Default)]
    struct FakeBackend {
        canvases: Vec<&'static str>,
        next: Cell<u32>,
        created: RefCell<Vec<(String, u32)>>,
        destroyed: RefCell<Vec<u32>>,
    }

    impl ChartBackend for &FakeBackend {
        type Chart = u32;

        fn create(&self, canvas_id: &str, _config: &ChartConfig) -> Option<u32> {
            if !self.canvases.iter().any(|c| *c == canvas_id) {
                return None;
            }
            let id = self.next.get();
            self.next.set(id + 1);
            self.created.borrow_mut().push((canvas_id.to_string(), id));
            Some(id)
        }

        fn destroy(&self, chart: u32) {
            self.destroyed.borrow_mut().push(chart);
        }
    }

    fn snapshot() -> DashboardSnapshot {
        DashboardSnapshot {
            stats: DashboardStats {
                total: 5,
                completed: 2,
                pending: 3,
                priorities: PriorityCounts { high: 1, medium: 3, low: 1 },
            },
            weekly: WeeklySeries::default(),
        }
    }

    #[test]
    fn test_rerender_destroys_previous_chart() {
        let backend = FakeBackend {
            canvases: vec![COMPLETION_CANVAS, PRIORITY_CANVAS, WEEKLY_CANVAS],
            ..Default::default()
        };
        let renderer = DashboardRenderer::new(&backend);
        renderer.render(&snapshot());
        renderer.render(&snapshot());

        assert_eq!(backend.created.borrow().len(), 6);
        assert_eq!(*backend.destroyed.borrow(), vec![0, 1, 2]);
        assert_eq!(renderer.registry().live_count(), 3);
    }

    #[test]
    fn test_missing_canvas_is_skipped() {
        let backend = FakeBackend {
            canvases: vec![WEEKLY_CANVAS],
            ..Default::default()
        };
        let renderer = DashboardRenderer::new(&backend);
        renderer.render(&snapshot());
        assert_eq!(*backend.created.borrow(), vec![(WEEKLY_CANVAS.to_string(), 0)]);
        assert!(backend.destroyed.borrow().is_empty());
    }

    #[test]
    fn test_completion_config_shape() {
        let value = serde_json::to_value(completion_chart(&snapshot().stats)).unwrap();
        assert_eq!(value["type"], "doughnut");
        assert_eq!(value["data"]["labels"], json!(["Completed", "Pending"]));
        assert_eq!(value["data"]["datasets"][0]["data"], json!([2, 3]));
        assert_eq!(value["data"]["datasets"][0]["hoverOffset"], 10);
        assert!(value["data"]["datasets"][0].get("label").is_none());
        assert!(value.get("callbacks").is_none());
    }

    #[test]
    fn test_priority_config_order() {
        let value = serde_json::to_value(priority_chart(&snapshot().stats)).unwrap();
        assert_eq!(value["data"]["labels"], json!(["High", "Medium", "Low"]));
        assert_eq!(value["data"]["datasets"][0]["data"], json!([1, 3, 1]));
        assert_eq!(value["options"]["scales"]["y"]["ticks"]["stepSize"], 1);
    }

    #[test]
    fn test_weekly_callbacks_have_a_home() {
        let config = weekly_chart(&WeeklySeries::default());
        let value = serde_json::to_value(&config).unwrap();
        for callback in &config.callbacks {
            let (path, _) = callback.location();
            let parent = path.iter().fold(&value, |node, key| &node[*key]);
            assert!(parent.is_object(), "{:?} has no parent object", callback);
        }
        assert_eq!(value["data"]["datasets"][0]["data"], json!([0, 0, 0, 0, 0, 0, 0]));
    }

    #[test]
    fn test_tooltip_and_ticks() {
        assert_eq!(tooltip_label(1.0), "1 task completed");
        assert_eq!(tooltip_label(0.0), "0 tasks completed");
        assert_eq!(tooltip_label(4.0), "4 tasks completed");
        assert!(is_integer_tick(2.0));
        assert!(!is_integer_tick(0.5));
    }
}
