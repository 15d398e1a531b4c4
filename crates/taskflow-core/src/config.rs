//! UI Configuration
//!
//! Built once by the composition root, optionally from a JSON block the
//! server embeds in the page, and handed down explicitly.

use serde::Deserialize;

use crate::error::ConfigError;

/// Element id of the optional embedded configuration
pub const CONFIG_ELEMENT_ID: &str = "taskflow-config";

/// Toast timeline offsets, all measured from creation
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ToastTiming {
    pub enter_delay_ms: u32,
    pub dwell_ms: u32,
    pub exit_ms: u32,
}

impl Default for ToastTiming {
    fn default() -> Self {
        Self {
            enter_delay_ms: 100,
            dwell_ms: 3000,
            exit_ms: 300,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UiConfig {
    /// Install the console logger
    pub debug: bool,
    pub toast: ToastTiming,
    /// Quiet period before a search keystroke navigates
    pub search_debounce_ms: u32,
    /// Delay before the first dashboard render
    pub chart_init_delay_ms: u32,
    /// Delay before re-reading stats after a confirmed task toggle
    pub stats_refresh_delay_ms: u32,
    /// Gap between staggered task card entrances
    pub stagger_step_ms: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            debug: true,
            toast: ToastTiming::default(),
            search_debounce_ms: 500,
            chart_init_delay_ms: 100,
            stats_refresh_delay_ms: 100,
            stagger_step_ms: 100,
        }
    }
}

impl UiConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Parse the embedded block, or defaults when the page has none
    pub fn from_embedded(text: Option<&str>) -> Result<Self, ConfigError> {
        match text.map(str::trim) {
            Some(body) if !body.is_empty() => Self::from_json(body),
            _ => Ok(Self::default()),
        }
    }
}
