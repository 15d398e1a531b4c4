//! Application Context
//!
//! Shared handles created once at boot and passed to every installer.

use std::rc::Rc;

use taskflow_core::UiConfig;

use crate::charts::Dashboard;
use crate::components::Toaster;
use crate::scheduler::BrowserScheduler;

#[derive(Clone)]
pub struct AppContext {
    pub config: Rc<UiConfig>,
    pub scheduler: BrowserScheduler,
    pub toaster: Toaster,
    pub dashboard: Dashboard,
}

impl AppContext {
    pub fn new(config: UiConfig, scheduler: BrowserScheduler, toaster: Toaster, dashboard: Dashboard) -> Self {
        Self {
            config: Rc::new(config),
            scheduler,
            toaster,
            dashboard,
        }
    }

    /// Re-read the aggregates and redraw the dashboard after `delay_ms`
    pub fn refresh_dashboard_after(&self, delay_ms: u32) {
        self.dashboard.refresh_after(&self.scheduler, delay_ms);
    }
}
