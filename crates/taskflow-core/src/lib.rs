//! TaskFlow Core
//!
//! Target-independent logic behind the TaskFlow browser layer: filter
//! canonicalization, timers, the toggle controller, dashboard data and the
//! toast lifecycle. Nothing here touches the DOM; the UI crate binds these
//! pieces to web-sys.

pub mod animation;
pub mod appearance;
pub mod charts;
pub mod config;
pub mod debounce;
pub mod error;
pub mod filter;
pub mod models;
pub mod query;
pub mod scheduler;
pub mod shortcuts;
pub mod stats;
pub mod toast;
pub mod toggle;

pub use config::{ToastTiming, UiConfig};
pub use error::{ConfigError, ToggleError};
pub use models::{EntityKind, ToggleResponse, ToggleTarget};
pub use scheduler::{ManualScheduler, Scheduler};
