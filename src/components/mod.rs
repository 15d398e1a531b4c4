//! UI Components
//!
//! Leptos components mounted by the layer itself; everything else is
//! server-rendered markup.

mod toast;

pub use toast::Toaster;
