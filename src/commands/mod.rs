//! Backend Calls
//!
//! Requests to the server endpoints, organized by domain.

mod toggle;

pub use toggle::*;
