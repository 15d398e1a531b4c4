//! Error Types
//!
//! Failures are never fatal to the page: toggle errors end up as an error
//! toast, config errors fall back to defaults.

use thiserror::Error;

/// Why a toggle request produced no usable confirmation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToggleError {
    /// The control carried no entity id, so no request was sent
    #[error("toggle control has no entity id")]
    MissingEntityId,
    /// The request never completed (network, CORS, aborted fetch)
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with something other than a toggle result
    #[error("unexpected response: {0}")]
    Decode(String),
}

/// Problems reading the embedded UI configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
