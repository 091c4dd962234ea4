//! Error types for gridkit.
//!
//! The engine itself never fails: bad column widths, missing row identity and
//! out-of-range scroll offsets all degrade through fallbacks. The only fallible
//! surface is loading a [`GridConfig`](crate::config::GridConfig) from disk.

use thiserror::Error;

/// Errors raised while loading or validating grid configuration.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Convenience alias used by the fallible config surface.
pub type Result<T> = std::result::Result<T, GridError>;
