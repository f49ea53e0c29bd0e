//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// Errors raised by time parsing, time construction, and config loading.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Text that is not a `HH:MM` clock value.
    #[error("invalid time format {0:?}: expected HH:MM")]
    InvalidFormat(String),

    /// Out-of-range hour/minute, or an unrecognised AM/PM period.
    #[error("invalid time component: {0}")]
    InvalidComponent(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "serde")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Shorthand result type for `it-core`.
pub type CoreResult<T> = Result<T, CoreError>;
