//! Error types and result aliases.
//!
//! Defines the core `CaptchaError` enumeration and common `Result` type.

use thiserror::Error;

/// Rendering errors. Each one is scoped to a single render call.
#[derive(Debug, Error)]
pub enum CaptchaError {
    /// A fore/back colour string could not be parsed.
    #[error("invalid color: {value:?}")]
    InvalidColor { value: String },

    /// The host font source has no face for the requested family.
    #[error("font family not found: {family}")]
    UnresolvedFont { family: String },

    /// Text or size that would produce a zero-area canvas.
    #[error("degenerate input: {0}")]
    DegenerateInput(&'static str),

    /// PNG encoding failed.
    #[error("image encoding failed: {0}")]
    Encode(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for `CaptchaError`.
pub type Result<T> = std::result::Result<T, CaptchaError>;
