//! Configuration management.
//!
//! Loads rendering defaults from environment variables using dotenvy.
//! All settings are loaded at startup and stored in a thread-safe Arc.

mod error;
pub(crate) mod settings;

pub use error::{CaptchaError, Result};
pub use settings::Config;
