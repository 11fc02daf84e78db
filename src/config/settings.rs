//! Configuration settings.
//!
//! Defines the main `Config` struct and environment variable loading logic.

use crate::captcha::color;
use crate::captcha::style::StyleConfig;
use crate::config::{CaptchaError, Result};
use std::env;
use std::sync::Arc;

pub(crate) const DEFAULT_FORE_COLOR: &str = "#1B0172";
pub(crate) const DEFAULT_FONT_SIZE: f32 = 12.0;
pub(crate) const DEFAULT_FONT_NAME: &str = "Tahoma";
const DEFAULT_FALLBACK_FONT: &str = "DejaVu Sans";

fn get_env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn get_env_bool(key: &str) -> bool {
    env::var(key)
        .map(|v| v.to_lowercase() == "true" || v == "1")
        .unwrap_or(false)
}

fn get_env_f32_or(key: &str, default: f32) -> f32 {
    env::var(key)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

/// Application configuration loaded from environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Default text colour (`#RRGGBB`).
    pub fore_color: String,
    /// Default background colour; empty means transparent.
    pub back_color: String,
    /// Default font size in pixels.
    pub font_size: f32,
    /// Default font family.
    pub font_name: String,
    /// Family the CLI switches to when `font_name` is not installed.
    pub fallback_font: Option<String>,
    /// Whether the noisy multi-colour style is the default.
    pub use_noise: bool,
    /// Print a `data:` URI instead of raw PNG bytes.
    pub data_uri: bool,
    /// Logging format: "json" or "pretty".
    pub log_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fore_color: DEFAULT_FORE_COLOR.to_string(),
            back_color: String::new(),
            font_size: DEFAULT_FONT_SIZE,
            font_name: DEFAULT_FONT_NAME.to_string(),
            fallback_font: Some(DEFAULT_FALLBACK_FONT.to_string()),
            use_noise: false,
            data_uri: false,
            log_format: "json".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Missing or malformed values fall back to their defaults; call
    /// [`Config::validate`] to reject unusable combinations.
    #[must_use]
    pub fn from_env() -> Arc<Self> {
        let fallback_font = env::var("CAPTCHA_FALLBACK_FONT").map_or_else(
            |_| Some(DEFAULT_FALLBACK_FONT.to_string()),
            |s| Some(s.trim().to_string()).filter(|s| !s.is_empty()),
        );

        Arc::new(Self {
            fore_color: get_env_or("CAPTCHA_FORE_COLOR", DEFAULT_FORE_COLOR),
            back_color: get_env_or("CAPTCHA_BACK_COLOR", ""),
            font_size: get_env_f32_or("CAPTCHA_FONT_SIZE", DEFAULT_FONT_SIZE),
            font_name: get_env_or("CAPTCHA_FONT_NAME", DEFAULT_FONT_NAME),
            fallback_font,
            use_noise: get_env_bool("CAPTCHA_USE_NOISE"),
            data_uri: get_env_bool("CAPTCHA_DATA_URI"),
            log_format: get_env_or("LOG_FORMAT", "json"),
        })
    }

    /// Checks that the configured defaults can actually be rendered.
    ///
    /// # Errors
    ///
    /// Returns `CaptchaError::Config` if a colour does not parse, the font
    /// size is not a positive number, or the font name is blank.
    pub fn validate(&self) -> Result<()> {
        color::parse_color(&self.fore_color)
            .map_err(|e| CaptchaError::Config(format!("CAPTCHA_FORE_COLOR: {e}")))?;
        color::parse_back_color(&self.back_color)
            .map_err(|e| CaptchaError::Config(format!("CAPTCHA_BACK_COLOR: {e}")))?;
        if !(self.font_size.is_finite() && self.font_size > 0.0) {
            return Err(CaptchaError::Config(format!(
                "CAPTCHA_FONT_SIZE must be positive, got {}",
                self.font_size
            )));
        }
        if self.font_name.trim().is_empty() {
            return Err(CaptchaError::Config(
                "CAPTCHA_FONT_NAME must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Default style for a render call.
    #[must_use]
    pub fn style(&self) -> StyleConfig {
        StyleConfig {
            fore_color: self.fore_color.clone(),
            back_color: self.back_color.clone(),
            font_size: self.font_size,
            font_name: self.font_name.clone(),
            use_noise: self.use_noise,
        }
    }
}
