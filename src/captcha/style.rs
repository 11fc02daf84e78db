//! Per-request style settings.

use serde::{Deserialize, Serialize};

use crate::config::settings::{DEFAULT_FONT_NAME, DEFAULT_FONT_SIZE, DEFAULT_FORE_COLOR};

/// Colours, font and mode for one render call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleConfig {
    /// Text colour, e.g. `#1B0172`. Ignored in noisy mode.
    pub fore_color: String,
    /// Panel colour; empty means transparent. Ignored in noisy mode.
    pub back_color: String,
    pub font_size: f32,
    pub font_name: String,
    pub use_noise: bool,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            fore_color: DEFAULT_FORE_COLOR.to_string(),
            back_color: String::new(),
            font_size: DEFAULT_FONT_SIZE,
            font_name: DEFAULT_FONT_NAME.to_string(),
            use_noise: false,
        }
    }
}

/// Image request as it arrives from the page: the code to draw, a
/// cache-busting stamp, and the style.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CaptchaImageParams {
    pub text: String,
    pub rnd_date: String,
    #[serde(flatten)]
    pub style: StyleConfig,
}
