//! Library definitions.
//!
//! Renders challenge codes to distorted PNG images for embedding in pages.

pub mod captcha;
pub mod config;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;
pub use captcha::encoder::{encode_png, to_data_uri};
pub use captcha::{
    CaptchaImageParams, CaptchaImageProvider, FontBook, FontWeight, ImageProvider, RandomSource,
    SeededRandom, StyleConfig, ThreadRandom,
};
pub use config::{CaptchaError, Config, Result};
