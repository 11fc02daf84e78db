//! Captcha image rendering.
//!
//! Canvas composition, wave distortion and PNG encoding for challenge codes.

pub mod canvas;
pub mod color;
pub mod distort;
pub mod encoder;
pub mod fonts;
pub mod palette;
pub mod provider;
pub mod random;
pub mod style;

pub use canvas::{Canvas, Glyph};
pub use fonts::{FontBook, FontWeight, TextSize};
pub use provider::{CaptchaImageProvider, ImageProvider};
pub use random::{RandomSource, RngSource, SeededRandom, ThreadRandom};
pub use style::{CaptchaImageParams, StyleConfig};
