//! PNG output.

use base64::{Engine, engine::general_purpose::STANDARD};
use image::{ImageFormat, RgbaImage};
use std::io::Cursor;

use crate::config::{CaptchaError, Result};

/// Encodes the buffer as an RGBA8 PNG.
///
/// # Errors
///
/// Returns `CaptchaError::Encode` if the PNG writer fails.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut png_data = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut png_data), ImageFormat::Png)
        .map_err(|e| CaptchaError::Encode(format!("PNG encode failed: {e}")))?;
    Ok(png_data)
}

/// Wraps PNG bytes in a `data:` URI for inline `<img>` tags.
#[must_use]
pub fn to_data_uri(png: &[u8]) -> String {
    format!("data:image/png;base64,{}", STANDARD.encode(png))
}
