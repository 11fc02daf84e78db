//! Colour string parsing.
//!
//! Accepts `#RRGGBB`, `#RGB`, palette names and `transparent`. Anything else
//! is a configuration error; there is no silent fallback colour.

use crate::captcha::palette;
use crate::config::{CaptchaError, Result};
use image::Rgba;

/// Fully transparent pixel.
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Parses a colour string into an RGBA pixel.
///
/// # Errors
///
/// Returns `CaptchaError::InvalidColor` if the value is empty or not a
/// recognised representation.
pub fn parse_color(value: &str) -> Result<Rgba<u8>> {
    let trimmed = value.trim();
    let invalid = || CaptchaError::InvalidColor {
        value: value.to_string(),
    };

    if let Some(hex_digits) = trimmed.strip_prefix('#') {
        let expanded: String = match hex_digits.len() {
            3 => hex_digits.chars().flat_map(|c| [c, c]).collect(),
            6 => hex_digits.to_string(),
            _ => return Err(invalid()),
        };
        let bytes = hex::decode(expanded).map_err(|_| invalid())?;
        return Ok(Rgba([bytes[0], bytes[1], bytes[2], 255]));
    }

    if trimmed.eq_ignore_ascii_case("transparent") {
        return Ok(TRANSPARENT);
    }

    palette::lookup(trimmed)
        .map(palette::NamedColor::rgba)
        .ok_or_else(invalid)
}

/// Parses a background colour, where an empty or blank string means transparent.
///
/// # Errors
///
/// Returns `CaptchaError::InvalidColor` for non-empty unparseable values.
pub fn parse_back_color(value: &str) -> Result<Rgba<u8>> {
    if value.trim().is_empty() {
        return Ok(TRANSPARENT);
    }
    parse_color(value)
}
