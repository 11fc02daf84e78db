//! Wave distortion.
//!
//! Remaps every pixel by a sine offset on x and a cosine offset on y. Reads
//! always come from a snapshot taken before the pass.

use image::RgbaImage;
use std::f64::consts::PI;

use crate::captcha::random::RandomSource;

const WAVE_PERIOD_Y: f64 = 84.0;
const WAVE_PERIOD_X: f64 = 44.0;

/// Draws a wave magnitude in `[1, 5]`, positive only on a 1-in-10 draw.
pub fn pick_magnitude(rng: &mut dyn RandomSource) -> i32 {
    let magnitude = rng.next(1, 6);
    if rng.next(0, 10) == 1 {
        magnitude
    } else {
        -magnitude
    }
}

/// Unclamped source coordinate for destination `(x, y)`, truncated toward zero.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn wave_offset(x: u32, y: u32, magnitude: i32) -> (i64, i64) {
    let d = f64::from(magnitude);
    let fx = f64::from(x);
    let fy = f64::from(y);
    let src_x = d.mul_add((PI * fy / WAVE_PERIOD_Y).sin(), fx);
    let src_y = d.mul_add((PI * fx / WAVE_PERIOD_X).cos(), fy);
    (src_x as i64, src_y as i64)
}

/// Source pixel for destination `(x, y)`; out-of-range axes fall back to 0.
#[must_use]
pub fn wave_source(x: u32, y: u32, magnitude: i32, width: u32, height: u32) -> (u32, u32) {
    let (src_x, src_y) = wave_offset(x, y, magnitude);
    (clamp_axis(src_x, width), clamp_axis(src_y, height))
}

fn clamp_axis(value: i64, len: u32) -> u32 {
    match u32::try_from(value) {
        Ok(v) if v < len => v,
        _ => 0,
    }
}

/// Applies the wave with a fixed magnitude.
pub fn apply_wave(image: &mut RgbaImage, magnitude: i32) {
    let snapshot = image.clone();
    let (width, height) = image.dimensions();
    for y in 0..height {
        for x in 0..width {
            let (sx, sy) = wave_source(x, y, magnitude, width, height);
            image.put_pixel(x, y, *snapshot.get_pixel(sx, sy));
        }
    }
}

/// Draws a magnitude from `rng`, applies the wave and returns the magnitude used.
pub fn apply(image: &mut RgbaImage, rng: &mut dyn RandomSource) -> i32 {
    let magnitude = pick_magnitude(rng);
    apply_wave(image, magnitude);
    magnitude
}
