//! Canvas composition.
//!
//! Two styles are supported:
//! - **Bordered**: caller colours, a rounded background panel, centred text.
//! - **Noisy**: checkerboard hatch, one random palette colour per glyph,
//!   jittered placement and thirty speckle/line noise primitives.
//!
//! Both return the undistorted buffer; the wave pass runs afterwards.

use ab_glyph::{Font, FontVec, PxScale, ScaleFont};
use image::{DynamicImage, Rgb, RgbImage, Rgba, RgbaImage};
use imageproc::drawing::{
    draw_antialiased_line_segment_mut, draw_filled_ellipse_mut, draw_text_mut,
};
use imageproc::pixelops::interpolate;
use std::borrow::Cow;
use unicode_bidi::{BidiInfo, Level};

use crate::captcha::color::TRANSPARENT;
use crate::captcha::fonts::{FontBook, FontWeight, TextSize, text_extent};
use crate::captcha::palette;
use crate::captcha::random::RandomSource;
use crate::config::{CaptchaError, Result};

/// Padding added to the measured text in each axis.
pub const MARGIN: u32 = 8;
/// Largest canvas side accepted before allocation.
pub const MAX_CANVAS_SIDE: u32 = 4096;
const STROKE_WIDTH: f32 = 1.1;
const CORNER_RADIUS: f32 = 15.0;
const NOISE_ITERATIONS: usize = 30;
const HATCH_CELL: u32 = 2;
const HATCH_DARK: Rgb<u8> = Rgb([0x69, 0x69, 0x69]);
const HATCH_LIGHT: Rgb<u8> = Rgb([0xF5, 0xF5, 0xF5]);

/// A drawn character and where it landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub x: i32,
    pub y: i32,
    pub color: Rgba<u8>,
}

/// Composed image plus the glyphs drawn onto it.
#[derive(Debug, Clone)]
pub struct Canvas {
    pub image: RgbaImage,
    pub glyphs: Vec<Glyph>,
}

/// Inputs for the bordered style. Colours are already parsed.
pub struct BorderedParams<'a> {
    pub text: &'a str,
    pub fore: Rgba<u8>,
    pub back: Rgba<u8>,
    pub font_size: f32,
    pub font_name: &'a str,
}

#[derive(Debug, Clone, Copy)]
struct RoundedRect {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    radius: f32,
}

impl RoundedRect {
    fn new(x: f32, y: f32, width: f32, height: f32, radius: f32) -> Self {
        let radius = radius.min(width.min(height) / 2.0).max(0.0);
        Self {
            x,
            y,
            width,
            height,
            radius,
        }
    }

    /// Signed distance from `(px, py)` to the outline; negative inside.
    fn distance(&self, px: f32, py: f32) -> f32 {
        let half_w = self.width / 2.0;
        let half_h = self.height / 2.0;
        let qx = (px - (self.x + half_w)).abs() - (half_w - self.radius);
        let qy = (py - (self.y + half_h)).abs() - (half_h - self.radius);
        let outside = qx.max(0.0).hypot(qy.max(0.0));
        let inside = qx.max(qy).min(0.0);
        outside + inside - self.radius
    }
}

#[derive(Debug, Clone, Copy)]
enum Paint {
    Fill,
    Stroke(f32),
}

/// Removes every comma; commas are never rendered.
#[must_use]
pub fn strip_commas(text: &str) -> String {
    text.replace(',', "")
}

/// Reorders `text` into visual order on a right-to-left base line.
///
/// Right-to-left runs are reversed; digit and Latin runs keep their order.
#[must_use]
pub fn visual_order(text: &str) -> Cow<'_, str> {
    let bidi = BidiInfo::new(text, Some(Level::rtl()));
    match bidi.paragraphs.as_slice() {
        [] => Cow::Borrowed(text),
        [para] => bidi.reorder_line(para, para.range.clone()),
        paragraphs => Cow::Owned(
            paragraphs
                .iter()
                .map(|para| bidi.reorder_line(para, para.range.clone()))
                .collect(),
        ),
    }
}

fn check_font_size(font_size: f32) -> Result<()> {
    if font_size.is_finite() && font_size > 0.0 {
        Ok(())
    } else {
        Err(CaptchaError::DegenerateInput("font size must be positive"))
    }
}

/// Canvas dimensions for measured text, rejected when either side is too large.
fn canvas_size(text: TextSize) -> Result<(u32, u32)> {
    let width = text.width.saturating_add(MARGIN);
    let height = text.height.saturating_add(MARGIN);
    if width > MAX_CANVAS_SIDE || height > MAX_CANVAS_SIDE {
        return Err(CaptchaError::DegenerateInput("canvas exceeds maximum size"));
    }
    Ok((width, height))
}

/// Renders `params.text` on a rounded panel in the caller's colours.
///
/// # Errors
///
/// Returns `DegenerateInput` for blank text, a non-positive size or a canvas
/// larger than [`MAX_CANVAS_SIDE`], and `UnresolvedFont` if the family is
/// unavailable.
pub fn render_bordered(fonts: &FontBook, params: &BorderedParams<'_>) -> Result<Canvas> {
    if params.text.trim().is_empty() {
        return Err(CaptchaError::DegenerateInput("text is empty"));
    }
    check_font_size(params.font_size)?;

    let font = fonts.resolve(params.font_name, FontWeight::Regular)?;
    let text = visual_order(params.text);
    let size = text_extent(&*font, params.font_size, &text);
    let (width, height) = canvas_size(size)?;

    let mut image = RgbaImage::from_pixel(width, height, TRANSPARENT);

    let inset = STROKE_WIDTH.ceil();
    let rect = RoundedRect::new(
        inset,
        inset,
        u32_to_f32(width) - 2.0 * inset,
        u32_to_f32(height) - 2.0 * inset,
        CORNER_RADIUS,
    );
    paint_rounded_rect(&mut image, &rect, params.back, Paint::Fill);
    paint_rounded_rect(&mut image, &rect, params.back, Paint::Stroke(STROKE_WIDTH));

    let text_x = f32_to_i32(rect.x + (rect.width - u32_to_f32(size.width)) / 2.0);
    let text_y = f32_to_i32(rect.y + (rect.height - u32_to_f32(size.height)) / 2.0);
    draw_text_mut(
        &mut image,
        params.fore,
        text_x,
        text_y,
        PxScale::from(params.font_size),
        &*font,
        &text,
    );

    let glyphs = layout_line(&font, params.font_size, &text, text_x)
        .into_iter()
        .map(|(ch, x)| Glyph {
            ch,
            x,
            y: text_y,
            color: params.fore,
        })
        .collect();

    Ok(Canvas { image, glyphs })
}

/// Renders comma-stripped `text` in bold with random colours and noise.
///
/// # Errors
///
/// Returns `DegenerateInput` if nothing but whitespace remains after
/// stripping commas, the size is not positive or the canvas would exceed
/// [`MAX_CANVAS_SIDE`], and `UnresolvedFont` if the family is unavailable.
pub fn render_noisy(
    fonts: &FontBook,
    text: &str,
    font_size: f32,
    font_name: &str,
    rng: &mut dyn RandomSource,
) -> Result<Canvas> {
    let text = strip_commas(text);
    if text.trim().is_empty() {
        return Err(CaptchaError::DegenerateInput(
            "text is empty after removing commas",
        ));
    }
    check_font_size(font_size)?;

    let font = fonts.resolve(font_name, FontWeight::Bold)?;
    let size = text_extent(&*font, font_size, &text);
    let (width, height) = canvas_size(size)?;

    let mut image = hatch(width, height);
    let glyphs = draw_scattered_text(&mut image, &font, font_size, &text, rng);
    draw_noise(&mut image, rng);

    Ok(Canvas {
        image: DynamicImage::ImageRgb8(image).into_rgba8(),
        glyphs,
    })
}

fn hatch(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        if (x / HATCH_CELL + y / HATCH_CELL) % 2 == 0 {
            HATCH_DARK
        } else {
            HATCH_LIGHT
        }
    })
}

fn draw_scattered_text(
    image: &mut RgbImage,
    font: &FontVec,
    font_size: f32,
    text: &str,
    rng: &mut dyn RandomSource,
) -> Vec<Glyph> {
    let width = u32_to_i32(image.width());
    let height = u32_to_i32(image.height());
    let count = i32::try_from(text.chars().count()).unwrap_or(i32::MAX).max(1);
    let spacing = width / count - 1;

    let mut glyphs = Vec::with_capacity(text.len());
    let mut x = 0;
    for ch in text.chars() {
        let entry = palette::pick(rng.next(0, palette::len_i32()));
        let s = ch.to_string();
        let glyph_height = u32_to_i32(text_extent(font, font_size, &s).height);
        let y = rng.next(0, height - glyph_height);

        draw_text_mut(image, entry.rgb(), x, y, PxScale::from(font_size), font, &s);
        glyphs.push(Glyph {
            ch,
            x,
            y,
            color: entry.rgba(),
        });

        x += spacing + rng.next(-1, 2);
    }
    glyphs
}

fn draw_noise(image: &mut RgbImage, rng: &mut dyn RandomSource) {
    let width = u32_to_i32(image.width());
    let height = u32_to_i32(image.height());

    for _ in 0..NOISE_ITERATIONS {
        let start = rng.next(1, 4);
        let speckle = palette::pick(rng.next(0, palette::len_i32())).rgb();
        let left = rng.next(start, width);
        let top = rng.next(1, height);
        let box_w = rng.next(1, 4);
        let box_h = rng.next(2, 5);
        draw_filled_ellipse_mut(
            image,
            (left + box_w / 2, top + box_h / 2),
            (box_w + 1) / 2,
            (box_h + 1) / 2,
            speckle,
        );

        let x0 = rng.next(0, width);
        let y0 = rng.next(0, height);
        let x1 = rng.next(0, width);
        let y1 = rng.next(0, height);
        let line = palette::pick(rng.next(0, palette::len_i32())).rgb();
        draw_antialiased_line_segment_mut(image, (x0, y0), (x1, y1), line, interpolate);
    }
}

fn paint_rounded_rect(image: &mut RgbaImage, rect: &RoundedRect, color: Rgba<u8>, paint: Paint) {
    if color[3] == 0 {
        return;
    }
    for (x, y, pixel) in image.enumerate_pixels_mut() {
        let d = rect.distance(u32_to_f32(x) + 0.5, u32_to_f32(y) + 0.5);
        let coverage = match paint {
            Paint::Fill => 0.5 - d,
            Paint::Stroke(width) => 0.5 - (d.abs() - width / 2.0),
        }
        .clamp(0.0, 1.0);
        if coverage > 0.0 {
            *pixel = blend_over(*pixel, color, coverage);
        }
    }
}

/// Source-over compositing of `src` at `coverage` onto `dst`.
fn blend_over(dst: Rgba<u8>, src: Rgba<u8>, coverage: f32) -> Rgba<u8> {
    let sa = f32::from(src[3]) / 255.0 * coverage;
    let da = f32::from(dst[3]) / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        return TRANSPARENT;
    }
    let channel = |i: usize| {
        let c = f32::from(src[i]).mul_add(sa, f32::from(dst[i]) * da * (1.0 - sa)) / out_a;
        f32_to_u8(c)
    };
    Rgba([channel(0), channel(1), channel(2), f32_to_u8(out_a * 255.0)])
}

/// Left edge of each character when `text` is drawn starting at `origin`.
fn layout_line(font: &FontVec, font_size: f32, text: &str, origin: i32) -> Vec<(char, i32)> {
    let scaled = font.as_scaled(PxScale::from(font_size));
    let mut pen = 0.0_f32;
    let mut last = None;
    let mut out = Vec::with_capacity(text.len());
    for ch in text.chars() {
        let id = scaled.glyph_id(ch);
        if let Some(prev) = last {
            pen += scaled.kern(prev, id);
        }
        out.push((ch, origin + f32_to_i32(pen)));
        pen += scaled.h_advance(id);
        last = Some(id);
    }
    out
}

#[inline]
fn u32_to_i32(val: u32) -> i32 {
    i32::try_from(val).unwrap_or(i32::MAX)
}

#[inline]
#[allow(clippy::cast_precision_loss)]
fn u32_to_f32(val: u32) -> f32 {
    val as f32
}

#[inline]
#[allow(clippy::cast_possible_truncation)]
fn f32_to_i32(val: f32) -> i32 {
    val.floor().clamp(f32::from(i16::MIN), f32::from(i16::MAX)) as i32
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn f32_to_u8(val: f32) -> u8 {
    val.round().clamp(0.0, 255.0) as u8
}
