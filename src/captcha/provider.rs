//! Captcha image pipeline.
//!
//! Validates colours, composes the canvas, applies the wave and encodes PNG.

use std::sync::Arc;
use tracing::debug;

use crate::captcha::canvas::{self, BorderedParams, Canvas};
use crate::captcha::color;
use crate::captcha::distort;
use crate::captcha::encoder;
use crate::captcha::fonts::FontBook;
use crate::captcha::random::{RandomSource, ThreadRandom};
use crate::captcha::style::StyleConfig;
use crate::config::Result;

/// Produces encoded captcha images.
pub trait ImageProvider {
    /// Draws `text` on a rounded panel in the given colours.
    ///
    /// # Errors
    ///
    /// Returns an error if a colour does not parse, the font is missing, the
    /// text is blank, or encoding fails.
    fn draw_bordered(
        &self,
        text: &str,
        fore_color: &str,
        back_color: &str,
        font_size: f32,
        font_name: &str,
    ) -> Result<Vec<u8>>;

    /// Draws `text` with random glyph colours and speckle noise.
    ///
    /// # Errors
    ///
    /// Returns an error if the font is missing, the text is blank after
    /// removing commas, or encoding fails.
    fn draw_noisy(&self, text: &str, font_size: f32, font_name: &str) -> Result<Vec<u8>>;

    /// Dispatches on `style.use_noise`.
    ///
    /// # Errors
    ///
    /// See [`ImageProvider::draw_bordered`] and [`ImageProvider::draw_noisy`].
    fn draw_captcha(&self, text: &str, style: &StyleConfig) -> Result<Vec<u8>> {
        if style.use_noise {
            self.draw_noisy(text, style.font_size, &style.font_name)
        } else {
            self.draw_bordered(
                text,
                &style.fore_color,
                &style.back_color,
                style.font_size,
                &style.font_name,
            )
        }
    }
}

/// Default provider backed by a shared [`FontBook`].
///
/// Each call owns its own random source, so one provider can serve many
/// threads at once.
#[derive(Clone)]
pub struct CaptchaImageProvider {
    fonts: Arc<FontBook>,
}

impl Default for CaptchaImageProvider {
    fn default() -> Self {
        Self::new(Arc::new(FontBook::new()))
    }
}

impl CaptchaImageProvider {
    #[must_use]
    pub const fn new(fonts: Arc<FontBook>) -> Self {
        Self { fonts }
    }

    #[must_use]
    pub const fn fonts(&self) -> &Arc<FontBook> {
        &self.fonts
    }

    /// Bordered canvas after distortion, before encoding.
    ///
    /// # Errors
    ///
    /// Colours are checked first; see [`canvas::render_bordered`] for the rest.
    pub fn render_bordered_with(
        &self,
        text: &str,
        fore_color: &str,
        back_color: &str,
        font_size: f32,
        font_name: &str,
        rng: &mut dyn RandomSource,
    ) -> Result<Canvas> {
        let fore = color::parse_color(fore_color)?;
        let back = color::parse_back_color(back_color)?;

        let mut canvas = canvas::render_bordered(
            &self.fonts,
            &BorderedParams {
                text,
                fore,
                back,
                font_size,
                font_name,
            },
        )?;
        let magnitude = distort::apply(&mut canvas.image, rng);

        debug!(
            mode = "bordered",
            width = canvas.image.width(),
            height = canvas.image.height(),
            magnitude,
            "Captcha rendered"
        );
        Ok(canvas)
    }

    /// Noisy canvas after distortion, before encoding.
    ///
    /// # Errors
    ///
    /// See [`canvas::render_noisy`].
    pub fn render_noisy_with(
        &self,
        text: &str,
        font_size: f32,
        font_name: &str,
        rng: &mut dyn RandomSource,
    ) -> Result<Canvas> {
        let mut canvas = canvas::render_noisy(&self.fonts, text, font_size, font_name, rng)?;
        let magnitude = distort::apply(&mut canvas.image, rng);

        debug!(
            mode = "noisy",
            width = canvas.image.width(),
            height = canvas.image.height(),
            glyphs = canvas.glyphs.len(),
            magnitude,
            "Captcha rendered"
        );
        Ok(canvas)
    }

    /// Full pipeline with an injected random source.
    ///
    /// # Errors
    ///
    /// Returns the first validation, font, or encoding error.
    pub fn draw_with(
        &self,
        text: &str,
        style: &StyleConfig,
        rng: &mut dyn RandomSource,
    ) -> Result<Vec<u8>> {
        let canvas = if style.use_noise {
            self.render_noisy_with(text, style.font_size, &style.font_name, rng)?
        } else {
            self.render_bordered_with(
                text,
                &style.fore_color,
                &style.back_color,
                style.font_size,
                &style.font_name,
                rng,
            )?
        };
        encoder::encode_png(&canvas.image)
    }
}

impl ImageProvider for CaptchaImageProvider {
    fn draw_bordered(
        &self,
        text: &str,
        fore_color: &str,
        back_color: &str,
        font_size: f32,
        font_name: &str,
    ) -> Result<Vec<u8>> {
        let mut rng = ThreadRandom::new();
        let canvas = self.render_bordered_with(
            text, fore_color, back_color, font_size, font_name, &mut rng,
        )?;
        encoder::encode_png(&canvas.image)
    }

    fn draw_noisy(&self, text: &str, font_size: f32, font_name: &str) -> Result<Vec<u8>> {
        let mut rng = ThreadRandom::new();
        let canvas = self.render_noisy_with(text, font_size, font_name, &mut rng)?;
        encoder::encode_png(&canvas.image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::captcha::random::SeededRandom;
    use crate::config::CaptchaError;
    use crate::test_utils::system_fonts;

    #[test]
    fn test_invalid_color_fails_before_font_lookup() {
        let provider = CaptchaImageProvider::default();
        let err = provider
            .draw_bordered("AB12", "#XYZXYZ", "", 12.0, "Missing Family")
            .unwrap_err();
        assert!(matches!(err, CaptchaError::InvalidColor { ref value } if value == "#XYZXYZ"));

        let err = provider
            .draw_bordered("AB12", "#000000", "bogus", 12.0, "Missing Family")
            .unwrap_err();
        assert!(matches!(err, CaptchaError::InvalidColor { .. }));
    }

    #[test]
    fn test_missing_font_propagates() {
        let provider = CaptchaImageProvider::default();
        let err = provider
            .draw_noisy("AB12", 12.0, "No Such Family 77e1")
            .unwrap_err();
        assert!(matches!(err, CaptchaError::UnresolvedFont { .. }));
    }

    #[test]
    fn test_draw_captcha_dispatches_on_noise() {
        let Some((book, family)) = system_fonts() else {
            return;
        };
        let provider = CaptchaImageProvider::new(book);
        let mut style = StyleConfig {
            font_name: family,
            font_size: 16.0,
            ..StyleConfig::default()
        };

        let clean = provider.draw_captcha("7391", &style).unwrap();
        let clean = image::load_from_memory(&clean).unwrap().to_rgba8();
        assert!(clean.pixels().any(|p| p[3] == 0));

        style.use_noise = true;
        let noisy = provider.draw_captcha("7391", &style).unwrap();
        let noisy = image::load_from_memory(&noisy).unwrap().to_rgba8();
        assert!(noisy.pixels().all(|p| p[3] == 255));
    }

    #[test]
    fn test_draw_with_is_reproducible() {
        let Some((book, family)) = system_fonts() else {
            return;
        };
        let provider = CaptchaImageProvider::new(book);
        let style = StyleConfig {
            font_name: family,
            back_color: "#FFFFFF".to_string(),
            ..StyleConfig::default()
        };
        let a = provider
            .draw_with("AB12", &style, &mut SeededRandom::seeded(3))
            .unwrap();
        let b = provider
            .draw_with("AB12", &style, &mut SeededRandom::seeded(3))
            .unwrap();
        assert_eq!(a, b);
    }
}
