//! Font resolution and text metrics.
//!
//! Families are looked up through the host font source and cached per
//! weight. Metrics are computed from the same `FontVec` that is later used
//! for drawing, so the measured box always matches the drawn glyphs.

use ab_glyph::{Font, FontVec, PxScale, ScaleFont};
use font_kit::family_name::FamilyName;
use font_kit::handle::Handle;
use font_kit::properties::{Properties, Weight};
use font_kit::source::SystemSource;
use std::sync::Arc;
use tracing::{debug, info};

use crate::config::{CaptchaError, Result};

/// Face weight requested from the font source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontWeight {
    Regular,
    Bold,
}

impl FontWeight {
    const fn to_font_kit(self) -> Weight {
        match self {
            Self::Regular => Weight::NORMAL,
            Self::Bold => Weight::BOLD,
        }
    }
}

/// Pixel extent of a rendered string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextSize {
    pub width: u32,
    pub height: u32,
}

/// Cache of resolved faces, shared by every render call.
pub struct FontBook {
    faces: papaya::HashMap<(String, FontWeight), Arc<FontVec>>,
}

impl Default for FontBook {
    fn default() -> Self {
        Self::new()
    }
}

impl FontBook {
    #[must_use]
    pub fn new() -> Self {
        Self {
            faces: papaya::HashMap::new(),
        }
    }

    /// Registers raw font data under a family name, bypassing the system source.
    ///
    /// # Errors
    ///
    /// Returns `CaptchaError::UnresolvedFont` if the data is not a parseable font.
    pub fn register(&self, family: &str, weight: FontWeight, data: Vec<u8>) -> Result<()> {
        let font = FontVec::try_from_vec(data).map_err(|_| CaptchaError::UnresolvedFont {
            family: family.to_string(),
        })?;
        self.faces
            .pin()
            .insert((cache_key(family), weight), Arc::new(font));
        debug!(family = %family, weight = ?weight, "Font registered");
        Ok(())
    }

    /// Returns the face for `family` at `weight`, loading it on first use.
    ///
    /// # Errors
    ///
    /// Returns `CaptchaError::UnresolvedFont` if the host has no such family
    /// or its file cannot be read.
    pub fn resolve(&self, family: &str, weight: FontWeight) -> Result<Arc<FontVec>> {
        let key = (cache_key(family), weight);
        if let Some(font) = self.faces.pin().get(&key) {
            return Ok(Arc::clone(font));
        }

        let font = Arc::new(load_system_font(family, weight)?);
        info!(family = %family, weight = ?weight, "Font resolved");
        self.faces.pin().insert(key, Arc::clone(&font));
        Ok(font)
    }

    /// Measures `text` as it will be drawn with `family` at `size` pixels.
    ///
    /// # Errors
    ///
    /// Returns `CaptchaError::UnresolvedFont` if the family cannot be resolved.
    pub fn measure(
        &self,
        text: &str,
        family: &str,
        size: f32,
        weight: FontWeight,
    ) -> Result<TextSize> {
        let font = self.resolve(family, weight)?;
        Ok(text_extent(&*font, size, text))
    }
}

fn cache_key(family: &str) -> String {
    family.trim().to_lowercase()
}

fn family_name(family: &str) -> FamilyName {
    match cache_key(family).as_str() {
        "serif" => FamilyName::Serif,
        "sans-serif" | "sans serif" => FamilyName::SansSerif,
        "monospace" => FamilyName::Monospace,
        "cursive" => FamilyName::Cursive,
        "fantasy" => FamilyName::Fantasy,
        _ => FamilyName::Title(family.trim().to_string()),
    }
}

fn load_system_font(family: &str, weight: FontWeight) -> Result<FontVec> {
    let unresolved = || CaptchaError::UnresolvedFont {
        family: family.to_string(),
    };

    let mut properties = Properties::new();
    properties.weight(weight.to_font_kit());
    let handle = SystemSource::new()
        .select_best_match(&[family_name(family)], &properties)
        .map_err(|_| unresolved())?;

    let (data, index) = match handle {
        Handle::Path { path, font_index } => {
            (std::fs::read(&path).map_err(|_| unresolved())?, font_index)
        }
        Handle::Memory { bytes, font_index } => (bytes.as_ref().clone(), font_index),
    };

    FontVec::try_from_vec_and_index(data, index).map_err(|_| unresolved())
}

/// Computes the line box of `text`: advance width plus kerning by
/// ascent-to-descent height, both rounded up.
pub fn text_extent(font: &impl Font, size: f32, text: &str) -> TextSize {
    let scaled = font.as_scaled(PxScale::from(size));
    let mut width = 0.0_f32;
    let mut last = None;
    for c in text.chars() {
        let id = scaled.glyph_id(c);
        if let Some(prev) = last {
            width += scaled.kern(prev, id);
        }
        width += scaled.h_advance(id);
        last = Some(id);
    }
    let height = scaled.ascent() - scaled.descent();
    TextSize {
        width: ceil_to_u32(width),
        height: ceil_to_u32(height),
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn ceil_to_u32(val: f32) -> u32 {
    val.ceil().clamp(0.0, f32::from(u16::MAX)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::system_fonts;

    #[test]
    fn test_family_name_mapping() {
        assert!(matches!(family_name("serif"), FamilyName::Serif));
        assert!(matches!(family_name(" Sans-Serif "), FamilyName::SansSerif));
        assert!(matches!(
            family_name("Tahoma"),
            FamilyName::Title(ref t) if t == "Tahoma"
        ));
    }

    #[test]
    fn test_unknown_family_is_unresolved() {
        let book = FontBook::new();
        let err = book
            .resolve("No Such Family 9f3c1e", FontWeight::Regular)
            .unwrap_err();
        assert!(matches!(err, CaptchaError::UnresolvedFont { ref family } if family == "No Such Family 9f3c1e"));
    }

    #[test]
    fn test_register_rejects_garbage() {
        let book = FontBook::new();
        let err = book
            .register("Broken", FontWeight::Regular, vec![0, 1, 2, 3])
            .unwrap_err();
        assert!(matches!(err, CaptchaError::UnresolvedFont { .. }));
    }

    #[test]
    fn test_measure_grows_with_text_and_size() {
        let Some((book, family)) = system_fonts() else {
            return;
        };
        let short = book.measure("AB", &family, 12.0, FontWeight::Regular).unwrap();
        let long = book.measure("AB12", &family, 12.0, FontWeight::Regular).unwrap();
        let big = book.measure("AB12", &family, 24.0, FontWeight::Regular).unwrap();

        assert!(short.width > 0 && short.height > 0);
        assert!(long.width > short.width);
        assert_eq!(long.height, short.height);
        assert!(big.width > long.width);
        assert!(big.height > long.height);
    }

    #[test]
    fn test_resolve_is_cached() {
        let Some((book, family)) = system_fonts() else {
            return;
        };
        let a = book.resolve(&family, FontWeight::Regular).unwrap();
        let b = book.resolve(&family.to_uppercase(), FontWeight::Regular).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_ceil_to_u32() {
        assert_eq!(ceil_to_u32(10.1), 11);
        assert_eq!(ceil_to_u32(-3.0), 0);
        assert_eq!(ceil_to_u32(7.0), 7);
    }
}
