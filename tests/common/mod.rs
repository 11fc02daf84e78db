use image::RgbaImage;
use mavecaptcha::{CaptchaImageProvider, FontBook};
use std::sync::Arc;

/// Provider over a book with one resolvable system family, plus that family.
///
/// `None` when the host has no usable fonts.
pub fn provider() -> Option<(CaptchaImageProvider, Arc<FontBook>, String)> {
    let (book, family) = mavecaptcha::test_utils::system_fonts()?;
    Some((CaptchaImageProvider::new(Arc::clone(&book)), book, family))
}

pub fn decode(png: &[u8]) -> RgbaImage {
    image::load_from_memory(png)
        .expect("output should decode")
        .to_rgba8()
}
