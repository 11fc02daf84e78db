//! Fixed colour table used for glyph fills and noise.
//!
//! The order is significant: random draws index into it directly, so the
//! same seed always yields the same colours.

use image::{Rgb, Rgba};

/// A palette entry with its conventional web name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedColor {
    pub name: &'static str,
    pub rgb: [u8; 3],
}

impl NamedColor {
    const fn new(name: &'static str, r: u8, g: u8, b: u8) -> Self {
        Self {
            name,
            rgb: [r, g, b],
        }
    }

    #[must_use]
    pub const fn rgb(&self) -> Rgb<u8> {
        Rgb(self.rgb)
    }

    /// Opaque RGBA pixel for this entry.
    #[must_use]
    pub const fn rgba(&self) -> Rgba<u8> {
        Rgba([self.rgb[0], self.rgb[1], self.rgb[2], 255])
    }
}

/// Noise and glyph colours, in draw order.
///
/// `Transparent` is kept as opaque white so it still shows on the hatch.
pub static PALETTE: [NamedColor; 116] = [
    NamedColor::new("AliceBlue", 0xF0, 0xF8, 0xFF),
    NamedColor::new("Azure", 0xF0, 0xFF, 0xFF),
    NamedColor::new("Blue", 0x00, 0x00, 0xFF),
    NamedColor::new("Brown", 0xA5, 0x2A, 0x2A),
    NamedColor::new("CadetBlue", 0x5F, 0x9E, 0xA0),
    NamedColor::new("DarkBlue", 0x00, 0x00, 0x8B),
    NamedColor::new("DarkCyan", 0x00, 0x8B, 0x8B),
    NamedColor::new("DarkGoldenrod", 0xB8, 0x86, 0x0B),
    NamedColor::new("DarkGreen", 0x00, 0x64, 0x00),
    NamedColor::new("DarkKhaki", 0xBD, 0xB7, 0x6B),
    NamedColor::new("DarkMagenta", 0x8B, 0x00, 0x8B),
    NamedColor::new("DarkOliveGreen", 0x55, 0x6B, 0x2F),
    NamedColor::new("DarkOrange", 0xFF, 0x8C, 0x00),
    NamedColor::new("DarkOrchid", 0x99, 0x32, 0xCC),
    NamedColor::new("DarkRed", 0x8B, 0x00, 0x00),
    NamedColor::new("DarkSalmon", 0xE9, 0x96, 0x7A),
    NamedColor::new("DarkSeaGreen", 0x8F, 0xBC, 0x8B),
    NamedColor::new("DarkSlateBlue", 0x48, 0x3D, 0x8B),
    NamedColor::new("DarkTurquoise", 0x00, 0xCE, 0xD1),
    NamedColor::new("DarkViolet", 0x94, 0x00, 0xD3),
    NamedColor::new("DeepPink", 0xFF, 0x14, 0x93),
    NamedColor::new("DeepSkyBlue", 0x00, 0xBF, 0xFF),
    NamedColor::new("DodgerBlue", 0x1E, 0x90, 0xFF),
    NamedColor::new("Firebrick", 0xB2, 0x22, 0x22),
    NamedColor::new("FloralWhite", 0xFF, 0xFA, 0xF0),
    NamedColor::new("ForestGreen", 0x22, 0x8B, 0x22),
    NamedColor::new("Fuchsia", 0xFF, 0x00, 0xFF),
    NamedColor::new("Gainsboro", 0xDC, 0xDC, 0xDC),
    NamedColor::new("GhostWhite", 0xF8, 0xF8, 0xFF),
    NamedColor::new("Gold", 0xFF, 0xD7, 0x00),
    NamedColor::new("Goldenrod", 0xDA, 0xA5, 0x20),
    NamedColor::new("Green", 0x00, 0x80, 0x00),
    NamedColor::new("GreenYellow", 0xAD, 0xFF, 0x2F),
    NamedColor::new("Honeydew", 0xF0, 0xFF, 0xF0),
    NamedColor::new("HotPink", 0xFF, 0x69, 0xB4),
    NamedColor::new("IndianRed", 0xCD, 0x5C, 0x5C),
    NamedColor::new("Indigo", 0x4B, 0x00, 0x82),
    NamedColor::new("Ivory", 0xFF, 0xFF, 0xF0),
    NamedColor::new("Khaki", 0xF0, 0xE6, 0x8C),
    NamedColor::new("Lavender", 0xE6, 0xE6, 0xFA),
    NamedColor::new("LavenderBlush", 0xFF, 0xF0, 0xF5),
    NamedColor::new("LawnGreen", 0x7C, 0xFC, 0x00),
    NamedColor::new("LemonChiffon", 0xFF, 0xFA, 0xCD),
    NamedColor::new("LightBlue", 0xAD, 0xD8, 0xE6),
    NamedColor::new("LightCoral", 0xF0, 0x80, 0x80),
    NamedColor::new("LightCyan", 0xE0, 0xFF, 0xFF),
    NamedColor::new("LightGoldenrodYellow", 0xFA, 0xFA, 0xD2),
    NamedColor::new("LightGreen", 0x90, 0xEE, 0x90),
    NamedColor::new("LightPink", 0xFF, 0xB6, 0xC1),
    NamedColor::new("LightSalmon", 0xFF, 0xA0, 0x7A),
    NamedColor::new("LightSeaGreen", 0x20, 0xB2, 0xAA),
    NamedColor::new("LightSkyBlue", 0x87, 0xCE, 0xFA),
    NamedColor::new("LightSteelBlue", 0xB0, 0xC4, 0xDE),
    NamedColor::new("LightYellow", 0xFF, 0xFF, 0xE0),
    NamedColor::new("Lime", 0x00, 0xFF, 0x00),
    NamedColor::new("LimeGreen", 0x32, 0xCD, 0x32),
    NamedColor::new("Linen", 0xFA, 0xF0, 0xE6),
    NamedColor::new("Magenta", 0xFF, 0x00, 0xFF),
    NamedColor::new("Maroon", 0x80, 0x00, 0x00),
    NamedColor::new("MediumAquamarine", 0x66, 0xCD, 0xAA),
    NamedColor::new("MediumBlue", 0x00, 0x00, 0xCD),
    NamedColor::new("MediumOrchid", 0xBA, 0x55, 0xD3),
    NamedColor::new("MediumPurple", 0x93, 0x70, 0xDB),
    NamedColor::new("MediumSeaGreen", 0x3C, 0xB3, 0x71),
    NamedColor::new("MediumSlateBlue", 0x7B, 0x68, 0xEE),
    NamedColor::new("MediumSpringGreen", 0x00, 0xFA, 0x9A),
    NamedColor::new("MediumTurquoise", 0x48, 0xD1, 0xCC),
    NamedColor::new("MediumVioletRed", 0xC7, 0x15, 0x85),
    NamedColor::new("MidnightBlue", 0x19, 0x19, 0x70),
    NamedColor::new("MintCream", 0xF5, 0xFF, 0xFA),
    NamedColor::new("MistyRose", 0xFF, 0xE4, 0xE1),
    NamedColor::new("Moccasin", 0xFF, 0xE4, 0xB5),
    NamedColor::new("NavajoWhite", 0xFF, 0xDE, 0xAD),
    NamedColor::new("Navy", 0x00, 0x00, 0x80),
    NamedColor::new("OldLace", 0xFD, 0xF5, 0xE6),
    NamedColor::new("Olive", 0x80, 0x80, 0x00),
    NamedColor::new("OliveDrab", 0x6B, 0x8E, 0x23),
    NamedColor::new("Orange", 0xFF, 0xA5, 0x00),
    NamedColor::new("OrangeRed", 0xFF, 0x45, 0x00),
    NamedColor::new("Orchid", 0xDA, 0x70, 0xD6),
    NamedColor::new("PaleGoldenrod", 0xEE, 0xE8, 0xAA),
    NamedColor::new("PaleGreen", 0x98, 0xFB, 0x98),
    NamedColor::new("PaleTurquoise", 0xAF, 0xEE, 0xEE),
    NamedColor::new("PaleVioletRed", 0xDB, 0x70, 0x93),
    NamedColor::new("PapayaWhip", 0xFF, 0xEF, 0xD5),
    NamedColor::new("PeachPuff", 0xFF, 0xDA, 0xB9),
    NamedColor::new("Peru", 0xCD, 0x85, 0x3F),
    NamedColor::new("Pink", 0xFF, 0xC0, 0xCB),
    NamedColor::new("Plum", 0xDD, 0xA0, 0xDD),
    NamedColor::new("PowderBlue", 0xB0, 0xE0, 0xE6),
    NamedColor::new("Purple", 0x80, 0x00, 0x80),
    NamedColor::new("Red", 0xFF, 0x00, 0x00),
    NamedColor::new("RosyBrown", 0xBC, 0x8F, 0x8F),
    NamedColor::new("RoyalBlue", 0x41, 0x69, 0xE1),
    NamedColor::new("SaddleBrown", 0x8B, 0x45, 0x13),
    NamedColor::new("Salmon", 0xFA, 0x80, 0x72),
    NamedColor::new("SandyBrown", 0xF4, 0xA4, 0x60),
    NamedColor::new("SeaGreen", 0x2E, 0x8B, 0x57),
    NamedColor::new("SeaShell", 0xFF, 0xF5, 0xEE),
    NamedColor::new("Sienna", 0xA0, 0x52, 0x2D),
    NamedColor::new("Silver", 0xC0, 0xC0, 0xC0),
    NamedColor::new("SkyBlue", 0x87, 0xCE, 0xEB),
    NamedColor::new("SlateBlue", 0x6A, 0x5A, 0xCD),
    NamedColor::new("Snow", 0xFF, 0xFA, 0xFA),
    NamedColor::new("SpringGreen", 0x00, 0xFF, 0x7F),
    NamedColor::new("SteelBlue", 0x46, 0x82, 0xB4),
    NamedColor::new("Tan", 0xD2, 0xB4, 0x8C),
    NamedColor::new("Teal", 0x00, 0x80, 0x80),
    NamedColor::new("Thistle", 0xD8, 0xBF, 0xD8),
    NamedColor::new("Tomato", 0xFF, 0x63, 0x47),
    NamedColor::new("Transparent", 0xFF, 0xFF, 0xFF),
    NamedColor::new("Turquoise", 0x40, 0xE0, 0xD0),
    NamedColor::new("Violet", 0xEE, 0x82, 0xEE),
    NamedColor::new("Wheat", 0xF5, 0xDE, 0xB3),
    NamedColor::new("Yellow", 0xFF, 0xFF, 0x00),
    NamedColor::new("YellowGreen", 0x9A, 0xCD, 0x32),
];

/// Looks up a palette entry by name, ignoring ASCII case.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static NamedColor> {
    PALETTE.iter().find(|c| c.name.eq_ignore_ascii_case(name))
}

/// Returns the entry at `index`, wrapping out-of-range values into the table.
#[must_use]
pub fn pick(index: i32) -> &'static NamedColor {
    let len = i32::try_from(PALETTE.len()).unwrap_or(i32::MAX);
    let idx = usize::try_from(index.rem_euclid(len)).unwrap_or(0);
    &PALETTE[idx]
}

/// Number of entries as the `i32` bound used for random draws.
#[must_use]
pub fn len_i32() -> i32 {
    i32::try_from(PALETTE.len()).unwrap_or(i32::MAX)
}
