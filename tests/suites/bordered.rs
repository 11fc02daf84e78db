use crate::common::{decode, provider};
use image::Rgba;
use mavecaptcha::captcha::canvas::{self, BorderedParams, MARGIN};
use mavecaptcha::captcha::color::TRANSPARENT;
use mavecaptcha::captcha::distort;
use mavecaptcha::test_utils::SequenceSource;
use mavecaptcha::{FontWeight, SeededRandom, encode_png};

#[test]
fn test_ab12_canvas_matches_measured_text() {
    let Some((provider, book, family)) = provider() else {
        return;
    };
    let measured = book
        .measure("AB12", &family, 12.0, FontWeight::Regular)
        .unwrap();

    let canvas = provider
        .render_bordered_with(
            "AB12",
            "#1B0172",
            "",
            12.0,
            &family,
            &mut SeededRandom::seeded(1),
        )
        .unwrap();

    assert_eq!(canvas.image.width(), measured.width + MARGIN);
    assert_eq!(canvas.image.height(), measured.height + MARGIN);
    assert_eq!(canvas.image.get_pixel(0, 0)[3], 0);
}

#[test]
fn test_transparent_back_leaves_only_text() {
    let Some((_, book, family)) = provider() else {
        return;
    };
    let canvas = canvas::render_bordered(
        &book,
        &BorderedParams {
            text: "AB12",
            fore: Rgba([0x1B, 0x01, 0x72, 255]),
            back: TRANSPARENT,
            font_size: 12.0,
            font_name: &family,
        },
    )
    .unwrap();

    let (w, h) = canvas.image.dimensions();
    for x in 0..w {
        for y in [0, 1, h - 2, h - 1] {
            assert_eq!(canvas.image.get_pixel(x, y)[3], 0, "({x}, {y})");
        }
    }
    for y in 0..h {
        for x in [0, 1, w - 2, w - 1] {
            assert_eq!(canvas.image.get_pixel(x, y)[3], 0, "({x}, {y})");
        }
    }
    assert!(canvas.image.pixels().any(|p| p[3] > 0));
}

#[test]
fn test_encoded_output_decodes_to_rendered_buffer() {
    let Some((provider, _, family)) = provider() else {
        return;
    };
    let canvas = provider
        .render_bordered_with(
            "Q7x2",
            "#000000",
            "#FFE4B5",
            18.0,
            &family,
            &mut SeededRandom::seeded(8),
        )
        .unwrap();

    let png = encode_png(&canvas.image).unwrap();
    assert_eq!(decode(&png), canvas.image);
}

#[test]
fn test_wave_keeps_canvas_size() {
    let Some((_, book, family)) = provider() else {
        return;
    };
    let before = canvas::render_bordered(
        &book,
        &BorderedParams {
            text: "4096",
            fore: Rgba([0, 0, 0, 255]),
            back: Rgba([255, 255, 255, 255]),
            font_size: 22.0,
            font_name: &family,
        },
    )
    .unwrap();

    // magnitude 5, sign draw 1 keeps it positive
    let mut rng = SequenceSource::new(vec![5, 1]);
    let mut warped = before.image.clone();
    let magnitude = distort::apply(&mut warped, &mut rng);

    assert_eq!(magnitude, 5);
    assert_eq!(warped.dimensions(), before.image.dimensions());
    assert_ne!(warped, before.image);
}

#[test]
fn test_named_colors_are_accepted() {
    let Some((provider, _, family)) = provider() else {
        return;
    };
    let canvas = provider
        .render_bordered_with(
            "ok",
            "Navy",
            "LightYellow",
            14.0,
            &family,
            &mut SeededRandom::seeded(2),
        )
        .unwrap();
    let (w, h) = canvas.image.dimensions();
    assert!(w > MARGIN && h > MARGIN);
}
