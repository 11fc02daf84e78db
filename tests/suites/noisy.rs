use crate::common::{decode, provider};
use mavecaptcha::captcha::canvas::MARGIN;
use mavecaptcha::{CaptchaError, FontWeight, SeededRandom, StyleConfig};

fn noisy_style(family: &str, size: f32) -> StyleConfig {
    StyleConfig {
        font_name: family.to_string(),
        font_size: size,
        use_noise: true,
        ..StyleConfig::default()
    }
}

#[test]
fn test_same_seed_gives_identical_png() {
    let Some((provider, _, family)) = provider() else {
        return;
    };
    let style = noisy_style(&family, 20.0);
    let a = provider
        .draw_with("58213", &style, &mut SeededRandom::seeded(777))
        .unwrap();
    let b = provider
        .draw_with("58213", &style, &mut SeededRandom::seeded(777))
        .unwrap();
    assert_eq!(a, b);

    let c = provider
        .draw_with("58213", &style, &mut SeededRandom::seeded(778))
        .unwrap();
    assert_ne!(a, c);
}

#[test]
fn test_commas_are_not_rendered() {
    let Some((provider, _, family)) = provider() else {
        return;
    };
    let style = noisy_style(&family, 16.0);
    let with_commas = provider
        .draw_with("1,2,3", &style, &mut SeededRandom::seeded(31))
        .unwrap();
    let plain = provider
        .draw_with("123", &style, &mut SeededRandom::seeded(31))
        .unwrap();
    assert_eq!(with_commas, plain);
}

#[test]
fn test_glyph_count_equals_stripped_length() {
    let Some((provider, _, family)) = provider() else {
        return;
    };
    for (text, expected) in [("9", 1), ("12,345", 5), ("a,b,c,d,e,f", 6), ("one two", 7)] {
        let canvas = provider
            .render_noisy_with(text, 15.0, &family, &mut SeededRandom::seeded(4))
            .unwrap();
        assert_eq!(canvas.glyphs.len(), expected, "{text:?}");
    }
}

#[test]
fn test_canvas_uses_bold_metrics() {
    let Some((provider, book, family)) = provider() else {
        return;
    };
    let measured = book
        .measure("2718", &family, 24.0, FontWeight::Bold)
        .unwrap();
    let png = provider
        .draw_with(
            "2,718",
            &noisy_style(&family, 24.0),
            &mut SeededRandom::seeded(9),
        )
        .unwrap();
    let img = decode(&png);
    assert_eq!(img.width(), measured.width + MARGIN);
    assert_eq!(img.height(), measured.height + MARGIN);
}

#[test]
fn test_glyphs_start_inside_canvas() {
    let Some((provider, _, family)) = provider() else {
        return;
    };
    for seed in 0..20 {
        let canvas = provider
            .render_noisy_with("ABCDEF", 18.0, &family, &mut SeededRandom::seeded(seed))
            .unwrap();
        let height = i32::try_from(canvas.image.height()).unwrap();
        for glyph in &canvas.glyphs {
            assert!((0..height).contains(&glyph.y), "y = {}", glyph.y);
        }
    }
}

#[test]
fn test_comma_only_text_produces_no_bytes() {
    let Some((provider, _, family)) = provider() else {
        return;
    };
    let err = provider
        .draw_with(",,,", &noisy_style(&family, 12.0), &mut SeededRandom::seeded(1))
        .unwrap_err();
    assert!(matches!(err, CaptchaError::DegenerateInput(_)));
}
