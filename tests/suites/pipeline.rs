use crate::common::{decode, provider};
use mavecaptcha::{CaptchaImageParams, ImageProvider, StyleConfig, to_data_uri};
use std::sync::Arc;
use std::thread;

#[test]
fn test_parallel_renders_share_one_provider() {
    let Some((provider, _, family)) = provider() else {
        return;
    };
    let provider = Arc::new(provider);

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let provider = Arc::clone(&provider);
            let style = StyleConfig {
                font_name: family.clone(),
                font_size: 14.0,
                use_noise: i % 2 == 0,
                ..StyleConfig::default()
            };
            thread::spawn(move || provider.draw_captcha(&format!("{i}{i}{i}"), &style))
        })
        .collect();

    for handle in handles {
        let png = handle.join().unwrap().unwrap();
        let img = decode(&png);
        assert!(img.width() > 0 && img.height() > 0);
    }
}

#[test]
fn test_params_drive_the_pipeline() {
    let Some((provider, _, family)) = provider() else {
        return;
    };
    let json = format!(
        r##"{{"text":"8,1,5","rndDate":"1","fontName":"{family}","fontSize":16,"foreColor":"#336699"}}"##
    );
    let params: CaptchaImageParams = serde_json::from_str(&json).unwrap();

    let png = provider.draw_captcha(&params.text, &params.style).unwrap();
    let uri = to_data_uri(&png);
    assert!(uri.starts_with("data:image/png;base64,iVBORw0KGgo"));
}

#[test]
fn test_trait_entry_points() {
    let Some((provider, _, family)) = provider() else {
        return;
    };
    let clean = provider
        .draw_bordered("2468", "#1B0172", "", 12.0, &family)
        .unwrap();
    let noisy = provider.draw_noisy("2,4,6,8", 12.0, &family).unwrap();

    assert_eq!(decode(&clean).get_pixel(0, 0)[3], 0);
    assert!(decode(&noisy).pixels().all(|p| p[3] == 255));
}
