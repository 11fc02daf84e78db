//! `mavecaptcha` - Render a challenge code to a distorted PNG.
//!
//! Copyright (C) 2026 Maverick
//! SPDX-License-Identifier: AGPL-3.0-only
//!
//! Loads defaults from the environment, sets up logging, renders the text
//! given on the command line and writes the image to a file or stdout.

use mavecaptcha::{
    CaptchaError, CaptchaImageProvider, Config, FontBook, ImageProvider, StyleConfig,
    to_data_uri,
};

use std::io::Write;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let (non_blocking, _guard) = tracing_appender::non_blocking(std::io::stderr());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(non_blocking);

    if log_format.eq_ignore_ascii_case("pretty") {
        subscriber.init();
    } else {
        subscriber.json().init();
    }

    let mut args = std::env::args().skip(1);
    let Some(text) = args.next() else {
        eprintln!("usage: mavecaptcha <text> [output.png]");
        return ExitCode::from(2);
    };
    let output = args.next();

    let config = Config::from_env();
    if let Err(e) = config.validate() {
        error!(error = %e, "Invalid configuration");
        return ExitCode::FAILURE;
    }
    info!(
        font_name = %config.font_name,
        font_size = config.font_size,
        use_noise = config.use_noise,
        data_uri = config.data_uri,
        log_format = %config.log_format,
        "Renderer initialized"
    );

    let provider = CaptchaImageProvider::new(Arc::new(FontBook::new()));
    let png = match render(&provider, &config, &text) {
        Ok(png) => png,
        Err(e) => {
            error!(error = %e, "Render failed");
            return ExitCode::FAILURE;
        }
    };

    let payload = if config.data_uri {
        to_data_uri(&png).into_bytes()
    } else {
        png
    };

    let written = match &output {
        Some(path) => std::fs::write(path, &payload),
        None => std::io::stdout().lock().write_all(&payload),
    };
    if let Err(e) = written {
        error!(error = %e, "Failed to write image");
        return ExitCode::FAILURE;
    }

    info!(
        bytes = payload.len(),
        output = output.as_deref().unwrap_or("-"),
        noise = config.use_noise,
        "Captcha written"
    );
    ExitCode::SUCCESS
}

fn render(
    provider: &CaptchaImageProvider,
    config: &Config,
    text: &str,
) -> mavecaptcha::Result<Vec<u8>> {
    let style = config.style();
    match provider.draw_captcha(text, &style) {
        Err(CaptchaError::UnresolvedFont { family }) => {
            let Some(fallback) = config.fallback_font.as_deref() else {
                return Err(CaptchaError::UnresolvedFont { family });
            };
            warn!(requested = %family, fallback = %fallback, "Font not installed, using fallback");
            let style = StyleConfig {
                font_name: fallback.to_string(),
                ..style
            };
            provider.draw_captcha(text, &style)
        }
        other => other,
    }
}
