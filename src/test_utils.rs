//! Test utilities and shared configuration.
//!
//! This module provides common helpers for unit and integration tests,
//! reducing duplication across the codebase.

use crate::captcha::fonts::{FontBook, FontWeight};
use crate::captcha::random::RandomSource;
use crate::config::Config;
use std::collections::VecDeque;
use std::sync::{Arc, OnceLock};

const FONT_CANDIDATES: &[&str] = &[
    "DejaVu Sans",
    "Liberation Sans",
    "Noto Sans",
    "FreeSans",
    "Arial",
    "Helvetica",
    "Verdana",
    "Tahoma",
];

/// Creates a standard configuration for testing purposes.
///
/// This configuration has:
/// - The stock colours and size
/// - Bordered (clean) mode
/// - Pretty logging
#[must_use]
pub fn create_test_config() -> Arc<Config> {
    Arc::new(Config {
        log_format: "pretty".to_string(),
        ..Config::default()
    })
}

/// A font book with one installed family already resolved, plus that family's name.
///
/// Returns `None` when the host has none of the common families; tests that
/// need real glyphs skip themselves in that case.
#[must_use]
pub fn system_fonts() -> Option<(Arc<FontBook>, String)> {
    static FONTS: OnceLock<Option<(Arc<FontBook>, String)>> = OnceLock::new();
    FONTS
        .get_or_init(|| {
            let book = Arc::new(FontBook::new());
            FONT_CANDIDATES.iter().find_map(|family| {
                book.resolve(family, FontWeight::Regular).ok()?;
                book.resolve(family, FontWeight::Bold).ok()?;
                Some((Arc::clone(&book), (*family).to_string()))
            })
        })
        .clone()
}

/// Replays scripted values, then returns the lower bound once exhausted.
///
/// Values outside the requested range are clamped into it.
pub struct SequenceSource {
    values: VecDeque<i32>,
}

impl SequenceSource {
    #[must_use]
    pub fn new(values: Vec<i32>) -> Self {
        Self {
            values: values.into(),
        }
    }

    /// Scripted values not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RandomSource for SequenceSource {
    fn next(&mut self, min: i32, max: i32) -> i32 {
        if max <= min {
            return min;
        }
        self.values
            .pop_front()
            .map_or(min, |v| v.clamp(min, max - 1))
    }
}
