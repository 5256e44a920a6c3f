// SPDX-License-Identifier: MPL-2.0
//! CLI: extract a theme palette from an artwork image and print it as TOML,
//! in the shape the site's theme consumers read.

use pentimento::classifier::Classifier;
use pentimento::config;
use pentimento::domain::palette::Palette;
use pentimento::sampler;
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;

const USAGE: &str = "Usage: pentimento [--config <settings.toml>] [--seed <u64>] <image>";

/// Serialized form of a palette: hex strings, as the page layer expects.
#[derive(Serialize)]
struct PaletteDoc {
    primary_accent: String,
    secondary_dark: String,
    bright_accent: String,
    accent_colors: Vec<String>,
    dark_colors: Vec<String>,
    mid_colors: Vec<String>,
    bright_colors: Vec<String>,
}

impl From<&Palette> for PaletteDoc {
    fn from(palette: &Palette) -> Self {
        let hex = |colors: &[pentimento::domain::color::Rgb]| {
            colors.iter().map(|c| c.to_hex()).collect()
        };
        Self {
            primary_accent: palette.primary_accent.to_hex(),
            secondary_dark: palette.secondary_dark.to_hex(),
            bright_accent: palette.bright_accent.to_hex(),
            accent_colors: hex(palette.accent_colors()),
            dark_colors: hex(palette.dark_colors()),
            mid_colors: hex(palette.mid_colors()),
            bright_colors: hex(palette.bright_colors()),
        }
    }
}

fn main() -> ExitCode {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    let config_path: Option<PathBuf> = args.opt_value_from_str("--config").unwrap_or(None);
    let seed: Option<u64> = args.opt_value_from_str("--seed").unwrap_or(None);
    let image_path = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    let Some(image_path) = image_path else {
        eprintln!("{USAGE}");
        return ExitCode::FAILURE;
    };

    let config = match config_path {
        Some(path) => config::load_from_path(&path),
        None => config::load(),
    }
    .unwrap_or_default();

    let mut classifier = match seed {
        Some(seed) => Classifier::with_seed(&config, seed),
        None => Classifier::new(&config),
    };

    // A failed decode degrades to the fallback theme rather than erroring,
    // same as the page would.
    let palette = match sampler::load_source_image(&image_path) {
        Ok(image) => classifier.classify(&image),
        Err(err) => {
            eprintln!("warning: {err}; emitting fallback theme");
            classifier.fallback_palette()
        }
    };

    match toml::to_string_pretty(&PaletteDoc::from(&palette)) {
        Ok(doc) => {
            print!("{doc}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
