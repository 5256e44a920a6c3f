// SPDX-License-Identifier: MPL-2.0
//! This module handles the engine's configuration, including loading and saving
//! tunables to a `settings.toml` file.
//!
//! Every numeric constant the classifier and reveal surface use (the sample
//! attempt cap, bucket capacities, luminance thresholds, fallback colors,
//! and the coverage throttle) lives here rather than at the call sites, so
//! tests can tighten or loosen them without touching the algorithms.
//!
//! # Examples
//!
//! ```no_run
//! use pentimento::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.sampling.max_attempts = 500;
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::color::Rgb;
use crate::domain::palette::FallbackColors;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "Pentimento";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub sampling: SamplingConfig,
    #[serde(default)]
    pub colors: ColorConfig,
    #[serde(default)]
    pub reveal: RevealConfig,
}

/// Bounds for the classifier's random sampling loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    /// Upper bound on random pixel reads per classification cycle.
    pub max_attempts: u32,
    /// Capacity of each luminance bucket.
    pub bucket_cap: usize,
    /// Capacity of the accent color sequence.
    pub accent_cap: usize,
    /// Dark bucket upper luminance bound (exclusive).
    pub dark_luminance_max: f64,
    /// Bright bucket lower luminance bound (exclusive).
    pub bright_luminance_min: f64,
    /// Contrast floor against the background for accent colors.
    pub accent_contrast_min: f64,
    /// Luminance floor for the designated primary accent.
    pub accent_luminance_min: f64,
    /// Saturation floor for the designated bright accent.
    pub saturation_min: f64,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_SAMPLE_ATTEMPTS,
            bucket_cap: DEFAULT_BUCKET_CAP,
            accent_cap: DEFAULT_ACCENT_CAP,
            dark_luminance_max: DEFAULT_DARK_LUMINANCE_MAX,
            bright_luminance_min: DEFAULT_BRIGHT_LUMINANCE_MIN,
            accent_contrast_min: DEFAULT_ACCENT_CONTRAST_MIN,
            accent_luminance_min: DEFAULT_ACCENT_LUMINANCE_MIN,
            saturation_min: DEFAULT_SATURATION_MIN,
        }
    }
}

/// Site background and fallback colors, as `#rrggbb` hex strings.
///
/// Unparseable values degrade to the documented defaults instead of erroring;
/// a broken settings file must never leave the theme undefined.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    pub background: String,
    pub fallback_dark: String,
    pub fallback_bright: String,
    pub fallback_accent: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            background: DEFAULT_BACKGROUND_HEX.to_string(),
            fallback_dark: DEFAULT_FALLBACK_DARK_HEX.to_string(),
            fallback_bright: DEFAULT_FALLBACK_BRIGHT_HEX.to_string(),
            fallback_accent: DEFAULT_FALLBACK_ACCENT_HEX.to_string(),
        }
    }
}

impl ColorConfig {
    /// Parses the background color, falling back to cream.
    pub fn background_color(&self) -> Rgb {
        parse_or_default(&self.background, DEFAULT_BACKGROUND_HEX)
    }

    /// Parses the three fallback colors, substituting defaults for any
    /// unparseable entry.
    pub fn fallback_colors(&self) -> FallbackColors {
        FallbackColors {
            dark: parse_or_default(&self.fallback_dark, DEFAULT_FALLBACK_DARK_HEX),
            bright: parse_or_default(&self.fallback_bright, DEFAULT_FALLBACK_BRIGHT_HEX),
            accent: parse_or_default(&self.fallback_accent, DEFAULT_FALLBACK_ACCENT_HEX),
        }
    }
}

fn parse_or_default(hex: &str, default_hex: &str) -> Rgb {
    Rgb::from_hex(hex).unwrap_or_else(|| {
        Rgb::from_hex(default_hex).unwrap_or(Rgb::new(0, 0, 0))
    })
}

/// Reveal surface tunables.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Minimum interval between coverage recomputations (milliseconds).
    pub coverage_interval_ms: u64,
    /// Stride over canvas pixels when estimating coverage.
    pub coverage_stride: usize,
    /// Brush radius in canvas pixels.
    pub brush_radius: f32,
    /// Coverage percentage that completes a cycle.
    pub completion_percent: f32,
    /// Stamp count for the scripted touch spiral.
    pub touch_sweep_steps: u32,
    /// Angle increment per spiral step (radians).
    pub touch_angle_step: f32,
    /// Radius increment per spiral step (pixels).
    pub touch_radius_step: f32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            coverage_interval_ms: DEFAULT_COVERAGE_INTERVAL_MS,
            coverage_stride: DEFAULT_COVERAGE_STRIDE,
            brush_radius: DEFAULT_BRUSH_RADIUS,
            completion_percent: DEFAULT_COMPLETION_PERCENT,
            touch_sweep_steps: DEFAULT_TOUCH_SWEEP_STEPS,
            touch_angle_step: DEFAULT_TOUCH_ANGLE_STEP,
            touch_radius_step: DEFAULT_TOUCH_RADIUS_STEP,
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_sampling() {
        let mut config = Config::default();
        config.sampling.max_attempts = 250;
        config.sampling.bucket_cap = 3;
        config.reveal.brush_radius = 12.0;
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.sampling.max_attempts, 250);
        assert_eq!(loaded.sampling.bucket_cap, 3);
        assert_eq!(loaded.reveal.brush_radius, 12.0);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.sampling.max_attempts, DEFAULT_MAX_SAMPLE_ATTEMPTS);
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested_dir = temp_dir.path().join("deep").join("path");
        let config_path = nested_dir.join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn partial_toml_fills_missing_sections_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[sampling]\nmax_attempts = 10\n")
            .expect("failed to write partial toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.sampling.max_attempts, 10);
        assert_eq!(loaded.sampling.bucket_cap, DEFAULT_BUCKET_CAP);
        assert_eq!(loaded.reveal.coverage_interval_ms, DEFAULT_COVERAGE_INTERVAL_MS);
    }

    #[test]
    fn unparseable_hex_degrades_to_documented_defaults() {
        let colors = ColorConfig {
            background: "cream".to_string(),
            fallback_dark: "#zzzzzz".to_string(),
            fallback_bright: "#0b3826".to_string(),
            fallback_accent: String::new(),
        };

        assert_eq!(colors.background_color(), Rgb::new(0xff, 0xff, 0xf7));
        let fallback = colors.fallback_colors();
        assert_eq!(fallback.dark, Rgb::new(0x2e, 0x17, 0x05));
        assert_eq!(fallback.bright, Rgb::new(0x0b, 0x38, 0x26));
        assert_eq!(fallback.accent, Rgb::new(0x2e, 0x17, 0x05));
    }
}
