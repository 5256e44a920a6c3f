// SPDX-License-Identifier: MPL-2.0
//! Color classification: derive an accessible theme palette from a decoded
//! image by bounded random sampling.
//!
//! The loop samples uniformly random pixel coordinates, buckets each color by
//! relative luminance, collects accent candidates by contrast against the
//! fixed page background, and tracks the three designated accents on a
//! first-found basis. It stops early when everything is filled and never
//! runs past the configured attempt cap, so classification always terminates
//! and always yields a complete [`Palette`]; a uniform or low-contrast image
//! simply exhausts its attempts and comes back as the fallback theme, which
//! is expected behavior rather than an error.

use crate::config::{Config, SamplingConfig};
use crate::domain::color::{contrast_ratio, Rgb};
use crate::domain::palette::{BucketCaps, FallbackColors, Palette, PaletteBuilder};
use crate::domain::source::SourceImage;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Derives [`Palette`]s from source images.
///
/// Holds the sampling limits, the precomputed background luminance, and the
/// RNG. One classifier serves many cycles; each [`Classifier::classify`]
/// call is one cycle.
#[derive(Debug)]
pub struct Classifier {
    sampling: SamplingConfig,
    fallback: FallbackColors,
    background: Rgb,
    /// Luminance of the page background, computed once instead of per sample.
    background_luminance: f64,
    rng: SmallRng,
}

impl Classifier {
    /// Creates a classifier seeded from the operating system.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self::from_rng(config, SmallRng::from_os_rng())
    }

    /// Creates a classifier with a fixed seed. Classification is fully
    /// deterministic under a fixed seed, which the test suite relies on.
    #[must_use]
    pub fn with_seed(config: &Config, seed: u64) -> Self {
        Self::from_rng(config, SmallRng::seed_from_u64(seed))
    }

    fn from_rng(config: &Config, rng: SmallRng) -> Self {
        let background = config.colors.background_color();
        Self {
            sampling: config.sampling.clone(),
            fallback: config.colors.fallback_colors(),
            background,
            background_luminance: background.relative_luminance(),
            rng,
        }
    }

    /// Returns the page background the contrast checks run against.
    #[must_use]
    pub fn background(&self) -> Rgb {
        self.background
    }

    /// The palette used before any classification completes, and the one a
    /// failed decode degrades to.
    #[must_use]
    pub fn fallback_palette(&self) -> Palette {
        Palette::fallback(&self.fallback)
    }

    /// Runs one classification cycle over `image`.
    ///
    /// Every color in the result was sampled from `image`; unfilled
    /// designated slots come back as the configured fallbacks.
    pub fn classify(&mut self, image: &SourceImage) -> Palette {
        if image.pixel_count() == 0 {
            return self.fallback_palette();
        }

        let s = &self.sampling;
        let mut builder = PaletteBuilder::new(BucketCaps {
            bucket: s.bucket_cap,
            accent: s.accent_cap,
        });

        for _ in 0..s.max_attempts {
            let x = self.rng.random_range(0..image.width());
            let y = self.rng.random_range(0..image.height());
            let color = image.pixel(x, y);
            let luminance = color.relative_luminance();

            if luminance < s.dark_luminance_max {
                builder.push_dark(color);
                builder.set_secondary_dark(color);
            } else if luminance > s.bright_luminance_min {
                builder.push_bright(color);
            } else {
                builder.push_mid(color);
            }

            if contrast_ratio(luminance, self.background_luminance) > s.accent_contrast_min {
                builder.push_accent(color);
                if luminance > s.accent_luminance_min {
                    builder.set_primary_accent(color);
                }
            }

            if luminance > s.accent_luminance_min
                && luminance < s.bright_luminance_min
                && color.saturation() > s.saturation_min
            {
                builder.set_bright_accent(color);
            }

            if builder.is_complete() {
                break;
            }
        }

        builder.finish(&self.fallback)
    }
}
