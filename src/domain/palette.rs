// SPDX-License-Identifier: MPL-2.0
//! The derived theme palette and its builder.
//!
//! A [`Palette`] is what the classifier publishes and every visual surface
//! reads: three capped luminance buckets, an ordered accent sequence, and
//! three designated single colors that always hold a usable value. The site
//! indexes into the buckets with a per-use fallback (`darkColors[0] ||
//! accentColor` in the original pages), which [`Palette::dark`] and friends
//! reproduce, so consumers never observe an undefined color.

use super::color::Rgb;

/// Fallback dark gradient color (`#2e1705`).
pub const FALLBACK_DARK: Rgb = Rgb::new(0x2e, 0x17, 0x05);

/// Fallback bright accent color (`#0b3826`).
pub const FALLBACK_BRIGHT: Rgb = Rgb::new(0x0b, 0x38, 0x26);

/// Fallback primary accent color (`#2e1705`).
pub const FALLBACK_ACCENT: Rgb = Rgb::new(0x2e, 0x17, 0x05);

/// The cream page background all contrast checks run against (`#fffff7`).
pub const CREAM_BACKGROUND: Rgb = Rgb::new(0xff, 0xff, 0xf7);

/// The fixed colors substituted for designated slots the sampler could not
/// fill within its attempt budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackColors {
    pub dark: Rgb,
    pub bright: Rgb,
    pub accent: Rgb,
}

impl Default for FallbackColors {
    fn default() -> Self {
        Self {
            dark: FALLBACK_DARK,
            bright: FALLBACK_BRIGHT,
            accent: FALLBACK_ACCENT,
        }
    }
}

/// A complete derived theme.
///
/// Bucket membership is guaranteed by construction: every color was sampled
/// from the source image and classified by luminance; the accent sequence
/// passed the contrast floor. Buckets may be empty when the image had no
/// qualifying pixels; the designated colors are always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    accent_colors: Vec<Rgb>,
    dark_colors: Vec<Rgb>,
    mid_colors: Vec<Rgb>,
    bright_colors: Vec<Rgb>,
    /// Designated accent for buttons and link hovers.
    pub primary_accent: Rgb,
    /// Designated dark color for gradients.
    pub secondary_dark: Rgb,
    /// Designated saturated bright color.
    pub bright_accent: Rgb,
}

impl Palette {
    /// The palette consumers see before the first classification completes,
    /// and the one a failed image decode degrades to.
    #[must_use]
    pub fn fallback(colors: &FallbackColors) -> Self {
        Self {
            accent_colors: Vec::new(),
            dark_colors: Vec::new(),
            mid_colors: Vec::new(),
            bright_colors: Vec::new(),
            primary_accent: colors.accent,
            secondary_dark: colors.dark,
            bright_accent: colors.bright,
        }
    }

    /// Ordered accent colors (contrast > floor against the background).
    #[must_use]
    pub fn accent_colors(&self) -> &[Rgb] {
        &self.accent_colors
    }

    /// Colors with luminance below the dark threshold.
    #[must_use]
    pub fn dark_colors(&self) -> &[Rgb] {
        &self.dark_colors
    }

    /// Colors between the dark and bright thresholds.
    #[must_use]
    pub fn mid_colors(&self) -> &[Rgb] {
        &self.mid_colors
    }

    /// Colors above the bright threshold.
    #[must_use]
    pub fn bright_colors(&self) -> &[Rgb] {
        &self.bright_colors
    }

    /// Dark bucket entry `index`, or the designated accent when the bucket
    /// has no such entry.
    #[must_use]
    pub fn dark(&self, index: usize) -> Rgb {
        self.dark_colors
            .get(index)
            .copied()
            .unwrap_or(self.primary_accent)
    }

    /// Mid bucket entry `index`, with the same per-use fallback.
    #[must_use]
    pub fn mid(&self, index: usize) -> Rgb {
        self.mid_colors
            .get(index)
            .copied()
            .unwrap_or(self.primary_accent)
    }

    /// Bright bucket entry `index`, falling back to the bright accent.
    #[must_use]
    pub fn bright(&self, index: usize) -> Rgb {
        self.bright_colors
            .get(index)
            .copied()
            .unwrap_or(self.bright_accent)
    }

    /// Accent entry `index`, falling back to the primary accent.
    #[must_use]
    pub fn accent(&self, index: usize) -> Rgb {
        self.accent_colors
            .get(index)
            .copied()
            .unwrap_or(self.primary_accent)
    }
}

/// Capacities for the palette builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BucketCaps {
    /// Maximum distinct colors per luminance bucket.
    pub bucket: usize,
    /// Maximum distinct accent colors.
    pub accent: usize,
}

/// Incrementally assembles a [`Palette`] during the sampling loop.
///
/// Insertion is capped and deduplicated by exact RGB match; designated slots
/// are first-found-wins. [`PaletteBuilder::finish`] substitutes fallbacks
/// for any designated slot still empty, so the result is always complete.
#[derive(Debug)]
pub struct PaletteBuilder {
    caps: BucketCaps,
    accent_colors: Vec<Rgb>,
    dark_colors: Vec<Rgb>,
    mid_colors: Vec<Rgb>,
    bright_colors: Vec<Rgb>,
    primary_accent: Option<Rgb>,
    secondary_dark: Option<Rgb>,
    bright_accent: Option<Rgb>,
}

impl PaletteBuilder {
    #[must_use]
    pub fn new(caps: BucketCaps) -> Self {
        Self {
            caps,
            accent_colors: Vec::with_capacity(caps.accent),
            dark_colors: Vec::with_capacity(caps.bucket),
            mid_colors: Vec::with_capacity(caps.bucket),
            bright_colors: Vec::with_capacity(caps.bucket),
            primary_accent: None,
            secondary_dark: None,
            bright_accent: None,
        }
    }

    pub fn push_dark(&mut self, color: Rgb) {
        push_capped(&mut self.dark_colors, color, self.caps.bucket);
    }

    pub fn push_mid(&mut self, color: Rgb) {
        push_capped(&mut self.mid_colors, color, self.caps.bucket);
    }

    pub fn push_bright(&mut self, color: Rgb) {
        push_capped(&mut self.bright_colors, color, self.caps.bucket);
    }

    pub fn push_accent(&mut self, color: Rgb) {
        push_capped(&mut self.accent_colors, color, self.caps.accent);
    }

    /// Records the designated primary accent if none was found yet.
    pub fn set_primary_accent(&mut self, color: Rgb) {
        self.primary_accent.get_or_insert(color);
    }

    /// Records the designated dark gradient color if none was found yet.
    pub fn set_secondary_dark(&mut self, color: Rgb) {
        self.secondary_dark.get_or_insert(color);
    }

    /// Records the designated bright accent if none was found yet.
    pub fn set_bright_accent(&mut self, color: Rgb) {
        self.bright_accent.get_or_insert(color);
    }

    /// True once every bucket is at capacity and every designated slot is
    /// filled; the sampling loop stops early at this point.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.dark_colors.len() >= self.caps.bucket
            && self.mid_colors.len() >= self.caps.bucket
            && self.bright_colors.len() >= self.caps.bucket
            && self.accent_colors.len() >= self.caps.accent
            && self.primary_accent.is_some()
            && self.secondary_dark.is_some()
            && self.bright_accent.is_some()
    }

    /// Completes the palette, substituting fallbacks for unfilled
    /// designated slots.
    #[must_use]
    pub fn finish(self, fallback: &FallbackColors) -> Palette {
        Palette {
            accent_colors: self.accent_colors,
            dark_colors: self.dark_colors,
            mid_colors: self.mid_colors,
            bright_colors: self.bright_colors,
            primary_accent: self.primary_accent.unwrap_or(fallback.accent),
            secondary_dark: self.secondary_dark.unwrap_or(fallback.dark),
            bright_accent: self.bright_accent.unwrap_or(fallback.bright),
        }
    }
}

fn push_capped(bucket: &mut Vec<Rgb>, color: Rgb, cap: usize) {
    if bucket.len() < cap && !bucket.contains(&color) {
        bucket.push(color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAPS: BucketCaps = BucketCaps { bucket: 5, accent: 4 };

    #[test]
    fn fallback_palette_has_empty_buckets_and_site_constants() {
        let palette = Palette::fallback(&FallbackColors::default());
        assert!(palette.dark_colors().is_empty());
        assert!(palette.mid_colors().is_empty());
        assert!(palette.bright_colors().is_empty());
        assert!(palette.accent_colors().is_empty());
        assert_eq!(palette.primary_accent, FALLBACK_ACCENT);
        assert_eq!(palette.secondary_dark, FALLBACK_DARK);
        assert_eq!(palette.bright_accent, FALLBACK_BRIGHT);
    }

    #[test]
    fn bucket_accessors_fall_back_per_use() {
        let palette = Palette::fallback(&FallbackColors::default());
        assert_eq!(palette.dark(0), FALLBACK_ACCENT);
        assert_eq!(palette.mid(3), FALLBACK_ACCENT);
        assert_eq!(palette.bright(0), FALLBACK_BRIGHT);
        assert_eq!(palette.accent(2), FALLBACK_ACCENT);
    }

    #[test]
    fn push_deduplicates_by_exact_rgb() {
        let mut builder = PaletteBuilder::new(CAPS);
        builder.push_dark(Rgb::new(0, 0, 0));
        builder.push_dark(Rgb::new(0, 0, 0));
        builder.push_dark(Rgb::new(1, 0, 0));
        let palette = builder.finish(&FallbackColors::default());
        assert_eq!(palette.dark_colors(), &[Rgb::new(0, 0, 0), Rgb::new(1, 0, 0)]);
    }

    #[test]
    fn push_respects_bucket_cap() {
        let mut builder = PaletteBuilder::new(BucketCaps { bucket: 2, accent: 1 });
        for i in 0..10 {
            builder.push_bright(Rgb::new(200, 200, i));
            builder.push_accent(Rgb::new(0, i, 0));
        }
        let palette = builder.finish(&FallbackColors::default());
        assert_eq!(palette.bright_colors().len(), 2);
        assert_eq!(palette.accent_colors().len(), 1);
    }

    #[test]
    fn designated_slots_are_first_found_wins() {
        let mut builder = PaletteBuilder::new(CAPS);
        builder.set_primary_accent(Rgb::new(10, 20, 30));
        builder.set_primary_accent(Rgb::new(40, 50, 60));
        let palette = builder.finish(&FallbackColors::default());
        assert_eq!(palette.primary_accent, Rgb::new(10, 20, 30));
    }

    #[test]
    fn finish_substitutes_fallbacks_for_unfilled_designated_slots() {
        let mut builder = PaletteBuilder::new(CAPS);
        builder.set_secondary_dark(Rgb::new(5, 5, 5));
        let palette = builder.finish(&FallbackColors::default());
        assert_eq!(palette.secondary_dark, Rgb::new(5, 5, 5));
        assert_eq!(palette.primary_accent, FALLBACK_ACCENT);
        assert_eq!(palette.bright_accent, FALLBACK_BRIGHT);
    }

    #[test]
    fn is_complete_requires_full_buckets_and_designated() {
        let caps = BucketCaps { bucket: 1, accent: 1 };
        let mut builder = PaletteBuilder::new(caps);
        assert!(!builder.is_complete());

        builder.push_dark(Rgb::new(0, 0, 0));
        builder.push_mid(Rgb::new(128, 64, 64));
        builder.push_bright(Rgb::new(250, 250, 250));
        builder.push_accent(Rgb::new(0, 0, 0));
        assert!(!builder.is_complete());

        builder.set_primary_accent(Rgb::new(0, 100, 60));
        builder.set_secondary_dark(Rgb::new(0, 0, 0));
        builder.set_bright_accent(Rgb::new(0, 100, 60));
        assert!(builder.is_complete());
    }

    #[test]
    fn fallback_dark_and_accent_share_the_site_brown() {
        // Both #2e1705 in the original theme.
        assert_eq!(FALLBACK_DARK, FALLBACK_ACCENT);
    }
}
