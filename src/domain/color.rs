// SPDX-License-Identifier: MPL-2.0
//! Core color type and the accessibility math the classifier runs on.
//!
//! Luminance follows the sRGB relative-luminance definition (the piecewise
//! linearization used by WCAG), and contrast is the WCAG ratio between two
//! luminances. Saturation is the HSL-style `(max - min) / max`.

/// An 8-bit sRGB color.
///
/// # Example
///
/// ```
/// use pentimento::domain::color::Rgb;
///
/// let cream = Rgb::from_hex("#fffff7").unwrap();
/// assert!(cream.relative_luminance() > 0.99);
/// assert_eq!(cream.to_hex(), "#fffff7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a `#rrggbb` hex string (leading `#` optional, case-insensitive).
    ///
    /// Returns `None` for anything that is not exactly six hex digits.
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
        let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
        let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }

    /// Formats as a lowercase `#rrggbb` string, the form the site's theme
    /// consumers expect.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Relative luminance in [0, 1] via the standard sRGB piecewise transform.
    #[must_use]
    pub fn relative_luminance(self) -> f64 {
        let r = srgb_to_linear(f64::from(self.r) / 255.0);
        let g = srgb_to_linear(f64::from(self.g) / 255.0);
        let b = srgb_to_linear(f64::from(self.b) / 255.0);
        0.2126 * r + 0.7152 * g + 0.0722 * b
    }

    /// HSL-style saturation `(max - min) / max` over normalized channels.
    ///
    /// Black has no hue to speak of and returns 0.
    #[must_use]
    pub fn saturation(self) -> f64 {
        let max = self.r.max(self.g).max(self.b);
        if max == 0 {
            return 0.0;
        }
        let min = self.r.min(self.g).min(self.b);
        f64::from(max - min) / f64::from(max)
    }
}

fn srgb_to_linear(channel: f64) -> f64 {
    if channel <= 0.03928 {
        channel / 12.92
    } else {
        ((channel + 0.055) / 1.055).powf(2.4)
    }
}

/// WCAG-style contrast ratio between two relative luminances.
///
/// Symmetric in its arguments; always >= 1.
#[must_use]
pub fn contrast_ratio(l1: f64, l2: f64) -> f64 {
    let (lighter, darker) = if l1 >= l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_relative_eq, F64_EPSILON};

    #[test]
    fn from_hex_parses_with_and_without_hash() {
        assert_eq!(Rgb::from_hex("#2e1705"), Some(Rgb::new(0x2e, 0x17, 0x05)));
        assert_eq!(Rgb::from_hex("2E1705"), Some(Rgb::new(0x2e, 0x17, 0x05)));
    }

    #[test]
    fn from_hex_rejects_malformed_input() {
        assert_eq!(Rgb::from_hex(""), None);
        assert_eq!(Rgb::from_hex("#fff"), None);
        assert_eq!(Rgb::from_hex("#zzzzzz"), None);
        assert_eq!(Rgb::from_hex("#fffff7ff"), None);
    }

    #[test]
    fn to_hex_round_trips_lowercase() {
        let color = Rgb::new(0x0b, 0x38, 0x26);
        assert_eq!(color.to_hex(), "#0b3826");
        assert_eq!(Rgb::from_hex(&color.to_hex()), Some(color));
    }

    #[test]
    fn luminance_extremes() {
        assert_relative_eq!(Rgb::new(0, 0, 0).relative_luminance(), 0.0);
        assert_relative_eq!(
            Rgb::new(255, 255, 255).relative_luminance(),
            1.0,
            epsilon = F64_EPSILON
        );
    }

    #[test]
    fn cream_background_luminance_is_near_one() {
        // The page background from the site theme; the classifier precomputes
        // this once per cycle.
        let cream = Rgb::new(255, 255, 247);
        let l = cream.relative_luminance();
        assert!(l > 0.99 && l < 1.0, "got {l}");
    }

    #[test]
    fn primary_channels_match_coefficients() {
        let red = Rgb::new(255, 0, 0).relative_luminance();
        let green = Rgb::new(0, 255, 0).relative_luminance();
        let blue = Rgb::new(0, 0, 255).relative_luminance();
        assert_relative_eq!(red, 0.2126, epsilon = 1e-4);
        assert_relative_eq!(green, 0.7152, epsilon = 1e-4);
        assert_relative_eq!(blue, 0.0722, epsilon = 1e-4);
    }

    #[test]
    fn saturation_of_gray_is_zero() {
        assert_eq!(Rgb::new(128, 128, 128).saturation(), 0.0);
        assert_eq!(Rgb::new(0, 0, 0).saturation(), 0.0);
    }

    #[test]
    fn saturation_of_pure_hue_is_one() {
        assert_relative_eq!(Rgb::new(255, 0, 0).saturation(), 1.0);
        assert_relative_eq!(Rgb::new(0, 128, 0).saturation(), 1.0);
    }

    #[test]
    fn contrast_ratio_is_symmetric() {
        let a = contrast_ratio(0.9, 0.1);
        let b = contrast_ratio(0.1, 0.9);
        assert_relative_eq!(a, b, epsilon = F64_EPSILON);
    }

    #[test]
    fn contrast_of_equal_luminances_is_one() {
        assert_relative_eq!(contrast_ratio(0.5, 0.5), 1.0, epsilon = F64_EPSILON);
    }

    #[test]
    fn black_against_cream_exceeds_accent_floor() {
        let cream = Rgb::new(255, 255, 247).relative_luminance();
        let ratio = contrast_ratio(0.0, cream);
        assert!(ratio > 3.0, "got {ratio}");
    }
}
