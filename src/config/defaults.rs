// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the engine. Constants are organized by category.
//!
//! # Categories
//!
//! - **Sampling**: Random pixel sampling bounds and bucket capacities
//! - **Luminance**: Bucket thresholds and the accent contrast floor
//! - **Colors**: Site background and fallback colors (hex)
//! - **Reveal**: Coverage estimation, brush, and touch-sweep parameters

// ==========================================================================
// Sampling Defaults
// ==========================================================================

/// Default maximum number of random pixel samples per classification cycle.
pub const DEFAULT_MAX_SAMPLE_ATTEMPTS: u32 = 1000;

/// Minimum allowed sample attempt cap.
pub const MIN_MAX_SAMPLE_ATTEMPTS: u32 = 1;

/// Maximum allowed sample attempt cap.
pub const MAX_MAX_SAMPLE_ATTEMPTS: u32 = 100_000;

/// Default capacity of each luminance bucket (dark/mid/bright).
pub const DEFAULT_BUCKET_CAP: usize = 5;

/// Default capacity of the ordered accent color sequence.
pub const DEFAULT_ACCENT_CAP: usize = 4;

// ==========================================================================
// Luminance & Contrast Defaults
// ==========================================================================

/// Colors with relative luminance below this go into the dark bucket.
pub const DEFAULT_DARK_LUMINANCE_MAX: f64 = 0.30;

/// Colors with relative luminance above this go into the bright bucket.
/// Everything between the two thresholds (inclusive) is mid.
pub const DEFAULT_BRIGHT_LUMINANCE_MIN: f64 = 0.60;

/// Minimum WCAG-style contrast ratio against the page background for a
/// color to qualify as an accent.
pub const DEFAULT_ACCENT_CONTRAST_MIN: f64 = 3.0;

/// Minimum luminance for the designated primary accent. A near-black color
/// passes the contrast test against cream but reads as body text, not as
/// an accent, so it is excluded here.
pub const DEFAULT_ACCENT_LUMINANCE_MIN: f64 = 0.20;

/// Minimum HSL-style saturation `(max-min)/max` for the designated bright
/// accent. Filters out grays. The designated bright accent's luminance
/// window is `(DEFAULT_ACCENT_LUMINANCE_MIN, DEFAULT_BRIGHT_LUMINANCE_MIN)`.
pub const DEFAULT_SATURATION_MIN: f64 = 0.30;

// ==========================================================================
// Color Defaults
// ==========================================================================

/// Page background the contrast checks run against (cream).
pub const DEFAULT_BACKGROUND_HEX: &str = "#fffff7";

/// Fallback for the designated dark gradient color.
pub const DEFAULT_FALLBACK_DARK_HEX: &str = "#2e1705";

/// Fallback for the designated bright accent color.
pub const DEFAULT_FALLBACK_BRIGHT_HEX: &str = "#0b3826";

/// Fallback for the designated primary accent color.
pub const DEFAULT_FALLBACK_ACCENT_HEX: &str = "#2e1705";

// ==========================================================================
// Reveal Defaults
// ==========================================================================

/// Default interval between coverage recomputations (in milliseconds).
pub const DEFAULT_COVERAGE_INTERVAL_MS: u64 = 100;

/// Minimum coverage interval (in milliseconds).
pub const MIN_COVERAGE_INTERVAL_MS: u64 = 10;

/// Maximum coverage interval (in milliseconds).
pub const MAX_COVERAGE_INTERVAL_MS: u64 = 10_000;

/// Default stride when sampling the canvas alpha channel for coverage.
pub const DEFAULT_COVERAGE_STRIDE: usize = 16;

/// Minimum coverage sampling stride.
pub const MIN_COVERAGE_STRIDE: usize = 1;

/// Default reveal brush radius in canvas pixels.
pub const DEFAULT_BRUSH_RADIUS: f32 = 40.0;

/// Minimum brush radius.
pub const MIN_BRUSH_RADIUS: f32 = 1.0;

/// Maximum brush radius.
pub const MAX_BRUSH_RADIUS: f32 = 512.0;

/// Coverage percentage at which the reveal cycle completes.
pub const DEFAULT_COMPLETION_PERCENT: f32 = 100.0;

/// Number of brush stamps in the scripted touch spiral sweep.
pub const DEFAULT_TOUCH_SWEEP_STEPS: u32 = 220;

/// Angle increment per spiral step (radians).
pub const DEFAULT_TOUCH_ANGLE_STEP: f32 = 0.35;

/// Radius increment per spiral step (canvas pixels).
pub const DEFAULT_TOUCH_RADIUS_STEP: f32 = 1.8;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Sampling validation
    assert!(MIN_MAX_SAMPLE_ATTEMPTS > 0);
    assert!(MAX_MAX_SAMPLE_ATTEMPTS >= MIN_MAX_SAMPLE_ATTEMPTS);
    assert!(DEFAULT_MAX_SAMPLE_ATTEMPTS >= MIN_MAX_SAMPLE_ATTEMPTS);
    assert!(DEFAULT_MAX_SAMPLE_ATTEMPTS <= MAX_MAX_SAMPLE_ATTEMPTS);
    assert!(DEFAULT_BUCKET_CAP > 0);
    assert!(DEFAULT_ACCENT_CAP > 0);

    // Threshold validation
    assert!(DEFAULT_DARK_LUMINANCE_MAX > 0.0);
    assert!(DEFAULT_DARK_LUMINANCE_MAX < DEFAULT_BRIGHT_LUMINANCE_MIN);
    assert!(DEFAULT_BRIGHT_LUMINANCE_MIN < 1.0);
    assert!(DEFAULT_ACCENT_CONTRAST_MIN >= 1.0);
    assert!(DEFAULT_SATURATION_MIN >= 0.0);
    assert!(DEFAULT_ACCENT_LUMINANCE_MIN < DEFAULT_BRIGHT_LUMINANCE_MIN);

    // Reveal validation
    assert!(MIN_COVERAGE_INTERVAL_MS > 0);
    assert!(MAX_COVERAGE_INTERVAL_MS >= MIN_COVERAGE_INTERVAL_MS);
    assert!(DEFAULT_COVERAGE_INTERVAL_MS >= MIN_COVERAGE_INTERVAL_MS);
    assert!(DEFAULT_COVERAGE_INTERVAL_MS <= MAX_COVERAGE_INTERVAL_MS);
    assert!(DEFAULT_COVERAGE_STRIDE >= MIN_COVERAGE_STRIDE);
    assert!(MIN_BRUSH_RADIUS > 0.0);
    assert!(DEFAULT_BRUSH_RADIUS >= MIN_BRUSH_RADIUS);
    assert!(DEFAULT_BRUSH_RADIUS <= MAX_BRUSH_RADIUS);
    assert!(DEFAULT_COMPLETION_PERCENT > 0.0);
    assert!(DEFAULT_COMPLETION_PERCENT <= 100.0);
    assert!(DEFAULT_TOUCH_SWEEP_STEPS > 0);
};
