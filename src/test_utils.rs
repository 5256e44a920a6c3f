// SPDX-License-Identifier: MPL-2.0
//! Shared helpers for the unit tests.
//!
//! The luminance and contrast tests compare f64 results of the sRGB
//! piecewise transform, where exact equality is too strict; the `approx`
//! macro handles the tolerance.

pub use approx::assert_relative_eq;

/// Epsilon for luminance and contrast-ratio comparisons.
pub const F64_EPSILON: f64 = 1e-10;
