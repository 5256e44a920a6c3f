// SPDX-License-Identifier: MPL-2.0
//! Reveal cycle state machine and coverage newtype.
//!
//! The phase enum replaces the boolean transition flag the effect is usually
//! written with: a cycle is either accepting pointer input (`Idle`) or
//! waiting for the next image to decode (`Transitioning`), and transitions
//! are guarded so overlapping completion events cannot double-trigger.

/// Coverage percentage bounds.
pub mod coverage_bounds {
    /// Minimum coverage percentage.
    pub const MIN_PERCENT: f32 = 0.0;
    /// Maximum coverage percentage.
    pub const MAX_PERCENT: f32 = 100.0;
}

/// Current phase of the reveal surface for one image cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealPhase {
    /// Pointer input composites onto the canvas; coverage is tracked.
    #[default]
    Idle,
    /// The cycle completed; the next source image is decoding. Pointer
    /// input and coverage checks are no-ops until it arrives.
    Transitioning,
}

impl RevealPhase {
    /// Returns true if the surface accepts pointer input.
    #[must_use]
    pub fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if the surface is waiting on the next image.
    #[must_use]
    pub fn is_transitioning(self) -> bool {
        matches!(self, Self::Transitioning)
    }
}

/// Revealed fraction of the canvas, in percent, clamped to [0, 100].
///
/// Monotonically non-decreasing within one `Idle` cycle; reset to exactly
/// zero when a new cycle begins.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RevealCoverage(f32);

impl RevealCoverage {
    /// Zero coverage, the state every cycle starts in.
    pub const ZERO: Self = Self(0.0);

    /// Creates a coverage value, clamping to the valid range. NaN clamps
    /// to zero.
    #[must_use]
    pub fn new(percent: f32) -> Self {
        if percent.is_nan() {
            return Self::ZERO;
        }
        Self(percent.clamp(coverage_bounds::MIN_PERCENT, coverage_bounds::MAX_PERCENT))
    }

    /// Returns the raw percentage.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the larger of the two coverages. Used to keep the tracked
    /// value non-decreasing within a cycle.
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        if other.0 > self.0 { other } else { self }
    }

    /// True once coverage has reached `threshold` percent.
    #[must_use]
    pub fn is_complete(self, threshold: f32) -> bool {
        self.0 >= threshold
    }
}
