// SPDX-License-Identifier: MPL-2.0
//! Interactive reveal surface: a pointer-driven "uncover the painting"
//! effect with a coverage metric that rotates the source image.
//!
//! Pointer moves stamp a brush-shaped cutout of the color image onto an
//! initially transparent canvas. A throttled estimator samples the canvas
//! alpha channel at a fixed stride; when the revealed fraction reaches the
//! completion threshold the surface picks the next image uniformly at
//! random, records the current revealed-sample count as the new baseline,
//! resets coverage to zero, and enters [`RevealPhase::Transitioning`] until
//! the new image's decode arrives via [`RevealSurface::set_source`]. All
//! three bookkeeping updates happen inside the single completion branch, so
//! a burst of pointer events in one tick can trigger at most one swap.
//!
//! Missing source image means compositing is a no-op, never an error.

use crate::config::defaults::{MAX_BRUSH_RADIUS, MIN_BRUSH_RADIUS};
use crate::config::{Config, RevealConfig};
use crate::domain::reveal::{RevealCoverage, RevealPhase};
use crate::domain::source::SourceImage;
use crate::error::{Error, Result};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, PixmapPaint, Transform};

/// A circular alpha mask, rasterized once and reused for every stamp.
#[derive(Debug, Clone)]
pub struct BrushMask {
    pixmap: Pixmap,
    radius: f32,
}

impl BrushMask {
    /// Rasterizes an anti-aliased filled circle of the given radius.
    /// The radius is clamped to the configurable bounds.
    pub fn circular(radius: f32) -> Result<Self> {
        let radius = radius.clamp(MIN_BRUSH_RADIUS, MAX_BRUSH_RADIUS);
        let diameter = (radius * 2.0).ceil() as u32;
        let mut pixmap = Pixmap::new(diameter, diameter)
            .ok_or_else(|| Error::Canvas("zero-size brush mask".to_string()))?;

        let path = PathBuilder::from_circle(radius, radius, radius)
            .ok_or_else(|| Error::Canvas("degenerate brush circle".to_string()))?;
        let mut paint = Paint::default();
        paint.set_color_rgba8(255, 255, 255, 255);
        paint.anti_alias = true;
        pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);

        Ok(Self { pixmap, radius })
    }

    /// Returns the brush radius in pixels.
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Side length of the square mask.
    #[must_use]
    pub fn size(&self) -> u32 {
        self.pixmap.width()
    }

    fn alpha(&self, x: u32, y: u32) -> u8 {
        let idx = ((y * self.pixmap.width() + x) * 4 + 3) as usize;
        self.pixmap.data()[idx]
    }
}

/// Emitted when a reveal cycle completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealEvent {
    /// Coverage reached the completion threshold; the caller should decode
    /// image `next_index` and hand it back via [`RevealSurface::set_source`].
    CycleComplete { next_index: usize },
}

/// The reveal canvas plus its cycle state machine.
#[derive(Debug)]
pub struct RevealSurface {
    canvas: Pixmap,
    brush: BrushMask,
    source: Option<SourceImage>,
    /// Number of images in the rotation the next index is drawn from.
    image_count: usize,
    phase: RevealPhase,
    /// Revealed-sample count carried over from the previous cycle, so
    /// pixels already uncovered on the shared canvas are not recounted.
    baseline: usize,
    coverage: RevealCoverage,
    last_check: Option<Instant>,
    check_interval: Duration,
    reveal: RevealConfig,
    rng: SmallRng,
}

impl RevealSurface {
    /// Creates a surface with an OS-seeded RNG for image rotation.
    pub fn new(width: u32, height: u32, image_count: usize, config: &Config) -> Result<Self> {
        Self::from_rng(width, height, image_count, config, SmallRng::from_os_rng())
    }

    /// Creates a surface with a fixed RNG seed (deterministic next-image
    /// choice, used by the tests).
    pub fn with_seed(
        width: u32,
        height: u32,
        image_count: usize,
        config: &Config,
        seed: u64,
    ) -> Result<Self> {
        Self::from_rng(width, height, image_count, config, SmallRng::seed_from_u64(seed))
    }

    fn from_rng(
        width: u32,
        height: u32,
        image_count: usize,
        config: &Config,
        rng: SmallRng,
    ) -> Result<Self> {
        let canvas = Pixmap::new(width, height)
            .ok_or_else(|| Error::Canvas(format!("zero-size canvas: {width}x{height}")))?;
        let brush = BrushMask::circular(config.reveal.brush_radius)?;

        Ok(Self {
            canvas,
            brush,
            source: None,
            image_count,
            phase: RevealPhase::Idle,
            baseline: 0,
            coverage: RevealCoverage::ZERO,
            last_check: None,
            check_interval: Duration::from_millis(config.reveal.coverage_interval_ms),
            reveal: config.reveal.clone(),
            rng,
        })
    }

    /// Current phase of the cycle.
    #[must_use]
    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    /// Coverage as of the last recomputation.
    #[must_use]
    pub fn coverage(&self) -> RevealCoverage {
        self.coverage
    }

    /// Revealed-sample baseline for the active cycle.
    #[must_use]
    pub fn baseline(&self) -> usize {
        self.baseline
    }

    /// The reveal canvas, for rendering.
    #[must_use]
    pub fn canvas(&self) -> &Pixmap {
        &self.canvas
    }

    /// Canvas alpha at a coordinate. Zero means still covered.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the canvas.
    #[must_use]
    pub fn alpha_at(&self, x: u32, y: u32) -> u8 {
        assert!(x < self.canvas.width() && y < self.canvas.height());
        let idx = ((y * self.canvas.width() + x) * 4 + 3) as usize;
        self.canvas.data()[idx]
    }

    /// Installs the source image for the current cycle.
    ///
    /// Completes a pending transition. When called while `Idle` it starts
    /// a fresh cycle instead: the baseline snaps to the current revealed
    /// count and coverage resets to zero.
    pub fn set_source(&mut self, image: SourceImage) {
        match self.phase {
            RevealPhase::Transitioning => {
                self.phase = RevealPhase::Idle;
            }
            RevealPhase::Idle => {
                let (revealed, _) = self.sampled_counts();
                self.baseline = revealed;
                self.coverage = RevealCoverage::ZERO;
            }
        }
        self.source = Some(image);
    }

    /// Handles a pointer move: composites a brush stamp at `(x, y)` and
    /// runs the throttled coverage check.
    ///
    /// No-op while transitioning or before a source image is set.
    pub fn pointer_move(&mut self, x: f32, y: f32, now: Instant) -> Option<RevealEvent> {
        if self.phase.is_transitioning() {
            return None;
        }
        self.stamp(x, y);
        self.check_coverage(now)
    }

    /// Runs the coverage estimator if the throttle interval has elapsed.
    pub fn check_coverage(&mut self, now: Instant) -> Option<RevealEvent> {
        if self.phase.is_transitioning() {
            return None;
        }
        if let Some(last) = self.last_check {
            if now.duration_since(last) < self.check_interval {
                return None;
            }
        }
        self.last_check = Some(now);
        self.recompute()
    }

    /// Scripted spiral sweep for touch input: stamps along an expanding
    /// spiral around `(cx, cy)`, then evaluates completion exactly once,
    /// bypassing the throttle.
    pub fn touch_sweep(&mut self, cx: f32, cy: f32) -> Option<RevealEvent> {
        if self.phase.is_transitioning() {
            return None;
        }
        let mut angle = 0.0f32;
        let mut radius = 0.0f32;
        for _ in 0..self.reveal.touch_sweep_steps {
            angle += self.reveal.touch_angle_step;
            radius += self.reveal.touch_radius_step;
            self.stamp(cx + radius * angle.cos(), cy + radius * angle.sin());
        }
        self.recompute()
    }

    /// Resizes the canvas, copying the old content in first so previously
    /// revealed pixels survive.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        let mut next = Pixmap::new(width, height)
            .ok_or_else(|| Error::Canvas(format!("zero-size canvas: {width}x{height}")))?;
        next.draw_pixmap(
            0,
            0,
            self.canvas.as_ref(),
            &PixmapPaint::default(),
            Transform::identity(),
            None,
        );
        self.canvas = next;
        Ok(())
    }

    /// Stamps the brush at `(x, y)`, copying source pixels through the mask.
    /// Alpha only ever grows, which keeps the coverage estimate monotone.
    fn stamp(&mut self, x: f32, y: f32) {
        if !self.phase.is_idle() {
            return;
        }
        let Some(source) = &self.source else {
            return;
        };

        let size = self.brush.size();
        let left = (x - self.brush.radius()).floor() as i64;
        let top = (y - self.brush.radius()).floor() as i64;
        let canvas_w = i64::from(self.canvas.width());
        let canvas_h = i64::from(self.canvas.height());
        let src_w = u64::from(source.width());
        let src_h = u64::from(source.height());

        let brush = &self.brush;
        let data = self.canvas.data_mut();
        for by in 0..size {
            let cy = top + i64::from(by);
            if cy < 0 || cy >= canvas_h {
                continue;
            }
            for bx in 0..size {
                let cx = left + i64::from(bx);
                if cx < 0 || cx >= canvas_w {
                    continue;
                }
                let alpha = brush.alpha(bx, by);
                if alpha == 0 {
                    continue;
                }
                let idx = ((cy * canvas_w + cx) * 4) as usize;
                if alpha <= data[idx + 3] {
                    continue;
                }

                // Canvas and image resolutions differ; map by axis scaling.
                let sx = ((cx as u64 * src_w / canvas_w as u64) as u32).min(source.width() - 1);
                let sy = ((cy as u64 * src_h / canvas_h as u64) as u32).min(source.height() - 1);
                let color = source.pixel(sx, sy);

                // Premultiplied RGBA, as tiny-skia stores it.
                let a = u16::from(alpha);
                data[idx] = ((u16::from(color.r) * a + 127) / 255) as u8;
                data[idx + 1] = ((u16::from(color.g) * a + 127) / 255) as u8;
                data[idx + 2] = ((u16::from(color.b) * a + 127) / 255) as u8;
                data[idx + 3] = alpha;
            }
        }
    }

    /// Counts (revealed, total) alpha samples at the configured stride.
    fn sampled_counts(&self) -> (usize, usize) {
        let data = self.canvas.data();
        let stride = self.reveal.coverage_stride.max(1);
        let mut revealed = 0;
        let mut total = 0;
        let mut idx = 3;
        while idx < data.len() {
            total += 1;
            if data[idx] > 0 {
                revealed += 1;
            }
            idx += 4 * stride;
        }
        (revealed, total)
    }

    /// Recomputes coverage and fires at most one transition.
    fn recompute(&mut self) -> Option<RevealEvent> {
        if self.phase.is_transitioning() || self.source.is_none() {
            return None;
        }

        let (revealed, total) = self.sampled_counts();
        // Baseline past the sample count clamps to zero rather than going
        // negative; see the design notes.
        let denom = total.saturating_sub(self.baseline);
        let percent = if denom == 0 {
            0.0
        } else {
            revealed.saturating_sub(self.baseline) as f32 / denom as f32 * 100.0
        };
        self.coverage = self.coverage.max(RevealCoverage::new(percent));

        if self.coverage.is_complete(self.reveal.completion_percent) {
            let next_index = self.rng.random_range(0..self.image_count.max(1));
            self.baseline = revealed;
            self.coverage = RevealCoverage::ZERO;
            self.phase = RevealPhase::Transitioning;
            return Some(RevealEvent::CycleComplete { next_index });
        }
        None
    }
}
