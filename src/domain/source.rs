// SPDX-License-Identifier: MPL-2.0
//! Decoded source image with random-access pixel reads.

use super::color::Rgb;
use std::sync::Arc;

/// A fully decoded bitmap, immutable for the duration of one theming cycle.
///
/// Decode completion is a precondition of construction: by the time a
/// `SourceImage` exists, every pixel is readable. The buffer is shared via
/// `Arc` so the classifier and the reveal surface can hold the same cycle's
/// image without copying.
///
/// # Example
///
/// ```
/// use pentimento::domain::source::SourceImage;
///
/// let pixels = vec![255u8; 4 * 4 * 4]; // 4x4 RGBA, solid white
/// let image = SourceImage::from_rgba(4, 4, pixels);
///
/// assert_eq!(image.width(), 4);
/// assert_eq!(image.pixel(3, 3).r, 255);
/// ```
#[derive(Debug, Clone)]
pub struct SourceImage {
    width: u32,
    height: u32,
    /// RGBA pixel data (4 bytes per pixel).
    rgba_bytes: Arc<Vec<u8>>,
}

impl SourceImage {
    /// Creates a `SourceImage` from dimensions and shared RGBA data.
    ///
    /// # Panics
    ///
    /// Panics if the pixel data length doesn't match `width * height * 4`.
    #[must_use]
    pub fn new(width: u32, height: u32, rgba_bytes: Arc<Vec<u8>>) -> Self {
        let expected_len = (width as usize) * (height as usize) * 4;
        assert_eq!(
            rgba_bytes.len(),
            expected_len,
            "RGBA data length mismatch: expected {expected_len}, got {}",
            rgba_bytes.len()
        );

        Self {
            width,
            height,
            rgba_bytes,
        }
    }

    /// Creates a `SourceImage` from dimensions and owned RGBA data.
    ///
    /// # Panics
    ///
    /// Panics if the pixel data length doesn't match `width * height * 4`.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, rgba_bytes: Vec<u8>) -> Self {
        Self::new(width, height, Arc::new(rgba_bytes))
    }

    /// Returns the image width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the image height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the total number of pixels.
    #[must_use]
    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Reads the color at `(x, y)`. The alpha channel is not part of the
    /// classification model and is ignored.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of bounds.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Rgb {
        assert!(x < self.width && y < self.height, "pixel read out of bounds");
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        Rgb::new(
            self.rgba_bytes[idx],
            self.rgba_bytes[idx + 1],
            self.rgba_bytes[idx + 2],
        )
    }

    /// Returns a reference to the RGBA pixel data.
    #[must_use]
    pub fn rgba_bytes(&self) -> &[u8] {
        &self.rgba_bytes
    }
}

impl PartialEq for SourceImage {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.rgba_bytes == other.rgba_bytes
    }
}

impl Eq for SourceImage {}
