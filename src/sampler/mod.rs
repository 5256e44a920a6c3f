// SPDX-License-Identifier: MPL-2.0
//! Image loading: decode a bitmap from disk into a [`SourceImage`].
//!
//! Decoding happens eagerly and completely here. Downstream code (the
//! classifier and the reveal surface) never observes a partially decoded
//! image; a failed or zero-size decode surfaces as an error the caller
//! answers with the fallback palette.

use crate::domain::source::SourceImage;
use crate::error::{Error, Result};
use std::path::Path;
use std::sync::Arc;

/// Loads and fully decodes the image at `path` into an RGBA pixel buffer.
///
/// # Errors
///
/// Returns [`Error::Image`] if the file cannot be decoded or decodes to a
/// zero-size buffer. Callers degrade to the default theme in that case
/// rather than sampling.
pub fn load_source_image<P: AsRef<Path>>(path: P) -> Result<SourceImage> {
    let decoded = image_rs::open(path.as_ref())?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();

    if width == 0 || height == 0 {
        return Err(Error::Image(format!(
            "decoded image has zero size: {}x{}",
            width, height
        )));
    }

    Ok(SourceImage::new(width, height, Arc::new(rgba.into_raw())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    fn write_test_png(path: &Path, width: u32, height: u32, rgba: [u8; 4]) {
        let img = image_rs::RgbaImage::from_pixel(width, height, image_rs::Rgba(rgba));
        img.save(path).expect("failed to write test png");
    }

    #[test]
    fn loads_png_into_rgba_buffer() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("solid.png");
        write_test_png(&path, 8, 6, [0x2e, 0x17, 0x05, 0xff]);

        let image = load_source_image(&path).expect("load should succeed");
        assert_eq!(image.width(), 8);
        assert_eq!(image.height(), 6);
        assert_eq!(image.pixel(7, 5).r, 0x2e);
        assert_eq!(image.pixel(0, 0).b, 0x05);
    }

    #[test]
    fn missing_file_is_an_image_error() {
        let dir = tempdir().expect("failed to create temp dir");
        let err = load_source_image(dir.path().join("nope.png")).unwrap_err();
        assert!(matches!(err, Error::Image(_)));
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("garbage.png");
        std::fs::write(&path, b"not a png at all").expect("failed to write file");

        let err = load_source_image(&path).unwrap_err();
        assert!(matches!(err, Error::Image(_)));
    }
}
