//! Convenience helpers for loading images via the `image` crate.
//!
//! Available when the `image-io` feature is enabled.

use crate::image::owned::OwnedImage;
use crate::util::{HighPixError, HighPixResult};
use std::path::Path;

/// Converts a decoded image to 16-bit luminance, scaling 8-bit sources by 257.
pub fn owned_luma16(img: &image::DynamicImage) -> HighPixResult<OwnedImage<u16>> {
    let gray = img.to_luma16();
    let width = gray.width() as usize;
    let height = gray.height() as usize;
    OwnedImage::new(gray.into_raw(), width, height)
}

/// Converts a decoded image to 8-bit luminance.
pub fn owned_luma8(img: &image::DynamicImage) -> HighPixResult<OwnedImage<u8>> {
    let gray = img.to_luma8();
    let width = gray.width() as usize;
    let height = gray.height() as usize;
    OwnedImage::new(gray.into_raw(), width, height)
}

/// Converts a decoded image to luminance at its native channel depth.
///
/// Sources with at most 8 bits per channel keep their `0..=255` values,
/// widened to `u16` without scaling; deeper sources use 16-bit luminance.
pub fn owned_native_luma(img: &image::DynamicImage) -> HighPixResult<OwnedImage<u16>> {
    let color = img.color();
    let bits_per_channel = color.bits_per_pixel() / u16::from(color.channel_count());
    if bits_per_channel > 8 {
        return owned_luma16(img);
    }
    let gray = owned_luma8(img)?;
    let data = gray.data().iter().map(|&v| u16::from(v)).collect();
    OwnedImage::new(data, gray.width(), gray.height())
}

/// Loads an image from disk as luminance at its native channel depth.
pub fn load_native_luma<P: AsRef<Path>>(path: P) -> HighPixResult<OwnedImage<u16>> {
    let img = image::open(path).map_err(|err| HighPixError::ImageIo {
        reason: err.to_string(),
    })?;
    owned_native_luma(&img)
}

#[cfg(test)]
mod tests {
    use super::{load_native_luma, owned_native_luma};
    use crate::util::HighPixError;
    use image::{DynamicImage, GrayImage, ImageBuffer, Luma};

    #[test]
    fn eight_bit_sources_keep_their_values() {
        let gray = GrayImage::from_raw(3, 1, vec![200, 7, 255]).unwrap();
        let owned = owned_native_luma(&DynamicImage::ImageLuma8(gray)).unwrap();
        assert_eq!(owned.data(), &[200u16, 7, 255]);
        assert_eq!((owned.width(), owned.height()), (3, 1));
    }

    #[test]
    fn sixteen_bit_sources_are_not_rescaled() {
        let gray: ImageBuffer<Luma<u16>, Vec<u16>> =
            ImageBuffer::from_raw(2, 1, vec![51400, 3]).unwrap();
        let owned = owned_native_luma(&DynamicImage::ImageLuma16(gray)).unwrap();
        assert_eq!(owned.data(), &[51400u16, 3]);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_native_luma("does/not/exist.png").unwrap_err();
        assert!(matches!(err, HighPixError::ImageIo { .. }));
    }
}
