//! Owned contiguous image buffers.

use crate::image::ImageView;
use crate::util::{HighPixError, HighPixResult};

/// Owned image with `stride == width`.
#[derive(Clone, Debug, PartialEq)]
pub struct OwnedImage<T> {
    data: Vec<T>,
    width: usize,
    height: usize,
}

impl<T> OwnedImage<T> {
    /// Wraps `data` as a `width x height` image; the length must match exactly.
    pub fn new(data: Vec<T>, width: usize, height: usize) -> HighPixResult<Self> {
        if width == 0 || height == 0 {
            return Err(HighPixError::InvalidDimensions { width, height });
        }
        let needed = width
            .checked_mul(height)
            .ok_or(HighPixError::InvalidDimensions { width, height })?;
        if data.len() < needed {
            return Err(HighPixError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        if data.len() > needed {
            return Err(HighPixError::BufferLengthMismatch {
                needed,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Builds an image by evaluating `f(x, y)` in row-major order.
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> HighPixResult<Self>
    where
        F: FnMut(usize, usize) -> T,
    {
        let len = width
            .checked_mul(height)
            .ok_or(HighPixError::InvalidDimensions { width, height })?;
        let mut data = Vec::with_capacity(len);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Self::new(data, width, height)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Returns a borrowed view of the image.
    pub fn view(&self) -> ImageView<'_, T> {
        ImageView {
            data: &self.data,
            width: self.width,
            height: self.height,
            stride: self.width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::OwnedImage;
    use crate::util::HighPixError;

    #[test]
    fn rejects_mismatched_length() {
        let err = OwnedImage::new(vec![0u16; 5], 2, 2).unwrap_err();
        assert_eq!(err, HighPixError::BufferLengthMismatch { needed: 4, got: 5 });
        let err = OwnedImage::new(vec![0u16; 3], 2, 2).unwrap_err();
        assert_eq!(err, HighPixError::BufferTooSmall { needed: 4, got: 3 });
    }

    #[test]
    fn from_fn_fills_row_major() {
        let img = OwnedImage::from_fn(3, 2, |x, y| (y * 10 + x) as u16).unwrap();
        assert_eq!(img.data(), &[0, 1, 2, 10, 11, 12]);
        assert_eq!(img.view().get(2, 1).copied(), Some(12));
    }
}
