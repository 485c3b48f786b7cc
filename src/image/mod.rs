//! Image views and pixel coordinate helpers.
//!
//! `ImageView` is a borrowed 2D view into a 1D buffer with an explicit stride.
//! The stride counts elements between the starts of consecutive rows, so a
//! stride larger than the width represents padded rows. Linear pixel
//! positions are offsets into the view's buffer and map back to coordinates
//! as `row = position / stride`, `col = position % stride`.

use crate::util::{HighPixError, HighPixResult};

#[cfg(feature = "image-io")]
pub mod io;
pub mod owned;
pub mod pixels;

/// Borrowed 2D image view with an explicit stride.
#[derive(Copy, Clone, Debug)]
pub struct ImageView<'a, T> {
    data: &'a [T],
    width: usize,
    height: usize,
    stride: usize,
}

impl<'a, T> ImageView<'a, T> {
    /// Creates a contiguous view with `stride == width`.
    pub fn from_slice(data: &'a [T], width: usize, height: usize) -> HighPixResult<Self> {
        Self::new(data, width, height, width)
    }

    /// Creates a view with an explicit stride.
    pub fn new(data: &'a [T], width: usize, height: usize, stride: usize) -> HighPixResult<Self> {
        let needed = required_len(width, height, stride)?;
        if data.len() < needed {
            return Err(HighPixError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            stride,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the stride in elements between row starts.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Returns the backing slice including any row padding.
    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }

    /// Returns the element at `(x, y)` if it is within bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<&'a T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.stride + x)
    }

    /// Returns row `y` without its padding.
    pub fn row(&self, y: usize) -> Option<&'a [T]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.stride;
        self.data.get(start..start + self.width)
    }

    /// Linear offset of `(x, y)` within the backing buffer.
    pub fn position_of(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }

    /// Maps a linear offset back to row and column using this view's stride.
    pub fn position_to_coord(&self, position: usize) -> PixelCoord {
        position_to_coord(position, self.stride)
    }

    /// Returns a zero-copy view of the `width x height` block at `(x, y)`.
    ///
    /// Positions reported against the sub-view are relative to its first pixel.
    pub fn roi(&self, x: usize, y: usize, width: usize, height: usize) -> HighPixResult<Self> {
        if width == 0 || height == 0 {
            return Err(HighPixError::InvalidDimensions { width, height });
        }
        let fits = x
            .checked_add(width)
            .zip(y.checked_add(height))
            .is_some_and(|(end_x, end_y)| end_x <= self.width && end_y <= self.height);
        if !fits {
            return Err(HighPixError::RoiOutOfBounds {
                x,
                y,
                width,
                height,
                img_width: self.width,
                img_height: self.height,
            });
        }
        let start = self.position_of(x, y);
        ImageView::new(&self.data[start..], width, height, self.stride)
    }
}

/// Row and column of a pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PixelCoord {
    pub row: usize,
    pub col: usize,
}

/// Maps a linear offset to a coordinate given a row stride.
///
/// `stride` must be non-zero.
pub fn position_to_coord(position: usize, stride: usize) -> PixelCoord {
    PixelCoord {
        row: position / stride,
        col: position % stride,
    }
}

fn required_len(width: usize, height: usize, stride: usize) -> HighPixResult<usize> {
    if width == 0 || height == 0 {
        return Err(HighPixError::InvalidDimensions { width, height });
    }
    if stride < width {
        return Err(HighPixError::InvalidStride { width, stride });
    }
    (height - 1)
        .checked_mul(stride)
        .and_then(|v| v.checked_add(width))
        .ok_or(HighPixError::InvalidDimensions { width, height })
}

#[cfg(test)]
mod tests {
    use super::{position_to_coord, ImageView, PixelCoord};
    use crate::util::HighPixError;

    #[test]
    fn coords_round_trip_through_stride() {
        let data = [0u16; 40];
        let view = ImageView::new(&data, 6, 5, 8).unwrap();
        for y in 0..view.height() {
            for x in 0..view.width() {
                let pos = view.position_of(x, y);
                assert_eq!(view.position_to_coord(pos), PixelCoord { row: y, col: x });
            }
        }
    }

    #[test]
    fn position_to_coord_uses_integer_division() {
        assert_eq!(position_to_coord(0, 256), PixelCoord { row: 0, col: 0 });
        assert_eq!(position_to_coord(257, 256), PixelCoord { row: 1, col: 1 });
        assert_eq!(position_to_coord(65535, 256), PixelCoord { row: 255, col: 255 });
    }

    #[test]
    fn roi_keeps_parent_stride() {
        let data: Vec<u8> = (0u8..16).collect();
        let view = ImageView::from_slice(&data, 4, 4).unwrap();
        let roi = view.roi(1, 1, 2, 2).unwrap();
        assert_eq!(roi.stride(), 4);
        assert_eq!(roi.row(1).unwrap(), &[9u8, 10u8]);
    }

    #[test]
    fn roi_out_of_bounds_reports_image_bounds() {
        let data = [0u8; 16];
        let view = ImageView::from_slice(&data, 4, 4).unwrap();
        assert_eq!(
            view.roi(3, 3, 2, 2).unwrap_err(),
            HighPixError::RoiOutOfBounds {
                x: 3,
                y: 3,
                width: 2,
                height: 2,
                img_width: 4,
                img_height: 4,
            }
        );
        assert_eq!(
            view.roi(0, 0, 0, 2).unwrap_err(),
            HighPixError::InvalidDimensions { width: 0, height: 2 }
        );
        assert!(matches!(
            view.roi(usize::MAX, 0, 2, 1),
            Err(HighPixError::RoiOutOfBounds { .. })
        ));
    }
}
