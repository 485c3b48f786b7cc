//! Error types for highpix.

use thiserror::Error;

/// Result alias for highpix operations.
pub type HighPixResult<T> = std::result::Result<T, HighPixError>;

/// Errors that can occur when building heaps, selecting, or viewing images.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum HighPixError {
    /// The requested heap capacity is zero or above the supported maximum.
    #[error("invalid capacity {capacity}: must be in 1..={max}")]
    InvalidCapacity { capacity: usize, max: usize },
    /// Backing storage for the heap could not be reserved.
    #[error("failed to allocate storage for {capacity} entries")]
    AllocationFailure { capacity: usize },
    /// Peek or pop on a heap with no entries.
    #[error("heap is empty")]
    EmptyHeap,
    /// Push on a heap already holding `capacity` entries.
    #[error("heap is full (capacity {capacity})")]
    HeapFull { capacity: usize },
    /// A cancellable selection observed its stop flag.
    #[error("selection cancelled after {seen} items")]
    Cancelled { seen: usize },
    /// Image dimensions are zero or overflow.
    #[error("invalid dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    /// Row stride is smaller than the row width.
    #[error("invalid stride {stride} for width {width}")]
    InvalidStride { width: usize, stride: usize },
    /// Pixel buffer is shorter than the layout requires.
    #[error("buffer too small: needed {needed}, got {got}")]
    BufferTooSmall { needed: usize, got: usize },
    /// Pixel buffer length differs from the exact length the layout requires.
    #[error("buffer length mismatch: needed {needed}, got {got}")]
    BufferLengthMismatch { needed: usize, got: usize },
    /// Region of interest extends past the image bounds.
    #[error("roi ({x}, {y}) {width}x{height} out of bounds for {img_width}x{img_height} image")]
    RoiOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
        img_width: usize,
        img_height: usize,
    },
    /// Image decoding failed.
    #[error("image io failed: {reason}")]
    ImageIo { reason: String },
}
