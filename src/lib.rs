//! highpix selects the K highest-valued items of a finite stream in one pass.
//!
//! The core is a fixed-capacity binary min-heap ([`BoundedMinHeap`]) and a
//! streaming selector ([`TopKSelector`]) that evicts the heap minimum only for
//! strictly larger values. Selection runs in O(n log k) time with O(k) memory.
//! The image layer applies this to pixel intensities and maps linear offsets
//! back to row/column coordinates, with optional parallelism via the `rayon`
//! feature and file loading via `image-io`.

pub mod heap;
pub mod image;
pub mod select;
mod trace;
pub mod util;

pub use crate::heap::{BoundedMinHeap, Entry, Score, MAX_CAPACITY};
pub use crate::image::owned::OwnedImage;
pub use crate::image::pixels::{sort_pixels_desc, top_pixels, Pixel};
pub use crate::image::{position_to_coord, ImageView, PixelCoord};
pub use crate::select::{merge_top_k, select_top_k, select_top_k_cancellable, TopKSelector};
pub use crate::util::{HighPixError, HighPixResult};

#[cfg(feature = "image-io")]
pub use crate::image::io;
#[cfg(feature = "rayon")]
pub use crate::image::pixels::par_top_pixels;
#[cfg(feature = "rayon")]
pub use crate::select::parallel::{par_select_top_k, DEFAULT_CHUNK_LEN};
