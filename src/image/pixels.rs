//! Brightest-pixel selection over image views.

use std::cmp::Ordering;

use crate::heap::{Entry, Score};
use crate::image::{ImageView, PixelCoord};
use crate::select::TopKSelector;
use crate::trace::{trace_event, trace_span};
use crate::util::{HighPixError, HighPixResult};

/// A selected pixel with its linear offset and coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pixel<T> {
    /// Offset into the view's backing buffer.
    pub position: usize,
    pub coord: PixelCoord,
    pub value: T,
}

impl<T> Pixel<T> {
    fn from_entry(entry: Entry<T>, stride: usize) -> Self {
        Self {
            position: entry.position,
            coord: super::position_to_coord(entry.position, stride),
            value: entry.value,
        }
    }
}

fn pixel_cmp_desc<T: Score>(a: &Pixel<T>, b: &Pixel<T>) -> Ordering {
    b.value
        .score_cmp(&a.value)
        .then_with(|| a.position.cmp(&b.position))
}

/// Sorts pixels by descending value, breaking ties by ascending position.
pub fn sort_pixels_desc<T: Score>(pixels: &mut [Pixel<T>]) {
    pixels.sort_by(pixel_cmp_desc);
}

/// Returns the `k` highest-valued pixels of `view` in heap order.
///
/// Rows are scanned top to bottom, left to right; padding columns beyond the
/// view width are never considered.
pub fn top_pixels<T: Score>(view: ImageView<'_, T>, k: usize) -> HighPixResult<Vec<Pixel<T>>> {
    let _span = trace_span!(
        "top_pixels",
        k = k,
        width = view.width(),
        height = view.height()
    )
    .entered();

    let mut selector = TopKSelector::new(k)?;
    for y in 0..view.height() {
        let row = row_or_err(view, y)?;
        let base = y * view.stride();
        selector.extend(row.iter().enumerate().map(|(x, &v)| (base + x, v)));
    }

    trace_event!(
        DEBUG,
        "pixels selected",
        seen = selector.seen(),
        evicted = selector.evicted(),
    );
    let stride = view.stride();
    Ok(selector
        .into_vec()
        .into_iter()
        .map(|entry| Pixel::from_entry(entry, stride))
        .collect())
}

/// Row-parallel variant of [`top_pixels`].
///
/// Each row keeps its own Top-K; the per-row results are merged with one
/// more bounded pass.
#[cfg(feature = "rayon")]
pub fn par_top_pixels<T>(view: ImageView<'_, T>, k: usize) -> HighPixResult<Vec<Pixel<T>>>
where
    T: Score + Send + Sync,
{
    use crate::heap::bounded::check_capacity;
    use crate::select::merge_top_k;
    use rayon::prelude::*;

    check_capacity(k)?;
    let _span = trace_span!(
        "par_top_pixels",
        k = k,
        width = view.width(),
        height = view.height()
    )
    .entered();

    let stride = view.stride();
    let row_results: Vec<Vec<Entry<T>>> = (0..view.height())
        .into_par_iter()
        .map(|y| -> HighPixResult<Vec<Entry<T>>> {
            let row = row_or_err(view, y)?;
            let base = y * stride;
            let mut selector = TopKSelector::new(k)?;
            selector.extend(row.iter().enumerate().map(|(x, &v)| (base + x, v)));
            Ok(selector.into_vec())
        })
        .collect::<HighPixResult<_>>()?;

    Ok(merge_top_k(row_results.into_iter().flatten(), k)?
        .into_iter()
        .map(|entry| Pixel::from_entry(entry, stride))
        .collect())
}

fn row_or_err<'a, T>(view: ImageView<'a, T>, y: usize) -> HighPixResult<&'a [T]> {
    view.row(y).ok_or(HighPixError::BufferTooSmall {
        needed: y * view.stride() + view.width(),
        got: view.as_slice().len(),
    })
}
