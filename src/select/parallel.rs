//! Rayon-parallel Top-K selection (feature-gated).
//!
//! The input is split into contiguous chunks, each chunk runs its own
//! [`TopKSelector`], and the per-chunk results (at most `k` each) are merged
//! with one more bounded pass. No heap is shared between threads.

use crate::heap::bounded::check_capacity;
use crate::heap::{Entry, Score};
use crate::select::{merge_top_k, TopKSelector};
use crate::trace::{trace_event, trace_span};
use crate::util::HighPixResult;
use rayon::prelude::*;

/// Chunk length used by [`par_select_top_k`] callers without a preference.
pub const DEFAULT_CHUNK_LEN: usize = 1 << 16;

/// Selects the `k` largest values of `values` across rayon workers.
///
/// Positions are indices into `values`. `chunk_len` is clamped to at least 1.
/// The retained value multiset equals that of [`select_top_k`](super::select_top_k).
pub fn par_select_top_k<V>(
    values: &[V],
    k: usize,
    chunk_len: usize,
) -> HighPixResult<Vec<Entry<V>>>
where
    V: Score + Send + Sync,
{
    check_capacity(k)?;
    let chunk_len = chunk_len.max(1);
    let _span = trace_span!("par_select_top_k", k = k, chunk_len = chunk_len).entered();

    let partials: Vec<Vec<Entry<V>>> = values
        .par_chunks(chunk_len)
        .enumerate()
        .map(|(chunk_idx, chunk)| -> HighPixResult<Vec<Entry<V>>> {
            let offset = chunk_idx * chunk_len;
            let mut selector = TopKSelector::new(k)?;
            selector.extend(chunk.iter().enumerate().map(|(i, &v)| (offset + i, v)));
            Ok(selector.into_vec())
        })
        .collect::<HighPixResult<_>>()?;

    trace_event!(DEBUG, "partitions selected", partitions = partials.len());
    merge_top_k(partials.into_iter().flatten(), k)
}
