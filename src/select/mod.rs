//! Streaming Top-K selection over a bounded min-heap.
//!
//! A single pass keeps the `k` largest values seen so far. Each item costs
//! one comparison against the heap root, plus at most one pop and one push of
//! O(log k) each, so a stream of `n` items is processed in O(n log k) time
//! with O(k) memory regardless of `n`.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::heap::{BoundedMinHeap, Entry, Score};
use crate::trace::{trace_event, trace_span};
use crate::util::{HighPixError, HighPixResult};

#[cfg(feature = "rayon")]
pub mod parallel;

/// Single-pass selector retaining the `k` largest-valued items.
///
/// Among equal values, which items survive depends on arrival order and heap
/// layout; only the multiset of retained values is guaranteed.
#[derive(Clone, Debug)]
pub struct TopKSelector<V, P = usize> {
    heap: BoundedMinHeap<V, P>,
    seen: usize,
    evicted: usize,
}

impl<V: Score, P: Copy> TopKSelector<V, P> {
    /// Creates a selector for the `k` largest items.
    pub fn new(k: usize) -> HighPixResult<Self> {
        Ok(Self {
            heap: BoundedMinHeap::new(k)?,
            seen: 0,
            evicted: 0,
        })
    }

    /// Offers one item, returning `true` if it was admitted.
    ///
    /// A full heap evicts its minimum only for a strictly larger value, so an
    /// item equal to the current minimum is discarded.
    pub fn offer(&mut self, position: P, value: V) -> bool {
        self.seen += 1;
        if self.heap.is_full() {
            let min = self
                .heap
                .peek_min()
                .expect("full heap has a minimum");
            if !value.score_gt(&min) {
                return false;
            }
            self.heap.pop_min().expect("full heap has a minimum");
            self.evicted += 1;
        }
        self.heap
            .push(position, value)
            .expect("heap has room after eviction check");
        true
    }

    /// Offers every `(position, value)` pair in order.
    pub fn extend<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = (P, V)>,
    {
        for (position, value) in items {
            self.offer(position, value);
        }
    }

    /// Offers items in order, polling `cancel` before each one.
    ///
    /// On cancellation the items offered so far stay retained and
    /// [`HighPixError::Cancelled`] reports how many were consumed in total.
    pub fn extend_cancellable<I>(&mut self, items: I, cancel: &AtomicBool) -> HighPixResult<()>
    where
        I: IntoIterator<Item = (P, V)>,
    {
        for (position, value) in items {
            if cancel.load(Ordering::Relaxed) {
                trace_event!(INFO, "selection cancelled", seen = self.seen);
                return Err(HighPixError::Cancelled { seen: self.seen });
            }
            self.offer(position, value);
        }
        Ok(())
    }

    /// Target number of retained items.
    pub fn k(&self) -> usize {
        self.heap.capacity()
    }

    /// Number of items currently retained.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of items offered so far.
    pub fn seen(&self) -> usize {
        self.seen
    }

    /// Number of retained items displaced by larger ones.
    pub fn evicted(&self) -> usize {
        self.evicted
    }

    /// Borrows the underlying heap.
    pub fn heap(&self) -> &BoundedMinHeap<V, P> {
        &self.heap
    }

    pub fn into_heap(self) -> BoundedMinHeap<V, P> {
        self.heap
    }

    /// Retained entries in heap array order.
    pub fn into_vec(self) -> Vec<Entry<V, P>> {
        self.heap.into_vec()
    }

    /// Retained entries by descending value.
    pub fn into_sorted_desc(self) -> Vec<Entry<V, P>> {
        self.heap.into_sorted_desc()
    }
}

/// Selects the `k` largest values, tagging each with its index in `values`.
///
/// Returns `min(k, n)` entries in heap array order. Fails only if `k` is not
/// a valid heap capacity, in which case no value is consumed.
pub fn select_top_k<V, I>(values: I, k: usize) -> HighPixResult<Vec<Entry<V>>>
where
    V: Score,
    I: IntoIterator<Item = V>,
{
    let _span = trace_span!("select_top_k", k = k).entered();
    let mut selector = TopKSelector::new(k)?;
    selector.extend(values.into_iter().enumerate());
    trace_event!(
        DEBUG,
        "selection finished",
        seen = selector.seen(),
        evicted = selector.evicted(),
    );
    Ok(selector.into_vec())
}

/// Like [`select_top_k`], but polls `cancel` before each item.
///
/// Returns [`HighPixError::Cancelled`] with the number of items consumed once
/// the flag is observed set.
pub fn select_top_k_cancellable<V, I>(
    values: I,
    k: usize,
    cancel: &AtomicBool,
) -> HighPixResult<Vec<Entry<V>>>
where
    V: Score,
    I: IntoIterator<Item = V>,
{
    let _span = trace_span!("select_top_k_cancellable", k = k).entered();
    let mut selector = TopKSelector::new(k)?;
    selector.extend_cancellable(values.into_iter().enumerate(), cancel)?;
    Ok(selector.into_vec())
}

/// Reduces partial Top-K results to the overall `k` largest entries.
///
/// Positions are kept as given, so partials must already carry offsets in a
/// shared coordinate space.
pub fn merge_top_k<V, P, I>(partials: I, k: usize) -> HighPixResult<Vec<Entry<V, P>>>
where
    V: Score,
    P: Copy,
    I: IntoIterator<Item = Entry<V, P>>,
{
    let mut selector = TopKSelector::new(k)?;
    selector.extend(
        partials
            .into_iter()
            .map(|entry| (entry.position, entry.value)),
    );
    Ok(selector.into_vec())
}
