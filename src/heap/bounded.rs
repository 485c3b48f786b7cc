//! Fixed-capacity binary min-heap of `(position, value)` entries.
//!
//! Children of slot `p` live at `2p + 1` and `2p + 2`. Both sift directions
//! move a hole through the array and write the travelling entry once at the
//! end, so each level costs one copy instead of a swap.

use crate::heap::Score;
use crate::util::{HighPixError, HighPixResult};

/// Largest capacity accepted by [`BoundedMinHeap::new`].
pub const MAX_CAPACITY: usize = 1 << 24;

/// A scored item retained by the heap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Entry<V, P = usize> {
    /// Offset of the item in its source stream.
    pub position: P,
    /// Score of the item.
    pub value: V,
}

/// Array-backed min-heap that never grows past its construction capacity.
///
/// The root always holds the smallest retained value. Pushing into a full
/// heap fails with [`HighPixError::HeapFull`]; callers decide what to evict.
#[derive(Clone, Debug)]
pub struct BoundedMinHeap<V, P = usize> {
    entries: Vec<Entry<V, P>>,
    capacity: usize,
}

impl<V: Score, P: Copy> BoundedMinHeap<V, P> {
    /// Creates an empty heap holding at most `capacity` entries.
    ///
    /// Storage for all `capacity` entries is reserved up front; pushes never
    /// reallocate.
    pub fn new(capacity: usize) -> HighPixResult<Self> {
        check_capacity(capacity)?;
        let mut entries = Vec::new();
        entries
            .try_reserve_exact(capacity)
            .map_err(|_| HighPixError::AllocationFailure { capacity })?;
        Ok(Self { entries, capacity })
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    /// Returns the smallest retained value.
    pub fn peek_min(&self) -> HighPixResult<V> {
        self.peek().map(|entry| entry.value)
    }

    /// Returns the root entry.
    pub fn peek(&self) -> HighPixResult<Entry<V, P>> {
        self.entries.first().copied().ok_or(HighPixError::EmptyHeap)
    }

    /// Inserts an entry, restoring heap order in O(log len).
    pub fn push(&mut self, position: P, value: V) -> HighPixResult<()> {
        if self.is_full() {
            return Err(HighPixError::HeapFull {
                capacity: self.capacity,
            });
        }

        let entry = Entry { position, value };
        let mut hole = self.entries.len();
        self.entries.push(entry);

        while hole > 0 {
            let parent = (hole - 1) / 2;
            if !self.entries[parent].value.score_gt(&value) {
                break;
            }
            self.entries[hole] = self.entries[parent];
            hole = parent;
        }
        self.entries[hole] = entry;
        Ok(())
    }

    /// Removes and returns the entry with the smallest value.
    pub fn pop_min(&mut self) -> HighPixResult<Entry<V, P>> {
        let last = self.entries.pop().ok_or(HighPixError::EmptyHeap)?;
        if self.entries.is_empty() {
            return Ok(last);
        }

        let top = self.entries[0];
        let mut hole = 0usize;
        while let Some(child) = self.min_child(hole) {
            if !self.entries[child].value.score_lt(&last.value) {
                break;
            }
            self.entries[hole] = self.entries[child];
            hole = child;
        }
        self.entries[hole] = last;
        Ok(top)
    }

    /// Removes every entry, keeping the reserved storage.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries in heap array order.
    ///
    /// The slice lists the complete retained set but is not sorted beyond the
    /// heap property.
    pub fn as_slice(&self) -> &[Entry<V, P>] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry<V, P>> {
        self.entries.iter()
    }

    /// Consumes the heap, returning entries in heap array order.
    pub fn into_vec(self) -> Vec<Entry<V, P>> {
        self.entries
    }

    /// Consumes the heap, returning entries by descending value.
    pub fn into_sorted_desc(mut self) -> Vec<Entry<V, P>> {
        let mut out = Vec::with_capacity(self.entries.len());
        while let Ok(entry) = self.pop_min() {
            out.push(entry);
        }
        out.reverse();
        out
    }

    /// Checks the min-heap property over all live parent/child pairs.
    pub fn is_valid_heap(&self) -> bool {
        (1..self.entries.len()).all(|child| {
            let parent = (child - 1) / 2;
            !self.entries[child]
                .value
                .score_lt(&self.entries[parent].value)
        })
    }

    fn min_child(&self, parent: usize) -> Option<usize> {
        let len = self.entries.len();
        let left = 2 * parent + 1;
        if left >= len {
            return None;
        }
        let right = left + 1;
        if right < len && self.entries[right].value.score_lt(&self.entries[left].value) {
            Some(right)
        } else {
            Some(left)
        }
    }
}

/// Validates a heap capacity without allocating.
pub(crate) fn check_capacity(capacity: usize) -> HighPixResult<()> {
    if capacity == 0 || capacity > MAX_CAPACITY {
        return Err(HighPixError::InvalidCapacity {
            capacity,
            max: MAX_CAPACITY,
        });
    }
    Ok(())
}

impl<'a, V, P> IntoIterator for &'a BoundedMinHeap<V, P> {
    type Item = &'a Entry<V, P>;
    type IntoIter = std::slice::Iter<'a, Entry<V, P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
