//! Bounded min-heap storage for Top-K selection.
//!
//! Entries pair a stream position with a score. The heap keeps the smallest
//! score at the root so a streaming selector can compare incoming values
//! against the weakest retained one in O(1).

pub mod bounded;
pub mod score;

pub use bounded::{BoundedMinHeap, Entry, MAX_CAPACITY};
pub use score::Score;
