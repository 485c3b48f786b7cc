//! Ordering for heap values.

use std::cmp::Ordering;

/// Totally ordered score stored in a [`BoundedMinHeap`](super::BoundedMinHeap).
///
/// Floats use IEEE 754 total ordering: positive NaN sorts above infinity and
/// negative NaN below negative infinity.
pub trait Score: Copy {
    /// Compares two scores.
    fn score_cmp(&self, other: &Self) -> Ordering;

    /// Returns `true` if `self` is strictly greater than `other`.
    #[inline]
    fn score_gt(&self, other: &Self) -> bool {
        self.score_cmp(other) == Ordering::Greater
    }

    /// Returns `true` if `self` is strictly less than `other`.
    #[inline]
    fn score_lt(&self, other: &Self) -> bool {
        self.score_cmp(other) == Ordering::Less
    }
}

macro_rules! impl_score_ord {
    ($($t:ty),* $(,)?) => {
        $(
            impl Score for $t {
                #[inline]
                fn score_cmp(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }
            }
        )*
    };
}

impl_score_ord!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl Score for f32 {
    #[inline]
    fn score_cmp(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

impl Score for f64 {
    #[inline]
    fn score_cmp(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}
