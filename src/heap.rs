//! The half-heap backing each side of a [`MedianTracker`](crate::MedianTracker)
//!
//! Both halves are the same structure; an [`OrderPolicy`] flips the comparison
//! direction so the lower half surfaces its maximum and the upper half its
//! minimum. Keeping a single implementation means the two sides cannot drift
//! apart.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Ordering policy for a [`HalfHeap`]: decides which end of the value range
/// sits at the root
///
/// Policies are zero-sized marker types. The policy maps plain elements to the
/// key type actually stored in the backing [`BinaryHeap`], which is max-first
/// by construction; wrapping keys in [`Reverse`] turns it min-first.
pub(crate) trait OrderPolicy {
    /// Key type stored in the backing heap
    type Key: Ord + Copy + Debug;

    /// Wraps an element into a storable key
    fn wrap(value: i64) -> Self::Key;

    /// Reads the element back out of a key
    fn unwrap(key: Self::Key) -> i64;
}

/// Largest element at the root (used for the lower half)
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct MaxFirst;

impl OrderPolicy for MaxFirst {
    type Key = i64;

    fn wrap(value: i64) -> Self::Key {
        value
    }

    fn unwrap(key: Self::Key) -> i64 {
        key
    }
}

/// Smallest element at the root (used for the upper half)
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct MinFirst;

impl OrderPolicy for MinFirst {
    type Key = Reverse<i64>;

    fn wrap(value: i64) -> Self::Key {
        Reverse(value)
    }

    fn unwrap(key: Self::Key) -> i64 {
        key.0
    }
}

/// One half of the element multiset, with the extremal element at the root
///
/// `peek_root` and `extract_root` require a non-empty heap. The tracker only
/// calls them after checking sizes, so a violation is a bug in the caller and
/// panics rather than producing a wrong median.
#[derive(Debug, Clone, Default)]
pub(crate) struct HalfHeap<P: OrderPolicy> {
    heap: BinaryHeap<P::Key>,
}

impl<P: OrderPolicy> HalfHeap<P> {
    pub(crate) fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }

    /// Adds an element. O(log n), cannot fail.
    pub(crate) fn insert(&mut self, value: i64) {
        self.heap.push(P::wrap(value));
    }

    /// Returns the extremal element without removing it
    ///
    /// Panics if the heap is empty.
    pub(crate) fn peek_root(&self) -> i64 {
        match self.heap.peek() {
            Some(key) => P::unwrap(*key),
            None => panic!("peek_root on an empty half-heap"),
        }
    }

    /// Removes and returns the extremal element. O(log n).
    ///
    /// Panics if the heap is empty.
    pub(crate) fn extract_root(&mut self) -> i64 {
        match self.heap.pop() {
            Some(key) => P::unwrap(key),
            None => panic!("extract_root on an empty half-heap"),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
