#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

mod heap;

use heap::{HalfHeap, MaxFirst, MinFirst};
use thiserror::Error;

/// Error returned when the median of an empty tracker is requested
///
/// There is no default or sentinel median; asking before inserting anything
/// is a usage error, surfaced as a typed result rather than masked by a
/// made-up value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("median of an empty tracker")]
pub struct EmptyState;

/// Running median of a stream of integers
///
/// The [`Self::new`] constructor creates an empty tracker. Elements are fed
/// in one at a time with [`Self::insert`], and the current median can be
/// fetched at any point with [`Self::median`]. Insertion costs O(log n);
/// the median read is O(1).
///
/// Internally the tracker keeps every element seen so far, partitioned into
/// two heaps: a max-heap holding the smaller half of the stream and a
/// min-heap holding the larger half. After every insertion the halves are
/// rebalanced so that the lower half is never smaller than the upper half
/// and never more than one element larger. The median is then always the
/// root of the lower half.
///
/// For a stream of k elements, the median is the value at 0-based index
/// `(k - 1) / 2` of the sorted stream: the exact middle for odd k, the lower
/// of the two middle elements for even k. No averaging is performed, so the
/// median is always a value that actually occurred in the stream.
///
/// The tracker does no internal locking. Sharing one across threads requires
/// external synchronization by the caller.
#[derive(Debug, Clone, Default)]
pub struct MedianTracker {
    /// Smaller half of the stream; the root is the current median
    lower: HalfHeap<MaxFirst>,
    /// Larger half of the stream; the root is the smallest element above the
    /// median
    upper: HalfHeap<MinFirst>,
}

impl MedianTracker {
    /// Constructs an empty tracker
    pub fn new() -> Self {
        Self {
            lower: HalfHeap::new(),
            upper: HalfHeap::new(),
        }
    }

    /// Total number of elements inserted so far
    pub fn len(&self) -> usize {
        self.lower.len() + self.upper.len()
    }

    /// Whether any elements have been inserted yet
    pub fn is_empty(&self) -> bool {
        // The lower half takes the bootstrap element, so it is empty exactly
        // when the whole tracker is.
        self.lower.is_empty()
    }

    /// Inserts an element from the stream, updating the running median
    ///
    /// Cannot fail, and handles the full `i64` range: elements are only ever
    /// compared, never combined arithmetically.
    pub fn insert(&mut self, value: i64) {
        if self.lower.is_empty() {
            self.lower.insert(value);
            return;
        }

        // Route by comparison against the current median candidate.
        if value > self.lower.peek_root() {
            self.upper.insert(value);
        } else {
            self.lower.insert(value);
        }

        // A single insertion drifts the size invariant by at most one step,
        // so at most one transfer restores it.
        if self.lower.len() == self.upper.len() + 2 {
            let moved = self.lower.extract_root();
            self.upper.insert(moved);

            #[cfg(feature = "log")]
            log::trace!("rebalanced: moved {moved} from lower to upper half");
        } else if self.upper.len() == self.lower.len() + 1 {
            let moved = self.upper.extract_root();
            self.lower.insert(moved);

            #[cfg(feature = "log")]
            log::trace!("rebalanced: moved {moved} from upper to lower half");
        }
    }

    /// Current median of all elements inserted so far
    ///
    /// Returns [`EmptyState`] if nothing has been inserted yet. This is a
    /// pure read: repeated calls without an intervening [`Self::insert`]
    /// return the same value.
    pub fn median(&self) -> Result<i64, EmptyState> {
        if self.lower.is_empty() {
            return Err(EmptyState);
        }

        // With balanced halves, the median is always the lower half's root.
        Ok(self.lower.peek_root())
    }

    /// Inserts an element and returns the updated median
    ///
    /// A convenience concatenation of [`Self::insert`] followed by
    /// [`Self::median`]; since the insertion itself cannot fail and leaves
    /// the tracker non-empty, the result is always `Ok` in practice.
    pub fn update(&mut self, value: i64) -> Result<i64, EmptyState> {
        self.insert(value);
        self.median()
    }
}
