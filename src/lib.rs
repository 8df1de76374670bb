//! Binary heap priority queue with caller-supplied ordering
//!
//! This crate provides [`BinaryHeap`], an array-backed priority queue whose
//! order is decided by a pluggable [`Compare`] implementation instead of
//! being hard-wired to the element type.
//!
//! # Features
//!
//! - **Min-first by comparator**: O(log n) `push` and `pop`, O(1) `peek`;
//!   `pop` always returns the element the comparator orders earliest
//! - **Opt-in natural ordering**: [`NaturalOrder`] uses `T: Ord`, smallest
//!   first; [`Reversed`] flips any comparator for max-first queues
//! - **Closure comparators**: any `Fn(&T, &T) -> Ordering` orders a heap,
//!   so elements can be ranked by one field, by a derived key, or backwards
//! - **Bulk construction**: [`BinaryHeap::from_vec`] heapifies an existing
//!   vector in O(n log n) instead of pushing element by element
//!
//! Empty-heap reads are not errors: `peek` and `pop` return `None` and
//! leave the heap untouched. There is no decrease-key or arbitrary-element
//! removal, and a heap is only safe to mutate from one thread at a time.
//!
//! # Example
//!
//! ```rust
//! use heapqueue::BinaryHeap;
//!
//! let mut heap = BinaryHeap::from_vec(vec![42, 3, 25, 14]);
//! heap.push(5);
//!
//! assert_eq!(heap.peek(), Some(&3));
//! assert_eq!(heap.pop(), Some(3));
//! assert_eq!(heap.pop(), Some(5));
//! assert_eq!(heap.pop(), Some(14));
//! assert_eq!(heap.pop(), Some(25));
//! assert_eq!(heap.pop(), Some(42));
//! assert_eq!(heap.pop(), None);
//! ```

pub mod binary;
pub mod compare;

// Re-export the container and the comparator seam for convenience
pub use binary::BinaryHeap;
pub use compare::{Compare, NaturalOrder, ReverseOrder, Reversed};
