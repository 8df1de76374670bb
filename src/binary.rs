//! Binary heap priority queue
//!
//! An array-backed binary min-heap ordered by a caller-supplied
//! [`Compare`] implementation. The elements live in a single `Vec<T>`
//! laid out as a complete binary tree, and every operation restores the
//! heap property before returning, so [`BinaryHeap::pop`] always yields
//! the comparator-least element currently stored.
//!
//! # Time Complexity
//!
//! | Operation         | Complexity            |
//! |-------------------|-----------------------|
//! | `push`            | O(log n)              |
//! | `pop`             | O(log n)              |
//! | `peek`            | O(1)                  |
//! | `len`             | O(1)                  |
//! | `from_vec`        | O(n log n) worst case |
//! | `merge`           | O(m log (n + m))      |
//! | `into_sorted_vec` | O(n log n)            |
//!
//! # Example
//!
//! ```rust
//! use heapqueue::BinaryHeap;
//!
//! let mut heap = BinaryHeap::new();
//! heap.push(5);
//! heap.push(1);
//! heap.push(2);
//!
//! assert_eq!(heap.peek(), Some(&1));
//! assert_eq!(heap.pop(), Some(1));
//! assert_eq!(heap.pop(), Some(2));
//! assert_eq!(heap.pop(), Some(5));
//! assert_eq!(heap.pop(), None);
//! ```

use std::fmt;
use std::slice;
use std::vec;

use crate::compare::{Compare, NaturalOrder};

/// A priority queue implemented with a binary heap.
///
/// The queue is min-first with respect to its comparator: `pop` returns
/// the element the comparator orders earliest. With the default
/// [`NaturalOrder`] comparator that is the smallest element per [`Ord`];
/// wrap the comparator in [`Reversed`](crate::Reversed) or supply a
/// closure for any other order.
///
/// Elements tied under the comparator pop in an unspecified relative
/// order. Insertion order is not preserved among ties.
///
/// # Storage layout
///
/// The backing `Vec<T>` holds a complete binary tree: the parent of
/// index `i` is `(i - 1) / 2` and its children are `2i + 1` and
/// `2i + 2`. After every public mutating operation, each element
/// compares less than or equal to both of its children. The storage is
/// exclusively owned; no operation hands out a mutable view of it.
///
/// # Example
///
/// ```rust
/// use heapqueue::BinaryHeap;
///
/// let mut heap = BinaryHeap::from_vec(vec![42, 3, 25, 14]);
///
/// assert_eq!(heap.pop(), Some(3));
/// assert_eq!(heap.pop(), Some(14));
/// assert_eq!(heap.pop(), Some(25));
/// assert_eq!(heap.pop(), Some(42));
/// ```
#[derive(Clone)]
pub struct BinaryHeap<T, C = NaturalOrder> {
    /// Storage in complete-binary-tree order; index 0 is the root.
    data: Vec<T>,
    /// Ordering rule, fixed at construction.
    cmp: C,
}

impl<T: Ord> BinaryHeap<T> {
    /// Creates an empty heap ordered by `T`'s own [`Ord`] instance.
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            cmp: NaturalOrder,
        }
    }

    /// Creates an empty naturally ordered heap with space for at least
    /// `capacity` elements before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            cmp: NaturalOrder,
        }
    }

    /// Builds a heap out of an existing vector, smallest element first.
    ///
    /// Equivalent to [`from_vec_with`](Self::from_vec_with) with
    /// [`NaturalOrder`].
    pub fn from_vec(vec: Vec<T>) -> Self {
        Self::from_vec_with(vec, NaturalOrder)
    }
}

impl<T, C: Compare<T>> BinaryHeap<T, C> {
    /// Creates an empty heap ordered by `cmp`.
    ///
    /// Any `Fn(&T, &T) -> Ordering` closure works as a comparator:
    ///
    /// ```rust
    /// use heapqueue::BinaryHeap;
    ///
    /// let mut heap = BinaryHeap::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    /// heap.push(1);
    /// heap.push(2);
    /// heap.push(3);
    ///
    /// assert_eq!(heap.pop(), Some(3));
    /// assert_eq!(heap.pop(), Some(2));
    /// assert_eq!(heap.pop(), Some(1));
    /// ```
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            data: Vec::new(),
            cmp,
        }
    }

    /// Builds a heap out of an existing vector and a comparator.
    ///
    /// Takes ownership of `vec` and establishes the heap property in
    /// place by sifting up every element after the root in index order.
    /// O(n log n) worst case.
    ///
    /// ```rust
    /// use heapqueue::BinaryHeap;
    ///
    /// let mut heap = BinaryHeap::from_vec_with(
    ///     vec![("job a", 3), ("job b", 1)],
    ///     |a: &(&str, i32), b: &(&str, i32)| a.1.cmp(&b.1),
    /// );
    ///
    /// assert_eq!(heap.pop(), Some(("job b", 1)));
    /// assert_eq!(heap.pop(), Some(("job a", 3)));
    /// ```
    pub fn from_vec_with(vec: Vec<T>, cmp: C) -> Self {
        let mut heap = Self { data: vec, cmp };
        heap.heapify();
        heap
    }

    /// Inserts an element into the heap.
    ///
    /// The element is appended to the storage and sifted toward the root
    /// until its parent no longer orders after it. Growth is unbounded,
    /// so there are no error conditions.
    ///
    /// # Time Complexity
    /// O(log n), plus the cost of growing the storage when it is full.
    pub fn push(&mut self, value: T) {
        self.data.push(value);
        self.sift_up(self.data.len() - 1);
    }

    /// Removes and returns the comparator-least element, or `None` if
    /// the heap is empty.
    ///
    /// An empty heap is left untouched, so calling `pop` repeatedly on
    /// one keeps returning `None`.
    ///
    /// # Time Complexity
    /// O(log n).
    pub fn pop(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }

        let last = self.data.len() - 1;
        self.data.swap(0, last);
        let item = self.data.pop();

        if !self.data.is_empty() {
            self.sift_down(0);
        }

        item
    }

    /// Moves every element of `other` into `self`, consuming `other`.
    ///
    /// Both heaps must use the same comparator type; the receiver's
    /// comparator instance decides the merged order.
    ///
    /// # Time Complexity
    /// O(m log (n + m)) where `m` is `other.len()`.
    ///
    /// ```rust
    /// use heapqueue::BinaryHeap;
    ///
    /// let mut heap = BinaryHeap::from_vec(vec![3, 1]);
    /// heap.merge(BinaryHeap::from_vec(vec![4, 2]));
    ///
    /// assert_eq!(heap.into_sorted_vec(), vec![1, 2, 3, 4]);
    /// ```
    pub fn merge(&mut self, other: Self) {
        for value in other.data {
            self.push(value);
        }
    }

    /// Consumes the heap and returns its elements in comparator order,
    /// least first.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Some(value) = self.pop() {
            sorted.push(value);
        }
        sorted
    }

    /// Move the element at `pos` toward the root until its parent no
    /// longer orders after it.
    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if self.cmp.compares_lt(&self.data[pos], &self.data[parent]) {
                self.data.swap(pos, parent);
                pos = parent;
            } else {
                break;
            }
        }
    }

    /// Move the element at `pos` toward the leaves until it orders no
    /// later than both of its children.
    fn sift_down(&mut self, mut pos: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * pos + 1;
            let right = left + 1;
            let mut smallest = pos;

            if left < len && self.cmp.compares_lt(&self.data[left], &self.data[smallest]) {
                smallest = left;
            }
            if right < len && self.cmp.compares_lt(&self.data[right], &self.data[smallest]) {
                smallest = right;
            }

            if smallest != pos {
                self.data.swap(pos, smallest);
                pos = smallest;
            } else {
                break;
            }
        }
    }

    /// Establish the heap property over arbitrary storage contents.
    fn heapify(&mut self) {
        for pos in 1..self.data.len() {
            self.sift_up(pos);
        }
    }
}

impl<T, C> BinaryHeap<T, C> {
    /// Returns the number of elements in the heap.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the heap holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the comparator-least element without removing it, or
    /// `None` if the heap is empty.
    ///
    /// When the heap is non-empty and not mutated in between, `peek`
    /// returns the same element the next `pop` will.
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Returns the number of elements the heap can hold without
    /// reallocating.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Reserves capacity for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Drops all elements, keeping the comparator and the allocation.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Visits the elements in arbitrary order.
    ///
    /// The iteration follows the underlying storage, not the pop order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consumes the heap and surrenders the backing vector, elements in
    /// arbitrary order.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: Ord> Default for BinaryHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, C> fmt::Debug for BinaryHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T: Ord> FromIterator<T> for BinaryHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T, C: Compare<T>> Extend<T> for BinaryHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T, C> IntoIterator for BinaryHeap<T, C> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    /// Consumes the heap, yielding its elements in arbitrary order.
    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T, C> IntoIterator for &'a BinaryHeap<T, C> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
