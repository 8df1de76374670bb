//! Comparator abstraction for heap ordering
//!
//! A [`BinaryHeap`](crate::BinaryHeap) is ordered by a value implementing
//! [`Compare`]: `compare(a, b) == Ordering::Less` means `a` belongs nearer
//! the root, so the heap pops the comparator-least element first.
//!
//! Three kinds of comparators are supported:
//!
//! - [`NaturalOrder`]: the element type's own [`Ord`] instance, ascending.
//!   This is the explicit, opt-in replacement for a hidden "default"
//!   ordering; it only exists where `T: Ord`, so it cannot be misapplied
//!   to types without a total order.
//! - [`Reversed`]: an adapter that flips another comparator, turning a
//!   min-first queue into a max-first queue (see [`ReverseOrder`]).
//! - Closures: any `Fn(&T, &T) -> Ordering` is a comparator, for orderings
//!   that are not the element type's own (by one field, descending, etc.).
//!
//! # Example
//!
//! ```rust
//! use std::cmp::Ordering;
//! use heapqueue::{Compare, NaturalOrder, Reversed};
//!
//! assert_eq!(NaturalOrder.compare(&1, &2), Ordering::Less);
//! assert_eq!(Reversed(NaturalOrder).compare(&1, &2), Ordering::Greater);
//!
//! let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
//! assert_eq!(by_len.compare(&"ab", &"c"), Ordering::Greater);
//! ```

use std::cmp::Ordering;

/// A total preorder over values of type `T`.
///
/// `compare(a, b)` returning [`Ordering::Less`] means `a` has higher
/// priority (is popped earlier) than `b`. [`Ordering::Equal`] marks the
/// two as ties; the heap pops tied elements in an unspecified relative
/// order, with no stability or FIFO guarantee.
///
/// # Contract
///
/// Implementations must be consistent: the same two values always compare
/// the same way, and the order is transitive. An inconsistent comparator
/// does not cause memory unsafety or panics, but the pop order of a heap
/// using it is meaningless.
pub trait Compare<T> {
    /// Compares two values, `Less` meaning the first is popped earlier.
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Checks whether `a` orders strictly before `b`.
    fn compares_lt(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Less
    }

    /// Checks whether `a` orders before `b` or ties with it.
    fn compares_le(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) != Ordering::Greater
    }

    /// Checks whether `a` orders strictly after `b`.
    fn compares_gt(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Greater
    }

    /// Checks whether `a` orders after `b` or ties with it.
    fn compares_ge(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) != Ordering::Less
    }
}

/// Any `Fn(&T, &T) -> Ordering` closure or function is a comparator.
impl<T, F> Compare<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// The element type's own ordering, smallest first.
///
/// With this comparator a [`BinaryHeap`](crate::BinaryHeap) of integers
/// pops in ascending numeric order, a heap of strings in ascending
/// lexicographic order, and so on. It is only a comparator for `T: Ord`;
/// there is no fallback for types without a total order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord> Compare<T> for NaturalOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Flips the order produced by another comparator.
///
/// `Reversed(inner)` compares with the arguments swapped, so the element
/// `inner` would pop last is popped first. Wrapping twice restores the
/// original order.
///
/// # Example
///
/// ```rust
/// use heapqueue::{BinaryHeap, NaturalOrder, Reversed};
///
/// let mut heap = BinaryHeap::with_comparator(Reversed(NaturalOrder));
/// heap.push(1);
/// heap.push(3);
/// heap.push(2);
///
/// assert_eq!(heap.pop(), Some(3));
/// assert_eq!(heap.pop(), Some(2));
/// assert_eq!(heap.pop(), Some(1));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reversed<C>(pub C);

impl<T, C: Compare<T>> Compare<T> for Reversed<C> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

/// Largest-first ordering for `T: Ord`, the mirror of [`NaturalOrder`].
pub type ReverseOrder = Reversed<NaturalOrder>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_natural_order() {
        assert_eq!(NaturalOrder.compare(&1, &2), Ordering::Less);
        assert_eq!(NaturalOrder.compare(&2, &2), Ordering::Equal);
        assert_eq!(NaturalOrder.compare(&3, &2), Ordering::Greater);

        assert!(NaturalOrder.compares_lt(&1, &2));
        assert!(NaturalOrder.compares_le(&2, &2));
        assert!(NaturalOrder.compares_gt(&3, &2));
        assert!(NaturalOrder.compares_ge(&2, &2));
        assert!(!NaturalOrder.compares_lt(&2, &2));
    }

    #[test]
    fn test_reversed_flips_order() {
        let rev = Reversed(NaturalOrder);
        assert_eq!(rev.compare(&1, &2), Ordering::Greater);
        assert_eq!(rev.compare(&2, &1), Ordering::Less);
        assert_eq!(rev.compare(&2, &2), Ordering::Equal);
    }

    #[test]
    fn test_double_reversal_restores_order() {
        let twice = Reversed(Reversed(NaturalOrder));
        assert_eq!(twice.compare(&1, &2), NaturalOrder.compare(&1, &2));
        assert_eq!(twice.compare(&2, &1), NaturalOrder.compare(&2, &1));
    }

    #[test]
    fn test_closure_comparator() {
        let by_abs = |a: &i32, b: &i32| a.abs().cmp(&b.abs());
        assert_eq!(by_abs.compare(&-5, &3), Ordering::Greater);
        assert_eq!(by_abs.compare(&-3, &3), Ordering::Equal);
        assert!(by_abs.compares_lt(&2, &-4));
    }

    #[test]
    fn test_natural_order_on_strings() {
        let a = String::from("apple");
        let b = String::from("banana");
        assert_eq!(NaturalOrder.compare(&a, &b), Ordering::Less);
    }
}
