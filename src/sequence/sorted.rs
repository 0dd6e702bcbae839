//! Per-traversal reordering.

use std::cmp::Ordering;
use std::fmt;

use super::Sequence;

/// Sequence re-sorted by natural order on every traversal.
///
/// Sorting drains the origin into a buffer each time a cursor is
/// requested; nothing is cached. Wrap in [`Sticky`](crate::Sticky) to
/// sort once.
#[derive(Debug, Clone)]
pub struct Sorted<S> {
    origin: S,
}

impl<S> Sorted<S>
where
    S: Sequence,
    S::Item: Ord,
{
    /// Sort `origin` by natural order.
    pub fn new(origin: S) -> Self {
        Self { origin }
    }
}

impl<S> Sequence for Sorted<S>
where
    S: Sequence,
    S::Item: Ord,
{
    type Item = S::Item;

    fn cursor<'a>(&'a self) -> Box<dyn Iterator<Item = S::Item> + 'a>
    where
        S::Item: 'a,
    {
        let mut buffer: Vec<S::Item> = self.origin.cursor().collect();
        buffer.sort();
        Box::new(buffer.into_iter())
    }
}

/// Sequence re-sorted by an explicit comparator on every traversal.
pub struct SortedBy<S, F> {
    origin: S,
    compare: F,
}

impl<S, F> SortedBy<S, F>
where
    S: Sequence,
    F: Fn(&S::Item, &S::Item) -> Ordering,
{
    /// Sort `origin` by `compare`.
    pub fn new(origin: S, compare: F) -> Self {
        Self { origin, compare }
    }
}

impl<S, F> Sequence for SortedBy<S, F>
where
    S: Sequence,
    F: Fn(&S::Item, &S::Item) -> Ordering,
{
    type Item = S::Item;

    fn cursor<'a>(&'a self) -> Box<dyn Iterator<Item = S::Item> + 'a>
    where
        S::Item: 'a,
    {
        let mut buffer: Vec<S::Item> = self.origin.cursor().collect();
        buffer.sort_by(&self.compare);
        Box::new(buffer.into_iter())
    }
}

impl<S: fmt::Debug, F> fmt::Debug for SortedBy<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortedBy")
            .field("origin", &self.origin)
            .finish_non_exhaustive()
    }
}

/// Sequence traversed back-to-front, re-derived every time.
#[derive(Debug, Clone)]
pub struct Reversed<S> {
    origin: S,
}

impl<S: Sequence> Reversed<S> {
    /// Reverse `origin`.
    pub fn new(origin: S) -> Self {
        Self { origin }
    }
}

impl<S: Sequence> Sequence for Reversed<S> {
    type Item = S::Item;

    fn cursor<'a>(&'a self) -> Box<dyn Iterator<Item = S::Item> + 'a>
    where
        S::Item: 'a,
    {
        let mut buffer: Vec<S::Item> = self.origin.cursor().collect();
        buffer.reverse();
        Box::new(buffer.into_iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::{SequenceExt, SequenceOf};

    #[test]
    fn natural_order_sorting() {
        let seq = SequenceOf::from(vec![3, 1, 2]).sorted();
        assert_eq!(seq.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn comparator_sorting() {
        let seq = SortedBy::new(SequenceOf::from(vec!["bb", "a", "ccc"]), |a, b| {
            a.len().cmp(&b.len())
        });
        assert_eq!(seq.to_vec(), vec!["a", "bb", "ccc"]);
    }

    #[test]
    fn reversal_is_rederived_per_traversal() {
        let seq = SequenceOf::from(vec![1, 2, 3]).reversed();
        assert_eq!(seq.to_vec(), vec![3, 2, 1]);
        assert_eq!(seq.to_vec(), vec![3, 2, 1]);
    }
}
