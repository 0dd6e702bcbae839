//! End-to-end concatenation.

use super::Sequence;
use crate::cursor::JoinedCursor;

/// Sequence concatenating any number of same-typed sources, in order.
///
/// Inner cursors are built lazily, one source at a time, so an expensive
/// later source pays nothing until traversal actually reaches it.
#[derive(Debug, Clone)]
pub struct Joined<S> {
    sources: Vec<S>,
}

impl<S: Sequence> Joined<S> {
    /// Concatenate `sources` in the given order.
    pub fn new(sources: Vec<S>) -> Self {
        Self { sources }
    }

    /// Concatenate exactly two sources.
    pub fn pair(first: S, second: S) -> Self {
        Self::new(vec![first, second])
    }
}

impl<S: Sequence> Sequence for Joined<S> {
    type Item = S::Item;

    fn cursor<'a>(&'a self) -> Box<dyn Iterator<Item = S::Item> + 'a>
    where
        S::Item: 'a,
    {
        Box::new(JoinedCursor::new(
            self.sources.iter().map(|source| source.cursor()),
        ))
    }
}

/// Sequence concatenating two sources of possibly different types.
///
/// The second source's cursor is built only once the first is exhausted,
/// so a supplier-backed tail pays nothing until traversal reaches it.
#[derive(Debug, Clone)]
pub struct Chained<A, B> {
    first: A,
    second: B,
}

impl<A, B> Chained<A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
{
    /// Concatenate `first` then `second`.
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A, B> Sequence for Chained<A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
{
    type Item = A::Item;

    fn cursor<'a>(&'a self) -> Box<dyn Iterator<Item = A::Item> + 'a>
    where
        A::Item: 'a,
    {
        let second = &self.second;
        let mut tail: Option<Box<dyn Iterator<Item = A::Item> + 'a>> = None;
        Box::new(self.first.cursor().chain(std::iter::from_fn(move || {
            tail.get_or_insert_with(|| second.cursor()).next()
        })))
    }
}
