//! Dropping a prefix.

use super::Sequence;

/// Sequence without the first `count` elements of its origin.
///
/// A count of zero is a no-op; a count at or beyond the origin's length
/// yields an empty sequence. Counts are unsigned, so the negative-count
/// question never arises.
#[derive(Debug, Clone)]
pub struct Skipped<S> {
    origin: S,
    count: usize,
}

impl<S: Sequence> Skipped<S> {
    /// Skip the first `count` elements of `origin`.
    pub fn new(origin: S, count: usize) -> Self {
        Self { origin, count }
    }
}

impl<S: Sequence> Sequence for Skipped<S> {
    type Item = S::Item;

    fn cursor<'a>(&'a self) -> Box<dyn Iterator<Item = S::Item> + 'a>
    where
        S::Item: 'a,
    {
        Box::new(self.origin.cursor().skip(self.count))
    }
}
