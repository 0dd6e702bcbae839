//! Truncating to a prefix.

use super::Sequence;

/// Sequence of at most the first `count` elements of its origin.
///
/// A count of zero yields an empty sequence; a count at or beyond the
/// origin's length leaves it unchanged. The origin is never advanced past
/// the limit.
#[derive(Debug, Clone)]
pub struct Limited<S> {
    origin: S,
    count: usize,
}

impl<S: Sequence> Limited<S> {
    /// Keep at most the first `count` elements of `origin`.
    pub fn new(origin: S, count: usize) -> Self {
        Self { origin, count }
    }
}

impl<S: Sequence> Sequence for Limited<S> {
    type Item = S::Item;

    fn cursor<'a>(&'a self) -> Box<dyn Iterator<Item = S::Item> + 'a>
    where
        S::Item: 'a,
    {
        Box::new(self.origin.cursor().take(self.count))
    }
}
