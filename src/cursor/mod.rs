//! Composed iterator primitives
//!
//! Stateful cursors that sequence decorators assemble on demand. All of
//! them advance their inner cursors lazily: a `next()` call does exactly
//! the work needed to answer it and no more.
//!
//! Exhaustion is the expected `None` of `Iterator::next`; the [`Strict`]
//! adapter restores hard-failure semantics for callers that treat pulling
//! past the end as a contract violation.

mod cycled;
mod joined;
mod matched;
mod partitioned;
mod ranged;
mod windowed;

pub use cycled::CycledCursor;
pub use joined::JoinedCursor;
pub use matched::MatchedCursor;
pub use partitioned::PartitionedCursor;
pub use ranged::RangedCursor;
pub use windowed::WindowedCursor;

use crate::{Error, Result};

/// Cursor adapter whose forced advancement fails instead of returning
/// `None`.
#[derive(Debug, Clone)]
pub struct Strict<I> {
    inner: I,
}

impl<I: Iterator> Strict<I> {
    /// Wrap a cursor.
    pub fn new(inner: I) -> Self {
        Self { inner }
    }

    /// Advance by one element, failing with [`Error::Exhausted`] at the
    /// end of the run.
    pub fn force_next(&mut self) -> Result<I::Item> {
        self.inner.next().ok_or(Error::Exhausted)
    }
}

impl<I: Iterator> Iterator for Strict<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_cursor_fails_past_the_end() {
        let mut cursor = Strict::new(vec![7].into_iter());
        assert_eq!(cursor.force_next(), Ok(7));
        assert_eq!(cursor.force_next(), Err(Error::Exhausted));
        // Exhaustion is monotonic.
        assert_eq!(cursor.force_next(), Err(Error::Exhausted));
    }
}
