//! Position-by-position pairing of two cursors with a correlation check.

use std::fmt;

use crate::{Error, Result};

/// Cursor zipping two sources under a correlation predicate, failing fast.
///
/// The first pair failing the predicate surfaces as
/// [`Error::Mismatch`]; the moment one side is exhausted while the other
/// still has elements, [`Error::SizeMismatch`] surfaces. Either error
/// fuses the cursor: it yields nothing further.
pub struct MatchedCursor<A, B, F> {
    left: A,
    right: B,
    check: F,
    position: usize,
    done: bool,
}

impl<A, B, F> MatchedCursor<A, B, F>
where
    A: Iterator,
    B: Iterator,
    F: Fn(&A::Item, &B::Item) -> bool,
{
    /// Pair `left` and `right` under the given correlation predicate.
    pub fn new(left: A, right: B, check: F) -> Self {
        Self {
            left,
            right,
            check,
            position: 0,
            done: false,
        }
    }
}

impl<A, B, F> Iterator for MatchedCursor<A, B, F>
where
    A: Iterator,
    B: Iterator,
    F: Fn(&A::Item, &B::Item) -> bool,
{
    type Item = Result<(A::Item, B::Item)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match (self.left.next(), self.right.next()) {
            (None, None) => {
                self.done = true;
                None
            }
            (Some(a), Some(b)) => {
                if (self.check)(&a, &b) {
                    self.position += 1;
                    Some(Ok((a, b)))
                } else {
                    self.done = true;
                    Some(Err(Error::Mismatch {
                        position: self.position,
                    }))
                }
            }
            _ => {
                self.done = true;
                Some(Err(Error::SizeMismatch {
                    position: self.position,
                }))
            }
        }
    }
}

impl<A, B, F> fmt::Debug for MatchedCursor<A, B, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatchedCursor")
            .field("position", &self.position)
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correlated_pairs_stream_through() {
        let pairs: Vec<_> =
            MatchedCursor::new([1, 2, 3].into_iter(), [10, 20, 30].into_iter(), |a, b| {
                b / a == 10
            })
            .collect();
        assert_eq!(pairs, vec![Ok((1, 10)), Ok((2, 20)), Ok((3, 30))]);
    }

    #[test]
    fn mismatch_surfaces_at_the_offending_position() {
        let mut cursor =
            MatchedCursor::new([1, 2].into_iter(), [10, 99].into_iter(), |a, b| b / a == 10);
        assert_eq!(cursor.next(), Some(Ok((1, 10))));
        assert_eq!(cursor.next(), Some(Err(Error::Mismatch { position: 1 })));
        assert_eq!(cursor.next(), None);
    }

    #[test]
    fn length_divergence_fails_as_soon_as_detected() {
        let mut cursor = MatchedCursor::new([1, 2, 3].into_iter(), [1].into_iter(), |_, _| true);
        assert_eq!(cursor.next(), Some(Ok((1, 1))));
        assert_eq!(cursor.next(), Some(Err(Error::SizeMismatch { position: 1 })));
        assert_eq!(cursor.next(), None);
    }
}
