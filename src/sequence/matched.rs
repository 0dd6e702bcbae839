//! Pairing two sequences position-by-position.

use std::fmt;
use std::marker::PhantomData;

use super::Sequence;
use crate::cursor::MatchedCursor;
use crate::Result;

/// Sequence of pairs, stopping at the shorter side.
///
/// This is the documented silent-truncation variant; use [`Matched`] when
/// a length divergence should fail instead.
#[derive(Debug, Clone)]
pub struct Zipped<A: Sequence, B: Sequence> {
    left: A,
    right: B,
    _pair: PhantomData<fn() -> (A::Item, B::Item)>,
}

impl<A: Sequence, B: Sequence> Zipped<A, B> {
    /// Pair `left` and `right`, truncating to the shorter.
    pub fn new(left: A, right: B) -> Self {
        Self {
            left,
            right,
            _pair: PhantomData,
        }
    }
}

impl<A: Sequence, B: Sequence> Sequence for Zipped<A, B> {
    type Item = (A::Item, B::Item);

    fn cursor<'a>(&'a self) -> Box<dyn Iterator<Item = (A::Item, B::Item)> + 'a>
    where
        (A::Item, B::Item): 'a,
    {
        Box::new(self.left.cursor().zip(self.right.cursor()))
    }
}

/// Sequence of pairs validated by a correlation predicate, failing fast.
///
/// Every pulled pair is checked; the first violation, or the first moment
/// one side outlives the other, surfaces mid-traversal as an error
/// element.
pub struct Matched<A: Sequence, B: Sequence, F> {
    left: A,
    right: B,
    check: F,
    _pair: PhantomData<fn() -> (A::Item, B::Item)>,
}

impl<A, B, F> Matched<A, B, F>
where
    A: Sequence,
    B: Sequence,
    F: Fn(&A::Item, &B::Item) -> bool,
{
    /// Pair `left` and `right` under `check`.
    pub fn new(left: A, right: B, check: F) -> Self {
        Self {
            left,
            right,
            check,
            _pair: PhantomData,
        }
    }
}

impl<A, B, F> Sequence for Matched<A, B, F>
where
    A: Sequence,
    B: Sequence,
    F: Fn(&A::Item, &B::Item) -> bool,
{
    type Item = Result<(A::Item, B::Item)>;

    fn cursor<'a>(&'a self) -> Box<dyn Iterator<Item = Result<(A::Item, B::Item)>> + 'a>
    where
        Result<(A::Item, B::Item)>: 'a,
    {
        Box::new(MatchedCursor::new(
            self.left.cursor(),
            self.right.cursor(),
            &self.check,
        ))
    }
}

impl<A, B, F> fmt::Debug for Matched<A, B, F>
where
    A: Sequence + fmt::Debug,
    B: Sequence + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matched")
            .field("left", &self.left)
            .field("right", &self.right)
            .finish_non_exhaustive()
    }
}
