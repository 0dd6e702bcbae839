//! Bounded value ranges as sequences.

use std::fmt;

use super::Sequence;
use crate::cursor::RangedCursor;

/// Sequence counting from a start value to an exclusive end through a
/// successor function, re-derived on every traversal.
#[derive(Clone)]
pub struct Ranged<T, F> {
    start: T,
    end: T,
    succ: F,
}

impl<T, F> Ranged<T, F>
where
    T: PartialOrd + Clone,
    F: Fn(&T) -> T,
{
    /// Range from `start` (inclusive) to `end` (exclusive) via `succ`.
    pub fn new(start: T, end: T, succ: F) -> Self {
        Self { start, end, succ }
    }
}

impl<T> Ranged<T, fn(&T) -> T>
where
    T: PartialOrd + Clone,
{
    /// Integer-style range using the type's own increment.
    pub fn upto(start: T, end: T) -> Self
    where
        T: std::ops::Add<Output = T> + From<u8>,
    {
        Self::new(start, end, |n| n.clone() + T::from(1))
    }
}

impl<T, F> Sequence for Ranged<T, F>
where
    T: PartialOrd + Clone,
    F: Fn(&T) -> T,
{
    type Item = T;

    fn cursor<'a>(&'a self) -> Box<dyn Iterator<Item = T> + 'a>
    where
        T: 'a,
    {
        Box::new(RangedCursor::new(
            self.start.clone(),
            self.end.clone(),
            &self.succ,
        ))
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Ranged<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ranged")
            .field("start", &self.start)
            .field("end", &self.end)
            .finish_non_exhaustive()
    }
}
