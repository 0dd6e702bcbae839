//! Bounded numeric-style ranges driven by a successor function.

use std::fmt;

/// Cursor counting from a start value up to an exclusive end, advancing
/// through a successor function.
///
/// The element type only needs ordering and cloning, so calendar dates,
/// characters, or bignums work as well as integers. A start at or beyond
/// the end yields an empty run.
pub struct RangedCursor<T, F> {
    current: T,
    end: T,
    succ: F,
}

impl<T, F> RangedCursor<T, F>
where
    T: PartialOrd + Clone,
    F: Fn(&T) -> T,
{
    /// Count from `start` (inclusive) to `end` (exclusive) via `succ`.
    pub fn new(start: T, end: T, succ: F) -> Self {
        Self {
            current: start,
            end,
            succ,
        }
    }
}

impl<T, F> Iterator for RangedCursor<T, F>
where
    T: PartialOrd + Clone,
    F: Fn(&T) -> T,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.current >= self.end {
            return None;
        }
        let item = self.current.clone();
        self.current = (self.succ)(&self.current);
        Some(item)
    }
}

impl<T: fmt::Debug, F> fmt::Debug for RangedCursor<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangedCursor")
            .field("current", &self.current)
            .field("end", &self.end)
            .finish_non_exhaustive()
    }
}
