//! Endless repetition of a re-iterable source.

use std::fmt;

use crate::sequence::Sequence;

/// Cursor that restarts from a fresh cursor of the origin whenever the
/// current one runs dry.
///
/// An origin that yields nothing terminates the cycle immediately instead
/// of spinning forever.
pub struct CycledCursor<'a, S: Sequence + ?Sized> {
    origin: &'a S,
    current: Box<dyn Iterator<Item = S::Item> + 'a>,
}

impl<'a, S> CycledCursor<'a, S>
where
    S: Sequence + ?Sized,
    S::Item: 'a,
{
    /// Start cycling over `origin`.
    pub fn new(origin: &'a S) -> Self {
        Self {
            origin,
            current: origin.cursor(),
        }
    }
}

impl<'a, S> Iterator for CycledCursor<'a, S>
where
    S: Sequence + ?Sized,
    S::Item: 'a,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        if let Some(item) = self.current.next() {
            return Some(item);
        }
        self.current = self.origin.cursor();
        self.current.next()
    }
}

impl<S: Sequence + ?Sized> fmt::Debug for CycledCursor<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CycledCursor").finish_non_exhaustive()
    }
}
