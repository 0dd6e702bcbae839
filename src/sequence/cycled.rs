//! Endless repetition.

use super::Sequence;
use crate::cursor::CycledCursor;

/// Sequence repeating its origin end-to-end without terminating.
///
/// Each wrap-around asks the origin for a fresh cursor, so a re-deriving
/// origin is re-queried every lap. An empty origin yields an empty
/// sequence rather than looping forever.
#[derive(Debug, Clone)]
pub struct Cycled<S> {
    origin: S,
}

impl<S: Sequence> Cycled<S> {
    /// Cycle `origin` endlessly.
    pub fn new(origin: S) -> Self {
        Self { origin }
    }
}

impl<S: Sequence> Sequence for Cycled<S> {
    type Item = S::Item;

    fn cursor<'a>(&'a self) -> Box<dyn Iterator<Item = S::Item> + 'a>
    where
        S::Item: 'a,
    {
        Box::new(CycledCursor::new(&self.origin))
    }
}
