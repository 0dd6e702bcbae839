//! Element transformation.

use std::fmt;
use std::marker::PhantomData;

use super::Sequence;

/// Sequence transforming every element of its origin through a lens.
///
/// Transformation is lazy and preserves the order of the origin.
pub struct Mapped<S: Sequence, F, U> {
    origin: S,
    lens: F,
    _sig: PhantomData<fn(S::Item) -> U>,
}

impl<S, F, U> Mapped<S, F, U>
where
    S: Sequence,
    F: Fn(S::Item) -> U,
{
    /// Transform `origin` through `lens`.
    pub fn new(origin: S, lens: F) -> Self {
        Self {
            origin,
            lens,
            _sig: PhantomData,
        }
    }
}

impl<S, F, U> Sequence for Mapped<S, F, U>
where
    S: Sequence,
    F: Fn(S::Item) -> U,
{
    type Item = U;

    fn cursor<'a>(&'a self) -> Box<dyn Iterator<Item = U> + 'a>
    where
        U: 'a,
    {
        Box::new(self.origin.cursor().map(move |item| (self.lens)(item)))
    }
}

impl<S: Sequence + fmt::Debug, F, U> fmt::Debug for Mapped<S, F, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mapped")
            .field("origin", &self.origin)
            .finish_non_exhaustive()
    }
}
