//! Infinite generators.

use std::fmt;
use std::marker::PhantomData;

use super::Sequence;

/// Sequence producing elements from a generator forever.
///
/// The one deliberate exception to monotonic exhaustion: its cursors
/// never report an end. Compose with [`Limited`](crate::Limited) before
/// any draining operation.
pub struct Endless<F, T> {
    generate: F,
    _out: PhantomData<fn() -> T>,
}

impl<F, T> Endless<F, T>
where
    F: Fn() -> T,
{
    /// Generate elements from `generate` without end.
    pub fn new(generate: F) -> Self {
        Self {
            generate,
            _out: PhantomData,
        }
    }
}

impl<F, T> Sequence for Endless<F, T>
where
    F: Fn() -> T,
{
    type Item = T;

    fn cursor<'a>(&'a self) -> Box<dyn Iterator<Item = T> + 'a>
    where
        T: 'a,
    {
        Box::new(std::iter::repeat_with(move || (self.generate)()))
    }
}

impl<F, T> fmt::Debug for Endless<F, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Endless").finish_non_exhaustive()
    }
}
