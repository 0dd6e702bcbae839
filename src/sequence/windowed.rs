//! Sliding windows.

use std::marker::PhantomData;

use super::Sequence;
use crate::cursor::WindowedCursor;
use crate::{Error, Result};

/// Sequence of sliding windows over its origin.
///
/// Size and step are validated at construction, matching the strict
/// policy of [`Partitioned`](crate::Partitioned).
#[derive(Debug, Clone)]
pub struct Windowed<S: Sequence> {
    origin: S,
    size: usize,
    step: usize,
    _item: PhantomData<fn() -> S::Item>,
}

impl<S> Windowed<S>
where
    S: Sequence,
    S::Item: Clone,
{
    /// Slide windows of `size` elements over `origin`, advancing by
    /// `step` each time.
    ///
    /// Fails with [`Error::InvalidArgument`] when either is zero.
    pub fn new(origin: S, size: usize, step: usize) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidArgument("window size must be positive".into()));
        }
        if step == 0 {
            return Err(Error::InvalidArgument("window step must be positive".into()));
        }
        Ok(Self {
            origin,
            size,
            step,
            _item: PhantomData,
        })
    }

    /// Overlapping windows advancing one element at a time.
    pub fn sliding(origin: S, size: usize) -> Result<Self> {
        Self::new(origin, size, 1)
    }
}

impl<S> Sequence for Windowed<S>
where
    S: Sequence,
    S::Item: Clone,
{
    type Item = Vec<S::Item>;

    fn cursor<'a>(&'a self) -> Box<dyn Iterator<Item = Vec<S::Item>> + 'a>
    where
        Vec<S::Item>: 'a,
    {
        Box::new(WindowedCursor::new(
            self.origin.cursor(),
            self.size,
            self.step,
        ))
    }
}
