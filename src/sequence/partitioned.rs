//! Fixed-size chunking.

use std::marker::PhantomData;

use super::Sequence;
use crate::cursor::PartitionedCursor;
use crate::{Error, Result};

/// Sequence of partitions of at most `size` origin elements.
///
/// A zero size is rejected at construction, before any traversal begins.
#[derive(Debug, Clone)]
pub struct Partitioned<S: Sequence> {
    origin: S,
    size: usize,
    _item: PhantomData<fn() -> S::Item>,
}

impl<S: Sequence> Partitioned<S> {
    /// Chunk `origin` into partitions of `size` elements.
    ///
    /// Fails with [`Error::InvalidArgument`] when `size` is zero.
    pub fn new(origin: S, size: usize) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidArgument(
                "partition size must be positive".into(),
            ));
        }
        Ok(Self {
            origin,
            size,
            _item: PhantomData,
        })
    }
}

impl<S: Sequence> Sequence for Partitioned<S> {
    type Item = Vec<S::Item>;

    fn cursor<'a>(&'a self) -> Box<dyn Iterator<Item = Vec<S::Item>> + 'a>
    where
        Vec<S::Item>: 'a,
    {
        Box::new(PartitionedCursor::new(self.origin.cursor(), self.size))
    }
}
