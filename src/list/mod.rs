//! Read-only list views over sequences
//!
//! A list view presents a sequence as an index-addressable container.
//! The plain view re-derives its contents from the origin on every query;
//! the sticky variant pins a snapshot first. Both reject all mutation.

use std::marker::PhantomData;

use crate::memo::Sticky;
use crate::sequence::Sequence;
use crate::{Error, Result};

/// Re-deriving list view.
///
/// Every query independently re-traverses the origin, so two calls may
/// observe different contents when the origin changes between them. This
/// is the deliberate non-caching default; use [`StickyList`] for a
/// stable snapshot.
#[derive(Debug, Clone)]
pub struct SeqList<S: Sequence> {
    origin: S,
    _item: PhantomData<fn() -> S::Item>,
}

impl<S: Sequence> SeqList<S> {
    /// View `origin` as a list.
    pub fn new(origin: S) -> Self {
        Self {
            origin,
            _item: PhantomData,
        }
    }

    /// Number of elements, by full traversal.
    pub fn len(&self) -> usize {
        self.origin.cursor().count()
    }

    /// Whether the origin currently yields no elements.
    pub fn is_empty(&self) -> bool {
        self.origin.cursor().next().is_none()
    }

    /// Element at `index`, failing with a bounds error past the end.
    pub fn get(&self, index: usize) -> Result<S::Item> {
        match self.origin.cursor().nth(index) {
            Some(item) => Ok(item),
            None => Err(Error::OutOfBounds {
                index,
                len: self.len(),
            }),
        }
    }

    /// Element at `index`, or the fallback past the end.
    pub fn get_or(&self, index: usize, fallback: S::Item) -> S::Item {
        self.origin.cursor().nth(index).unwrap_or(fallback)
    }

    /// Whether any element equals `needle`.
    pub fn contains(&self, needle: &S::Item) -> bool
    where
        S::Item: PartialEq,
    {
        self.origin.cursor().any(|item| item == *needle)
    }

    /// Position of the first element equal to `needle`, if any.
    pub fn index_of(&self, needle: &S::Item) -> Option<usize>
    where
        S::Item: PartialEq,
    {
        self.origin.cursor().position(|item| item == *needle)
    }

    /// Drain the current contents into a buffer.
    pub fn to_vec(&self) -> Vec<S::Item> {
        self.origin.cursor().collect()
    }

    /// Always fails: the view is a read-only projection.
    pub fn push(&self, _item: S::Item) -> Result<()> {
        Err(Error::ReadOnly("push"))
    }

    /// Always fails: the view is a read-only projection.
    pub fn insert(&self, _index: usize, _item: S::Item) -> Result<()> {
        Err(Error::ReadOnly("insert"))
    }

    /// Always fails: the view is a read-only projection.
    pub fn remove(&self, _index: usize) -> Result<S::Item> {
        Err(Error::ReadOnly("remove"))
    }

    /// Always fails: the view is a read-only projection.
    pub fn clear(&self) -> Result<()> {
        Err(Error::ReadOnly("clear"))
    }
}

impl<S: Sequence> Sequence for SeqList<S> {
    type Item = S::Item;

    fn cursor<'a>(&'a self) -> Box<dyn Iterator<Item = S::Item> + 'a>
    where
        S::Item: 'a,
    {
        self.origin.cursor()
    }
}

/// List view over a pinned snapshot of the origin.
pub type StickyList<S> = SeqList<Sticky<S>>;

impl<S> StickyList<S>
where
    S: Sequence,
    S::Item: Clone,
{
    /// Snapshot `origin` on first query and view it as a list.
    pub fn sticky(origin: S) -> Self {
        SeqList::new(Sticky::new(origin))
    }
}
