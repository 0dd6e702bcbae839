//! The `Sequence` trait and its decorator family
//!
//! A sequence is anything that can produce a fresh cursor over a run of
//! values. Decorators implement the same capability by composing the
//! cursor of the sequence they wrap, so nothing is computed until the
//! caller starts pulling elements.

mod cycled;
mod distinct;
mod endless;
mod filtered;
mod joined;
mod limited;
mod mapped;
mod matched;
mod no_nulls;
mod partitioned;
mod ranged;
mod repeated;
mod shuffled;
mod skipped;
mod sorted;
mod windowed;

pub use cycled::Cycled;
pub use distinct::Distinct;
pub use endless::Endless;
pub use filtered::Filtered;
pub use joined::{Chained, Joined};
pub use limited::Limited;
pub use mapped::Mapped;
pub use matched::{Matched, Zipped};
pub use no_nulls::NoNulls;
pub use partitioned::Partitioned;
pub use ranged::Ranged;
pub use repeated::Repeated;
pub use shuffled::Shuffled;
pub use skipped::Skipped;
pub use sorted::{Reversed, Sorted, SortedBy};
pub use windowed::Windowed;

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::memo::Sticky;
use crate::sync::Synced;
use crate::Error;

/// A replayable source of values.
///
/// The single operation builds a fresh cursor; calling it again re-derives
/// the sequence from scratch unless a memoizing wrapper such as
/// [`Sticky`](crate::Sticky) sits in between. Implementations must not
/// retain traversal state across calls.
pub trait Sequence {
    /// Element type produced by cursors of this sequence.
    type Item;

    /// Build a fresh cursor over this sequence.
    fn cursor<'a>(&'a self) -> Box<dyn Iterator<Item = Self::Item> + 'a>
    where
        Self::Item: 'a;
}

impl<S: Sequence + ?Sized> Sequence for &S {
    type Item = S::Item;

    fn cursor<'a>(&'a self) -> Box<dyn Iterator<Item = Self::Item> + 'a>
    where
        Self::Item: 'a,
    {
        (**self).cursor()
    }
}

/// A literal sequence backed by an owned buffer.
///
/// The workhorse leaf source: every cursor clones elements out of the
/// buffer, so the sequence itself is never consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceOf<T> {
    items: Vec<T>,
}

impl<T: Clone> SequenceOf<T> {
    /// Wrap an owned buffer of elements.
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T: Clone> From<Vec<T>> for SequenceOf<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T: Clone> From<&[T]> for SequenceOf<T> {
    fn from(items: &[T]) -> Self {
        Self::new(items.to_vec())
    }
}

impl<T: Clone> FromIterator<T> for SequenceOf<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T: Clone> Sequence for SequenceOf<T> {
    type Item = T;

    fn cursor<'a>(&'a self) -> Box<dyn Iterator<Item = T> + 'a>
    where
        T: 'a,
    {
        Box::new(self.items.iter().cloned())
    }
}

/// A sequence derived from a supplier closure.
///
/// The supplier runs on every cursor request, so a side-effecting or
/// growing source is re-queried each time. Wrap in
/// [`Sticky`](crate::Sticky) to pin the first observation.
pub struct FnSequence<F, T> {
    supplier: F,
    _out: std::marker::PhantomData<fn() -> T>,
}

impl<F, T> FnSequence<F, T>
where
    F: Fn() -> Vec<T>,
{
    /// Wrap a supplier closure.
    pub fn new(supplier: F) -> Self {
        Self {
            supplier,
            _out: std::marker::PhantomData,
        }
    }
}

impl<F, T> Sequence for FnSequence<F, T>
where
    F: Fn() -> Vec<T>,
{
    type Item = T;

    fn cursor<'a>(&'a self) -> Box<dyn Iterator<Item = T> + 'a>
    where
        T: 'a,
    {
        Box::new((self.supplier)().into_iter())
    }
}

impl<F, T> fmt::Debug for FnSequence<F, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnSequence").finish_non_exhaustive()
    }
}

/// Structural, element-wise equality of two sequences.
///
/// Equal if and only if both produce element-wise equal runs of equal
/// length, and consistent with [`hash`]: structurally equal sequences
/// hash identically. Deciding this requires a full traversal of both
/// sides, so the cost is O(n); callers comparing expensive sources
/// should memoize first.
pub fn eq<'a, A, B>(a: &'a A, b: &'a B) -> bool
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
    A::Item: PartialEq + 'a,
{
    let mut left = a.cursor();
    let mut right = b.cursor();
    loop {
        match (left.next(), right.next()) {
            (Some(x), Some(y)) if x == y => continue,
            (None, None) => return true,
            _ => return false,
        }
    }
}

/// Structural hash of a sequence, consistent with [`eq`].
///
/// Feeds every element and then the element count into `state`, the way
/// slices hash, so two sequences that compare equal under [`eq`] produce
/// the same hash. Costs a full traversal.
pub fn hash<'a, S, H>(seq: &'a S, state: &mut H)
where
    S: Sequence,
    S::Item: Hash + 'a,
    H: Hasher,
{
    let mut count: usize = 0;
    for item in seq.cursor() {
        item.hash(state);
        count += 1;
    }
    state.write_usize(count);
}

/// Combinator constructors and traversal queries for every sequence.
pub trait SequenceExt: Sequence + Sized {
    /// Keep only elements satisfying the predicate.
    fn filtered<P>(self, test: P) -> Filtered<Self, P>
    where
        P: Fn(&Self::Item) -> bool,
    {
        Filtered::new(self, test)
    }

    /// Transform every element through the given lens.
    fn mapped<F, U>(self, lens: F) -> Mapped<Self, F, U>
    where
        F: Fn(Self::Item) -> U,
    {
        Mapped::new(self, lens)
    }

    /// Drop the first `count` elements.
    fn skipped(self, count: usize) -> Skipped<Self> {
        Skipped::new(self, count)
    }

    /// Keep at most the first `count` elements.
    fn limited(self, count: usize) -> Limited<Self> {
        Limited::new(self, count)
    }

    /// Concatenate another sequence after this one.
    fn chained<B>(self, other: B) -> Chained<Self, B>
    where
        B: Sequence<Item = Self::Item>,
    {
        Chained::new(self, other)
    }

    /// Repeat this sequence end-to-end forever.
    fn cycled(self) -> Cycled<Self> {
        Cycled::new(self)
    }

    /// Re-sort on every traversal by the natural order.
    fn sorted(self) -> Sorted<Self>
    where
        Self::Item: Ord,
    {
        Sorted::new(self)
    }

    /// Reverse on every traversal.
    fn reversed(self) -> Reversed<Self> {
        Reversed::new(self)
    }

    /// Drop duplicate elements, keeping first occurrences in order.
    fn distinct(self) -> Distinct<Self>
    where
        Self::Item: std::hash::Hash + Eq + Clone,
    {
        Distinct::new(self)
    }

    /// Shuffle with thread-local entropy on every traversal.
    fn shuffled(self) -> Shuffled<Self> {
        Shuffled::new(self)
    }

    /// Chunk into partitions of at most `size` elements.
    fn partitioned(self, size: usize) -> crate::Result<Partitioned<Self>> {
        Partitioned::new(self, size)
    }

    /// Slide overlapping windows of `size` elements.
    fn windowed(self, size: usize) -> crate::Result<Windowed<Self>>
    where
        Self::Item: Clone,
    {
        Windowed::sliding(self, size)
    }

    /// The `count` elements starting at `offset`.
    fn sliced(self, offset: usize, count: usize) -> Limited<Skipped<Self>> {
        Limited::new(Skipped::new(self, offset), count)
    }

    /// Materialize on first traversal, replay the snapshot afterwards.
    fn sticky(self) -> Sticky<Self>
    where
        Self::Item: Clone,
    {
        Sticky::new(self)
    }

    /// Guard cursor creation with a mutex.
    fn synced(self) -> Synced<Self> {
        Synced::new(self)
    }

    /// Number of elements, by full traversal.
    fn length<'a>(&'a self) -> usize
    where
        Self::Item: 'a,
    {
        self.cursor().count()
    }

    /// Whether a fresh cursor yields no elements.
    fn is_empty<'a>(&'a self) -> bool
    where
        Self::Item: 'a,
    {
        self.cursor().next().is_none()
    }

    /// Drain a fresh cursor into a buffer.
    fn to_vec<'a>(&'a self) -> Vec<Self::Item>
    where
        Self::Item: 'a,
    {
        self.cursor().collect()
    }

    /// Element at `position`, failing when the sequence ends first.
    fn item_at<'a>(&'a self, position: usize) -> crate::Result<Self::Item>
    where
        Self::Item: 'a,
    {
        self.cursor()
            .nth(position)
            .ok_or(Error::NotFound { position })
    }

    /// Element at `position`, or the fallback when the sequence ends first.
    ///
    /// A missing position is an expected outcome here, not a failure.
    fn item_at_or<'a>(&'a self, position: usize, fallback: Self::Item) -> Self::Item
    where
        Self::Item: 'a,
    {
        self.cursor().nth(position).unwrap_or(fallback)
    }
}

impl<S: Sequence> SequenceExt for S {}
