//! Lock-guarded sequences and shared cursors
//!
//! Plain decorators are not safe for concurrent traversal. These two
//! wrappers are the only concurrency mechanisms in the library, and they
//! must be composed explicitly by the caller.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::sequence::Sequence;

fn relock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Sequence whose cursor creation is serialized by a mutex.
///
/// The lock is held for the duration of cursor creation only, not for
/// the lifetime of the returned cursor. Advancement of a cursor shared
/// between threads needs [`SharedCursor`] on top.
#[derive(Debug)]
pub struct Synced<S> {
    origin: S,
    gate: Mutex<()>,
}

impl<S: Sequence> Synced<S> {
    /// Serialize cursor creation on `origin`.
    pub fn new(origin: S) -> Self {
        Self {
            origin,
            gate: Mutex::new(()),
        }
    }
}

impl<S: Sequence> Sequence for Synced<S> {
    type Item = S::Item;

    fn cursor<'a>(&'a self) -> Box<dyn Iterator<Item = S::Item> + 'a>
    where
        S::Item: 'a,
    {
        let _guard = relock(&self.gate);
        self.origin.cursor()
    }
}

/// Clonable handle delivering each element of one shared cursor to
/// exactly one consumer.
///
/// Every `next()` takes the lock, so no interleaving of threads can lose
/// or duplicate an element. Which consumer receives which element is
/// unspecified.
#[derive(Debug)]
pub struct SharedCursor<I> {
    inner: Arc<Mutex<I>>,
}

impl<I: Iterator> SharedCursor<I> {
    /// Share `cursor` between consumers.
    pub fn new(cursor: I) -> Self {
        Self {
            inner: Arc::new(Mutex::new(cursor)),
        }
    }
}

impl<I> Clone for SharedCursor<I> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<I: Iterator> Iterator for SharedCursor<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        relock(&self.inner).next()
    }
}
