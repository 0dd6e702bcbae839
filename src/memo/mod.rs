//! One-shot materialization ("sticky") wrappers
//!
//! A sticky wrapper drains its origin into an ordered snapshot on first
//! traversal and replays the snapshot forever after. The origin is
//! touched at most once, no matter how many cursors are requested or how
//! many threads race the first request: population goes through a
//! single-initialization cell, not an unguarded check-then-set.

use std::fmt;
use std::marker::PhantomData;
use std::sync::{Arc, Mutex, OnceLock};

use tracing::trace;

use crate::sequence::Sequence;

/// Memoizing sequence: drains its origin once, replays the snapshot.
///
/// Worth composing whenever the origin is expensive (a computation, a
/// growing supplier) or observably side-effecting. Once populated the
/// snapshot is immutable and the origin is never consulted again.
pub struct Sticky<S: Sequence> {
    origin: S,
    cache: OnceLock<Vec<S::Item>>,
}

impl<S> Sticky<S>
where
    S: Sequence,
    S::Item: Clone,
{
    /// Memoize `origin`.
    pub fn new(origin: S) -> Self {
        Self {
            origin,
            cache: OnceLock::new(),
        }
    }

    /// Whether the snapshot has been populated yet.
    pub fn materialized(&self) -> bool {
        self.cache.get().is_some()
    }

    fn snapshot(&self) -> &Vec<S::Item> {
        self.cache.get_or_init(|| {
            let items: Vec<S::Item> = self.origin.cursor().collect();
            trace!(elements = items.len(), "materialized sticky snapshot");
            items
        })
    }
}

impl<S> Sequence for Sticky<S>
where
    S: Sequence,
    S::Item: Clone,
{
    type Item = S::Item;

    fn cursor<'a>(&'a self) -> Box<dyn Iterator<Item = S::Item> + 'a>
    where
        S::Item: 'a,
    {
        Box::new(self.snapshot().iter().cloned())
    }
}

impl<S> fmt::Debug for Sticky<S>
where
    S: Sequence + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sticky")
            .field("origin", &self.origin)
            .field("materialized", &self.cache.get().is_some())
            .finish()
    }
}

/// Memoizing sequence over a fallible origin.
///
/// Materialization collects elements until the first error; an error
/// aborts the drain, caches nothing, and propagates, so a later cursor
/// request retries the full materialization from scratch. After a
/// successful drain every cursor replays `Ok` elements only.
pub struct TrySticky<S, T, E> {
    origin: S,
    cache: Mutex<Option<Arc<Vec<T>>>>,
    _err: PhantomData<fn() -> E>,
}

impl<S, T, E> TrySticky<S, T, E>
where
    S: Sequence<Item = std::result::Result<T, E>>,
    T: Clone,
{
    /// Memoize the fallible `origin`.
    pub fn new(origin: S) -> Self {
        Self {
            origin,
            cache: Mutex::new(None),
            _err: PhantomData,
        }
    }

    /// Whether a successful snapshot exists.
    pub fn materialized(&self) -> bool {
        self.lock().is_some()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<Arc<Vec<T>>>> {
        self.cache.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Populate the snapshot if absent, holding the lock so concurrent
    /// first requests cannot double-drain the origin.
    fn materialize<'a>(&'a self) -> std::result::Result<Arc<Vec<T>>, E>
    where
        T: 'a,
        E: 'a,
    {
        let mut slot = self.lock();
        if let Some(snapshot) = slot.as_ref() {
            return Ok(Arc::clone(snapshot));
        }
        let mut items = Vec::new();
        for element in self.origin.cursor() {
            items.push(element?);
        }
        trace!(elements = items.len(), "materialized fallible snapshot");
        let snapshot = Arc::new(items);
        *slot = Some(Arc::clone(&snapshot));
        Ok(snapshot)
    }
}

impl<S, T, E> Sequence for TrySticky<S, T, E>
where
    S: Sequence<Item = std::result::Result<T, E>>,
    T: Clone,
{
    type Item = std::result::Result<T, E>;

    fn cursor<'a>(&'a self) -> Box<dyn Iterator<Item = std::result::Result<T, E>> + 'a>
    where
        std::result::Result<T, E>: 'a,
    {
        match self.materialize() {
            Ok(snapshot) => {
                let len = snapshot.len();
                Box::new((0..len).map(move |i| Ok(snapshot[i].clone())))
            }
            Err(error) => Box::new(std::iter::once(Err(error))),
        }
    }
}

impl<S: fmt::Debug, T, E> fmt::Debug for TrySticky<S, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrySticky")
            .field("origin", &self.origin)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::{FnSequence, SequenceExt, SequenceOf};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn origin_is_drained_exactly_once() {
        let calls = AtomicUsize::new(0);
        let sticky = Sticky::new(FnSequence::new(|| {
            calls.fetch_add(1, Ordering::SeqCst);
            vec![1, 2, 3]
        }));

        assert_eq!(sticky.to_vec(), vec![1, 2, 3]);
        assert_eq!(sticky.to_vec(), vec![1, 2, 3]);
        assert_eq!(sticky.length(), 3);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn growing_origin_is_pinned_at_first_observation() {
        let calls = AtomicUsize::new(0);
        let growing = FnSequence::new(|| {
            let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
            vec![0; n]
        });
        let sticky = Sticky::new(growing);

        let first = sticky.length();
        let second = sticky.length();
        assert_eq!(first, second);
    }

    #[test]
    fn failed_materialization_caches_nothing_and_retries() {
        let calls = AtomicUsize::new(0);
        let flaky = FnSequence::new(|| {
            if calls.fetch_add(1, Ordering::SeqCst) == 0 {
                vec![Ok(1), Err("boom")]
            } else {
                vec![Ok(1), Ok(2)]
            }
        });
        let sticky = TrySticky::new(flaky);

        let first: Vec<_> = sticky.cursor().collect();
        assert_eq!(first, vec![Err("boom")]);
        assert!(!sticky.materialized());

        let second: Vec<_> = sticky.cursor().collect();
        assert_eq!(second, vec![Ok(1), Ok(2)]);
        assert!(sticky.materialized());

        // The snapshot replays without consulting the origin again.
        let third: Vec<_> = sticky.cursor().collect();
        assert_eq!(third, vec![Ok(1), Ok(2)]);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn sticky_over_literal_is_transparent() {
        let sticky = SequenceOf::from(vec!["a", "b"]).sticky();
        assert!(!sticky.materialized());
        assert_eq!(sticky.to_vec(), vec!["a", "b"]);
        assert!(sticky.materialized());
    }
}
