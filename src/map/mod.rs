//! Read-only map views over pair sequences
//!
//! A map view presents a sequence of key-value pairs as a key-addressable
//! container. Duplicate keys resolve last-wins, and iteration preserves
//! the first-occurrence order of keys with their last-written values.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;
use std::sync::OnceLock;

use tracing::debug;

use crate::sequence::Sequence;
use crate::{Error, Result};

fn last_wins<K, V>(pairs: impl Iterator<Item = (K, V)>) -> Vec<(K, V)>
where
    K: Eq + Hash + Clone,
{
    let mut entries: Vec<(K, V)> = Vec::new();
    let mut slots: HashMap<K, usize> = HashMap::new();
    for (key, value) in pairs {
        match slots.get(&key) {
            Some(&slot) => entries[slot] = (key, value),
            None => {
                slots.insert(key.clone(), entries.len());
                entries.push((key, value));
            }
        }
    }
    entries
}

/// Re-deriving map view.
///
/// Every query independently re-traverses the origin; a growing origin
/// is therefore observed live. Use [`StickyMap`] for a built-once index.
#[derive(Debug, Clone)]
pub struct SeqMap<S, K, V>
where
    S: Sequence<Item = (K, V)>,
{
    origin: S,
    _pair: PhantomData<fn() -> (K, V)>,
}

impl<S, K, V> SeqMap<S, K, V>
where
    S: Sequence<Item = (K, V)>,
    K: Eq + Hash + Clone,
{
    /// View `origin` as a map.
    pub fn new(origin: S) -> Self {
        Self {
            origin,
            _pair: PhantomData,
        }
    }

    /// Number of distinct keys, by full traversal.
    pub fn len(&self) -> usize {
        let mut keys = HashSet::new();
        self.origin.cursor().for_each(|(key, _)| {
            keys.insert(key);
        });
        keys.len()
    }

    /// Whether the origin currently yields no pairs.
    pub fn is_empty(&self) -> bool {
        self.origin.cursor().next().is_none()
    }

    /// Value under `key`, last pair with that key winning.
    pub fn get(&self, key: &K) -> Option<V> {
        self.origin
            .cursor()
            .filter(|(k, _)| k == key)
            .last()
            .map(|(_, v)| v)
    }

    /// Value under `key`, or the fallback when absent.
    pub fn get_or(&self, key: &K, fallback: V) -> V {
        self.get(key).unwrap_or(fallback)
    }

    /// Whether any pair carries `key`.
    pub fn contains_key(&self, key: &K) -> bool {
        self.origin.cursor().any(|(k, _)| k == *key)
    }

    /// Entries with duplicate keys collapsed last-wins, in
    /// first-occurrence key order.
    pub fn entries(&self) -> Vec<(K, V)> {
        last_wins(self.origin.cursor())
    }

    /// Distinct keys in first-occurrence order.
    pub fn keys(&self) -> Vec<K> {
        self.entries().into_iter().map(|(k, _)| k).collect()
    }

    /// Winning values in first-occurrence key order.
    pub fn values(&self) -> Vec<V> {
        self.entries().into_iter().map(|(_, v)| v).collect()
    }

    /// Always fails: the view is a read-only projection.
    pub fn put(&self, _key: K, _value: V) -> Result<()> {
        Err(Error::ReadOnly("put"))
    }

    /// Always fails: the view is a read-only projection.
    pub fn remove(&self, _key: &K) -> Result<V> {
        Err(Error::ReadOnly("remove"))
    }

    /// Always fails: the view is a read-only projection.
    pub fn clear(&self) -> Result<()> {
        Err(Error::ReadOnly("clear"))
    }
}

/// Map view over an index built exactly once.
///
/// The first query drains the origin and builds a hash index behind a
/// single-initialization cell; every later query is answered from the
/// index in O(1) without touching the origin again.
pub struct StickyMap<S, K, V>
where
    S: Sequence<Item = (K, V)>,
{
    origin: S,
    cache: OnceLock<(Vec<(K, V)>, HashMap<K, V>)>,
}

impl<S, K, V> StickyMap<S, K, V>
where
    S: Sequence<Item = (K, V)>,
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Build-once map view over `origin`.
    pub fn new(origin: S) -> Self {
        Self {
            origin,
            cache: OnceLock::new(),
        }
    }

    fn index(&self) -> &(Vec<(K, V)>, HashMap<K, V>) {
        self.cache.get_or_init(|| {
            let entries = last_wins(self.origin.cursor());
            let index: HashMap<K, V> = entries.iter().cloned().collect();
            debug!(keys = entries.len(), "built sticky map index");
            (entries, index)
        })
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.index().0.len()
    }

    /// Whether the snapshot holds no pairs.
    pub fn is_empty(&self) -> bool {
        self.index().0.is_empty()
    }

    /// Value under `key` in the snapshot.
    pub fn get(&self, key: &K) -> Option<V> {
        self.index().1.get(key).cloned()
    }

    /// Whether the snapshot carries `key`.
    pub fn contains_key(&self, key: &K) -> bool {
        self.index().1.contains_key(key)
    }

    /// Snapshot entries in first-occurrence key order.
    pub fn entries(&self) -> Vec<(K, V)> {
        self.index().0.clone()
    }

    /// Always fails: the view is a read-only projection.
    pub fn put(&self, _key: K, _value: V) -> Result<()> {
        Err(Error::ReadOnly("put"))
    }

    /// Always fails: the view is a read-only projection.
    pub fn remove(&self, _key: &K) -> Result<V> {
        Err(Error::ReadOnly("remove"))
    }
}

impl<S, K, V> fmt::Debug for StickyMap<S, K, V>
where
    S: Sequence<Item = (K, V)> + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StickyMap")
            .field("origin", &self.origin)
            .field("materialized", &self.cache.get().is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::{FnSequence, SequenceOf};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn duplicate_keys_resolve_last_wins() {
        let map = SeqMap::new(SequenceOf::from(vec![("k", 1), ("j", 5), ("k", 2)]));
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&"k"), Some(2));
        assert_eq!(map.entries(), vec![("k", 2), ("j", 5)]);
    }

    #[test]
    fn rederiving_map_observes_a_growing_origin() {
        let calls = AtomicUsize::new(0);
        let map = SeqMap::new(FnSequence::new(|| {
            let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
            (0..n).map(|k| (k, k)).collect::<Vec<_>>()
        }));

        assert_eq!(map.len(), 1);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn sticky_map_builds_its_index_once() {
        let calls = AtomicUsize::new(0);
        let map = StickyMap::new(FnSequence::new(|| {
            calls.fetch_add(1, Ordering::SeqCst);
            vec![("a", 1), ("b", 2), ("a", 3)]
        }));

        assert_eq!(map.get(&"a"), Some(3));
        assert_eq!(map.len(), 2);
        assert!(map.contains_key(&"b"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn mutation_is_rejected() {
        let map = SeqMap::new(SequenceOf::from(vec![("k", 1)]));
        assert_eq!(map.put("x", 9), Err(Error::ReadOnly("put")));
        assert_eq!(map.remove(&"k"), Err(Error::ReadOnly("remove")));
        assert_eq!(map.clear(), Err(Error::ReadOnly("clear")));
        assert_eq!(map.get(&"k"), Some(1));
    }
}
