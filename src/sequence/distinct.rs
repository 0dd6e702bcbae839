//! Duplicate suppression.

use std::collections::HashSet;
use std::hash::Hash;

use super::Sequence;

/// Sequence yielding each distinct element once, first occurrence wins.
///
/// Deduplication is lazy: the seen-set grows only as far as the caller
/// pulls, so a limited traversal of a huge origin stays cheap.
#[derive(Debug, Clone)]
pub struct Distinct<S> {
    origin: S,
}

impl<S> Distinct<S>
where
    S: Sequence,
    S::Item: Hash + Eq + Clone,
{
    /// Deduplicate `origin`.
    pub fn new(origin: S) -> Self {
        Self { origin }
    }
}

impl<S> Sequence for Distinct<S>
where
    S: Sequence,
    S::Item: Hash + Eq + Clone,
{
    type Item = S::Item;

    fn cursor<'a>(&'a self) -> Box<dyn Iterator<Item = S::Item> + 'a>
    where
        S::Item: 'a,
    {
        let mut seen = HashSet::new();
        Box::new(self.origin.cursor().filter(move |item| seen.insert(item.clone())))
    }
}

#[cfg(test)]
mod tests {
    use crate::sequence::{SequenceExt, SequenceOf};

    #[test]
    fn first_occurrence_order_is_kept() {
        let seq = SequenceOf::from(vec![2, 1, 2, 3, 1]).distinct();
        assert_eq!(seq.to_vec(), vec![2, 1, 3]);
    }
}
