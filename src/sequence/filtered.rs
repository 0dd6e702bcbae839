//! Predicate filtering.

use std::fmt;

use super::Sequence;

/// Sequence keeping only the elements its predicate accepts.
///
/// Filtering is lazy and re-applied on every traversal; relative order of
/// retained elements is preserved exactly.
pub struct Filtered<S, P> {
    origin: S,
    test: P,
}

impl<S, P> Filtered<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    /// Filter `origin` through `test`.
    pub fn new(origin: S, test: P) -> Self {
        Self { origin, test }
    }
}

impl<S, P> Sequence for Filtered<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;

    fn cursor<'a>(&'a self) -> Box<dyn Iterator<Item = S::Item> + 'a>
    where
        S::Item: 'a,
    {
        Box::new(self.origin.cursor().filter(move |item| (self.test)(item)))
    }
}

impl<S: fmt::Debug, P> fmt::Debug for Filtered<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filtered")
            .field("origin", &self.origin)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::{SequenceExt, SequenceOf};

    #[test]
    fn keeps_only_accepted_elements() {
        let words = SequenceOf::from(vec!["hello", "world", "a"]);
        let long = words.filtered(|w: &&str| w.len() > 4);
        assert_eq!(long.length(), 2);
        assert_eq!(long.to_vec(), vec!["hello", "world"]);
    }

    #[test]
    fn filtering_is_reapplied_per_traversal() {
        let seq = SequenceOf::from(vec![1, 2, 3, 4]).filtered(|n| n % 2 == 0);
        assert_eq!(seq.to_vec(), vec![2, 4]);
        assert_eq!(seq.to_vec(), vec![2, 4]);
    }
}
