//! Randomized traversal order.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::Sequence;

/// Sequence traversed in random order, re-shuffled on every cursor.
///
/// With a seed the order is deterministic across traversals; without one
/// each traversal draws fresh thread-local entropy.
#[derive(Debug, Clone)]
pub struct Shuffled<S> {
    origin: S,
    seed: Option<u64>,
}

impl<S: Sequence> Shuffled<S> {
    /// Shuffle `origin` with thread-local entropy.
    pub fn new(origin: S) -> Self {
        Self { origin, seed: None }
    }

    /// Shuffle `origin` deterministically from `seed`.
    pub fn seeded(origin: S, seed: u64) -> Self {
        Self {
            origin,
            seed: Some(seed),
        }
    }
}

impl<S: Sequence> Sequence for Shuffled<S> {
    type Item = S::Item;

    fn cursor<'a>(&'a self) -> Box<dyn Iterator<Item = S::Item> + 'a>
    where
        S::Item: 'a,
    {
        let mut buffer: Vec<S::Item> = self.origin.cursor().collect();
        match self.seed {
            Some(seed) => buffer.shuffle(&mut StdRng::seed_from_u64(seed)),
            None => buffer.shuffle(&mut rand::thread_rng()),
        }
        Box::new(buffer.into_iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::{SequenceExt, SequenceOf};

    #[test]
    fn seeded_shuffle_is_deterministic() {
        let seq = Shuffled::seeded(SequenceOf::from((0..32).collect::<Vec<_>>()), 42);
        assert_eq!(seq.to_vec(), seq.to_vec());
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let seq = SequenceOf::from((0..32).collect::<Vec<_>>()).shuffled();
        let mut out = seq.to_vec();
        out.sort();
        assert_eq!(out, (0..32).collect::<Vec<_>>());
    }
}
