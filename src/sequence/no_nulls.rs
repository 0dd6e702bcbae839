//! Rejecting absent elements.

use std::marker::PhantomData;

use super::Sequence;
use crate::{Error, Result};

/// Sequence over optional elements that treats absence as an error.
///
/// The first `None` surfaces as [`Error::NullElement`] at its position;
/// draining operations fail atomically, leaving no partial output.
#[derive(Debug, Clone)]
pub struct NoNulls<S, T> {
    origin: S,
    _elem: PhantomData<fn() -> T>,
}

impl<S, T> NoNulls<S, T>
where
    S: Sequence<Item = Option<T>>,
{
    /// Disallow absent elements in `origin`.
    pub fn new(origin: S) -> Self {
        Self {
            origin,
            _elem: PhantomData,
        }
    }

    /// Drain into a buffer, failing atomically on the first absence.
    pub fn to_vec<'a>(&'a self) -> Result<Vec<T>>
    where
        T: 'a,
    {
        self.cursor().collect()
    }
}

impl<S, T> Sequence for NoNulls<S, T>
where
    S: Sequence<Item = Option<T>>,
{
    type Item = Result<T>;

    fn cursor<'a>(&'a self) -> Box<dyn Iterator<Item = Result<T>> + 'a>
    where
        Result<T>: 'a,
    {
        Box::new(
            self.origin
                .cursor()
                .enumerate()
                .map(|(position, element)| element.ok_or(Error::NullElement { position })),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::SequenceOf;

    #[test]
    fn passes_present_elements_through() {
        let seq = NoNulls::new(SequenceOf::from(vec![Some(1), Some(2)]));
        assert_eq!(seq.to_vec(), Ok(vec![1, 2]));
    }

    #[test]
    fn absence_fails_atomically_with_its_position() {
        let seq = NoNulls::new(SequenceOf::from(vec![Some(1), None, Some(3)]));
        assert_eq!(seq.to_vec(), Err(Error::NullElement { position: 1 }));
    }
}
