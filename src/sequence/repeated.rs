//! A single element, many times.

use super::Sequence;

/// Sequence yielding clones of one element a fixed number of times.
#[derive(Debug, Clone)]
pub struct Repeated<T> {
    element: T,
    count: usize,
}

impl<T: Clone> Repeated<T> {
    /// Repeat `element` exactly `count` times.
    pub fn new(element: T, count: usize) -> Self {
        Self { element, count }
    }
}

impl<T: Clone> Sequence for Repeated<T> {
    type Item = T;

    fn cursor<'a>(&'a self) -> Box<dyn Iterator<Item = T> + 'a>
    where
        T: 'a,
    {
        Box::new(std::iter::repeat(self.element.clone()).take(self.count))
    }
}
