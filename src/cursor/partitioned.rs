//! Chunking a cursor into fixed-size partitions.

/// Cursor grouping inner elements into buffers of at most `size`.
///
/// The final partition may be shorter. Size validation happens at the
/// sequence layer before any cursor exists; the cursor itself only
/// asserts the invariant.
#[derive(Debug)]
pub struct PartitionedCursor<I> {
    inner: I,
    size: usize,
}

impl<I: Iterator> PartitionedCursor<I> {
    /// Chunk `inner` into partitions of `size` elements.
    pub fn new(inner: I, size: usize) -> Self {
        debug_assert!(size > 0, "partition size must be positive");
        Self { inner, size }
    }
}

impl<I: Iterator> Iterator for PartitionedCursor<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Vec<I::Item>> {
        let mut chunk = Vec::with_capacity(self.size);
        while chunk.len() < self.size {
            match self.inner.next() {
                Some(item) => chunk.push(item),
                None => break,
            }
        }
        if chunk.is_empty() {
            None
        } else {
            Some(chunk)
        }
    }
}
