//! Sliding windows over a cursor.

/// Cursor producing overlapping or stepped windows of inner elements.
///
/// With a step of 1 the windows overlap; with a step equal to the window
/// size they tile without overlap. Short trailing runs that cannot fill
/// a window are discarded.
#[derive(Debug, Clone)]
pub struct WindowedCursor<I: Iterator> {
    inner: I,
    size: usize,
    step: usize,
    buffer: Vec<I::Item>,
}

impl<I> WindowedCursor<I>
where
    I: Iterator,
    I::Item: Clone,
{
    /// Window `inner` with the given size and step.
    pub fn new(inner: I, size: usize, step: usize) -> Self {
        debug_assert!(size > 0, "window size must be positive");
        debug_assert!(step > 0, "window step must be positive");
        Self {
            inner,
            size,
            step,
            buffer: Vec::with_capacity(size),
        }
    }
}

impl<I> Iterator for WindowedCursor<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Vec<I::Item>> {
        while self.buffer.len() < self.size {
            self.buffer.push(self.inner.next()?);
        }
        let window = self.buffer.clone();
        if self.step < self.size {
            self.buffer.drain(..self.step);
        } else {
            // A stride wider than the window discards buffered elements
            // and skips the gap directly from the inner cursor.
            self.buffer.clear();
            for _ in self.size..self.step {
                if self.inner.next().is_none() {
                    break;
                }
            }
        }
        Some(window)
    }
}
