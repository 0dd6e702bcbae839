//! End-to-end concatenation of several cursors.

/// Cursor draining a run of inner cursors one after another.
///
/// Inner cursors are created lazily: the pending supply is itself an
/// iterator, and a source's cursor is not constructed until every earlier
/// source is exhausted.
#[derive(Debug)]
pub struct JoinedCursor<C, I> {
    pending: C,
    current: Option<I>,
}

impl<C, I> JoinedCursor<C, I>
where
    C: Iterator<Item = I>,
    I: Iterator,
{
    /// Join the cursors produced by `pending`, in order.
    pub fn new(pending: C) -> Self {
        Self {
            pending,
            current: None,
        }
    }
}

impl<C, I> Iterator for JoinedCursor<C, I>
where
    C: Iterator<Item = I>,
    I: Iterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        loop {
            if let Some(cursor) = self.current.as_mut() {
                if let Some(item) = cursor.next() {
                    return Some(item);
                }
            }
            self.current = Some(self.pending.next()?);
        }
    }
}
