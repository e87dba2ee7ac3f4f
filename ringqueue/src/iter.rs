use crate::error::QueueError;
use crate::queue::RingQueue;

/// Borrowing iterator over the logical sequence of a `RingQueue`, front to
/// rear.
///
/// The borrow rules already guarantee the queue cannot change while this
/// iterator is alive, so no version check is needed here.
#[derive(Clone)]
pub struct Iter<'a, T> {
    queue: &'a RingQueue<T>,
    offset: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.queue.logical(self.offset)?;
        self.offset += 1;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.queue.len().saturating_sub(self.offset);
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a RingQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            queue: self,
            offset: 0,
        }
    }
}

/// Detached front-to-rear cursor.
///
/// A cursor captures the queue's `version` at creation and re-checks it on
/// every step, so a structural mutation between steps is reported as
/// `QueueError::StaleCursor` instead of silently walking changed slots. The
/// cursor must be stepped against the queue that created it.
#[derive(Debug, Clone)]
pub struct QueueCursor {
    offset: usize,
    version: u64,
}

impl QueueCursor {
    pub(crate) fn new(version: u64) -> Self {
        Self { offset: 0, version }
    }

    /// Advances the cursor and borrows the next element, or `None` once the
    /// traversal is exhausted.
    ///
    /// # Errors
    ///
    /// Returns `QueueError::StaleCursor` if the queue was structurally
    /// modified after this cursor was created.
    pub fn next<'a, T>(&mut self, queue: &'a RingQueue<T>) -> Result<Option<&'a T>, QueueError> {
        if self.version != queue.version() {
            return Err(QueueError::StaleCursor);
        }
        match queue.logical(self.offset) {
            None => Ok(None),
            Some(element) => {
                self.offset += 1;
                Ok(Some(element))
            }
        }
    }
}
