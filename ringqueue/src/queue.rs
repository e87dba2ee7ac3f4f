use core::cmp::Ordering;

use crate::error::{EnqueueError, QueueError};
use crate::iter::{Iter, QueueCursor};

pub(crate) const DEFAULT_CAPACITY: usize = 32;
pub(crate) const DEFAULT_GROWTH_RATE: usize = 200;

/// Growing by fewer slots than this is forced up to it, so growth rates
/// close to 100 cannot stall the buffer.
const MIN_GROWTH: usize = 4;

/// A FIFO queue backed by a growable circular buffer.
///
/// `front` is the exact index of the oldest element; `rear` is one position
/// past the newest, circularly, so when the buffer is full `front == rear`.
/// When the buffer fills up and growth is not locked it is reallocated and
/// the wrapped portion with the fewest elements is shifted, keeping the
/// relocation cost low.
#[derive(Debug, Clone)]
pub struct RingQueue<T> {
    buffer: Vec<Option<T>>,
    front: usize,
    rear: usize,
    len: usize,
    growth_rate: usize,
    locked: bool,
    version: u64,
}

impl<T> RingQueue<T> {
    /// Creates a queue with the default capacity of 32 and growth rate of
    /// 200 (the buffer doubles on each growth).
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY, DEFAULT_GROWTH_RATE)
            .expect("default configuration is valid")
    }

    /// Creates a queue with a caller-chosen initial capacity and growth
    /// rate (a percentage multiplier applied on each growth).
    ///
    /// # Errors
    ///
    /// Returns `QueueError::InvalidCapacity` if `capacity` is 0 or
    /// `QueueError::InvalidGrowthRate` if `growth_rate` is not above 100.
    pub fn with_capacity(capacity: usize, growth_rate: usize) -> Result<Self, QueueError> {
        if capacity == 0 {
            return Err(QueueError::InvalidCapacity { capacity });
        }
        if growth_rate <= 100 {
            return Err(QueueError::InvalidGrowthRate { growth_rate });
        }

        let mut buffer = Vec::new();
        buffer.resize_with(capacity, || None);

        Ok(Self {
            buffer,
            front: 0,
            rear: 0,
            len: 0,
            growth_rate,
            locked: false,
            version: 0,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True if the next enqueue needs the buffer to grow.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn growth_rate(&self) -> usize {
        self.growth_rate
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// True if `additional` more elements fit without a reallocation.
    #[must_use]
    pub fn fits(&self, additional: usize) -> bool {
        self.len
            .checked_add(additional)
            .is_some_and(|total| total <= self.capacity())
    }

    /// Modification counter, incremented on every structural mutation.
    /// Detached cursors compare against it before each step.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Changes the growth rate applied on the next buffer growth.
    ///
    /// # Errors
    ///
    /// Returns `QueueError::InvalidGrowthRate` if `growth_rate` is not
    /// above 100.
    pub fn set_growth_rate(&mut self, growth_rate: usize) -> Result<(), QueueError> {
        if growth_rate <= 100 {
            return Err(QueueError::InvalidGrowthRate { growth_rate });
        }
        self.growth_rate = growth_rate;
        Ok(())
    }

    /// Disables buffer growth. A full, locked queue rejects insertions
    /// until it is unlocked or an element is removed.
    pub fn lock_capacity(&mut self) {
        self.locked = true;
    }

    /// Re-enables buffer growth.
    pub fn unlock_capacity(&mut self) {
        self.locked = false;
    }

    /// Adds an element at the rear of the queue, growing the buffer first
    /// if it is full.
    ///
    /// # Errors
    ///
    /// Returns an `EnqueueError` carrying the element back when the queue
    /// is full and locked, or when the reallocation fails. Either way the
    /// queue is left unchanged.
    pub fn enqueue(&mut self, element: T) -> Result<(), EnqueueError<T>> {
        if self.is_full() {
            if let Err(reason) = self.grow() {
                return Err(EnqueueError { element, reason });
            }
        }

        self.buffer[self.rear] = Some(element);
        self.rear = (self.rear + 1) % self.capacity();
        self.len += 1;
        self.version += 1;

        Ok(())
    }

    /// Removes and returns the element at the front of the queue.
    ///
    /// # Errors
    ///
    /// Returns `QueueError::Empty` if the queue has no elements.
    pub fn dequeue(&mut self) -> Result<T, QueueError> {
        if self.is_empty() {
            return Err(QueueError::Empty);
        }

        let element = self.buffer[self.front]
            .take()
            .expect("front slot is occupied when the queue is non-empty");
        self.front = (self.front + 1) % self.capacity();
        self.len -= 1;
        self.version += 1;

        Ok(element)
    }

    /// The oldest element (the next to be dequeued), or `None` if empty.
    #[must_use]
    pub fn peek_front(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.buffer[self.front].as_ref()
    }

    /// The newest element (the last to be dequeued), or `None` if empty.
    #[must_use]
    pub fn peek_rear(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        let real_rear = if self.rear == 0 {
            self.capacity() - 1
        } else {
            self.rear - 1
        };
        self.buffer[real_rear].as_ref()
    }

    /// Drops every element and resets the indices. Capacity, growth rate
    /// and lock state are kept.
    pub fn clear(&mut self) {
        for slot in &mut self.buffer {
            *slot = None;
        }
        self.front = 0;
        self.rear = 0;
        self.len = 0;
        self.version += 1;
    }

    /// Iterator over the logical sequence, front to rear.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Detached cursor over the logical sequence. Unlike `iter`, a cursor
    /// does not borrow the queue; it is re-validated against the queue's
    /// `version` on every step and fails once the queue has been mutated.
    #[must_use]
    pub fn cursor(&self) -> QueueCursor {
        QueueCursor::new(self.version)
    }

    pub(crate) fn logical(&self, offset: usize) -> Option<&T> {
        if offset >= self.len {
            return None;
        }
        self.buffer[(self.front + offset) % self.capacity()].as_ref()
    }

    /// Reallocates the buffer according to the growth rate and
    /// re-linearizes the occupied region. Only called when the buffer is
    /// full (`front == rear`). A pure re-layout: the logical sequence is
    /// unchanged.
    fn grow(&mut self) -> Result<(), QueueError> {
        if self.locked {
            return Err(QueueError::Locked);
        }

        let old_capacity = self.capacity();
        let mut new_capacity = old_capacity * self.growth_rate / 100;
        if new_capacity - old_capacity < MIN_GROWTH {
            new_capacity = old_capacity + MIN_GROWTH;
        }

        // On failure nothing has been touched yet; the queue stays usable
        // at its old capacity.
        self.buffer.try_reserve_exact(new_capacity - old_capacity)?;
        self.buffer.resize_with(new_capacity, || None);

        let real_rear = if self.rear == 0 {
            old_capacity - 1
        } else {
            self.rear - 1
        };

        if real_rear < self.front {
            // The occupied region wraps around the old end. Move whichever
            // portion is smaller.
            if old_capacity - self.front < self.rear {
                // Shift the right portion against the new end of the buffer
                let shifted = old_capacity - self.front;
                for offset in 0..shifted {
                    let from = old_capacity - 1 - offset;
                    let to = new_capacity - 1 - offset;
                    self.buffer[to] = self.buffer[from].take();
                }
                self.front = new_capacity - shifted;
            } else {
                // Append the left portion after the old right portion. With
                // a growth rate under 150 the rear can wrap around again.
                let mut to = old_capacity;
                for from in 0..self.rear {
                    self.buffer[to] = self.buffer[from].take();
                    to = (to + 1) % new_capacity;
                }
                self.rear = (old_capacity + self.rear) % new_capacity;
            }
        } else if self.rear == 0 {
            // Full without wrapping (front == rear == 0): the rear can now
            // extend past the old end instead of wrapping.
            self.rear = old_capacity;
        } else {
            unreachable!("grow called on a queue that is not full");
        }

        Ok(())
    }
}

impl<T: PartialEq> RingQueue<T> {
    /// True if an equal element is present.
    #[must_use]
    pub fn contains(&self, element: &T) -> bool {
        self.iter().any(|e| e == element)
    }
}

impl<T: Clone> RingQueue<T> {
    /// Deep-copies the logical sequence, front to rear, into a `Vec`.
    ///
    /// An empty queue yields an empty `Vec`, not an error; emptiness is
    /// already observable through [`RingQueue::is_empty`].
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> Default for RingQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Element-wise equality over the logical sequences; queues of different
/// lengths are never equal.
impl<T: PartialEq> PartialEq for RingQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for RingQueue<T> {}

/// Lexicographic order over the logical sequences, compared over the
/// shorter of the two; all else equal, the longer queue is greater.
impl<T: Ord> Ord for RingQueue<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Ord> PartialOrd for RingQueue<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
