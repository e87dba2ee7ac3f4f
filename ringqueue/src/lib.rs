//! `RingQueue`: a FIFO queue over a growable circular buffer.
//!
//! Elements are stored in a ring: `front` indexes the oldest element and
//! `rear` sits one position past the newest, wrapping around the buffer's
//! end. When the buffer fills up it grows by a configurable percentage
//! (never by fewer than 4 slots), and the wrapped portion with the fewest
//! elements is relocated, so a growth moves as little data as possible.
//! Growth can be locked, turning the queue into a bounded one.
//!
//! ```
//! use ringqueue::RingQueue;
//!
//! let mut queue = RingQueue::with_capacity(4, 200).unwrap();
//! for i in 0..5 {
//!     queue.enqueue(i).unwrap(); // the fifth enqueue grows the buffer
//! }
//!
//! assert_eq!(queue.capacity(), 8);
//! assert_eq!(queue.peek_front(), Some(&0));
//! assert_eq!(queue.peek_rear(), Some(&4));
//!
//! // Strict FIFO, growth never reorders
//! for i in 0..5 {
//!     assert_eq!(queue.dequeue().unwrap(), i);
//! }
//! assert!(queue.is_empty());
//! ```
//!
//! # Ownership
//!
//! The queue owns an element from the moment `enqueue` succeeds until
//! `dequeue` hands it back, or `clear` drops it. A rejected enqueue (full
//! and locked, or failed reallocation) returns the element inside
//! [`EnqueueError`]; the queue never drops input it did not accept, and a
//! failed growth leaves it unchanged and usable.
//!
//! ```
//! use ringqueue::{QueueError, RingQueue};
//!
//! let mut queue = RingQueue::with_capacity(2, 200).unwrap();
//! queue.lock_capacity();
//! queue.enqueue("a").unwrap();
//! queue.enqueue("b").unwrap();
//!
//! let err = queue.enqueue("c").unwrap_err();
//! assert_eq!(err.reason, QueueError::Locked);
//! assert_eq!(err.into_element(), "c");
//! assert_eq!(queue.len(), 2);
//! ```
//!
//! # Cursors
//!
//! Besides the borrowing [`iter`](RingQueue::iter), the queue offers a
//! detached [`QueueCursor`] that validates the queue's modification counter
//! on every step and fails fast with [`QueueError::StaleCursor`] once the
//! queue has been mutated underneath it.

mod error;
mod iter;
mod queue;

pub use error::{EnqueueError, QueueError};
pub use iter::{Iter, QueueCursor};
pub use queue::RingQueue;
