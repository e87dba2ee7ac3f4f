//! `RedBlackTree`: an ordered set backed by a self-balancing red-black tree.
//!
//! Nodes live in an index arena (a `Vec` of slots with a free list), so the
//! parent back-references are plain indices and never a second owner. The
//! tree keeps the classic invariants after every operation:
//!
//! - the root is black (or the tree is empty);
//! - a red node never has a red child;
//! - every path from a node down to a missing child crosses the same number
//!   of black nodes;
//! - the in-order key sequence is strictly increasing, with duplicates
//!   rejected rather than overwritten.
//!
//! A tree with `N` elements therefore has height at most `2 * log2(N + 1)`.
//!
//! ```
//! use rbtree::RedBlackTree;
//!
//! let mut tree = RedBlackTree::new();
//! for key in [30, 10, 20] {
//!     tree.insert(key).unwrap();
//! }
//!
//! // Duplicates come back to the caller inside the error
//! let rejected = tree.insert(20).unwrap_err();
//! assert_eq!(rejected.into_key(), 20);
//!
//! // In-order iteration is sorted
//! let keys: Vec<i32> = tree.iter().copied().collect();
//! assert_eq!(keys, [10, 20, 30]);
//!
//! // peek/pop drain from the minimum
//! assert_eq!(tree.peek(), Some(&10));
//! assert_eq!(tree.pop().unwrap(), 10);
//! assert_eq!(tree.len(), 2);
//! ```
//!
//! # Ownership
//!
//! The tree owns a key from the moment `insert` succeeds until `remove` or
//! `pop` hands it back, or `clear` drops it. Rejected insertions return the
//! key inside [`InsertError`]; the tree never drops input it did not accept.
//!
//! # Cursors
//!
//! Besides the borrowing [`iter`](RedBlackTree::iter), the tree offers a
//! detached [`TreeCursor`] that validates the tree's modification counter on
//! every step and fails fast with [`TreeError::StaleCursor`] once the tree
//! has been mutated underneath it.
//!
//! ```
//! use rbtree::{RedBlackTree, TreeError};
//!
//! let mut tree = RedBlackTree::new();
//! tree.insert(1).unwrap();
//! tree.insert(2).unwrap();
//!
//! let mut cursor = tree.cursor();
//! assert_eq!(cursor.next(&tree).unwrap(), Some(&1));
//!
//! tree.insert(3).unwrap();
//! assert_eq!(cursor.next(&tree), Err(TreeError::StaleCursor));
//! ```

mod error;
mod iter;
mod tree;

pub use error::{InsertError, TreeError};
pub use iter::{Iter, TreeCursor};
pub use tree::RedBlackTree;
