use thiserror::Error;

/// Error types for `RedBlackTree` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum TreeError {
    /// No node matched the requested key
    #[error("key not found in the tree")]
    NotFound,
    /// Operation requires at least one element
    #[error("tree is empty")]
    Empty,
    /// Requested size limit is below the current element count
    #[error("invalid limit: {limit} is below the current size {len}")]
    InvalidLimit {
        /// Limit that was requested
        limit: usize,
        /// Current amount of elements in the tree
        len: usize,
    },
    /// The tree was structurally modified after the cursor was created
    #[error("stale cursor: the tree was modified after the cursor was created")]
    StaleCursor,
}

/// Error returned by a rejected insertion. The rejected key travels back to
/// the caller inside the error; the tree never drops input it did not accept.
#[derive(Error, Debug)]
pub enum InsertError<K> {
    /// An equal key (per `Ord`) is already present
    #[error("key is already present in the tree")]
    Duplicate {
        /// The rejected key
        key: K,
    },
    /// The tree is at its configured size limit
    #[error("tree is at its size limit of {limit}")]
    Full {
        /// The rejected key
        key: K,
        /// The configured limit
        limit: usize,
    },
}

impl<K> InsertError<K> {
    /// Recovers ownership of the rejected key.
    #[must_use]
    pub fn into_key(self) -> K {
        match self {
            Self::Duplicate { key } | Self::Full { key, .. } => key,
        }
    }
}
