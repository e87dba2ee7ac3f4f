use crate::error::TreeError;
use crate::tree::RedBlackTree;

/// Borrowing in-order iterator over a `RedBlackTree`.
///
/// The borrow rules already guarantee the tree cannot change while this
/// iterator is alive, so no version check is needed here.
#[derive(Clone)]
pub struct Iter<'a, K> {
    tree: &'a RedBlackTree<K>,
    next: Option<usize>,
    remaining: usize,
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        self.next = self.tree.successor(id);
        self.remaining -= 1;
        Some(self.tree.key_of(id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

impl<'a, K> IntoIterator for &'a RedBlackTree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            tree: self,
            next: self.first_id(),
            remaining: self.len(),
        }
    }
}

/// Detached in-order cursor.
///
/// A cursor captures the tree's `version` at creation and re-checks it on
/// every step, so a structural mutation between steps is reported as
/// `TreeError::StaleCursor` instead of silently walking a changed tree. The
/// cursor must be stepped against the tree that created it.
#[derive(Debug, Clone)]
pub struct TreeCursor {
    next: Option<usize>,
    version: u64,
}

impl TreeCursor {
    pub(crate) fn new(next: Option<usize>, version: u64) -> Self {
        Self { next, version }
    }

    /// Advances the cursor and borrows the next key in order, or `None`
    /// once the traversal is exhausted.
    ///
    /// # Errors
    ///
    /// Returns `TreeError::StaleCursor` if the tree was structurally
    /// modified after this cursor was created.
    pub fn next<'a, K>(&mut self, tree: &'a RedBlackTree<K>) -> Result<Option<&'a K>, TreeError> {
        if self.version != tree.version() {
            return Err(TreeError::StaleCursor);
        }
        match self.next {
            None => Ok(None),
            Some(id) => {
                self.next = tree.successor(id);
                Ok(Some(tree.key_of(id)))
            }
        }
    }
}
