use core::cmp::Ordering;
use core::mem;

use crate::error::{InsertError, TreeError};
use crate::iter::{Iter, TreeCursor};

/// Node color. Every `None` child link counts as black.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Color {
    Red,
    Black,
}

#[derive(Debug, Clone)]
pub(crate) struct Node<K> {
    pub(crate) key: K,
    pub(crate) color: Color,
    pub(crate) parent: Option<usize>,
    pub(crate) left: Option<usize>,
    pub(crate) right: Option<usize>,
}

/// Arena slot. Vacant slots form an intrusive free list so node ids stay
/// stable across removals.
#[derive(Debug, Clone)]
enum Slot<K> {
    Occupied(Node<K>),
    Vacant(Option<usize>),
}

/// An ordered set backed by a red-black tree.
///
/// Nodes live in an index arena; parent links are plain indices, never a
/// second owner. Duplicate keys are rejected, not overwritten.
#[derive(Debug, Clone)]
pub struct RedBlackTree<K> {
    slots: Vec<Slot<K>>,
    free: Option<usize>,
    root: Option<usize>,
    len: usize,
    limit: usize,
    version: u64,
}

impl<K> RedBlackTree<K> {
    /// Creates an empty tree with no size limit.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: None,
            root: None,
            len: 0,
            limit: 0,
            version: 0,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The tree's size limit; 0 means unbounded.
    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// True if a positive limit is set and the tree has reached it.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.limit > 0 && self.len >= self.limit
    }

    /// Modification counter, incremented on every structural mutation.
    /// Detached cursors compare against it before each step.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Caps the amount of elements the tree accepts. A limit of 0 removes
    /// the cap.
    ///
    /// # Errors
    ///
    /// Returns `TreeError::InvalidLimit` if the requested positive limit is
    /// below the current size.
    pub fn set_limit(&mut self, limit: usize) -> Result<(), TreeError> {
        if limit > 0 && self.len > limit {
            return Err(TreeError::InvalidLimit {
                limit,
                len: self.len,
            });
        }
        self.limit = limit;
        Ok(())
    }

    /// Smallest key, or `None` if the tree is empty.
    #[must_use]
    pub fn min(&self) -> Option<&K> {
        self.root.map(|r| &self.node(self.minimum(r)).key)
    }

    /// Largest key, or `None` if the tree is empty.
    #[must_use]
    pub fn max(&self) -> Option<&K> {
        self.root.map(|r| &self.node(self.maximum(r)).key)
    }

    /// The element `pop` would remove next (the minimum), without removing
    /// it.
    #[must_use]
    pub fn peek(&self) -> Option<&K> {
        self.min()
    }

    /// Removes and returns the minimum element.
    ///
    /// # Errors
    ///
    /// Returns `TreeError::Empty` if the tree has no elements.
    pub fn pop(&mut self) -> Result<K, TreeError> {
        let root = self.root.ok_or(TreeError::Empty)?;
        let target = self.minimum(root);
        let key = self.remove_node(target);
        self.len -= 1;
        self.version += 1;
        Ok(key)
    }

    /// Drops every element and resets the tree to empty. The size limit is
    /// kept.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
        self.root = None;
        self.len = 0;
        self.version += 1;
    }

    /// In-order iterator over the keys, strictly increasing.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K> {
        self.into_iter()
    }

    /// Detached cursor for in-order traversal. Unlike `iter`, a cursor does
    /// not borrow the tree; it is re-validated against the tree's `version`
    /// on every step and fails once the tree has been mutated.
    #[must_use]
    pub fn cursor(&self) -> TreeCursor {
        TreeCursor::new(self.root.map(|r| self.minimum(r)), self.version)
    }

    pub(crate) fn first_id(&self) -> Option<usize> {
        self.root.map(|r| self.minimum(r))
    }

    pub(crate) fn key_of(&self, id: usize) -> &K {
        &self.node(id).key
    }

    fn node(&self, id: usize) -> &Node<K> {
        match &self.slots[id] {
            Slot::Occupied(node) => node,
            Slot::Vacant(_) => unreachable!("vacant slot reached through a live link"),
        }
    }

    fn node_mut(&mut self, id: usize) -> &mut Node<K> {
        match &mut self.slots[id] {
            Slot::Occupied(node) => node,
            Slot::Vacant(_) => unreachable!("vacant slot reached through a live link"),
        }
    }

    fn color_of(&self, id: Option<usize>) -> Color {
        id.map_or(Color::Black, |id| self.node(id).color)
    }

    fn set_color(&mut self, id: usize, color: Color) {
        self.node_mut(id).color = color;
    }

    fn parent_of(&self, id: usize) -> Option<usize> {
        self.node(id).parent
    }

    fn left_of(&self, id: usize) -> Option<usize> {
        self.node(id).left
    }

    fn right_of(&self, id: usize) -> Option<usize> {
        self.node(id).right
    }

    fn minimum(&self, mut id: usize) -> usize {
        while let Some(left) = self.left_of(id) {
            id = left;
        }
        id
    }

    fn maximum(&self, mut id: usize) -> usize {
        while let Some(right) = self.right_of(id) {
            id = right;
        }
        id
    }

    /// In-order successor, walking up through parent links when the right
    /// subtree is exhausted.
    pub(crate) fn successor(&self, id: usize) -> Option<usize> {
        if let Some(right) = self.right_of(id) {
            return Some(self.minimum(right));
        }
        let mut child = id;
        let mut scan = self.parent_of(id);
        while let Some(up) = scan {
            if self.right_of(up) != Some(child) {
                break;
            }
            child = up;
            scan = self.parent_of(up);
        }
        scan
    }

    fn alloc(&mut self, key: K) -> usize {
        // All new nodes are red
        let node = Node {
            key,
            color: Color::Red,
            parent: None,
            left: None,
            right: None,
        };
        match self.free {
            Some(id) => {
                let next = match self.slots[id] {
                    Slot::Vacant(next) => next,
                    Slot::Occupied(_) => unreachable!("occupied slot on the free list"),
                };
                self.free = next;
                self.slots[id] = Slot::Occupied(node);
                id
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                self.slots.len() - 1
            }
        }
    }

    /// Returns the slot to the free list and hands the key back.
    fn release(&mut self, id: usize) -> K {
        let slot = mem::replace(&mut self.slots[id], Slot::Vacant(self.free));
        self.free = Some(id);
        match slot {
            Slot::Occupied(node) => node.key,
            Slot::Vacant(_) => unreachable!("released a vacant slot"),
        }
    }

    fn swap_keys(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let (head, tail) = self.slots.split_at_mut(hi);
        match (&mut head[lo], &mut tail[0]) {
            (Slot::Occupied(x), Slot::Occupied(y)) => mem::swap(&mut x.key, &mut y.key),
            _ => unreachable!("key swap between vacant slots"),
        }
    }

    fn rotate_left(&mut self, x: usize) {
        let y = self.right_of(x).expect("left rotation pivot has a right child");
        let inner = self.left_of(y);
        self.node_mut(x).right = inner;
        if let Some(inner) = inner {
            self.node_mut(inner).parent = Some(x);
        }
        let up = self.parent_of(x);
        self.node_mut(y).parent = up;
        match up {
            None => self.root = Some(y),
            Some(up) => {
                if self.left_of(up) == Some(x) {
                    self.node_mut(up).left = Some(y);
                } else {
                    self.node_mut(up).right = Some(y);
                }
            }
        }
        self.node_mut(y).left = Some(x);
        self.node_mut(x).parent = Some(y);
    }

    fn rotate_right(&mut self, x: usize) {
        let y = self.left_of(x).expect("right rotation pivot has a left child");
        let inner = self.right_of(y);
        self.node_mut(x).left = inner;
        if let Some(inner) = inner {
            self.node_mut(inner).parent = Some(x);
        }
        let up = self.parent_of(x);
        self.node_mut(y).parent = up;
        match up {
            None => self.root = Some(y),
            Some(up) => {
                if self.left_of(up) == Some(x) {
                    self.node_mut(up).left = Some(y);
                } else {
                    self.node_mut(up).right = Some(y);
                }
            }
        }
        self.node_mut(y).right = Some(x);
        self.node_mut(x).parent = Some(y);
    }
}

impl<K: Ord> RedBlackTree<K> {
    /// Adds a key to the tree. Duplicates are rejected.
    ///
    /// # Errors
    ///
    /// Returns `InsertError::Duplicate` if an equal key is already present,
    /// or `InsertError::Full` if the tree is at its size limit. Either way
    /// the rejected key is handed back inside the error.
    pub fn insert(&mut self, key: K) -> Result<(), InsertError<K>> {
        if self.is_full() {
            return Err(InsertError::Full {
                key,
                limit: self.limit,
            });
        }

        let mut parent = None;
        let mut scan = self.root;
        let mut went_left = false;
        while let Some(id) = scan {
            parent = Some(id);
            match key.cmp(&self.node(id).key) {
                Ordering::Less => {
                    scan = self.left_of(id);
                    went_left = true;
                }
                Ordering::Greater => {
                    scan = self.right_of(id);
                    went_left = false;
                }
                Ordering::Equal => return Err(InsertError::Duplicate { key }),
            }
        }

        let id = self.alloc(key);
        match parent {
            None => {
                // First node becomes the black root, no fixup needed
                self.set_color(id, Color::Black);
                self.root = Some(id);
            }
            Some(parent) => {
                self.node_mut(id).parent = Some(parent);
                if went_left {
                    self.node_mut(parent).left = Some(id);
                } else {
                    self.node_mut(parent).right = Some(id);
                }
                self.insert_fixup(id);
            }
        }

        self.len += 1;
        self.version += 1;
        Ok(())
    }

    /// Removes the node matching `key` and returns its key, transferring
    /// ownership back to the caller.
    ///
    /// # Errors
    ///
    /// Returns `TreeError::NotFound` if no equal key is present.
    pub fn remove(&mut self, key: &K) -> Result<K, TreeError> {
        let target = self.find(key).ok_or(TreeError::NotFound)?;
        let removed = self.remove_node(target);
        self.len -= 1;
        self.version += 1;
        Ok(removed)
    }

    /// True if an equal key is present.
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Borrows the stored key equal to `key`, if any.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&K> {
        self.find(key).map(|id| &self.node(id).key)
    }

    /// Drains `other` into `self`, reinserting element by element. Keys
    /// already present in `self` are discarded.
    ///
    /// # Errors
    ///
    /// Returns `InsertError::Full` if `self` reaches its size limit; the
    /// rejected key is inside the error and the remaining elements stay in
    /// `other`.
    pub fn append(&mut self, other: &mut Self) -> Result<(), InsertError<K>> {
        while let Ok(key) = other.pop() {
            match self.insert(key) {
                Ok(()) | Err(InsertError::Duplicate { .. }) => {}
                Err(full @ InsertError::Full { .. }) => return Err(full),
            }
        }
        Ok(())
    }

    fn find(&self, key: &K) -> Option<usize> {
        let mut scan = self.root;
        while let Some(id) = scan {
            match key.cmp(&self.node(id).key) {
                Ordering::Less => scan = self.left_of(id),
                Ordering::Greater => scan = self.right_of(id),
                Ordering::Equal => return Some(id),
            }
        }
        None
    }

    fn insert_fixup(&mut self, mut z: usize) {
        // A red parent implies a black grandparent, so the lookups inside
        // the loop cannot fail.
        while self.color_of(self.parent_of(z)) == Color::Red {
            let parent = self.parent_of(z).expect("red node has a parent");
            let grandparent = self.parent_of(parent).expect("red node has a grandparent");

            if Some(parent) == self.left_of(grandparent) {
                let uncle = self.right_of(grandparent);
                if self.color_of(uncle) == Color::Red {
                    // Red uncle: push blackness down from the grandparent
                    let uncle = uncle.expect("red uncle exists");
                    self.set_color(parent, Color::Black);
                    self.set_color(uncle, Color::Black);
                    self.set_color(grandparent, Color::Red);
                    z = grandparent;
                } else {
                    if Some(z) == self.right_of(parent) {
                        // Left-right skew, straighten first
                        z = parent;
                        self.rotate_left(z);
                    }
                    let parent = self.parent_of(z).expect("red node has a parent");
                    let grandparent =
                        self.parent_of(parent).expect("red node has a grandparent");
                    self.set_color(parent, Color::Black);
                    self.set_color(grandparent, Color::Red);
                    self.rotate_right(grandparent);
                }
            } else {
                let uncle = self.left_of(grandparent);
                if self.color_of(uncle) == Color::Red {
                    let uncle = uncle.expect("red uncle exists");
                    self.set_color(parent, Color::Black);
                    self.set_color(uncle, Color::Black);
                    self.set_color(grandparent, Color::Red);
                    z = grandparent;
                } else {
                    if Some(z) == self.left_of(parent) {
                        // Right-left skew
                        z = parent;
                        self.rotate_right(z);
                    }
                    let parent = self.parent_of(z).expect("red node has a parent");
                    let grandparent =
                        self.parent_of(parent).expect("red node has a grandparent");
                    self.set_color(parent, Color::Black);
                    self.set_color(grandparent, Color::Red);
                    self.rotate_left(grandparent);
                }
            }
        }

        if let Some(root) = self.root {
            self.set_color(root, Color::Black);
        }
    }
}

impl<K> RedBlackTree<K> {
    /// Unlinks and frees one node, returning its key. When the target has
    /// two children its in-order successor is spliced out instead and the
    /// keys are swapped, so the physically removed node has at most one
    /// child.
    fn remove_node(&mut self, z: usize) -> K {
        let y = if self.left_of(z).is_none() || self.right_of(z).is_none() {
            z
        } else {
            let right = self.right_of(z).expect("two-child node has a right child");
            self.minimum(right)
        };

        let x = self.left_of(y).or_else(|| self.right_of(y));
        let y_parent = self.parent_of(y);

        if let Some(x) = x {
            self.node_mut(x).parent = y_parent;
        }
        match y_parent {
            None => self.root = x,
            Some(parent) => {
                if self.left_of(parent) == Some(y) {
                    self.node_mut(parent).left = x;
                } else {
                    self.node_mut(parent).right = x;
                }
            }
        }

        // After the swap, y holds the key being removed and z keeps the
        // successor's key.
        self.swap_keys(y, z);

        if self.node(y).color == Color::Black {
            self.remove_fixup(x, y_parent);
        }

        self.release(y)
    }

    /// Restores the black-height invariant after a black node was spliced
    /// out. `x` carries the double-black deficiency and may be a vacant
    /// (`None`) position, which is why its parent is tracked separately.
    fn remove_fixup(&mut self, mut x: Option<usize>, mut parent: Option<usize>) {
        while x != self.root && self.color_of(x) == Color::Black {
            let p = match parent {
                Some(p) => p,
                None => break,
            };

            if self.left_of(p) == x {
                let mut sibling = self.right_of(p);
                if self.color_of(sibling) == Color::Red {
                    let s = sibling.expect("red sibling exists");
                    self.set_color(s, Color::Black);
                    self.set_color(p, Color::Red);
                    self.rotate_left(p);
                    sibling = self.right_of(p);
                }
                // The double-black side is one black short, so the sibling
                // side must have at least one real node.
                let s = sibling.expect("double-black node has a sibling");
                if self.color_of(self.left_of(s)) == Color::Black
                    && self.color_of(self.right_of(s)) == Color::Black
                {
                    self.set_color(s, Color::Red);
                    x = Some(p);
                    parent = self.parent_of(p);
                } else {
                    let s = if self.color_of(self.right_of(s)) == Color::Black {
                        // Near nephew red, far nephew black: rotate them
                        // into the far position first
                        if let Some(near) = self.left_of(s) {
                            self.set_color(near, Color::Black);
                        }
                        self.set_color(s, Color::Red);
                        self.rotate_right(s);
                        self.right_of(p).expect("double-black node has a sibling")
                    } else {
                        s
                    };
                    self.set_color(s, self.color_of(Some(p)));
                    self.set_color(p, Color::Black);
                    if let Some(far) = self.right_of(s) {
                        self.set_color(far, Color::Black);
                    }
                    self.rotate_left(p);
                    x = self.root;
                    parent = None;
                }
            } else {
                let mut sibling = self.left_of(p);
                if self.color_of(sibling) == Color::Red {
                    let s = sibling.expect("red sibling exists");
                    self.set_color(s, Color::Black);
                    self.set_color(p, Color::Red);
                    self.rotate_right(p);
                    sibling = self.left_of(p);
                }
                let s = sibling.expect("double-black node has a sibling");
                if self.color_of(self.left_of(s)) == Color::Black
                    && self.color_of(self.right_of(s)) == Color::Black
                {
                    self.set_color(s, Color::Red);
                    x = Some(p);
                    parent = self.parent_of(p);
                } else {
                    let s = if self.color_of(self.left_of(s)) == Color::Black {
                        if let Some(near) = self.right_of(s) {
                            self.set_color(near, Color::Black);
                        }
                        self.set_color(s, Color::Red);
                        self.rotate_left(s);
                        self.left_of(p).expect("double-black node has a sibling")
                    } else {
                        s
                    };
                    self.set_color(s, self.color_of(Some(p)));
                    self.set_color(p, Color::Black);
                    if let Some(far) = self.left_of(s) {
                        self.set_color(far, Color::Black);
                    }
                    self.rotate_right(p);
                    x = self.root;
                    parent = None;
                }
            }
        }

        if let Some(x) = x {
            self.set_color(x, Color::Black);
        }
    }
}

impl<K> Default for RedBlackTree<K> {
    fn default() -> Self {
        Self::new()
    }
}
