use std::fmt;
use std::borrow::Borrow;
use std::iter::FromIterator;

use crate::cursor::Cursor;
use crate::inorder::IterInorder;
use crate::node::Node;

/// An unbalanced binary search tree that may be empty
///
/// This owns an optional root [`Node`] and keeps track of how many values have been inserted.
/// Duplicate values are kept (see [`Node::insert`] for where they are placed).
#[derive(Clone)]
pub struct BSTree<T> {
    root: Option<Node<T>>,
    len: usize,
}

impl<T> Default for BSTree<T> {
    fn default() -> Self {
        Self {
            root: None,
            len: 0,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for BSTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter_inorder()).finish()
    }
}

impl<T: Ord> PartialEq for BSTree<T> {
    fn eq(&self, other: &Self) -> bool {
        // Two trees holding the same values may be shaped differently depending on insertion
        // order, so compare the in-order sequences rather than the structure
        self.len() == other.len() && self.iter_inorder().eq(other.iter_inorder())
    }
}

impl<T: Ord> Eq for BSTree<T> {}

impl<T> BSTree<T> {
    /// Creates an empty `BSTree`
    ///
    /// # Examples
    ///
    /// ```
    /// use inorder_bst::BSTree;
    /// let tree: BSTree<&str> = BSTree::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of values in the tree, duplicates included
    ///
    /// Time complexity: `O(1)`
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree holds no values
    ///
    /// Time complexity: `O(1)`
    pub fn is_empty(&self) -> bool {
        debug_assert!(self.len != 0 || self.root.is_none());
        self.len == 0
    }

    /// Returns the height of the tree, or 0 if it is empty
    pub fn height(&self) -> usize {
        self.root().map_or(0, Node::height)
    }

    /// Returns the root node of the tree, or `None` if the tree is empty
    ///
    /// This is a low-level API meant to be used for implementing custom traversals. The root is
    /// always the first value that was inserted.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_ref()
    }

    /// Returns a cursor positioned at the smallest value, or an exhausted cursor if the tree is
    /// empty
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::begin(self.root())
    }

    /// Returns the exhausted cursor that every traversal ends at
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::end()
    }

    /// Performs an in-order traversal of the tree
    pub fn iter_inorder(&self) -> IterInorder<'_, T> {
        IterInorder::new(self.root())
    }

    /// Clears the tree, removing all values
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

impl<T: Ord> BSTree<T> {
    /// Inserts a value into the tree
    ///
    /// The first value inserted becomes the root. Inserting never fails, even if an equal value
    /// is already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use inorder_bst::BSTree;
    ///
    /// let mut tree = BSTree::new();
    /// tree.insert(2);
    /// tree.insert(2);
    /// tree.insert(1);
    /// assert_eq!(tree.len(), 3);
    ///
    /// let values: Vec<_> = tree.iter_inorder().copied().collect();
    /// assert_eq!(values, &[1, 2, 2]);
    /// ```
    pub fn insert(&mut self, value: T) {
        match &mut self.root {
            Some(root) => root.insert(value),
            None => self.root = Some(Node::new(value)),
        }

        self.len += 1;
    }

    /// Returns `true` if the tree contains a value equal to `value`
    ///
    /// The value may be any borrowed form of the tree's value type, but the ordering on the
    /// borrowed form must match the ordering on the value type.
    ///
    /// Time complexity: `O(height)`
    pub fn contains<Q>(&self, value: &Q) -> bool
        where T: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        self.root().map_or(false, |root| root.contains(value))
    }
}

impl<T> From<Node<T>> for BSTree<T> {
    fn from(root: Node<T>) -> Self {
        Self {
            len: root.len(),
            root: Some(root),
        }
    }
}

impl<T: Ord> Extend<T> for BSTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for BSTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, T> IntoIterator for &'a BSTree<T> {
    type Item = &'a T;
    type IntoIter = IterInorder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_inorder()
    }
}
