use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;

use tracing::trace;

use crate::cursor::Cursor;
use crate::inorder::IterInorder;

/// A single node of the binary search tree, owning both of its subtrees
///
/// A `Node` is always a non-empty tree: it is created holding a value and can only ever grow. An
/// empty tree is represented as `Option<Node<T>>` (see [`BSTree`](crate::BSTree)).
///
/// BST properties: For each node with value `v`:
/// - The value of each node in the left subtree is less than *or equal to* `v`
/// - The value of each node in the right subtree is greater than `v`
///
/// Duplicates are kept. An inserted value equal to an existing one is routed into the left
/// subtree of that node.
pub struct Node<T> {
    value: T,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

/// Shows this node's value and the values of its direct children only
impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("left", &self.left().map(|left| left.value()))
            .field("right", &self.right().map(|right| right.value()))
            .finish()
    }
}

impl<T: Clone> Clone for Node<T> {
    fn clone(&self) -> Self {
        let mut root = Node::new(self.value.clone());

        {
            // Pairs of (node being copied, its copy)
            let mut stack = vec![(self, &mut root)];
            while let Some((source, target)) = stack.pop() {
                let Node {left, right, ..} = target;
                *left = source.left().map(|node| Box::new(Node::new(node.value.clone())));
                *right = source.right().map(|node| Box::new(Node::new(node.value.clone())));

                if let (Some(source), Some(target)) = (source.left(), left.as_deref_mut()) {
                    stack.push((source, target));
                }
                if let (Some(source), Some(target)) = (source.right(), right.as_deref_mut()) {
                    stack.push((source, target));
                }
            }
        }

        root
    }
}

/// Structural equality: same shape and equal values at every position
impl<T: PartialEq> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];
        while let Some((left, right)) = stack.pop() {
            if left.value != right.value {
                return false;
            }

            for children in [(left.left(), right.left()), (left.right(), right.right())].iter() {
                match *children {
                    (Some(left), Some(right)) => stack.push((left, right)),
                    (None, None) => {},
                    _ => return false,
                }
            }
        }

        true
    }
}

impl<T: Eq> Eq for Node<T> {}

impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        // Unlink the subtrees one node at a time so that dropping a degenerate (list-shaped) tree
        // does not recurse once per level
        let mut stack = Vec::new();
        stack.extend(self.left.take());
        stack.extend(self.right.take());

        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T> Node<T> {
    /// Creates a leaf node with no children
    ///
    /// # Examples
    ///
    /// ```
    /// use inorder_bst::Node;
    ///
    /// let node = Node::new(4);
    /// assert_eq!(node.value(), &4);
    /// assert!(node.left().is_none());
    /// assert!(node.right().is_none());
    /// ```
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Returns the value stored in this node
    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn has_left(&self) -> bool {
        self.left.is_some()
    }

    pub fn has_right(&self) -> bool {
        self.right.is_some()
    }

    /// Returns the left child node (subtree) of this node, if any
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// Returns the right child node (subtree) of this node, if any
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Returns a cursor positioned at the smallest value of this subtree
    ///
    /// Any node can be used as the starting point, so calling this on a subtree yields only the
    /// values of that subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use inorder_bst::Node;
    ///
    /// let mut root = Node::new(4);
    /// root.extend(vec![2, 6, 1, 3]);
    ///
    /// let mut it = root.begin();
    /// let mut values = Vec::new();
    /// while it != root.end() {
    ///     values.push(*it.value().unwrap());
    ///     it.advance();
    /// }
    /// assert_eq!(values, &[1, 2, 3, 4, 6]);
    ///
    /// // Restarting from the left subtree only walks that subtree
    /// let left = root.left().unwrap();
    /// let values: Vec<_> = left.iter().copied().collect();
    /// assert_eq!(values, &[1, 2, 3]);
    /// ```
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::begin(Some(self))
    }

    /// Returns the exhausted cursor that every traversal of this tree ends at
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::end()
    }

    /// Performs an in-order traversal of this subtree
    pub fn iter(&self) -> IterInorder<'_, T> {
        IterInorder::new(Some(self))
    }

    /// Returns the number of nodes in this subtree
    ///
    /// Time complexity: `O(n)`
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.left());
            stack.extend(node.right());
        }

        count
    }

    /// Returns the number of nodes on the longest path from this node down to a leaf
    ///
    /// A single leaf has a height of 1.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = vec![(self, 1)];
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left().map(|left| (left, depth + 1)));
            stack.extend(node.right().map(|right| (right, depth + 1)));
        }

        height
    }
}

impl<T: Ord> Node<T> {
    /// Inserts a new value into this subtree
    ///
    /// Exactly one new leaf is attached. No existing node is moved. A value equal to a value
    /// already in the tree is placed in the left subtree of the matching node.
    ///
    /// Time complexity: `O(depth)`
    ///
    /// # Examples
    ///
    /// ```
    /// use inorder_bst::Node;
    ///
    /// let mut root = Node::new(4);
    /// root.insert(2);
    /// root.insert(4);
    /// root.insert(5);
    ///
    /// assert_eq!(root.left().map(|n| *n.value()), Some(2));
    /// assert_eq!(root.right().map(|n| *n.value()), Some(5));
    /// // The duplicate 4 ends up in the left subtree
    /// assert_eq!(root.left().and_then(|n| n.right()).map(|n| *n.value()), Some(4));
    /// ```
    pub fn insert(&mut self, value: T) {
        let mut depth = 1;
        let mut current = Some(self);
        while let Some(node) = current.take() {
            if value <= node.value {
                if !node.has_left() {
                    node.left = Some(Box::new(Node::new(value)));
                    break;
                }
                current = node.left.as_deref_mut();
            } else {
                if !node.has_right() {
                    node.right = Some(Box::new(Node::new(value)));
                    break;
                }
                current = node.right.as_deref_mut();
            }

            depth += 1;
        }

        trace!(depth, "inserted node");
    }

    /// Returns `true` if a value equal to `value` is stored in this subtree
    ///
    /// The value may be any borrowed form of the tree's value type, but the ordering on the
    /// borrowed form must match the ordering on the value type.
    ///
    /// Time complexity: `O(depth)`
    pub fn contains<Q>(&self, value: &Q) -> bool
        where T: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        let mut current = Some(self);
        while let Some(node) = current {
            match value.cmp(node.value().borrow()) {
                Ordering::Less => current = node.left(),
                Ordering::Greater => current = node.right(),
                Ordering::Equal => return true,
            }
        }

        false
    }
}

impl<T: Ord> Extend<T> for Node<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a Node<T> {
    type Item = &'a T;
    type IntoIter = IterInorder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
