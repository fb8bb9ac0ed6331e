use std::fmt;
use std::ptr;

use tracing::debug;

use crate::error::{Error, Result};
use crate::node::Node;

/// A position in the in-order traversal of a tree
///
/// A cursor is either positioned at a node, or it is exhausted. All exhausted cursors are equal to
/// each other and to [`Cursor::end`], so the classic loop is:
///
/// ```
/// use inorder_bst::Node;
///
/// let mut root = Node::new("delicious");
/// root.extend(vec!["ballon", "flag", "apple"]);
///
/// let mut it = root.begin();
/// let mut words = Vec::new();
/// while it != root.end() {
///     words.push(*it.value().unwrap());
///     it.advance();
/// }
/// assert_eq!(words, &["apple", "ballon", "delicious", "flag"]);
/// ```
///
/// Cursors borrow the tree they walk, so the tree cannot be modified while any cursor into it is
/// still alive.
pub struct Cursor<'a, T> {
    /// The node whose value is yielded next, `None` once exhausted
    current: Option<&'a Node<T>>,
    /// Ancestors of `current` whose left subtree is being walked. Each one is yielded after
    /// everything above it on the stack, so the top is always the in-order successor of a node
    /// that has no right subtree.
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Clone for Cursor<'a, T> {
    fn clone(&self) -> Self {
        Self {
            current: self.current,
            stack: self.stack.clone(),
        }
    }
}

impl<'a, T: fmt::Debug> fmt::Debug for Cursor<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("current", &self.current.map(|node| node.value()))
            .field("pending", &self.stack.len())
            .finish()
    }
}

/// Compares two cursors by node identity
///
/// Two cursors positioned at different nodes holding equal values are *not* equal.
impl<'a, T> PartialEq for Cursor<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        match (self.current, other.current) {
            (Some(left), Some(right)) => ptr::eq(left, right),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<'a, T> Eq for Cursor<'a, T> {}

impl<'a, T> Cursor<'a, T> {
    /// Creates a cursor positioned at the smallest value of the subtree rooted at `root`
    ///
    /// If `root` is `None`, the cursor is exhausted immediately.
    pub fn begin(root: Option<&'a Node<T>>) -> Self {
        let mut cursor = Self::end();
        if let Some(root) = root {
            let leftmost = cursor.descend_left(root);
            cursor.current = Some(leftmost);
        }

        cursor
    }

    /// Creates an exhausted cursor
    pub fn end() -> Self {
        Self {
            current: None,
            stack: Vec::new(),
        }
    }

    /// Returns true if this cursor has moved past the last value
    pub fn is_end(&self) -> bool {
        self.current.is_none()
    }

    /// Returns the node this cursor is positioned at, if any
    pub fn node(&self) -> Option<&'a Node<T>> {
        self.current
    }

    /// Returns the value at the current position
    ///
    /// Fails with [`Error::Exhausted`] once the cursor has moved past the last value.
    pub fn value(&self) -> Result<&'a T> {
        match self.current {
            Some(node) => Ok(node.value()),
            None => {
                debug!("value requested from exhausted cursor");
                Err(Error::Exhausted)
            },
        }
    }

    /// Moves to the next value in ascending order
    ///
    /// Advancing an exhausted cursor does nothing.
    pub fn advance(&mut self) {
        let node = match self.current {
            Some(node) => node,
            None => return,
        };

        self.current = match node.right() {
            // The successor is the leftmost node of the right subtree
            Some(right) => Some(self.descend_left(right)),
            // Left subtree and node are done, so the nearest pending ancestor is next
            None => self.stack.pop(),
        };
    }

    /// Walks left from `node` as far as possible, recording every node passed on the way
    ///
    /// Returns the leftmost node, which is not pushed.
    fn descend_left(&mut self, mut node: &'a Node<T>) -> &'a Node<T> {
        while let Some(left) = node.left() {
            self.stack.push(node);
            node = left;
        }

        node
    }
}
