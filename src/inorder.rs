use std::iter::FusedIterator;

use crate::cursor::Cursor;
use crate::node::Node;

/// An iterator over the values of a tree in ascending order
pub struct IterInorder<'a, T> {
    cursor: Cursor<'a, T>,
}

impl<'a, T> Clone for IterInorder<'a, T> {
    fn clone(&self) -> Self {
        Self {
            cursor: self.cursor.clone(),
        }
    }
}

impl<'a, T> IterInorder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            cursor: Cursor::begin(root),
        }
    }
}

impl<'a, T> From<Cursor<'a, T>> for IterInorder<'a, T> {
    /// Continues a traversal from wherever `cursor` is positioned
    fn from(cursor: Cursor<'a, T>) -> Self {
        Self {cursor}
    }
}

impl<'a, T> Iterator for IterInorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.cursor.node()?;
        self.cursor.advance();
        Some(node.value())
    }
}

impl<'a, T> FusedIterator for IterInorder<'a, T> {}
