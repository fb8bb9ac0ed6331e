//! An unbalanced binary search tree with a restartable in-order cursor
//!
//! Trees are built by repeated insertion and read back in ascending order, either through a
//! begin/end [`Cursor`] or through a regular [`Iterator`]. The traversal never recurses: it keeps
//! an explicit stack of the ancestors that still need to be visited.

pub mod cursor;
pub mod error;
pub mod inorder;
pub mod node;
pub mod tree;

pub use cursor::Cursor;
pub use error::{Error, Result};
pub use inorder::IterInorder;
pub use node::Node;
pub use tree::BSTree;

/// Creates a [`Node`] from its first value, then inserts the rest in order
///
/// ```
/// use inorder_bst::bst;
///
/// let root = bst![4, 2, 6];
/// assert_eq!(root.value(), &4);
/// ```
#[macro_export]
macro_rules! bst {
    ($first:expr $(, $value:expr)* $(,)?) => {
        {
            #[allow(unused_mut)]
            let mut _root = $crate::Node::new($first);
            $(
                _root.insert($value);
            )*
            _root
        }
    };
}
