//! An insertion-ordered binary search tree.
//!
//! Every node of the tree holds one key from a totally ordered domain. Keys in a node's left subtree are strictly less than the node's own key, keys in its right subtree are greater than or equal to it — equal keys always descend to the right. The tree performs no rebalancing: its shape is a pure function of the order in which keys were inserted, so a strictly increasing key sequence degenerates into a right-leaning chain of depth *n*.
//!
//! A tree is never empty — it is created together with its root node and nodes are never removed.
//!
//! # Example
//! ```rust
//! use boxwood::search_tree::SearchTree;
//!
//! // Create the tree from a key sequence. The first key seeds the root, the rest are inserted
//! // with the usual comparison walk. The turbofish there is needed to state that we are using
//! // the default storage method instead of asking the compiler to infer it, which would be
//! // impossible.
//! let mut tree = SearchTree::<_>::from_keys(vec![10, 5, 15, 7, 2, 9, 31]).unwrap();
//!
//! // Let's look around.
//! let root = tree.root();
//! assert_eq!(*root.key(), 10);
//! let left = root.left_child().unwrap();
//! assert_eq!(*left.key(), 5);
//!
//! // The tree can be searched...
//! assert!(tree.contains(&9));
//! assert!(!tree.contains(&8));
//!
//! // ...iterated in sorted order...
//! let sorted = tree.iter().copied().collect::<Vec<_>>();
//! assert_eq!(sorted, [2, 5, 7, 9, 10, 15, 31]);
//!
//! // ...and grown further.
//! tree.insert(8);
//! assert!(tree.contains(&8));
//! ```

use core::fmt::{self, Formatter, Display};

mod base;
mod iter;
mod node;
mod node_ref;
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
mod render;

#[cfg(test)]
mod tests;

pub use base::SearchTree;
pub use iter::Iter;
pub use node::Node;
pub use node_ref::NodeRef;
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
pub use render::Render;

/// The error type returned by [`SearchTree::from_keys`] and its siblings when the provided key sequence is empty.
///
/// A tree cannot exist without a root node, and the root is seeded from the first key of the sequence, so there is nothing to construct from zero keys. There is no recovery path — the caller must supply at least one key.
///
/// [`SearchTree::from_keys`]: struct.SearchTree.html#method.from_keys " "
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct EmptyKeysError;
impl Display for EmptyKeysError {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad("cannot construct a search tree from an empty key sequence")
    }
}
#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl std::error::Error for EmptyKeysError {}

/// A search tree which uses a `Vec` as backing storage.
///
/// The default `SearchTree` type already uses this, so this is only provided for explicitness and consistency.
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
#[allow(unused_qualifications)]
pub type VecSearchTree<K> = SearchTree<K, usize, alloc::vec::Vec<Node<K, usize>>>;

/// A search tree which uses a `SlotMap` as backing storage.
#[cfg(feature = "slotmap")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "slotmap")))]
pub type SlotMapSearchTree<K> =
    SearchTree<K, slotmap::DefaultKey, slotmap::SlotMap<slotmap::DefaultKey, Node<K, slotmap::DefaultKey>>>;
