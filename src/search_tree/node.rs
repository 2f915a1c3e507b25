use core::fmt::Debug;

/// A node of a search tree.
///
/// Created by the search tree internally and only publicly exposed so that tree storages' generic arguments could be specified.
///
/// A node with no child in a slot holds no index there — absence of a child is expressed by `None`, never by a sentinel node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Node<K, I>
where I: Clone + Debug + Eq,
{
    pub(super) key: K,
    pub(super) parent: Option<I>,
    pub(super) left: Option<I>,
    pub(super) right: Option<I>,
}
impl<K, I> Node<K, I>
where I: Clone + Debug + Eq,
{
    /// Creates a childless node.
    ///
    /// # Safety
    /// If `parent` is specified, it must be the index of a node which is already present in the same storage, and the caller must immediately link the matching child slot of that node to the index this node gets stored at — a node reachable from the root but not linked back is a corrupted tree.
    #[inline(always)]
    pub(crate) unsafe fn leaf(key: K, parent: Option<I>) -> Self {
        Self {
            key,
            parent,
            left: None,
            right: None,
        }
    }
    /// Creates a root node.
    ///
    /// # Safety
    /// The node should not be added into a tree if it already has a root node, as there can only be one.
    #[inline(always)]
    pub(crate) unsafe fn root(key: K) -> Self {
        /*unsafe*/
        {
            // SAFETY: the root node cannot have a parent, therefore
            // no child slot needs to be linked back to it
            Self::leaf(key, None)
        }
    }
}
