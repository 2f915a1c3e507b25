use core::fmt::Debug;
use crate::storage::{Arena, DefaultArena};
use super::{SearchTree, Node};

/// A reference to a node in a search tree.
///
/// Since this type does not point to the node directly, but rather the tree the node is in and the index of the node in the storage, it can be used to traverse the tree.
///
/// The tree it refers to is borrowed immutably, so the pointee cannot disappear or move for as long as the reference exists — there is no mutable counterpart to this type, because the only mutation a search tree supports is [`insert`], which goes through the tree itself to keep the ordering invariant out of callers' hands.
///
/// [`insert`]: struct.SearchTree.html#method.insert " "
#[derive(Debug)]
pub struct NodeRef<'a, K, I, S = DefaultArena<Node<K, I>>>
where
    S: Arena<Element = Node<K, I>, Index = I>,
    I: Clone + Debug + Eq,
{
    tree: &'a SearchTree<K, I, S>,
    index: I,
}
impl<'a, K, I, S> NodeRef<'a, K, I, S>
where
    S: Arena<Element = Node<K, I>, Index = I>,
    I: Clone + Debug + Eq,
{
    /// Creates a new `NodeRef` pointing to the specified index in the storage, or `None` if it's not present there.
    #[inline]
    pub fn new_raw(tree: &'a SearchTree<K, I, S>, index: I) -> Option<Self> {
        if tree.storage.contains_index(&index) {
            Some(unsafe {
                // SAFETY: we just did an index check
                Self::new_raw_unchecked(tree, index)
            })
        } else {
            None
        }
    }
    /// Creates a new `NodeRef` pointing to the specified index in the storage without doing presence checking.
    ///
    /// # Safety
    /// Causes *immediate* undefined behavior if the specified index is not present in the storage.
    #[inline(always)]
    pub unsafe fn new_raw_unchecked(tree: &'a SearchTree<K, I, S>, index: I) -> Self {
        Self { tree, index }
    }
    /// Returns a reference to the raw storage index for the node.
    #[inline(always)]
    pub fn raw_index(&self) -> &I {
        &self.index
    }
    /// Consumes the reference and returns the underlying raw storage index for the node.
    #[inline(always)]
    pub fn into_raw_index(self) -> I {
        self.index
    }
    /// Returns a reference to the key stored in the node.
    #[inline(always)]
    pub fn key(&self) -> &'a K {
        &self.node().key
    }
    /// Returns a reference to the parent node of the pointee, or `None` if it's the root node.
    #[inline]
    pub fn parent(&self) -> Option<Self> {
        self.node().parent.as_ref().map(|x| unsafe {
            // SAFETY: nodes can never have out-of-bounds parents
            Self::new_raw_unchecked(self.tree, x.clone())
        })
    }
    /// Returns `true` if the node is the root node, `false` otherwise.
    #[inline(always)]
    // const_option is not stable, and so are trait bounds on const fn parameters other than Sized
    #[allow(clippy::missing_const_for_fn)]
    pub fn is_root(&self) -> bool {
        self.node().parent.is_none()
    }
    /// Returns `true` if the node is a *leaf*, i.e. does not have child nodes; `false` otherwise.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        let node = self.node();
        node.left.is_none() && node.right.is_none()
    }
    /// Returns `true` if the node is a *branch*, i.e. has one or two child nodes; `false` otherwise.
    #[inline]
    pub fn is_branch(&self) -> bool {
        !self.is_leaf()
    }
    /// Returns `true` if the node is a *full branch*, i.e. has both a left and a right child; `false` otherwise.
    #[inline]
    pub fn is_full_branch(&self) -> bool {
        let node = self.node();
        node.left.is_some() && node.right.is_some()
    }
    /// Returns a reference to the left child, or `None` if the slot is empty.
    ///
    /// Every key in the left child's subtree is strictly less than the pointee's key.
    pub fn left_child(&self) -> Option<Self> {
        self.node().left.as_ref().map(|x| unsafe {
            // SAFETY: child links are guaranteed to be valid; an index check to make sure that
            // properly holds is below.
            debug_assert!(
                self.tree.storage.contains_index(x),
                "\
debug index check failed: tried to reference index {:?} which is not present in the storage",
                x,
            );
            Self::new_raw_unchecked(self.tree, x.clone())
        })
    }
    /// Returns a reference to the right child, or `None` if the slot is empty.
    ///
    /// Every key in the right child's subtree is greater than or equal to the pointee's key.
    pub fn right_child(&self) -> Option<Self> {
        self.node().right.as_ref().map(|x| unsafe {
            // SAFETY: as above
            debug_assert!(
                self.tree.storage.contains_index(x),
                "\
debug index check failed: tried to reference index {:?} which is not present in the storage",
                x,
            );
            Self::new_raw_unchecked(self.tree, x.clone())
        })
    }
    /// Returns `true` if the node is the left child of its parent, `false` if it's the right one and `None` if it's the root node.
    #[inline]
    pub fn is_left_child(&self) -> Option<bool> {
        let parent = self.parent()?;
        Some(parent.node().left.as_ref() == Some(&self.index))
    }
    /// Returns `true` if the node is the right child of its parent, `false` if it's the left one and `None` if it's the root node.
    #[inline]
    pub fn is_right_child(&self) -> Option<bool> {
        self.is_left_child().map(|x| !x)
    }

    #[inline(always)]
    fn node(&self) -> &'a Node<K, I> {
        unsafe {
            // SAFETY: all existing NodeRefs are guaranteed to not be dangling
            self.tree.storage.get_unchecked(&self.index)
        }
    }
}
impl<'a, K, I, S> Clone for NodeRef<'a, K, I, S>
where
    S: Arena<Element = Node<K, I>, Index = I>,
    I: Clone + Debug + Eq,
{
    #[inline]
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            index: self.index.clone(),
        }
    }
}
