use core::{
    fmt::Debug,
    cmp::Ordering,
    borrow::Borrow,
};
use crate::{
    storage::{Arena, DefaultArena},
    util::unreachable_debugchecked,
};
use super::{Node, NodeRef, Iter, EmptyKeysError};
#[cfg(feature = "alloc")]
use super::Render;

/// A binary search tree.
///
/// See the [module-level documentation] for more.
///
/// [module-level documentation]: index.html " "
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SearchTree<K, I = usize, S = DefaultArena<Node<K, I>>>
where
    S: Arena<Element = Node<K, I>, Index = I>,
    I: Clone + Debug + Eq,
{
    pub(super) storage: S,
    pub(super) root: I,
}
impl<K, I, S> SearchTree<K, I, S>
where
    S: Arena<Element = Node<K, I>, Index = I>,
    I: Clone + Debug + Eq,
{
    /// Creates a search tree with the specified key for the root node.
    ///
    /// # Example
    /// ```rust
    /// # use boxwood::SearchTree;
    /// // The only way to create a tree...
    /// let tree = SearchTree::<_>::new(87);
    /// // ...is to simply create the root node and storage. The turbofish there is needed to
    /// // state that we are using the default storage method instead of asking the compiler to
    /// // infer it, which would be impossible.
    ///
    /// // No other nodes have been created yet:
    /// assert!(tree.root().is_leaf());
    /// ```
    pub fn new(root: K) -> Self {
        let mut storage = S::new();
        let root = storage.append(unsafe {
            // SAFETY: there isn't a root there yet
            Node::root(root)
        });
        Self { storage, root }
    }
    /// Creates a search tree with the specified capacity for the storage.
    ///
    /// # Panics
    /// The storage may panic if it has fixed capacity and the specified value does not match it.
    ///
    /// # Example
    /// ```rust
    /// # use boxwood::SearchTree;
    /// // Let's create a tree, but with some preallocated space for more nodes:
    /// let mut tree = SearchTree::<_>::with_capacity(5, 420);
    /// // The turbofish there is needed to state that we are using the default storage method
    /// // instead of asking the compiler to infer it, which would be impossible.
    ///
    /// // Capacity does not affect the actual nodes:
    /// assert!(tree.root().is_leaf());
    ///
    /// // Not until we create them ourselves:
    /// tree.insert(666);
    ///
    /// // If the default storage is backed by a dynamic memory allocation,
    /// // at most one has happened to this point.
    /// ```
    pub fn with_capacity(capacity: usize, root: K) -> Self {
        let mut storage = S::with_capacity(capacity);
        let root = storage.append(unsafe {
            // SAFETY: as above
            Node::root(root)
        });
        Self { storage, root }
    }

    /// Returns a reference to the root node of the tree.
    ///
    /// # Example
    /// ```rust
    /// # use boxwood::SearchTree;
    /// // A tree always has a root node:
    /// let tree = SearchTree::<_>::new(87);
    ///
    /// assert_eq!(*tree.root().key(), 87);
    /// ```
    #[allow(clippy::missing_const_for_fn)] // there cannot be constant trees just yet
    pub fn root(&self) -> NodeRef<'_, K, I, S> {
        unsafe {
            // SAFETY: search trees cannot be created without a root
            NodeRef::new_raw_unchecked(self, self.root.clone())
        }
    }
    /// Returns the number of nodes in the tree.
    ///
    /// Since nodes are never removed, this is exactly the number of keys which have been put into the tree so far, and is never zero.
    pub fn len(&self) -> usize {
        self.storage.len()
    }
    /// Returns a reference to the node holding the smallest key in the tree, i.e. its leftmost node.
    ///
    /// Never fails, since a tree always has at least its root node.
    pub fn first(&self) -> NodeRef<'_, K, I, S> {
        let mut node = self.root();
        while let Some(left) = node.left_child() {
            node = left;
        }
        node
    }
    /// Returns a reference to the node holding the largest key in the tree, i.e. its rightmost node. If several largest keys are equal, the most recently inserted one is returned, since equal keys descend to the right.
    ///
    /// Never fails, since a tree always has at least its root node.
    pub fn last(&self) -> NodeRef<'_, K, I, S> {
        let mut node = self.root();
        while let Some(right) = node.right_child() {
            node = right;
        }
        node
    }
    /// Returns an iterator over the keys of the tree in non-decreasing order.
    ///
    /// The iterator steps through the tree with parent and child links alone and performs no memory allocation, no matter how deep the tree is.
    ///
    /// # Example
    /// ```rust
    /// # use boxwood::SearchTree;
    /// let tree = SearchTree::<_>::from_keys(vec![3, 1, 2]).unwrap();
    /// let sorted = tree.iter().copied().collect::<Vec<_>>();
    /// assert_eq!(sorted, [1, 2, 3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, I, S> {
        Iter::new(self)
    }
    /// Returns a rendering of the tree as line-oriented ASCII connector art.
    ///
    /// The returned adapter borrows the tree and implements `Display`; see [`Render`] for the exact line format.
    ///
    /// [`Render`]: struct.Render.html " "
    #[cfg(feature = "alloc")]
    #[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
    pub fn render(&self) -> Render<'_, K, I, S> {
        Render::new(self)
    }

    pub(super) fn node_at(&self, index: &I) -> &Node<K, I> {
        self.storage.get(index).unwrap_or_else(|| unsafe {
            // SAFETY: tree links are never dangling
            unreachable_debugchecked("tree link pointed to a nonexistent node")
        })
    }
}
impl<K, I, S> SearchTree<K, I, S>
where
    K: Ord,
    S: Arena<Element = Node<K, I>, Index = I>,
    I: Clone + Debug + Eq,
{
    /// Creates a search tree from a sequence of keys: the first key seeds the root and every following key is inserted with the comparison walk, in sequence order.
    ///
    /// The in-order traversal of the resulting tree yields exactly the keys of the sequence, in non-decreasing order.
    ///
    /// # Errors
    /// Fails with [`EmptyKeysError`] if the sequence yields no keys at all, since a tree cannot exist without a root. This is the only way any tree operation can fail.
    ///
    /// # Example
    /// ```rust
    /// # use boxwood::SearchTree;
    /// let tree = SearchTree::<_>::from_keys(vec![10, 5, 15, 7, 2, 9, 31]).unwrap();
    /// assert_eq!(tree.len(), 7);
    /// assert_eq!(*tree.root().key(), 10);
    ///
    /// // Zero keys construct nothing:
    /// assert!(SearchTree::<i32>::from_keys(Vec::new()).is_err());
    /// ```
    ///
    /// [`EmptyKeysError`]: struct.EmptyKeysError.html " "
    pub fn from_keys<T>(keys: T) -> Result<Self, EmptyKeysError>
    where T: IntoIterator<Item = K>,
    {
        let mut keys = keys.into_iter();
        let mut tree = Self::new(keys.next().ok_or(EmptyKeysError)?);
        for key in keys {
            tree.insert(key);
        }
        Ok(tree)
    }
    /// Creates a search tree from a sequence of keys, running *every* key of the sequence through insertion — the first one included, even though it already seeded the root.
    ///
    /// This leaves a duplicate of the first key in the tree, as the root's immediate right child (the first insertion finds an empty right slot at the root). Some constructions out there feed the whole seed sequence back through insertion without skipping the root's key and end up with exactly this shape; the method exists to reproduce them faithfully. Unless that duplicate is what you want, use [`from_keys`] instead.
    ///
    /// # Errors
    /// Fails with [`EmptyKeysError`] if the sequence yields no keys at all.
    ///
    /// # Example
    /// ```rust
    /// # use boxwood::SearchTree;
    /// let tree = SearchTree::<_>::from_keys_duplicating_first(vec![10, 5, 15]).unwrap();
    /// // One node more than the number of distinct keys provided:
    /// assert_eq!(tree.len(), 4);
    /// // The duplicated seed is the root's right child:
    /// assert_eq!(*tree.root().right_child().unwrap().key(), 10);
    /// ```
    ///
    /// [`from_keys`]: #method.from_keys " "
    /// [`EmptyKeysError`]: struct.EmptyKeysError.html " "
    pub fn from_keys_duplicating_first<T>(keys: T) -> Result<Self, EmptyKeysError>
    where
        T: IntoIterator<Item = K>,
        K: Clone,
    {
        let mut keys = keys.into_iter();
        let seed = keys.next().ok_or(EmptyKeysError)?;
        let mut tree = Self::new(seed.clone());
        tree.insert(seed);
        for key in keys {
            tree.insert(key);
        }
        Ok(tree)
    }
    /// Inserts a key into the tree, returning the storage index of the newly created node.
    ///
    /// The walk starts at the root: a key strictly less than the current node's key descends left, any other key descends right, and the first empty slot in the walk's direction receives the new leaf. Equal keys thus always land in the right subtree of the node they are equal to, and no existing node is ever moved — the tree's shape only ever grows at the fringe.
    ///
    /// # Example
    /// ```rust
    /// # use boxwood::SearchTree;
    /// let mut tree = SearchTree::<_>::new(10);
    /// tree.insert(5);
    /// tree.insert(15);
    ///
    /// let root = tree.root();
    /// assert_eq!(*root.left_child().unwrap().key(), 5);
    /// assert_eq!(*root.right_child().unwrap().key(), 15);
    /// ```
    pub fn insert(&mut self, key: K) -> I {
        let mut current = self.root.clone();
        loop {
            let node = self.node_at(&current);
            let (linked, goes_left) = if key < node.key {
                (node.left.clone(), true)
            } else {
                (node.right.clone(), false)
            };
            match linked {
                Some(next) => current = next,
                None => {
                    let new = self.storage.append(unsafe {
                        // SAFETY: the matching child slot of the parent is linked immediately below
                        Node::leaf(key, Some(current.clone()))
                    });
                    let parent = self.storage.get_mut(&current).unwrap_or_else(|| unsafe {
                        // SAFETY: tree links are never dangling
                        unreachable_debugchecked("tree link pointed to a nonexistent node")
                    });
                    if goes_left {
                        parent.left = Some(new.clone());
                    } else {
                        parent.right = Some(new.clone());
                    }
                    return new;
                }
            }
        }
    }
    /// Returns a reference to a node holding the specified key, or `None` if there is no such node in the tree.
    ///
    /// If several equal keys are present, the one closest to the root is returned. The key may be any borrowed form of the tree's key type, with the same `Ord` behavior.
    ///
    /// # Example
    /// ```rust
    /// # use boxwood::SearchTree;
    /// let tree = SearchTree::<_>::from_keys(vec![10, 5, 15]).unwrap();
    /// let node = tree.find(&5).unwrap();
    /// assert!(node.is_leaf());
    /// assert!(tree.find(&7).is_none());
    /// ```
    pub fn find<Q>(&self, key: &Q) -> Option<NodeRef<'_, K, I, S>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root.clone();
        loop {
            let node = self.node_at(&current);
            match key.cmp(node.key.borrow()) {
                Ordering::Less => current = node.left.clone()?,
                Ordering::Greater => current = node.right.clone()?,
                Ordering::Equal => {
                    return Some(unsafe {
                        // SAFETY: the walk only ever follows live links
                        NodeRef::new_raw_unchecked(self, current)
                    })
                }
            }
        }
    }
    /// Returns `true` if some node of the tree holds the specified key, `false` otherwise.
    #[inline(always)]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).is_some()
    }
}
impl<K, I, S> Default for SearchTree<K, I, S>
where
    K: Default,
    S: Arena<Element = Node<K, I>, Index = I>,
    I: Clone + Debug + Eq,
{
    fn default() -> Self {
        Self::new(K::default())
    }
}
