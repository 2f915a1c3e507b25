//! Utilities for treating the backing storage for trees generically.
//!
//! This module is home for the following items:
//! - [`Arena`], the main trait for the backing storages for trees
//! - [`ListArena`], a trait used for implementing `Arena` for list-like collections
//! - [`DefaultArena`], a type definition for the default backing storage used by trees unless a different one is specified; takes different values depending on feature flags
//!
//! Unlike general-purpose arenas, the storages described here are *append-only*: the search tree never removes nodes, so there is no removal operation in the contract and no index is ever invalidated. This is what allows nodes to link to each other with plain indices and no generation counters.
//!
//! [`Arena`]: trait.Arena.html " "
//! [`ListArena`]: trait.ListArena.html " "
//! [`DefaultArena`]: type.DefaultArena.html " "

mod list;
pub use list::*;

#[cfg(feature = "slotmap")]
mod slotmap_impl;

use core::fmt::Debug;

/// Trait for various kinds of containers which can be the backing storage for trees.
///
/// # Safety
/// There's a number of invariants which have to be followed by the container:
/// - The length of the storage cannot be modified in the container when it's borrowed immutably or not borrowed at all;
/// - `new` and `with_capacity` ***must*** return empty storages, i.e. those which have `len() == 0` and `is_empty() == true`;
/// - it should be impossible for the length of the storage to overflow `usize`;
/// - Calling [`get_unchecked`] or [`get_unchecked_mut`] if `contains_index` on the same index returns `true` should *not* cause undefined behavior (otherwise, it may or may not — that is implementation specific);
/// - An index returned by `append` must stay valid, and keep referring to the element it was created for, for as long as the storage exists;
/// - If an element is added at an index, it must be retrieveable in the exact same state as it was inserted until it is modified using a method which explicitly does so.
///
/// Tree structures may rely on those invariants for safety.
///
/// [`get_unchecked`]: #tymethod.get_unchecked " "
/// [`get_unchecked_mut`]: #tymethod.get_unchecked_mut " "
pub unsafe trait Arena: Sized {
    /// The type used for element naming.
    type Index: Clone + Debug + Eq;
    /// The type of the elements stored.
    type Element;

    /// Adds an element to the collection, returning the index it can be retrieved with.
    fn append(&mut self, element: Self::Element) -> Self::Index;
    /// Returns the number of elements in the storage, also referred to as its 'length'.
    fn len(&self) -> usize;
    /// Creates an empty storage with the specified capacity.
    ///
    /// # Panics
    /// Storages with a fixed capacity should panic if the specified capacity does not match their actual one, and are recommended to override the `new` method to use the correct capacity.
    fn with_capacity(capacity: usize) -> Self;
    /// Returns a reference to the specified element in the storage, without checking for presence of the index inside the collection.
    ///
    /// # Safety
    /// If the element at the specified index is not present in the storage, a dangling reference will be created, causing *immediate undefined behavior*.
    unsafe fn get_unchecked(&self, index: &Self::Index) -> &Self::Element;
    /// Returns a *mutable* reference to the specified element in the storage, without checking for presence of the index inside the collection.
    ///
    /// # Safety
    /// If the element at the specified index is not present in the storage, a dangling reference will be created, causing *immediate undefined behavior*.
    unsafe fn get_unchecked_mut(&mut self, index: &Self::Index) -> &mut Self::Element;
    /// Returns `true` if the specified index is present in the storage, `false` otherwise.
    ///
    /// If this method returned `true`, calling `get_unchecked`/`get_unchecked_mut` on the same index is guaranteed to be safe.
    fn contains_index(&self, index: &Self::Index) -> bool;

    /// Returns a reference to the specified element in the collection, or `None` if the index is not present in the storage.
    #[inline]
    fn get(&self, index: &Self::Index) -> Option<&Self::Element> {
        if self.contains_index(index) {
            Some(unsafe {
                // SAFETY: we just checked for index presence
                self.get_unchecked(index)
            })
        } else {
            None
        }
    }
    /// Returns a *mutable* reference to the specified element in the collection, or `None` if the index is not present in the storage.
    #[inline]
    fn get_mut(&mut self, index: &Self::Index) -> Option<&mut Self::Element> {
        if self.contains_index(index) {
            Some(unsafe {
                // SAFETY: we just checked for index presence
                self.get_unchecked_mut(index)
            })
        } else {
            None
        }
    }
    /// Creates a new empty storage. Dynamically-allocated storages created this way do not allocate memory.
    ///
    /// Storages with fixed capacity should override this method to use the correct capacity, as the default implementation calls `Self::with_capacity(0)`.
    #[inline(always)]
    fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Returns `true` if the storage contains no elements, `false` otherwise.
    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Returns the amount of elements the storage can hold without requiring a memory allocation.
    ///
    /// For storages which have a fixed capacity, this should be equal to the length; the default implementation uses exactly that.
    #[inline(always)]
    fn capacity(&self) -> usize {
        self.len()
    }
    /// Reserves capacity for at least additional more elements to be inserted in the given storage. The storage may reserve more space to avoid frequent reallocations. After calling `reserve`, `capacity` will be greater than or equal to `self.len()` + `additional`. Does nothing if capacity is already sufficient.
    ///
    /// For storages which have a fixed capacity, this should first check for the specified amount of elements to reserve for and if it's not zero, either reallocate the collection anew or, if that is not supported, panic. The default implementation does exactly that.
    #[inline(always)]
    fn reserve(&mut self, additional: usize) {
        if self.len() + additional > self.capacity() {
            unimplemented!("this storage type does not support reallocation")
        }
    }
}

/// The default storage type used by the tree types when a storage type is not provided.
///
/// This is chosen according to the following strategy:
/// - If the `alloc` feature flag is enabled, [`Vec`] is used
/// - If `alloc` is disabled but `smallvec` is enabled, a [`SmallVec`] *with zero-sized backing storage* is used
/// - If both `smallvec` and `alloc` are disabled, an [`ArrayVec`] *with zero-sized backing storage* is used
///
/// No other storage types are ever used as defaults. The zero-sized no-alloc defaults exist so that the crate still compiles in those configurations — an actual tree needs at least one node, so `no_std` users without an allocator are expected to name an [`ArrayVec`] with a real capacity explicitly.
///
/// [`Vec`]: https://doc.rust-lang.org/std/vec/struct.Vec.html " "
/// [`SmallVec`]: https://docs.rs/smallvec/*/smallvec/struct.SmallVec.html " "
/// [`ArrayVec`]: https://docs.rs/arrayvec/*/arrayvec/struct.ArrayVec.html " "
pub type DefaultArena<T> = _DefaultArena<T>;

#[cfg(feature = "alloc")]
type _DefaultArena<T> = alloc::vec::Vec<T>;

#[cfg(all(
    feature = "smallvec",
    not(feature = "alloc"),
))]
type _DefaultArena<T> = smallvec::SmallVec<[T; 0]>;

#[cfg(all(
    not(feature = "alloc"),
    not(feature = "smallvec"),
))]
type _DefaultArena<T> = arrayvec::ArrayVec<[T; 0]>;
