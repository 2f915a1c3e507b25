#[cfg(feature = "alloc")]
mod alloc_impl;
mod arrayvec_impl;
#[cfg(feature = "smallvec")]
mod smallvec_impl;

use super::Arena;

/// Trait for list-like containers which can be the backing storage for trees.
///
/// Every `ListArena` automatically implements [`Arena`] with `usize` indices: appending an element hands out the index it was pushed at, and since elements are never removed, that index keeps pointing to the same element for the lifetime of the collection.
///
/// # Safety
/// There's a number of invariants which have to be followed by the container:
/// - The length of the storage cannot be modified in the container when it's borrowed immutably or not borrowed at all;
/// - `new` and `with_capacity` ***must*** return empty storages, i.e. those which have `len() == 0` and `is_empty() == true`;
/// - it should be impossible for the length of the storage to overflow `usize`;
/// - Calling [`get_unchecked`] or [`get_unchecked_mut`] with `self.len() > index` should *not* cause undefined behavior (otherwise, it may or may not — that is implementation specific);
/// - `push` must add the element at position `len()`, shifting no other elements;
/// - If an element is added at a position, it must be retrieveable in the exact same state as it was inserted until it is modified using a method which explicitly does so.
///
/// Tree structures may rely on those invariants for safety.
///
/// [`Arena`]: trait.Arena.html " "
/// [`get_unchecked`]: #tymethod.get_unchecked " "
/// [`get_unchecked_mut`]: #tymethod.get_unchecked_mut " "
pub unsafe trait ListArena: Sized {
    /// The type of values in the container.
    type Element;

    /// Creates an empty collection with the specified capacity.
    ///
    /// # Panics
    /// Collections with a fixed capacity should panic if the specified capacity does not match their actual one, and are recommended to override the `new` method to use the correct capacity.
    fn with_capacity(capacity: usize) -> Self;
    /// Appends an element to the back of the collection.
    fn push(&mut self, element: Self::Element);
    /// Returns the number of elements in the collection, also referred to as its 'length'.
    fn len(&self) -> usize;
    /// Returns a reference to the specified element in the collection, without doing bounds checking.
    ///
    /// # Safety
    /// If the specified index is out of bounds, a dangling reference will be created, causing *immediate undefined behavior*.
    unsafe fn get_unchecked(&self, index: usize) -> &Self::Element;
    /// Returns a *mutable* reference to the specified element in the collection, without doing bounds checking.
    ///
    /// # Safety
    /// If the specified index is out of bounds, a dangling reference will be created, causing *immediate undefined behavior*.
    unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut Self::Element;

    /// Returns a reference to the specified element in the collection, or `None` if the index is out of bounds.
    #[inline]
    fn get(&self, index: usize) -> Option<&Self::Element> {
        if self.len() > index {
            Some(unsafe {
                // SAFETY: we just did a bounds check
                self.get_unchecked(index)
            })
        } else {
            None
        }
    }
    /// Returns a *mutable* reference to the specified element in the collection, or `None` if the index is out of bounds.
    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut Self::Element> {
        if self.len() > index {
            Some(unsafe {
                // SAFETY: we just did a bounds check
                self.get_unchecked_mut(index)
            })
        } else {
            None
        }
    }
    /// Creates a new empty collection. Dynamically-allocated collections created this way do not allocate memory.
    ///
    /// Collections with fixed capacity should override this method to use the correct capacity, as the default implementation calls `Self::with_capacity(0)`.
    #[inline(always)]
    fn new() -> Self {
        Self::with_capacity(0)
    }
    /// Returns `true` if the collection contains no elements, `false` otherwise.
    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Returns the amount of elements the collection can hold without requiring a memory allocation.
    ///
    /// For collections which have a fixed capacity, this should be equal to the length; the default implementation uses exactly that.
    #[inline(always)]
    fn capacity(&self) -> usize {
        self.len()
    }
    /// Reserves capacity for at least additional more elements to be inserted in the given collection. The collection may reserve more space to avoid frequent reallocations. Does nothing if capacity is already sufficient.
    ///
    /// For collections which have a fixed capacity, this should first check for the specified amount of elements to reserve for and if it's not zero, either reallocate the collection anew or, if that is not supported, panic. The default implementation does exactly that.
    #[inline(always)]
    fn reserve(&mut self, additional: usize) {
        if self.len() + additional > self.capacity() {
            unimplemented!("this storage type does not support reallocation")
        }
    }
}

unsafe impl<T> Arena for T
where T: ListArena,
{
    type Index = usize;
    type Element = <T as ListArena>::Element;

    #[inline(always)]
    fn append(&mut self, element: Self::Element) -> Self::Index {
        let index = ListArena::len(self);
        ListArena::push(self, element);
        index
    }
    #[inline(always)]
    fn len(&self) -> usize {
        ListArena::len(self)
    }
    #[inline(always)]
    fn with_capacity(capacity: usize) -> Self {
        <T as ListArena>::with_capacity(capacity)
    }
    #[inline(always)]
    unsafe fn get_unchecked(&self, index: &usize) -> &Self::Element {
        ListArena::get_unchecked(self, *index)
    }
    #[inline(always)]
    unsafe fn get_unchecked_mut(&mut self, index: &usize) -> &mut Self::Element {
        ListArena::get_unchecked_mut(self, *index)
    }
    #[inline(always)]
    fn contains_index(&self, index: &usize) -> bool {
        ListArena::len(self) > *index
    }

    #[inline(always)]
    fn get(&self, index: &usize) -> Option<&Self::Element> {
        ListArena::get(self, *index)
    }
    #[inline(always)]
    fn get_mut(&mut self, index: &usize) -> Option<&mut Self::Element> {
        ListArena::get_mut(self, *index)
    }
    #[inline(always)]
    fn new() -> Self {
        <T as ListArena>::new()
    }
    #[inline(always)]
    fn capacity(&self) -> usize {
        ListArena::capacity(self)
    }
    #[inline(always)]
    fn reserve(&mut self, additional: usize) {
        ListArena::reserve(self, additional)
    }
}
