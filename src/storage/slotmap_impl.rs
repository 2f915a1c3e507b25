use core::fmt::Debug;
use slotmap::{SlotMap, HopSlotMap, DenseSlotMap, Key, Slottable};
use super::Arena;

unsafe impl<K, V> Arena for SlotMap<K, V>
where
    K: Key + Debug + Eq,
    V: Slottable,
{
    type Index = K;
    type Element = V;
    // Those methods clone the indices which have been fed into them, which is
    // perfectly fine, since slotmap keys are actually Copy
    #[inline(always)]
    fn append(&mut self, element: Self::Element) -> Self::Index {
        self.insert(element)
    }
    #[inline(always)]
    fn len(&self) -> usize {
        self.len()
    }
    #[inline(always)]
    fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_key(capacity)
    }
    #[inline(always)]
    unsafe fn get_unchecked(&self, index: &Self::Index) -> &Self::Element {
        self.get_unchecked(index.clone())
    }
    #[inline(always)]
    unsafe fn get_unchecked_mut(&mut self, index: &Self::Index) -> &mut Self::Element {
        self.get_unchecked_mut(index.clone())
    }
    #[inline(always)]
    fn contains_index(&self, index: &Self::Index) -> bool {
        self.contains_key(index.clone())
    }
    #[inline(always)]
    fn get(&self, index: &Self::Index) -> Option<&Self::Element> {
        self.get(index.clone())
    }
    #[inline(always)]
    fn get_mut(&mut self, index: &Self::Index) -> Option<&mut Self::Element> {
        self.get_mut(index.clone())
    }
    #[inline(always)]
    fn capacity(&self) -> usize {
        self.capacity()
    }
    #[inline(always)]
    fn reserve(&mut self, additional: usize) {
        self.reserve(additional)
    }
}

unsafe impl<K, V> Arena for HopSlotMap<K, V>
where
    K: Key + Debug + Eq,
    V: Slottable,
{
    type Index = K;
    type Element = V;
    // Those methods clone the indices which have been fed into them, which is
    // perfectly fine, since slotmap keys are actually Copy
    #[inline(always)]
    fn append(&mut self, element: Self::Element) -> Self::Index {
        self.insert(element)
    }
    #[inline(always)]
    fn len(&self) -> usize {
        self.len()
    }
    #[inline(always)]
    fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_key(capacity)
    }
    #[inline(always)]
    unsafe fn get_unchecked(&self, index: &Self::Index) -> &Self::Element {
        self.get_unchecked(index.clone())
    }
    #[inline(always)]
    unsafe fn get_unchecked_mut(&mut self, index: &Self::Index) -> &mut Self::Element {
        self.get_unchecked_mut(index.clone())
    }
    #[inline(always)]
    fn contains_index(&self, index: &Self::Index) -> bool {
        self.contains_key(index.clone())
    }
    #[inline(always)]
    fn get(&self, index: &Self::Index) -> Option<&Self::Element> {
        self.get(index.clone())
    }
    #[inline(always)]
    fn get_mut(&mut self, index: &Self::Index) -> Option<&mut Self::Element> {
        self.get_mut(index.clone())
    }
    #[inline(always)]
    fn capacity(&self) -> usize {
        self.capacity()
    }
    #[inline(always)]
    fn reserve(&mut self, additional: usize) {
        self.reserve(additional)
    }
}

unsafe impl<K, V> Arena for DenseSlotMap<K, V>
where
    K: Key + Debug + Eq,
    V: Slottable,
{
    type Index = K;
    type Element = V;
    // Those methods clone the indices which have been fed into them, which is
    // perfectly fine, since slotmap keys are actually Copy
    #[inline(always)]
    fn append(&mut self, element: Self::Element) -> Self::Index {
        self.insert(element)
    }
    #[inline(always)]
    fn len(&self) -> usize {
        self.len()
    }
    #[inline(always)]
    fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_key(capacity)
    }
    #[inline(always)]
    unsafe fn get_unchecked(&self, index: &Self::Index) -> &Self::Element {
        self.get_unchecked(index.clone())
    }
    #[inline(always)]
    unsafe fn get_unchecked_mut(&mut self, index: &Self::Index) -> &mut Self::Element {
        self.get_unchecked_mut(index.clone())
    }
    #[inline(always)]
    fn contains_index(&self, index: &Self::Index) -> bool {
        self.contains_key(index.clone())
    }
    #[inline(always)]
    fn get(&self, index: &Self::Index) -> Option<&Self::Element> {
        self.get(index.clone())
    }
    #[inline(always)]
    fn get_mut(&mut self, index: &Self::Index) -> Option<&mut Self::Element> {
        self.get_mut(index.clone())
    }
    #[inline(always)]
    fn capacity(&self) -> usize {
        self.capacity()
    }
    #[inline(always)]
    fn reserve(&mut self, additional: usize) {
        self.reserve(additional)
    }
}
