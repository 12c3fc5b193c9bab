//! Indexed Binary Heap implementation
//!
//! A binary min-heap over `(key, value)` items with an auxiliary map from each
//! value to its current array position. The map turns "which slot holds this
//! value" into a lookup, which is what makes `decrease_key` and `contains`
//! cheap enough for Dijkstra and Prim frontiers.
//!
//! Every move of an item inside the array goes through [`IndexedMinHeap::swap`],
//! which rewrites both slots and both index entries together, so the array and
//! the map never disagree between steps.
//!
//! # Time Complexity
//!
//! | Operation      | Complexity |
//! |----------------|------------|
//! | `insert`       | O(log n)   |
//! | `extract_min`  | O(log n)   |
//! | `decrease_key` | O(log n)   |
//! | `contains`     | O(1)       |
//! | `key_of`       | O(1)       |
//! | `peek`         | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use graph_frontier::indexed_binary::{HeapItem, IndexedMinHeap};
//!
//! let mut heap = IndexedMinHeap::new();
//! heap.insert(5, "a").unwrap();
//! heap.insert(3, "b").unwrap();
//! heap.insert(8, "c").unwrap();
//!
//! assert_eq!(heap.extract_min(), Some(HeapItem::new(3, "b")));
//! heap.decrease_key(&"c", 1).unwrap();
//! assert_eq!(heap.extract_min(), Some(HeapItem::new(1, "c")));
//! assert_eq!(heap.extract_min(), Some(HeapItem::new(5, "a")));
//! assert_eq!(heap.extract_min(), None);
//! ```

use crate::traits::{Heap, HeapError, IndexedHeap};
use rustc_hash::FxHashMap;
use std::fmt;
use std::hash::Hash;

/// A `(key, value)` pair held by the heap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeapItem<P, T> {
    /// Priority; smaller keys are extracted first
    pub key: P,
    /// Identity of the item, unique among live items
    pub value: T,
}

impl<P, T> HeapItem<P, T> {
    /// Creates an item with key `key` and value `value`
    pub fn new(key: P, value: T) -> Self {
        Self { key, value }
    }

    /// Splits the item into `(key, value)`
    pub fn into_pair(self) -> (P, T) {
        (self.key, self.value)
    }
}

impl<P: fmt::Display, T: fmt::Display> fmt::Display for HeapItem<P, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.key, self.value)
    }
}

/// A binary min-heap with a value→position index
///
/// Values are cloned once on insertion so that both the array slot and the
/// index map own a copy; cheap identities (vertex ids, small keys) are the
/// intended use.
#[derive(Debug, Clone)]
pub struct IndexedMinHeap<T, P> {
    /// The heap data stored as a vector of items
    data: Vec<HeapItem<P, T>>,
    /// Current array position of each live value
    index: FxHashMap<T, usize>,
}

impl<T, P> IndexedMinHeap<T, P>
where
    T: Hash + Eq + Clone,
    P: Ord,
{
    /// Creates an empty heap
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// Creates an empty heap with room for `capacity` items
    ///
    /// Traversals know their vertex count up front, so the frontier can be
    /// sized once.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Builds a heap from `(key, value)` pairs, rejecting repeated values
    ///
    /// # Errors
    /// Returns `HeapError::DuplicateValue` on the first value seen twice.
    pub fn try_from_iter<I>(items: I) -> Result<Self, HeapError>
    where
        I: IntoIterator<Item = (P, T)>,
    {
        let items = items.into_iter();
        let mut heap = Self::with_capacity(items.size_hint().0);
        for (key, value) in items {
            heap.insert(key, value)?;
        }
        Ok(heap)
    }

    /// Returns the number of items in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the heap holds no items
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns true if `value` is currently in the heap
    pub fn contains(&self, value: &T) -> bool {
        self.index.contains_key(value)
    }

    /// Returns the current key of `value`
    ///
    /// # Errors
    /// Returns `HeapError::NotFound` if `value` is not in the heap.
    pub fn key_of(&self, value: &T) -> Result<&P, HeapError> {
        let position = self.index.get(value).ok_or(HeapError::NotFound)?;
        Ok(&self.data[*position].key)
    }

    /// Returns the minimum item without removing it
    pub fn peek(&self) -> Option<&HeapItem<P, T>> {
        self.data.first()
    }

    /// Inserts `value` with priority `key`
    ///
    /// The item is appended at the end of the array and sifted up.
    ///
    /// # Errors
    /// Returns `HeapError::DuplicateValue` if `value` is already present; the
    /// heap is left unchanged.
    pub fn insert(&mut self, key: P, value: T) -> Result<(), HeapError> {
        if self.index.contains_key(&value) {
            tracing::trace!("rejected insert of a value already in the heap");
            return Err(HeapError::DuplicateValue);
        }

        let position = self.data.len();
        self.index.insert(value.clone(), position);
        self.data.push(HeapItem { key, value });
        self.sift_up(position);
        Ok(())
    }

    /// Lowers the key of `value` to `new_key` and restores heap order
    ///
    /// Passing the current key is accepted and moves nothing.
    ///
    /// # Errors
    /// - `HeapError::NotFound` if `value` is not in the heap
    /// - `HeapError::InvalidKeyUpdate` if `new_key` is greater than the
    ///   current key; the heap is left unchanged
    pub fn decrease_key(&mut self, value: &T, new_key: P) -> Result<(), HeapError> {
        let position = *self.index.get(value).ok_or(HeapError::NotFound)?;

        let item = &mut self.data[position];
        if new_key > item.key {
            tracing::trace!(position, "rejected key increase");
            return Err(HeapError::InvalidKeyUpdate);
        }
        item.key = new_key;

        self.sift_up(position);
        Ok(())
    }

    /// Removes and returns the item with the smallest key
    ///
    /// Returns `None` on an empty heap.
    pub fn extract_min(&mut self) -> Option<HeapItem<P, T>> {
        if self.data.is_empty() {
            return None;
        }

        let last_idx = self.data.len() - 1;
        self.swap(0, last_idx);
        let item = self.data.pop()?;
        self.index.remove(&item.value);

        if !self.data.is_empty() {
            self.sift_down(0);
        }

        Some(item)
    }

    /// Removes every item
    pub fn clear(&mut self) {
        self.data.clear();
        self.index.clear();
    }

    /// Iterates over the items in array order (not sorted)
    pub fn iter(&self) -> std::slice::Iter<'_, HeapItem<P, T>> {
        self.data.iter()
    }

    /// Consumes the heap and returns its items in ascending key order
    pub fn into_sorted_vec(mut self) -> Vec<HeapItem<P, T>> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Some(item) = self.extract_min() {
            sorted.push(item);
        }
        sorted
    }

    /// Verifies heap order and the array/index bijection
    ///
    /// # Errors
    /// Returns `HeapError::Corrupted` describing the first violation found.
    pub fn check_invariants(&self) -> Result<(), HeapError> {
        if self.index.len() != self.data.len() {
            return Err(HeapError::Corrupted {
                position: self.data.len(),
                reason: "index map size differs from heap size",
            });
        }

        for (position, item) in self.data.iter().enumerate() {
            if self.index.get(&item.value) != Some(&position) {
                return Err(HeapError::Corrupted {
                    position,
                    reason: "index entry does not point back to its slot",
                });
            }
            if position > 0 && self.data[(position - 1) / 2].key > item.key {
                return Err(HeapError::Corrupted {
                    position,
                    reason: "key is smaller than its parent key",
                });
            }
        }

        Ok(())
    }

    /// Exchanges two slots and records both new positions in the index
    fn swap(&mut self, i: usize, j: usize) {
        self.data.swap(i, j);
        self.reindex(i);
        self.reindex(j);
    }

    /// Points the index entry of the value at `position` back to `position`
    #[inline]
    fn reindex(&mut self, position: usize) {
        if let Some(slot) = self.index.get_mut(&self.data[position].value) {
            *slot = position;
        }
    }

    /// Move element at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.data[index].key < self.data[parent].key {
                self.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down to maintain heap property
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;

            if left < len && self.data[left].key < self.data[smallest].key {
                smallest = left;
            }
            if right < len && self.data[right].key < self.data[smallest].key {
                smallest = right;
            }

            if smallest != index {
                self.swap(index, smallest);
                index = smallest;
            } else {
                break;
            }
        }
    }
}

impl<T, P> Default for IndexedMinHeap<T, P>
where
    T: Hash + Eq + Clone,
    P: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P> fmt::Display for IndexedMinHeap<T, P>
where
    T: fmt::Display,
    P: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("]")
    }
}

impl<'a, T, P> IntoIterator for &'a IndexedMinHeap<T, P> {
    type Item = &'a HeapItem<P, T>;
    type IntoIter = std::slice::Iter<'a, HeapItem<P, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T, P> Heap<T, P> for IndexedMinHeap<T, P>
where
    T: Hash + Eq + Clone,
    P: Ord,
{
    fn new() -> Self {
        IndexedMinHeap::new()
    }

    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn peek(&self) -> Option<(&P, &T)> {
        self.data.first().map(|item| (&item.key, &item.value))
    }

    fn pop(&mut self) -> Option<(P, T)> {
        self.extract_min().map(HeapItem::into_pair)
    }
}

impl<T, P> IndexedHeap<T, P> for IndexedMinHeap<T, P>
where
    T: Hash + Eq + Clone,
    P: Ord,
{
    fn insert(&mut self, priority: P, item: T) -> Result<(), HeapError> {
        IndexedMinHeap::insert(self, priority, item)
    }

    fn contains(&self, item: &T) -> bool {
        self.index.contains_key(item)
    }

    fn key_of(&self, item: &T) -> Result<&P, HeapError> {
        IndexedMinHeap::key_of(self, item)
    }

    fn decrease_key(&mut self, item: &T, new_priority: P) -> Result<(), HeapError> {
        IndexedMinHeap::decrease_key(self, item, new_priority)
    }
}
