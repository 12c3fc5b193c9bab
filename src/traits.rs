//! Common traits for heap data structures
//!
//! This module provides a two-tier trait hierarchy for priority queues used as
//! the frontier of a graph traversal:
//!
//! - [`Heap`]: Base trait for simple min-heaps over (priority, item) pairs
//! - [`IndexedHeap`]: Extended trait where the item itself is the handle,
//!   adding membership tests, key lookup and `decrease_key`
//!
//! Traversal code (Dijkstra, Prim) is written against [`IndexedHeap`] so the
//! frontier structure can be swapped without touching the algorithm.

use thiserror::Error;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// The item is not currently held by the heap
    #[error("value is not present in the heap")]
    NotFound,
    /// The new priority is greater than the current priority
    #[error("new key is greater than the current key")]
    InvalidKeyUpdate,
    /// The item is already held by the heap
    #[error("value is already present in the heap")]
    DuplicateValue,
    /// An internal invariant check failed (reported by invariant checks only)
    #[error("heap invariant violated at position {position}: {reason}")]
    Corrupted {
        /// Array position where the violation was found
        position: usize,
        /// Which invariant was violated
        reason: &'static str,
    },
}

/// Base trait for min-heap/priority queue data structures
///
/// Like `BinaryHeap` but with the ordering key kept apart from the data:
/// - `pop` removes and returns the minimum
/// - `peek` returns the minimum without removing it
///
/// # Example
///
/// ```rust
/// use graph_frontier::Heap;
/// use graph_frontier::indexed_binary::IndexedMinHeap;
///
/// let mut heap: IndexedMinHeap<&str, i32> = Heap::new();
/// heap.insert(3, "three").unwrap();
/// heap.insert(1, "one").unwrap();
///
/// assert_eq!(Heap::peek(&heap), Some((&1, &"one")));
/// assert_eq!(Heap::pop(&mut heap), Some((1, "one")));
/// ```
pub trait Heap<T, P: Ord> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Returns the minimum priority and associated item without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<(&P, &T)>;

    /// Removes and returns the minimum priority and associated item
    ///
    /// An empty heap yields `None`; polling until empty is the normal way
    /// traversals terminate.
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Option<(P, T)>;
}

/// Heap whose items are their own handles
///
/// Items must be unique among live entries. The heap keeps a map from item to
/// its current position so that `contains`, `key_of` and `decrease_key` need
/// no search.
///
/// # Example
///
/// ```rust
/// use graph_frontier::{Heap, IndexedHeap};
/// use graph_frontier::indexed_binary::IndexedMinHeap;
///
/// let mut heap: IndexedMinHeap<usize, u32> = Heap::new();
/// IndexedHeap::insert(&mut heap, 10, 7).unwrap();
/// IndexedHeap::decrease_key(&mut heap, &7, 5).unwrap();
/// assert_eq!(Heap::peek(&heap), Some((&5, &7)));
/// ```
pub trait IndexedHeap<T, P: Ord>: Heap<T, P> {
    /// Inserts an item with the given priority
    ///
    /// # Errors
    /// Returns `HeapError::DuplicateValue` if the item is already present.
    ///
    /// # Time Complexity
    /// O(log n)
    fn insert(&mut self, priority: P, item: T) -> Result<(), HeapError>;

    /// Returns true if the item is currently held
    ///
    /// # Time Complexity
    /// O(1)
    fn contains(&self, item: &T) -> bool;

    /// Returns the current priority of the item
    ///
    /// # Errors
    /// Returns `HeapError::NotFound` if the item is not present.
    fn key_of(&self, item: &T) -> Result<&P, HeapError>;

    /// Lowers the priority of an item already in the heap
    ///
    /// An equal priority is accepted and leaves the heap unchanged.
    ///
    /// # Errors
    /// - `HeapError::NotFound` if the item is not present
    /// - `HeapError::InvalidKeyUpdate` if `new_priority` is greater than the
    ///   current priority
    ///
    /// # Time Complexity
    /// O(log n)
    fn decrease_key(&mut self, item: &T, new_priority: P) -> Result<(), HeapError>;
}
