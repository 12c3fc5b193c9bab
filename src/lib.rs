//! Graph Traversal Primitives for Rust
//!
//! This crate provides the two building blocks that shortest-path and
//! minimum-spanning-tree algorithms are composed from:
//!
//! - **Weighted Graph**: directed weighted edges over a fixed vertex range, with
//!   insertion-ordered adjacency and per-pair weights
//! - **Indexed Binary Heap**: a binary min-heap that tracks the array position
//!   of every value, giving O(log n) `decrease_key` and O(1) membership tests
//!
//! The two never call each other. A traversal queries the graph for neighbours
//! and drives the heap as its frontier.
//!
//! # Example
//!
//! ```rust
//! use graph_frontier::{IndexedMinHeap, WeightedGraph};
//!
//! let mut graph = WeightedGraph::new(3);
//! graph.add_directed_edge(0, 1, 4u64).unwrap();
//! graph.add_directed_edge(0, 2, 9).unwrap();
//! graph.add_directed_edge(1, 2, 2).unwrap();
//!
//! let mut dist = vec![u64::MAX; graph.vertex_count()];
//! let mut frontier = IndexedMinHeap::with_capacity(graph.vertex_count());
//! dist[0] = 0;
//! frontier.insert(0, 0).unwrap();
//!
//! while let Some(item) = frontier.extract_min() {
//!     for (next, &w) in graph.neighbors(item.value).unwrap() {
//!         let candidate = item.key + w;
//!         if candidate < dist[next] {
//!             if frontier.contains(&next) {
//!                 frontier.decrease_key(&next, candidate).unwrap();
//!             } else {
//!                 frontier.insert(candidate, next).unwrap();
//!             }
//!             dist[next] = candidate;
//!         }
//!     }
//! }
//! assert_eq!(dist, vec![0, 4, 6]);
//! ```

pub mod graph;
pub mod indexed_binary;
pub mod loader;
pub mod traits;

// Re-export the main types for convenience
pub use graph::{GraphError, WeightedGraph};
pub use indexed_binary::{HeapItem, IndexedMinHeap};
pub use loader::{GraphConfig, GraphSource};
pub use traits::{Heap, HeapError, IndexedHeap};
