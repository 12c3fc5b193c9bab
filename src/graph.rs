//! Weighted graph container over a fixed integer vertex range
//!
//! Vertices are `0..vertex_count`, fixed when the graph is created. Each vertex
//! owns an insertion-ordered set of neighbours, and a separate map stores the
//! weight of every directed `(from, to)` pair present in an adjacency set.
//!
//! The graph has no notion of being directed or undirected; undirected edges
//! are simply two directed entries with equal weight, written by
//! [`WeightedGraph::add_undirected_edge`].
//!
//! # Example
//!
//! ```rust
//! use graph_frontier::WeightedGraph;
//!
//! let mut graph = WeightedGraph::new(3);
//! graph.add_undirected_edge(0, 1, 4).unwrap();
//! graph.add_undirected_edge(1, 2, 7).unwrap();
//!
//! assert_eq!(graph.weight(2, 1), Some(&7));
//! assert_eq!(graph.to_string(), "0: (1, 4)\n1: (0, 4), (2, 7)\n2: (1, 7)");
//! ```

use indexmap::IndexSet;
use rustc_hash::{FxBuildHasher, FxHashMap};
use std::fmt;
use std::ops::Range;
use thiserror::Error;

/// Insertion-ordered neighbour set of one vertex
pub type NeighborSet = IndexSet<usize, FxBuildHasher>;

/// Errors raised while building or loading a graph
#[derive(Debug, Error)]
pub enum GraphError {
    /// An edge endpoint lies outside `0..vertex_count`
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    OutOfRange {
        /// The offending endpoint
        vertex: usize,
        /// Number of vertices in the graph
        vertex_count: usize,
    },
    /// Reading an edge list failed
    #[error("failed to read edge list: {0}")]
    Io(#[from] std::io::Error),
    /// An edge-list line could not be parsed
    #[error("line {line}: {message}")]
    Parse {
        /// 1-based line number
        line: usize,
        /// What was wrong with the line
        message: String,
    },
    /// Generation parameters cannot produce a graph
    #[error("invalid graph configuration: {0}")]
    InvalidConfig(String),
}

/// Directed weighted graph over vertices `0..vertex_count`
#[derive(Debug, Clone)]
pub struct WeightedGraph<W> {
    adjacency: Vec<NeighborSet>,
    weights: FxHashMap<(usize, usize), W>,
}

impl<W> WeightedGraph<W> {
    /// Creates a graph with `vertex_count` vertices and no edges
    ///
    /// # Panics
    /// Panics if the vertex table cannot be allocated; use
    /// [`try_new`](Self::try_new) for counts that come from untrusted input.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: (0..vertex_count).map(|_| NeighborSet::default()).collect(),
            weights: FxHashMap::default(),
        }
    }

    /// Creates a graph with `vertex_count` vertices, failing instead of
    /// aborting when the vertex table cannot be allocated
    ///
    /// # Errors
    /// Returns `GraphError::InvalidConfig` if the allocation fails.
    pub fn try_new(vertex_count: usize) -> Result<Self, GraphError> {
        let mut adjacency = Vec::new();
        adjacency.try_reserve_exact(vertex_count).map_err(|err| {
            GraphError::InvalidConfig(format!("cannot allocate {vertex_count} vertices: {err}"))
        })?;
        adjacency.resize_with(vertex_count, NeighborSet::default);

        Ok(Self {
            adjacency,
            weights: FxHashMap::default(),
        })
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// The vertex range `0..vertex_count()`
    pub fn vertices(&self) -> Range<usize> {
        0..self.vertex_count()
    }

    /// Number of directed adjacency entries (an undirected edge counts twice)
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(NeighborSet::len).sum()
    }

    /// All `(from, to)` pairs, by vertex id then neighbour insertion order
    ///
    /// The iterator is lazy and each call starts over.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(from, neighbors)| neighbors.iter().map(move |&to| (from, to)))
    }

    /// All `(from, to, weight)` triples, in the same order as [`edges`](Self::edges)
    pub fn weighted_edges(&self) -> impl Iterator<Item = (usize, usize, &W)> + '_ {
        self.edges()
            .map(move |(from, to)| (from, to, &self.weights[&(from, to)]))
    }

    /// Neighbours of `vertex` with the weight of the edge leading to each
    ///
    /// # Errors
    /// Returns `GraphError::OutOfRange` if `vertex` is not a vertex.
    pub fn neighbors(
        &self,
        vertex: usize,
    ) -> Result<impl Iterator<Item = (usize, &W)> + '_, GraphError> {
        self.check_vertex(vertex)?;
        Ok(self.adjacency[vertex]
            .iter()
            .map(move |&to| (to, &self.weights[&(vertex, to)])))
    }

    /// Weight of the directed edge `from -> to`, if present
    pub fn weight(&self, from: usize, to: usize) -> Option<&W> {
        self.weights.get(&(from, to))
    }

    /// Returns true if the directed edge `from -> to` is present
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.adjacency
            .get(from)
            .is_some_and(|neighbors| neighbors.contains(&to))
    }

    /// Inserts the directed edge `from -> to`
    ///
    /// Re-inserting an existing pair leaves the adjacency set unchanged and
    /// overwrites the stored weight.
    ///
    /// # Errors
    /// Returns `GraphError::OutOfRange` if either endpoint is not a vertex; the
    /// graph is left unchanged.
    pub fn add_directed_edge(&mut self, from: usize, to: usize, weight: W) -> Result<(), GraphError> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        self.insert_edge(from, to, weight);
        Ok(())
    }

    /// Inserts `from -> to` and `to -> from` with the same weight
    ///
    /// # Errors
    /// Returns `GraphError::OutOfRange` if either endpoint is not a vertex;
    /// neither direction is written in that case.
    pub fn add_undirected_edge(&mut self, from: usize, to: usize, weight: W) -> Result<(), GraphError>
    where
        W: Clone,
    {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        self.insert_edge(from, to, weight.clone());
        self.insert_edge(to, from, weight);
        Ok(())
    }

    fn insert_edge(&mut self, from: usize, to: usize, weight: W) {
        self.adjacency[from].insert(to);
        self.weights.insert((from, to), weight);
    }

    fn check_vertex(&self, vertex: usize) -> Result<(), GraphError> {
        if vertex < self.vertex_count() {
            Ok(())
        } else {
            Err(GraphError::OutOfRange {
                vertex,
                vertex_count: self.vertex_count(),
            })
        }
    }
}

impl<W: fmt::Display> fmt::Display for WeightedGraph<W> {
    /// One line per vertex: `v: (n1, w1), (n2, w2)`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (from, neighbors) in self.adjacency.iter().enumerate() {
            if from > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{from}: ")?;
            for (i, &to) in neighbors.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "({to}, {})", self.weights[&(from, to)])?;
            }
        }
        Ok(())
    }
}
