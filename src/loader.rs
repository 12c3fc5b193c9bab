//! Graph construction from configuration: random generation and edge lists
//!
//! These helpers only build a [`WeightedGraph`]; every edge still goes through
//! `add_directed_edge`/`add_undirected_edge`, so loaded and generated graphs
//! satisfy the same invariants as hand-built ones.
//!
//! # Edge-list format
//!
//! ```text
//! 4
//! 0 1 5
//! 1 2 3
//! 2 3 1
//! ```
//!
//! The first non-blank line is the vertex count; every following non-blank
//! line is `from to weight`, whitespace separated.
//!
//! # Example
//!
//! ```rust
//! use graph_frontier::loader::GraphConfig;
//!
//! let graph = GraphConfig::random(10, 20, 100).with_seed(7).build().unwrap();
//! assert_eq!(graph.vertex_count(), 10);
//! assert!(graph.edges().all(|(from, to)| from != to));
//! ```

use crate::graph::{GraphError, WeightedGraph};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Weight type produced by generation and loading
pub type Weight = i64;

/// Where the graph comes from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GraphSource {
    /// Uniformly random edges between distinct endpoints
    Random {
        /// Number of vertices
        vertices: usize,
        /// Number of edge draws (repeated pairs overwrite each other)
        edges: usize,
        /// Weights are drawn from `0..=weight_range`
        weight_range: Weight,
        /// Fixes the generator for reproducible graphs
        #[serde(default)]
        seed: Option<u64>,
    },
    /// An edge-list file
    File {
        /// Path of the edge list
        path: PathBuf,
    },
}

/// Explicit construction parameters for a graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Whether each edge is inserted in one direction or both
    #[serde(default = "default_directed")]
    pub directed: bool,
    /// Where the edges come from
    pub source: GraphSource,
}

fn default_directed() -> bool {
    true
}

impl GraphConfig {
    /// Random directed graph with `vertices` vertices and `edges` edge draws
    pub fn random(vertices: usize, edges: usize, weight_range: Weight) -> Self {
        Self {
            directed: true,
            source: GraphSource::Random {
                vertices,
                edges,
                weight_range,
                seed: None,
            },
        }
    }

    /// Directed graph loaded from the edge list at `path`
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            directed: true,
            source: GraphSource::File { path: path.into() },
        }
    }

    /// Sets whether edges are inserted in one direction or both
    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Fixes the random seed; has no effect on file sources
    pub fn with_seed(mut self, value: u64) -> Self {
        if let GraphSource::Random { seed, .. } = &mut self.source {
            *seed = Some(value);
        }
        self
    }

    /// Builds the graph described by this configuration
    ///
    /// # Errors
    /// Propagates the errors of [`random_graph`] and [`load_edge_list`].
    pub fn build(&self) -> Result<WeightedGraph<Weight>, GraphError> {
        match &self.source {
            GraphSource::Random {
                vertices,
                edges,
                weight_range,
                seed,
            } => {
                let mut rng = match seed {
                    Some(seed) => StdRng::seed_from_u64(*seed),
                    None => StdRng::from_entropy(),
                };
                random_graph(*vertices, *edges, *weight_range, self.directed, &mut rng)
            }
            GraphSource::File { path } => load_edge_list(path, self.directed),
        }
    }
}

/// Generates a graph by drawing `edges` edges with distinct random endpoints
///
/// Each draw picks both endpoints uniformly from `0..vertices`, redrawing on a
/// self loop, and a weight uniformly from `0..=weight_range`. Draws that hit
/// an existing pair overwrite its weight, so the graph may hold fewer than
/// `edges` distinct edges.
///
/// # Errors
/// Returns `GraphError::InvalidConfig` if edges are requested on fewer than
/// two vertices, if `weight_range` is negative, or if the vertex table cannot
/// be allocated.
pub fn random_graph<R: Rng + ?Sized>(
    vertices: usize,
    edges: usize,
    weight_range: Weight,
    directed: bool,
    rng: &mut R,
) -> Result<WeightedGraph<Weight>, GraphError> {
    if edges > 0 && vertices < 2 {
        return Err(GraphError::InvalidConfig(format!(
            "cannot draw {edges} edges without self loops on {vertices} vertices"
        )));
    }
    if weight_range < 0 {
        return Err(GraphError::InvalidConfig(format!(
            "weight range must be non-negative, got {weight_range}"
        )));
    }

    let mut graph = WeightedGraph::try_new(vertices)?;
    for _ in 0..edges {
        let (from, to) = loop {
            let from = rng.gen_range(0..vertices);
            let to = rng.gen_range(0..vertices);
            if from != to {
                break (from, to);
            }
        };
        let weight = rng.gen_range(0..=weight_range);
        add_edge(&mut graph, from, to, weight, directed)?;
    }

    tracing::debug!(
        vertices,
        draws = edges,
        entries = graph.edge_count(),
        directed,
        "generated random graph"
    );
    Ok(graph)
}

/// Loads an edge list from `path`
///
/// # Errors
/// Returns `GraphError::Io` if the file cannot be read, otherwise the errors
/// of [`parse_edge_list`].
pub fn load_edge_list<P: AsRef<Path>>(
    path: P,
    directed: bool,
) -> Result<WeightedGraph<Weight>, GraphError> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "loading edge list");
    let file = File::open(path)?;
    parse_edge_list(BufReader::new(file), directed)
}

/// Parses an edge list from any buffered reader
///
/// # Errors
/// - `GraphError::Parse` for a missing, malformed or unallocatable vertex
///   count, or a malformed edge line
/// - `GraphError::OutOfRange` for an endpoint outside the vertex range
/// - `GraphError::Io` if reading fails
pub fn parse_edge_list<R: BufRead>(
    reader: R,
    directed: bool,
) -> Result<WeightedGraph<Weight>, GraphError> {
    let mut graph: Option<WeightedGraph<Weight>> = None;

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = i + 1;
        let mut fields = line.split_whitespace();

        let Some(first) = fields.next() else {
            continue;
        };

        match graph.as_mut() {
            None => {
                let vertices: usize = parse_field(first, "vertex count", line_no)?;
                if let Some(extra) = fields.next() {
                    return Err(parse_error(
                        line_no,
                        format!("unexpected field `{extra}` after vertex count"),
                    ));
                }
                let created = WeightedGraph::try_new(vertices).map_err(|err| {
                    parse_error(line_no, format!("vertex count {vertices} is too large: {err}"))
                })?;
                graph = Some(created);
            }
            Some(graph) => {
                let from: usize = parse_field(first, "source vertex", line_no)?;
                let to: usize =
                    parse_field(next_field(&mut fields, line_no)?, "target vertex", line_no)?;
                let weight: Weight =
                    parse_field(next_field(&mut fields, line_no)?, "weight", line_no)?;
                if let Some(extra) = fields.next() {
                    return Err(parse_error(
                        line_no,
                        format!("unexpected field `{extra}` after weight"),
                    ));
                }
                add_edge(graph, from, to, weight, directed)?;
            }
        }
    }

    let graph = graph.ok_or_else(|| parse_error(1, "missing vertex count".to_string()))?;
    tracing::debug!(
        vertices = graph.vertex_count(),
        entries = graph.edge_count(),
        directed,
        "parsed edge list"
    );
    Ok(graph)
}

fn add_edge(
    graph: &mut WeightedGraph<Weight>,
    from: usize,
    to: usize,
    weight: Weight,
    directed: bool,
) -> Result<(), GraphError> {
    if directed {
        graph.add_directed_edge(from, to, weight)
    } else {
        graph.add_undirected_edge(from, to, weight)
    }
}

fn next_field<'a>(
    fields: &mut impl Iterator<Item = &'a str>,
    line: usize,
) -> Result<&'a str, GraphError> {
    fields
        .next()
        .ok_or_else(|| parse_error(line, "expected `from to weight`".to_string()))
}

fn parse_field<F>(field: &str, what: &str, line: usize) -> Result<F, GraphError>
where
    F: FromStr,
    F::Err: Display,
{
    field
        .parse()
        .map_err(|err| parse_error(line, format!("invalid {what} `{field}`: {err}")))
}

fn parse_error(line: usize, message: String) -> GraphError {
    GraphError::Parse { line, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_directed() {
        let input = "3\n0 1 4\n1 2 7\n";
        let graph = parse_edge_list(input.as_bytes(), true).unwrap();

        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edges().collect::<Vec<_>>(), vec![(0, 1), (1, 2)]);
        assert_eq!(graph.weight(1, 2), Some(&7));
    }

    #[test]
    fn test_parse_undirected_skips_blank_lines() {
        let input = "\n3\n\n0 1 4\n   \n1 2 7";
        let graph = parse_edge_list(input.as_bytes(), false).unwrap();

        assert_eq!(graph.to_string(), "0: (1, 4)\n1: (0, 4), (2, 7)\n2: (1, 7)");
    }

    #[test]
    fn test_parse_errors_carry_line_numbers() {
        let err = parse_edge_list("2\n0 1\n".as_bytes(), true).unwrap_err();
        assert!(matches!(err, GraphError::Parse { line: 2, .. }));

        let err = parse_edge_list("2\n0 1 x\n".as_bytes(), true).unwrap_err();
        assert!(matches!(err, GraphError::Parse { line: 2, .. }));

        let err = parse_edge_list("two\n".as_bytes(), true).unwrap_err();
        assert!(matches!(err, GraphError::Parse { line: 1, .. }));

        let err = parse_edge_list("".as_bytes(), true).unwrap_err();
        assert!(matches!(err, GraphError::Parse { .. }));
    }

    #[test]
    fn test_parse_out_of_range() {
        let err = parse_edge_list("2\n0 5 1\n".as_bytes(), true).unwrap_err();
        assert!(matches!(err, GraphError::OutOfRange { vertex: 5, .. }));
    }

    #[test]
    fn test_random_rejects_impossible_requests() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            random_graph(1, 3, 10, true, &mut rng),
            Err(GraphError::InvalidConfig(_))
        ));
        assert!(matches!(
            random_graph(5, 3, -1, true, &mut rng),
            Err(GraphError::InvalidConfig(_))
        ));
        assert_eq!(random_graph(1, 0, 10, true, &mut rng).unwrap().vertex_count(), 1);
        assert!(matches!(
            random_graph(usize::MAX, 0, 10, true, &mut rng),
            Err(GraphError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_parse_rejects_unallocatable_vertex_count() {
        let input = format!("{}\n", usize::MAX);
        let err = parse_edge_list(input.as_bytes(), true).unwrap_err();
        assert!(matches!(err, GraphError::Parse { line: 1, .. }));

        let err = parse_edge_list("\n18446744073709551615\n0 1 2\n".as_bytes(), true).unwrap_err();
        assert!(matches!(err, GraphError::Parse { line: 2, .. }));
    }
}
