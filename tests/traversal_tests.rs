//! Traversal algorithms composed from the graph and the indexed heap
//!
//! Dijkstra and Prim are written here against the [`IndexedHeap`] trait, the
//! way a caller of this crate would, and checked against brute-force
//! references on random graphs.

use graph_frontier::loader::random_graph;
use graph_frontier::{IndexedHeap, IndexedMinHeap, WeightedGraph};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Single-source shortest distances; `None` marks unreachable vertices
fn dijkstra<H>(graph: &WeightedGraph<i64>, source: usize) -> Vec<Option<i64>>
where
    H: IndexedHeap<usize, i64>,
{
    let mut dist: Vec<Option<i64>> = vec![None; graph.vertex_count()];
    let mut done = vec![false; graph.vertex_count()];
    let mut frontier = H::new();

    dist[source] = Some(0);
    frontier.insert(0, source).unwrap();

    while let Some((d, u)) = frontier.pop() {
        done[u] = true;
        for (v, &w) in graph.neighbors(u).unwrap() {
            if done[v] {
                continue;
            }
            let candidate = d + w;
            match dist[v] {
                Some(current) if current <= candidate => {}
                _ => {
                    if frontier.contains(&v) {
                        frontier.decrease_key(&v, candidate).unwrap();
                    } else {
                        frontier.insert(candidate, v).unwrap();
                    }
                    dist[v] = Some(candidate);
                }
            }
        }
    }

    dist
}

/// Total weight of a minimum spanning forest of an undirected graph
fn prim<H>(graph: &WeightedGraph<i64>) -> i64
where
    H: IndexedHeap<usize, i64>,
{
    let mut in_tree = vec![false; graph.vertex_count()];
    let mut total = 0;

    for root in graph.vertices() {
        if in_tree[root] {
            continue;
        }

        let mut frontier = H::new();
        frontier.insert(0, root).unwrap();
        while let Some((w, u)) = frontier.pop() {
            in_tree[u] = true;
            total += w;
            for (v, &edge) in graph.neighbors(u).unwrap() {
                if in_tree[v] {
                    continue;
                }
                if !frontier.contains(&v) {
                    frontier.insert(edge, v).unwrap();
                } else if edge < *frontier.key_of(&v).unwrap() {
                    frontier.decrease_key(&v, edge).unwrap();
                }
            }
        }
    }

    total
}

/// Bellman-Ford style relaxation until nothing changes
fn reference_distances(graph: &WeightedGraph<i64>, source: usize) -> Vec<Option<i64>> {
    let mut dist: Vec<Option<i64>> = vec![None; graph.vertex_count()];
    dist[source] = Some(0);

    let mut changed = true;
    while changed {
        changed = false;
        for (u, v, &w) in graph.weighted_edges() {
            if let Some(du) = dist[u] {
                if dist[v].map_or(true, |dv| du + w < dv) {
                    dist[v] = Some(du + w);
                    changed = true;
                }
            }
        }
    }

    dist
}

/// Kruskal with a plain union-find
fn reference_forest_weight(graph: &WeightedGraph<i64>) -> i64 {
    fn find(parent: &mut [usize], x: usize) -> usize {
        let mut root = x;
        while parent[root] != root {
            root = parent[root];
        }
        let mut x = x;
        while parent[x] != root {
            let next = parent[x];
            parent[x] = root;
            x = next;
        }
        root
    }

    let mut edges: Vec<(i64, usize, usize)> = graph
        .weighted_edges()
        .filter(|(u, v, _)| u < v)
        .map(|(u, v, &w)| (w, u, v))
        .collect();
    edges.sort_unstable();

    let mut parent: Vec<usize> = graph.vertices().collect();
    let mut total = 0;
    for (w, u, v) in edges {
        let (ru, rv) = (find(&mut parent, u), find(&mut parent, v));
        if ru != rv {
            parent[ru] = rv;
            total += w;
        }
    }
    total
}

#[test]
fn test_dijkstra_prefers_relaxed_path() {
    let mut graph = WeightedGraph::new(5);
    graph.add_directed_edge(0, 1, 10).unwrap();
    graph.add_directed_edge(0, 2, 3).unwrap();
    graph.add_directed_edge(2, 1, 4).unwrap();
    graph.add_directed_edge(1, 3, 2).unwrap();
    graph.add_directed_edge(2, 3, 8).unwrap();

    let dist = dijkstra::<IndexedMinHeap<usize, i64>>(&graph, 0);
    assert_eq!(dist, vec![Some(0), Some(7), Some(3), Some(9), None]);
}

#[test]
fn test_prim_on_small_graph() {
    let mut graph = WeightedGraph::new(4);
    graph.add_undirected_edge(0, 1, 1).unwrap();
    graph.add_undirected_edge(1, 2, 5).unwrap();
    graph.add_undirected_edge(0, 2, 2).unwrap();
    graph.add_undirected_edge(2, 3, 3).unwrap();
    graph.add_undirected_edge(1, 3, 9).unwrap();

    assert_eq!(prim::<IndexedMinHeap<usize, i64>>(&graph), 6);
}

#[test]
fn test_prim_spans_every_component() {
    let mut graph = WeightedGraph::new(5);
    graph.add_undirected_edge(0, 1, 4).unwrap();
    graph.add_undirected_edge(3, 4, 2).unwrap();

    assert_eq!(prim::<IndexedMinHeap<usize, i64>>(&graph), 6);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_dijkstra_matches_reference(
        seed in any::<u64>(),
        vertices in 2usize..25,
        edges in 0usize..80,
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let graph = random_graph(vertices, edges, 20, true, &mut rng).unwrap();

        for source in graph.vertices() {
            prop_assert_eq!(
                dijkstra::<IndexedMinHeap<usize, i64>>(&graph, source),
                reference_distances(&graph, source)
            );
        }
    }

    #[test]
    fn test_prim_matches_kruskal(
        seed in any::<u64>(),
        vertices in 2usize..25,
        edges in 0usize..80,
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let graph = random_graph(vertices, edges, 20, false, &mut rng).unwrap();

        prop_assert_eq!(
            prim::<IndexedMinHeap<usize, i64>>(&graph),
            reference_forest_weight(&graph)
        );
    }
}
