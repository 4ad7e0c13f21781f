//! Seeded graph generation and brute-force oracles.
//!
//! The oracles deliberately avoid queues and heaps: they relax every edge
//! until nothing changes, so they share no code path with the engine under
//! test.

use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use pathscope_kernel::graph::Graph;
use pathscope_kernel::node::{NodeId, Position};

/// Shape of a generated graph.
#[derive(Debug, Clone, Copy)]
pub struct GraphShape {
    pub nodes: i64,
    /// Probability that a given ordered pair gets an edge.
    pub edge_probability: f64,
    pub directed: bool,
    /// When false every weight is `1.0`.
    pub weighted: bool,
}

impl Default for GraphShape {
    fn default() -> Self {
        Self {
            nodes: 12,
            edge_probability: 0.2,
            directed: false,
            weighted: true,
        }
    }
}

/// Random graph on integer nodes `0..shape.nodes`, every node positioned.
///
/// Weighted edges cost at least the Euclidean distance between their
/// endpoints, so [`pathscope_search::heuristic::EuclideanHeuristic`] is
/// admissible and consistent on the result.
///
/// # Panics
///
/// Panics if the generated graph fails to build, which would mean the
/// generator produced a negative or non-finite weight.
#[must_use]
pub fn random_graph(seed: u64, shape: GraphShape) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut b = Graph::builder();
    let mut positions = Vec::new();
    for i in 0..shape.nodes {
        let p = Position::new(rng.gen_range(0.0..10.0), rng.gen_range(0.0..10.0));
        b.set_position(i, p);
        positions.push(p);
    }
    for (i, from) in positions.iter().enumerate() {
        for (j, to) in positions.iter().enumerate() {
            if i == j || (!shape.directed && j < i) {
                continue;
            }
            if !rng.gen_bool(shape.edge_probability) {
                continue;
            }
            let weight = if shape.weighted {
                from.distance_to(to) * rng.gen_range(1.0..2.0)
            } else {
                1.0
            };
            let (a, c) = (node(i), node(j));
            if shape.directed {
                b.add_edge(a, c, weight);
            } else {
                b.add_undirected_edge(a, c, weight);
            }
        }
    }
    b.build().expect("generated weights are finite and non-negative")
}

fn node(index: usize) -> NodeId {
    NodeId::Int(i64::try_from(index).expect("small graphs"))
}

/// Every node reachable from `start`, including `start`.
#[must_use]
pub fn reachable(graph: &Graph, start: &NodeId) -> BTreeSet<NodeId> {
    let mut seen = BTreeSet::from([start.clone()]);
    loop {
        let mut grew = false;
        for from in graph.nodes() {
            if !seen.contains(from) {
                continue;
            }
            let next: Vec<NodeId> = graph.neighbors(from).iter().map(|e| e.to.clone()).collect();
            for to in next {
                grew |= seen.insert(to);
            }
        }
        if !grew {
            return seen;
        }
    }
}

/// Minimum cost from `start` to `goal` by Bellman-Ford relaxation, using
/// `cost(weight)` per edge. `None` if unreachable.
#[must_use]
pub fn min_cost_with(
    graph: &Graph,
    start: &NodeId,
    goal: &NodeId,
    cost: impl Fn(f64) -> f64,
) -> Option<f64> {
    let mut dist = std::collections::BTreeMap::from([(start.clone(), 0.0_f64)]);
    for _ in 0..graph.node_count() {
        let mut changed = false;
        for from in graph.nodes() {
            let Some(&d) = dist.get(from) else { continue };
            for edge in graph.neighbors(from) {
                let candidate = d + cost(edge.weight);
                let better = dist.get(&edge.to).is_none_or(|&old| candidate < old);
                if better {
                    dist.insert(edge.to.clone(), candidate);
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }
    dist.get(goal).copied()
}

/// Minimum weighted cost from `start` to `goal`.
#[must_use]
pub fn min_cost(graph: &Graph, start: &NodeId, goal: &NodeId) -> Option<f64> {
    min_cost_with(graph, start, goal, |w| w)
}

/// Fewest edges from `start` to `goal`.
///
/// # Panics
///
/// Panics only if the edge count does not fit in `usize`.
#[must_use]
pub fn min_edges(graph: &Graph, start: &NodeId, goal: &NodeId) -> Option<usize> {
    min_cost_with(graph, start, goal, |_| 1.0).map(|d| {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let edges = d.round() as usize;
        edges
    })
}

/// Sum of edge weights along `path`; `None` if two consecutive nodes are
/// not joined by an edge.
#[must_use]
pub fn path_cost(graph: &Graph, path: &[NodeId]) -> Option<f64> {
    path.windows(2)
        .map(|pair| graph.edge_weight(&pair[0], &pair[1]))
        .sum()
}

/// Assert `path` runs from `start` to `goal` along edges without repeats.
///
/// # Panics
///
/// Panics with a description of the first violated condition.
pub fn assert_valid_path(graph: &Graph, path: &[NodeId], start: &NodeId, goal: &NodeId) {
    assert_eq!(path.first(), Some(start), "path must begin at start");
    assert_eq!(path.last(), Some(goal), "path must end at goal");
    for pair in path.windows(2) {
        assert!(
            graph.edge_weight(&pair[0], &pair[1]).is_some(),
            "no edge {} -> {}",
            pair[0],
            pair[1]
        );
    }
    let distinct: BTreeSet<&NodeId> = path.iter().collect();
    assert_eq!(distinct.len(), path.len(), "path repeats a node: {path:?}");
}
