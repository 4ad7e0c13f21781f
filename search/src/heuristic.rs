//! Heuristic estimates for best-first search.

use pathscope_kernel::graph::Graph;
use pathscope_kernel::node::NodeId;

use crate::error::SearchError;

/// Estimate of the remaining cost from a node to the goal.
///
/// A* returns a minimum-cost path when the estimate is admissible (never
/// exceeds the true remaining cost) and consistent. Estimates must be finite
/// and non-negative.
///
/// Any `Fn(&NodeId, &NodeId) -> f64` is a heuristic.
pub trait Heuristic {
    /// Pre-flight check run once when a search is created.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::MissingHeuristicData`] when the graph lacks data
    /// the estimate depends on.
    fn check(&self, _graph: &Graph, _goal: &NodeId) -> Result<(), SearchError> {
        Ok(())
    }

    /// Estimated cost from `node` to `goal`.
    fn estimate(&self, graph: &Graph, node: &NodeId, goal: &NodeId) -> f64;
}

impl<F> Heuristic for F
where
    F: Fn(&NodeId, &NodeId) -> f64,
{
    fn estimate(&self, _graph: &Graph, node: &NodeId, goal: &NodeId) -> f64 {
        self(node, goal)
    }
}

/// Always zero: best-first search degenerates to Dijkstra.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl Heuristic for ZeroHeuristic {
    fn estimate(&self, _graph: &Graph, _node: &NodeId, _goal: &NodeId) -> f64 {
        0.0
    }
}

/// Straight-line distance between node positions.
///
/// Admissible and consistent whenever every edge weight is at least the
/// distance between its endpoints. Requires a position on every node.
#[derive(Debug, Clone, Copy, Default)]
pub struct EuclideanHeuristic;

impl Heuristic for EuclideanHeuristic {
    fn check(&self, graph: &Graph, goal: &NodeId) -> Result<(), SearchError> {
        if graph.position(goal).is_none() {
            return Err(SearchError::MissingHeuristicData { node: goal.clone() });
        }
        match graph.missing_position() {
            Some(node) => Err(SearchError::MissingHeuristicData { node: node.clone() }),
            None => Ok(()),
        }
    }

    fn estimate(&self, graph: &Graph, node: &NodeId, goal: &NodeId) -> f64 {
        match (graph.position(node), graph.position(goal)) {
            (Some(a), Some(b)) => a.distance_to(&b),
            _ => 0.0,
        }
    }
}
