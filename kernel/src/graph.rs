//! Immutable weighted graph with fixed edge order and optional positions.
//!
//! Edge order is part of the contract: it is the order in which every
//! traversal considers neighbours, so two graphs with the same edges listed
//! in a different order are different inputs.
//!
//! Node and position maps are `BTreeMap`/`BTreeSet` (not `HashMap`) so that
//! every iteration over the graph is deterministic.

use std::collections::{BTreeMap, BTreeSet};

use crate::node::{NodeId, Position};
use crate::proof::canon::{canonical_float, canonical_json_bytes, CanonError};
use crate::proof::hash::{canonical_hash, ContentHash, HashDomain};

/// A directed outgoing edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub to: NodeId,
    pub weight: f64,
}

/// Typed failure for graph construction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    /// An edge weight was negative, NaN or infinite.
    #[error("edge {from} -> {to} has invalid weight {weight}; weights must be finite and non-negative")]
    InvalidWeight {
        from: NodeId,
        to: NodeId,
        weight: f64,
    },
}

/// Read-only adjacency structure consumed by every search.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Graph {
    nodes: BTreeSet<NodeId>,
    edges: BTreeMap<NodeId, Vec<Edge>>,
    positions: BTreeMap<NodeId, Position>,
}

impl Graph {
    /// Start building a graph.
    #[must_use]
    pub fn builder() -> GraphBuilder {
        GraphBuilder::default()
    }

    /// Whether `node` is a member of the graph.
    #[must_use]
    pub fn contains(&self, node: &NodeId) -> bool {
        self.nodes.contains(node)
    }

    /// Outgoing edges of `node` in their fixed order (empty for sinks and
    /// unknown nodes).
    #[must_use]
    pub fn neighbors(&self, node: &NodeId) -> &[Edge] {
        self.edges.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    #[must_use]
    pub fn position(&self, node: &NodeId) -> Option<Position> {
        self.positions.get(node).copied()
    }

    /// All nodes in `NodeId` order.
    pub fn nodes(&self) -> impl Iterator<Item = &NodeId> {
        self.nodes.iter()
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of directed edges (an undirected edge counts twice).
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }

    /// First node (in `NodeId` order) that has no position, if any.
    #[must_use]
    pub fn missing_position(&self) -> Option<&NodeId> {
        self.nodes.iter().find(|n| !self.positions.contains_key(*n))
    }

    /// Weight of the first listed edge `from -> to`, if one exists.
    #[must_use]
    pub fn edge_weight(&self, from: &NodeId, to: &NodeId) -> Option<f64> {
        self.neighbors(from)
            .iter()
            .find(|e| &e.to == to)
            .map(|e| e.weight)
    }

    /// JSON projection of the topology: nodes, ordered edges, positions.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        let edges: Vec<serde_json::Value> = self
            .edges
            .iter()
            .flat_map(|(from, list)| {
                list.iter().map(move |e| {
                    serde_json::json!([
                        from.to_json_value(),
                        e.to.to_json_value(),
                        canonical_float(e.weight),
                    ])
                })
            })
            .collect();
        let positions: Vec<serde_json::Value> = self
            .positions
            .iter()
            .map(|(node, p)| {
                serde_json::json!([
                    node.to_json_value(),
                    canonical_float(p.x),
                    canonical_float(p.y),
                ])
            })
            .collect();
        serde_json::json!({
            "nodes": self.nodes.iter().map(NodeId::to_json_value).collect::<Vec<_>>(),
            "edges": edges,
            "positions": positions,
        })
    }

    /// Content hash of [`Graph::to_json_value`].
    ///
    /// # Errors
    ///
    /// Propagates [`CanonError`]; cannot occur for graphs built through
    /// [`GraphBuilder`] since every float is pre-encoded as a string.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = canonical_json_bytes(&self.to_json_value())?;
        Ok(canonical_hash(HashDomain::GraphTopology, &bytes))
    }
}

/// Incremental constructor for [`Graph`].
///
/// Endpoints of added edges and positioned nodes become members implicitly.
/// Weights are validated once, in [`GraphBuilder::build`].
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    graph: Graph,
}

impl GraphBuilder {
    /// Add an isolated node (no-op if present).
    #[must_use]
    pub fn node(mut self, node: impl Into<NodeId>) -> Self {
        self.add_node(node);
        self
    }

    pub fn add_node(&mut self, node: impl Into<NodeId>) -> &mut Self {
        let node = node.into();
        self.graph.edges.entry(node.clone()).or_default();
        self.graph.nodes.insert(node);
        self
    }

    /// Append a directed edge `from -> to` after any existing edges of `from`.
    pub fn add_edge(
        &mut self,
        from: impl Into<NodeId>,
        to: impl Into<NodeId>,
        weight: f64,
    ) -> &mut Self {
        let from = from.into();
        let to = to.into();
        self.add_node(to.clone());
        self.add_node(from.clone());
        self.graph
            .edges
            .entry(from)
            .or_default()
            .push(Edge { to, weight });
        self
    }

    /// Append `a -> b` and `b -> a`.
    pub fn add_undirected_edge(
        &mut self,
        a: impl Into<NodeId>,
        b: impl Into<NodeId>,
        weight: f64,
    ) -> &mut Self {
        let a = a.into();
        let b = b.into();
        self.add_edge(a.clone(), b.clone(), weight);
        self.add_edge(b, a, weight)
    }

    /// Remove the first `a -> b` and the first `b -> a` edge, if present.
    ///
    /// Remaining edges keep their relative order.
    pub fn remove_undirected_edge(&mut self, a: &NodeId, b: &NodeId) -> &mut Self {
        self.remove_first_edge(a, b);
        self.remove_first_edge(b, a);
        self
    }

    fn remove_first_edge(&mut self, from: &NodeId, to: &NodeId) {
        if let Some(list) = self.graph.edges.get_mut(from) {
            if let Some(idx) = list.iter().position(|e| &e.to == to) {
                list.remove(idx);
            }
        }
    }

    /// Record the position of `node`, adding it if needed.
    pub fn set_position(&mut self, node: impl Into<NodeId>, position: Position) -> &mut Self {
        let node = node.into();
        self.add_node(node.clone());
        self.graph.positions.insert(node, position);
        self
    }

    /// Position recorded so far for `node`.
    #[must_use]
    pub fn position_of(&self, node: &NodeId) -> Option<Position> {
        self.graph.position(node)
    }

    /// Finish the graph.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidWeight`] for the first edge (in node
    /// order, then edge order) whose weight is negative or not finite.
    pub fn build(&self) -> Result<Graph, GraphError> {
        for (from, list) in &self.graph.edges {
            if let Some(bad) = list
                .iter()
                .find(|e| !e.weight.is_finite() || e.weight < 0.0)
            {
                return Err(GraphError::InvalidWeight {
                    from: from.clone(),
                    to: bad.to.clone(),
                    weight: bad.weight,
                });
            }
        }
        Ok(self.graph.clone())
    }
}
