//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only: they are returned before
//! any expansion happens. An unreachable goal is not an error; it is a normal
//! [`crate::result::SearchResult`] with `found == false`.

use pathscope_kernel::node::NodeId;

/// Which endpoint of a search request an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRole {
    Start,
    Goal,
}

impl std::fmt::Display for NodeRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Goal => f.write_str("goal"),
        }
    }
}

/// Typed failure for pre-flight search validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// Start or goal is not a member of the graph.
    #[error("{role} node {node} is not in the graph")]
    InvalidNode { role: NodeRole, node: NodeId },

    /// The heuristic needs node positions the graph does not carry.
    #[error("heuristic requires a position for node {node}, but the graph has none")]
    MissingHeuristicData { node: NodeId },

    /// The search policy is not usable as given.
    #[error("invalid search policy: {detail}")]
    InvalidPolicy { detail: String },
}
