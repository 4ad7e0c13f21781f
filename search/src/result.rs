//! The immutable outcome of a search.

use pathscope_kernel::node::NodeId;
use pathscope_kernel::proof::canon::{canonical_float, canonical_json_bytes, CanonError};
use pathscope_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};

use crate::algorithm::Algorithm;

/// Why the search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The goal was expanded.
    GoalReached,
    /// The frontier emptied without reaching the goal.
    FrontierExhausted,
    /// `max_expansions` was hit before either of the above.
    ExpansionBudgetExceeded,
}

impl Termination {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::GoalReached => "goal_reached",
            Self::FrontierExhausted => "frontier_exhausted",
            Self::ExpansionBudgetExceeded => "expansion_budget_exceeded",
        }
    }
}

/// Result of a search.
///
/// Built once when a search finishes and never mutated. An unreachable goal is
/// `found == false` with an empty `path` and zero `cost`; `visited_order` still
/// lists everything that was expanded.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub algorithm: Algorithm,
    pub found: bool,
    /// Nodes in expansion order (not discovery order).
    pub visited_order: Vec<NodeId>,
    /// Start to goal inclusive; empty when not found.
    pub path: Vec<NodeId>,
    /// Sum of policy edge costs along `path`; `0` when not found.
    pub cost: f64,
    pub visited_count: usize,
    pub termination: Termination,
    /// Largest number of entries the frontier held at once.
    pub frontier_high_water: u64,
}

impl SearchResult {
    /// Number of edges on the path (`0` when not found).
    #[must_use]
    pub fn path_len(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// JSON projection. Costs are canonical float strings.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        let nodes = |list: &[NodeId]| -> Vec<serde_json::Value> {
            list.iter().map(NodeId::to_json_value).collect()
        };
        serde_json::json!({
            "algorithm": self.algorithm.as_str(),
            "found": self.found,
            "visited_order": nodes(&self.visited_order),
            "path": nodes(&self.path),
            "cost": canonical_float(self.cost),
            "visited_count": self.visited_count,
            "termination": self.termination.as_str(),
            "frontier_high_water": self.frontier_high_water,
        })
    }

    /// Canonical JSON bytes; equal results always produce equal bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// Content hash of the canonical bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(HashDomain::SearchResult, &bytes))
    }
}
