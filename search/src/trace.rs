//! Expansion log: one event per accepted expansion.
//!
//! The log is what an animation replays. `visited_order` in the final result is
//! exactly the `node` column of this log.

use pathscope_kernel::node::NodeId;
use pathscope_kernel::proof::canon::{canonical_float, canonical_json_bytes, CanonError};
use pathscope_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};

use crate::frontier::FrontierKey;

/// A single frontier-pop + neighbour-expansion event.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpandEvent {
    /// Zero-based position in the expansion order.
    pub expansion_order: u64,
    /// The accepted node.
    pub node: NodeId,
    /// The frontier key of the accepted entry.
    pub key: FrontierKey,
    /// Path cost from start to `node` along its recorded predecessor.
    pub g_cost: f64,
    /// Nodes inserted into the frontier by this expansion, in insertion order.
    pub discovered: Vec<NodeId>,
    /// Entries popped and discarded (revisits, stale keys) before `node`.
    pub skipped: u64,
    /// True when `node` is the goal; no neighbours are examined in that case.
    pub goal_reached: bool,
}

impl ExpandEvent {
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "expansion_order": self.expansion_order,
            "node": self.node.to_json_value(),
            "priority": canonical_float(self.key.priority),
            "insertion_index": self.key.insertion_index,
            "g_cost": canonical_float(self.g_cost),
            "discovered": self.discovered.iter().map(NodeId::to_json_value).collect::<Vec<_>>(),
            "skipped": self.skipped,
            "goal_reached": self.goal_reached,
        })
    }
}

/// Canonical JSON bytes of an expansion log.
///
/// # Errors
///
/// Returns [`CanonError`] if serialization fails.
pub fn log_canonical_bytes(events: &[ExpandEvent]) -> Result<Vec<u8>, CanonError> {
    let value = serde_json::Value::Array(events.iter().map(ExpandEvent::to_json_value).collect());
    canonical_json_bytes(&value)
}

/// Content hash of an expansion log.
///
/// # Errors
///
/// Returns [`CanonError`] if serialization fails.
pub fn log_digest(events: &[ExpandEvent]) -> Result<ContentHash, CanonError> {
    let bytes = log_canonical_bytes(events)?;
    Ok(canonical_hash(HashDomain::ExpansionLog, &bytes))
}
