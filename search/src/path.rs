//! Path reconstruction from a predecessor map.

use std::collections::BTreeMap;

use pathscope_kernel::node::NodeId;

/// Walk predecessors back from `goal` to `start` and return the forward path.
///
/// Returns `None` when the goal was never reached: it has no predecessor and
/// is not the start, or the chain ends somewhere other than `start`. The
/// walk is bounded by the map size, so a malformed (cyclic) map also yields
/// `None` instead of looping.
#[must_use]
pub fn reconstruct_path(
    predecessors: &BTreeMap<NodeId, NodeId>,
    start: &NodeId,
    goal: &NodeId,
) -> Option<Vec<NodeId>> {
    let mut path = vec![goal.clone()];
    let mut current = goal;

    while current != start {
        if path.len() > predecessors.len() + 1 {
            return None;
        }
        current = predecessors.get(current)?;
        path.push(current.clone());
    }

    path.reverse();
    Some(path)
}
