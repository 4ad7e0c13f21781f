//! Animation frames: what a UI would draw after each `advance()`.

use std::fmt::Write as _;

use pathscope_kernel::node::NodeId;
use pathscope_search::stepper::{StepOutcome, Stepper, StepperSnapshot};
use pathscope_search::trace::ExpandEvent;

use crate::runner::{render_node, render_node_list};

/// One expansion and the state right after it.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub event: ExpandEvent,
    pub snapshot: StepperSnapshot,
}

impl Frame {
    /// `step 3: expand (1, 0) | frontier [(0, 1), (2, 2)] | visited 4`
    #[must_use]
    pub fn render_line(&self) -> String {
        let mut line = format!(
            "step {}: expand {}",
            self.event.expansion_order,
            render_node(&self.event.node)
        );
        if self.event.goal_reached {
            line.push_str(" (goal)");
        }
        let _ = write!(
            line,
            " | frontier {} | visited {}",
            render_node_list(&self.snapshot.frontier_preview),
            self.snapshot.visited_order.len()
        );
        line
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        let frontier: Vec<_> = self
            .snapshot
            .frontier_preview
            .iter()
            .map(NodeId::to_json_value)
            .collect();
        serde_json::json!({
            "event": self.event.to_json_value(),
            "frontier": frontier,
            "visited": self.snapshot.visited_order.len(),
            "done": self.snapshot.done,
        })
    }
}

/// Drive `stepper` like an animation loop: advance, snapshot, repeat.
///
/// Stops when the search finishes or after `max_frames` expansions, whichever
/// comes first. The stepper is left where recording stopped, so a caller can
/// keep advancing it.
pub fn record_frames(stepper: &mut Stepper<'_>, max_frames: usize) -> Vec<Frame> {
    let mut frames = Vec::new();
    while frames.len() < max_frames {
        match stepper.advance() {
            StepOutcome::Expanded(event) => frames.push(Frame {
                event,
                snapshot: stepper.snapshot(),
            }),
            StepOutcome::Finished(_) => break,
        }
    }
    frames
}
