//! Shared helpers for pathscope benchmark suites.

#![allow(clippy::cast_precision_loss)]

use pathscope_kernel::graph::{Graph, GraphError};
use pathscope_kernel::node::{NodeId, Position};

/// `side x side` 4-connected grid, every node positioned, weights in
/// `[1, 2)` drawn from a fixed pattern so runs are reproducible.
///
/// # Errors
///
/// Propagates [`GraphError`] from the builder.
pub fn weighted_grid(side: i64) -> Result<Graph, GraphError> {
    let mut b = Graph::builder();
    for r in 0..side {
        for c in 0..side {
            b.set_position(NodeId::coord(r, c), Position::new(c as f64, r as f64));
        }
    }
    for r in 0..side {
        for c in 0..side {
            let weight = 1.0 + ((r * 7 + c * 13) % 10) as f64 / 10.0;
            if r + 1 < side {
                b.add_undirected_edge(NodeId::coord(r, c), NodeId::coord(r + 1, c), weight);
            }
            if c + 1 < side {
                b.add_undirected_edge(NodeId::coord(r, c), NodeId::coord(r, c + 1), weight);
            }
        }
    }
    b.build()
}

/// Opposite corners of a [`weighted_grid`].
#[must_use]
pub fn corners(side: i64) -> (NodeId, NodeId) {
    (NodeId::coord(0, 0), NodeId::coord(side - 1, side - 1))
}
