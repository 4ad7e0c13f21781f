//! Pathscope Search: BFS, DFS and A* over a [`pathscope_kernel::graph::Graph`].
//!
//! This crate provides the search layer. It depends only on
//! `pathscope_kernel`; it does NOT depend on `pathscope_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! pathscope_kernel  ←  pathscope_search  ←  pathscope_harness
//! (graph, hashing)     (frontier, stepper)   (catalogue, runner, CLI)
//! ```
//!
//! # Key types
//!
//! - [`Stepper`] -- the one expansion loop; advance, reset and snapshot
//! - [`SearchResult`] -- immutable outcome shared by all algorithms
//! - [`Frontier`] -- FIFO, LIFO and min-priority disciplines behind one trait
//! - [`Heuristic`] -- A* estimate; closures qualify
//! - [`SearchPolicy`] -- expansion budget and edge cost model
//!
//! The atomic entry points ([`breadth_first`], [`depth_first`],
//! [`best_first`], [`search`]) are thin wrappers that run a [`Stepper`] to
//! completion.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algorithm;
pub mod error;
pub mod frontier;
pub mod heuristic;
pub mod path;
pub mod policy;
pub mod result;
pub mod search;
pub mod stepper;
pub mod trace;

pub use algorithm::Algorithm;
pub use error::{NodeRole, SearchError};
pub use frontier::{Frontier, FrontierEntry, FrontierKey, PriorityFrontier};
pub use heuristic::{EuclideanHeuristic, Heuristic, ZeroHeuristic};
pub use path::reconstruct_path;
pub use policy::{EdgeCostMode, SearchPolicy};
pub use result::{SearchResult, Termination};
pub use search::{best_first, breadth_first, depth_first, search, SearchRequest};
pub use stepper::{StepOutcome, Stepper, StepperPhase, StepperSnapshot};
pub use trace::ExpandEvent;
