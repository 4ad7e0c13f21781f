//! Harness runner: resolve a [`RunConfig`], search, and package the outcome.
//!
//! # Pipeline
//!
//! ```text
//! graph_by_name() → parse endpoints/algorithm → Stepper::new()
//!   → run_to_completion() → digests (graph, result, expansion log)
//!   → RunReport
//! ```
//!
//! The runner holds no search logic of its own; it only wires catalogue,
//! stepper and kernel hashing together.

use std::fmt::Write as _;
use std::path::PathBuf;

use pathscope_kernel::graph::GraphError;
use pathscope_kernel::node::NodeId;
use pathscope_kernel::proof::canon::{canonical_json_bytes, CanonError};
use pathscope_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};
use pathscope_search::algorithm::UnknownAlgorithm;
use pathscope_search::error::SearchError;
use pathscope_search::policy::SearchPolicy;
use pathscope_search::result::SearchResult;
use pathscope_search::search::SearchRequest;
use pathscope_search::stepper::Stepper;
use pathscope_search::trace::{log_digest, ExpandEvent};

use crate::catalogue::graph_by_name;
use crate::config::RunConfig;
use crate::frames::{record_frames, Frame};

/// Error during a harness run.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// The config names a graph the catalogue does not have.
    #[error("unknown graph {name:?}")]
    UnknownGraph { name: String },

    #[error(transparent)]
    UnknownAlgorithm(#[from] UnknownAlgorithm),

    /// A catalogue graph failed to build.
    #[error("graph build failed: {0}")]
    Graph(#[from] GraphError),

    /// Pre-flight search validation failed.
    #[error(transparent)]
    Search(#[from] SearchError),

    /// Canonical JSON serialization failed while hashing.
    #[error("canonical encoding failed: {0}")]
    Canon(#[from] CanonError),

    #[error("cannot read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Everything one run produced.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub graph: String,
    pub start: NodeId,
    pub goal: NodeId,
    pub policy: SearchPolicy,
    pub result: SearchResult,
    pub events: Vec<ExpandEvent>,
    pub graph_digest: ContentHash,
    pub result_digest: ContentHash,
    pub expansion_log_digest: ContentHash,
}

/// Run one configured search to completion.
///
/// # Errors
///
/// Returns [`RunError`] for an unknown graph or algorithm, or any pre-flight
/// [`SearchError`]. An unreachable goal is a successful run.
pub fn run_once(config: &RunConfig) -> Result<RunReport, RunError> {
    run_recorded(config, 0).map(|(report, _)| report)
}

/// Like [`run_once`], also recording up to `max_frames` animation frames
/// before finishing the search.
///
/// # Errors
///
/// Same as [`run_once`].
pub fn run_recorded(
    config: &RunConfig,
    max_frames: usize,
) -> Result<(RunReport, Vec<Frame>), RunError> {
    let entry = graph_by_name(&config.graph)?.ok_or_else(|| RunError::UnknownGraph {
        name: config.graph.clone(),
    })?;
    let algorithm = config.algorithm()?;
    let start = config.start_node();
    let goal = config.goal_node();
    let policy = config.search_policy();

    let request =
        SearchRequest::new(algorithm, start.clone(), goal.clone()).with_policy(policy.clone());
    let mut stepper = Stepper::new(&entry.graph, request)?;
    let frames = record_frames(&mut stepper, max_frames);
    let result = stepper.run_to_completion();
    let events = stepper.events().to_vec();

    let report = RunReport {
        graph: entry.name.to_string(),
        start,
        goal,
        policy,
        graph_digest: entry.graph.digest()?,
        result_digest: result.digest()?,
        expansion_log_digest: log_digest(&events)?,
        result,
        events,
    };
    tracing::info!(
        graph = %report.graph,
        algorithm = %algorithm,
        found = report.result.found,
        visited = report.result.visited_count,
        "run complete"
    );
    Ok((report, frames))
}

impl RunReport {
    /// Human-readable report.
    ///
    /// ```text
    /// Algorithm: BFS
    /// Graph: Cycle-4
    /// Visited nodes: 4
    /// Path length (edges): 2
    /// Path: ['A', 'B', 'C']
    /// ```
    #[must_use]
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Algorithm: {}", self.result.algorithm.label());
        let _ = writeln!(out, "Graph: {}", self.graph);
        let _ = writeln!(out, "Visited nodes: {}", self.result.visited_count);
        if self.result.found {
            let _ = writeln!(out, "Path length (edges): {}", self.result.path_len());
            let _ = writeln!(out, "Path: {}", render_node_list(&self.result.path));
        } else {
            let _ = writeln!(out, "No path found");
        }
        out
    }

    /// JSON projection of the whole report, digests included.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "graph": self.graph,
            "start": self.start.to_json_value(),
            "goal": self.goal.to_json_value(),
            "policy": {
                "max_expansions": self.policy.max_expansions,
                "edge_cost": self.policy.edge_cost.as_str(),
            },
            "result": self.result.to_json_value(),
            "digests": {
                "graph": self.graph_digest.as_str(),
                "result": self.result_digest.as_str(),
                "expansion_log": self.expansion_log_digest.as_str(),
            },
        })
    }

    /// Content hash over [`RunReport::to_json_value`].
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = canonical_json_bytes(&self.to_json_value())?;
        Ok(canonical_hash(HashDomain::RunReport, &bytes))
    }
}

/// Report rendering of one node: labels single-quoted, integers and coordinates bare.
#[must_use]
pub fn render_node(node: &NodeId) -> String {
    match node {
        NodeId::Label(name) => format!("'{name}'"),
        NodeId::Int(_) | NodeId::Coord(_) => node.to_string(),
    }
}

/// `['A', 'B']`, `[1, 3]`, `[(0, 0), (1, 0)]`.
#[must_use]
pub fn render_node_list(nodes: &[NodeId]) -> String {
    let items: Vec<String> = nodes.iter().map(render_node).collect();
    format!("[{}]", items.join(", "))
}
