//! Run configuration: which graph, which endpoints, which algorithm.
//!
//! A [`RunConfig`] is what the CLI builds from its arguments, and what a JSON
//! config file deserialises into. Node literals stay strings here and are
//! parsed with [`NodeId`]'s `FromStr` when the run starts.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use pathscope_kernel::node::NodeId;
use pathscope_search::algorithm::{Algorithm, UnknownAlgorithm};
use pathscope_search::policy::{EdgeCostMode, SearchPolicy};

use crate::runner::RunError;

/// One search to run against a catalogue graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    /// Catalogue graph name, e.g. `"CampusMap"`.
    pub graph: String,
    /// Node literal: `"Gate"`, `"7"` or `"(0, 0)"`.
    pub start: String,
    pub goal: String,
    /// `bfs`, `dfs` or `astar`.
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
    #[serde(default)]
    pub policy: PolicyConfig,
}

/// Serialisable mirror of [`SearchPolicy`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolicyConfig {
    #[serde(default)]
    pub max_expansions: Option<u64>,
    /// Charge 1 per edge instead of the edge weight.
    #[serde(default)]
    pub unit_costs: bool,
}

fn default_algorithm() -> String {
    Algorithm::BreadthFirst.as_str().to_string()
}

impl RunConfig {
    #[must_use]
    pub fn new(graph: &str, start: &str, goal: &str, algorithm: Algorithm) -> Self {
        Self {
            graph: graph.to_string(),
            start: start.to_string(),
            goal: goal.to_string(),
            algorithm: algorithm.as_str().to_string(),
            policy: PolicyConfig::default(),
        }
    }

    /// # Errors
    ///
    /// Returns [`UnknownAlgorithm`] if `algorithm` names no algorithm.
    pub fn algorithm(&self) -> Result<Algorithm, UnknownAlgorithm> {
        self.algorithm.parse()
    }

    #[must_use]
    pub fn start_node(&self) -> NodeId {
        parse_node(&self.start)
    }

    #[must_use]
    pub fn goal_node(&self) -> NodeId {
        parse_node(&self.goal)
    }

    #[must_use]
    pub fn search_policy(&self) -> SearchPolicy {
        SearchPolicy {
            max_expansions: self.policy.max_expansions,
            edge_cost: if self.policy.unit_costs {
                EdgeCostMode::Unit
            } else {
                EdgeCostMode::Weighted
            },
        }
    }
}

fn parse_node(literal: &str) -> NodeId {
    match literal.parse::<NodeId>() {
        Ok(node) => node,
        Err(never) => match never {},
    }
}

/// Read a [`RunConfig`] from a JSON file.
///
/// # Errors
///
/// [`RunError::ConfigRead`] if the file cannot be read,
/// [`RunError::ConfigParse`] if it is not a valid config.
pub fn load_run_config(path: &Path) -> Result<RunConfig, RunError> {
    let text = std::fs::read_to_string(path).map_err(|source| RunError::ConfigRead {
        path: PathBuf::from(path),
        source,
    })?;
    let config: RunConfig =
        serde_json::from_str(&text).map_err(|source| RunError::ConfigParse {
            path: PathBuf::from(path),
            source,
        })?;
    tracing::debug!(path = %path.display(), graph = %config.graph, "loaded run config");
    Ok(config)
}
