//! Search entry points.
//!
//! Each function validates the request, builds a [`Stepper`] and drives it to
//! completion. Stepped and atomic searches are therefore the same computation.

use pathscope_kernel::graph::Graph;
use pathscope_kernel::node::NodeId;

use crate::algorithm::Algorithm;
use crate::error::SearchError;
use crate::heuristic::Heuristic;
use crate::policy::SearchPolicy;
use crate::result::SearchResult;
use crate::stepper::Stepper;

/// Everything a search needs besides the graph.
#[derive(Clone)]
pub struct SearchRequest<'h> {
    pub algorithm: Algorithm,
    pub start: NodeId,
    pub goal: NodeId,
    /// Only consulted by [`Algorithm::BestFirst`]; `None` means Euclidean
    /// under weighted costs and zero under unit costs.
    pub heuristic: Option<&'h dyn Heuristic>,
    pub policy: SearchPolicy,
}

impl<'h> SearchRequest<'h> {
    /// Request with the default policy and heuristic.
    #[must_use]
    pub fn new(algorithm: Algorithm, start: impl Into<NodeId>, goal: impl Into<NodeId>) -> Self {
        Self {
            algorithm,
            start: start.into(),
            goal: goal.into(),
            heuristic: None,
            policy: SearchPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_heuristic(mut self, heuristic: &'h dyn Heuristic) -> Self {
        self.heuristic = Some(heuristic);
        self
    }

    #[must_use]
    pub fn with_policy(mut self, policy: SearchPolicy) -> Self {
        self.policy = policy;
        self
    }
}

impl std::fmt::Debug for SearchRequest<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchRequest")
            .field("algorithm", &self.algorithm)
            .field("start", &self.start)
            .field("goal", &self.goal)
            .field("heuristic", &self.heuristic.map(|_| "custom"))
            .field("policy", &self.policy)
            .finish()
    }
}

/// Run a search to completion.
///
/// An unreachable goal is `Ok` with `found == false`.
///
/// # Errors
///
/// Returns [`SearchError`] for pre-flight failures only; see [`Stepper::new`].
#[tracing::instrument(
    skip_all,
    fields(algorithm = %request.algorithm, start = %request.start, goal = %request.goal)
)]
pub fn search(graph: &Graph, request: SearchRequest<'_>) -> Result<SearchResult, SearchError> {
    let mut stepper = Stepper::new(graph, request)?;
    Ok(stepper.run_to_completion())
}

/// Breadth-first search: fewest edges from `start` to `goal`.
///
/// # Errors
///
/// [`SearchError::InvalidNode`] if either endpoint is not in the graph.
pub fn breadth_first(
    graph: &Graph,
    start: &NodeId,
    goal: &NodeId,
) -> Result<SearchResult, SearchError> {
    search(
        graph,
        SearchRequest::new(Algorithm::BreadthFirst, start.clone(), goal.clone()),
    )
}

/// Depth-first search: some path, not necessarily a short one.
///
/// # Errors
///
/// [`SearchError::InvalidNode`] if either endpoint is not in the graph.
pub fn depth_first(
    graph: &Graph,
    start: &NodeId,
    goal: &NodeId,
) -> Result<SearchResult, SearchError> {
    search(
        graph,
        SearchRequest::new(Algorithm::DepthFirst, start.clone(), goal.clone()),
    )
}

/// A* search ordered by `g + h`.
///
/// # Errors
///
/// [`SearchError::InvalidNode`] if either endpoint is not in the graph, or
/// [`SearchError::MissingHeuristicData`] if `heuristic` rejects the graph.
pub fn best_first(
    graph: &Graph,
    start: &NodeId,
    goal: &NodeId,
    heuristic: &dyn Heuristic,
) -> Result<SearchResult, SearchError> {
    search(
        graph,
        SearchRequest::new(Algorithm::BestFirst, start.clone(), goal.clone())
            .with_heuristic(heuristic),
    )
}
