//! Resumable search: one expansion per [`Stepper::advance`] call.
//!
//! The stepper is the only implementation of the expansion loop. The atomic
//! entry points in [`crate::search`] build a stepper and drive it to
//! completion, so a stepped search and an atomic search run the same code and
//! produce the same [`SearchResult`].
//!
//! # Per-algorithm rules
//!
//! | | frontier | visited marked | predecessor set | popped entry skipped when |
//! |---|---|---|---|---|
//! | BFS | FIFO | on enqueue | on enqueue, never overwritten | never |
//! | DFS | LIFO, neighbours pushed in reverse | on pop | on accept, from the entry's parent | node already accepted |
//! | A* | min `g + h` | on pop | whenever `g` strictly improves | `g` worse than best known, or node closed with `g` at least as good |

use std::collections::{BTreeMap, BTreeSet};

use pathscope_kernel::graph::Graph;
use pathscope_kernel::node::NodeId;

use crate::algorithm::Algorithm;
use crate::error::{NodeRole, SearchError};
use crate::frontier::{frontier_for, Frontier, FrontierEntry, FrontierKey};
use crate::heuristic::{EuclideanHeuristic, Heuristic, ZeroHeuristic};
use crate::path::reconstruct_path;
use crate::policy::{EdgeCostMode, SearchPolicy};
use crate::result::{SearchResult, Termination};
use crate::search::SearchRequest;
use crate::trace::ExpandEvent;

/// Lifecycle of a stepper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepperPhase {
    /// Seeded, nothing expanded yet.
    Ready,
    /// At least one node expanded, not terminal.
    Running,
    /// Goal reached, frontier exhausted, or budget spent.
    Done,
}

/// What a single [`Stepper::advance`] call did.
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    /// Exactly one node was accepted and expanded. If it was the goal the
    /// stepper is now [`StepperPhase::Done`].
    Expanded(ExpandEvent),
    /// The search is over; repeated calls return the same result.
    Finished(SearchResult),
}

/// Point-in-time view for a presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct StepperSnapshot {
    pub phase: StepperPhase,
    pub visited_order: Vec<NodeId>,
    /// Nodes still waiting for expansion, in the order they would come out.
    /// Entries that would be skipped and repeated nodes are left out.
    pub frontier_preview: Vec<NodeId>,
    pub done: bool,
}

/// Mutable search state: everything a loop-based search keeps in locals.
#[derive(Debug)]
struct StepperState {
    frontier: Box<dyn Frontier>,
    next_insertion: u64,
    /// BFS only: nodes ever enqueued.
    discovered: BTreeSet<NodeId>,
    /// Accepted nodes with the `g` they were accepted at.
    closed: BTreeMap<NodeId, f64>,
    /// Best known `g` per node.
    best_g: BTreeMap<NodeId, f64>,
    predecessors: BTreeMap<NodeId, NodeId>,
    visited_order: Vec<NodeId>,
    events: Vec<ExpandEvent>,
    finished: Option<SearchResult>,
}

impl StepperState {
    fn empty(algorithm: Algorithm) -> Self {
        Self {
            frontier: frontier_for(algorithm),
            next_insertion: 0,
            discovered: BTreeSet::new(),
            closed: BTreeMap::new(),
            best_g: BTreeMap::new(),
            predecessors: BTreeMap::new(),
            visited_order: Vec::new(),
            events: Vec::new(),
            finished: None,
        }
    }

    fn push(&mut self, node: NodeId, parent: Option<NodeId>, g_cost: f64, priority: f64) {
        let key = FrontierKey {
            priority,
            insertion_index: self.next_insertion,
        };
        self.next_insertion += 1;
        self.frontier.insert(FrontierEntry {
            key,
            node,
            parent,
            g_cost,
        });
    }
}

/// A search that can be advanced one expansion at a time.
pub struct Stepper<'g> {
    graph: &'g Graph,
    algorithm: Algorithm,
    start: NodeId,
    goal: NodeId,
    heuristic: &'g dyn Heuristic,
    policy: SearchPolicy,
    state: StepperState,
}

impl std::fmt::Debug for Stepper<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stepper")
            .field("algorithm", &self.algorithm)
            .field("start", &self.start)
            .field("goal", &self.goal)
            .field("policy", &self.policy)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<'g> Stepper<'g> {
    /// Validate a request and seed the frontier with the start node.
    ///
    /// Best-first requests without an explicit heuristic use
    /// [`EuclideanHeuristic`] under [`EdgeCostMode::Weighted`] and
    /// [`ZeroHeuristic`] under [`EdgeCostMode::Unit`], where straight-line
    /// distance is not a lower bound on hop count. Heuristics are ignored by
    /// BFS and DFS.
    ///
    /// # Errors
    ///
    /// - [`SearchError::InvalidPolicy`] if the policy fails validation.
    /// - [`SearchError::InvalidNode`] if start or goal is not in the graph.
    /// - [`SearchError::MissingHeuristicData`] if the heuristic's pre-flight
    ///   check fails.
    pub fn new(graph: &'g Graph, request: SearchRequest<'g>) -> Result<Self, SearchError> {
        let SearchRequest {
            algorithm,
            start,
            goal,
            heuristic,
            policy,
        } = request;

        policy.validate()?;
        if !graph.contains(&start) {
            return Err(SearchError::InvalidNode {
                role: NodeRole::Start,
                node: start,
            });
        }
        if !graph.contains(&goal) {
            return Err(SearchError::InvalidNode {
                role: NodeRole::Goal,
                node: goal,
            });
        }

        let heuristic: &'g dyn Heuristic = match (algorithm, heuristic) {
            (Algorithm::BestFirst, Some(h)) => h,
            (Algorithm::BestFirst, None) => match policy.edge_cost {
                EdgeCostMode::Weighted => &EuclideanHeuristic,
                EdgeCostMode::Unit => &ZeroHeuristic,
            },
            _ => &ZeroHeuristic,
        };
        if algorithm == Algorithm::BestFirst {
            heuristic.check(graph, &goal)?;
        }

        let mut stepper = Self {
            graph,
            algorithm,
            start,
            goal,
            heuristic,
            policy,
            state: StepperState::empty(algorithm),
        };
        stepper.reset();
        Ok(stepper)
    }

    /// Discard all progress and reseed the frontier with the start node.
    pub fn reset(&mut self) {
        let mut state = StepperState::empty(self.algorithm);
        let start_priority = match self.algorithm {
            Algorithm::BestFirst => self.heuristic.estimate(self.graph, &self.start, &self.goal),
            Algorithm::BreadthFirst | Algorithm::DepthFirst => 0.0,
        };
        state.discovered.insert(self.start.clone());
        state.best_g.insert(self.start.clone(), 0.0);
        state.push(self.start.clone(), None, 0.0, start_priority);
        self.state = state;
    }

    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    #[must_use]
    pub fn phase(&self) -> StepperPhase {
        if self.state.finished.is_some() {
            StepperPhase::Done
        } else if self.state.visited_order.is_empty() {
            StepperPhase::Ready
        } else {
            StepperPhase::Running
        }
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.state.finished.is_some()
    }

    /// The terminal result, once [`StepperPhase::Done`].
    #[must_use]
    pub fn result(&self) -> Option<&SearchResult> {
        self.state.finished.as_ref()
    }

    /// Every expansion so far, in order.
    #[must_use]
    pub fn events(&self) -> &[ExpandEvent] {
        &self.state.events
    }

    /// Nodes expanded so far, in order.
    #[must_use]
    pub fn visited_order(&self) -> &[NodeId] {
        &self.state.visited_order
    }

    /// Copy out the state a presentation layer draws.
    #[must_use]
    pub fn snapshot(&self) -> StepperSnapshot {
        let mut seen = BTreeSet::new();
        let frontier_preview = self
            .state
            .frontier
            .pending()
            .into_iter()
            .filter(|entry| self.accepts(entry))
            .filter(|entry| seen.insert(entry.node.clone()))
            .map(|entry| entry.node.clone())
            .collect();
        StepperSnapshot {
            phase: self.phase(),
            visited_order: self.state.visited_order.clone(),
            frontier_preview,
            done: self.is_done(),
        }
    }

    /// Drive the search until it finishes and return the result.
    pub fn run_to_completion(&mut self) -> SearchResult {
        loop {
            if let StepOutcome::Finished(result) = self.advance() {
                return result;
            }
        }
    }

    /// Expand exactly one node, or report the terminal result.
    ///
    /// Entries the current algorithm would skip (revisits, stale priority
    /// copies) are discarded within the same call and counted in
    /// [`ExpandEvent::skipped`].
    pub fn advance(&mut self) -> StepOutcome {
        if let Some(result) = &self.state.finished {
            return StepOutcome::Finished(result.clone());
        }

        if self.policy.budget_spent(self.state.visited_order.len() as u64) {
            let termination = if self.has_pending_work() {
                Termination::ExpansionBudgetExceeded
            } else {
                Termination::FrontierExhausted
            };
            return StepOutcome::Finished(self.finish(termination, 0.0));
        }

        let mut skipped = 0u64;
        let entry = loop {
            match self.state.frontier.extract() {
                None => {
                    return StepOutcome::Finished(self.finish(Termination::FrontierExhausted, 0.0));
                }
                Some(entry) if self.accepts(&entry) => break entry,
                Some(_) => skipped += 1,
            }
        };

        self.accept(&entry);
        let goal_reached = entry.node == self.goal;
        let discovered = if goal_reached {
            Vec::new()
        } else {
            self.expand(&entry)
        };

        let event = ExpandEvent {
            expansion_order: self.state.events.len() as u64,
            node: entry.node,
            key: entry.key,
            g_cost: entry.g_cost,
            discovered,
            skipped,
            goal_reached,
        };
        tracing::trace!(
            algorithm = %self.algorithm,
            order = event.expansion_order,
            node = %event.node,
            discovered = event.discovered.len(),
            skipped,
            "expanded"
        );
        self.state.events.push(event.clone());

        if goal_reached {
            self.finish(Termination::GoalReached, entry.g_cost);
        }
        StepOutcome::Expanded(event)
    }

    /// Whether any queued entry would still be accepted.
    fn has_pending_work(&self) -> bool {
        self.state
            .frontier
            .pending()
            .into_iter()
            .any(|entry| self.accepts(entry))
    }

    fn accepts(&self, entry: &FrontierEntry) -> bool {
        match self.algorithm {
            Algorithm::BreadthFirst => true,
            Algorithm::DepthFirst => !self.state.closed.contains_key(&entry.node),
            Algorithm::BestFirst => {
                let stale = self
                    .state
                    .best_g
                    .get(&entry.node)
                    .is_some_and(|&best| entry.g_cost > best);
                let settled = self
                    .state
                    .closed
                    .get(&entry.node)
                    .is_some_and(|&closed_g| closed_g <= entry.g_cost);
                !stale && !settled
            }
        }
    }

    fn accept(&mut self, entry: &FrontierEntry) {
        let state = &mut self.state;
        state.closed.insert(entry.node.clone(), entry.g_cost);
        if self.algorithm == Algorithm::DepthFirst {
            if let Some(parent) = &entry.parent {
                state.predecessors.insert(entry.node.clone(), parent.clone());
            }
            state.best_g.insert(entry.node.clone(), entry.g_cost);
        }
        state.visited_order.push(entry.node.clone());
    }

    /// Insert the neighbours of an accepted entry; returns what was inserted.
    fn expand(&mut self, entry: &FrontierEntry) -> Vec<NodeId> {
        let edges = self.graph.neighbors(&entry.node);
        let mut discovered = Vec::new();

        match self.algorithm {
            Algorithm::BreadthFirst => {
                for edge in edges {
                    if !self.state.discovered.insert(edge.to.clone()) {
                        continue;
                    }
                    let g = entry.g_cost + self.policy.edge_cost(edge.weight);
                    self.state
                        .predecessors
                        .insert(edge.to.clone(), entry.node.clone());
                    self.state
                        .push(edge.to.clone(), Some(entry.node.clone()), g, g);
                    discovered.push(edge.to.clone());
                }
            }
            Algorithm::DepthFirst => {
                // Reverse push: the first-listed neighbour ends on top.
                for edge in edges.iter().rev() {
                    if self.state.closed.contains_key(&edge.to) {
                        continue;
                    }
                    let g = entry.g_cost + self.policy.edge_cost(edge.weight);
                    self.state
                        .push(edge.to.clone(), Some(entry.node.clone()), g, g);
                    discovered.push(edge.to.clone());
                }
            }
            Algorithm::BestFirst => {
                for edge in edges {
                    let tentative = entry.g_cost + self.policy.edge_cost(edge.weight);
                    let improves = self
                        .state
                        .best_g
                        .get(&edge.to)
                        .is_none_or(|&best| tentative < best);
                    if !improves {
                        continue;
                    }
                    self.state.best_g.insert(edge.to.clone(), tentative);
                    self.state
                        .predecessors
                        .insert(edge.to.clone(), entry.node.clone());
                    let h = self.heuristic.estimate(self.graph, &edge.to, &self.goal);
                    self.state
                        .push(edge.to.clone(), Some(entry.node.clone()), tentative, tentative + h);
                    discovered.push(edge.to.clone());
                }
            }
        }
        discovered
    }

    fn finish(&mut self, termination: Termination, goal_cost: f64) -> SearchResult {
        let path = if termination == Termination::GoalReached {
            reconstruct_path(&self.state.predecessors, &self.start, &self.goal).unwrap_or_default()
        } else {
            Vec::new()
        };
        let found = !path.is_empty();
        let result = SearchResult {
            algorithm: self.algorithm,
            found,
            visited_order: self.state.visited_order.clone(),
            path,
            cost: if found { goal_cost } else { 0.0 },
            visited_count: self.state.visited_order.len(),
            termination,
            frontier_high_water: self.state.frontier.high_water(),
        };
        tracing::debug!(
            algorithm = %self.algorithm,
            start = %self.start,
            goal = %self.goal,
            termination = termination.as_str(),
            found,
            visited = result.visited_count,
            "search finished"
        );
        self.state.finished = Some(result.clone());
        result
    }
}
