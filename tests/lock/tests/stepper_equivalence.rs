//! Stepped and atomic searches must agree exactly.
//!
//! For every algorithm over seeded random graphs and the catalogue:
//! driving a `Stepper` by hand yields the same `SearchResult` as the atomic
//! call, the expansion log lines up with `visited_order`, and `reset()`
//! replays identically.

use lock_tests::search_test_helpers::{random_graph, GraphShape};
use pathscope_harness::catalogue::catalogue;
use pathscope_kernel::graph::Graph;
use pathscope_kernel::node::NodeId;
use pathscope_search::algorithm::Algorithm;
use pathscope_search::heuristic::ZeroHeuristic;
use pathscope_search::result::SearchResult;
use pathscope_search::search::{search, SearchRequest};
use pathscope_search::stepper::{StepOutcome, Stepper, StepperPhase};

fn drive_by_hand(graph: &Graph, request: SearchRequest<'_>) -> (Vec<NodeId>, SearchResult) {
    let mut stepper = Stepper::new(graph, request).unwrap();
    assert_eq!(stepper.phase(), StepperPhase::Ready);
    let mut expanded = Vec::new();
    loop {
        match stepper.advance() {
            StepOutcome::Expanded(event) => {
                assert_eq!(event.expansion_order as usize, expanded.len());
                expanded.push(event.node);
            }
            StepOutcome::Finished(result) => {
                assert_eq!(stepper.phase(), StepperPhase::Done);
                return (expanded, result);
            }
        }
    }
}

fn check(graph: &Graph, request: SearchRequest<'_>) {
    let atomic = search(graph, request.clone()).unwrap();
    let (expanded, stepped) = drive_by_hand(graph, request.clone());
    assert_eq!(atomic, stepped);
    assert_eq!(expanded, stepped.visited_order);

    let mut stepper = Stepper::new(graph, request).unwrap();
    let first = stepper.run_to_completion();
    stepper.reset();
    assert_eq!(stepper.phase(), StepperPhase::Ready);
    let second = stepper.run_to_completion();
    assert_eq!(first, second);
}

#[test]
fn random_graphs_all_algorithms() {
    for seed in 0..40 {
        let shape = GraphShape {
            directed: seed % 2 == 1,
            weighted: seed % 3 != 0,
            ..GraphShape::default()
        };
        let graph = random_graph(seed, shape);
        let goal = NodeId::Int(shape.nodes - 1);
        for algorithm in Algorithm::ALL {
            check(&graph, SearchRequest::new(algorithm, NodeId::Int(0), goal.clone()));
        }
        check(
            &graph,
            SearchRequest::new(Algorithm::BestFirst, NodeId::Int(0), goal)
                .with_heuristic(&ZeroHeuristic),
        );
    }
}

#[test]
fn catalogue_all_algorithms() {
    for entry in catalogue().unwrap() {
        let nodes: Vec<NodeId> = entry.graph.nodes().cloned().collect();
        let (Some(start), Some(goal)) = (nodes.first(), nodes.last()) else {
            continue;
        };
        for algorithm in Algorithm::ALL {
            check(&entry.graph, SearchRequest::new(algorithm, start.clone(), goal.clone()));
        }
    }
}

#[test]
fn snapshot_tracks_progress() {
    let graph = random_graph(11, GraphShape::default());
    let request = SearchRequest::new(Algorithm::BreadthFirst, NodeId::Int(0), NodeId::Int(-1));
    // Unknown goal is rejected before any stepping.
    assert!(Stepper::new(&graph, request).is_err());

    let request = SearchRequest::new(Algorithm::BreadthFirst, NodeId::Int(0), NodeId::Int(11));
    let mut stepper = Stepper::new(&graph, request).unwrap();
    let mut previous = 0;
    while !stepper.is_done() {
        let _ = stepper.advance();
        let snap = stepper.snapshot();
        assert!(snap.visited_order.len() >= previous);
        previous = snap.visited_order.len();
        for node in &snap.frontier_preview {
            assert!(!snap.visited_order.contains(node), "BFS preview holds only unexpanded nodes");
        }
    }
    assert!(stepper.snapshot().done);
}
