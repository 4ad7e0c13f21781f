//! End-to-end scenarios over the built-in graphs, checked through the
//! harness report the CLI prints.

use lock_tests::search_test_helpers::{assert_valid_path, min_cost, min_edges};
use pathscope_harness::catalogue::{catalogue, graph_by_name};
use pathscope_harness::config::RunConfig;
use pathscope_harness::runner::run_once;
use pathscope_kernel::node::NodeId;
use pathscope_search::algorithm::Algorithm;
use pathscope_search::heuristic::ZeroHeuristic;
use pathscope_search::policy::{EdgeCostMode, SearchPolicy};
use pathscope_search::search::{best_first, breadth_first, search, SearchRequest};

#[test]
fn four_cycle_bfs_and_zero_heuristic_astar_agree() {
    let graph = graph_by_name("Cycle-4").unwrap().unwrap().graph;
    let (a, c) = (NodeId::label("A"), NodeId::label("C"));

    let bfs = breadth_first(&graph, &a, &c).unwrap();
    assert_eq!(
        bfs.visited_order,
        ["A", "B", "D", "C"].map(NodeId::label).to_vec()
    );
    assert_eq!(bfs.path, ["A", "B", "C"].map(NodeId::label).to_vec());
    assert!((bfs.cost - 2.0).abs() < f64::EPSILON);

    let astar = best_first(&graph, &a, &c, &ZeroHeuristic).unwrap();
    assert_eq!(astar.path, bfs.path);
    assert!((astar.cost - bfs.cost).abs() < f64::EPSILON);
}

#[test]
fn campus_bfs_report() {
    let config = RunConfig::new("CampusMap", "Gate", "Hostel", Algorithm::BreadthFirst);
    let report = run_once(&config).unwrap();
    assert_eq!(
        report.render_text(),
        "Algorithm: BFS\n\
         Graph: CampusMap\n\
         Visited nodes: 9\n\
         Path length (edges): 4\n\
         Path: ['Gate', 'Admin', 'Library', 'Auditorium', 'Hostel']\n"
    );
}

#[test]
fn bfs_is_shortest_on_every_catalogue_pair() {
    for entry in catalogue().unwrap() {
        let nodes: Vec<NodeId> = entry.graph.nodes().cloned().collect();
        for start in &nodes {
            for goal in &nodes {
                let result = breadth_first(&entry.graph, start, goal).unwrap();
                let expected = min_edges(&entry.graph, start, goal);
                assert_eq!(result.found, expected.is_some(), "{}: {start}->{goal}", entry.name);
                if let Some(edges) = expected {
                    assert_eq!(result.path_len(), edges, "{}: {start}->{goal}", entry.name);
                    assert_valid_path(&entry.graph, &result.path, start, goal);
                }
            }
        }
    }
}

#[test]
fn default_astar_is_cheapest_on_every_catalogue_pair() {
    let unit = SearchPolicy {
        edge_cost: EdgeCostMode::Unit,
        ..SearchPolicy::default()
    };
    for entry in catalogue().unwrap() {
        let nodes: Vec<NodeId> = entry.graph.nodes().cloned().collect();
        for start in &nodes {
            for goal in &nodes {
                let label = format!("{}: {start}->{goal}", entry.name);
                let request =
                    SearchRequest::new(Algorithm::BestFirst, start.clone(), goal.clone());
                let weighted = search(&entry.graph, request.clone()).unwrap();
                let optimum = min_cost(&entry.graph, start, goal).unwrap();
                assert!(
                    (weighted.cost - optimum).abs() < 1e-9,
                    "{label}: {} vs {optimum}",
                    weighted.cost
                );

                let hops = search(&entry.graph, request.with_policy(unit.clone())).unwrap();
                let fewest = min_edges(&entry.graph, start, goal).unwrap();
                assert_eq!(hops.path_len(), fewest, "{label} (unit costs)");
                let fewest_cost = f64::from(u32::try_from(fewest).unwrap());
                assert!((hops.cost - fewest_cost).abs() < 1e-9, "{label} (unit costs)");
            }
        }
    }
}

#[test]
fn every_algorithm_connects_every_catalogue_pair() {
    // All catalogue graphs are connected.
    for entry in catalogue().unwrap() {
        let nodes: Vec<NodeId> = entry.graph.nodes().cloned().collect();
        let start = &nodes[0];
        for goal in &nodes {
            for algorithm in Algorithm::ALL {
                let config = RunConfig::new(
                    entry.name,
                    &start.to_string(),
                    &goal.to_string(),
                    algorithm,
                );
                let report = run_once(&config).unwrap();
                assert!(report.result.found, "{} {algorithm}: {start}->{goal}", entry.name);
                assert_valid_path(&entry.graph, &report.result.path, start, goal);
            }
        }
    }
}

#[test]
fn grid_blocked_street_forces_detour() {
    let graph = graph_by_name("UrbanGrid-6x6").unwrap().unwrap().graph;
    let result = breadth_first(&graph, &NodeId::coord(1, 1), &NodeId::coord(1, 2)).unwrap();
    assert_eq!(result.path_len(), 3, "(1, 1)-(1, 2) is blocked");
}
