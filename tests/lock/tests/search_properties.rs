//! Algorithm guarantees checked against brute-force oracles on seeded
//! random graphs.

use std::collections::BTreeSet;

use lock_tests::search_test_helpers::{
    assert_valid_path, min_cost, min_edges, path_cost, random_graph, reachable, GraphShape,
};
use pathscope_kernel::graph::Graph;
use pathscope_kernel::node::NodeId;
use pathscope_search::heuristic::{EuclideanHeuristic, ZeroHeuristic};
use pathscope_search::result::Termination;
use pathscope_search::search::{best_first, breadth_first, depth_first};

const SEEDS: std::ops::Range<u64> = 100..160;

fn graphs() -> impl Iterator<Item = (u64, Graph)> {
    SEEDS.map(|seed| {
        let shape = GraphShape {
            nodes: 14,
            edge_probability: 0.18,
            directed: seed % 2 == 0,
            weighted: true,
        };
        (seed, random_graph(seed, shape))
    })
}

fn endpoints() -> [(NodeId, NodeId); 3] {
    [
        (NodeId::Int(0), NodeId::Int(13)),
        (NodeId::Int(5), NodeId::Int(2)),
        (NodeId::Int(9), NodeId::Int(9)),
    ]
}

#[test]
fn bfs_finds_fewest_edges() {
    for (seed, graph) in graphs() {
        for (start, goal) in endpoints() {
            let result = breadth_first(&graph, &start, &goal).unwrap();
            match min_edges(&graph, &start, &goal) {
                Some(edges) => {
                    assert!(result.found, "seed {seed}: {start}->{goal} reachable");
                    assert_eq!(result.path_len(), edges, "seed {seed}: {start}->{goal}");
                    assert_valid_path(&graph, &result.path, &start, &goal);
                }
                None => assert!(!result.found, "seed {seed}: {start}->{goal} unreachable"),
            }
        }
    }
}

#[test]
fn dfs_paths_are_valid() {
    for (seed, graph) in graphs() {
        for (start, goal) in endpoints() {
            let result = depth_first(&graph, &start, &goal).unwrap();
            assert_eq!(
                result.found,
                min_edges(&graph, &start, &goal).is_some(),
                "seed {seed}: {start}->{goal}"
            );
            if result.found {
                assert_valid_path(&graph, &result.path, &start, &goal);
                let cost = path_cost(&graph, &result.path).unwrap();
                assert!(
                    (cost - result.cost).abs() < 1e-9,
                    "seed {seed}: reported cost is path weight"
                );
            }
        }
    }
}

#[test]
fn astar_is_optimal_with_admissible_heuristics() {
    for (seed, graph) in graphs() {
        for (start, goal) in endpoints() {
            let oracle = min_cost(&graph, &start, &goal);
            for result in [
                best_first(&graph, &start, &goal, &EuclideanHeuristic).unwrap(),
                best_first(&graph, &start, &goal, &ZeroHeuristic).unwrap(),
            ] {
                match oracle {
                    Some(best) => {
                        assert!(result.found, "seed {seed}: {start}->{goal}");
                        assert_valid_path(&graph, &result.path, &start, &goal);
                        assert!(
                            (result.cost - best).abs() < 1e-9,
                            "seed {seed}: {start}->{goal} cost {} vs optimum {best}",
                            result.cost
                        );
                        let walked = path_cost(&graph, &result.path).unwrap();
                        assert!((walked - result.cost).abs() < 1e-9);
                    }
                    None => assert!(!result.found),
                }
            }
        }
    }
}

#[test]
fn euclidean_heuristic_prunes_expansions() {
    let mut fewer_somewhere = false;
    for (_, graph) in graphs() {
        let (start, goal) = (NodeId::Int(0), NodeId::Int(13));
        let informed = best_first(&graph, &start, &goal, &EuclideanHeuristic).unwrap();
        let blind = best_first(&graph, &start, &goal, &ZeroHeuristic).unwrap();
        if informed.found {
            fewer_somewhere |= informed.visited_count < blind.visited_count;
        }
    }
    assert!(fewer_somewhere, "the heuristic should prune at least one search");
}

#[test]
fn unreachable_goal_visits_exactly_the_reachable_set() {
    // The generated graph plus one node nothing points at.
    for (seed, generated) in graphs() {
        let mut b = Graph::builder();
        for from in generated.nodes() {
            b.add_node(from.clone());
            for edge in generated.neighbors(from) {
                b.add_edge(from.clone(), edge.to.clone(), edge.weight);
            }
        }
        b.add_node("island");
        let graph = b.build().unwrap();
        let start = NodeId::Int(0);
        let goal = NodeId::label("island");
        let expected = reachable(&graph, &start);

        for result in [
            breadth_first(&graph, &start, &goal).unwrap(),
            depth_first(&graph, &start, &goal).unwrap(),
        ] {
            assert!(!result.found, "seed {seed}");
            assert!(result.path.is_empty());
            assert!(result.cost.abs() < f64::EPSILON);
            assert_eq!(result.termination, Termination::FrontierExhausted);
            let visited: BTreeSet<NodeId> = result.visited_order.iter().cloned().collect();
            assert_eq!(visited.len(), result.visited_order.len(), "seed {seed}: no repeats");
            assert_eq!(visited, expected, "seed {seed}");
        }

        let astar = best_first(&graph, &start, &goal, &ZeroHeuristic).unwrap();
        assert!(!astar.found);
        let visited: BTreeSet<NodeId> = astar.visited_order.iter().cloned().collect();
        assert_eq!(visited, expected, "seed {seed}");
    }
}
