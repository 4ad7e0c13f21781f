//! Built-in graphs.
//!
//! Every catalogue graph is undirected and carries a position for every
//! node. An edge weighs the straight-line distance between its endpoints, so
//! the Euclidean heuristic never overestimates and A* paths are cheapest.
//! Edges are added in a fixed order, so neighbour order (and therefore
//! DFS/BFS visit order) is stable.

use std::f64::consts::PI;
use std::fmt::Write as _;

use pathscope_kernel::graph::{Graph, GraphBuilder, GraphError};
use pathscope_kernel::node::{NodeId, Position};

/// A named graph in the catalogue.
#[derive(Debug, Clone)]
pub struct CatalogueEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub graph: Graph,
}

/// Names in display order.
pub const GRAPH_NAMES: [&str; 6] = [
    "UrbanGrid-6x6",
    "Ladder-10",
    "BinaryTree-15",
    "HexRing-12",
    "CampusMap",
    "Cycle-4",
];

/// Build every catalogue graph.
///
/// # Errors
///
/// Returns [`GraphError`] if a graph fails to build, which only happens if an
/// edge is added before both of its endpoints are placed.
pub fn catalogue() -> Result<Vec<CatalogueEntry>, GraphError> {
    GRAPH_NAMES
        .iter()
        .filter_map(|name| graph_by_name(name).transpose())
        .collect()
}

/// Look up one catalogue graph; `None` for unknown names. Case-sensitive.
///
/// # Errors
///
/// Returns [`GraphError`] if the graph fails to build.
pub fn graph_by_name(name: &str) -> Result<Option<CatalogueEntry>, GraphError> {
    let (name, description, builder) = match name {
        "UrbanGrid-6x6" => (
            "UrbanGrid-6x6",
            "6x6 street grid with two blocked streets and one diagonal shortcut",
            urban_grid(),
        ),
        "Ladder-10" => ("Ladder-10", "two rails of five nodes joined by rungs", ladder()),
        "BinaryTree-15" => ("BinaryTree-15", "complete binary tree on nodes 1..=15", binary_tree()),
        "HexRing-12" => (
            "HexRing-12",
            "outer and inner hexagon rings with spokes and two chords",
            hex_ring(),
        ),
        "CampusMap" => ("CampusMap", "ten named campus locations", campus_map()),
        "Cycle-4" => ("Cycle-4", "square A-B-C-D-A", cycle_four()),
        _ => return Ok(None),
    };
    Ok(Some(CatalogueEntry {
        name,
        description,
        graph: builder.build()?,
    }))
}

/// `Available graphs:` followed by one `- name: N nodes` line per entry.
#[must_use]
pub fn render_listing(entries: &[CatalogueEntry]) -> String {
    let mut out = String::from("Available graphs:\n");
    for entry in entries {
        let _ = writeln!(out, "- {}: {} nodes", entry.name, entry.graph.node_count());
    }
    out
}

/// `Nodes:` followed by every node of `graph`, comma-separated.
#[must_use]
pub fn render_nodes(graph: &Graph) -> String {
    let nodes: Vec<String> = graph.nodes().map(ToString::to_string).collect();
    format!("Nodes:\n{}\n", nodes.join(", "))
}

/// Undirected edge weighted by the distance between its placed endpoints.
/// An unplaced endpoint yields a NaN weight, which `build` rejects.
fn street(b: &mut GraphBuilder, a: impl Into<NodeId>, c: impl Into<NodeId>) {
    let (a, c) = (a.into(), c.into());
    let weight = match (b.position_of(&a), b.position_of(&c)) {
        (Some(pa), Some(pc)) => pa.distance_to(&pc),
        _ => f64::NAN,
    };
    b.add_undirected_edge(a, c, weight);
}

fn cell(r: i32, c: i32) -> NodeId {
    NodeId::coord(r.into(), c.into())
}

fn urban_grid() -> GraphBuilder {
    const SIZE: i32 = 6;
    let mut b = Graph::builder();
    for r in 0..SIZE {
        for c in 0..SIZE {
            b.set_position(cell(r, c), Position::new(f64::from(c), f64::from(r)));
        }
    }
    for r in 0..SIZE {
        for c in 0..SIZE {
            if r + 1 < SIZE {
                street(&mut b, cell(r, c), cell(r + 1, c));
            }
            if c + 1 < SIZE {
                street(&mut b, cell(r, c), cell(r, c + 1));
            }
        }
    }
    for ((ar, ac), (br, bc)) in [((1, 1), (1, 2)), ((2, 3), (3, 3))] {
        b.remove_undirected_edge(&cell(ar, ac), &cell(br, bc));
    }
    street(&mut b, cell(0, 0), cell(2, 2));
    b
}

fn ladder() -> GraphBuilder {
    let mut b = Graph::builder();
    for i in 0..5_u32 {
        let left = format!("L{i}");
        let right = format!("R{i}");
        b.set_position(left.as_str(), Position::new(0.0, f64::from(i)));
        b.set_position(right.as_str(), Position::new(2.0, f64::from(i)));
        if i > 0 {
            street(&mut b, format!("L{}", i - 1).as_str(), left.as_str());
            street(&mut b, format!("R{}", i - 1).as_str(), right.as_str());
        }
        street(&mut b, left.as_str(), right.as_str());
    }
    b
}

fn binary_tree() -> GraphBuilder {
    const LAST: i64 = 15;
    let mut b = Graph::builder();
    for i in 1..=LAST {
        let level = i.ilog2();
        let width = 1_i64 << level;
        let index = i - width;
        #[allow(clippy::cast_precision_loss)]
        let x = (index + 1) as f64 / (width + 1) as f64 * 10.0;
        let y = -f64::from(level) * 2.0;
        b.set_position(i, Position::new(x, y));
    }
    for i in 1..=LAST {
        for child in [2 * i, 2 * i + 1] {
            if child <= LAST {
                street(&mut b, i, child);
            }
        }
    }
    b
}

fn hex_ring() -> GraphBuilder {
    let outer = |i: u8| format!("O{i}");
    let inner = |i: u8| format!("I{i}");
    let mut b = Graph::builder();
    for i in 0..6 {
        let angle = 2.0 * PI * f64::from(i) / 6.0;
        b.set_position(outer(i).as_str(), Position::new(angle.cos() * 6.0, angle.sin() * 6.0));
    }
    for i in 0..6 {
        let angle = 2.0 * PI * (f64::from(i) + 0.5) / 6.0;
        b.set_position(inner(i).as_str(), Position::new(angle.cos() * 3.5, angle.sin() * 3.5));
    }
    for i in 0..6 {
        street(&mut b, outer(i).as_str(), outer((i + 1) % 6).as_str());
        street(&mut b, inner(i).as_str(), inner((i + 1) % 6).as_str());
    }
    for i in 0..6 {
        street(&mut b, outer(i).as_str(), inner(i).as_str());
    }
    for i in [0, 4] {
        street(&mut b, outer(i).as_str(), inner((i + 3) % 6).as_str());
    }
    b
}

fn campus_map() -> GraphBuilder {
    const PLACES: [(&str, f64, f64); 10] = [
        ("Gate", -5.0, -1.0),
        ("Parking", -6.0, -3.0),
        ("Admin", -2.0, 0.0),
        ("Library", 0.0, 2.5),
        ("Cafeteria", 1.0, -1.5),
        ("LabA", 3.0, 1.5),
        ("LabB", 4.5, -0.5),
        ("Sports", 6.0, -2.5),
        ("Auditorium", 2.0, 3.5),
        ("Hostel", 5.5, 2.5),
    ];
    const PATHS: [(&str, &str); 11] = [
        ("Gate", "Admin"),
        ("Gate", "Parking"),
        ("Admin", "Library"),
        ("Admin", "Cafeteria"),
        ("Library", "Auditorium"),
        ("Library", "LabA"),
        ("Cafeteria", "LabB"),
        ("LabA", "LabB"),
        ("LabB", "Sports"),
        ("Auditorium", "Hostel"),
        ("LabA", "Hostel"),
    ];
    let mut b = Graph::builder();
    for (name, x, y) in PLACES {
        b.set_position(name, Position::new(x, y));
    }
    for (a, c) in PATHS {
        street(&mut b, a, c);
    }
    b
}

fn cycle_four() -> GraphBuilder {
    const CORNERS: [(&str, f64, f64); 4] = [
        ("A", 0.0, 0.0),
        ("B", 1.0, 0.0),
        ("C", 1.0, 1.0),
        ("D", 0.0, 1.0),
    ];
    let mut b = Graph::builder();
    for (name, x, y) in CORNERS {
        b.set_position(name, Position::new(x, y));
    }
    for (a, c) in [("A", "B"), ("A", "D"), ("B", "C"), ("C", "D")] {
        street(&mut b, a, c);
    }
    b
}
