//! Algorithm selector.

use std::fmt;
use std::str::FromStr;

/// The three traversal strategies.
///
/// They share one expansion loop and differ only in frontier discipline and
/// in how a popped entry is accepted (see [`crate::stepper`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Algorithm {
    BreadthFirst,
    DepthFirst,
    /// A*: priority `g + h`.
    BestFirst,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Self::BreadthFirst, Self::DepthFirst, Self::BestFirst];

    /// Stable short name (`bfs`, `dfs`, `astar`), used in configs and reports.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BreadthFirst => "bfs",
            Self::DepthFirst => "dfs",
            Self::BestFirst => "astar",
        }
    }

    /// Upper-case label used in human-readable reports.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::BreadthFirst => "BFS",
            Self::DepthFirst => "DFS",
            Self::BestFirst => "ASTAR",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown algorithm {name:?}; expected one of bfs, dfs, astar")]
pub struct UnknownAlgorithm {
    pub name: String,
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(Self::BreadthFirst),
            "dfs" | "depth-first" => Ok(Self::DepthFirst),
            "astar" | "a*" | "best-first" => Ok(Self::BestFirst),
            _ => Err(UnknownAlgorithm {
                name: s.to_string(),
            }),
        }
    }
}
