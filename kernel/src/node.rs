//! Node identifiers and positions.

use std::fmt;
use std::str::FromStr;

/// Opaque node identifier.
///
/// Three shapes cover every graph the tool ships: named places (`"Gate"`),
/// integer labels (`7`) and grid coordinates (`(2, 3)`).
///
/// Ordering is total and derived: `Label < Int < Coord`, then by payload.
/// It is only used for deterministic map/set iteration; traversal order is
/// always taken from the graph's edge lists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeId {
    Label(String),
    Int(i64),
    Coord(Vec<i64>),
}

impl NodeId {
    /// Build a label node.
    #[must_use]
    pub fn label(name: impl Into<String>) -> Self {
        Self::Label(name.into())
    }

    /// Build a two-component coordinate node `(a, b)`.
    #[must_use]
    pub fn coord(a: i64, b: i64) -> Self {
        Self::Coord(vec![a, b])
    }

    /// Canonical JSON value. Each variant maps to its own JSON type, so
    /// distinct nodes never encode alike:
    ///
    /// | node | JSON |
    /// |---|---|
    /// | `Label("7")` | `"7"` |
    /// | `Int(7)` | `7` |
    /// | `Coord([2, 3])` | `[2,3]` |
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            Self::Label(s) => serde_json::Value::String(s.clone()),
            Self::Int(i) => serde_json::Value::from(*i),
            Self::Coord(parts) => serde_json::Value::from(parts.clone()),
        }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Label(s) => f.write_str(s),
            Self::Int(i) => write!(f, "{i}"),
            Self::Coord(parts) => {
                f.write_str("(")?;
                for (i, p) in parts.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{p}")?;
                }
                f.write_str(")")
            }
        }
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self::Label(s.to_string())
    }
}

impl From<i64> for NodeId {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

/// Parse a node literal.
///
/// `"(0, 0)"` becomes a coordinate, `"12"` an integer, anything else a label.
/// A literal wrapped in single or double quotes is always a label with the
/// quotes removed, so `'12'` names `Label("12")`. Parsing never fails: an
/// unrecognised literal is simply a label.
impl FromStr for NodeId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(quoted) = unquote(trimmed) {
            return Ok(Self::Label(quoted.to_string()));
        }
        if let Some(inner) = trimmed
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
        {
            let parts: Result<Vec<i64>, _> = inner
                .split(',')
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::parse::<i64>)
                .collect();
            if let Ok(parts) = parts {
                if !parts.is_empty() {
                    return Ok(Self::Coord(parts));
                }
            }
        }
        if let Ok(i) = trimmed.parse::<i64>() {
            return Ok(Self::Int(i));
        }
        Ok(Self::Label(s.to_string()))
    }
}

fn unquote(s: &str) -> Option<&str> {
    ['\'', '"']
        .into_iter()
        .find_map(|q| s.strip_prefix(q)?.strip_suffix(q))
}

/// A planar node position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line distance to `other`.
    #[must_use]
    pub fn distance_to(&self, other: &Position) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}
