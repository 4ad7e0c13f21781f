//! Search policy types.

use crate::error::SearchError;

/// Budget and cost configuration shared by every algorithm.
///
/// The defaults reproduce the unbounded searches the engine is specified
/// for; the budget exists for interactive callers that want a hard stop.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchPolicy {
    /// Hard cap on accepted expansions (`None` = unbounded).
    pub max_expansions: Option<u64>,
    /// How edge traversal is charged.
    pub edge_cost: EdgeCostMode,
}

impl SearchPolicy {
    /// Validate policy options before any expansion.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if `max_expansions` is zero, which
    /// would end every search before the start node is examined.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "max_expansions must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// Cost charged for traversing an edge of the given weight.
    #[must_use]
    pub fn edge_cost(&self, weight: f64) -> f64 {
        match self.edge_cost {
            EdgeCostMode::Weighted => weight,
            EdgeCostMode::Unit => 1.0,
        }
    }

    /// Whether `expansions` accepted expansions exhaust the budget.
    #[must_use]
    pub fn budget_spent(&self, expansions: u64) -> bool {
        self.max_expansions.is_some_and(|max| expansions >= max)
    }
}

/// Edge cost model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeCostMode {
    /// Charge the edge's weight. Default.
    #[default]
    Weighted,
    /// Charge 1 per edge regardless of weight.
    Unit,
}

impl EdgeCostMode {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Weighted => "weighted",
            Self::Unit => "unit",
        }
    }
}
