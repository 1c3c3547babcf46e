//! Named, read-only views over a finished run.

use rn_core::{CostMatrix, PathCost};
use rn_mst::SpanningForest;

use crate::PipelineResult;

/// The cost matrix and the spanning forest built from it.
#[derive(Clone, Debug, PartialEq)]
pub struct PipelineReport {
    matrix: CostMatrix,
    forest: SpanningForest,
}

impl PipelineReport {
    pub(crate) fn new(matrix: CostMatrix, forest: SpanningForest) -> Self {
        Self { matrix, forest }
    }

    #[rustfmt::skip]
    pub fn matrix(&self) -> &CostMatrix { &self.matrix }

    #[rustfmt::skip]
    pub fn forest(&self) -> &SpanningForest { &self.forest }

    /// Path cost between two named locations.
    pub fn cost(&self, from: &str, to: &str) -> PipelineResult<PathCost> {
        Ok(self.matrix.cost_by_name(from, to)?)
    }

    /// Accepted spanning-forest edges as `(name, name, cost)`, in
    /// acceptance order.
    pub fn named_edges(&self) -> Vec<(&str, &str, f64)> {
        self.forest
            .edges()
            .iter()
            .map(|e| (self.matrix.name(e.a), self.matrix.name(e.b), e.cost))
            .collect()
    }

    pub fn total_cost(&self) -> f64 {
        self.forest.total_cost()
    }

    pub fn is_connected(&self) -> bool {
        self.forest.is_tree()
    }

    /// Location names grouped by component, only when there is more than
    /// one component.
    pub fn disconnected_components(&self) -> Option<Vec<Vec<&str>>> {
        self.forest.disconnected_components().map(|groups| {
            groups
                .iter()
                .map(|g| g.iter().map(|&id| self.matrix.name(id)).collect())
                .collect()
        })
    }

    /// Ordered location pairs with no path, row-major.
    pub fn unreachable_pairs(&self) -> Vec<(&str, &str)> {
        self.matrix
            .unreachable_pairs()
            .iter()
            .map(|&(a, b)| (self.matrix.name(a), self.matrix.name(b)))
            .collect()
    }
}
