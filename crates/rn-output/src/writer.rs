//! The `OutputWriter` trait implemented by backend writers.

use rn_core::{CostMatrix, LocationSet};
use rn_mst::SpanningForest;
use rn_terrain::TerrainGrid;

use crate::OutputResult;

/// One method per planner artefact.  Each call writes (or replaces) that
/// artefact completely.
pub trait OutputWriter {
    /// The terrain grid.
    fn write_grid(&mut self, grid: &TerrainGrid) -> OutputResult<()>;

    /// The ordered location list.
    fn write_locations(&mut self, locations: &LocationSet) -> OutputResult<()>;

    /// The all-pairs cost matrix.
    fn write_cost_matrix(&mut self, matrix: &CostMatrix) -> OutputResult<()>;

    /// The spanning-tree edges, named through `matrix`.
    fn write_forest(&mut self, matrix: &CostMatrix, forest: &SpanningForest) -> OutputResult<()>;
}
