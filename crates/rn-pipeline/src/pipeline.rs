//! The `Pipeline` struct: cost matrix, then spanning forest.

use std::time::Instant;

use tracing::info;

use rn_core::{CostMatrix, LocationSet, NetworkConfig};
use rn_mst::kruskal;
use rn_routing::{build_cost_matrix, GridRouter, MatrixObserver};
use rn_terrain::TerrainGrid;

use crate::{PipelineObserver, PipelineReport, PipelineResult};

/// A validated planning job.
///
/// Holds the immutable inputs; every run recomputes from them, so two runs
/// of the same pipeline produce identical reports.
///
/// Create via [`PipelineBuilder`][crate::PipelineBuilder].
pub struct Pipeline<R: GridRouter> {
    pub(crate) config:    NetworkConfig,
    pub(crate) grid:      TerrainGrid,
    pub(crate) locations: LocationSet,
    pub(crate) router:    R,
}

impl<R: GridRouter> Pipeline<R> {
    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    pub fn grid(&self) -> &TerrainGrid {
        &self.grid
    }

    pub fn locations(&self) -> &LocationSet {
        &self.locations
    }

    // ── Stages ────────────────────────────────────────────────────────────

    /// Matrix stage only: one grid search per location pair.
    pub fn cost_matrix<O: MatrixObserver>(&self, observer: &mut O) -> PipelineResult<CostMatrix> {
        info!(
            locations = self.locations.len(),
            rows = self.grid.rows(),
            cols = self.grid.cols(),
            pairs = ?self.config.pairs,
            "building cost matrix"
        );
        let matrix = build_cost_matrix(&self.grid, &self.locations, &self.router, &self.config, observer)?;
        Ok(matrix)
    }

    /// Both stages: matrix, then spanning forest over it.
    pub fn run<O: PipelineObserver>(&self, observer: &mut O) -> PipelineResult<PipelineReport> {
        let started = Instant::now();
        let matrix = self.cost_matrix(observer)?;
        let report = forest_from_matrix(matrix)?;
        observer.on_forest(report.forest());
        info!(elapsed_ms = started.elapsed().as_millis() as u64, "pipeline complete");
        Ok(report)
    }
}

/// Spanning-forest stage alone, for a matrix computed earlier (e.g. read
/// back from `city_paths.csv`).  Needs neither grid nor router.
pub fn forest_from_matrix(matrix: CostMatrix) -> PipelineResult<PipelineReport> {
    let forest = kruskal(&matrix)?;
    Ok(PipelineReport::new(matrix, forest))
}
