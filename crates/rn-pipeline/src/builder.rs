//! Fluent builder for constructing a [`Pipeline`].

use tracing::warn;

use rn_core::{Location, LocationSet, NetworkConfig};
use rn_routing::GridRouter;
use rn_terrain::{presets, TerrainGrid};

use crate::{Pipeline, PipelineError, PipelineResult};

/// Largest `round_decimals` accepted; beyond this `f64` scaling overflows
/// the significant digits anyway.
const MAX_ROUND_DECIMALS: u32 = 12;

/// Fluent builder for [`Pipeline<R>`].
///
/// # Required inputs
///
/// - [`NetworkConfig`]: diagonal factor, pair strategy, rounding, threads
/// - `R: GridRouter`: the search algorithm (e.g. [`rn_routing::DijkstraGridRouter`])
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                          |
/// |-------------------|----------------------------------|
/// | `.grid(g)`        | [`presets::continental()`]       |
/// | `.locations(v)`   | [`presets::us_cities()`]         |
///
/// # Example
///
/// ```rust,ignore
/// let router = DijkstraGridRouter::from_config(&config);
/// let pipeline = PipelineBuilder::new(config, router)
///     .grid(grid)
///     .locations(cities)
///     .build()?;
/// let report = pipeline.run(&mut NoopObserver)?;
/// ```
pub struct PipelineBuilder<R: GridRouter> {
    config:    NetworkConfig,
    grid:      Option<TerrainGrid>,
    locations: Option<Vec<Location>>,
    router:    R,
}

impl<R: GridRouter> PipelineBuilder<R> {
    /// Create a builder with all required inputs.
    pub fn new(config: NetworkConfig, router: R) -> Self {
        Self { config, grid: None, locations: None, router }
    }

    /// Supply the terrain grid.
    ///
    /// If not called, the built-in 150 × 300 continental grid is used.
    pub fn grid(mut self, grid: TerrainGrid) -> Self {
        self.grid = Some(grid);
        self
    }

    /// Supply the ordered location list.  Order defines matrix indices.
    ///
    /// If not called, the built-in 25-city list is used.
    pub fn locations(mut self, locations: Vec<Location>) -> Self {
        self.locations = Some(locations);
        self
    }

    /// Validate inputs and return a ready-to-run [`Pipeline`].
    ///
    /// Fails on an unusable config, a router whose diagonal factor differs
    /// from the config's, an empty location list, duplicate names, or any
    /// location outside the grid.
    pub fn build(self) -> PipelineResult<Pipeline<R>> {
        // ── Validate config ───────────────────────────────────────────────
        if self.config.num_threads == Some(0) {
            return Err(PipelineError::Config("num_threads must be at least 1".into()));
        }
        if self.config.round_decimals > MAX_ROUND_DECIMALS {
            return Err(PipelineError::Config(format!(
                "round_decimals {} exceeds {MAX_ROUND_DECIMALS}",
                self.config.round_decimals
            )));
        }
        if let Some(factor) = self.router.diagonal_factor() {
            let wanted = self.config.diagonal.value();
            if factor != wanted {
                return Err(PipelineError::Config(format!(
                    "router diagonal factor {factor} differs from config {wanted}"
                )));
            }
        }

        // ── Resolve optional inputs ───────────────────────────────────────
        let grid = match self.grid {
            Some(g) => g,
            None => presets::continental()?,
        };
        if grid.impassable_at() != self.config.impassable_at {
            warn!(
                grid = grid.impassable_at(),
                config = self.config.impassable_at,
                "grid impassable threshold differs from config; using the grid's"
            );
        }

        let locations = LocationSet::new(self.locations.unwrap_or_else(presets::us_cities))?;
        locations.check_bounds(grid.rows(), grid.cols())?;

        Ok(Pipeline {
            config: self.config,
            grid,
            locations,
            router: self.router,
        })
    }
}
