//! All-pairs cost matrix construction.
//!
//! One grid search per ordered location pair (or per unordered pair with
//! [`PairStrategy::Mirrored`]).  Searches are independent and read-only over
//! the shared grid, so with the `parallel` feature each matrix row runs as
//! its own Rayon task.  Every row is owned by exactly one task and rows are
//! reassembled in index order, so parallel and sequential builds produce
//! identical matrices.

use std::time::Instant;

use tracing::{info, warn};

use rn_core::{CostMatrix, LocationId, LocationSet, NetworkConfig, PairStrategy, PathCost, RnResult};
use rn_terrain::TerrainGrid;

use crate::{GridRouter, MatrixObserver};

/// Build the full cost matrix for `locations` over `grid`.
///
/// - Diagonal entries are `0` without a search.
/// - Finite costs are rounded to `config.round_decimals` digits.
/// - Unreachable pairs are stored as [`PathCost::Unreachable`], logged at
///   `warn` and reported to `observer`; they are not errors.
///
/// Fails before any search if a location lies outside the grid.
pub fn build_cost_matrix<R, O>(
    grid:      &TerrainGrid,
    locations: &LocationSet,
    router:    &R,
    config:    &NetworkConfig,
    observer:  &mut O,
) -> RnResult<CostMatrix>
where
    R: GridRouter + ?Sized,
    O: MatrixObserver,
{
    locations.check_bounds(grid.rows(), grid.cols())?;

    let started = Instant::now();
    let mut rows = compute_rows(grid, locations, router, config, observer)?;
    if config.pairs == PairStrategy::Mirrored {
        mirror_upper(&mut rows);
    }

    let matrix = CostMatrix::from_rows(locations.names(), rows)?;

    for &(from, to) in matrix.unreachable_pairs() {
        let (from, to) = (matrix.name(from), matrix.name(to));
        warn!(from, to, "no path between locations");
        observer.on_unreachable(from, to);
    }

    info!(
        locations = matrix.len(),
        unreachable = matrix.unreachable_pairs().len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "cost matrix complete"
    );
    observer.on_complete(&matrix);
    Ok(matrix)
}

// ── Row computation ───────────────────────────────────────────────────────────

#[cfg(not(feature = "parallel"))]
fn compute_rows<R, O>(
    grid:      &TerrainGrid,
    locations: &LocationSet,
    router:    &R,
    config:    &NetworkConfig,
    observer:  &mut O,
) -> RnResult<Vec<Vec<PathCost>>>
where
    R: GridRouter + ?Sized,
    O: MatrixObserver,
{
    let total = locations.len();
    let mut rows = Vec::with_capacity(total);
    for (from, loc) in locations.iter() {
        observer.on_row_start(from, total, &loc.name);
        rows.push(compute_row(grid, locations, router, config, from)?);
    }
    Ok(rows)
}

#[cfg(feature = "parallel")]
fn compute_rows<R, O>(
    grid:      &TerrainGrid,
    locations: &LocationSet,
    router:    &R,
    config:    &NetworkConfig,
    observer:  &mut O,
) -> RnResult<Vec<Vec<PathCost>>>
where
    R: GridRouter + ?Sized,
    O: MatrixObserver,
{
    use rayon::prelude::*;

    let total = locations.len();
    for (from, loc) in locations.iter() {
        observer.on_row_start(from, total, &loc.name);
    }

    let work = || {
        (0..total as u32)
            .into_par_iter()
            .map(|i| compute_row(grid, locations, router, config, LocationId(i)))
            .collect::<RnResult<Vec<_>>>()
    };

    match config.num_threads {
        Some(threads) => rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .map_err(|e| rn_core::RnError::Config(format!("cannot start {threads} worker threads: {e}")))?
            .install(work),
        None => work(),
    }
}

/// Costs from `from` to every location.  Under `Mirrored`, entries below
/// the diagonal are left as placeholders for [`mirror_upper`].
fn compute_row<R>(
    grid:      &TerrainGrid,
    locations: &LocationSet,
    router:    &R,
    config:    &NetworkConfig,
    from:      LocationId,
) -> RnResult<Vec<PathCost>>
where
    R: GridRouter + ?Sized,
{
    let origin = locations.get(from);
    info!(from = %origin.name, "computing paths");

    locations
        .iter()
        .map(|(to, dest)| {
            if to == from {
                return Ok(PathCost::ZERO);
            }
            if config.pairs == PairStrategy::Mirrored && to < from {
                return Ok(PathCost::Unreachable);
            }
            let cost = router.path_cost(grid, origin.coord, dest.coord)?;
            Ok(cost.rounded(config.round_decimals))
        })
        .collect()
}

/// Copy every `(i, j)`, `i < j`, to `(j, i)`.
fn mirror_upper(rows: &mut [Vec<PathCost>]) {
    for i in 0..rows.len() {
        for j in 0..i {
            rows[i][j] = rows[j][i];
        }
    }
}
