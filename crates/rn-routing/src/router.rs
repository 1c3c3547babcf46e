//! Routing trait and default Dijkstra implementation over the terrain grid.
//!
//! # Pluggability
//!
//! The cost-matrix builder calls routing via the [`GridRouter`] trait, so
//! applications can swap in other search strategies (A*, jump-point search,
//! a precomputed table) without touching the builder.
//!
//! # Cost model
//!
//! The graph is implicit: every passable cell is a node with up to eight
//! neighbours.  A step is charged the cost of the cell it **enters**;
//! diagonal steps multiply that cost by the configured diagonal factor.  The
//! start cell is never charged.  Impassable cells are never entered.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use tracing::debug;

use rn_core::{CellCoord, CellId, DiagonalFactor, NetworkConfig, PathCost, RnError, RnResult, STEPS};
use rn_terrain::TerrainGrid;

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable grid search.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so they can be shared across Rayon
/// worker threads while the cost matrix is built in parallel.
pub trait GridRouter: Send + Sync {
    /// Minimum movement cost from `start` to `goal`.
    ///
    /// Returns `Ok(PathCost::Unreachable)` when no passable path exists and
    /// `Ok(PathCost::Finite(0.0))` when `start == goal`.  Errors only when a
    /// coordinate lies outside the grid.
    fn path_cost(&self, grid: &TerrainGrid, start: CellCoord, goal: CellCoord) -> RnResult<PathCost>;

    /// Multiplier applied to diagonal steps, if the router has one.
    fn diagonal_factor(&self) -> Option<f64> {
        None
    }
}

// ── DijkstraGridRouter ────────────────────────────────────────────────────────

/// Best-first search by accumulated cost over the 8-connected grid.
///
/// Ties between equal-cost frontier entries are broken by insertion order,
/// so a given grid, start and goal always produce the same result.
#[derive(Copy, Clone, Debug)]
pub struct DijkstraGridRouter {
    diagonal: f64,
}

/// Cost plus search statistics for one query.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SearchOutcome {
    pub cost:    PathCost,
    /// Cells finalised (popped for the first time).
    pub settled: usize,
    /// Frontier insertions, including the start cell.
    pub pushed:  usize,
}

impl DijkstraGridRouter {
    pub fn new(diagonal: DiagonalFactor) -> Self {
        Self { diagonal: diagonal.value() }
    }

    pub fn from_config(config: &NetworkConfig) -> Self {
        Self::new(config.diagonal)
    }

    /// Run one search and report statistics alongside the cost.
    pub fn search(&self, grid: &TerrainGrid, start: CellCoord, goal: CellCoord) -> RnResult<SearchOutcome> {
        for coord in [start, goal] {
            if !grid.contains(coord) {
                return Err(RnError::OutOfBounds { coord, rows: grid.rows(), cols: grid.cols() });
            }
        }
        let outcome = dijkstra(grid, start, goal, self.diagonal);
        debug!(
            %start, %goal,
            cost = %outcome.cost,
            settled = outcome.settled,
            pushed = outcome.pushed,
            "grid search finished"
        );
        Ok(outcome)
    }
}

impl Default for DijkstraGridRouter {
    fn default() -> Self {
        Self::new(DiagonalFactor::default())
    }
}

impl GridRouter for DijkstraGridRouter {
    fn path_cost(&self, grid: &TerrainGrid, start: CellCoord, goal: CellCoord) -> RnResult<PathCost> {
        self.search(grid, start, goal).map(|o| o.cost)
    }

    fn diagonal_factor(&self) -> Option<f64> {
        Some(self.diagonal)
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

/// Frontier entry ordered by `(cost, seq)`.  `seq` is the insertion counter
/// and makes pop order among equal costs deterministic.
#[derive(Copy, Clone, Debug)]
struct FrontierEntry {
    cost: f64,
    seq:  u64,
    cell: CellId,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .total_cmp(&other.cost)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

/// Both coordinates must already be in bounds.
fn dijkstra(grid: &TerrainGrid, start: CellCoord, goal: CellCoord, diagonal: f64) -> SearchOutcome {
    if start == goal {
        return SearchOutcome { cost: PathCost::ZERO, settled: 0, pushed: 0 };
    }

    let (rows, cols) = (grid.rows(), grid.cols());
    let n = grid.cell_count();
    let start_id = grid.cell_id(start);
    let goal_id = grid.cell_id(goal);

    // dist[c] = best provisional cost to reach c.
    let mut dist    = vec![f64::INFINITY; n];
    // settled[c] = c has been popped; its cost is final.
    let mut settled = vec![false; n];

    // Min-heap: Reverse makes BinaryHeap (max) behave as min-heap.
    let mut heap: BinaryHeap<Reverse<FrontierEntry>> = BinaryHeap::new();
    let mut seq: u64 = 0;
    let mut settled_count = 0usize;

    dist[start_id.index()] = 0.0;
    heap.push(Reverse(FrontierEntry { cost: 0.0, seq, cell: start_id }));
    seq += 1;

    while let Some(Reverse(FrontierEntry { cost, cell, .. })) = heap.pop() {
        // Skip stale heap entries.
        if settled[cell.index()] {
            continue;
        }
        settled[cell.index()] = true;
        settled_count += 1;

        // Finalised on pop, not on push: a pushed cost may still improve.
        if cell == goal_id {
            return SearchOutcome {
                cost:    PathCost::Finite(cost),
                settled: settled_count,
                pushed:  seq as usize,
            };
        }

        let here = grid.coord_of(cell);
        for step in STEPS {
            let Some(next) = here.step(step, rows, cols) else {
                continue;
            };
            let next_id = grid.cell_id(next);
            if settled[next_id.index()] || !grid.passable_at(next_id) {
                continue;
            }

            let terrain = f64::from(grid.cost_at(next_id));
            let step_cost = if step.is_diagonal() { terrain * diagonal } else { terrain };
            let new_cost = cost + step_cost;

            if new_cost < dist[next_id.index()] {
                dist[next_id.index()] = new_cost;
                heap.push(Reverse(FrontierEntry { cost: new_cost, seq, cell: next_id }));
                seq += 1;
            }
        }
    }

    SearchOutcome {
        cost:    PathCost::Unreachable,
        settled: settled_count,
        pushed:  seq as usize,
    }
}
