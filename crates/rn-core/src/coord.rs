//! Grid cell coordinates and the 8-neighbour movement table.
//!
//! Coordinates are `(row, col)` with row 0 at the top (north) of the grid,
//! matching the CSV layout of `map.csv`.  `u32` halves the footprint of a
//! coordinate versus `usize` and is far beyond any realistic grid size.

use std::fmt;

/// A `(row, col)` position in the terrain grid.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellCoord {
    pub row: u32,
    pub col: u32,
}

impl CellCoord {
    #[inline]
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// `true` if the coordinate lies inside a `rows × cols` grid.
    #[inline]
    pub fn within(self, rows: u32, cols: u32) -> bool {
        self.row < rows && self.col < cols
    }

    /// Apply `step`, returning `None` if the result would leave a
    /// `rows × cols` grid.
    #[inline]
    pub fn step(self, step: Step, rows: u32, cols: u32) -> Option<CellCoord> {
        let row = self.row.checked_add_signed(step.d_row)?;
        let col = self.col.checked_add_signed(step.d_col)?;
        let next = CellCoord { row, col };
        next.within(rows, cols).then_some(next)
    }

    /// Chebyshev distance: the minimum number of 8-connected steps between
    /// two cells on an obstacle-free grid.
    pub fn chebyshev(self, other: CellCoord) -> u32 {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// ── Movement table ────────────────────────────────────────────────────────────

/// One of the eight moves available from a cell.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Step {
    pub d_row: i32,
    pub d_col: i32,
}

impl Step {
    /// `true` for the four diagonal moves, which are charged the diagonal
    /// factor on top of the destination cell's cost.
    #[inline]
    pub fn is_diagonal(self) -> bool {
        self.d_row != 0 && self.d_col != 0
    }
}

/// N, S, W, E, then NW, NE, SW, SE.
///
/// The order is part of the router's deterministic relaxation sequence; do
/// not reorder without expecting tie-broken results to change.
pub const STEPS: [Step; 8] = [
    Step { d_row: -1, d_col:  0 },
    Step { d_row:  1, d_col:  0 },
    Step { d_row:  0, d_col: -1 },
    Step { d_row:  0, d_col:  1 },
    Step { d_row: -1, d_col: -1 },
    Step { d_row: -1, d_col:  1 },
    Step { d_row:  1, d_col: -1 },
    Step { d_row:  1, d_col:  1 },
];
