//! Terrain grid representation and builder.
//!
//! # Data layout
//!
//! Cells are stored in one flat row-major `Vec<u32>`; cell `(r, c)` lives at
//! `CellId(r * cols + c)`.  The router indexes its own per-search arrays by
//! the same `CellId`, so neighbour lookups are plain offset arithmetic.
//!
//! # Passability
//!
//! A cell is impassable when its cost is `>= impassable_at`.  The router
//! never enters such a cell.  Cost `0` is legal and means free movement.

use std::ops::Range;

use rn_core::{CellCoord, CellId, RnError, RnResult};

// ── TerrainGrid ───────────────────────────────────────────────────────────────

/// A fixed-size, immutable grid of movement costs.
///
/// Do not construct directly; use [`TerrainGrid::from_rows`],
/// [`TerrainGrid::uniform`] or [`TerrainGridBuilder`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TerrainGrid {
    rows:          u32,
    cols:          u32,
    cells:         Vec<u32>,
    impassable_at: u32,
}

impl TerrainGrid {
    /// Build a grid from nested rows (row 0 first).
    ///
    /// Fails if there are no cells or the rows differ in length.
    pub fn from_rows(rows: Vec<Vec<u32>>, impassable_at: u32) -> RnResult<Self> {
        let width = rows.first().map_or(0, Vec::len);
        if rows.is_empty() || width == 0 {
            return Err(RnError::EmptyGrid);
        }
        let (row_count, col_count) = checked_dims(rows.len(), width)?;

        let mut cells = Vec::with_capacity(rows.len() * width);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(RnError::RaggedGrid { row: i, expected: width, got: row.len() });
            }
            cells.extend(row);
        }

        Ok(Self { rows: row_count, cols: col_count, cells, impassable_at })
    }

    /// A `rows × cols` grid where every cell costs `cost`.
    pub fn uniform(rows: u32, cols: u32, cost: u32, impassable_at: u32) -> RnResult<Self> {
        TerrainGridBuilder::new(rows, cols, cost)
            .impassable_at(impassable_at)
            .build()
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn impassable_at(&self) -> u32 {
        self.impassable_at
    }

    #[inline]
    pub fn contains(&self, coord: CellCoord) -> bool {
        coord.within(self.rows, self.cols)
    }

    // ── Cell addressing ───────────────────────────────────────────────────

    /// Flat index of an in-bounds coordinate.
    #[inline]
    pub fn cell_id(&self, coord: CellCoord) -> CellId {
        debug_assert!(self.contains(coord), "{coord} outside {}x{}", self.rows, self.cols);
        CellId(coord.row * self.cols + coord.col)
    }

    #[inline]
    pub fn coord_of(&self, cell: CellId) -> CellCoord {
        CellCoord::new(cell.0 / self.cols, cell.0 % self.cols)
    }

    // ── Cost queries ──────────────────────────────────────────────────────

    /// Cost of the cell at `coord`, or `None` if out of bounds.
    pub fn cost(&self, coord: CellCoord) -> Option<u32> {
        self.contains(coord).then(|| self.cells[self.cell_id(coord).index()])
    }

    /// Cost of the cell at `cell`.  Hot path: no bounds check beyond the
    /// slice's own.
    #[inline]
    pub fn cost_at(&self, cell: CellId) -> u32 {
        self.cells[cell.index()]
    }

    #[inline]
    pub fn passable_at(&self, cell: CellId) -> bool {
        self.cells[cell.index()] < self.impassable_at
    }

    /// `true` if `coord` is in bounds and not impassable.
    pub fn is_passable(&self, coord: CellCoord) -> bool {
        self.cost(coord).is_some_and(|c| c < self.impassable_at)
    }

    pub fn passable_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c < self.impassable_at).count()
    }

    /// The cells of row `row`, west to east.
    pub fn row(&self, row: u32) -> &[u32] {
        let start = (row * self.cols) as usize;
        &self.cells[start..start + self.cols as usize]
    }

    /// Iterator over rows, north to south.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[u32]> + '_ {
        self.cells.chunks_exact(self.cols as usize)
    }
}

/// Validate that a `rows × cols` grid is addressable by `u32` cell ids.
fn checked_dims(rows: usize, cols: usize) -> RnResult<(u32, u32)> {
    let too_large = || RnError::GridTooLarge { rows, cols };
    let count = rows.checked_mul(cols).ok_or_else(too_large)?;
    // CellId::INVALID (u32::MAX) must stay unused.
    if count >= u32::MAX as usize {
        return Err(too_large());
    }
    Ok((rows as u32, cols as u32))
}

// ── TerrainGridBuilder ────────────────────────────────────────────────────────

/// Paint a [`TerrainGrid`] from rectangular regions, then call
/// [`build`](Self::build).
///
/// Regions are tested in the order they were added and the **first** region
/// containing a cell decides its cost; cells in no region get the fill cost.
/// Ranges are half-open and may extend past the grid edge.
///
/// # Example
///
/// ```
/// use rn_terrain::TerrainGridBuilder;
///
/// let mut b = TerrainGridBuilder::new(4, 6, 20);
/// b.paint(0..4, 0..1, 999)  // west coast water
///  .paint(1..3, 2..5, 30);  // a mountain block
/// let grid = b.build().unwrap();
/// assert_eq!(grid.row(1), &[999, 20, 30, 30, 30, 20]);
/// ```
pub struct TerrainGridBuilder {
    rows:          u32,
    cols:          u32,
    fill:          u32,
    impassable_at: u32,
    regions:       Vec<Region>,
}

struct Region {
    rows: Range<u32>,
    cols: Range<u32>,
    cost: u32,
}

impl Region {
    #[inline]
    fn contains(&self, row: u32, col: u32) -> bool {
        self.rows.contains(&row) && self.cols.contains(&col)
    }
}

impl TerrainGridBuilder {
    pub fn new(rows: u32, cols: u32, fill: u32) -> Self {
        Self {
            rows,
            cols,
            fill,
            impassable_at: rn_core::NetworkConfig::IMPASSABLE,
            regions: Vec::new(),
        }
    }

    /// Override the impassable sentinel (default 999).
    pub fn impassable_at(mut self, value: u32) -> Self {
        self.impassable_at = value;
        self
    }

    /// Add a rectangular region of cost `cost`.  Earlier regions take
    /// precedence where regions overlap.
    pub fn paint(&mut self, rows: Range<u32>, cols: Range<u32>, cost: u32) -> &mut Self {
        self.regions.push(Region { rows, cols, cost });
        self
    }

    /// Convenience: make the whole of row `row` impassable.
    pub fn wall_row(&mut self, row: u32) -> &mut Self {
        let cost = self.impassable_at;
        self.paint(row..row + 1, 0..self.cols, cost)
    }

    /// Convenience: make the whole of column `col` impassable.
    pub fn wall_col(&mut self, col: u32) -> &mut Self {
        let cost = self.impassable_at;
        self.paint(0..self.rows, col..col + 1, cost)
    }

    /// Rasterise the regions into a [`TerrainGrid`].
    ///
    /// Time complexity: O(rows × cols × regions).
    pub fn build(self) -> RnResult<TerrainGrid> {
        if self.rows == 0 || self.cols == 0 {
            return Err(RnError::EmptyGrid);
        }
        checked_dims(self.rows as usize, self.cols as usize)?;

        let mut cells = Vec::with_capacity(self.rows as usize * self.cols as usize);
        for row in 0..self.rows {
            for col in 0..self.cols {
                let cost = self
                    .regions
                    .iter()
                    .find(|r| r.contains(row, col))
                    .map_or(self.fill, |r| r.cost);
                cells.push(cost);
            }
        }

        Ok(TerrainGrid {
            rows:          self.rows,
            cols:          self.cols,
            cells,
            impassable_at: self.impassable_at,
        })
    }
}
