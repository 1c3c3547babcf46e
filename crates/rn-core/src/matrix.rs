//! The all-pairs cost matrix.
//!
//! # Layout
//!
//! A dense `n × n` row-major `Vec<PathCost>`: entry `(i, j)` sits at
//! `i * n + j`, with `i` the source and `j` the destination location.  Rows
//! and columns follow the location list order.
//!
//! # Invariants (checked at construction)
//!
//! - square, with one name per row;
//! - names unique;
//! - every diagonal entry is exactly `Finite(0.0)`;
//! - every finite entry is non-negative (and not NaN).
//!
//! A `CostMatrix` is never mutated after construction.

use rustc_hash::FxHashMap;

use crate::{LocationId, PathCost, RnError, RnResult};

/// Square location-to-location cost table with name lookup.
#[derive(Clone, Debug, PartialEq)]
pub struct CostMatrix {
    names:       Vec<String>,
    index:       FxHashMap<String, LocationId>,
    cells:       Vec<PathCost>,
    /// Off-diagonal `(from, to)` pairs holding `Unreachable`, row-major.
    unreachable: Vec<(LocationId, LocationId)>,
}

impl CostMatrix {
    /// Validate and assemble a matrix from one row per name.
    pub fn from_rows(names: Vec<String>, rows: Vec<Vec<PathCost>>) -> RnResult<Self> {
        let n = names.len();
        if n == 0 {
            return Err(RnError::EmptyLocations);
        }
        if rows.len() != n {
            return Err(RnError::DimensionMismatch {
                expected: n,
                got:      rows.len(),
                what:     "cost matrix rows",
            });
        }

        let mut index = FxHashMap::default();
        index.reserve(n);
        for (i, name) in names.iter().enumerate() {
            if index.insert(name.clone(), LocationId(i as u32)).is_some() {
                return Err(RnError::DuplicateLocation(name.clone()));
            }
        }

        let mut cells = Vec::with_capacity(n * n);
        let mut unreachable = Vec::new();
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n {
                return Err(RnError::DimensionMismatch {
                    expected: n,
                    got:      row.len(),
                    what:     "cost matrix row",
                });
            }
            for (j, cost) in row.into_iter().enumerate() {
                match cost {
                    PathCost::Finite(c) if i == j && c != 0.0 => {
                        return Err(RnError::NonZeroDiagonal(names[i].clone()));
                    }
                    PathCost::Unreachable if i == j => {
                        return Err(RnError::NonZeroDiagonal(names[i].clone()));
                    }
                    PathCost::Finite(c) if c.is_nan() || c < 0.0 => {
                        return Err(RnError::InvalidCost {
                            from: names[i].clone(),
                            to:   names[j].clone(),
                        });
                    }
                    PathCost::Unreachable => {
                        unreachable.push((LocationId(i as u32), LocationId(j as u32)));
                    }
                    PathCost::Finite(_) => {}
                }
                cells.push(cost);
            }
        }

        Ok(Self { names, index, cells, unreachable })
    }

    // ── Dimensions & names ────────────────────────────────────────────────

    /// Number of locations (rows).
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always `false` for a constructed matrix; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    #[inline]
    pub fn name(&self, id: LocationId) -> &str {
        &self.names[id.index()]
    }

    pub fn id_of(&self, name: &str) -> Option<LocationId> {
        self.index.get(name).copied()
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    /// Cost from `from` to `to`.
    ///
    /// # Panics
    /// Panics if either id is `>= len()`.
    #[inline]
    pub fn get(&self, from: LocationId, to: LocationId) -> PathCost {
        self.cells[from.index() * self.names.len() + to.index()]
    }

    /// Cost between two locations looked up by name.
    pub fn cost_by_name(&self, from: &str, to: &str) -> RnResult<PathCost> {
        let a = self.id_of(from).ok_or_else(|| RnError::UnknownLocation(from.to_owned()))?;
        let b = self.id_of(to).ok_or_else(|| RnError::UnknownLocation(to.to_owned()))?;
        Ok(self.get(a, b))
    }

    /// All costs from `from`, indexed by destination.
    pub fn row(&self, from: LocationId) -> &[PathCost] {
        let n = self.names.len();
        let start = from.index() * n;
        &self.cells[start..start + n]
    }

    /// Off-diagonal ordered pairs with no path, in row-major order.
    pub fn unreachable_pairs(&self) -> &[(LocationId, LocationId)] {
        &self.unreachable
    }

    /// Every `(i, j, cost)` with `i < j`, row-major.  This is the undirected
    /// view consumed by the MST builder.
    pub fn upper_triangle(&self) -> impl Iterator<Item = (LocationId, LocationId, PathCost)> + '_ {
        let n = self.names.len() as u32;
        (0..n).flat_map(move |i| {
            (i + 1..n).map(move |j| (LocationId(i), LocationId(j), self.get(LocationId(i), LocationId(j))))
        })
    }

    /// `true` if `(i, j) == (j, i)` for every pair.
    pub fn is_symmetric(&self) -> bool {
        self.upper_triangle().all(|(i, j, c)| self.get(j, i) == c)
    }
}
