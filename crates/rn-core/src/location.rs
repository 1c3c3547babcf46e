//! Named locations and the validated, ordered location list.

use rustc_hash::FxHashMap;

use crate::{CellCoord, LocationId, RnError, RnResult};

/// A named point of interest pinned to a terrain cell.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub name:  String,
    pub coord: CellCoord,
}

impl Location {
    pub fn new(name: impl Into<String>, row: u32, col: u32) -> Self {
        Self { name: name.into(), coord: CellCoord::new(row, col) }
    }
}

/// An ordered, non-empty list of uniquely named locations.
///
/// The list order defines [`LocationId`]s and therefore the row/column order
/// of the cost matrix.  Construction fails on an empty list or a repeated
/// name; grid bounds are checked later against a concrete terrain grid.
#[derive(Clone, Debug)]
pub struct LocationSet {
    items:   Vec<Location>,
    by_name: FxHashMap<String, LocationId>,
}

impl LocationSet {
    pub fn new(items: Vec<Location>) -> RnResult<Self> {
        if items.is_empty() {
            return Err(RnError::EmptyLocations);
        }
        let mut by_name = FxHashMap::default();
        by_name.reserve(items.len());
        for (i, loc) in items.iter().enumerate() {
            let id = LocationId::try_from(i).map_err(|_| {
                RnError::Config(format!("more than {} locations", u32::MAX))
            })?;
            if by_name.insert(loc.name.clone(), id).is_some() {
                return Err(RnError::DuplicateLocation(loc.name.clone()));
            }
        }
        Ok(Self { items, by_name })
    }

    /// Fail with [`RnError::LocationOutOfBounds`] for the first location
    /// outside a `rows × cols` grid.
    pub fn check_bounds(&self, rows: u32, cols: u32) -> RnResult<()> {
        match self.items.iter().find(|l| !l.coord.within(rows, cols)) {
            Some(l) => Err(RnError::LocationOutOfBounds {
                name:  l.name.clone(),
                coord: l.coord,
                rows,
                cols,
            }),
            None => Ok(()),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false` for a constructed set; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn get(&self, id: LocationId) -> &Location {
        &self.items[id.index()]
    }

    pub fn id_of(&self, name: &str) -> Option<LocationId> {
        self.by_name.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (LocationId, &Location)> + '_ {
        self.items
            .iter()
            .enumerate()
            .map(|(i, l)| (LocationId(i as u32), l))
    }

    pub fn as_slice(&self) -> &[Location] {
        &self.items
    }

    pub fn names(&self) -> Vec<String> {
        self.items.iter().map(|l| l.name.clone()).collect()
    }
}
