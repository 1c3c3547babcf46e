//! Planner error type.
//!
//! Only precondition violations are errors.  An unreachable location pair is
//! data ([`PathCost::Unreachable`](crate::PathCost::Unreachable)) and a
//! disconnected network is a normal result, so neither appears here.

use thiserror::Error;

use crate::CellCoord;

/// The error type shared by `rn-core`, `rn-terrain`, `rn-routing`, `rn-mst`
/// and `rn-pipeline`.
#[derive(Debug, Error)]
pub enum RnError {
    #[error("location list is empty")]
    EmptyLocations,

    #[error("duplicate location name {0:?}")]
    DuplicateLocation(String),

    #[error("unknown location {0:?}")]
    UnknownLocation(String),

    #[error("cell {coord} is outside the {rows}x{cols} terrain grid")]
    OutOfBounds { coord: CellCoord, rows: u32, cols: u32 },

    #[error("location {name:?} at {coord} is outside the {rows}x{cols} terrain grid")]
    LocationOutOfBounds {
        name:  String,
        coord: CellCoord,
        rows:  u32,
        cols:  u32,
    },

    #[error("terrain grid has no cells")]
    EmptyGrid,

    #[error("terrain row {row} has {got} cells, expected {expected}")]
    RaggedGrid { row: usize, expected: usize, got: usize },

    #[error("terrain grid of {rows}x{cols} cells exceeds the addressable cell count")]
    GridTooLarge { rows: usize, cols: usize },

    #[error("{what} has {got} entries, expected {expected}")]
    DimensionMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("cost matrix diagonal entry for {0:?} is not zero")]
    NonZeroDiagonal(String),

    #[error("cost from {from:?} to {to:?} is negative or not a number")]
    InvalidCost { from: String, to: String },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `rn-*` crates.
pub type RnResult<T> = Result<T, RnError>;
