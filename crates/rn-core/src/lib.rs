//! `rn-core`: foundational types for the `rail_net` planner.
//!
//! This crate is a dependency of every other `rn-*` crate.  It has no `rn-*`
//! dependencies and minimal external ones (`rustc-hash` and `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                                 |
//! |---------------|----------------------------------------------------------|
//! | [`ids`]       | `LocationId`, `CellId`                                   |
//! | [`coord`]     | `CellCoord`, the 8-neighbour step table                  |
//! | [`location`]  | `Location`, `LocationSet` (validated, name-indexed)      |
//! | [`cost`]      | `PathCost`, `DiagonalFactor`, rounding                   |
//! | [`matrix`]    | `CostMatrix` (square, zero diagonal, immutable)          |
//! | [`config`]    | `NetworkConfig`, `PairStrategy`                          |
//! | [`error`]     | `RnError`, `RnResult`                                    |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to public value types.      |

pub mod config;
pub mod coord;
pub mod cost;
pub mod error;
pub mod ids;
pub mod location;
pub mod matrix;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{NetworkConfig, PairStrategy};
pub use coord::{CellCoord, Step, STEPS};
pub use cost::{DiagonalFactor, PathCost};
pub use error::{RnError, RnResult};
pub use ids::{CellId, LocationId};
pub use location::{Location, LocationSet};
pub use matrix::CostMatrix;
