//! `rn-terrain`: the terrain cost grid the router searches over.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`grid`]    | `TerrainGrid` (flat row-major, immutable), `TerrainGridBuilder` |
//! | [`presets`] | `continental()` 150×300 grid, `us_cities()` location list   |
//!
//! Grid construction errors are reported as `rn_core::RnError`.

pub mod grid;
pub mod presets;


pub use grid::{TerrainGrid, TerrainGridBuilder};
