//! `rn-mst`: minimum spanning forest over the location cost matrix.
//!
//! # Crate layout
//!
//! | Module         | Contents                                              |
//! |----------------|-------------------------------------------------------|
//! | [`union_find`] | `DisjointSet` (union by rank, path compression)       |
//! | [`kruskal`]    | `kruskal`, `spanning_forest`, `MstEdge`, `SpanningForest` |
//!
//! A disconnected cost graph is not an error: the result is a forest whose
//! [`SpanningForest::disconnected_components`] lists the partition.

pub mod kruskal;
pub mod union_find;


pub use kruskal::{kruskal, spanning_forest, MstEdge, SpanningForest};
pub use union_find::DisjointSet;
