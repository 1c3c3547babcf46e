//! `rn-routing`: grid shortest paths and the all-pairs cost matrix.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`router`]   | `GridRouter` trait, `DijkstraGridRouter`, `SearchOutcome` |
//! | [`matrix`]   | `build_cost_matrix`                                       |
//! | [`observer`] | `MatrixObserver` progress hooks, `NoopObserver`           |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | Computes matrix rows on Rayon's thread pool.              |
//! | `serde`    | Forwards to `rn-core/serde`; this crate derives nothing.  |

pub mod matrix;
pub mod observer;
pub mod router;


pub use matrix::build_cost_matrix;
pub use observer::{MatrixObserver, NoopObserver};
pub use router::{DijkstraGridRouter, GridRouter, SearchOutcome};
