//! `rn-pipeline`: end-to-end orchestration for the rail_net planner.
//!
//! # Stages
//!
//! ```text
//! PipelineBuilder::build
//!   validate config, resolve grid and locations, bounds-check locations
//! Pipeline::run
//!   ① Matrix: one grid search per location pair (parallel rows with the
//!             `parallel` feature); unreachable pairs recorded.
//!   ② Forest: Kruskal over the matrix's upper triangle; a disconnected
//!             network yields a forest plus its component partition.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Computes matrix rows on Rayon's thread pool.           |
//! | `serde`    | Forwards to the serde features of the `rn-*` crates.   |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use rn_core::NetworkConfig;
//! use rn_pipeline::{NoopObserver, PipelineBuilder};
//! use rn_routing::DijkstraGridRouter;
//!
//! let config = NetworkConfig::default();
//! let router = DijkstraGridRouter::from_config(&config);
//! let report = PipelineBuilder::new(config, router).build()?.run(&mut NoopObserver)?;
//! println!("total {:.2}", report.total_cost());
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod pipeline;
pub mod report;


pub use builder::PipelineBuilder;
pub use error::{PipelineError, PipelineResult};
pub use observer::PipelineObserver;
pub use pipeline::{forest_from_matrix, Pipeline};
pub use report::PipelineReport;
pub use rn_routing::NoopObserver;
