//! Pipeline observer trait for progress reporting.

use rn_mst::SpanningForest;
use rn_routing::{MatrixObserver, NoopObserver};

/// Callbacks invoked by [`Pipeline::run`][crate::Pipeline::run].
///
/// Extends [`MatrixObserver`] (per-row progress and unreachable pairs during
/// the matrix stage) with a hook for the spanning-forest stage.  All methods
/// have default no-op implementations.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct Progress;
///
/// impl MatrixObserver for Progress {
///     fn on_row_start(&mut self, from: LocationId, total: usize, name: &str) {
///         println!("Calculating paths from {name}... ({}/{total})", from.index() + 1);
///     }
/// }
///
/// impl PipelineObserver for Progress {
///     fn on_forest(&mut self, forest: &SpanningForest) {
///         println!("MST total cost: {:.2}", forest.total_cost());
///     }
/// }
/// ```
pub trait PipelineObserver: MatrixObserver {
    /// Called once after the spanning forest is built.
    fn on_forest(&mut self, _forest: &SpanningForest) {}
}

impl PipelineObserver for NoopObserver {}
