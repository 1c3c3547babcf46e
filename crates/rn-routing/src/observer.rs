//! Progress hooks for cost-matrix construction.

use rn_core::{CostMatrix, LocationId};

/// Callbacks invoked by [`build_cost_matrix`][crate::build_cost_matrix].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Call order
///
/// `on_row_start` fires once per source location in ascending id order.
/// Without the `parallel` feature each call precedes that row's searches;
/// with it, all calls are made (in order) before the parallel phase starts.
/// `on_unreachable` then fires once per unreachable ordered pair in
/// row-major order, followed by a single `on_complete`.
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
/// ```
pub trait MatrixObserver {
    /// A source row is about to be searched.
    fn on_row_start(&mut self, _from: LocationId, _total: usize, _name: &str) {}

    /// No path exists from `from` to `to`.
    fn on_unreachable(&mut self, _from: &str, _to: &str) {}

    /// The matrix is complete and validated.
    fn on_complete(&mut self, _matrix: &CostMatrix) {}
}

/// A [`MatrixObserver`] that does nothing.
pub struct NoopObserver;

impl MatrixObserver for NoopObserver {}
