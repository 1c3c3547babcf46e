//! Planner configuration.
//!
//! Typically built with `NetworkConfig::default()` and adjusted field by
//! field, or loaded from a JSON file by the application crate (requires the
//! `serde` feature).

use crate::DiagonalFactor;

/// Which ordered location pairs the all-pairs builder searches.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PairStrategy {
    /// Search every ordered pair `(i, j)`, `i != j`.  Because a step is
    /// charged the cost of the cell it enters, `(i, j)` and `(j, i)` can
    /// differ when the two endpoints sit on different terrain.
    #[default]
    Ordered,
    /// Search `i < j` only and copy each result to `(j, i)`.  The matrix is
    /// exactly symmetric and the search count halves.
    Mirrored,
}

/// Top-level planner configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NetworkConfig {
    /// Multiplier for diagonal steps.  Default: exact √2.
    pub diagonal: DiagonalFactor,

    /// Which location pairs to search.  Default: every ordered pair.
    pub pairs: PairStrategy,

    /// Decimal digits kept in cost-matrix entries.  Default: 2.
    pub round_decimals: u32,

    /// Cells whose cost is at or above this value are impassable.
    /// Default: 999.
    pub impassable_at: u32,

    /// Worker thread count passed to Rayon (`parallel` feature of
    /// `rn-routing`).  `None` uses the global pool.
    pub num_threads: Option<usize>,
}

impl NetworkConfig {
    /// Default impassable sentinel (open water in the continental preset).
    pub const IMPASSABLE: u32 = 999;
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            diagonal:       DiagonalFactor::Exact,
            pairs:          PairStrategy::Ordered,
            round_decimals: 2,
            impassable_at:  Self::IMPASSABLE,
            num_threads:    None,
        }
    }
}
