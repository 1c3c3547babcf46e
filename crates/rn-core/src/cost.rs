//! Path costs and the diagonal-move multiplier.
//!
//! # Unreachable is a value
//!
//! A search that exhausts its frontier produces [`PathCost::Unreachable`],
//! not an error.  The marker flows through the cost matrix into the MST
//! builder, which simply never considers such a pair as a candidate edge.
//!
//! # Text form
//!
//! `PathCost` displays as the plain number for finite costs and `inf` for
//! unreachable ones, which is the representation used in `city_paths.csv`.

use std::fmt;
use std::str::FromStr;

// ── PathCost ──────────────────────────────────────────────────────────────────

/// Minimum travel cost between two cells, or the unreachable marker.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathCost {
    Finite(f64),
    Unreachable,
}

impl PathCost {
    pub const ZERO: PathCost = PathCost::Finite(0.0);

    /// The finite cost, or `None` if unreachable.
    #[inline]
    pub fn finite(self) -> Option<f64> {
        match self {
            PathCost::Finite(c) => Some(c),
            PathCost::Unreachable => None,
        }
    }

    #[inline]
    pub fn is_unreachable(self) -> bool {
        matches!(self, PathCost::Unreachable)
    }

    /// Round a finite cost to `decimals` decimal digits (half away from zero
    /// on the scaled value).  Unreachable stays unreachable.
    pub fn rounded(self, decimals: u32) -> PathCost {
        match self {
            PathCost::Finite(c) => PathCost::Finite(round_to(c, decimals)),
            PathCost::Unreachable => PathCost::Unreachable,
        }
    }
}

impl fmt::Display for PathCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathCost::Finite(c) => write!(f, "{c}"),
            PathCost::Unreachable => f.write_str("inf"),
        }
    }
}

impl FromStr for PathCost {
    type Err = std::num::ParseFloatError;

    /// Accepts `inf` (any case) and the empty string as unreachable; anything
    /// else must parse as an `f64`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("inf") {
            return Ok(PathCost::Unreachable);
        }
        let value: f64 = s.parse()?;
        if value.is_infinite() {
            Ok(PathCost::Unreachable)
        } else {
            Ok(PathCost::Finite(value))
        }
    }
}

/// Round `value` to `decimals` decimal digits.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}

// ── DiagonalFactor ────────────────────────────────────────────────────────────

/// Multiplier applied to a cell's cost when it is entered diagonally.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DiagonalFactor {
    /// Full double-precision √2.
    #[default]
    Exact,
    /// The three-decimal approximation `1.414`, for reproducing results
    /// computed with that constant.
    Legacy,
}

impl DiagonalFactor {
    #[inline]
    pub fn value(self) -> f64 {
        match self {
            DiagonalFactor::Exact  => std::f64::consts::SQRT_2,
            DiagonalFactor::Legacy => 1.414,
        }
    }
}
