//! Kruskal minimum spanning forest over a [`CostMatrix`].
//!
//! # Candidate edges
//!
//! One undirected edge per location pair `i < j` whose upper-triangle entry
//! `(i, j)` is finite.  Zero-cost edges between distinct locations are
//! candidates like any other; self-pairs never are.
//!
//! # Ordering
//!
//! Candidates are stably sorted by cost with `f64::total_cmp`, so equal
//! costs keep row-major enumeration order and a given matrix always yields
//! the same edge list in the same order.

use std::time::Instant;

use tracing::{info, warn};

use rn_core::{CostMatrix, LocationId, PathCost, RnError, RnResult};

use crate::DisjointSet;

// ── Types ─────────────────────────────────────────────────────────────────────

/// One accepted (or candidate) edge, endpoints stored with `a < b`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MstEdge {
    pub a:    LocationId,
    pub b:    LocationId,
    pub cost: f64,
}

impl MstEdge {
    /// Canonicalises the endpoint order.
    pub fn new(x: LocationId, y: LocationId, cost: f64) -> Self {
        if x <= y {
            Self { a: x, b: y, cost }
        } else {
            Self { a: y, b: x, cost }
        }
    }
}

/// Result of a spanning-forest build.
///
/// When the cost graph is connected this is a minimum spanning tree;
/// otherwise it holds one minimum spanning tree per connected component.
#[derive(Clone, Debug, PartialEq)]
pub struct SpanningForest {
    edges:      Vec<MstEdge>,
    total_cost: f64,
    node_count: usize,
    /// Partition by final root, ordered by smallest member.
    components: Vec<Vec<LocationId>>,
}

impl SpanningForest {
    /// Accepted edges in acceptance order (ascending cost).
    #[rustfmt::skip]
    pub fn edges(&self) -> &[MstEdge] { &self.edges }

    /// Sum of accepted edge costs.
    #[rustfmt::skip]
    pub fn total_cost(&self) -> f64 { self.total_cost }

    #[rustfmt::skip]
    pub fn node_count(&self) -> usize { self.node_count }

    #[rustfmt::skip]
    pub fn edge_count(&self) -> usize { self.edges.len() }

    /// Edges a spanning tree over every node would need: `n - 1`.
    pub fn required_edges(&self) -> usize {
        self.node_count.saturating_sub(1)
    }

    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.components.len() }

    /// Every location in exactly one group.
    #[rustfmt::skip]
    pub fn components(&self) -> &[Vec<LocationId>] { &self.components }

    /// `true` when the forest spans all nodes in a single tree.
    pub fn is_tree(&self) -> bool {
        self.components.len() == 1
    }

    /// The partition, but only when there is more than one component.
    pub fn disconnected_components(&self) -> Option<&[Vec<LocationId>]> {
        (!self.is_tree()).then_some(self.components.as_slice())
    }
}

// ── Builders ──────────────────────────────────────────────────────────────────

/// Minimum spanning forest of the locations in `matrix`.
pub fn kruskal(matrix: &CostMatrix) -> RnResult<SpanningForest> {
    let candidates = matrix
        .upper_triangle()
        .filter_map(|(i, j, cost)| match cost {
            PathCost::Finite(c) => Some(MstEdge::new(i, j, c)),
            PathCost::Unreachable => None,
        })
        .collect();
    let forest = spanning_forest(matrix.len(), candidates)?;

    if let Some(groups) = forest.disconnected_components() {
        let groups: Vec<Vec<&str>> = groups
            .iter()
            .map(|g| g.iter().map(|&id| matrix.name(id)).collect())
            .collect();
        warn!(
            found = forest.edge_count(),
            required = forest.required_edges(),
            components = ?groups,
            "network is disconnected; spanning forest returned"
        );
    }
    Ok(forest)
}

/// Kruskal over an explicit candidate list for nodes `0..node_count`.
///
/// Self-loops are skipped.  Fails when `node_count == 0`, when an endpoint
/// is out of range, or when a cost is negative or NaN.
pub fn spanning_forest(node_count: usize, mut candidates: Vec<MstEdge>) -> RnResult<SpanningForest> {
    if node_count == 0 {
        return Err(RnError::EmptyLocations);
    }
    for e in &candidates {
        // Hand-built edges may have `a > b`.
        let furthest = e.a.index().max(e.b.index());
        if furthest >= node_count {
            return Err(RnError::DimensionMismatch {
                expected: node_count,
                got:      furthest + 1,
                what:     "edge endpoint",
            });
        }
        if e.cost.is_nan() || e.cost < 0.0 {
            return Err(RnError::InvalidCost { from: e.a.to_string(), to: e.b.to_string() });
        }
    }

    let started = Instant::now();
    // Stable: equal costs keep enumeration order.
    candidates.sort_by(|x, y| x.cost.total_cmp(&y.cost));

    let required = node_count - 1;
    let mut sets = DisjointSet::new(node_count);
    let mut edges = Vec::with_capacity(required);
    let mut total_cost = 0.0;

    for edge in candidates {
        if edges.len() == required {
            break;
        }
        if edge.a == edge.b {
            continue;
        }
        if sets.union(edge.a.index(), edge.b.index()) {
            total_cost += edge.cost;
            edges.push(edge);
        }
    }

    let components = sets
        .groups()
        .into_iter()
        .map(|g| g.into_iter().map(|i| LocationId(i as u32)).collect())
        .collect::<Vec<_>>();

    info!(
        nodes = node_count,
        edges = edges.len(),
        components = components.len(),
        total_cost,
        elapsed_us = started.elapsed().as_micros() as u64,
        "spanning forest complete"
    );

    Ok(SpanningForest { edges, total_cost, node_count, components })
}
