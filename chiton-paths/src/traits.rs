//! Graph interface consumed by the shortest-path engine

use crate::{Cell, Weight};

/// Directed link to a neighboring cell.
///
/// `weight` is the cost of entering `to`, not of leaving the source cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub to: Cell,
    pub weight: Weight,
}

/// Flat-indexed graph with immutable, non-negative edge weights.
pub trait Adjacency {
    /// Number of cells; valid indices are `0..cell_count()`.
    fn cell_count(&self) -> usize;

    /// Outgoing edges of `cell`. Callers only pass indices below `cell_count()`.
    fn neighbors(&self, cell: Cell) -> &[Edge];
}
