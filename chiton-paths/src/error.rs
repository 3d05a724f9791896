//! Error types for grid construction and shortest-path queries

use crate::Cell;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for building or transforming a [`WeightedGrid`](crate::WeightedGrid)
#[derive(Debug, Error)]
pub enum GridError {
    /// Rows have inconsistent lengths, contain non-digits, or the grid is empty
    #[error("Malformed input: {0}")]
    MalformedInput(String),
    /// Tiling factor must be at least 1
    #[error("Invalid multiplier {0}: must be at least 1")]
    InvalidMultiplier(usize),
    /// The grid file could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Error type for shortest-path computations and queries
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// Cell index outside `[0, cell_count)`
    #[error("Invalid cell {cell}: grid has {cell_count} cells")]
    InvalidCell { cell: Cell, cell_count: usize },
    /// The frontier emptied before the target was reached
    #[error("Cell {end} is unreachable from cell {start}")]
    UnreachableTarget { start: Cell, end: Cell },
    /// Query made before any successful `compute_distance`
    #[error("No distances computed yet: call compute_distance first")]
    NoPriorComputation,
    /// The last run finished without ever discovering this cell
    #[error("Cell {0} was not discovered by the last computation")]
    Undiscovered(Cell),
}
