//! Dijkstra shortest-path engine
//!
//! The frontier is a binary heap of `(distance, cell)` entries with lazy deletion: a cell may
//! be pushed again when a shorter distance is found, and entries popped after the cell was
//! finalized are skipped. The search stops as soon as the target is popped.
//!
//! Node state lives in a flat arena indexed by cell, allocated fresh for every run. The
//! `previous` field of each node is a cell index, so path reconstruction is a walk over
//! that arena.

use crate::error::PathError;
use crate::traits::Adjacency;
use crate::{Cell, Cost, WeightedGrid};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::iter;
use tracing::{debug, instrument, trace};


/// Visited-cell interval between progress traces
const PROGRESS_INTERVAL: usize = 10_000;

#[derive(Debug, Clone, Copy, Default)]
struct NodeState {
    /// Tentative distance from the start; `None` until discovered
    distance: Option<Cost>,
    /// Set once the distance is final
    visited: bool,
    previous: Option<Cell>,
}

/// Frontier entry, reversed so `BinaryHeap` (max-heap) pops the smallest distance first.
/// Ties go to the lower cell index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FrontierEntry {
    distance: Cost,
    cell: Cell,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .cmp(&self.distance)
            .then_with(|| other.cell.cmp(&self.cell))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Node table of the most recent successful run
#[derive(Debug)]
struct Run {
    start: Cell,
    end: Cell,
    visited: usize,
    nodes: Vec<NodeState>,
}

/// Single-source, single-target shortest-path search over a borrowed graph.
///
/// The graph is never mutated, so one grid can back any number of sequential runs. Only the
/// node table of the last successful [`compute_distance`](Self::compute_distance) is kept;
/// [`path_to`](Self::path_to) and [`get_distance`](Self::get_distance) read from it.
///
/// # Example
///
/// ```
/// use chiton_paths::{PathError, ShortestPathEngine, WeightedGrid};
///
/// let grid: WeightedGrid = "19\n11\n".parse().unwrap();
/// let mut engine = ShortestPathEngine::new(&grid);
///
/// assert_eq!(engine.path_to(3), Err(PathError::NoPriorComputation));
/// assert_eq!(engine.compute_distance_default().unwrap(), 2);
/// assert_eq!(engine.path_to(3).unwrap(), vec![0, 2, 3]);
/// ```
pub struct ShortestPathEngine<'g, G: Adjacency + ?Sized = WeightedGrid> {
    graph: &'g G,
    last_run: Option<Run>,
}

impl<'g, G: Adjacency + ?Sized> ShortestPathEngine<'g, G> {
    pub fn new(graph: &'g G) -> Self {
        Self {
            graph,
            last_run: None,
        }
    }

    /// Lowest total weight of the cells entered on a path from `start` to `end`.
    ///
    /// The start cell's own weight is not charged. Any previous run is discarded first, so
    /// a failed call leaves the engine with no prior computation.
    ///
    /// # Returns
    /// * `Ok(Cost)` - Minimal path cost
    /// * `Err(PathError::InvalidCell)` - `start` or `end` is not a cell of the graph
    /// * `Err(PathError::UnreachableTarget)` - The frontier emptied before `end` was reached
    #[instrument(level = "debug", skip(self))]
    pub fn compute_distance(&mut self, start: Cell, end: Cell) -> Result<Cost, PathError> {
        self.last_run = None;
        let cell_count = self.graph.cell_count();
        self.check_cell(start)?;
        self.check_cell(end)?;

        let mut nodes = vec![NodeState::default(); cell_count];
        nodes[start].distance = Some(0);
        let mut frontier = BinaryHeap::new();
        frontier.push(FrontierEntry {
            distance: 0,
            cell: start,
        });
        let mut visited = 0;

        while let Some(FrontierEntry {
            distance,
            cell: current,
        }) = frontier.pop()
        {
            // stale: a shorter entry for this cell was already finalized
            if nodes[current].visited {
                continue;
            }
            nodes[current].visited = true;
            visited += 1;

            if current == end {
                break;
            }
            if visited % PROGRESS_INTERVAL == 0 {
                trace!(visited, cell_count, current, distance, "search progress");
            }

            for edge in self.graph.neighbors(current) {
                let Some(neighbor) = nodes.get_mut(edge.to) else {
                    continue;
                };
                if neighbor.visited {
                    continue;
                }
                let candidate = distance + Cost::from(edge.weight);
                if neighbor.distance.is_none_or(|known| candidate < known) {
                    neighbor.distance = Some(candidate);
                    neighbor.previous = Some(current);
                    frontier.push(FrontierEntry {
                        distance: candidate,
                        cell: edge.to,
                    });
                }
            }
        }

        let total = match nodes[end] {
            NodeState {
                visited: true,
                distance: Some(total),
                ..
            } => total,
            _ => {
                debug!(visited, cell_count, "frontier exhausted before reaching target");
                return Err(PathError::UnreachableTarget { start, end });
            }
        };
        debug!(visited, cell_count, total, "search finished");

        self.last_run = Some(Run {
            start,
            end,
            visited,
            nodes,
        });
        Ok(total)
    }

    /// [`compute_distance`](Self::compute_distance) from the first cell (top-left of a grid)
    /// to the last one (bottom-right)
    pub fn compute_distance_default(&mut self) -> Result<Cost, PathError> {
        let last = self.graph.cell_count().saturating_sub(1);
        self.compute_distance(0, last)
    }

    /// Cells from the last run's start to `end`, both inclusive.
    ///
    /// For the run's own target this is a shortest path. Other discovered cells yield the
    /// best path known when the search stopped.
    pub fn path_to(&self, end: Cell) -> Result<Vec<Cell>, PathError> {
        let run = self.last_run()?;
        self.check_cell(end)?;
        if run.nodes[end].distance.is_none() {
            return Err(PathError::Undiscovered(end));
        }

        let mut path: Vec<Cell> =
            iter::successors(Some(end), |&cell| run.nodes[cell].previous).collect();
        path.reverse();
        Ok(path)
    }

    /// Distance to `end` recorded by the last run
    pub fn get_distance(&self, end: Cell) -> Result<Cost, PathError> {
        let run = self.last_run()?;
        self.check_cell(end)?;
        run.nodes[end].distance.ok_or(PathError::Undiscovered(end))
    }

    pub fn last_start(&self) -> Option<Cell> {
        self.last_run.as_ref().map(|run| run.start)
    }

    pub fn last_end(&self) -> Option<Cell> {
        self.last_run.as_ref().map(|run| run.end)
    }

    /// Number of cells finalized by the last run
    pub fn visited_count(&self) -> Option<usize> {
        self.last_run.as_ref().map(|run| run.visited)
    }

    fn last_run(&self) -> Result<&Run, PathError> {
        self.last_run.as_ref().ok_or(PathError::NoPriorComputation)
    }

    fn check_cell(&self, cell: Cell) -> Result<(), PathError> {
        let cell_count = self.graph.cell_count();
        if cell < cell_count {
            Ok(())
        } else {
            Err(PathError::InvalidCell { cell, cell_count })
        }
    }
}
