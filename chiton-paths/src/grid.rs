//! Weighted grid with a precomputed orthogonal adjacency table

use crate::error::GridError;
use crate::traits::{Adjacency, Edge};
use crate::{Cell, Weight};
use itertools::iproduct;
use std::fmt;
use std::fs;
use std::path::Path;
use std::slice::ChunksExact;
use std::str::FromStr;
use tracing::debug;

/// Highest weight a cell may carry
pub const MAX_WEIGHT: Weight = 9;

/// Weight of a cell copied into the tile at offset `tx + ty`.
///
/// Increments by the offset and wraps from 9 back to 1. Offset 0 returns the weight as-is.
pub fn tile_weight(weight: Weight, offset: usize) -> Weight {
    if offset == 0 {
        return weight;
    }
    let max = usize::from(MAX_WEIGHT);
    ((usize::from(weight) + max - 1 + offset) % max) as Weight + 1
}

/// Inline list of at most four neighbors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NeighborList {
    len: u8,
    edges: [Edge; 4],
}

impl NeighborList {
    const EMPTY: Self = Self {
        len: 0,
        edges: [Edge { to: 0, weight: 0 }; 4],
    };

    fn push(&mut self, edge: Edge) {
        self.edges[usize::from(self.len)] = edge;
        self.len += 1;
    }

    fn as_slice(&self) -> &[Edge] {
        &self.edges[..usize::from(self.len)]
    }
}

/// Rectangular grid of entry costs.
///
/// Weights are stored row-major; the adjacency table is derived once on construction and
/// never changes afterward. Movement is orthogonal only, with no wraparound at the borders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedGrid {
    width: usize,
    height: usize,
    weights: Vec<Weight>,
    adjacency: Vec<NeighborList>,
}

impl WeightedGrid {
    /// Build a grid from rows of weights
    ///
    /// # Returns
    /// * `Ok(WeightedGrid)` - All rows share one non-zero length and every weight is in `0..=9`
    /// * `Err(GridError::MalformedInput)` - Ragged rows, out-of-range weight, or no cells at all
    pub fn build<I, R>(rows: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[Weight]>,
    {
        let mut width = None;
        let mut height = 0;
        let mut weights = Vec::new();

        for (y, row) in rows.into_iter().enumerate() {
            let row = row.as_ref();
            match width {
                None => width = Some(row.len()),
                Some(expected) if expected != row.len() => {
                    return Err(GridError::MalformedInput(format!(
                        "row {} has {} cells, expected {}",
                        y + 1,
                        row.len(),
                        expected
                    )));
                }
                Some(_) => {}
            }
            if let Some(x) = row.iter().position(|&w| w > MAX_WEIGHT) {
                return Err(GridError::MalformedInput(format!(
                    "row {}, column {}: weight {} is outside 0..={}",
                    y + 1,
                    x + 1,
                    row[x],
                    MAX_WEIGHT
                )));
            }
            weights.extend_from_slice(row);
            height += 1;
        }

        match width {
            Some(width) if width > 0 => Ok(Self::from_weights(width, height, weights)),
            _ => Err(GridError::MalformedInput("grid has no cells".to_string())),
        }
    }

    /// Read and parse a grid file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, GridError> {
        let path = path.as_ref();
        let input = fs::read_to_string(path).map_err(|source| GridError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let grid: Self = input.parse()?;
        debug!(
            width = grid.width,
            height = grid.height,
            path = %path.display(),
            "loaded grid"
        );
        Ok(grid)
    }

    /// Tile this grid `multiplier` times to the right and downward.
    ///
    /// The result is `(width * multiplier) x (height * multiplier)`; see [`tile_weight`] for
    /// how each tile's weights are derived.
    pub fn expand(&self, multiplier: usize) -> Result<Self, GridError> {
        let (Some(width), Some(height)) = (
            self.width.checked_mul(multiplier),
            self.height.checked_mul(multiplier),
        ) else {
            return Err(GridError::InvalidMultiplier(multiplier));
        };
        if multiplier == 0 || width.checked_mul(height).is_none() {
            return Err(GridError::InvalidMultiplier(multiplier));
        }
        if multiplier == 1 {
            return Ok(self.clone());
        }

        debug!(
            width = self.width,
            height = self.height,
            multiplier,
            "expanding grid"
        );
        let weights = iproduct!(0..multiplier, 0..self.height, 0..multiplier, 0..self.width)
            .map(|(ty, y, tx, x)| tile_weight(self.weights[x + y * self.width], tx + ty))
            .collect();

        Ok(Self::from_weights(width, height, weights))
    }

    fn from_weights(width: usize, height: usize, weights: Vec<Weight>) -> Self {
        let edge = |x: usize, y: usize| {
            let to = x + y * width;
            Edge {
                to,
                weight: weights[to],
            }
        };

        let adjacency = iproduct!(0..height, 0..width)
            .map(|(y, x)| {
                let mut list = NeighborList::EMPTY;
                if y > 0 {
                    list.push(edge(x, y - 1));
                }
                if y + 1 < height {
                    list.push(edge(x, y + 1));
                }
                if x > 0 {
                    list.push(edge(x - 1, y));
                }
                if x + 1 < width {
                    list.push(edge(x + 1, y));
                }
                list
            })
            .collect();

        Self {
            width,
            height,
            weights,
            adjacency,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Always false: construction rejects empty grids
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Weight charged for entering `cell`
    pub fn weight(&self, cell: Cell) -> Option<Weight> {
        self.weights.get(cell).copied()
    }

    /// Orthogonal neighbors of `cell` (up, down, left, right), each paired with its own weight
    ///
    /// # Panics
    /// If `cell` is outside the grid.
    pub fn neighbors(&self, cell: Cell) -> &[Edge] {
        self.adjacency[cell].as_slice()
    }

    pub fn cell_at(&self, x: usize, y: usize) -> Option<Cell> {
        (x < self.width && y < self.height).then(|| x + y * self.width)
    }

    /// `(x, y)` of a flat index
    pub fn coords(&self, cell: Cell) -> (usize, usize) {
        (cell % self.width, cell / self.width)
    }

    pub fn top_left(&self) -> Cell {
        0
    }

    pub fn bottom_right(&self) -> Cell {
        self.len() - 1
    }

    /// Weights row by row, top to bottom
    pub fn rows(&self) -> ChunksExact<'_, Weight> {
        self.weights.chunks_exact(self.width)
    }
}

impl Adjacency for WeightedGrid {
    fn cell_count(&self) -> usize {
        self.len()
    }

    fn neighbors(&self, cell: Cell) -> &[Edge] {
        WeightedGrid::neighbors(self, cell)
    }
}

impl FromStr for WeightedGrid {
    type Err = GridError;

    /// Parse lines of ASCII digits. Trailing whitespace on any line and trailing blank lines
    /// are ignored.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let rows = input
            .trim_end()
            .lines()
            .map(str::trim_end)
            .enumerate()
            .map(|(y, line)| {
                line.chars()
                    .enumerate()
                    .map(|(x, c)| {
                        c.to_digit(10).map(|d| d as Weight).ok_or_else(|| {
                            GridError::MalformedInput(format!(
                                "line {}, column {}: expected a digit, found {:?}",
                                y + 1,
                                x + 1,
                                c
                            ))
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::build(rows)
    }
}

impl fmt::Display for WeightedGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for weight in row {
                write!(f, "{}", weight)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
