//! Chiton Risk Map Library
//!
//! Lowest-risk path search over a grid of digit risk levels (Advent of Code 2021, day 15).
//! A [`WeightedGrid`] holds the cost of entering each cell and, optionally, the tiled
//! version of a base map. A [`ShortestPathEngine`] runs Dijkstra's algorithm over it.
//!
//! # Quick Example
//!
//! ```
//! use chiton_paths::{ShortestPathEngine, WeightedGrid};
//!
//! let grid: WeightedGrid = "116\n138\n213\n".parse().unwrap();
//! let mut engine = ShortestPathEngine::new(&grid);
//!
//! assert_eq!(engine.compute_distance(0, 8).unwrap(), 7);
//! assert_eq!(engine.path_to(8).unwrap(), vec![0, 3, 6, 7, 8]);
//! ```
//!
//! # Key Concepts
//!
//! ## Cells and weights
//!
//! A cell is the flat index `x + y * width`. Its weight (`0..=9`) is charged when a path
//! enters it, so the starting cell is free.
//!
//! ## Tiling
//!
//! [`WeightedGrid::expand`] repeats the grid `multiplier` times in both directions. Tile
//! `(tx, ty)` adds `tx + ty` to every weight, wrapping from 9 back to 1.
//!
//! ## Custom graphs
//!
//! The engine works with any [`Adjacency`] implementation. [`WeightedGrid`] is the only one
//! shipped here; tests use hand-built graphs to exercise disconnected layouts.

mod engine;
mod error;
mod grid;
mod traits;

pub use engine::ShortestPathEngine;
pub use error::{GridError, PathError};
pub use grid::{MAX_WEIGHT, WeightedGrid, tile_weight};
pub use traits::{Adjacency, Edge};

/// Flat cell index, `x + y * width`
pub type Cell = usize;

/// Cost of entering a single cell
pub type Weight = u8;

/// Accumulated path cost
pub type Cost = u64;
