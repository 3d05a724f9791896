//! Loads the grid once and solves every configured run in order

use crate::config::{Config, RunSpec};
use crate::error::CliError;
use chiton_paths::{Cell, Cost, ShortestPathEngine, WeightedGrid};
use chrono::{TimeDelta, Utc};
use tracing::{debug, info};

/// Shortest path found by one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// Size of the (expanded) grid
    pub width: usize,
    pub height: usize,
    pub start: Cell,
    pub end: Cell,
    pub cost: Cost,
    /// Start to end, inclusive
    pub path: Vec<Cell>,
    /// Cells finalized before the search stopped
    pub visited: usize,
}

/// Result of one run with timing information
#[derive(Debug)]
pub struct SolverResult {
    pub label: String,
    pub multiplier: usize,
    pub answer: Result<Solution, CliError>,
    /// Set on the first result only; the grid file is parsed once for all runs
    pub parse_duration: Option<TimeDelta>,
    pub expand_duration: TimeDelta,
    pub solve_duration: TimeDelta,
}

/// Sequential runner over the configured runs
pub struct Executor<'a> {
    config: &'a Config,
}

impl<'a> Executor<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Parse the input file, then expand and solve once per run.
    ///
    /// # Returns
    /// * `Ok(Vec<SolverResult>)` - One result per run; failures are recorded per result
    /// * `Err(CliError::Grid)` - The input file is missing or malformed
    pub fn execute(&self) -> Result<Vec<SolverResult>, CliError> {
        let parse_start = Utc::now();
        let base = WeightedGrid::from_file(&self.config.input)?;
        let mut parse_duration = Some(Utc::now() - parse_start);
        info!(
            width = base.width(),
            height = base.height(),
            runs = self.config.runs.len(),
            "loaded base grid"
        );

        Ok(self
            .config
            .runs
            .iter()
            .map(|run| self.solve(&base, run, parse_duration.take()))
            .collect())
    }

    fn solve(
        &self,
        base: &WeightedGrid,
        run: &RunSpec,
        parse_duration: Option<TimeDelta>,
    ) -> SolverResult {
        let expand_start = Utc::now();
        let grid = base.expand(run.multiplier);
        let expand_duration = Utc::now() - expand_start;

        let (answer, solve_duration) = match grid {
            Ok(grid) => {
                debug!(label = %run.label, width = grid.width(), height = grid.height(), "solving");
                let solve_start = Utc::now();
                let answer = self.shortest_path(&grid);
                (answer, Utc::now() - solve_start)
            }
            Err(e) => (Err(e.into()), TimeDelta::zero()),
        };

        SolverResult {
            label: run.label.clone(),
            multiplier: run.multiplier,
            answer,
            parse_duration,
            expand_duration,
            solve_duration,
        }
    }

    fn shortest_path(&self, grid: &WeightedGrid) -> Result<Solution, CliError> {
        let start = self.config.start.unwrap_or(grid.top_left());
        let end = self.config.end.unwrap_or(grid.bottom_right());

        let mut engine = ShortestPathEngine::new(grid);
        let cost = engine.compute_distance(start, end)?;
        let path = engine.path_to(end)?;

        Ok(Solution {
            width: grid.width(),
            height: grid.height(),
            start,
            end,
            cost,
            path,
            visited: engine.visited_count().unwrap_or_default(),
        })
    }
}
