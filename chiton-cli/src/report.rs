//! Path report file for solved runs
//!
//! Each solved run becomes a block:
//!
//! ```text
//! cost: 7
//! path: 0, 3, 6, 7, 8
//! ```
//!
//! When more than one run is written, every block is preceded by a `[<label>]` line.

use crate::error::ReportError;
use crate::executor::SolverResult;
use itertools::Itertools;
use std::fs;
use std::path::Path;

/// Render the report for all successful results
pub fn render(results: &[SolverResult]) -> String {
    let solved: Vec<_> = results
        .iter()
        .filter_map(|r| r.answer.as_ref().ok().map(|solution| (&r.label, solution)))
        .collect();
    let labelled = solved.len() > 1;

    let mut report = String::new();
    for (label, solution) in solved {
        if labelled {
            report.push_str(&format!("[{}]\n", label));
        }
        report.push_str(&format!("cost: {}\n", solution.cost));
        report.push_str(&format!("path: {}\n", solution.path.iter().join(", ")));
    }
    report
}

/// Write the report, creating parent directories if needed
pub fn write(path: &Path, results: &[SolverResult]) -> Result<(), ReportError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| {
            ReportError::DirCreation(format!("Failed to create {}: {}", parent.display(), e))
        })?;
    }

    fs::write(path, render(results))?;
    Ok(())
}
