//! Error types for the CLI

use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Grid loading or tiling error
    #[error("Grid error: {0}")]
    Grid(#[from] chiton_paths::GridError),

    /// Shortest-path error
    #[error("Path error: {0}")]
    Path(#[from] chiton_paths::PathError),

    /// Report file error
    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    /// Some runs failed; their errors were already printed
    #[error("{0} run(s) failed")]
    RunsFailed(usize),
}

/// Report-writing errors
#[derive(Error, Debug)]
pub enum ReportError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Report directory creation failed
    #[error("Report directory creation failed: {0}")]
    DirCreation(String),
}
